//! Unit tests for the online availability checks, backed by mockito

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "This is a test module")]
mod tests {
    use bpinit::registry::{RegistryClient, RegistryEndpoints};

    /// Endpoints that all point at one mockito server
    fn endpoints(server: &mockito::ServerGuard) -> RegistryEndpoints {
        RegistryEndpoints {
            core_registry_base: format!("{}/core", server.url()),
            package_index_base: format!("{}/pypi", server.url()),
            community_registry_url: format!("{}/community", server.url()),
        }
    }

    /// Mock 404s for every package-name candidate of `my_thing`
    fn mock_free_package_index(server: &mut mockito::ServerGuard) -> Vec<mockito::Mock> {
        ["my_thing", "my-thing", "homeassistant-my_thing", "ha-my_thing"]
            .iter()
            .map(|candidate| {
                server
                    .mock("GET", format!("/pypi/{candidate}/json").as_str())
                    .with_status(404)
                    .create()
            })
            .collect()
    }

    #[test]
    fn clear_report_when_nothing_is_taken() {
        let mut server = mockito::Server::new();
        let _core = server
            .mock("GET", "/core/my_thing/manifest.json")
            .with_status(404)
            .create();
        let _pypi = mock_free_package_index(&mut server);
        let _community = server
            .mock("GET", "/community")
            .with_status(200)
            .with_body(r#"["other/project", "someone/else"]"#)
            .create();

        let client = RegistryClient::new(endpoints(&server)).unwrap();
        let report = client.check_domain("my_thing");

        assert!(report.is_clear());
        assert!(report.warnings.is_empty());
    }

    #[test]
    fn core_registry_hit_is_a_conflict() {
        let mut server = mockito::Server::new();
        let _core = server
            .mock("GET", "/core/my_thing/manifest.json")
            .with_status(200)
            .with_body(r#"{"domain": "my_thing"}"#)
            .create();
        let _pypi = mock_free_package_index(&mut server);
        let _community = server
            .mock("GET", "/community")
            .with_status(200)
            .with_body("[]")
            .create();

        let client = RegistryClient::new(endpoints(&server)).unwrap();
        let report = client.check_domain("my_thing");

        assert!(!report.is_clear());
        assert!(report.conflicts[0].contains("core integration"));
    }

    #[test]
    fn package_index_hit_names_the_candidate() {
        let mut server = mockito::Server::new();
        let _core = server
            .mock("GET", "/core/my_thing/manifest.json")
            .with_status(404)
            .create();
        let _free: Vec<_> = ["my_thing", "homeassistant-my_thing", "ha-my_thing"]
            .iter()
            .map(|candidate| {
                server
                    .mock("GET", format!("/pypi/{candidate}/json").as_str())
                    .with_status(404)
                    .create()
            })
            .collect();
        let _taken = server
            .mock("GET", "/pypi/my-thing/json")
            .with_status(200)
            .with_body(r#"{"info": {}}"#)
            .create();
        let _community = server
            .mock("GET", "/community")
            .with_status(200)
            .with_body("[]")
            .create();

        let client = RegistryClient::new(endpoints(&server)).unwrap();
        let report = client.check_domain("my_thing");

        assert_eq!(report.conflicts.len(), 1);
        assert!(report.conflicts[0].contains("'my-thing'"));
    }

    #[test]
    fn community_listing_match_is_a_conflict() {
        let mut server = mockito::Server::new();
        let _core = server
            .mock("GET", "/core/my_thing/manifest.json")
            .with_status(404)
            .create();
        let _pypi = mock_free_package_index(&mut server);
        let _community = server
            .mock("GET", "/community")
            .with_status(200)
            .with_body(r#"["someone/my_thing", "other/project"]"#)
            .create();

        let client = RegistryClient::new(endpoints(&server)).unwrap();
        let report = client.check_domain("my_thing");

        assert_eq!(report.conflicts.len(), 1);
        assert!(report.conflicts[0].contains("someone/my_thing"));
    }

    #[test]
    fn server_errors_degrade_to_warnings() {
        let mut server = mockito::Server::new();
        let _core = server
            .mock("GET", "/core/my_thing/manifest.json")
            .with_status(500)
            .create();
        let _pypi = mock_free_package_index(&mut server);
        let _community = server
            .mock("GET", "/community")
            .with_status(503)
            .create();

        let client = RegistryClient::new(endpoints(&server)).unwrap();
        let report = client.check_domain("my_thing");

        assert!(report.is_clear());
        assert_eq!(report.warnings.len(), 2);
        assert!(report.warnings[0].contains("inconclusive"));
    }

    #[test]
    fn unreachable_endpoints_degrade_to_warnings() {
        let endpoints = RegistryEndpoints {
            core_registry_base: "http://127.0.0.1:9/core".to_owned(),
            package_index_base: "http://127.0.0.1:9/pypi".to_owned(),
            community_registry_url: "http://127.0.0.1:9/community".to_owned(),
        };

        let client = RegistryClient::new(endpoints).unwrap();
        let report = client.check_domain("my_thing");

        assert!(report.is_clear());
        // One warning per probe: core, four package candidates, community
        assert_eq!(report.warnings.len(), 6);
    }

    #[test]
    fn unparsable_community_listing_is_a_warning() {
        let mut server = mockito::Server::new();
        let _core = server
            .mock("GET", "/core/my_thing/manifest.json")
            .with_status(404)
            .create();
        let _pypi = mock_free_package_index(&mut server);
        let _community = server
            .mock("GET", "/community")
            .with_status(200)
            .with_body("not json")
            .create();

        let client = RegistryClient::new(endpoints(&server)).unwrap();
        let report = client.check_domain("my_thing");

        assert!(report.is_clear());
        assert_eq!(report.warnings.len(), 1);
        assert!(report.warnings[0].contains("unparsable"));
    }
}
