//! Unit tests for the bulk rewrite engine

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "This is a test module")]
mod tests {
    use bpinit::rewrite::{ReplacementSpec, rewrite};
    use bpinit::system::System as _;
    use bpinit::system::mock::MockSystem;
    use bpinit::system::real::RealSystem;
    use std::path::{Path, PathBuf};

    fn template_specs() -> Vec<ReplacementSpec> {
        vec![
            ReplacementSpec::new("ha_integration_domain", "my_thing", "integration domain"),
            ReplacementSpec::new("Integration Blueprint", "My Thing", "display title"),
        ]
    }

    #[test]
    fn dry_run_reports_counts_without_writing() {
        let system = MockSystem::new()
            .with_file(
                "/repo/manifest.json",
                b"{\"domain\": \"ha_integration_domain\"}",
            )
            .unwrap()
            .with_file(
                "/repo/README.md",
                b"# Integration Blueprint\n\nIntegration Blueprint docs.\n",
            )
            .unwrap();

        let report = rewrite(&system, Path::new("/repo"), &template_specs(), &[], true).unwrap();

        assert_eq!(report.count_for(Path::new("manifest.json")), Some(1));
        assert_eq!(report.count_for(Path::new("README.md")), Some(2));
        assert_eq!(report.total(), 3);

        // Dry run leaves contents byte-identical
        assert_eq!(
            system
                .read_to_string(Path::new("/repo/manifest.json"))
                .unwrap(),
            "{\"domain\": \"ha_integration_domain\"}"
        );
        assert_eq!(
            system.read_to_string(Path::new("/repo/README.md")).unwrap(),
            "# Integration Blueprint\n\nIntegration Blueprint docs.\n"
        );
    }

    #[test]
    fn real_run_substitutes_and_reports_identically() {
        let system = MockSystem::new()
            .with_file(
                "/repo/manifest.json",
                b"{\"domain\": \"ha_integration_domain\"}",
            )
            .unwrap()
            .with_file(
                "/repo/README.md",
                b"# Integration Blueprint\n\nIntegration Blueprint docs.\n",
            )
            .unwrap();

        let report = rewrite(&system, Path::new("/repo"), &template_specs(), &[], false).unwrap();

        assert_eq!(report.total(), 3);
        assert_eq!(
            system
                .read_to_string(Path::new("/repo/manifest.json"))
                .unwrap(),
            "{\"domain\": \"my_thing\"}"
        );
        assert_eq!(
            system.read_to_string(Path::new("/repo/README.md")).unwrap(),
            "# My Thing\n\nMy Thing docs.\n"
        );
    }

    #[test]
    fn specs_apply_sequentially_in_declared_order() {
        let system = MockSystem::new()
            .with_file("/repo/a.txt", b"alpha")
            .unwrap();
        let specs = vec![
            ReplacementSpec::new("alpha", "beta", "first"),
            ReplacementSpec::new("beta", "gamma", "second"),
        ];

        let report = rewrite(&system, Path::new("/repo"), &specs, &[], false).unwrap();

        // The second spec re-matches text introduced by the first
        assert_eq!(report.total(), 2);
        assert_eq!(
            system.read_to_string(Path::new("/repo/a.txt")).unwrap(),
            "gamma"
        );
    }

    #[test]
    fn dry_run_previews_sequential_rematches() {
        let system = MockSystem::new()
            .with_file("/repo/a.txt", b"alpha")
            .unwrap();
        let specs = vec![
            ReplacementSpec::new("alpha", "beta", "first"),
            ReplacementSpec::new("beta", "gamma", "second"),
        ];

        let report = rewrite(&system, Path::new("/repo"), &specs, &[], true).unwrap();

        assert_eq!(report.total(), 2);
        assert_eq!(
            system.read_to_string(Path::new("/repo/a.txt")).unwrap(),
            "alpha"
        );
    }

    #[test]
    fn excluded_paths_are_never_touched() {
        let system = MockSystem::new()
            .with_file("/repo/keep.txt", b"ha_integration_domain")
            .unwrap()
            .with_file("/repo/scripts/initialize.sh", b"ha_integration_domain")
            .unwrap();

        let excludes = vec![PathBuf::from("scripts/initialize.sh")];
        let report = rewrite(
            &system,
            Path::new("/repo"),
            &template_specs(),
            &excludes,
            false,
        )
        .unwrap();

        assert_eq!(report.total(), 1);
        assert_eq!(
            system
                .read_to_string(Path::new("/repo/scripts/initialize.sh"))
                .unwrap(),
            "ha_integration_domain"
        );
    }

    #[test]
    fn binary_files_are_skipped() {
        let system = MockSystem::new()
            .with_file("/repo/blob.bin", &[0, 1, 2, 0, 0xFF])
            .unwrap()
            .with_file("/repo/text.txt", b"ha_integration_domain")
            .unwrap();

        let report =
            rewrite(&system, Path::new("/repo"), &template_specs(), &[], false).unwrap();

        assert_eq!(report.total(), 1);
        assert!(report.count_for(Path::new("blob.bin")).is_none());
    }

    #[test]
    fn empty_search_is_rejected() {
        let system = MockSystem::new().with_dir("/repo").unwrap();
        let specs = vec![ReplacementSpec::new("", "value", "broken")];

        let result = rewrite(&system, Path::new("/repo"), &specs, &[], true);
        assert!(result.is_err());
    }

    #[test]
    fn gitignored_files_are_never_modified() {
        let system = RealSystem::new();
        let temp_dir = tempfile::TempDir::new().unwrap();
        let root = temp_dir.path();

        system
            .write(&root.join(".gitignore"), b"ignored.txt\n")
            .unwrap();
        system
            .write(&root.join("ignored.txt"), b"ha_integration_domain")
            .unwrap();
        system
            .write(&root.join("tracked.txt"), b"ha_integration_domain")
            .unwrap();

        let report = rewrite(&system, root, &template_specs(), &[], false).unwrap();

        assert_eq!(report.count_for(Path::new("tracked.txt")), Some(1));
        assert!(report.count_for(Path::new("ignored.txt")).is_none());
        assert_eq!(
            system.read_to_string(&root.join("ignored.txt")).unwrap(),
            "ha_integration_domain"
        );
        assert_eq!(
            system.read_to_string(&root.join("tracked.txt")).unwrap(),
            "my_thing"
        );
    }
}
