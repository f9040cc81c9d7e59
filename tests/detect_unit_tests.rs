//! Unit tests for the repository state detector

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "This is a test module")]
mod tests {
    use bpinit::detect::{RepositoryState, detect};
    use bpinit::git::GitSnapshot;
    use bpinit::system::mock::MockSystem;
    use std::path::Path;

    /// A tree exactly as the template ships it
    fn pristine_tree() -> MockSystem {
        MockSystem::new()
            .with_file(
                "/repo/custom_components/ha_integration_domain/manifest.json",
                b"{\"domain\": \"ha_integration_domain\", \"name\": \"Integration Blueprint\"}",
            )
            .unwrap()
            .with_file("/repo/README.md", b"# Integration Blueprint\n")
            .unwrap()
    }

    fn fork_snapshot(commit_count: usize) -> GitSnapshot {
        GitSnapshot {
            remote_url: Some("https://github.com/someone/my-fork.git".to_owned()),
            commit_count,
            is_dirty: false,
        }
    }

    #[test]
    fn renamed_component_dir_is_customized_regardless_of_git() {
        let system = MockSystem::new()
            .with_file(
                "/repo/custom_components/my_thing/manifest.json",
                b"{\"domain\": \"my_thing\"}",
            )
            .unwrap();
        let snapshot = fork_snapshot(1);

        let detection = detect(&system, Path::new("/repo"), Some(&snapshot)).unwrap();
        assert_eq!(detection.state, RepositoryState::Customized);
        assert!(detection.reason.contains("component directory"));
    }

    #[test]
    fn changed_manifest_domain_is_customized() {
        let system = MockSystem::new()
            .with_file(
                "/repo/custom_components/ha_integration_domain/manifest.json",
                b"{\"domain\": \"already_renamed\"}",
            )
            .unwrap();
        let snapshot = fork_snapshot(1);

        let detection = detect(&system, Path::new("/repo"), Some(&snapshot)).unwrap();
        assert_eq!(detection.state, RepositoryState::Customized);
        assert!(detection.reason.contains("already_renamed"));
    }

    #[test]
    fn rewritten_readme_heading_is_customized() {
        let system = MockSystem::new()
            .with_file(
                "/repo/custom_components/ha_integration_domain/manifest.json",
                b"{\"domain\": \"ha_integration_domain\"}",
            )
            .unwrap()
            .with_file("/repo/README.md", b"# My Own Project\n")
            .unwrap();
        let snapshot = fork_snapshot(1);

        let detection = detect(&system, Path::new("/repo"), Some(&snapshot)).unwrap();
        assert_eq!(detection.state, RepositoryState::Customized);
    }

    #[test]
    fn fork_with_single_commit_is_pristine() {
        let detection = detect(&pristine_tree(), Path::new("/repo"), Some(&fork_snapshot(1)))
            .unwrap();
        assert_eq!(detection.state, RepositoryState::Pristine);
    }

    #[test]
    fn fork_with_three_commits_is_customized() {
        let detection = detect(&pristine_tree(), Path::new("/repo"), Some(&fork_snapshot(3)))
            .unwrap();
        assert_eq!(detection.state, RepositoryState::Customized);
    }

    #[test]
    fn blueprint_named_remote_allows_two_commits() {
        let snapshot = GitSnapshot {
            remote_url: Some("git@github.com:someone/my-blueprint-fork.git".to_owned()),
            commit_count: 2,
            is_dirty: false,
        };
        let detection = detect(&pristine_tree(), Path::new("/repo"), Some(&snapshot)).unwrap();
        assert_eq!(detection.state, RepositoryState::Pristine);
    }

    #[test]
    fn blueprint_named_remote_with_history_is_customized() {
        let snapshot = GitSnapshot {
            remote_url: Some("git@github.com:someone/my-blueprint-fork.git".to_owned()),
            commit_count: 5,
            is_dirty: false,
        };
        let detection = detect(&pristine_tree(), Path::new("/repo"), Some(&snapshot)).unwrap();
        assert_eq!(detection.state, RepositoryState::Customized);
    }

    #[test]
    fn canonical_template_remote_is_pristine_with_any_history() {
        let snapshot = GitSnapshot {
            remote_url: Some(
                "https://github.com/ha-blueprint/integration-blueprint.git".to_owned(),
            ),
            commit_count: 40,
            is_dirty: false,
        };
        let detection = detect(&pristine_tree(), Path::new("/repo"), Some(&snapshot)).unwrap();
        assert_eq!(detection.state, RepositoryState::Pristine);
    }

    #[test]
    fn missing_remote_is_customized_with_remediation_hint() {
        let snapshot = GitSnapshot {
            remote_url: None,
            commit_count: 1,
            is_dirty: false,
        };
        let detection = detect(&pristine_tree(), Path::new("/repo"), Some(&snapshot)).unwrap();
        assert_eq!(detection.state, RepositoryState::Customized);
        assert!(detection.reason.contains("--force"));
    }

    #[test]
    fn no_version_control_is_customized() {
        let detection = detect(&pristine_tree(), Path::new("/repo"), None).unwrap();
        assert_eq!(detection.state, RepositoryState::Customized);
        assert!(detection.reason.contains("version control"));
    }
}
