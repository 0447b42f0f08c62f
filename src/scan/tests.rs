#[cfg(test)]
mod tests {
    use crate::{Scanner, UNDEFINED};
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    fn write(root: &Path, relative: &str, content: &str) {
        let path = root.join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    fn fixture_tree() -> TempDir {
        let dir = TempDir::new().unwrap();
        let root = dir.path();

        write(
            root,
            "repo-a/action.yml",
            "name: Checkout Helper\nauthor: octo\ndescription: Helps out.\nruns:\n  using: composite\n  steps:\n    - uses: actions/checkout@v4\n    - name: build\n      run: make\n",
        );
        write(root, "repo-b/action.yaml", "name: [unclosed\n  broken: {\n");
        write(
            root,
            "repo-c/Dockerfile",
            "FROM alpine\nLABEL com.github.actions.name=\"Foo\"\nLABEL com.github.actions.description=\"Bar\"\n",
        );
        // Only one of the two required labels: excluded entirely.
        write(
            root,
            "repo-d/Dockerfile",
            "FROM alpine\nLABEL com.github.actions.name=\"Partial\"\n",
        );
        write(root, "repo-e/README.md", "# not a candidate\n");

        dir
    }

    #[test]
    fn test_scan_produces_one_result_per_manifest() {
        let dir = fixture_tree();
        let report = Scanner::new(dir.path()).scan();

        // Two manifests discovered, malformed one included.
        assert_eq!(report.actions.len(), 2);
        assert_eq!(report.actions[0].path, "repo-a/action.yml");
        assert_eq!(report.actions[1].path, "repo-b/action.yaml");
    }

    #[test]
    fn test_scan_valid_manifest_fields_and_steps() {
        let dir = fixture_tree();
        let report = Scanner::new(dir.path()).scan();

        let action = &report.actions[0];
        assert_eq!(action.record.name.as_deref(), Some("Checkout Helper"));
        assert_eq!(action.record.runtime.as_deref(), Some("composite"));
        assert_eq!(action.steps.referenced_actions.len(), 1);
        assert_eq!(action.steps.referenced_actions[0].action_id, "actions/checkout");
        assert_eq!(action.steps.referenced_actions[0].version_ref, "v4");
        assert_eq!(action.steps.shell_steps, vec!["build".to_string()]);
    }

    #[test]
    fn test_scan_malformed_manifest_degrades_to_defaults() {
        let dir = fixture_tree();
        let report = Scanner::new(dir.path()).scan();

        let broken = &report.actions[1];
        assert_eq!(broken.record.name.as_deref(), Some(UNDEFINED));
        assert!(broken.steps.referenced_actions.is_empty());
        assert!(broken.steps.shell_steps.is_empty());
    }

    #[test]
    fn test_scan_includes_only_label_complete_dockerfiles() {
        let dir = fixture_tree();
        let report = Scanner::new(dir.path()).scan();

        assert_eq!(report.docker_actions.len(), 1);
        let record = &report.docker_actions[0];
        assert_eq!(record.name.as_deref(), Some("Foo"));
        assert_eq!(record.description.as_deref(), Some("Bar"));
        assert_eq!(record.source_repo.as_deref(), Some("repo-c"));
    }

    #[test]
    fn test_scan_paths_are_root_relative() {
        let dir = fixture_tree();
        let report = Scanner::new(dir.path()).scan();

        for action in &report.actions {
            assert!(!action.path.starts_with('/'));
            assert!(!action.path.contains('\\'));
        }
    }

    #[test]
    fn test_scan_empty_root() {
        let dir = TempDir::new().unwrap();
        let report = Scanner::new(dir.path()).scan();
        assert!(report.actions.is_empty());
        assert!(report.docker_actions.is_empty());
    }

    #[test]
    fn test_scan_missing_root_degrades_to_empty_report() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("does-not-exist");
        let report = Scanner::new(&missing).scan();
        assert!(report.actions.is_empty());
        assert!(report.docker_actions.is_empty());
    }

    #[test]
    fn test_scan_lowercase_dockerfile_name_is_recognized() {
        let dir = TempDir::new().unwrap();
        write(
            dir.path(),
            "repo/dockerfile",
            "LABEL com.github.actions.name=\"Low\"\nLABEL com.github.actions.description=\"Case\"\n",
        );
        let report = Scanner::new(dir.path()).scan();
        assert_eq!(report.docker_actions.len(), 1);
        assert_eq!(report.docker_actions[0].name.as_deref(), Some("Low"));
    }

    #[test]
    fn test_scan_report_serializes_to_json() {
        let dir = fixture_tree();
        let report = Scanner::new(dir.path()).scan();
        let json = serde_json::to_string_pretty(&report).unwrap();
        assert!(json.contains("\"actions\""));
        assert!(json.contains("\"docker_actions\""));
        assert!(json.contains("Checkout Helper"));
    }
}
