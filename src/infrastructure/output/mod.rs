//! Output service implementations

pub mod filesystem_output;

pub use filesystem_output::*;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::{ApplicationError, OutputService};
    use crate::generation::RenderedElement;
    use crate::generation::renderer::RenderedFile;
    use std::path::PathBuf;
    use tempfile::TempDir;
    use tracing_test::traced_test;

    fn element(root: PathBuf) -> RenderedElement {
        RenderedElement {
            root_dir: root,
            files: vec![
                RenderedFile {
                    file_name: "index.js".to_string(),
                    content: "export * from './cart'".to_string(),
                },
                RenderedFile {
                    file_name: "cart.js".to_string(),
                    content: "const cart = () => {}".to_string(),
                },
            ],
        }
    }

    fn names(paths: &[PathBuf]) -> Vec<String> {
        paths
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect()
    }

    #[tokio::test]
    async fn test_materialize_creates_nested_directory_and_files() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let root = temp_dir.path().join("src/redux/reducers/cart");
        let output_service = FileSystemOutputService::new();

        let report = output_service
            .materialize(&element(root.clone()))
            .await
            .expect("materialize should succeed");

        assert!(report.is_complete());
        assert_eq!(names(&report.written), vec!["index.js", "cart.js"]);
        assert!(root.is_dir());

        let content = std::fs::read_to_string(root.join("cart.js")).expect("Failed to read cart.js");
        assert_eq!(content, "const cart = () => {}");
    }

    #[tokio::test]
    async fn test_materialize_is_idempotent_and_overwrites() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let root = temp_dir.path().join("out");
        std::fs::create_dir_all(&root).unwrap();
        std::fs::write(root.join("cart.js"), "stale content that is much longer").unwrap();

        let output_service = FileSystemOutputService::new();
        output_service.materialize(&element(root.clone())).await.unwrap();
        let report = output_service.materialize(&element(root.clone())).await.unwrap();

        assert!(report.is_complete());
        let content = std::fs::read_to_string(root.join("cart.js")).unwrap();
        assert_eq!(content, "const cart = () => {}");
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_materialize_file_mode() {
        use std::os::unix::fs::PermissionsExt;

        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let root = temp_dir.path().join("out");
        FileSystemOutputService::new()
            .materialize(&element(root.clone()))
            .await
            .unwrap();

        let mode = std::fs::metadata(root.join("index.js"))
            .expect("Failed to get metadata")
            .permissions()
            .mode();
        // umask may only clear bits
        assert_eq!(mode & 0o777 & !FILE_MODE, 0);
        assert_ne!(mode & 0o400, 0);
    }

    #[tokio::test]
    async fn test_directory_failure_aborts() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let blocker = temp_dir.path().join("src");
        std::fs::write(&blocker, "a file, not a directory").unwrap();

        let err = FileSystemOutputService::new()
            .materialize(&element(blocker.join("components/Nav")))
            .await
            .unwrap_err();

        assert!(matches!(err, ApplicationError::DirectoryCreation { .. }));
        assert!(!blocker.join("components").exists());
    }

    #[tokio::test]
    #[traced_test]
    async fn test_file_failure_is_reported_and_processing_continues() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let root = temp_dir.path().join("out");
        // A directory where the first file should go makes that write fail
        std::fs::create_dir_all(root.join("index.js")).unwrap();

        let report = FileSystemOutputService::new()
            .materialize(&element(root.clone()))
            .await
            .expect("file failures are not fatal");

        assert!(!report.is_complete());
        assert_eq!(names(&report.written), vec!["cart.js"]);
        assert_eq!(report.failed.len(), 1);
        assert!(report.failed[0].path.ends_with("index.js"));
        assert!(root.join("cart.js").is_file());
        assert!(logs_contain("An error occurred while creating file"));
        assert!(logs_contain("index.js"));
    }
}
