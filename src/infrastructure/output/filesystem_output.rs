//! Filesystem-based output service implementation

use async_trait::async_trait;
use std::path::Path;
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::{debug, error, info};

use crate::application::{ApplicationError, FileFailure, MaterializeReport, OutputService};
use crate::generation::RenderedElement;

/// Mode for generated files on Unix
pub const FILE_MODE: u32 = 0o644;

/// Output service that writes elements to the local filesystem
pub struct FileSystemOutputService;

impl FileSystemOutputService {
    pub fn new() -> Self {
        Self
    }

    /// Create or truncate `path` and write `content` to it
    async fn write_file(path: &Path, content: &str) -> std::io::Result<()> {
        let mut options = fs::OpenOptions::new();
        options.write(true).create(true).truncate(true);
        #[cfg(unix)]
        options.mode(FILE_MODE);

        let mut file = options.open(path).await?;
        file.write_all(content.as_bytes()).await?;
        file.flush().await?;
        Ok(())
    }
}

#[async_trait]
impl OutputService for FileSystemOutputService {
    async fn materialize(
        &self,
        element: &RenderedElement,
    ) -> Result<MaterializeReport, ApplicationError> {
        let root = &element.root_dir;

        // Directory failure aborts before any file is written
        debug!(path = %root.display(), "Creating element directory");
        fs::create_dir_all(root).await.map_err(|e| {
            error!(path = %root.display(), error = %e, "Failed to create element directory");
            ApplicationError::DirectoryCreation {
                path: root.clone(),
                source: e,
            }
        })?;

        let mut report = MaterializeReport::new(root.clone());
        for file in &element.files {
            let path = root.join(&file.file_name);
            match Self::write_file(&path, &file.content).await {
                Ok(()) => {
                    info!(path = %path.display(), "Wrote file");
                    report.written.push(path);
                }
                Err(e) => {
                    error!(
                        file = %file.file_name,
                        error = %e,
                        "An error occurred while creating file"
                    );
                    report.failed.push(FileFailure {
                        path,
                        reason: e.to_string(),
                    });
                }
            }
        }

        Ok(report)
    }
}

impl Default for FileSystemOutputService {
    fn default() -> Self {
        Self::new()
    }
}
