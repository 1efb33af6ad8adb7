//! Front-end project root detection

use std::path::{Path, PathBuf};
use tracing::debug;

use crate::core::error::{Error, Result};

/// Directory whose presence marks a project root
pub const PROJECT_MARKER: &str = "src";

/// A directory verified to be the root of a front-end project
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectRoot {
    path: PathBuf,
}

impl ProjectRoot {
    /// Accepts `dir` when it contains a `src` directory.
    ///
    /// A plain file named `src` does not count.
    pub fn detect(dir: &Path) -> Result<Self> {
        let marker = dir.join(PROJECT_MARKER);
        debug!(marker = %marker.display(), "Looking for project marker");

        if marker.is_dir() {
            Ok(Self {
                path: dir.to_path_buf(),
            })
        } else {
            Err(Error::MissingProjectMarker(dir.to_path_buf()))
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
