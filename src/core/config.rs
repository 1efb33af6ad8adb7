//! Runtime configuration for a single generator invocation

use std::path::PathBuf;

/// Settings gathered from the command line for one `add` run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Directory expected to be the project root
    pub project_dir: PathBuf,
    /// Registry key selecting the template bundle
    pub element_type: String,
    /// Raw element name as typed by the user
    pub element_name: String,
}

impl GeneratorConfig {
    pub fn new(
        project_dir: impl Into<PathBuf>,
        element_type: impl Into<String>,
        element_name: impl Into<String>,
    ) -> Self {
        Self {
            project_dir: project_dir.into(),
            element_type: element_type.into(),
            element_name: element_name.into(),
        }
    }
}
