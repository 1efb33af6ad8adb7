//! Data Transfer Objects for application layer

use std::path::{Component, Path, PathBuf};

use serde::Serialize;

use crate::application::ValidationError;
use crate::core::templates::{ElementKind, TemplateRegistry};

/// Checks that a raw element name can safely become a directory name.
///
/// The name must be exactly one normal path component, so `.`, `..`, roots
/// and separators are rejected. Names with whitespace are accepted since
/// capitalization works per word.
pub fn validate_element_name(name: &str) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        return Err(ValidationError::EmptyElementName);
    }
    // `components()` drops trailing `/.`, so separators are checked directly
    let has_separator = name.contains('/') || name.contains('\\');
    let mut components = Path::new(name).components();
    let single_normal = matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    );
    if has_separator || !single_normal {
        return Err(ValidationError::InvalidElementName(name.to_string()));
    }
    Ok(())
}

/// A file that could not be written
#[derive(Debug, Clone, Serialize)]
pub struct FileFailure {
    pub path: PathBuf,
    pub reason: String,
}

/// Outcome of writing one rendered element
#[derive(Debug, Clone, Default, Serialize)]
pub struct MaterializeReport {
    /// Directory the files were written into
    pub root_dir: PathBuf,
    /// Files written successfully, in bundle order
    pub written: Vec<PathBuf>,
    /// Files that failed, in bundle order
    pub failed: Vec<FileFailure>,
}

impl MaterializeReport {
    pub fn new(root_dir: PathBuf) -> Self {
        Self {
            root_dir,
            ..Default::default()
        }
    }

    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Response from element generation
#[derive(Debug, Clone, Serialize)]
pub struct AddElementResponse {
    pub kind: ElementKind,
    pub real_name: String,
    pub report: MaterializeReport,
}

/// Description of one element type for listings
#[derive(Debug, Clone, Serialize)]
pub struct ElementTypeInfo {
    pub kind: ElementKind,
    pub keys: Vec<&'static str>,
    pub root_dir: &'static str,
    pub capitalize: bool,
    pub files: Vec<&'static str>,
}

/// Describes every element type known to `registry`
pub fn describe_types(registry: &TemplateRegistry) -> Vec<ElementTypeInfo> {
    ElementKind::all()
        .map(|kind| {
            let bundle = kind.bundle();
            ElementTypeInfo {
                kind,
                keys: registry.keys_for(kind),
                root_dir: bundle.root_dir,
                capitalize: bundle.capitalize,
                files: bundle.file_names().collect(),
            }
        })
        .collect()
}
