//! Applies substitution to every pattern of a bundle

use std::path::PathBuf;

use super::naming::RealName;
use super::substitution::resolve;
use crate::core::templates::TemplateBundle;

/// A file ready to be written
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedFile {
    pub file_name: String,
    pub content: String,
}

/// Fully resolved output of one bundle
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedElement {
    /// Target directory, relative until anchored at the project root
    pub root_dir: PathBuf,
    /// Files in bundle order
    pub files: Vec<RenderedFile>,
}

/// Resolves the bundle's root directory, file names and contents.
///
/// File name and content are resolved independently, so a fixed file name
/// may still carry substituted content.
pub fn render(bundle: &TemplateBundle, real_name: &RealName) -> RenderedElement {
    let files = bundle
        .files
        .iter()
        .map(|template| RenderedFile {
            file_name: resolve(template.file_name, real_name),
            content: resolve(template.content, real_name),
        })
        .collect();

    RenderedElement {
        root_dir: PathBuf::from(resolve(bundle.root_dir, real_name)),
        files,
    }
}
