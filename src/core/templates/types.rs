//! Template bundle definitions.
//!
//! A bundle describes the complete output for one element kind: the directory
//! the element lives in and the ordered list of files written into it. All
//! patterns may contain `%s` slots that receive the element's real name.

use super::kind::ElementKind;

/// One file emitted by a bundle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileTemplate {
    /// File name pattern, relative to the bundle's root directory
    pub file_name: &'static str,
    /// File content pattern
    pub content: &'static str,
}

/// Complete output description for one element kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TemplateBundle {
    /// Element kind this bundle scaffolds
    pub kind: ElementKind,
    /// Root directory pattern, relative to the project root
    pub root_dir: &'static str,
    /// Whether the raw element name is title-cased before substitution
    pub capitalize: bool,
    /// Files written into the root directory, in order
    pub files: &'static [FileTemplate],
}

impl TemplateBundle {
    /// File name patterns in declaration order
    pub fn file_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.files.iter().map(|f| f.file_name)
    }
}
