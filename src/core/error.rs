//! Error handling for the frontgen core.
//!
//! This module defines the main error type `Error` used by the registry and
//! project detection, along with a convenient `Result` type alias.

use std::path::PathBuf;

use thiserror::Error;

/// Result type for core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for core operations
#[derive(Debug, Error)]
pub enum Error {
    /// Type key not present in the template registry
    #[error("invalid type '{key}' specified; must be one of: {valid_keys}")]
    UnknownElementType { key: String, valid_keys: String },

    /// Working directory does not look like a front-end project root
    #[error("must be run in the root dir of a react project (no src directory in {})", .0.display())]
    MissingProjectMarker(PathBuf),
}
