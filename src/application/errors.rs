//! Application layer error types

use std::path::PathBuf;

use thiserror::Error;

/// Application layer errors
#[derive(Error, Debug)]
pub enum ApplicationError {
    #[error("Validation error: {0}")]
    ValidationError(#[from] ValidationError),

    #[error(transparent)]
    CoreError(#[from] crate::core::Error),

    #[error("unable to create directory {}: {source}", .path.display())]
    DirectoryCreation {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Validation errors for requests
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ValidationError {
    #[error("please provide element name")]
    EmptyElementName,

    #[error("Invalid element name '{0}': must be a single directory name, not '.', '..' or a path")]
    InvalidElementName(String),
}
