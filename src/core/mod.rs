//! frontgen core
//!
//! Compiled-in templates, the type key registry, configuration and
//! project root detection.

pub mod config;
pub mod error;
pub mod templates;
pub mod workspace;

pub use error::Error;
