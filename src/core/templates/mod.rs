//! Template system for element scaffolding.
//!
//! The template set is fixed at compile time:
//! - `kind`: the element kinds and their registry keys
//! - `types`: bundle and file template definitions
//! - `builtin`: the literal bundles for components, reducers and actions
//! - `registry`: the process-wide key lookup

pub mod builtin;
pub mod kind;
pub mod registry;
pub mod types;

pub use kind::*;
pub use registry::*;
pub use types::*;
