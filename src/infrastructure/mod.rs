//! Infrastructure layer - concrete implementations of application ports

pub mod output;

pub use output::*;
