//! Generation domain - turns a bundle and an element name into concrete files
//!
//! Pure string work only; nothing here touches the filesystem.

pub mod naming;
pub mod renderer;
pub mod substitution;

pub use naming::RealName;
pub use renderer::{RenderedElement, render};
