//! Application layer - orchestrates use cases and coordinates between domains

pub mod add_element;
pub mod dto;
pub mod errors;
pub mod traits;

pub use add_element::*;
pub use dto::*;
pub use errors::*;
pub use traits::*;
