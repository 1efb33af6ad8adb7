//! Port interfaces for the application layer

use async_trait::async_trait;

use crate::application::{ApplicationError, MaterializeReport};
use crate::generation::RenderedElement;

/// Service for writing a rendered element to its destination
#[async_trait]
pub trait OutputService: Send + Sync {
    /// Create the element directory and write every file into it.
    ///
    /// Fails only when the directory cannot be created; individual file
    /// failures are recorded in the returned report.
    async fn materialize(
        &self,
        element: &RenderedElement,
    ) -> Result<MaterializeReport, ApplicationError>;
}
