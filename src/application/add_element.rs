//! Use case for adding an element to a front-end project

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::application::{
    AddElementResponse, ApplicationError, OutputService, validate_element_name,
};
use crate::core::config::GeneratorConfig;
use crate::core::templates::TemplateRegistry;
use crate::core::workspace::ProjectRoot;
use crate::generation::{RealName, render};

/// Use case for scaffolding one element
pub struct AddElementUseCase {
    registry: &'static TemplateRegistry,
    output_service: Arc<dyn OutputService>,
}

impl AddElementUseCase {
    pub fn new(registry: &'static TemplateRegistry, output_service: Arc<dyn OutputService>) -> Self {
        Self {
            registry,
            output_service,
        }
    }

    pub async fn execute(
        &self,
        config: &GeneratorConfig,
    ) -> Result<AddElementResponse, ApplicationError> {
        // 1. Validate caller input before touching the filesystem
        validate_element_name(&config.element_name)?;
        let bundle = self.registry.resolve(&config.element_type)?;
        let project = ProjectRoot::detect(&config.project_dir)?;

        // 2. Derive the real name once for the whole bundle
        let kind = bundle.kind;
        let real_name = RealName::derive(&config.element_name, bundle.capitalize);
        debug!(kind = %kind, real_name = %real_name, "Resolved element");

        // 3. Render all patterns and anchor the element at the project root
        let mut element = render(bundle, &real_name);
        element.root_dir = project.path().join(&element.root_dir);

        // 4. Write
        let report = self.output_service.materialize(&element).await?;
        if report.is_complete() {
            info!(
                kind = %kind,
                path = %report.root_dir.display(),
                files = report.written.len(),
                "Element created"
            );
        } else {
            warn!(
                kind = %kind,
                path = %report.root_dir.display(),
                failed = report.failed.len(),
                "Element created with file errors"
            );
        }

        Ok(AddElementResponse {
            kind,
            real_name: real_name.to_string(),
            report,
        })
    }
}
