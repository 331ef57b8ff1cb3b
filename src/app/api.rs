//! API Facade for the application.
//!
//! Glues adapter construction and command execution together.

use crate::app::commands::generate;
use crate::services::HttpDiagramService;

pub use crate::app::commands::generate::{BatchReport, JobFailure, RenderPlanEntry};
pub use crate::domain::{AppError, RenderConfig};

/// Render every source in `config.source_directory` through the remote service.
pub fn generate(config: &RenderConfig) -> Result<BatchReport, AppError> {
    config.validate()?;
    let service = HttpDiagramService::new(config)?;
    Ok(generate::execute(config, &service))
}

/// Describe the sources and destinations of a run without performing it.
pub fn plan(config: &RenderConfig) -> Result<Vec<RenderPlanEntry>, AppError> {
    config.validate()?;
    Ok(generate::plan(config))
}
