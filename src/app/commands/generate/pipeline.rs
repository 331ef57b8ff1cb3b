//! Per-file render pipeline.

use crate::domain::{ArtifactReference, RenderConfig, RenderError, RenderJob, RenderRequest};
use crate::ports::DiagramService;

/// Render one job: post the diagram, locate the artifact, download it to the
/// job's destination.
pub fn render_one(
    job: &RenderJob,
    config: &RenderConfig,
    service: &impl DiagramService,
) -> Result<(), RenderError> {
    let body = RenderRequest::new(job.source_text.as_str(), config).form_body(config.encoding)?;

    let response = service.render(&body)?;
    let reference = ArtifactReference::extract(&response)?;
    tracing::debug!(%reference, destination = %job.destination_path.display(), "Fetching artifact");

    let bytes = service.fetch_artifact(&reference, &job.destination_path)?;
    tracing::debug!(bytes, destination = %job.destination_path.display(), "Artifact written");
    Ok(())
}
