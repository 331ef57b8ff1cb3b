//! Remote diagram rendering port definition.

use std::path::Path;

use crate::domain::{ArtifactReference, RenderError};

/// Port for the remote rendering service.
pub trait DiagramService {
    /// Post a form-encoded render request and return the response text with
    /// line breaks removed.
    fn render(&self, form_body: &str) -> Result<String, RenderError>;

    /// Download the referenced artifact into `destination`, returning the
    /// number of bytes written.
    fn fetch_artifact(
        &self,
        reference: &ArtifactReference,
        destination: &Path,
    ) -> Result<u64, RenderError>;
}
