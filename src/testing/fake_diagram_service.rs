use std::fs;
use std::path::Path;
use std::sync::{Arc, Mutex};

use crate::domain::{ArtifactReference, RenderError};
use crate::ports::DiagramService;

/// In-memory stand-in for the rendering service.
#[derive(Clone)]
pub struct FakeDiagramService {
    pub render_requests: Arc<Mutex<Vec<String>>>,
    pub fetched: Arc<Mutex<Vec<String>>>,
    pub response: String,
    pub artifact: Vec<u8>,
    /// Render requests whose body contains this text fail with a connection error.
    pub fail_when_body_contains: Option<String>,
}

impl FakeDiagramService {
    pub fn new() -> Self {
        Self {
            render_requests: Arc::new(Mutex::new(vec![])),
            fetched: Arc::new(Mutex::new(vec![])),
            response: r#"{"img": "?png=fake123", "errors": []}"#.to_string(),
            artifact: b"\x89PNG fake".to_vec(),
            fail_when_body_contains: None,
        }
    }

    pub fn with_response(mut self, response: impl Into<String>) -> Self {
        self.response = response.into();
        self
    }

    pub fn failing_on(mut self, needle: impl Into<String>) -> Self {
        self.fail_when_body_contains = Some(needle.into());
        self
    }

    pub fn get_render_requests(&self) -> Vec<String> {
        self.render_requests.lock().unwrap().clone()
    }

    pub fn get_fetched(&self) -> Vec<String> {
        self.fetched.lock().unwrap().clone()
    }
}

impl DiagramService for FakeDiagramService {
    fn render(&self, form_body: &str) -> Result<String, RenderError> {
        self.render_requests.lock().unwrap().push(form_body.to_string());
        if let Some(needle) = &self.fail_when_body_contains {
            if form_body.contains(needle.as_str()) {
                return Err(RenderError::connection("fake://render", "connection reset"));
            }
        }
        Ok(self.response.clone())
    }

    fn fetch_artifact(
        &self,
        reference: &ArtifactReference,
        destination: &Path,
    ) -> Result<u64, RenderError> {
        self.fetched.lock().unwrap().push(reference.as_str().to_string());
        fs::write(destination, &self.artifact)
            .map_err(|e| RenderError::destination_write(destination, e))?;
        Ok(self.artifact.len() as u64)
    }
}
