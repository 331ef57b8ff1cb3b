//! Render request construction.

use url::form_urlencoded;

use crate::domain::{RenderConfig, RenderError, TextEncoding};

/// Parameters sent to the rendering service for one diagram.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderRequest {
    pub style: String,
    pub diagram_text: String,
    pub api_version: u32,
}

impl RenderRequest {
    pub fn new(diagram_text: impl Into<String>, config: &RenderConfig) -> Self {
        Self {
            style: config.style.clone(),
            diagram_text: diagram_text.into(),
            api_version: config.api_version,
        }
    }

    /// Build the `application/x-www-form-urlencoded` body.
    ///
    /// Only the message is percent-encoded. `style` is inserted as given, so a
    /// value containing `&` or `=` will add form fields.
    pub fn form_body(&self, encoding: TextEncoding) -> Result<String, RenderError> {
        let bytes = encoding.encode(&self.diagram_text).map_err(|details| {
            RenderError::Encoding { encoding: encoding.name().to_string(), details }
        })?;
        let message: String = form_urlencoded::byte_serialize(&bytes).collect();

        Ok(format!("style={}&message={}&apiVersion={}", self.style, message, self.api_version))
    }
}
