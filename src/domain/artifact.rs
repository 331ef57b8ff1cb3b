//! Locating the rendered artifact in a service response.

use std::fmt;

use url::Url;

use crate::domain::RenderError;

const TOKEN_MARKER: &str = "?png=";

/// Reference to a rendered image, e.g. `?png=mscKTO107`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactReference(String);

impl ArtifactReference {
    /// Extract the reference from a render response body.
    ///
    /// The token runs from `?png=` up to the next `"`.
    pub fn extract(response: &str) -> Result<Self, RenderError> {
        let start = response.find(TOKEN_MARKER).ok_or_else(|| {
            RenderError::MalformedResponse(format!("no '{TOKEN_MARKER}' token in response"))
        })?;
        let rest = &response[start..];
        let end = rest.find('"').ok_or_else(|| {
            RenderError::MalformedResponse(format!(
                "unterminated '{TOKEN_MARKER}' token in response"
            ))
        })?;
        Ok(Self(rest[..end].to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Absolute download URL: `<service>/<token>`.
    pub fn resolve(&self, service_url: &Url) -> Result<Url, RenderError> {
        let raw = format!("{}/{}", service_url.as_str().trim_end_matches('/'), self.0);
        Url::parse(&raw).map_err(|source| RenderError::MalformedUrl { url: raw, source })
    }
}

impl fmt::Display for ArtifactReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Join response lines without their line terminators (`\n`, `\r` or `\r\n`).
pub fn join_response_lines(body: &str) -> String {
    body.split(['\r', '\n']).collect()
}
