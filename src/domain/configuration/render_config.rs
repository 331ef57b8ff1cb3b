//! Render configuration domain model.

use std::path::PathBuf;

use serde::Deserialize;
use url::Url;

use crate::domain::{AppError, TextEncoding};

/// Default remote rendering endpoint.
pub const DEFAULT_SERVICE_URL: &str = "http://www.websequencediagrams.com";

/// Run-wide configuration. Built once before any job and never mutated.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RenderConfig {
    /// Directory holding diagram sources.
    #[serde(default = "default_diagram_dir")]
    pub source_directory: PathBuf,
    /// Directory receiving rendered images.
    #[serde(default = "default_diagram_dir")]
    pub output_directory: PathBuf,
    /// Diagram style name, inserted into the request body verbatim.
    #[serde(default = "default_style")]
    pub style: String,
    /// Encoding of source files and of the percent-encoded message.
    #[serde(default)]
    pub encoding: TextEncoding,
    /// Service API version.
    #[serde(default = "default_api_version")]
    pub api_version: u32,
    /// HTTP proxy host for the render request.
    #[serde(default)]
    pub proxy_address: Option<String>,
    /// HTTP proxy port for the render request.
    #[serde(default)]
    pub proxy_port: Option<u16>,
    /// Keep sources after a successful render instead of deleting them.
    #[serde(default)]
    pub keep_sources: bool,
    /// Rendering service endpoint.
    #[serde(default = "default_service_url")]
    pub service_url: Url,
    /// Per-request timeout in seconds. Unset means wait indefinitely.
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            source_directory: default_diagram_dir(),
            output_directory: default_diagram_dir(),
            style: default_style(),
            encoding: TextEncoding::default(),
            api_version: default_api_version(),
            proxy_address: None,
            proxy_port: None,
            keep_sources: false,
            service_url: default_service_url(),
            timeout_secs: None,
        }
    }
}

/// Resolved HTTP proxy endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProxySettings {
    pub address: String,
    pub port: u16,
}

impl ProxySettings {
    pub fn url(&self) -> String {
        format!("http://{}:{}", self.address, self.port)
    }
}

impl RenderConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.timeout_secs == Some(0) {
            return Err(AppError::InvalidConfig("timeout_secs must be greater than 0".to_string()));
        }
        if !matches!(self.service_url.scheme(), "http" | "https") {
            return Err(AppError::InvalidConfig(format!(
                "service_url must use http or https: {}",
                self.service_url
            )));
        }
        Ok(())
    }

    /// Proxy for the render request: both port and a non-blank address are required.
    pub fn proxy(&self) -> Option<ProxySettings> {
        let port = self.proxy_port?;
        let address = self.proxy_address.as_deref()?.trim();
        if address.is_empty() {
            return None;
        }
        Some(ProxySettings { address: address.to_string(), port })
    }
}

fn default_diagram_dir() -> PathBuf {
    PathBuf::from("sequence-diagrams")
}

fn default_style() -> String {
    "default".to_string()
}

fn default_api_version() -> u32 {
    1
}

fn default_service_url() -> Url {
    Url::parse(DEFAULT_SERVICE_URL).expect("Default service URL must be valid")
}
