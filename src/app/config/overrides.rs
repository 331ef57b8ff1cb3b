//! Command-line overrides applied on top of the loaded configuration.

use std::path::PathBuf;

use url::Url;

use crate::domain::{AppError, RenderConfig, TextEncoding};

/// Values supplied on the command line. `None` keeps the loaded value.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub source_directory: Option<PathBuf>,
    pub output_directory: Option<PathBuf>,
    pub style: Option<String>,
    pub encoding: Option<String>,
    pub api_version: Option<u32>,
    pub proxy_address: Option<String>,
    pub proxy_port: Option<u16>,
    pub keep_sources: bool,
    pub service_url: Option<Url>,
    pub timeout_secs: Option<u64>,
}

impl ConfigOverrides {
    /// Apply the overrides and re-validate.
    pub fn apply(self, mut config: RenderConfig) -> Result<RenderConfig, AppError> {
        if let Some(dir) = self.source_directory {
            config.source_directory = dir;
        }
        if let Some(dir) = self.output_directory {
            config.output_directory = dir;
        }
        if let Some(style) = self.style {
            config.style = style;
        }
        if let Some(label) = self.encoding {
            config.encoding = TextEncoding::for_label(&label)?;
        }
        if let Some(version) = self.api_version {
            config.api_version = version;
        }
        if self.proxy_address.is_some() {
            config.proxy_address = self.proxy_address;
        }
        if self.proxy_port.is_some() {
            config.proxy_port = self.proxy_port;
        }
        // A flag can only switch keeping on.
        config.keep_sources |= self.keep_sources;
        if let Some(url) = self.service_url {
            config.service_url = url;
        }
        if self.timeout_secs.is_some() {
            config.timeout_secs = self.timeout_secs;
        }

        config.validate()?;
        Ok(config)
    }
}
