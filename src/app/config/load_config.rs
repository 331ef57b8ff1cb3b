//! Render configuration loading from disk.

use std::fs;
use std::path::Path;

use crate::domain::{AppError, RenderConfig};

/// Config file picked up from the working directory when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "wsdgen.toml";

/// Load the render configuration.
///
/// An explicit `path` must exist. Without one, `wsdgen.toml` in
/// `working_dir` is used when present, otherwise defaults apply.
pub fn load_config(path: Option<&Path>, working_dir: &Path) -> Result<RenderConfig, AppError> {
    let config_path = match path {
        Some(path) => {
            if !path.is_file() {
                return Err(AppError::ConfigFileMissing(path.to_path_buf()));
            }
            path.to_path_buf()
        }
        None => {
            let candidate = working_dir.join(DEFAULT_CONFIG_FILE);
            if !candidate.is_file() {
                tracing::debug!("No {} found, using defaults", DEFAULT_CONFIG_FILE);
                return Ok(RenderConfig::default());
            }
            candidate
        }
    };

    tracing::debug!(path = %config_path.display(), "Loading config");
    let content = fs::read_to_string(&config_path)?;
    parse_config_content(&content)
}

/// Parse configuration from string content.
pub fn parse_config_content(content: &str) -> Result<RenderConfig, AppError> {
    let config: RenderConfig = toml::from_str(content)?;
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[test]
    fn parses_full_config() {
        let config = parse_config_content(
            r#"
source_directory = "docs/diagrams"
output_directory = "target/diagrams"
style = "modern-blue"
encoding = "ISO-8859-1"
api_version = 2
proxy_address = "proxy.corp"
proxy_port = 3128
keep_sources = true
service_url = "http://localhost:8080"
timeout_secs = 30
"#,
        )
        .unwrap();

        assert_eq!(config.source_directory, PathBuf::from("docs/diagrams"));
        assert_eq!(config.output_directory, PathBuf::from("target/diagrams"));
        assert_eq!(config.style, "modern-blue");
        assert_eq!(config.encoding.name(), "windows-1252");
        assert_eq!(config.api_version, 2);
        assert_eq!(config.proxy().unwrap().url(), "http://proxy.corp:3128");
        assert!(config.keep_sources);
        assert_eq!(config.service_url.as_str(), "http://localhost:8080/");
        assert_eq!(config.timeout_secs, Some(30));
    }

    #[test]
    fn empty_config_uses_defaults() {
        let config = parse_config_content("").unwrap();
        assert_eq!(config.style, "default");
        assert_eq!(config.source_directory, PathBuf::from("sequence-diagrams"));
    }

    #[test]
    fn rejects_unknown_fields() {
        let err = parse_config_content("colour = \"blue\"").unwrap_err();
        assert!(matches!(err, AppError::TomlParseError(_)));
    }

    #[test]
    fn rejects_unknown_encoding() {
        let err = parse_config_content("encoding = \"EBCDIC-XYZ\"").unwrap_err();
        assert!(err.to_string().contains("EBCDIC-XYZ"));
    }

    #[test]
    fn rejects_zero_timeout() {
        let err = parse_config_content("timeout_secs = 0").unwrap_err();
        assert!(matches!(err, AppError::InvalidConfig(_)));
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("custom.toml");
        let err = load_config(Some(&missing), dir.path()).unwrap_err();
        assert!(matches!(err, AppError::ConfigFileMissing(p) if p == missing));
    }

    #[test]
    fn picks_up_default_file_from_working_dir() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(DEFAULT_CONFIG_FILE), "style = \"napkin\"\n").unwrap();

        let config = load_config(None, dir.path()).unwrap();
        assert_eq!(config.style, "napkin");
    }

    #[test]
    fn falls_back_to_defaults_without_file() {
        let dir = TempDir::new().unwrap();
        let config = load_config(None, dir.path()).unwrap();
        assert_eq!(config.api_version, 1);
    }
}
