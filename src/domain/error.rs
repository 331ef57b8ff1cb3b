use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Library-wide error type for wsdgen operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// A configuration value failed validation.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Explicitly requested config file does not exist.
    #[error("Config file not found: {}", .0.display())]
    ConfigFileMissing(PathBuf),

    /// Character encoding label is not recognised.
    #[error("Unknown character encoding '{0}'")]
    UnknownEncoding(String),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),

    /// A single render job failed outside of a batch.
    #[error(transparent)]
    Render(#[from] RenderError),
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    /// Provide an `io::ErrorKind`-like view for callers that only care about the category.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::Io(err) => err.kind(),
            AppError::Configuration(_)
            | AppError::InvalidConfig(_)
            | AppError::UnknownEncoding(_)
            | AppError::TomlParseError(_) => io::ErrorKind::InvalidInput,
            AppError::ConfigFileMissing(_) => io::ErrorKind::NotFound,
            AppError::Render(err) => err.kind(),
        }
    }
}

/// Failure of a single render job. Never aborts the rest of a batch.
#[derive(Debug, Error)]
pub enum RenderError {
    /// Source file could not be opened, read, or decoded.
    #[error("Failed to read source {}: {source}", .path.display())]
    SourceRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Diagram text cannot be represented in the configured charset.
    #[error("Cannot encode diagram text as {encoding}: {details}")]
    Encoding { encoding: String, details: String },

    /// Network or proxy failure on the render or artifact connection.
    #[error("Connection to {url} failed: {details}")]
    Connection { url: String, details: String },

    /// Service answered with a non-success status.
    #[error("Service at {url} returned HTTP {status}")]
    UnexpectedStatus { url: String, status: u16 },

    /// Response did not carry an artifact reference.
    #[error("Malformed service response: {0}")]
    MalformedResponse(String),

    /// Composed artifact URL is invalid.
    #[error("Malformed artifact URL '{url}': {source}")]
    MalformedUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    /// Destination image could not be created or written.
    #[error("Failed to write {}: {source}", .path.display())]
    DestinationWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl RenderError {
    pub(crate) fn source_read(path: impl Into<PathBuf>, source: io::Error) -> Self {
        RenderError::SourceRead { path: path.into(), source }
    }

    pub(crate) fn destination_write(path: impl Into<PathBuf>, source: io::Error) -> Self {
        RenderError::DestinationWrite { path: path.into(), source }
    }

    pub(crate) fn connection(url: impl Into<String>, details: impl ToString) -> Self {
        RenderError::Connection { url: url.into(), details: details.to_string() }
    }

    pub fn kind(&self) -> io::ErrorKind {
        match self {
            RenderError::SourceRead { source, .. }
            | RenderError::DestinationWrite { source, .. } => source.kind(),
            RenderError::Encoding { .. }
            | RenderError::MalformedResponse(_)
            | RenderError::MalformedUrl { .. } => io::ErrorKind::InvalidData,
            RenderError::Connection { .. } | RenderError::UnexpectedStatus { .. } => {
                io::ErrorKind::Other
            }
        }
    }
}
