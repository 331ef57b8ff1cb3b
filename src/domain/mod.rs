pub mod artifact;
pub mod configuration;
pub mod error;
pub mod render_job;
pub mod render_request;
pub mod text_encoding;

pub use artifact::{ArtifactReference, join_response_lines};
pub use configuration::{DEFAULT_SERVICE_URL, ProxySettings, RenderConfig};
pub use error::{AppError, RenderError};
pub use render_job::{IMAGE_EXTENSION, RenderJob, destination_for};
pub use render_request::RenderRequest;
pub use text_encoding::TextEncoding;
