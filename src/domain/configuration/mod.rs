mod render_config;

pub use render_config::{DEFAULT_SERVICE_URL, ProxySettings, RenderConfig};
