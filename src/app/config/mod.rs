//! Configuration loading for a render run.
//!
//! Precedence, lowest first: built-in defaults, the TOML config file, then
//! command-line overrides. The result is validated once and stays immutable
//! for the rest of the run.

mod load_config;
mod overrides;

pub use load_config::{DEFAULT_CONFIG_FILE, load_config, parse_config_content};
pub use overrides::ConfigOverrides;
