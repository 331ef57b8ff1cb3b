//! Logging setup for the CLI.

use tracing::level_filters::LevelFilter;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::domain::AppError;

/// Install the global subscriber. `RUST_LOG` takes precedence over `verbose`.
pub fn init(verbose: bool) -> Result<(), AppError> {
    let default_level = if verbose { LevelFilter::DEBUG } else { LevelFilter::INFO };
    let env_filter =
        EnvFilter::builder().with_default_directive(default_level.into()).from_env_lossy();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().compact().with_target(false).with_writer(std::io::stderr))
        .try_init()
        .map_err(|err| {
            AppError::config_error(format!("failed to install tracing subscriber: {err}"))
        })
}
