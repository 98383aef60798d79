use std::io;

use tracing::Dispatch;
use tracing_subscriber::EnvFilter;

use crate::models::Config;

/// Build the log sink for a run.
///
/// Events go to stderr at `warn` level, or `debug` in debug mode.
/// `RUST_LOG` overrides either.
pub fn dispatch(config: &Config) -> Dispatch {
    let default_level = if config.debug_mode { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .finish();

    Dispatch::new(subscriber)
}
