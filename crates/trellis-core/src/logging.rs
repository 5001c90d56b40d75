//! Logging setup built on `tracing-subscriber`.

use tracing_subscriber::EnvFilter;

use crate::config::Config;

/// Install the global fmt subscriber using the default [`Config`].
pub fn init() {
    init_with_config(&Config::default());
}

/// Install the global fmt subscriber.
///
/// `RUST_LOG` takes precedence over `config.log_filter` when set. Calling
/// this more than once is harmless; later calls are ignored.
pub fn init_with_config(config: &Config) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_filter.as_str()));

    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
