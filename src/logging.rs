//! Log setup for hosts embedding the editor.

use crate::config::EditorConfig;
use tracing_subscriber::EnvFilter;

/// Install a global fmt subscriber. `RUST_LOG` wins over `default_filter`.
///
/// Safe to call more than once; only the first call installs anything.
pub fn init(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}

/// `init` with the filter named in `config`.
pub fn init_from_config(config: &EditorConfig) {
    init(&config.log_filter);
}
