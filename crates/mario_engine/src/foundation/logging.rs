//! Logging utilities and structured logging support

pub use log::{debug, info, warn, error, trace};

/// Initialize the logging system
///
/// Uses `info` as the default filter; `RUST_LOG` overrides it.
pub fn init() {
    init_with_filter("info");
}

/// Initialize the logging system with a custom default filter
pub fn init_with_filter(default_filter: &str) {
    let env = env_logger::Env::default().default_filter_or(default_filter);
    // A second initialisation (tests, embedding) is not an error worth surfacing.
    let _ = env_logger::Builder::from_env(env).format_timestamp(None).try_init();
}
