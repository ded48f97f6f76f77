// src/log.rs
//! Logging front-end.
//!
//! The library only emits `tracing` events; installing a subscriber is up to
//! the binary (see [`init`] under the `cli` feature).

/// Info-level logging
#[macro_export]
macro_rules! logf {
    ($($arg:tt)*) => {
        ::tracing::info!($($arg)*)
    };
}

/// Debug-level logging
#[macro_export]
macro_rules! logd {
    ($($arg:tt)*) => {
        ::tracing::debug!($($arg)*)
    };
}

/// Warn-level logging
#[macro_export]
macro_rules! logw {
    ($($arg:tt)*) => {
        ::tracing::warn!($($arg)*)
    };
}

/// Install a stderr fmt subscriber.
///
/// The filter comes from `FR_TABS_LOG` when set, otherwise `default_filter`.
#[cfg(feature = "cli")]
pub fn init(default_filter: &str) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_env(crate::config::consts::LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(default_filter));

    // A second init (tests, embedding) keeps the first subscriber.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
