// Library exports for testing and the binary entry point.

/// Application version (root crate version, for use in reports and logs).
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod app;
pub mod cli;
pub mod document;
pub mod inspector;
pub mod logging;
pub mod markers;
pub mod provider;
pub mod watch;
