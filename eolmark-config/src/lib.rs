//! Configuration system for the eolmark line-ending inspector.
//!
//! This crate provides configuration loading, saving, and default values
//! for the CLI. It includes:
//!
//! - The [`Config`] type with marker colors, document-size ceiling, and
//!   logging settings
//! - YAML persistence with `${VAR}` environment-variable substitution
//! - The [`Color`] RGB type parsed from `"#rrggbb"` strings
//! - A debounced file watcher used by watch mode (feature `watcher`)

pub mod color;
pub mod config;
pub mod defaults;
pub mod error;
mod types;
#[cfg(feature = "watcher")]
pub mod watcher;

// Re-export main types for convenience
pub use color::Color;
pub use config::{Config, substitute_variables};
pub use error::ConfigError;
pub use types::LogLevel;
#[cfg(feature = "watcher")]
pub use watcher::{FileChangeEvent, FileWatcher};
