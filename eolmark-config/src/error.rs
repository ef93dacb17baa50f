//! Typed error variants for the eolmark-config crate.
//!
//! These are exposed so library consumers can match on specific failure
//! modes instead of opaque `anyhow` strings. `Config::load` and
//! `Config::save` still return `anyhow::Result` at the boundary;
//! `ConfigError` values remain downcastable from the returned error.

use thiserror::Error;

/// Errors that can occur when loading, saving, or validating configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// An I/O error occurred reading or writing the config file.
    #[error("I/O error reading config: {0}")]
    Io(#[from] std::io::Error),

    /// The config file contained invalid YAML that could not be parsed.
    #[error("YAML parse error in config: {0}")]
    Parse(#[from] serde_yaml_ng::Error),

    /// A field value failed semantic validation.
    ///
    /// The inner string describes which field is invalid and why.
    #[error("config validation error: {0}")]
    Validation(String),
}
