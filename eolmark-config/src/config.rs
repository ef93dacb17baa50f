//! Configuration loading, saving, and default values.

use crate::color::Color;
use crate::error::ConfigError;
use crate::types::LogLevel;

use anyhow::Result;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Substitute `${VAR_NAME}` patterns in a string with environment variable values.
///
/// - `${VAR}` is replaced with the value of the environment variable `VAR`.
/// - `${VAR:-default}` produces `default` when the variable is unset.
/// - If the variable is not set and no default is given, the placeholder is
///   left unchanged.
/// - `$${VAR}` (doubled dollar sign) is an escape and produces the literal
///   `${VAR}`.
///
/// Applied to the raw YAML config string before deserialization, so all
/// string-typed config values (colors included) benefit from substitution.
pub fn substitute_variables(input: &str) -> String {
    // Hide escaped `$${` behind a placeholder that cannot match the regex.
    let escaped_placeholder = "\x00ESC_DOLLAR\x00";
    let working = input.replace("$${", escaped_placeholder);

    let re = Regex::new(r"\$\{([A-Za-z_][A-Za-z0-9_]*)(?::-([^}]*))?}").expect("invalid regex");

    let result = re.replace_all(&working, |caps: &regex::Captures| {
        let var_name = &caps[1];
        match std::env::var(var_name) {
            Ok(val) => val,
            Err(_) => caps
                .get(2)
                .map(|m| m.as_str().to_string())
                .unwrap_or_else(|| caps[0].to_string()),
        }
    });

    result.replace(escaped_placeholder, "${")
}

/// Configuration for the line-ending inspector.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// Marker color for terminators that match the expected style
    #[serde(default = "crate::defaults::default_marker_color")]
    pub default_marker_color: Color,

    /// Marker color for terminators that deviate from the expected style
    #[serde(default = "crate::defaults::inconsistent_marker_color")]
    pub inconsistent_marker_color: Color,

    /// Documents with more lines than this are skipped entirely
    #[serde(default = "crate::defaults::max_lines")]
    pub max_lines: usize,

    /// When false, annotate mode marks only inconsistent lines
    #[serde(default = "crate::defaults::bool_true")]
    pub show_consistent_markers: bool,

    /// Log verbosity (overridden by --log-level and EOLMARK_LOG)
    #[serde(default)]
    pub log_level: LogLevel,

    /// Debounce window for watch mode, in milliseconds
    #[serde(default = "crate::defaults::watch_debounce_ms")]
    pub watch_debounce_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_marker_color: crate::defaults::default_marker_color(),
            inconsistent_marker_color: crate::defaults::inconsistent_marker_color(),
            max_lines: crate::defaults::max_lines(),
            show_consistent_markers: crate::defaults::bool_true(),
            log_level: LogLevel::default(),
            watch_debounce_ms: crate::defaults::watch_debounce_ms(),
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: override the document-size ceiling.
    pub fn with_max_lines(mut self, max_lines: usize) -> Self {
        self.max_lines = max_lines;
        self
    }

    /// Builder: override both marker colors.
    pub fn with_marker_colors(mut self, default: Color, inconsistent: Color) -> Self {
        self.default_marker_color = default;
        self.inconsistent_marker_color = inconsistent;
        self
    }

    /// Builder: override the log level.
    pub fn with_log_level(mut self, level: LogLevel) -> Self {
        self.log_level = level;
        self
    }

    /// Semantic validation beyond what serde can express.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_lines == 0 {
            return Err(ConfigError::Validation(
                "max_lines must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Load the config from the default location, creating it with default
    /// values on first run.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path())
    }

    /// Load the config from an explicit path.
    ///
    /// A missing file is not an error: defaults are written there and
    /// returned, so the user has a file to edit next time.
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            log::info!("Loading config from {}", path.display());
            let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
            let contents = substitute_variables(&contents);
            let config: Config = serde_yaml_ng::from_str(&contents).map_err(ConfigError::Parse)?;
            config.validate()?;
            Ok(config)
        } else {
            log::info!("Config file not found, creating default at {}", path.display());
            let config = Self::default();
            if let Err(e) = config.save_to(path) {
                log::error!("Failed to save default config: {e}");
                return Err(e);
            }
            Ok(config)
        }
    }

    /// Save the config to the default location.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path())
    }

    /// Save the config to an explicit path, creating parent directories.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(ConfigError::Io)?;
        }
        let yaml = serde_yaml_ng::to_string(self).map_err(ConfigError::Parse)?;
        fs::write(path, yaml).map_err(ConfigError::Io)?;
        Ok(())
    }

    /// Get the configuration file path (using XDG convention).
    pub fn config_path() -> PathBuf {
        Self::config_dir().join("config.yaml")
    }

    /// Get the configuration directory.
    pub fn config_dir() -> PathBuf {
        #[cfg(target_os = "windows")]
        {
            if let Some(config_dir) = dirs::config_dir() {
                config_dir.join("eolmark")
            } else {
                PathBuf::from(".")
            }
        }
        #[cfg(not(target_os = "windows"))]
        {
            // XDG convention on all platforms: ~/.config/eolmark
            if let Some(home_dir) = dirs::home_dir() {
                home_dir.join(".config").join("eolmark")
            } else {
                PathBuf::from(".")
            }
        }
    }
}
