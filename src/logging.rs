//! Stderr logging bridge.
//!
//! Routes all `log::warn!()` etc. to stderr, keeping diagnostics separate
//! from the annotated report on stdout. Level precedence:
//!
//! 1. `--log-level` CLI flag
//! 2. `EOLMARK_LOG` environment variable
//! 3. `log_level` in the config file (applied later by `main`)

use eolmark_config::LogLevel;
use log::{Log, Metadata, Record};

struct StderrLogger;

static LOGGER: StderrLogger = StderrLogger;

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        eprintln!("{:5} {}: {}", record.level(), record.target(), record.args());
    }

    fn flush(&self) {}
}

/// Resolve the effective startup log level.
///
/// The config file's value is not known yet at install time; `main`
/// re-applies it afterwards unless the CLI or environment already chose.
pub fn resolve_level(cli: Option<LogLevel>, fallback: LogLevel) -> LogLevel {
    if let Some(level) = cli {
        return level;
    }
    if let Ok(value) = std::env::var("EOLMARK_LOG") {
        match value.parse::<LogLevel>() {
            Ok(level) => return level,
            Err(e) => eprintln!("eolmark: ignoring EOLMARK_LOG: {e}"),
        }
    }
    fallback
}

/// Install the stderr logger at `level`. Later calls are no-ops
/// (`log::set_logger` only succeeds once per process).
pub fn init(level: LogLevel) {
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level.to_level_filter());
    }
}
