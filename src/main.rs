use eolmark::cli::{self, CliResult};
use eolmark::{app, logging};
use eolmark_config::{Config, LogLevel};

fn main() {
    // Process CLI arguments first (before logging init for cleaner output)
    let options = match cli::process_cli() {
        CliResult::Exit(code) => std::process::exit(code),
        CliResult::Continue(options) => options,
    };

    // Install the stderr bridge with whatever level the CLI/env chose;
    // the config file's level is applied below once it is known.
    logging::init(logging::resolve_level(options.log_level, LogLevel::default()));

    // A broken config degrades to defaults; inspection is never blocked
    // by a bad config file, only a warning is logged.
    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            log::warn!("Failed to load config ({e:#}); using defaults");
            Config::default()
        }
    };

    if options.log_level.is_none() && std::env::var_os("EOLMARK_LOG").is_none() {
        log::set_max_level(config.log_level.to_level_filter());
    }

    let config = match options.max_lines {
        Some(max_lines) => config.with_max_lines(max_lines),
        None => config,
    };

    match app::run(&options, &config) {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("eolmark: error: {e:#}");
            std::process::exit(2);
        }
    }
}
