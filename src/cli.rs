//! Command-line interface for eolmark.
//!
//! This module handles CLI argument parsing and the config-bootstrap
//! subcommand.

use clap::{Parser, Subcommand, ValueEnum};
use eolmark_config::{Config, LogLevel};
use eolmark_scan::DominantStyle;
use std::path::PathBuf;

/// eolmark - flags inconsistent line endings with per-line markers
#[derive(Parser)]
#[command(name = "eolmark")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Files to inspect (reads stdin when empty)
    #[arg(value_name = "FILE")]
    pub files: Vec<PathBuf>,

    /// Expected line-ending style; defaults to each document's majority style
    #[arg(long, value_enum, value_name = "STYLE")]
    pub expect: Option<ExpectedStyle>,

    /// Emit reports as JSON instead of annotated lines
    #[arg(long)]
    pub json: bool,

    /// Print only the per-file summary, no per-line annotation
    #[arg(long)]
    pub summary: bool,

    /// Disable ANSI colors in annotated output
    #[arg(long)]
    pub no_color: bool,

    /// Override the configured document-size ceiling
    #[arg(long, value_name = "LINES")]
    pub max_lines: Option<usize>,

    /// Rescan files whenever they change on disk
    #[arg(long)]
    pub watch: bool,

    /// Log level (off|error|warn|info|debug|trace); takes precedence over
    /// EOLMARK_LOG and the config file
    #[arg(long, value_name = "LEVEL")]
    pub log_level: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write the default config file and exit
    InitConfig {
        /// Overwrite an existing config file
        #[arg(short, long)]
        force: bool,
    },
}

/// Expected style as spelled on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExpectedStyle {
    /// Every line should end in `\n`
    Lf,
    /// Every line should end in `\r\n`
    Crlf,
}

impl From<ExpectedStyle> for DominantStyle {
    fn from(style: ExpectedStyle) -> Self {
        match style {
            ExpectedStyle::Lf => DominantStyle::Lf,
            ExpectedStyle::Crlf => DominantStyle::Crlf,
        }
    }
}

/// Runtime options passed from CLI to the application
#[derive(Clone, Debug, Default)]
pub struct RuntimeOptions {
    /// Files to inspect; empty means read stdin
    pub files: Vec<PathBuf>,
    /// Style override for every document (None = per-document majority)
    pub expect: Option<DominantStyle>,
    /// Emit JSON reports
    pub json: bool,
    /// Summary only, no per-line annotation
    pub summary: bool,
    /// Suppress ANSI colors
    pub no_color: bool,
    /// Ceiling override
    pub max_lines: Option<usize>,
    /// Watch files for changes
    pub watch: bool,
    /// Parsed --log-level value
    pub log_level: Option<LogLevel>,
}

/// Result of CLI processing
pub enum CliResult {
    /// Continue with normal startup, with runtime options
    Continue(RuntimeOptions),
    /// Exit with the given code (subcommand completed or bad arguments)
    Exit(i32),
}

/// Process CLI arguments and handle subcommands
pub fn process_cli() -> CliResult {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::InitConfig { force }) => {
            let result = init_config(force);
            if let Err(ref e) = result {
                eprintln!("eolmark: init-config failed: {e:#}");
            }
            CliResult::Exit(if result.is_ok() { 0 } else { 1 })
        }
        None => {
            let log_level = match cli.log_level.as_deref().map(str::parse::<LogLevel>) {
                Some(Ok(level)) => Some(level),
                Some(Err(e)) => {
                    eprintln!("eolmark: {e}");
                    return CliResult::Exit(2);
                }
                None => None,
            };

            let options = RuntimeOptions {
                files: cli.files,
                expect: cli.expect.map(DominantStyle::from),
                json: cli.json,
                summary: cli.summary,
                no_color: cli.no_color,
                max_lines: cli.max_lines,
                watch: cli.watch,
                log_level,
            };
            CliResult::Continue(options)
        }
    }
}

/// Write the default config file, refusing to clobber an edited one.
fn init_config(force: bool) -> anyhow::Result<()> {
    let path = Config::config_path();

    if path.exists() && !force {
        println!("Config already exists at {}", path.display());
        println!("Use --force to overwrite it with defaults.");
        return Ok(());
    }

    Config::default().save_to(&path)?;
    println!("Wrote default config to {}", path.display());
    Ok(())
}
