//! Watch mode: rescan documents when their backing files change.
//!
//! Each file gets its own debounced watcher; the loop polls them in turn
//! and re-runs the full inspection pipeline for whichever file changed.
//! There is no incremental rescan: a change event means a fresh
//! open-scan-classify pass, bounded by the same size guard as a one-shot
//! run.

use crate::app;
use crate::cli::RuntimeOptions;
use crate::document::Document;
use crate::inspector::inspect;
use anyhow::{Context, Result};
use eolmark_config::{Config, FileWatcher};
use std::io::{self, Write};
use std::path::PathBuf;
use std::time::Duration;

/// How long the poll loop sleeps when no watcher had an event.
const IDLE_SLEEP: Duration = Duration::from_millis(100);

/// Run the watch loop. Does not return under normal operation; the
/// process ends via Ctrl-C.
pub fn run_watch(options: &RuntimeOptions, config: &Config) -> Result<i32> {
    if options.files.is_empty() {
        anyhow::bail!("--watch requires at least one file argument");
    }

    let mut watchers: Vec<(FileWatcher, PathBuf)> = Vec::with_capacity(options.files.len());

    // Initial pass: report current state, then start watching.
    {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        for path in &options.files {
            let document = Document::open(path)?;
            let inspection = inspect(&document, config, options.expect);
            app::emit(&document, &inspection, config, options, &mut out)?;

            let watcher = FileWatcher::new(path, config.watch_debounce_ms)
                .with_context(|| format!("Cannot watch {}", path.display()))?;
            watchers.push((watcher, path.clone()));
        }
        out.flush()?;
    }

    log::info!("Watch mode active over {} file(s)", watchers.len());

    loop {
        let changed: Vec<&PathBuf> = watchers
            .iter()
            .filter_map(|(watcher, path)| watcher.try_recv().map(|_| path))
            .collect();

        if changed.is_empty() {
            std::thread::sleep(IDLE_SLEEP);
            continue;
        }

        let stdout = io::stdout();
        let mut out = stdout.lock();
        for path in changed {
            // The file may be mid-save or briefly gone (atomic rename);
            // skip this round and let the next event retry.
            match Document::open(path) {
                Ok(document) => {
                    let inspection = inspect(&document, config, options.expect);
                    app::emit(&document, &inspection, config, options, &mut out)?;
                }
                Err(e) => log::warn!("Could not reload {}: {e:#}", path.display()),
            }
        }
        out.flush()?;
    }
}
