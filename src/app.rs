//! Application driver: wires CLI options, configuration, documents, and
//! the inspection pipeline together.

use crate::cli::RuntimeOptions;
use crate::document::Document;
use crate::inspector::{Inspection, inspect};
use crate::markers::{self, FileReport, RenderOptions};
use crate::watch;
use anyhow::{Context, Result};
use eolmark_config::Config;
use std::io::{self, IsTerminal, Read, Write};

/// Run the tool and return the process exit code: 0 when every inspected
/// document is clean, 1 when any has inconsistent line endings.
pub fn run(options: &RuntimeOptions, config: &Config) -> Result<i32> {
    if options.watch {
        return watch::run_watch(options, config);
    }

    let documents = load_documents(options)?;
    let inspections: Vec<Inspection> = documents
        .iter()
        .map(|document| inspect(document, config, options.expect))
        .collect();

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if options.json {
        let reports: Vec<FileReport<'_>> = documents
            .iter()
            .zip(&inspections)
            .map(|(document, inspection)| {
                FileReport::new(document, options.expect.unwrap_or(document.eol), inspection)
            })
            .collect();
        serde_json::to_writer_pretty(&mut out, &reports).context("Failed to write JSON report")?;
        writeln!(&mut out)?;
    } else {
        for (document, inspection) in documents.iter().zip(&inspections) {
            emit(document, inspection, config, options, &mut out)?;
        }
    }
    out.flush()?;

    let any_inconsistent = inspections
        .iter()
        .any(|inspection| inspection.report().is_some_and(|r| !r.is_clean()));
    Ok(if any_inconsistent { 1 } else { 0 })
}

/// Load every requested document, or stdin when no files were given.
fn load_documents(options: &RuntimeOptions) -> Result<Vec<Document>> {
    if options.files.is_empty() {
        let mut text = String::new();
        io::stdin()
            .read_to_string(&mut text)
            .context("Failed to read stdin")?;
        Ok(vec![Document::from_text(text)])
    } else {
        options
            .files
            .iter()
            .map(|path| Document::open(path))
            .collect()
    }
}

/// Render one inspection outcome as text (or a single JSON object, in
/// watch mode's event stream).
pub(crate) fn emit(
    document: &Document,
    inspection: &Inspection,
    config: &Config,
    options: &RuntimeOptions,
    out: &mut impl Write,
) -> Result<()> {
    let expected = options.expect.unwrap_or(document.eol);

    if options.json {
        let report = FileReport::new(document, expected, inspection);
        serde_json::to_writer(&mut *out, &report).context("Failed to write JSON report")?;
        writeln!(out)?;
        return Ok(());
    }

    let render = RenderOptions {
        color: !options.no_color && io::stdout().is_terminal(),
        show_consistent: config.show_consistent_markers,
    };

    match inspection {
        Inspection::Report { text, report } => {
            if !options.summary {
                markers::render_annotated(text, report, config, &render, out)?;
            }
            markers::render_summary(&document.display_name(), report, expected, out)?;
        }
        Inspection::Skipped {
            line_count,
            max_lines,
        } => {
            markers::render_skipped(&document.display_name(), *line_count, *max_lines, out)?;
        }
    }
    Ok(())
}
