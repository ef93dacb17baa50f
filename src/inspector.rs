//! Per-document inspection pipeline.
//!
//! One invocation runs the size guard, text refresh, scan, and classify
//! steps to completion and returns. Nothing is cached between
//! invocations; a document-change event simply runs the pipeline again.

use crate::document::Document;
use crate::provider::refresh_text;
use eolmark_config::Config;
use eolmark_scan::{DominantStyle, ScanReport, classify, scan};

/// Outcome of inspecting one document.
#[derive(Debug, Clone, PartialEq)]
pub enum Inspection {
    /// The document was scanned and classified. Carries the exact text
    /// that was scanned (which may be the raw disk content rather than
    /// the buffer) so the renderer slices lines from the same bytes the
    /// offsets refer to.
    Report { text: String, report: ScanReport },
    /// The document exceeded the size ceiling and was not scanned.
    /// No markers is a safe degraded state.
    Skipped { line_count: usize, max_lines: usize },
}

impl Inspection {
    /// The report, when the document was actually scanned.
    pub fn report(&self) -> Option<&ScanReport> {
        match self {
            Inspection::Report { report, .. } => Some(report),
            Inspection::Skipped { .. } => None,
        }
    }
}

/// Run the scan-and-classify pipeline over `document`.
///
/// `expect` overrides the document's declared style when given.
pub fn inspect(document: &Document, config: &Config, expect: Option<DominantStyle>) -> Inspection {
    let line_count = document.line_count();
    if line_count > config.max_lines {
        log::warn!(
            "Skipping {}: {} lines exceeds the {}-line ceiling",
            document.display_name(),
            line_count,
            config.max_lines
        );
        return Inspection::Skipped {
            line_count,
            max_lines: config.max_lines,
        };
    }

    let (text, source) = refresh_text(document);
    let dominant = expect.unwrap_or(document.eol);
    log::debug!(
        "Scanning {} ({} bytes from {:?}, expecting {})",
        document.display_name(),
        text.len(),
        source,
        dominant
    );

    let text = text.into_owned();
    let report = classify(scan(&text), dominant);
    Inspection::Report { text, report }
}
