//! Marker rendering: maps scan results onto terminal and JSON output.
//!
//! Annotate mode prints each document line with its terminator glyph
//! appended, colored by consistency. The glyphs sit where an editor
//! decoration would: just past the end of the line.

use crate::document::Document;
use crate::inspector::Inspection;
use eolmark_config::{Color, Config};
use eolmark_scan::{Classification, DominantStyle, ScanReport};
use serde::Serialize;
use std::io::{self, Write};

/// Reset all SGR attributes.
const SGR_RESET: &str = "\x1b[0m";

/// 24-bit SGR foreground sequence for `color`.
fn sgr_foreground(color: Color) -> String {
    format!("\x1b[38;2;{};{};{}m", color.r, color.g, color.b)
}

/// Presentation switches resolved from CLI flags and config.
#[derive(Debug, Clone, Copy)]
pub struct RenderOptions {
    /// Emit ANSI color sequences.
    pub color: bool,
    /// Mark lines whose terminator matches the expected style too.
    pub show_consistent: bool,
}

/// Print each line of `text` with its terminator marker.
pub fn render_annotated(
    text: &str,
    report: &ScanReport,
    config: &Config,
    options: &RenderOptions,
    out: &mut impl Write,
) -> io::Result<()> {
    let mut start = 0;

    for classification in &report.classifications {
        let occurrence = classification.occurrence;
        let line = &text[start..occurrence.byte_offset];
        start = occurrence.end_offset();

        let glyph = occurrence.kind.glyph();
        if classification.is_inconsistent {
            write_marker(out, line, glyph, config.inconsistent_marker_color, options)?;
        } else if options.show_consistent {
            write_marker(out, line, glyph, config.default_marker_color, options)?;
        } else {
            writeln!(out, "{line}")?;
        }
    }

    // Unterminated tail line, if any.
    if start < text.len() {
        writeln!(out, "{}", &text[start..])?;
    }

    Ok(())
}

fn write_marker(
    out: &mut impl Write,
    line: &str,
    glyph: &str,
    color: Color,
    options: &RenderOptions,
) -> io::Result<()> {
    if options.color {
        writeln!(out, "{line}{}{glyph}{SGR_RESET}", sgr_foreground(color))
    } else {
        writeln!(out, "{line}{glyph}")
    }
}

/// Print the per-file summary notice.
pub fn render_summary(
    name: &str,
    report: &ScanReport,
    expected: DominantStyle,
    out: &mut impl Write,
) -> io::Result<()> {
    if report.is_clean() {
        writeln!(
            out,
            "{name}: {} line endings, all {expected}",
            report.classifications.len()
        )
    } else {
        writeln!(
            out,
            "{name}: {} inconsistent line endings {}",
            report.inconsistent_count,
            report.sample_glyph.unwrap_or("")
        )
    }
}

/// Print the notice for a document the size guard skipped.
pub fn render_skipped(
    name: &str,
    line_count: usize,
    max_lines: usize,
    out: &mut impl Write,
) -> io::Result<()> {
    writeln!(
        out,
        "{name}: skipped ({line_count} lines exceeds ceiling of {max_lines})"
    )
}

/// JSON-serializable report for one inspected file.
#[derive(Debug, Serialize)]
pub struct FileReport<'a> {
    /// File path, or `<stdin>`.
    pub file: String,
    /// Expected style the terminators were judged against.
    pub expected: &'static str,
    /// Line count of the scanned text (or of the buffer, when skipped).
    pub line_count: usize,
    /// True when the size guard prevented scanning.
    pub skipped: bool,
    /// The ceiling that was exceeded, present only when skipped.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_lines: Option<usize>,
    pub inconsistent_count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sample_glyph: Option<&'static str>,
    /// Per-terminator classifications, absent when skipped.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub terminators: Option<&'a [Classification]>,
}

impl<'a> FileReport<'a> {
    pub fn new(
        document: &Document,
        expected: DominantStyle,
        inspection: &'a Inspection,
    ) -> Self {
        match inspection {
            Inspection::Report { report, .. } => Self {
                file: document.display_name(),
                expected: expected.display_name(),
                line_count: report.classifications.len() + 1,
                skipped: false,
                max_lines: None,
                inconsistent_count: report.inconsistent_count,
                sample_glyph: report.sample_glyph,
                terminators: Some(&report.classifications),
            },
            Inspection::Skipped {
                line_count,
                max_lines,
            } => Self {
                file: document.display_name(),
                expected: expected.display_name(),
                line_count: *line_count,
                skipped: true,
                max_lines: Some(*max_lines),
                inconsistent_count: 0,
                sample_glyph: None,
                terminators: None,
            },
        }
    }
}
