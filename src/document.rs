//! In-memory document model.
//!
//! Stands in for an editor's document state: the text buffer, the backing
//! file if any, whether the buffer has unsaved edits, and the declared
//! expected EOL style. The expected style is fixed when the document is
//! created (the way an editor pins a document's EOL mode on open), not
//! re-derived on every scan.

use anyhow::{Context, Result};
use eolmark_scan::{DominantStyle, TerminatorKind, scan};
use std::fs;
use std::path::{Path, PathBuf};

/// A text document under inspection.
#[derive(Debug, Clone)]
pub struct Document {
    /// Backing file, if any (`None` for stdin input).
    pub path: Option<PathBuf>,
    /// Current in-memory text.
    pub buffer: String,
    /// Whether the buffer has diverged from what is on disk.
    pub dirty: bool,
    /// Expected EOL style declared for this document.
    pub eol: DominantStyle,
}

impl Document {
    /// Open a document from disk.
    ///
    /// Bytes are decoded lossily as UTF-8; line terminators are
    /// single-byte units, so replacement characters elsewhere in the text
    /// never disturb the scan.
    pub fn open(path: &Path) -> Result<Self> {
        let bytes =
            fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;
        let buffer = String::from_utf8_lossy(&bytes).into_owned();
        let eol = detect_dominant_style(&buffer);
        Ok(Self {
            path: Some(path.to_path_buf()),
            buffer,
            dirty: false,
            eol,
        })
    }

    /// Build an unbacked document (stdin or scratch text).
    pub fn from_text(text: impl Into<String>) -> Self {
        let buffer = text.into();
        let eol = detect_dominant_style(&buffer);
        Self {
            path: None,
            buffer,
            dirty: false,
            eol,
        }
    }

    /// Replace the buffer with edited text, marking the document dirty.
    pub fn edit(&mut self, text: impl Into<String>) {
        self.buffer = text.into();
        self.dirty = true;
    }

    /// Human-readable name for summaries and logs.
    pub fn display_name(&self) -> String {
        match &self.path {
            Some(path) => path.display().to_string(),
            None => "<stdin>".to_string(),
        }
    }

    /// Number of lines in the buffer, counting the line after a trailing
    /// terminator (editor convention: an empty document has one line).
    pub fn line_count(&self) -> usize {
        scan(&self.buffer).len() + 1
    }
}

/// Derive the expected style from document content: whichever of CRLF and
/// LF is in the majority, with LF winning ties and empty documents.
///
/// Bare CR never contributes to dominance: the classifier flags it
/// unconditionally, so a CR-heavy document still gets a two-valued
/// expectation.
pub fn detect_dominant_style(text: &str) -> DominantStyle {
    let mut lf_count = 0usize;
    let mut crlf_count = 0usize;

    for occurrence in scan(text) {
        match occurrence.kind {
            TerminatorKind::Lf => lf_count += 1,
            TerminatorKind::Crlf => crlf_count += 1,
            TerminatorKind::Cr | TerminatorKind::Unknown => {}
        }
    }

    if crlf_count > lf_count {
        DominantStyle::Crlf
    } else {
        DominantStyle::Lf
    }
}
