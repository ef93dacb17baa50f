//! Terminator kind and expected-style types.

use std::fmt;

/// The byte sequence that terminated a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "UPPERCASE"))]
pub enum TerminatorKind {
    /// Line Feed (Unix/Linux/macOS) - `\n`
    Lf,
    /// Carriage Return + Line Feed (Windows) - `\r\n`
    Crlf,
    /// Bare Carriage Return (classic Mac OS) - `\r` not followed by `\n`
    Cr,
    /// Anything else. Unreachable under the scanner grammar; the
    /// classifier never flags it.
    Unknown,
}

impl TerminatorKind {
    /// Marker glyph rendered at the end of the line.
    pub fn glyph(&self) -> &'static str {
        match self {
            TerminatorKind::Lf => "\u{2193}",   // ↓
            TerminatorKind::Crlf => "\u{21b5}", // ↵
            TerminatorKind::Cr => "\u{2190}",   // ←
            TerminatorKind::Unknown => "",
        }
    }

    /// Display name for logs and reports.
    pub fn display_name(&self) -> &'static str {
        match self {
            TerminatorKind::Lf => "LF",
            TerminatorKind::Crlf => "CRLF",
            TerminatorKind::Cr => "CR",
            TerminatorKind::Unknown => "Unknown",
        }
    }

    /// Width of the terminator in bytes.
    pub fn byte_len(&self) -> usize {
        match self {
            TerminatorKind::Crlf => 2,
            TerminatorKind::Lf | TerminatorKind::Cr => 1,
            TerminatorKind::Unknown => 0,
        }
    }
}

impl fmt::Display for TerminatorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// The EOL convention a document is expected to use uniformly.
///
/// Supplied by the host from its document state; never CR and never
/// unknown. A bare CR is treated as deprecated and is flagged no matter
/// which style is expected, so it can never itself be the expectation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "UPPERCASE"))]
pub enum DominantStyle {
    /// Every line should end in `\n`.
    Lf,
    /// Every line should end in `\r\n`.
    Crlf,
}

impl DominantStyle {
    /// The terminator kind that satisfies this style.
    pub fn kind(&self) -> TerminatorKind {
        match self {
            DominantStyle::Lf => TerminatorKind::Lf,
            DominantStyle::Crlf => TerminatorKind::Crlf,
        }
    }

    /// The literal terminator bytes for this style.
    pub fn as_str(&self) -> &'static str {
        match self {
            DominantStyle::Lf => "\n",
            DominantStyle::Crlf => "\r\n",
        }
    }

    /// Display name for logs and reports.
    pub fn display_name(&self) -> &'static str {
        self.kind().display_name()
    }
}

impl fmt::Display for DominantStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_glyphs() {
        assert_eq!(TerminatorKind::Lf.glyph(), "↓");
        assert_eq!(TerminatorKind::Crlf.glyph(), "↵");
        assert_eq!(TerminatorKind::Cr.glyph(), "←");
        assert_eq!(TerminatorKind::Unknown.glyph(), "");
    }

    #[test]
    fn test_byte_len_matches_literal() {
        assert_eq!(TerminatorKind::Lf.byte_len(), "\n".len());
        assert_eq!(TerminatorKind::Crlf.byte_len(), "\r\n".len());
        assert_eq!(TerminatorKind::Cr.byte_len(), "\r".len());
    }

    #[test]
    fn test_dominant_style_kind() {
        assert_eq!(DominantStyle::Lf.kind(), TerminatorKind::Lf);
        assert_eq!(DominantStyle::Crlf.kind(), TerminatorKind::Crlf);
        assert_eq!(DominantStyle::Crlf.as_str(), "\r\n");
    }

    #[test]
    fn test_display_names() {
        assert_eq!(TerminatorKind::Cr.to_string(), "CR");
        assert_eq!(DominantStyle::Crlf.to_string(), "CRLF");
    }
}
