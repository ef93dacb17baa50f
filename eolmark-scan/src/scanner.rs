//! Terminator scanner: locates every line terminator in a text buffer.
//!
//! The scan is a single left-to-right pass implementing the alternation
//! `(\r(?!\n)) | (\r?\n)`: a `\r\n` pair is one CRLF unit, a `\r` not
//! followed by `\n` is a bare CR, and a `\n` not already consumed as part
//! of a CRLF is an LF. Matches never overlap.

use crate::kind::TerminatorKind;

/// One line terminator found in document text.
///
/// Occurrences are produced in ascending `byte_offset` order, created
/// fresh on every scan, and carry no identity beyond their fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TerminatorOccurrence {
    /// Byte position in the source text where the terminator begins.
    pub byte_offset: usize,
    /// Which terminator sequence was matched.
    pub kind: TerminatorKind,
    /// Zero-based index of the line this terminator ends. The Nth
    /// terminator in scan order ends the Nth line, so this is simply the
    /// occurrence's ordinal position.
    pub line_index: usize,
}

impl TerminatorOccurrence {
    /// Byte position just past the terminator (start of the next line).
    pub fn end_offset(&self) -> usize {
        self.byte_offset + self.kind.byte_len()
    }
}

/// Scan `text` for line terminators.
///
/// Pure function of the input: no side effects, never fails, and returns
/// an empty vec for text with no CR or LF bytes (single-line or empty
/// documents). Embedded NUL bytes and malformed-but-decoded input need no
/// special handling; only `\r` and `\n` bytes participate, and both are
/// always single-byte UTF-8 units.
pub fn scan(text: &str) -> Vec<TerminatorOccurrence> {
    let bytes = text.as_bytes();
    let mut occurrences = Vec::new();
    let mut i = 0;

    while i < bytes.len() {
        let kind = match bytes[i] {
            b'\r' => {
                if i + 1 < bytes.len() && bytes[i + 1] == b'\n' {
                    TerminatorKind::Crlf
                } else {
                    TerminatorKind::Cr
                }
            }
            b'\n' => TerminatorKind::Lf,
            _ => {
                i += 1;
                continue;
            }
        };

        occurrences.push(TerminatorOccurrence {
            byte_offset: i,
            kind,
            line_index: occurrences.len(),
        });
        i += kind.byte_len();
    }

    occurrences
}
