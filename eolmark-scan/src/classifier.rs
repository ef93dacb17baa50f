//! Consistency classifier: labels scanned terminators against the
//! document's expected EOL style.

use crate::kind::{DominantStyle, TerminatorKind};
use crate::scanner::TerminatorOccurrence;

/// Classification of a single terminator occurrence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Classification {
    /// The occurrence that was classified.
    pub occurrence: TerminatorOccurrence,
    /// Whether this terminator deviates from the expected style.
    pub is_inconsistent: bool,
    /// Marker glyph to surface for the deviation; `None` when consistent.
    pub glyph: Option<&'static str>,
}

/// Aggregated result of classifying one document's terminators.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ScanReport {
    /// One entry per scanned occurrence, in scan order.
    pub classifications: Vec<Classification>,
    /// Number of entries with `is_inconsistent == true`.
    pub inconsistent_count: usize,
    /// Glyph of the last inconsistent occurrence seen (last-wins), used
    /// for the summary notice. `None` when the document is clean.
    pub sample_glyph: Option<&'static str>,
}

impl ScanReport {
    /// True when no terminator deviated from the expected style.
    pub fn is_clean(&self) -> bool {
        self.inconsistent_count == 0
    }
}

/// Decide whether a terminator of `kind` deviates from `dominant`.
///
/// A bare CR is never a valid modern line ending and is flagged
/// regardless of the expected style. `Unknown` is never flagged.
fn is_inconsistent(kind: TerminatorKind, dominant: DominantStyle) -> bool {
    match kind {
        TerminatorKind::Cr => true,
        TerminatorKind::Lf => dominant == DominantStyle::Crlf,
        TerminatorKind::Crlf => dominant == DominantStyle::Lf,
        TerminatorKind::Unknown => false,
    }
}

/// Classify scanned occurrences against the document's expected style.
///
/// Consumes the scanner's output (occurrences carry no identity across
/// scans) and returns one [`Classification`] per occurrence in the same
/// order, plus the aggregate counts. Pure function: identical inputs
/// always produce identical reports.
pub fn classify(occurrences: Vec<TerminatorOccurrence>, dominant: DominantStyle) -> ScanReport {
    let mut report = ScanReport {
        classifications: Vec::with_capacity(occurrences.len()),
        inconsistent_count: 0,
        sample_glyph: None,
    };

    for occurrence in occurrences {
        let inconsistent = is_inconsistent(occurrence.kind, dominant);
        let glyph = if inconsistent {
            let glyph = occurrence.kind.glyph();
            report.inconsistent_count += 1;
            report.sample_glyph = Some(glyph);
            Some(glyph)
        } else {
            None
        };

        report.classifications.push(Classification {
            occurrence,
            is_inconsistent: inconsistent,
            glyph,
        });
    }

    report
}
