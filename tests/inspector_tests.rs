use eolmark::document::Document;
use eolmark::inspector::{Inspection, inspect};
use eolmark::provider::{TextSource, refresh_text};
use eolmark_config::Config;
use eolmark_scan::DominantStyle;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_clean_file_round_trip() {
    let temp_dir = TempDir::new().expect("temp dir");
    let path = temp_dir.path().join("clean.txt");
    fs::write(&path, "one\ntwo\nthree\n").expect("write");

    let document = Document::open(&path).expect("open");
    let inspection = inspect(&document, &Config::default(), None);
    let report = inspection.report().expect("scanned");
    assert!(report.is_clean());
    assert_eq!(report.classifications.len(), 3);
}

#[test]
fn test_disk_is_ground_truth_for_clean_documents() {
    let temp_dir = TempDir::new().expect("temp dir");
    let path = temp_dir.path().join("doc.txt");
    fs::write(&path, "a\nb\nc\n").expect("write");

    // Open pins the expectation from the on-disk content at that moment.
    let document = Document::open(&path).expect("open");
    assert_eq!(document.eol, DominantStyle::Lf);

    // The file changes underneath (or the buffer had been normalized on
    // load): a clean document must be re-read from disk, so the scan
    // sees the CRLF the buffer does not contain.
    fs::write(&path, "a\r\nb\nc\n").expect("rewrite");

    let inspection = inspect(&document, &Config::default(), None);
    match inspection {
        Inspection::Report { ref text, ref report } => {
            assert_eq!(text, "a\r\nb\nc\n");
            assert_eq!(report.inconsistent_count, 1);
            assert_eq!(report.sample_glyph, Some("↵"));
        }
        Inspection::Skipped { .. } => panic!("should not be skipped"),
    }
}

#[test]
fn test_dirty_buffer_wins_over_disk() {
    let temp_dir = TempDir::new().expect("temp dir");
    let path = temp_dir.path().join("doc.txt");
    fs::write(&path, "a\nb\n").expect("write");

    let mut document = Document::open(&path).expect("open");
    document.edit("a\rb\n");

    let (text, source) = refresh_text(&document);
    assert_eq!(source, TextSource::Buffer);
    assert_eq!(text.as_ref(), "a\rb\n");

    let report = inspect(&document, &Config::default(), None)
        .report()
        .cloned()
        .expect("scanned");
    // The bare CR from the unsaved edit is flagged.
    assert_eq!(report.inconsistent_count, 1);
    assert_eq!(report.sample_glyph, Some("←"));
}

#[test]
fn test_size_guard_skips_without_scanning() {
    let document = Document::from_text("a\nb\nc\nd\ne\n");
    let config = Config::default().with_max_lines(4);

    let inspection = inspect(&document, &config, None);
    assert_eq!(
        inspection,
        Inspection::Skipped {
            line_count: 6,
            max_lines: 4
        }
    );
}

#[test]
fn test_expect_override_applies_to_every_document() {
    let document = Document::from_text("a\r\nb\r\n");
    let config = Config::default();

    // Majority says CRLF, but the caller insists on LF.
    let report = inspect(&document, &config, Some(DominantStyle::Lf))
        .report()
        .cloned()
        .expect("scanned");
    assert_eq!(report.inconsistent_count, 2);
}

#[test]
fn test_empty_document_yields_empty_clean_report() {
    let document = Document::from_text("");
    let report = inspect(&document, &Config::default(), None)
        .report()
        .cloned()
        .expect("scanned");
    assert!(report.classifications.is_empty());
    assert_eq!(report.inconsistent_count, 0);
    assert_eq!(report.sample_glyph, None);
}
