use eolmark::document::Document;
use eolmark::inspector::{Inspection, inspect};
use eolmark::markers::{FileReport, RenderOptions, render_annotated, render_skipped, render_summary};
use eolmark_config::{Color, Config};
use eolmark_scan::{DominantStyle, classify, scan};

fn render_to_string(text: &str, dominant: DominantStyle, options: &RenderOptions) -> String {
    let report = classify(scan(text), dominant);
    let config = Config::default();
    let mut out = Vec::new();
    render_annotated(text, &report, &config, options, &mut out).expect("render");
    String::from_utf8(out).expect("utf8 output")
}

#[test]
fn test_annotated_plain_output() {
    let options = RenderOptions {
        color: false,
        show_consistent: true,
    };
    let rendered = render_to_string("a\r\nb\nc", DominantStyle::Lf, &options);
    // CRLF line carries ↵, LF line carries ↓, tail line is unmarked.
    assert_eq!(rendered, "a↵\nb↓\nc\n");
}

#[test]
fn test_annotated_hides_consistent_markers_when_disabled() {
    let options = RenderOptions {
        color: false,
        show_consistent: false,
    };
    let rendered = render_to_string("a\r\nb\n", DominantStyle::Lf, &options);
    assert_eq!(rendered, "a↵\nb\n");
}

#[test]
fn test_annotated_colored_output_uses_config_colors() {
    let options = RenderOptions {
        color: true,
        show_consistent: true,
    };
    let rendered = render_to_string("a\r\nb\n", DominantStyle::Lf, &options);
    // Inconsistent marker gets the red default (#ff5555)...
    assert!(rendered.contains("\x1b[38;2;255;85;85m↵"));
    // ...consistent marker the muted gray (#6c7086), and everything resets.
    assert!(rendered.contains("\x1b[38;2;108;112;134m↓"));
    assert!(rendered.contains("\x1b[0m"));
}

#[test]
fn test_summary_counts_and_sample() {
    let report = classify(scan("a\nb\r\nc\r"), DominantStyle::Lf);
    let mut out = Vec::new();
    render_summary("mixed.txt", &report, DominantStyle::Lf, &mut out).expect("render");
    let rendered = String::from_utf8(out).expect("utf8");
    assert_eq!(rendered, "mixed.txt: 2 inconsistent line endings ←\n");
}

#[test]
fn test_summary_clean() {
    let report = classify(scan("a\nb\n"), DominantStyle::Lf);
    let mut out = Vec::new();
    render_summary("clean.txt", &report, DominantStyle::Lf, &mut out).expect("render");
    let rendered = String::from_utf8(out).expect("utf8");
    assert_eq!(rendered, "clean.txt: 2 line endings, all LF\n");
}

#[test]
fn test_skipped_notice() {
    let mut out = Vec::new();
    render_skipped("big.log", 50_000, 10_000, &mut out).expect("render");
    let rendered = String::from_utf8(out).expect("utf8");
    assert_eq!(
        rendered,
        "big.log: skipped (50000 lines exceeds ceiling of 10000)\n"
    );
}

#[test]
fn test_file_report_json_shape() {
    let document = Document::from_text("a\r\nb\n");
    let inspection = inspect(&document, &Config::default(), None);

    let report = FileReport::new(&document, DominantStyle::Lf, &inspection);
    let value = serde_json::to_value(&report).expect("serialize");

    assert_eq!(value["file"], "<stdin>");
    assert_eq!(value["expected"], "LF");
    assert_eq!(value["skipped"], false);
    assert_eq!(value["inconsistent_count"], 1);
    assert_eq!(value["sample_glyph"], "↵");

    let terminators = value["terminators"].as_array().expect("array");
    assert_eq!(terminators.len(), 2);
    assert_eq!(terminators[0]["occurrence"]["kind"], "CRLF");
    assert_eq!(terminators[0]["is_inconsistent"], true);
    assert_eq!(terminators[1]["occurrence"]["kind"], "LF");
    assert_eq!(terminators[1]["is_inconsistent"], false);
    // Skipped-only field is omitted for scanned documents.
    assert!(value.get("max_lines").is_none());
}

#[test]
fn test_file_report_json_skipped_shape() {
    let document = Document::from_text("a\nb\nc\n");
    let config = Config::default().with_max_lines(2);
    let inspection = inspect(&document, &config, None);
    assert!(matches!(inspection, Inspection::Skipped { .. }));

    let report = FileReport::new(&document, DominantStyle::Lf, &inspection);
    let value = serde_json::to_value(&report).expect("serialize");

    assert_eq!(value["skipped"], true);
    assert_eq!(value["max_lines"], 2);
    assert_eq!(value["inconsistent_count"], 0);
    assert!(value.get("terminators").is_none());
}

#[test]
fn test_color_sgr_uses_custom_colors() {
    let config = Config::default()
        .with_marker_colors(Color::new(1, 2, 3), Color::new(200, 100, 50));
    let report = classify(scan("a\r\n"), DominantStyle::Lf);
    let options = RenderOptions {
        color: true,
        show_consistent: true,
    };
    let mut out = Vec::new();
    render_annotated("a\r\n", &report, &config, &options, &mut out).expect("render");
    let rendered = String::from_utf8(out).expect("utf8");
    assert!(rendered.contains("\x1b[38;2;200;100;50m↵"));
}
