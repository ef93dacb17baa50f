//! Default value functions for configuration.
//!
//! Free functions referenced by `#[serde(default = "crate::defaults::...")]`
//! attributes on `Config` fields, so user config files only need to name
//! the fields they change.

use crate::color::Color;

/// Muted gray for terminators that match the expected style.
pub fn default_marker_color() -> Color {
    Color::new(0x6c, 0x70, 0x86)
}

/// Red for terminators that deviate from the expected style.
pub fn inconsistent_marker_color() -> Color {
    Color::new(0xff, 0x55, 0x55)
}

/// Document-size ceiling: documents with more lines are skipped entirely.
pub fn max_lines() -> usize {
    10_000
}

pub fn bool_true() -> bool {
    true
}

/// Watcher debounce window in milliseconds.
pub fn watch_debounce_ms() -> u64 {
    250
}
