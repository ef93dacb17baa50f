//! Two-source text provider.
//!
//! Source of truth for byte-exact analysis is persisted storage when the
//! document is file-backed and unmodified, and the in-memory buffer
//! otherwise. An editor-style host may normalize terminators in its
//! buffer, so a raw disk read is the only way to see what the file really
//! contains; once the user has edited the buffer, the buffer is the only
//! truth there is.

use crate::document::Document;
use std::borrow::Cow;
use std::fs;

/// Which source supplied the text for a scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextSource {
    /// Raw bytes re-read from the backing file.
    Disk,
    /// The document's in-memory buffer.
    Buffer,
}

/// Fetch the freshest byte-exact text for `document`.
///
/// Precedence: clean and file-backed documents are re-read from disk;
/// dirty or unbacked documents use the buffer. A disk read failure is
/// logged and degrades to the buffer; it is never propagated, so this
/// function cannot fail.
pub fn refresh_text(document: &Document) -> (Cow<'_, str>, TextSource) {
    if document.dirty {
        return (Cow::Borrowed(document.buffer.as_str()), TextSource::Buffer);
    }

    let Some(path) = &document.path else {
        return (Cow::Borrowed(document.buffer.as_str()), TextSource::Buffer);
    };

    match fs::read(path) {
        Ok(bytes) => {
            let text = String::from_utf8_lossy(&bytes).into_owned();
            (Cow::Owned(text), TextSource::Disk)
        }
        Err(e) => {
            log::warn!(
                "Failed to read raw content of {}, falling back to buffer: {}",
                path.display(),
                e
            );
            (Cow::Borrowed(document.buffer.as_str()), TextSource::Buffer)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unbacked_document_uses_buffer() {
        let document = Document::from_text("a\nb\n");
        let (text, source) = refresh_text(&document);
        assert_eq!(source, TextSource::Buffer);
        assert_eq!(text.as_ref(), "a\nb\n");
    }

    #[test]
    fn test_dirty_document_uses_buffer() {
        let mut document = Document::from_text("a\nb\n");
        document.path = Some(std::path::PathBuf::from("/does/not/matter"));
        document.edit("edited\n");
        let (text, source) = refresh_text(&document);
        assert_eq!(source, TextSource::Buffer);
        assert_eq!(text.as_ref(), "edited\n");
    }

    #[test]
    fn test_missing_backing_file_falls_back_to_buffer() {
        let mut document = Document::from_text("kept\n");
        document.path = Some(std::path::PathBuf::from(
            "/tmp/eolmark_provider_missing/never_written.txt",
        ));
        let (text, source) = refresh_text(&document);
        assert_eq!(source, TextSource::Buffer);
        assert_eq!(text.as_ref(), "kept\n");
    }
}
