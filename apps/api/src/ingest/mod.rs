//! Document text extraction for uploaded files.
//!
//! The pipeline core only ever sees plain text; this module turns upload
//! bytes into that text. Extraction failure is non-fatal and degrades to
//! an empty string — the handler then rejects the document as empty or
//! unreadable rather than surfacing an internal error.

use tracing::warn;

/// Upload formats the service can turn into plain text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Pdf,
    PlainText,
}

impl DocumentKind {
    /// Dispatches on the upload's file extension, case-insensitively.
    /// Unknown extensions (including docx, which no supported extractor
    /// covers) return `None`.
    pub fn from_filename(filename: &str) -> Option<Self> {
        let extension = filename.rsplit_once('.')?.1.to_lowercase();
        match extension.as_str() {
            "pdf" => Some(DocumentKind::Pdf),
            "txt" => Some(DocumentKind::PlainText),
            _ => None,
        }
    }
}

/// Extracts plain text from upload bytes. Never fails: unreadable input
/// yields an empty string, which callers treat as an unreadable document.
pub fn extract_text(kind: DocumentKind, data: &[u8]) -> String {
    match kind {
        DocumentKind::Pdf => match pdf_extract::extract_text_from_mem(data) {
            Ok(text) => text,
            Err(e) => {
                warn!("PDF text extraction failed: {e}");
                String::new()
            }
        },
        DocumentKind::PlainText => String::from_utf8_lossy(data).into_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pdf_extension_dispatch() {
        assert_eq!(DocumentKind::from_filename("resume.pdf"), Some(DocumentKind::Pdf));
        assert_eq!(DocumentKind::from_filename("RESUME.PDF"), Some(DocumentKind::Pdf));
    }

    #[test]
    fn test_txt_extension_dispatch() {
        assert_eq!(
            DocumentKind::from_filename("resume.txt"),
            Some(DocumentKind::PlainText)
        );
    }

    #[test]
    fn test_unknown_extensions_are_rejected() {
        assert_eq!(DocumentKind::from_filename("resume.docx"), None);
        assert_eq!(DocumentKind::from_filename("resume.exe"), None);
        assert_eq!(DocumentKind::from_filename("no_extension"), None);
    }

    #[test]
    fn test_plain_text_passes_through() {
        let text = extract_text(DocumentKind::PlainText, b"John Smith\nEXPERIENCE");
        assert_eq!(text, "John Smith\nEXPERIENCE");
    }

    #[test]
    fn test_invalid_utf8_is_lossy_not_fatal() {
        let text = extract_text(DocumentKind::PlainText, &[0x4a, 0xff, 0x6f]);
        assert!(text.contains('J'));
    }

    #[test]
    fn test_garbage_pdf_degrades_to_empty_string() {
        let text = extract_text(DocumentKind::Pdf, b"not a pdf at all");
        assert_eq!(text, "");
    }
}
