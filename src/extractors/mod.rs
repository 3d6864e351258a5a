//! Document content extractors
//!
//! This module provides best-effort text extraction for the two supported
//! payload formats:
//! - DOCX (Microsoft Word, Office Open XML)
//! - PDF

mod docx;
mod pdf;

pub use docx::extract_docx;
pub use pdf::extract_pdf;

/// MIME type for DOCX payloads.
pub const DOCX_MIME: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

/// MIME type for PDF payloads.
pub const PDF_MIME: &str = "application/pdf";

/// Supported MIME types.
pub const SUPPORTED_MIMES: &[&str] = &[DOCX_MIME, PDF_MIME];

/// Extract text from a payload of the given MIME type.
///
/// The MIME string is an exact-match dispatch key, not validated against the
/// payload bytes. Unrecognized types return `None` without touching the data.
pub fn extract_content(mime: &str, data: &[u8]) -> Option<String> {
    match mime {
        DOCX_MIME => extract_docx(data),
        PDF_MIME => extract_pdf(data),
        _ => None,
    }
}

/// Check if a MIME type has an extractor.
pub fn is_supported_mime(mime: &str) -> bool {
    SUPPORTED_MIMES.contains(&mime)
}
