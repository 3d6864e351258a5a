//! Best-effort plain-text extraction from binary document payloads.
//!
//! Built to run as a subprocess of a document-ingestion pipeline: the
//! base64-encoded payload arrives on stdin, the MIME type as the first
//! argument, and a JSON object `{"text": "..."}` goes to stdout. Every
//! failure mode degrades to empty text; the process never reports an error
//! through its output.

pub mod extractors;
pub mod input;
pub mod models;
