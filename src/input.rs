use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use std::io::Read;

/// Read the whole of stdin and base64-decode it into the document payload.
///
/// Any failure (unreadable stream, non-UTF-8 input, malformed base64) maps to
/// an empty payload rather than an error; the caller cannot distinguish "no
/// input" from "bad input" and is not meant to.
pub fn read_payload() -> Vec<u8> {
    let mut raw = String::new();
    if std::io::stdin().read_to_string(&mut raw).is_err() {
        log::warn!("failed to read stdin, treating as empty payload");
        return Vec::new();
    }
    decode_payload(&raw)
}

/// Decode a base64 payload, tolerating line-wrapped input.
///
/// Base64 producers commonly wrap at 76 columns, so all ASCII whitespace is
/// stripped before decoding, not just the leading/trailing run.
pub fn decode_payload(raw: &str) -> Vec<u8> {
    let compact: String = raw.chars().filter(|c| !c.is_ascii_whitespace()).collect();
    if compact.is_empty() {
        return Vec::new();
    }
    match STANDARD.decode(compact.as_bytes()) {
        Ok(bytes) => bytes,
        Err(e) => {
            log::debug!("base64 decode failed: {}", e);
            Vec::new()
        }
    }
}
