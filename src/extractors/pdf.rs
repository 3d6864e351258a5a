/// Printable ASCII run shorter than this is discarded by the fallback scan.
const MIN_RUN_LEN: usize = 6;

/// Fallback output is capped at this many fragments to bound its size.
const MAX_FRAGMENTS: usize = 400;

/// Extract text content from a PDF payload.
///
/// Digital-native PDFs are parsed page by page; a page whose extraction
/// fails is skipped rather than failing the document. When the parser is
/// unavailable or rejects the payload entirely, a printable-byte scan
/// recovers whatever readable fragments the raw bytes contain. Scanned
/// (image-only) PDFs yield empty or minimal content - no OCR is performed.
pub fn extract_pdf(data: &[u8]) -> Option<String> {
    if data.is_empty() {
        return None;
    }

    // A successfully parsed document settles the outcome even when it holds
    // no text; the byte scan is only for a missing or failing parser.
    #[cfg(feature = "pdf")]
    if let Some(text) = extract_parsed(data) {
        return if text.is_empty() { None } else { Some(text) };
    }

    extract_printable_runs(data)
}

/// Parse with lopdf and pull text per page.
///
/// Returns `Some` with the (possibly empty) trimmed document text when the
/// payload parsed. lopdf can panic on hostile input, so the whole attempt
/// runs under `catch_unwind`; any panic or loader error degrades to `None`
/// and the caller falls back to the byte scan.
#[cfg(feature = "pdf")]
fn extract_parsed(data: &[u8]) -> Option<String> {
    let result = std::panic::catch_unwind(|| {
        let doc = match lopdf::Document::load_mem(data) {
            Ok(doc) => doc,
            Err(e) => {
                log::debug!("pdf parse failed: {}", e);
                return None;
            }
        };

        let mut pages: Vec<String> = Vec::new();
        for (page_num, _) in doc.get_pages() {
            match doc.extract_text(&[page_num]) {
                Ok(text) => pages.push(text),
                Err(e) => {
                    log::debug!("skipping page {}: {}", page_num, e);
                }
            }
        }
        Some(pages.join("\n"))
    });

    match result {
        Ok(Some(text)) => Some(text.trim().to_string()),
        Ok(None) => None,
        Err(_) => {
            log::warn!("pdf parser panicked, falling back to byte scan");
            None
        }
    }
}

/// Heuristic recovery: collect runs of printable ASCII bytes.
///
/// Runs of [0x20, 0x7E] bytes at least MIN_RUN_LEN long are kept as
/// fragments, in scan order, up to MAX_FRAGMENTS. Imprecise on purpose -
/// it may pick up operator tokens or metadata - but it never fails.
fn extract_printable_runs(data: &[u8]) -> Option<String> {
    let mut fragments: Vec<String> = Vec::new();
    let mut run: Vec<u8> = Vec::new();

    for &byte in data {
        if (0x20..=0x7E).contains(&byte) {
            run.push(byte);
        } else {
            if run.len() >= MIN_RUN_LEN {
                fragments.push(String::from_utf8_lossy(&run).into_owned());
            }
            run.clear();
        }
    }
    if run.len() >= MIN_RUN_LEN {
        fragments.push(String::from_utf8_lossy(&run).into_owned());
    }

    fragments.truncate(MAX_FRAGMENTS);
    let text = fragments.join(" ").trim().to_string();
    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input() {
        assert!(extract_pdf(&[]).is_none());
    }

    #[test]
    fn test_garbage_falls_back_to_byte_scan() {
        // Not a PDF at all; the parser rejects it and the scan recovers the
        // printable run.
        let mut data = vec![0u8, 1, 2, 3];
        data.extend_from_slice(b"readable fragment here");
        data.push(0xFF);
        assert_eq!(extract_pdf(&data).as_deref(), Some("readable fragment here"));
    }

    #[test]
    fn test_short_runs_discarded() {
        let mut data = Vec::new();
        data.extend_from_slice(b"0123456789"); // 10 printable bytes
        data.push(0x00);
        data.extend_from_slice(b"abcd"); // below threshold
        assert_eq!(extract_printable_runs(&data).as_deref(), Some("0123456789"));
    }

    #[test]
    fn test_trailing_run_counts() {
        let mut data = vec![0x07u8];
        data.extend_from_slice(b"ends at eof");
        assert_eq!(extract_printable_runs(&data).as_deref(), Some("ends at eof"));
    }

    #[test]
    fn test_fragment_cap() {
        let mut data = Vec::new();
        for i in 0..500 {
            data.extend_from_slice(format!("frag{:04}", i).as_bytes());
            data.push(0x00);
        }
        let text = extract_printable_runs(&data).unwrap();
        let fragments: Vec<&str> = text.split(' ').collect();
        assert_eq!(fragments.len(), MAX_FRAGMENTS);
        assert_eq!(fragments[0], "frag0000");
        assert_eq!(fragments[MAX_FRAGMENTS - 1], "frag0399");
    }

    #[test]
    fn test_only_unprintable_bytes() {
        assert!(extract_printable_runs(&[0u8, 1, 2, 0x1F, 0x7F, 0xFF]).is_none());
    }
}
