use quick_xml::events::Event;
use quick_xml::reader::Reader;
use std::io::{BufReader, Cursor};
use zip::ZipArchive;

/// Extract visible text from a DOCX payload.
///
/// DOCX files are ZIP archives; the document body lives in word/document.xml
/// with text runs in `<w:t>` elements. Matching is on the local tag name, so
/// any namespace prefix (or none) is accepted.
///
/// Returns `None` on any failure: bad ZIP, missing entry, malformed XML, or
/// a document with no text runs.
pub fn extract_docx(data: &[u8]) -> Option<String> {
    if data.is_empty() {
        return None;
    }

    let mut archive = ZipArchive::new(Cursor::new(data)).ok()?;
    let document = archive.by_name("word/document.xml").ok()?;

    let mut reader = Reader::from_reader(BufReader::new(document));
    reader.config_mut().trim_text(true);

    let mut fragments: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut in_text = false;
    let mut buf = Vec::with_capacity(1024);

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(e)) => {
                if e.local_name().as_ref() == b"t" {
                    in_text = true;
                    current.clear();
                }
            }
            Ok(Event::Text(e)) => {
                if in_text {
                    if let Ok(text) = e.unescape() {
                        current.push_str(&text);
                    }
                }
            }
            Ok(Event::End(e)) => {
                if e.local_name().as_ref() == b"t" {
                    if in_text && !current.is_empty() {
                        fragments.push(current.clone());
                    }
                    in_text = false;
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => {
                log::debug!("malformed document.xml: {}", e);
                return None;
            }
            _ => {}
        }
        buf.clear();
    }

    let text = fragments.join(" ").trim().to_string();
    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}
