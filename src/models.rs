use serde::Serialize;

/// Output envelope written to stdout: always present, always valid JSON,
/// even when nothing could be extracted.
#[derive(Debug, Serialize, Clone)]
pub struct ExtractResponse {
    pub text: String,
}

impl ExtractResponse {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// Empty response, the degraded outcome for every failure mode.
    pub fn empty() -> Self {
        Self {
            text: String::new(),
        }
    }
}
