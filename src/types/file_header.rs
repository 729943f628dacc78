use bon::Builder;
use serde::Serialize;

/// Where pixel data starts, and the descriptive header text that precedes it (if any).
///
/// `data_start_offset` is either 0 (no header) or the declared header length + 2.
#[derive(Debug, Clone, PartialEq, Eq, Builder, Serialize)]
pub struct FileHeaderInfo {
    pub data_start_offset: usize,
    pub header_text: Option<String>,
}

impl FileHeaderInfo {
    pub fn has_header(&self) -> bool {
        self.header_text.is_some()
    }

    /// Declared length of the header text, not counting the 2-byte length prefix.
    pub fn header_len(&self) -> usize {
        self.data_start_offset.saturating_sub(2)
    }
}
