use crate::error::DecodeError;
use crate::parser::cursor::ByteCursor;
use crate::types::{FileHeaderInfo, NO_HEADER_SENTINEL};

/// Locates the optional file header and the offset where pixel data begins.
///
/// The file layout is as follows:
/// - 1 little‑endian u16: header_len
/// - header_len bytes of descriptive text (JSON in practice, kept opaque)
/// - pixel records
///
/// A file without a header starts directly with a pixel record, whose `DP` magic
/// read as the length gives `header_len + 2 == NO_HEADER_SENTINEL`.
pub fn locate_file_header(data: &[u8]) -> Result<FileHeaderInfo, DecodeError> {
    let cursor = ByteCursor::new(data);
    let declared_len = cursor.u16_le_at(0)? as usize;
    let candidate_start = declared_len + 2;

    if candidate_start == NO_HEADER_SENTINEL {
        log::info!("No file header found, pixel data starts at byte 0");
        return Ok(FileHeaderInfo::builder().data_start_offset(0).build());
    }

    if candidate_start > data.len() {
        return Err(DecodeError::TruncatedBuffer {
            declared_end: candidate_start,
            buffer_len: data.len(),
        });
    }

    let raw = cursor.bytes_at(2, declared_len)?;
    let header_text = String::from_utf8_lossy(raw).into_owned();

    log::info!("File header: {declared_len} bytes, pixel data starts at byte {candidate_start}");
    log::debug!(
        "Header text sample (first 100 chars): {:?}",
        header_text.chars().take(100).collect::<String>()
    );

    Ok(FileHeaderInfo::builder()
        .data_start_offset(candidate_start)
        .header_text(header_text)
        .build())
}
