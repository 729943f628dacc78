use crate::error::DecodeError;
use crate::parser::{ByteCursor, decode_channel_counts, locate_file_header, parse_pixel_header};
use crate::types::{FileHeaderInfo, PIXEL_HEADER_LEN, PixelRecord, TruncationNotice};
use std::iter::FusedIterator;

/// Lazy, single-pass iterator over the pixel records of a buffer.
///
/// Yields one `Ok(PixelRecord)` per record until fewer than 16 bytes remain. The first
/// error is yielded once and ends the iteration, as does a truncated final record.
#[derive(Debug)]
pub struct PixelRecords<'a> {
    data: &'a [u8],
    header: FileHeaderInfo,
    cursor: ByteCursor<'a>,
    next_index: usize,
    truncation: Option<TruncationNotice>,
    done: bool,
}

impl<'a> PixelRecords<'a> {
    /// Locate the file header of `data` and position the iterator on the first pixel.
    pub fn new(data: &'a [u8]) -> Result<Self, DecodeError> {
        let header = locate_file_header(data)?;
        Ok(Self::with_header(data, header))
    }

    /// Start iterating at an already located header.
    pub fn with_header(data: &'a [u8], header: FileHeaderInfo) -> Self {
        let cursor = ByteCursor::at(data, header.data_start_offset);
        Self {
            data,
            header,
            cursor,
            next_index: 0,
            truncation: None,
            done: false,
        }
    }

    pub fn header(&self) -> &FileHeaderInfo {
        &self.header
    }

    pub fn header_text(&self) -> Option<&str> {
        self.header.header_text.as_deref()
    }

    /// Set once the final record turned out shorter than it declared.
    pub fn truncation(&self) -> Option<&TruncationNotice> {
        self.truncation.as_ref()
    }

    /// Byte offset of the next record.
    pub fn offset(&self) -> usize {
        self.cursor.offset()
    }

    pub fn buffer_len(&self) -> usize {
        self.data.len()
    }

    /// Number of records yielded so far.
    pub fn pixels_read(&self) -> usize {
        self.next_index
    }

    fn decode_next(&mut self) -> Result<PixelRecord, DecodeError> {
        let index = self.next_index;
        let offset = self.cursor.offset();
        let header = parse_pixel_header(self.data, offset, index)?;
        log::trace!(
            "Pixel {index} at byte {offset}, {} bytes",
            header.record_byte_length
        );

        let mut payload = header.declared_payload();
        if payload.end > self.data.len() {
            let notice = TruncationNotice {
                pixel: index,
                declared_len: header.record_byte_length,
                available: self.data.len() - offset,
            };
            log::warn!(
                "Last pixel {} was saved containing {} bytes, but file truncated {} bytes too early. Reading to end of file",
                notice.pixel,
                notice.declared_len,
                notice.missing()
            );
            payload.end = self.data.len();
            self.truncation = Some(notice);
        }

        let mut record = PixelRecord::empty(index);
        decode_channel_counts(self.data, payload, index, &mut record.channel_counts)?;

        self.cursor.advance(header.record_byte_length as usize);
        self.next_index += 1;
        Ok(record)
    }
}

impl Iterator for PixelRecords<'_> {
    type Item = Result<PixelRecord, DecodeError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done || self.truncation.is_some() || self.cursor.remaining() < PIXEL_HEADER_LEN {
            self.done = true;
            return None;
        }

        let result = self.decode_next();
        if result.is_err() {
            self.done = true;
        }
        Some(result)
    }
}

impl FusedIterator for PixelRecords<'_> {}

/// Decode `data` into a lazy sequence of pixel records.
///
/// Fails up front only if the file header cannot be located; per-record failures are
/// yielded by the iterator.
pub fn decode(data: &[u8]) -> Result<PixelRecords<'_>, DecodeError> {
    PixelRecords::new(data)
}
