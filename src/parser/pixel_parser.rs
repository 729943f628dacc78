use crate::error::{DecodeError, PixelHeaderFault};
use crate::parser::cursor::ByteCursor;
use crate::types::{CHANNEL_COUNT, PAIR_LEN, PIXEL_HEADER_LEN, PIXEL_MAGIC, PixelHeader};
use std::ops::Range;
use winnow::{
    Parser,
    binary::{le_u16, le_u32},
    combinator::repeat,
    error::ContextError,
    token::take,
};

/// Bytes after the record length that are present on the wire but never interpreted.
const RESERVED_LEN: usize = 10;

/// Parses the raw 16-byte pixel header:
/// - 2 bytes: magic
/// - 4 bytes: record length (u32, little‑endian)
/// - 10 bytes: reserved, skipped
pub fn parse_header_fields<'a>(input: &mut &'a [u8]) -> Result<(&'a [u8], u32), ContextError> {
    (take(2usize), le_u32, take(RESERVED_LEN))
        .map(|(magic, record_byte_length, _reserved)| (magic, record_byte_length))
        .parse_next(input)
}

/// Parses one `(channel, count)` pair (4 bytes, two little‑endian u16).
pub fn parse_channel_count(input: &mut &[u8]) -> Result<(u16, u16), ContextError> {
    (le_u16, le_u16).parse_next(input)
}

/// Parses the 16-byte header of pixel `pixel` at byte `offset`.
///
/// Only the magic and the record length are read. The length is not checked
/// against the buffer here: the last record of a file may legitimately be cut short.
pub fn parse_pixel_header(
    data: &[u8],
    offset: usize,
    pixel: usize,
) -> Result<PixelHeader, DecodeError> {
    let invalid = |fault| DecodeError::InvalidPixelHeader {
        pixel,
        offset,
        fault,
    };

    let mut input = ByteCursor::new(data).input_at(offset)?;
    let available = input.len();
    let (magic, record_byte_length) = parse_header_fields(&mut input)
        .map_err(|_| invalid(PixelHeaderFault::TooShort { available }))?;

    if magic != PIXEL_MAGIC {
        return Err(invalid(PixelHeaderFault::BadMagic {
            found: [magic[0], magic[1]],
        }));
    }
    if (record_byte_length as usize) < PIXEL_HEADER_LEN {
        return Err(invalid(PixelHeaderFault::LengthBelowHeader {
            declared: record_byte_length,
        }));
    }

    Ok(PixelHeader::builder()
        .offset(offset)
        .record_byte_length(record_byte_length)
        .build())
}

/// Walks `payload` as `(channel: u16, count: u16)` pairs and writes each count into `counts`.
///
/// A later pair for the same channel overwrites the earlier one. A trailing remainder
/// shorter than one pair is ignored. Returns the number of pairs read.
pub fn decode_channel_counts(
    data: &[u8],
    payload: Range<usize>,
    pixel: usize,
    counts: &mut [u16; CHANNEL_COUNT],
) -> Result<usize, DecodeError> {
    let pair_count = payload.len() / PAIR_LEN;
    let mut input = ByteCursor::new(data).bytes_at(payload.start, pair_count * PAIR_LEN)?;

    let pairs: Vec<(u16, u16)> = repeat(pair_count, parse_channel_count)
        .parse_next(&mut input)
        .map_err(|_: ContextError| DecodeError::OutOfBounds {
            offset: payload.start,
            needed: pair_count * PAIR_LEN,
            available: data.len().saturating_sub(payload.start),
        })?;

    for (i, &(channel, count)) in pairs.iter().enumerate() {
        let slot = counts
            .get_mut(channel as usize)
            .ok_or(DecodeError::ChannelOutOfRange {
                pixel,
                channel,
                offset: payload.start + i * PAIR_LEN,
            })?;
        *slot = count;
    }

    Ok(pairs.len())
}
