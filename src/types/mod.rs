//! Type definitions for the GeoPIXE binary format

pub mod file_header;
pub mod pixel_header;
pub mod pixel_record;

pub use file_header::FileHeaderInfo;
pub use pixel_header::PixelHeader;
pub use pixel_record::{ChannelCounts, PixelRecord, TruncationNotice};

/// Number of spectral channels in every pixel.
pub const CHANNEL_COUNT: usize = 4096;

/// Size of the fixed pixel header.
pub const PIXEL_HEADER_LEN: usize = 16;

/// Size of one `(channel: u16, count: u16)` pair.
pub const PAIR_LEN: usize = 4;

/// Magic tag opening every pixel record.
pub const PIXEL_MAGIC: [u8; 2] = *b"DP";

/// The first u16 of a header-less file is the `DP` magic itself (0x5044 little-endian),
/// so `declared_len + 2` lands here exactly when there is no file header.
pub const NO_HEADER_SENTINEL: usize = u16::from_le_bytes(PIXEL_MAGIC) as usize + 2;
