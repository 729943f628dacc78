//! Error types for GeoPIXE decoding and export

use polars::prelude::PolarsError;
use thiserror::Error;

/// Why a 16-byte pixel header was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PixelHeaderFault {
    /// Fewer than 16 bytes remained at the record offset.
    TooShort { available: usize },
    /// The first two bytes were not `DP`.
    BadMagic { found: [u8; 2] },
    /// The declared record length cannot even hold its own header.
    LengthBelowHeader { declared: u32 },
}

impl std::fmt::Display for PixelHeaderFault {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TooShort { available } => {
                write!(f, "only {available} bytes available, header needs 16")
            }
            Self::BadMagic { found } => write!(
                f,
                "expected magic \"DP\", found {:#04x} {:#04x}",
                found[0], found[1]
            ),
            Self::LengthBelowHeader { declared } => {
                write!(f, "declared record length {declared} is shorter than the header")
            }
        }
    }
}

/// Fatal conditions raised while walking the binary stream.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("read of {needed} bytes at offset {offset} is out of bounds ({available} available)")]
    OutOfBounds {
        offset: usize,
        needed: usize,
        available: usize,
    },

    #[error("file header ends at byte {declared_end} but the buffer is only {buffer_len} bytes")]
    TruncatedBuffer {
        declared_end: usize,
        buffer_len: usize,
    },

    #[error("invalid header for pixel {pixel} at byte offset {offset}: {fault}")]
    InvalidPixelHeader {
        pixel: usize,
        offset: usize,
        fault: PixelHeaderFault,
    },

    #[error("invalid channel {channel} in pixel {pixel} at byte offset {offset}")]
    ChannelOutOfRange {
        pixel: usize,
        channel: u16,
        offset: usize,
    },
}

/// Errors surfaced by the file and export layer.
#[derive(Debug, Error)]
pub enum GeoPixeError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error("table export failed: {0}")]
    Polars(#[from] PolarsError),

    #[error("invalid detector label {0:?}: must be non-empty and free of commas, quotes and line breaks")]
    InvalidLabel(String),
}

pub type Result<T> = std::result::Result<T, GeoPixeError>;
