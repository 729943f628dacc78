//! Types for representing decoded pixels

use super::CHANNEL_COUNT;
use serde::Serialize;

/// Dense per-channel counts for one pixel. Channels absent from the wire payload stay 0.
pub type ChannelCounts = Box<[u16; CHANNEL_COUNT]>;

/// One decoded pixel. `index` is the position in the record stream, 0-based.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelRecord {
    pub index: usize,
    pub channel_counts: ChannelCounts,
}

impl PixelRecord {
    pub fn empty(index: usize) -> Self {
        Self {
            index,
            channel_counts: Box::new([0; CHANNEL_COUNT]),
        }
    }

    pub fn total_counts(&self) -> u64 {
        self.channel_counts.iter().map(|&c| c as u64).sum()
    }

    /// Iterate over `(channel, count)` for channels with a non-zero count.
    pub fn nonzero(&self) -> impl Iterator<Item = (usize, u16)> + '_ {
        self.channel_counts
            .iter()
            .enumerate()
            .filter(|(_, c)| **c != 0)
            .map(|(ch, &c)| (ch, c))
    }
}

/// Raised when the last record declares more bytes than the file holds.
///
/// Not an error: files saved mid-acquisition end this way. The partial pixel is
/// still emitted and iteration stops after it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TruncationNotice {
    pub pixel: usize,
    pub declared_len: u32,
    pub available: usize,
}

impl TruncationNotice {
    pub fn missing(&self) -> usize {
        (self.declared_len as usize).saturating_sub(self.available)
    }
}
