use crate::types::{CHANNEL_COUNT, PixelRecord, TruncationNotice};
use serde::Serialize;

/// Statistics collected while draining a record stream
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProcessingStats {
    pub pixels: usize,
    pub total_counts: u64,
    pub max_pixel_counts: u64,
    /// Number of distinct channels with a non-zero count in any pixel.
    pub channels_seen: usize,
    pub highest_channel: Option<usize>,
    pub truncation: Option<TruncationNotice>,
    #[serde(skip)]
    seen: Vec<bool>,
}

impl Default for ProcessingStats {
    fn default() -> Self {
        Self {
            pixels: 0,
            total_counts: 0,
            max_pixel_counts: 0,
            channels_seen: 0,
            highest_channel: None,
            truncation: None,
            seen: vec![false; CHANNEL_COUNT],
        }
    }
}

impl ProcessingStats {
    pub fn record(&mut self, pixel: &PixelRecord) {
        self.pixels += 1;

        let mut pixel_total = 0u64;
        for (channel, count) in pixel.nonzero() {
            pixel_total += count as u64;
            if !self.seen[channel] {
                self.seen[channel] = true;
                self.channels_seen += 1;
            }
            self.highest_channel = self.highest_channel.max(Some(channel));
        }

        self.total_counts += pixel_total;
        self.max_pixel_counts = self.max_pixel_counts.max(pixel_total);
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
