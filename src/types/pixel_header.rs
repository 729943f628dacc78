use bon::Builder;

/// Fixed part of one pixel record.
///
/// Layout (16 bytes, little-endian):
/// - 2 bytes: magic `DP`
/// - 4 bytes: record length in bytes, header included (u32)
/// - 10 bytes: reserved, not interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Builder)]
pub struct PixelHeader {
    pub offset: usize,
    pub record_byte_length: u32,
}

impl PixelHeader {
    /// Byte range of the channel/count payload as declared, before any clamping.
    pub fn declared_payload(&self) -> std::ops::Range<usize> {
        let start = self.offset + super::PIXEL_HEADER_LEN;
        let end = self.offset.saturating_add(self.record_byte_length as usize);
        start..end
    }
}
