//! Builders for synthetic GeoPIXE buffers used across the unit tests

use crate::types::{PIXEL_HEADER_LEN, PIXEL_MAGIC};

/// Encode a pixel record with the given `(channel, count)` pairs.
pub fn pixel_record(pairs: &[(u16, u16)]) -> Vec<u8> {
    let len = PIXEL_HEADER_LEN + pairs.len() * 4;
    pixel_record_declaring(len as u32, pairs)
}

/// Encode a pixel record whose length field says `declared`, whatever the payload.
pub fn pixel_record_declaring(declared: u32, pairs: &[(u16, u16)]) -> Vec<u8> {
    let mut out = Vec::with_capacity(PIXEL_HEADER_LEN + pairs.len() * 4);
    out.extend_from_slice(&PIXEL_MAGIC);
    out.extend_from_slice(&declared.to_le_bytes());
    // x, y, detector, deadtime: present on the wire, never read
    out.extend_from_slice(&[0xAA; 10]);
    for (channel, count) in pairs {
        out.extend_from_slice(&channel.to_le_bytes());
        out.extend_from_slice(&count.to_le_bytes());
    }
    out
}

/// Prefix `body` with a u16 length and the header text.
pub fn with_file_header(text: &str, body: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(2 + text.len() + body.len());
    out.extend_from_slice(&(text.len() as u16).to_le_bytes());
    out.extend_from_slice(text.as_bytes());
    out.extend_from_slice(body);
    out
}

/// A whole file: header text followed by one record per entry of `pixels`.
pub fn geopixe_file(header: Option<&str>, pixels: &[&[(u16, u16)]]) -> Vec<u8> {
    let body: Vec<u8> = pixels.iter().flat_map(|p| pixel_record(p)).collect();
    match header {
        Some(text) => with_file_header(text, &body),
        None => body,
    }
}

pub const SAMPLE_HEADER: &str = r#"{"File Header": {"Xres": 2, "Yres": 1, "Detector": "A"}}"#;
