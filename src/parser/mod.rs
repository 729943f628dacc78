//! GeoPIXE binary parsing functionality

pub mod cursor;
mod header_parser;
pub mod pixel_parser;

// Re-export the parsing functions
pub use cursor::ByteCursor;
pub use header_parser::locate_file_header;
pub use pixel_parser::{decode_channel_counts, parse_pixel_header};
