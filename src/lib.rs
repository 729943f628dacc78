//! Reader for GeoPIXE pixel-by-pixel spectral histogram files.
//!
//! A file is an optional length-prefixed text header followed by a stream of `DP`
//! pixel records, each holding sparse `(channel, count)` pairs. [`decode`] turns a
//! buffer into a lazy sequence of dense [`PixelRecord`]s; [`GeoPixeFile`] wraps a
//! memory-mapped file and adds CSV and Parquet export.

pub mod config;
pub mod error;
pub mod geopixe_file;
pub mod parser;
pub mod processing;
pub mod types;
pub mod utils;

#[cfg(test)]
mod test_support;

pub use config::ConversionOptions;
pub use error::{DecodeError, GeoPixeError, PixelHeaderFault, Result};
pub use geopixe_file::GeoPixeFile;
pub use processing::{PixelRecords, ProcessingStats, convert_to_csv, decode};
pub use types::{
    CHANNEL_COUNT, FileHeaderInfo, PixelHeader, PixelRecord, TruncationNotice,
};
