//! Utility functions for file handling and output

pub mod csv_writer;
pub mod file_utils;
pub mod misc;

// Re-export commonly used utility functions for convenience
pub use csv_writer::CsvSink;
pub use file_utils::*;
pub use misc::*;
