//! Row-per-pixel CSV output

use crate::error::Result;
use crate::processing::table::PIXEL_COLUMN;
use crate::types::{CHANNEL_COUNT, PixelRecord};
use crate::utils::misc::{channel_column_names, validate_label};
use itertools::Itertools;
use std::io::Write;

/// Writes the `PMC,<label>_0,...` header once, then one line per record.
///
/// A row is written only for a fully decoded record, so a decode failure never
/// leaves a partial line behind.
pub struct CsvSink<W: Write> {
    writer: W,
    rows: usize,
    line: String,
}

impl<W: Write> CsvSink<W> {
    /// Write the header row for `label` and return a sink ready for records.
    pub fn new(mut writer: W, label: &str) -> Result<Self> {
        validate_label(label)?;
        let header = std::iter::once(PIXEL_COLUMN.to_string())
            .chain(channel_column_names(label, CHANNEL_COUNT))
            .join(",");
        writeln!(writer, "{header}")?;

        Ok(Self {
            writer,
            rows: 0,
            line: String::with_capacity(CHANNEL_COUNT * 2 + 16),
        })
    }

    pub fn write_record(&mut self, record: &PixelRecord) -> Result<()> {
        use std::fmt::Write as _;

        self.line.clear();
        // Writing into a String cannot fail
        let _ = write!(
            self.line,
            "{},{}",
            record.index,
            record.channel_counts.iter().format(",")
        );
        self.line.push('\n');
        self.writer.write_all(self.line.as_bytes())?;
        self.rows += 1;
        Ok(())
    }

    /// Data rows written so far, header excluded.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Flush and hand back the underlying writer.
    pub fn finish(mut self) -> Result<W> {
        self.writer.flush()?;
        Ok(self.writer)
    }
}
