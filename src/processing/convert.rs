use crate::config::ConversionOptions;
use crate::error::Result;
use crate::processing::{PixelRecords, ProcessingStats};
use crate::types::PixelRecord;
use crate::utils::CsvSink;
use std::io::Write;

/// Drain `records`, handing each one to `sink` in order, and collect statistics.
///
/// Stops at the first decode error; records already handed over stay handed over.
pub fn drain_records<F>(
    records: &mut PixelRecords<'_>,
    options: &ConversionOptions,
    mut sink: F,
) -> Result<ProcessingStats>
where
    F: FnMut(&PixelRecord) -> Result<()>,
{
    let mut stats = ProcessingStats::default();

    while let Some(record) = records.next() {
        let record = record?;
        sink(&record)?;
        stats.record(&record);

        if options.should_report(stats.pixels) {
            log::debug!(
                "Pixel {} decoded, byte {} of {}",
                record.index,
                records.offset(),
                records.buffer_len()
            );
        }
    }

    stats.truncation = records.truncation().copied();
    log::info!(
        "Decoded {} pixels, {} counts over {} channels",
        stats.pixels,
        stats.total_counts,
        stats.channels_seen
    );
    Ok(stats)
}

/// Drain `records` as CSV rows into `writer`, header row first.
pub fn write_csv<W: Write>(
    records: &mut PixelRecords<'_>,
    writer: W,
    options: &ConversionOptions,
) -> Result<ProcessingStats> {
    let mut csv = CsvSink::new(writer, &options.detector_label)?;
    let stats = drain_records(records, options, |record| csv.write_record(record))?;
    csv.finish()?;
    Ok(stats)
}

/// Decode `data` and write it as CSV to `writer`.
pub fn convert_to_csv<W: Write>(
    data: &[u8],
    writer: W,
    options: &ConversionOptions,
) -> Result<ProcessingStats> {
    options.validate()?;
    write_csv(&mut PixelRecords::new(data)?, writer, options)
}
