use crate::config::ConversionOptions;
use crate::error::Result;
use crate::parser::locate_file_header;
use crate::processing::{
    PixelRecords, ProcessingStats, drain_records, records_to_array, records_to_dataframe,
    write_csv,
};
use crate::types::{FileHeaderInfo, PixelRecord};
use crate::utils::file_utils::read_binary_file_mmap;
use crate::utils::misc::validate_label;
use ndarray::Array2;
use polars::prelude::{DataFrame, ParquetWriter};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// A memory-mapped GeoPIXE file with its header already located
pub struct GeoPixeFile {
    pub header: FileHeaderInfo,
    mmap_data: memmap2::Mmap,
}

impl GeoPixeFile {
    /// Map the file at `path` and locate its file header.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let mmap_data = read_binary_file_mmap(path.as_ref())?;
        log::info!(
            "{} is {} bytes long",
            path.as_ref().display(),
            mmap_data.len()
        );

        let header = locate_file_header(&mmap_data)?;
        Ok(Self { header, mmap_data })
    }

    pub fn len(&self) -> usize {
        self.mmap_data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mmap_data.is_empty()
    }

    pub fn header_text(&self) -> Option<&str> {
        self.header.header_text.as_deref()
    }

    /// A fresh pass over the pixel records.
    pub fn records(&self) -> PixelRecords<'_> {
        PixelRecords::with_header(&self.mmap_data, self.header.clone())
    }

    /// Get a summary of the file contents
    pub fn get_summary(&self) -> String {
        let mut result = String::new();

        result.push_str(&format!("File size: {} bytes\n", self.len()));
        match &self.header.header_text {
            Some(text) => {
                result.push_str(&format!("File header: {} bytes\n", text.len()));
                let preview: String = text.chars().take(100).collect();
                result.push_str(&format!("  {preview}\n"));
            }
            None => result.push_str("File header: none\n"),
        }
        result.push_str(&format!(
            "Pixel data starts at byte {}\n",
            self.header.data_start_offset
        ));

        result
    }

    /// Stream every pixel as a CSV row into `writer`.
    pub fn write_csv<W: Write>(
        &self,
        writer: W,
        options: &ConversionOptions,
    ) -> Result<ProcessingStats> {
        options.validate()?;
        write_csv(&mut self.records(), writer, options)
    }

    /// Write a CSV file at `output_path`.
    pub fn save_csv(
        &self,
        output_path: impl AsRef<Path>,
        options: &ConversionOptions,
    ) -> Result<ProcessingStats> {
        let file = File::create(output_path)?;
        self.write_csv(BufWriter::new(file), options)
    }

    /// Decode every pixel into memory.
    pub fn collect_records(
        &self,
        options: &ConversionOptions,
    ) -> Result<(Vec<PixelRecord>, ProcessingStats)> {
        let mut records = Vec::new();
        let stats = drain_records(&mut self.records(), options, |record| {
            records.push(record.clone());
            Ok(())
        })?;
        Ok((records, stats))
    }

    /// Dense `(pixels, 4096)` count matrix.
    pub fn counts_array(&self, options: &ConversionOptions) -> Result<Array2<u32>> {
        let (records, _) = self.collect_records(options)?;
        Ok(records_to_array(&records))
    }

    /// All pixels as a DataFrame laid out like the CSV output.
    pub fn to_dataframe(
        &self,
        options: &ConversionOptions,
    ) -> Result<(DataFrame, ProcessingStats)> {
        validate_label(&options.detector_label)?;
        let (records, stats) = self.collect_records(options)?;
        let df = records_to_dataframe(&records, &options.detector_label)?;
        Ok((df, stats))
    }

    /// Write the DataFrame form of the file as Parquet at `output_path`.
    pub fn save_parquet(
        &self,
        output_path: impl AsRef<Path>,
        options: &ConversionOptions,
    ) -> Result<ProcessingStats> {
        let (mut df, stats) = self.to_dataframe(options)?;
        let mut file = File::create(output_path)?;
        ParquetWriter::new(&mut file).finish(&mut df)?;
        Ok(stats)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{DecodeError, GeoPixeError};
    use crate::test_support::{SAMPLE_HEADER, geopixe_file};
    use polars::prelude::{ParquetReader, SerReader};
    use std::io::Write as _;

    fn write_temp(bytes: &[u8]) -> std::io::Result<tempfile::NamedTempFile> {
        let mut file = tempfile::NamedTempFile::new()?;
        file.write_all(bytes)?;
        file.flush()?;
        Ok(file)
    }

    fn options() -> ConversionOptions {
        ConversionOptions::builder().detector_label("A").build()
    }

    #[test]
    fn opens_and_summarises() -> std::result::Result<(), Box<dyn std::error::Error>> {
        let data = geopixe_file(Some(SAMPLE_HEADER), &[&[(1, 1)]]);
        let tmp = write_temp(&data)?;
        let file = GeoPixeFile::open(tmp.path())?;

        assert_eq!(file.len(), data.len());
        assert_eq!(file.header_text(), Some(SAMPLE_HEADER));
        let summary = file.get_summary();
        assert!(summary.contains(&format!("File size: {} bytes", data.len())));
        assert!(summary.contains(&format!(
            "Pixel data starts at byte {}",
            SAMPLE_HEADER.len() + 2
        )));
        Ok(())
    }

    #[test]
    fn headerless_summary() -> std::result::Result<(), Box<dyn std::error::Error>> {
        let tmp = write_temp(&geopixe_file(None, &[&[(1, 1)]]))?;
        let file = GeoPixeFile::open(tmp.path())?;

        assert!(file.get_summary().contains("File header: none"));
        Ok(())
    }

    #[test]
    fn records_can_be_read_twice() -> std::result::Result<(), Box<dyn std::error::Error>> {
        let tmp = write_temp(&geopixe_file(None, &[&[(1, 1)], &[(2, 2)]]))?;
        let file = GeoPixeFile::open(tmp.path())?;

        assert_eq!(file.records().count(), 2);
        assert_eq!(file.records().count(), 2);
        Ok(())
    }

    #[test]
    fn saves_csv() -> std::result::Result<(), Box<dyn std::error::Error>> {
        let tmp = write_temp(&geopixe_file(Some(SAMPLE_HEADER), &[&[(3, 4)], &[]]))?;
        let file = GeoPixeFile::open(tmp.path())?;
        let out = tempfile::NamedTempFile::new()?;

        let stats = file.save_csv(out.path(), &options())?;
        assert_eq!(stats.pixels, 2);

        let text = std::fs::read_to_string(out.path())?;
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[1].starts_with("0,0,0,0,4,0"));
        Ok(())
    }

    #[test]
    fn saves_parquet() -> std::result::Result<(), Box<dyn std::error::Error>> {
        let tmp = write_temp(&geopixe_file(None, &[&[(3, 4)], &[(4095, 1)], &[]]))?;
        let file = GeoPixeFile::open(tmp.path())?;
        let out = tempfile::NamedTempFile::new()?;

        let stats = file.save_parquet(out.path(), &options())?;
        assert_eq!(stats.pixels, 3);

        let df = ParquetReader::new(File::open(out.path())?).finish()?;
        assert_eq!(df.shape(), (3, 4097));
        Ok(())
    }

    #[test]
    fn counts_array_matches_records() -> std::result::Result<(), Box<dyn std::error::Error>> {
        let tmp = write_temp(&geopixe_file(None, &[&[(3, 4)], &[(4095, 1)]]))?;
        let file = GeoPixeFile::open(tmp.path())?;
        let counts = file.counts_array(&options())?;

        assert_eq!(counts.dim(), (2, 4096));
        assert_eq!(counts[[0, 3]], 4);
        assert_eq!(counts[[1, 4095]], 1);
        Ok(())
    }

    #[test]
    fn truncated_header_fails_to_open() -> std::result::Result<(), Box<dyn std::error::Error>> {
        let data = geopixe_file(Some(SAMPLE_HEADER), &[]);
        let tmp = write_temp(&data[..8])?;

        assert!(matches!(
            GeoPixeFile::open(tmp.path()),
            Err(GeoPixeError::Decode(DecodeError::TruncatedBuffer { .. }))
        ));
        Ok(())
    }
}
