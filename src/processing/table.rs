//! Dense matrix and DataFrame views of a decoded record stream

use crate::types::{CHANNEL_COUNT, PixelRecord};
use crate::utils::misc::channel_column_names;
use ndarray::Array2;
use polars::prelude::*;
use rayon::prelude::*;

/// Name of the pixel index column.
pub const PIXEL_COLUMN: &str = "PMC";

/// Stack records into a `(pixels, CHANNEL_COUNT)` matrix, one row per record.
pub fn records_to_array(records: &[PixelRecord]) -> Array2<u32> {
    let mut counts = Array2::<u32>::zeros((records.len(), CHANNEL_COUNT));
    for (mut row, record) in counts.rows_mut().into_iter().zip(records) {
        row.iter_mut()
            .zip(record.channel_counts.iter())
            .for_each(|(dst, &src)| *dst = src as u32);
    }
    counts
}

/// Build a DataFrame with a `PMC` column followed by one `<label>_<n>` column per channel.
///
/// `pixel_indices` must have one entry per row of `counts`.
pub fn counts_to_dataframe(
    pixel_indices: &[u64],
    counts: &Array2<u32>,
    label: &str,
) -> PolarsResult<DataFrame> {
    if pixel_indices.len() != counts.nrows() {
        return Err(PolarsError::ShapeMismatch(
            format!(
                "{} pixel indices for {} rows of counts",
                pixel_indices.len(),
                counts.nrows()
            )
            .into(),
        ));
    }

    let names = channel_column_names(label, counts.ncols());
    let channel_columns: Vec<Column> = names
        .into_par_iter()
        .enumerate()
        .map(|(channel, name)| {
            Column::from(Series::new(name.into(), counts.column(channel).to_vec()))
        })
        .collect();

    let mut columns = Vec::with_capacity(channel_columns.len() + 1);
    columns.push(Column::from(Series::new(PIXEL_COLUMN.into(), pixel_indices)));
    columns.extend(channel_columns);

    DataFrame::new(columns)
}

/// Convenience for `records_to_array` followed by `counts_to_dataframe`.
pub fn records_to_dataframe(records: &[PixelRecord], label: &str) -> PolarsResult<DataFrame> {
    let indices: Vec<u64> = records.iter().map(|r| r.index as u64).collect();
    counts_to_dataframe(&indices, &records_to_array(records), label)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn records() -> Vec<PixelRecord> {
        let mut a = PixelRecord::empty(0);
        a.channel_counts[0] = 4;
        a.channel_counts[4095] = 7;
        let mut b = PixelRecord::empty(1);
        b.channel_counts[12] = 65535;
        vec![a, b]
    }

    #[test]
    fn array_has_one_row_per_pixel() {
        let counts = records_to_array(&records());

        assert_eq!(counts.dim(), (2, CHANNEL_COUNT));
        assert_eq!(counts[[0, 0]], 4);
        assert_eq!(counts[[0, 4095]], 7);
        assert_eq!(counts[[1, 12]], 65535);
        assert_eq!(counts.sum(), 4 + 7 + 65535);
    }

    #[test]
    fn dataframe_columns_follow_csv_layout() -> Result<(), Box<dyn std::error::Error>> {
        let df = records_to_dataframe(&records(), "A")?;

        assert_eq!(df.shape(), (2, CHANNEL_COUNT + 1));
        let names = df.get_column_names();
        assert_eq!(names[0].as_str(), "PMC");
        assert_eq!(names[1].as_str(), "A_0");
        assert_eq!(names[CHANNEL_COUNT].as_str(), "A_4095");

        let pmc: Vec<Option<u64>> = df
            .column("PMC")?
            .as_materialized_series()
            .u64()?
            .into_iter()
            .collect();
        assert_eq!(pmc, vec![Some(0), Some(1)]);
        let ch12: Vec<Option<u32>> = df
            .column("A_12")?
            .as_materialized_series()
            .u32()?
            .into_iter()
            .collect();
        assert_eq!(ch12, vec![Some(0), Some(65535)]);
        Ok(())
    }

    #[test]
    fn mismatched_index_length_is_rejected() {
        let counts = records_to_array(&records());
        assert!(counts_to_dataframe(&[0], &counts, "B").is_err());
    }

    #[test]
    fn empty_stream_gives_empty_frame() -> Result<(), Box<dyn std::error::Error>> {
        let df = records_to_dataframe(&[], "B")?;
        assert_eq!(df.shape(), (0, CHANNEL_COUNT + 1));
        Ok(())
    }
}
