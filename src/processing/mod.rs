pub mod convert;
pub mod pixel_records;
pub mod stats;
pub mod table;

pub use convert::{convert_to_csv, drain_records, write_csv};
pub use pixel_records::{PixelRecords, decode};
pub use stats::ProcessingStats;
pub use table::{counts_to_dataframe, records_to_array, records_to_dataframe};
