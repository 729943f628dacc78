//! Convert a GeoPIXE file into a row-per-pixel table.
//!
//! Usage:
//!   geopixe2csv --input ./nbb319_2.GeoPIXE --output ./nbb319_2_A.csv --detector A

use anyhow::{Context, bail};
use clap::{Parser, ValueEnum};
use geopixe::{ConversionOptions, GeoPixeFile, ProcessingStats};
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(author, version, about = "GeoPIXE to CSV/Parquet converter")]
struct Args {
    /// Path to the GeoPIXE input file
    #[arg(short, long)]
    input: PathBuf,

    /// Path of the table to write
    #[arg(short, long)]
    output: PathBuf,

    /// Detector that produced the file, used to name the channel columns
    #[arg(short, long, value_enum)]
    detector: Detector,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Csv)]
    format: Format,

    /// Log every N pixels at debug level (0 disables)
    #[arg(long, default_value_t = 1000)]
    progress_interval: usize,

    /// Print the conversion statistics as JSON on stdout
    #[arg(long)]
    stats_json: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "UPPER")]
enum Detector {
    A,
    B,
}

impl Detector {
    fn label(self) -> &'static str {
        match self {
            Detector::A => "A",
            Detector::B => "B",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    Csv,
    Parquet,
}

impl Format {
    fn save(
        self,
        file: &GeoPixeFile,
        output: &Path,
        options: &ConversionOptions,
    ) -> geopixe::Result<ProcessingStats> {
        match self {
            Format::Csv => file.save_csv(output, options),
            Format::Parquet => file.save_parquet(output, options),
        }
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let default_level = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    if args.input == args.output {
        bail!("input and output must be different files");
    }

    let file = GeoPixeFile::open(&args.input)
        .with_context(|| format!("failed to open '{}'", args.input.display()))?;
    log::info!("\n{}", file.get_summary());

    let options = ConversionOptions::builder()
        .detector_label(args.detector.label())
        .progress_interval(args.progress_interval)
        .build();

    let stats = args
        .format
        .save(&file, &args.output, &options)
        .with_context(|| format!("failed to convert '{}'", args.input.display()))?;
    log::info!("Saved {}", args.output.display());

    if args.stats_json {
        println!("{}", stats.to_json()?);
    }
    Ok(())
}
