//! Splitify - Text Dataset Ingestion & Train/Test Split Pipeline
//!
//! One-shot batch run: load, normalize, split, persist.

use std::path::PathBuf;

use clap::Parser;
use splitify::logging;
use splitify::pipeline::{Pipeline, PipelineOptions};

const DEFAULT_SOURCE: &str =
    "https://raw.githubusercontent.com/vikashishere/Datasets/main/spam.csv";

#[derive(Debug, Parser)]
#[command(name = "splitify", about = "Ingest a labeled text dataset and split it")]
struct Args {
    /// YAML parameters file (expects data_ingestion.test_size).
    #[arg(long, default_value = "params.yaml")]
    params: PathBuf,

    /// Dataset location: URL or local CSV path.
    #[arg(long, default_value = DEFAULT_SOURCE)]
    source: String,

    /// Output base directory; artifacts land under <out-dir>/raw/.
    #[arg(long, default_value = "./data")]
    out_dir: PathBuf,

    /// Seed for the deterministic train/test partition.
    #[arg(long, default_value = "2")]
    seed: u64,

    /// Directory for the durable log file.
    #[arg(long, default_value = "logs")]
    log_dir: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    logging::init(&args.log_dir)?;

    let mut pipeline = Pipeline::new(PipelineOptions {
        params_path: args.params,
        source: args.source,
        out_dir: args.out_dir,
        seed: args.seed,
    });

    match pipeline.run() {
        Ok(report) => {
            println!("train_rows={}", report.train_rows);
            println!("test_rows={}", report.test_rows);
            println!("out_dir={}", report.output_dir.display());
            Ok(())
        }
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}
