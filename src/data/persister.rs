//! Persister Module
//! Writes the train/test subsets as CSV files under `<base>/raw/`.

use polars::prelude::*;
use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Subdirectory the artifacts land in.
const RAW_SUBDIR: &str = "raw";
/// Training artifact file name.
pub const TRAIN_FILE: &str = "train.csv";
/// Evaluation artifact file name.
pub const TEST_FILE: &str = "test.csv";

#[derive(Error, Debug)]
pub enum PersistError {
    #[error("failed to create output directory {path}: {source}")]
    CreateDir { path: PathBuf, source: io::Error },
    #[error("failed to create {path}: {source}")]
    CreateFile { path: PathBuf, source: io::Error },
    #[error("failed to write CSV to {path}: {source}")]
    Csv { path: PathBuf, source: PolarsError },
}

/// Writes both subsets to the fixed artifact layout. Existing files are
/// overwritten; writes across the two files are not transactional.
pub struct Persister;

impl Persister {
    /// Write `train.csv` and `test.csv` under `<base>/raw/`, creating
    /// missing directories. Returns the artifact directory.
    pub fn save_split(
        train: &DataFrame,
        test: &DataFrame,
        base: &Path,
    ) -> Result<PathBuf, PersistError> {
        let raw_dir = base.join(RAW_SUBDIR);
        fs::create_dir_all(&raw_dir).map_err(|e| {
            tracing::error!("failed to create output directory {}: {e}", raw_dir.display());
            PersistError::CreateDir {
                path: raw_dir.clone(),
                source: e,
            }
        })?;

        Self::write_csv(train, &raw_dir.join(TRAIN_FILE))?;
        Self::write_csv(test, &raw_dir.join(TEST_FILE))?;

        tracing::debug!("train and test data saved to {}", raw_dir.display());
        Ok(raw_dir)
    }

    fn write_csv(df: &DataFrame, path: &Path) -> Result<(), PersistError> {
        let mut file = File::create(path).map_err(|e| {
            tracing::error!("failed to create {}: {e}", path.display());
            PersistError::CreateFile {
                path: path.to_path_buf(),
                source: e,
            }
        })?;

        // No synthetic row-index column: the frame's own columns are the
        // entire serialized record.
        CsvWriter::new(&mut file)
            .include_header(true)
            .finish(&mut df.clone())
            .map_err(|e| {
                tracing::error!("failed to write CSV to {}: {e}", path.display());
                PersistError::Csv {
                    path: path.to_path_buf(),
                    source: e,
                }
            })
    }
}
