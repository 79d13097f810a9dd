//! Schema Normalizer Module
//! Reduces a raw dataset to the canonical `target`/`text` columns.

use polars::prelude::*;
use thiserror::Error;

/// Canonical label column name.
pub const TARGET_COLUMN: &str = "target";
/// Canonical content column name.
pub const TEXT_COLUMN: &str = "text";

/// Columns the known sources carry but the pipeline never uses. Dropped
/// when present; their absence is not an error.
const DROP_COLUMNS: [&str; 3] = ["Unnamed: 2", "Unnamed: 3", "Unnamed: 4"];

/// Source columns renamed to the canonical pair. Both must be present.
const RENAME_COLUMNS: [(&str, &str); 2] = [("v1", TARGET_COLUMN), ("v2", TEXT_COLUMN)];

#[derive(Error, Debug)]
pub enum NormalizeError {
    #[error("missing column in the dataset: {0}")]
    MissingColumn(String),
    #[error("failed to normalize dataset: {0}")]
    Polars(#[from] PolarsError),
}

/// Handles schema cleanup: drop extraneous columns, rename to canonical
/// names, and project onto exactly the canonical pair.
pub struct SchemaNormalizer;

impl SchemaNormalizer {
    /// Normalize a raw dataset so every row carries exactly the columns
    /// `target` and `text`.
    pub fn normalize(mut df: DataFrame) -> Result<DataFrame, NormalizeError> {
        for column in DROP_COLUMNS {
            if Self::has_column(&df, column) {
                df = df.drop(column)?;
            }
        }

        for (source, canonical) in RENAME_COLUMNS {
            if !Self::has_column(&df, source) {
                tracing::error!("missing column in the dataset: {source}");
                return Err(NormalizeError::MissingColumn(source.to_string()));
            }
            df.rename(source, canonical.into())?;
        }

        // Projection guarantees the column-set invariant even when the
        // source carries stray columns outside the drop set.
        let df = df.select([TARGET_COLUMN, TEXT_COLUMN])?;

        tracing::debug!("data normalization completed ({} rows)", df.height());
        Ok(df)
    }

    fn has_column(df: &DataFrame, name: &str) -> bool {
        df.get_column_names().iter().any(|c| c.as_str() == name)
    }
}
