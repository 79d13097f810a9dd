//! Dataset Loader Module
//! Fetches raw delimited data from a URL or local path using Polars.

use polars::prelude::*;
use std::io::{Cursor, Read};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("failed to parse CSV data from {location}: {source}")]
    Unreadable {
        location: String,
        source: PolarsError,
    },
    #[error("failed to read dataset from {location}: {source}")]
    Io {
        location: String,
        source: std::io::Error,
    },
    #[error("failed to fetch dataset from {location}: {source}")]
    Http {
        location: String,
        source: Box<ureq::Error>,
    },
}

/// Loads raw tabular data into a DataFrame. No schema is assumed at this
/// stage: columns are whatever the source header declares.
pub struct DatasetLoader;

impl DatasetLoader {
    /// Load delimited data from a location identifier.
    ///
    /// `http://` and `https://` locations are fetched over the network;
    /// anything else is treated as a filesystem path.
    pub fn load(location: &str) -> Result<DataFrame, LoadError> {
        let text = if location.starts_with("http://") || location.starts_with("https://") {
            Self::fetch_remote(location)?
        } else {
            std::fs::read_to_string(location).map_err(|e| {
                tracing::error!("failed to read dataset from {location}: {e}");
                LoadError::Io {
                    location: location.to_string(),
                    source: e,
                }
            })?
        };

        let df = Self::parse_csv(text, location)?;
        tracing::debug!(
            "data loaded from {location} ({} rows x {} columns)",
            df.height(),
            df.width()
        );
        Ok(df)
    }

    fn fetch_remote(url: &str) -> Result<String, LoadError> {
        let response = ureq::get(url).call().map_err(|e| {
            tracing::error!("failed to fetch dataset from {url}: {e}");
            LoadError::Http {
                location: url.to_string(),
                source: Box::new(e),
            }
        })?;

        let mut body = String::new();
        response
            .into_reader()
            .read_to_string(&mut body)
            .map_err(|e| {
                tracing::error!("failed to read response body from {url}: {e}");
                LoadError::Io {
                    location: url.to_string(),
                    source: e,
                }
            })?;
        Ok(body)
    }

    fn parse_csv(text: String, location: &str) -> Result<DataFrame, LoadError> {
        CsvReadOptions::default()
            .with_has_header(true)
            .with_infer_schema_length(Some(10000))
            .into_reader_with_file_handle(Cursor::new(text))
            .finish()
            .map_err(|e| {
                tracing::error!("failed to parse the CSV data from {location}: {e}");
                LoadError::Unreadable {
                    location: location.to_string(),
                    source: e,
                }
            })
    }
}
