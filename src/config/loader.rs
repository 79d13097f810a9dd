//! Config Loader Module
//! Loads run parameters from a YAML file.

use serde::Deserialize;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("parameters file not found: {path}")]
    NotFound { path: PathBuf },
    #[error("failed to parse YAML in {path}: {source}")]
    Malformed {
        path: PathBuf,
        source: serde_yaml::Error,
    },
    #[error("failed to read parameters file {path}: {source}")]
    Unexpected { path: PathBuf, source: io::Error },
    #[error("missing required parameter `{0}`")]
    MissingKey(&'static str),
    #[error("test_size must lie strictly between 0 and 1, got {0}")]
    InvalidTestSize(f64),
}

/// Run parameters as they appear in the YAML document. Unknown sections
/// are ignored; known sections are optional so that a structurally valid
/// file loads even when a key this pipeline needs is absent.
#[derive(Debug, Default, Deserialize)]
pub struct Params {
    #[serde(default)]
    pub data_ingestion: Option<DataIngestionParams>,
}

#[derive(Debug, Default, Deserialize)]
pub struct DataIngestionParams {
    #[serde(default)]
    pub test_size: Option<f64>,
}

impl Params {
    /// Extract and validate the configured test fraction.
    ///
    /// Validation happens here rather than in [`load_params`]: a missing
    /// or out-of-range value is a consumer-side error, not a load error.
    pub fn test_size(&self) -> Result<f64, ConfigError> {
        let test_size = self
            .data_ingestion
            .as_ref()
            .and_then(|di| di.test_size)
            .ok_or(ConfigError::MissingKey("data_ingestion.test_size"))?;

        if !(test_size > 0.0 && test_size < 1.0) {
            return Err(ConfigError::InvalidTestSize(test_size));
        }
        Ok(test_size)
    }
}

/// Load run parameters from a YAML file.
pub fn load_params(path: &Path) -> Result<Params, ConfigError> {
    let content = fs::read_to_string(path).map_err(|e| {
        tracing::error!("failed to read parameters file {}: {e}", path.display());
        if e.kind() == io::ErrorKind::NotFound {
            ConfigError::NotFound {
                path: path.to_path_buf(),
            }
        } else {
            ConfigError::Unexpected {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })?;

    let params: Params = serde_yaml::from_str(&content).map_err(|e| {
        tracing::error!("failed to parse YAML in {}: {e}", path.display());
        ConfigError::Malformed {
            path: path.to_path_buf(),
            source: e,
        }
    })?;

    tracing::debug!("parameters retrieved from {}", path.display());
    Ok(params)
}
