//! Pipeline Module
//! Sequences config -> load -> normalize -> split -> persist.

use std::path::PathBuf;
use thiserror::Error;

use crate::config::{self, ConfigError};
use crate::data::{
    DatasetLoader, LoadError, NormalizeError, PersistError, Persister, SchemaNormalizer,
    SplitError, Splitter,
};

#[derive(Error, Debug)]
pub enum PipelineError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Load(#[from] LoadError),
    #[error(transparent)]
    Normalize(#[from] NormalizeError),
    #[error(transparent)]
    Split(#[from] SplitError),
    #[error(transparent)]
    Persist(#[from] PersistError),
}

/// Progress marker for a run. `Failed` is absorbing: once entered, the
/// pipeline never advances again.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Idle,
    ConfigLoaded,
    DataLoaded,
    Normalized,
    Split,
    Persisted,
    Done,
    Failed,
}

/// Everything a run needs up front.
#[derive(Debug, Clone)]
pub struct PipelineOptions {
    /// YAML parameters file supplying `data_ingestion.test_size`.
    pub params_path: PathBuf,
    /// Dataset location: URL or filesystem path.
    pub source: String,
    /// Output base; artifacts land under `<out_dir>/raw/`.
    pub out_dir: PathBuf,
    /// RNG seed for the train/test partition.
    pub seed: u64,
}

/// Summary of a completed run.
#[derive(Debug)]
pub struct IngestReport {
    pub train_rows: usize,
    pub test_rows: usize,
    pub output_dir: PathBuf,
}

/// Single-run orchestrator. Components are invoked strictly in order and
/// their failures surface unchanged; there is no retry and no partial
/// recovery.
pub struct Pipeline {
    opts: PipelineOptions,
    stage: Stage,
}

impl Pipeline {
    pub fn new(opts: PipelineOptions) -> Self {
        Self {
            opts,
            stage: Stage::Idle,
        }
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    /// Execute the full ingestion run.
    pub fn run(&mut self) -> Result<IngestReport, PipelineError> {
        let params = self.step(config::load_params(&self.opts.params_path), Stage::ConfigLoaded)?;
        let test_size = self.step(params.test_size(), Stage::ConfigLoaded)?;

        let df = self.step(DatasetLoader::load(&self.opts.source), Stage::DataLoaded)?;
        let df = self.step(SchemaNormalizer::normalize(df), Stage::Normalized)?;

        let seed = self.opts.seed;
        let (train, test) =
            self.step(Splitter::train_test_split(&df, test_size, seed), Stage::Split)?;
        tracing::debug!(
            "dataset split: {} training rows, {} test rows (test_size={test_size}, seed={seed})",
            train.height(),
            test.height()
        );

        let raw_dir = self.step(
            Persister::save_split(&train, &test, &self.opts.out_dir),
            Stage::Persisted,
        )?;
        self.stage = Stage::Done;

        Ok(IngestReport {
            train_rows: train.height(),
            test_rows: test.height(),
            output_dir: raw_dir,
        })
    }

    /// Advance to `next` on success; on failure record the summary, pin
    /// the `Failed` state and propagate the component's error unchanged.
    fn step<T, E: Into<PipelineError>>(
        &mut self,
        result: Result<T, E>,
        next: Stage,
    ) -> Result<T, PipelineError> {
        match result {
            Ok(value) => {
                self.stage = next;
                Ok(value)
            }
            Err(e) => {
                let e = e.into();
                tracing::error!("failed to complete the data ingestion process: {e}");
                self.stage = Stage::Failed;
                Err(e)
            }
        }
    }
}
