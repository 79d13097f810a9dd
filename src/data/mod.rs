//! Data module - dataset loading, normalization, splitting and persistence

mod loader;
mod normalizer;
mod persister;
mod splitter;

pub use loader::{DatasetLoader, LoadError};
pub use normalizer::{NormalizeError, SchemaNormalizer, TARGET_COLUMN, TEXT_COLUMN};
pub use persister::{PersistError, Persister, TEST_FILE, TRAIN_FILE};
pub use splitter::{SplitError, Splitter};
