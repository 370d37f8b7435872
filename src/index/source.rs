//! Dataset acquisition boundary.
//!
//! The engine does not care where the raw name collections come from; it
//! only needs a [`DatasetSource`] it can ask exactly once at construction
//! time. Two implementations are provided: an in-memory source for tests
//! and embedding callers, and a JSON file source for the common
//! bundled-file deployment.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use super::RawDataset;

/// Errors from loading a raw dataset.
#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    /// The dataset file could not be read.
    #[error("failed to read dataset: {0}")]
    Io(#[from] std::io::Error),
    /// The dataset file could not be parsed.
    #[error("failed to parse dataset: {0}")]
    Parse(#[from] serde_json::Error),
    /// No dataset is available from this source.
    #[error("no dataset available: {0}")]
    Unavailable(String),
}

/// A provider of the raw name dataset.
///
/// `load` is called at most once per engine construction; when the engine
/// restores from a valid snapshot the source is never consulted.
pub trait DatasetSource {
    /// Produce the raw dataset.
    fn load(&self) -> Result<RawDataset, DatasetError>;
}

/// A dataset already held in memory.
pub struct InMemorySource(pub RawDataset);

impl DatasetSource for InMemorySource {
    fn load(&self) -> Result<RawDataset, DatasetError> {
        Ok(self.0.clone())
    }
}

/// A dataset stored as a JSON file.
///
/// Expected shape:
///
/// ```json
/// {
///   "first_names": { "Søren": { "country": { "DK": 0.8 } } },
///   "last_names": { "Hansen": {} },
///   "variant_names": [ { "name": "Sören", "country": "SE" } ]
/// }
/// ```
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    /// Create a source reading from `path`.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl DatasetSource for JsonFileSource {
    fn load(&self) -> Result<RawDataset, DatasetError> {
        let file = File::open(&self.path)?;
        let dataset = serde_json::from_reader(BufReader::new(file))?;
        Ok(dataset)
    }
}
