// ============================================================
// Layer 3 — Error Types
// ============================================================
// Typed errors for the library layers. The application and CLI
// layers wrap these in anyhow::Error with extra context.
//
// Unknown characters are NOT an error anywhere in the system,
// they are encoded as index 0. Tensor shape mismatches are not
// represented here either: Burn panics on those itself.

use thiserror::Error;

/// Failures when reading from a [`crate::data::dataset::HiscoDataset`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DatasetError {
    #[error("index {index} is out of range for dataset of {len} records")]
    IndexOutOfRange { index: usize, len: usize },
}

/// Failures when validating a classifier configuration.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ModelError {
    /// The embedding table must cover every index the encoder can emit.
    #[error("vocab_size {vocab_size} is too small, the encoder emits indices up to {max_index}")]
    VocabTooSmall { vocab_size: usize, max_index: usize },

    #[error("{name} must be greater than zero")]
    InvalidDimension { name: &'static str },

    #[error("cannot read model output: {0}")]
    ReadOutput(String),
}

/// Failures when loading records from disk.
#[derive(Debug, Error)]
pub enum LoaderError {
    #[error("unsupported record file '{path}', expected .csv, .jsonl or .json")]
    UnsupportedFormat { path: String },

    #[error("cannot read records from '{path}'")]
    Io {
        path:   String,
        #[source]
        source: std::io::Error,
    },
}
