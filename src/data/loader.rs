// ============================================================
// Layer 4 — Record Loader
// ============================================================
// Reads the labelled occupation table from disk into a Burn
// InMemDataset<HiscoRecord>.
//
// Two formats are accepted, chosen by file extension:
//
//   .csv          → header row, at least `occ1` and `label`
//                   columns; other columns are ignored
//   .jsonl/.json  → one JSON object per line with the same
//                   fields
//
// Burn does the actual parsing (InMemDataset::from_csv and
// InMemDataset::from_json_rows) through serde, so HiscoRecord's
// Deserialize derive defines the schema.

use std::path::{Path, PathBuf};

use burn::data::dataset::{Dataset, InMemDataset};

use crate::domain::error::LoaderError;
use crate::domain::record::HiscoRecord;
use crate::domain::traits::RecordSource;

/// File formats the loader understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordFormat {
    Csv,
    JsonRows,
}

impl RecordFormat {
    /// Pick a format from the file extension (case-insensitive).
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "csv"           => Some(Self::Csv),
            "jsonl" | "json" => Some(Self::JsonRows),
            _               => None,
        }
    }
}

/// Loads occupation records from a single file.
pub struct RecordLoader {
    path: PathBuf,
}

impl RecordLoader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Read the whole file into an in-memory Burn dataset.
    pub fn load_dataset(&self) -> Result<InMemDataset<HiscoRecord>, LoaderError> {
        let format = RecordFormat::from_path(&self.path).ok_or_else(|| {
            LoaderError::UnsupportedFormat { path: self.path.display().to_string() }
        })?;

        let io_error = |source: std::io::Error| LoaderError::Io {
            path: self.path.display().to_string(),
            source,
        };

        let dataset = match format {
            RecordFormat::Csv => {
                let mut builder = csv::ReaderBuilder::new();
                builder.has_headers(true).trim(csv::Trim::None);
                InMemDataset::from_csv(&self.path, &builder).map_err(io_error)?
            }
            RecordFormat::JsonRows => {
                InMemDataset::from_json_rows(&self.path).map_err(io_error)?
            }
        };

        tracing::info!(
            "Loaded {} records from '{}' ({:?})",
            dataset.len(),
            self.path.display(),
            format,
        );
        Ok(dataset)
    }
}

impl RecordSource for RecordLoader {
    fn load_records(&self) -> Result<Vec<HiscoRecord>, LoaderError> {
        Ok(self.load_dataset()?.iter().collect())
    }
}
