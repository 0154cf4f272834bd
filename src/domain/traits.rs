// ============================================================
// Layer 3 — Core Traits (Abstractions)
// ============================================================
// The application layer only asks for "something that yields
// records". The file-based RecordLoader backs the CLI; a Vec
// of records already in memory works the same way.

use crate::domain::error::LoaderError;
use crate::domain::record::HiscoRecord;

// ─── RecordSource ─────────────────────────────────────────────────────────────
/// Any component that can produce the labelled occupation table.
///
/// Implementations:
///   - RecordLoader      → CSV / JSON-lines files on disk
///   - Vec<HiscoRecord>  → records already in memory
pub trait RecordSource {
    /// Load every record, in source order.
    fn load_records(&self) -> Result<Vec<HiscoRecord>, LoaderError>;
}

impl RecordSource for Vec<HiscoRecord> {
    fn load_records(&self) -> Result<Vec<HiscoRecord>, LoaderError> {
        Ok(self.clone())
    }
}
