// ============================================================
// Layer 4 — HISCO Dataset
// ============================================================
// A positional, read-only view over the occupation records.
//
// HiscoDataset wraps any Burn Dataset of HiscoRecord (an
// InMemDataset loaded from disk, a Vec, a partial view...) and
// itself implements Dataset<HiscoItem>, so Burn's DataLoader
// can call .get(index) and .len() on it directly.
//
// Each .get() re-encodes the record's occ1 text. Nothing is
// cached and the underlying records are never modified.

use burn::data::dataset::Dataset;

use crate::data::encoder::CharEncoder;
use crate::domain::error::DatasetError;
use crate::domain::record::{HiscoItem, HiscoRecord};

pub struct HiscoDataset<D> {
    records:   D,
    tokenizer: CharEncoder,
}

impl<D: Dataset<HiscoRecord>> HiscoDataset<D> {
    /// Wrap `records`, encoding text to the default length of 32.
    pub fn new(records: D) -> Self {
        Self { records, tokenizer: CharEncoder::default() }
    }

    /// Number of records in the underlying collection.
    pub fn size(&self) -> usize {
        self.records.len()
    }

    /// Like [`Dataset::get`], but an out-of-range index is an error.
    pub fn try_get(&self, index: usize) -> Result<HiscoItem, DatasetError> {
        self.get(index).ok_or(DatasetError::IndexOutOfRange {
            index,
            len: self.size(),
        })
    }
}

impl<D: Dataset<HiscoRecord>> Dataset<HiscoItem> for HiscoDataset<D> {
    fn get(&self, index: usize) -> Option<HiscoItem> {
        let record  = self.records.get(index)?;
        let encoded = self.tokenizer.encode(&record.occ1);

        Some(HiscoItem {
            occ1:  record.occ1,
            encoded,
            label: record.label,
        })
    }

    fn len(&self) -> usize {
        self.records.len()
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use burn::data::dataset::InMemDataset;

    use crate::data::encoder::{encode, MAX_SEQ_LEN};

    fn records() -> Vec<HiscoRecord> {
        vec![
            HiscoRecord::new("farmer", 12),
            HiscoRecord::new("", 0),
            HiscoRecord::new("Dienstmagd", 1918),
            HiscoRecord::new("agricultural labourer and cottager", 401),
        ]
    }

    #[test]
    fn test_size_matches_records() {
        let dataset = HiscoDataset::new(InMemDataset::new(records()));
        assert_eq!(dataset.size(), 4);
        assert_eq!(dataset.len(), 4);
    }

    #[test]
    fn test_items_match_records() {
        let source  = records();
        let dataset = HiscoDataset::new(InMemDataset::new(source.clone()));

        for (i, record) in source.iter().enumerate() {
            let item = dataset.try_get(i).unwrap();
            assert_eq!(item.occ1, record.occ1);
            assert_eq!(item.encoded, encode(&record.occ1, MAX_SEQ_LEN));
            assert_eq!(item.label, record.label);
        }
    }

    #[test]
    fn test_out_of_range_index() {
        let dataset = HiscoDataset::new(InMemDataset::new(records()));

        assert!(dataset.get(4).is_none());
        assert!(dataset.get(usize::MAX).is_none());
        assert_eq!(
            dataset.try_get(4),
            Err(DatasetError::IndexOutOfRange { index: 4, len: 4 })
        );
    }

    #[test]
    fn test_empty_dataset() {
        let dataset = HiscoDataset::new(InMemDataset::<HiscoRecord>::new(Vec::new()));
        assert!(dataset.is_empty());
        assert!(dataset.try_get(0).is_err());
    }

    #[test]
    fn test_repeated_access_is_identical() {
        let dataset = HiscoDataset::new(InMemDataset::new(records()));
        assert_eq!(dataset.get(2), dataset.get(2));
    }
}
