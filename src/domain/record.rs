// ============================================================
// Layer 3 — Record and Item Domain Types
// ============================================================
// A HiscoRecord is one row of the source table. Only two
// columns matter to the classifier:
//
//   occ1  — the free-text occupation description, e.g. "farmer"
//   label — the integer class the description belongs to
//           (an index into the 1919 HISCO codes)
//
// Any other column in the file is ignored on deserialisation.
//
// A HiscoItem is what the dataset hands out per index: the
// original text, its fixed-length encoding and the label.
// Items are rebuilt on every access and never cached.

use serde::{Deserialize, Serialize};

/// One labelled occupation description from the source table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HiscoRecord {
    /// Raw occupation text, exactly as found in the source
    pub occ1: String,

    /// Class index of the HISCO code
    pub label: i64,
}

impl HiscoRecord {
    pub fn new(occ1: impl Into<String>, label: i64) -> Self {
        Self { occ1: occ1.into(), label }
    }
}

/// A record packaged for the model.
///
/// `encoded` always has the dataset's fixed sequence length
/// (32), see [`crate::data::encoder::MAX_SEQ_LEN`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HiscoItem {
    /// The original text, unchanged
    pub occ1: String,

    /// Character indices, truncated or padded to a fixed length
    pub encoded: Vec<u32>,

    /// Class index copied from the record
    pub label: i64,
}
