// ============================================================
// Layer 4 — HISCO Batcher
// ============================================================
// Implements Burn's Batcher trait to stack a Vec<HiscoItem>
// into tensors the classifier can consume.
//
//   Input:  N items, each with an encoded sequence of length S
//   Output: HiscoBatch with encoded [N, S] and labels [N]
//
// Sequences are flattened row by row and reshaped:
//   [i1_c1, ..., i1_cS, i2_c1, ..., iN_cS] → [N, S]
//
// All items come out of HiscoDataset already padded to the
// same length, so no dynamic padding is needed here.
//
// Reference: Burn Book §4 (Batcher)

use burn::{data::dataloader::batcher::Batcher, prelude::*, tensor::TensorData};

use crate::domain::record::HiscoItem;

// ─── HiscoBatch ───────────────────────────────────────────────────────────────
/// A batch of packaged items, batch dimension first.
#[derive(Debug, Clone)]
pub struct HiscoBatch<B: Backend> {
    /// The raw occupation texts, one per row
    pub occ1: Vec<String>,

    /// Encoded sequences — shape: [batch_size, seq_len]
    pub encoded: Tensor<B, 2, Int>,

    /// Class indices — shape: [batch_size]
    pub labels: Tensor<B, 1, Int>,
}

// ─── HiscoBatcher ─────────────────────────────────────────────────────────────
/// Holds the device the batch tensors are created on.
#[derive(Clone, Debug)]
pub struct HiscoBatcher<B: Backend> {
    pub device: B::Device,
}

impl<B: Backend> HiscoBatcher<B> {
    pub fn new(device: B::Device) -> Self {
        Self { device }
    }
}

impl<B: Backend> Batcher<HiscoItem, HiscoBatch<B>> for HiscoBatcher<B> {
    fn batch(&self, items: Vec<HiscoItem>) -> HiscoBatch<B> {
        let batch_size = items.len();
        let seq_len    = items.first().map_or(0, |item| item.encoded.len());

        let encoded_flat: Vec<i32> = items
            .iter()
            .flat_map(|item| item.encoded.iter().map(|&id| id as i32))
            .collect();

        // Labels stay 64-bit end to end, like the records they came from
        let labels: Vec<i64> = items.iter().map(|item| item.label).collect();

        let encoded = Tensor::<B, 1, Int>::from_ints(encoded_flat.as_slice(), &self.device)
            .reshape([batch_size, seq_len]);
        // from_data keeps the backend's own int width, from_ints would go through i32
        let labels = Tensor::<B, 1, Int>::from_data(TensorData::new(labels, [batch_size]), &self.device);

        let occ1 = items.into_iter().map(|item| item.occ1).collect();

        HiscoBatch { occ1, encoded, labels }
    }
}
