// ============================================================
// Layer 5 — HISCO Sequence Classifier
// ============================================================
// Three stages, applied in order:
//
//   input [batch, seq_len]                (character indices)
//     │  Embedding(vocab_size → hidden_size)
//     ▼
//   [batch, seq_len, hidden_size]
//     │  GRU, one layer, batch first, zero initial state
//     ▼
//   [batch, seq_len, hidden_size]          (state at every step)
//     │  keep only the last time step
//     ▼
//   [batch, hidden_size]
//     │  Linear(hidden_size → num_classes)
//     ▼
//   logits [batch, num_classes]
//
// The output is raw, unnormalised scores. No softmax here:
// loss functions and the Inferencer apply their own.
//
// There is no dropout, so the forward pass is a pure function
// of the input and the parameters.
//
// Reference: Burn Book §3 (Building Blocks)
//            Cho et al. (2014) GRU

use burn::{
    nn::{
        gru::{Gru, GruConfig},
        Embedding, EmbeddingConfig,
        Linear, LinearConfig,
    },
    prelude::*,
};

use crate::data::encoder::max_index;
use crate::domain::error::ModelError;

/// Number of HISCO classes the classifier scores.
pub const NUM_HISCO_CLASSES: usize = 1919;

// Config derive brings Clone, serde and the with_* builders; only Debug is added.
#[derive(Config, Debug)]
pub struct HiscoClassifierConfig {
    /// Rows in the embedding table, must exceed the encoder's largest index
    #[config(default = 100)]
    pub vocab_size:  usize,
    #[config(default = 128)]
    pub hidden_size: usize,
    /// Defaults to NUM_HISCO_CLASSES; the attribute needs a literal
    #[config(default = 1919)]
    pub num_classes: usize,
}

impl HiscoClassifierConfig {
    pub fn init<B: Backend>(&self, device: &B::Device) -> HiscoClassifier<B> {
        let embedding  = EmbeddingConfig::new(self.vocab_size, self.hidden_size).init(device);
        let gru        = GruConfig::new(self.hidden_size, self.hidden_size, true).init(device);
        let classifier = LinearConfig::new(self.hidden_size, self.num_classes).init(device);
        HiscoClassifier { embedding, gru, classifier }
    }

    /// Check the sizes before building anything.
    ///
    /// Every index the character encoder can emit (0..=70) must
    /// have a row in the embedding table.
    pub fn validate(&self) -> Result<(), ModelError> {
        let max_index = max_index() as usize;
        if self.vocab_size <= max_index {
            return Err(ModelError::VocabTooSmall { vocab_size: self.vocab_size, max_index });
        }
        if self.hidden_size == 0 {
            return Err(ModelError::InvalidDimension { name: "hidden_size" });
        }
        if self.num_classes == 0 {
            return Err(ModelError::InvalidDimension { name: "num_classes" });
        }
        Ok(())
    }

    /// [`validate`](Self::validate), then [`init`](Self::init).
    pub fn try_init<B: Backend>(&self, device: &B::Device) -> Result<HiscoClassifier<B>, ModelError> {
        self.validate()?;
        Ok(self.init(device))
    }
}

#[derive(Module, Debug)]
pub struct HiscoClassifier<B: Backend> {
    pub embedding:  Embedding<B>,
    pub gru:        Gru<B>,
    pub classifier: Linear<B>,
}

impl<B: Backend> HiscoClassifier<B> {
    /// input: [batch, seq_len] → logits: [batch, num_classes]
    ///
    /// Indices outside `[0, vocab_size)` and empty sequences are
    /// rejected by Burn's own checks (embedding lookup, slice bounds),
    /// not here.
    pub fn forward(&self, input: Tensor<B, 2, Int>) -> Tensor<B, 2> {
        let [batch_size, seq_len] = input.dims();

        let x = self.embedding.forward(input);
        let x = self.gru.forward(x, None); // [batch, seq_len, hidden]
        let [_, _, hidden_size] = x.dims();

        // Only the state after the final character is classified.
        let last = x
            .slice([0..batch_size, seq_len.saturating_sub(1)..seq_len, 0..hidden_size])
            .reshape([batch_size, hidden_size]);

        self.classifier.forward(last)
    }
}
