// ============================================================
// Layer 5 — Inferencer
// ============================================================
// Turns classifier logits into one prediction per row:
//
//   logits [batch, num_classes]
//     → softmax over classes
//     → arg-max label and its probability
//
// The model itself stays logits-only; normalisation belongs to
// whoever consumes the scores, and this is one such consumer.
//
// Weights are whatever the model was built with. Loading trained
// weights is not something this crate does.

use burn::{prelude::*, tensor::activation::softmax};
use serde::Serialize;

use crate::data::batcher::HiscoBatch;
use crate::data::encoder::CharEncoder;
use crate::domain::error::ModelError;
use crate::ml::model::{HiscoClassifier, HiscoClassifierConfig};

/// Best class for one input row.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Prediction {
    pub label:       i64,
    pub probability: f32,
}

pub struct Inferencer<B: Backend> {
    model:   HiscoClassifier<B>,
    encoder: CharEncoder,
    device:  B::Device,
}

impl<B: Backend> Inferencer<B> {
    /// Build a fresh classifier from `config` on `device`.
    pub fn new(config: &HiscoClassifierConfig, device: B::Device) -> Result<Self, ModelError> {
        let model = config.try_init(&device)?;
        tracing::info!(
            "Classifier ready: vocab_size={}, hidden_size={}, num_classes={}, params={}",
            config.vocab_size,
            config.hidden_size,
            config.num_classes,
            model.num_params(),
        );
        Ok(Self::from_model(model, device))
    }

    pub fn from_model(model: HiscoClassifier<B>, device: B::Device) -> Self {
        Self { model, encoder: CharEncoder::default(), device }
    }

    /// Predict from an already encoded `[batch, seq_len]` tensor.
    pub fn predict(&self, encoded: Tensor<B, 2, Int>) -> Result<Vec<Prediction>, ModelError> {
        let logits = self.model.forward(encoded);
        let probs  = softmax(logits, 1);

        // max_dim keeps the reduced axis: both come back as [batch, 1]
        let (best_probs, best_labels) = probs.max_dim_with_indices(1);

        let best_probs: Vec<f32> = best_probs
            .into_data()
            .convert::<f32>()
            .to_vec()
            .map_err(|e| ModelError::ReadOutput(format!("{e:?}")))?;
        let best_labels: Vec<i64> = best_labels
            .into_data()
            .convert::<i64>()
            .to_vec()
            .map_err(|e| ModelError::ReadOutput(format!("{e:?}")))?;

        Ok(best_labels
            .into_iter()
            .zip(best_probs)
            .map(|(label, probability)| Prediction { label, probability })
            .collect())
    }

    pub fn predict_batch(&self, batch: &HiscoBatch<B>) -> Result<Vec<Prediction>, ModelError> {
        self.predict(batch.encoded.clone())
    }

    /// Encode raw strings and predict a class for each.
    pub fn predict_texts(&self, texts: &[&str]) -> Result<Vec<Prediction>, ModelError> {
        if texts.is_empty() {
            return Ok(Vec::new());
        }

        let max_len = self.encoder.max_len();
        let flat: Vec<i32> = texts
            .iter()
            .flat_map(|text| self.encoder.encode(text))
            .map(|id| id as i32)
            .collect();

        let encoded = Tensor::<B, 1, Int>::from_ints(flat.as_slice(), &self.device)
            .reshape([texts.len(), max_len]);

        self.predict(encoded)
    }
}
