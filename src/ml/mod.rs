// ============================================================
// Layer 5 — ML / Model Layer (Burn)
// ============================================================
// All model code lives here:
//
//   model.rs      — HiscoClassifier: embedding → GRU → linear,
//                   producing raw logits over 1919 HISCO codes
//
//   inferencer.rs — Softmax + arg-max over those logits,
//                   straight from raw strings or from batches
//
// Reference: Burn Book §3 (Building Blocks)

/// Character-level GRU classifier and its config
pub mod model;

/// Prediction helper on top of the classifier
pub mod inferencer;
