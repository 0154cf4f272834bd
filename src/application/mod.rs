// ============================================================
// Layer 2 — Application / Use Cases
// ============================================================
// Workflow coordination only: no model maths, no printing.
// The CLI layer builds a config, hands it to a use case and
// renders whatever comes back.

// Records file → dataset → batches → predictions
pub mod classify_use_case;
