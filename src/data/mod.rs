// ============================================================
// Layer 4 — Data Pipeline
// ============================================================
// Everything between the record file and a tensor batch:
//
//   records.csv / records.jsonl
//       │
//       ▼
//   RecordLoader      → InMemDataset<HiscoRecord>
//       │
//       ▼
//   HiscoDataset      → encodes occ1 per index (Dataset trait)
//       │                 using the character encoder
//       ▼
//   HiscoBatcher      → stacks items into [batch, 32] tensors
//       │
//       ▼
//   DataLoader        → feeds batches to the classifier
//
// Reference: Burn Book §4 (Datasets and Dataloaders)

/// Fixed alphabet and pad/truncate encoding
pub mod encoder;

/// Reads CSV / JSON-lines records into a Burn dataset
pub mod loader;

/// Implements Burn's Dataset trait for packaged items
pub mod dataset;

/// Implements Burn's Batcher trait to create tensor batches
pub mod batcher;
