// ============================================================
// Layer 3 — Domain Layer
// ============================================================
// Plain Rust types describing what flows through the system:
//
//   HiscoRecord → one row of the labelled occupation table
//   HiscoItem   → a record packaged for the model
//                 (raw text + encoded sequence + label)
//
// Rules for this layer:
//   - NO Burn framework types allowed here
//   - NO file I/O
//   - Only plain Rust structs, enums, traits and errors
//
// Reference: Rust Book §5 (Structs), §10 (Traits)

// Occupation records and model-ready items
pub mod record;

// Error types shared by the data and ml layers
pub mod error;

// Core abstractions (traits) that other layers implement
pub mod traits;
