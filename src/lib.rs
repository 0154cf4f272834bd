//! Character-level GRU classifier for historical occupation strings.
//!
//! Occupation descriptions are encoded one character at a time into a
//! fixed-length sequence ([`data::encoder`]), packaged per record by
//! [`data::dataset::HiscoDataset`], batched with Burn's data loader and
//! scored over 1919 HISCO classes by [`ml::model::HiscoClassifier`].
//!
//! ```
//! use hisco_classifier::data::encoder::{char_index, encode};
//!
//! let h = char_index('h').unwrap();
//! let i = char_index('i').unwrap();
//! assert_eq!(encode("hi", 4), vec![h, i, 1, 1]);
//! ```

#![recursion_limit = "256"]

pub mod application;
pub mod cli;
pub mod data;
pub mod domain;
pub mod ml;
