// ============================================================
// Layer 1 — CLI Commands and Arguments
// ============================================================
// Two subcommands:
//
//   encode   — show how a string is encoded for the model
//   classify — run the pipeline over a record file
//
// Reference: Rust Book §12 (Building a CLI Program)

use std::path::PathBuf;

use clap::{Args, Subcommand};

use crate::application::classify_use_case::ClassifyConfig;
use crate::data::encoder::MAX_SEQ_LEN;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the character indices of an occupation string
    Encode(EncodeArgs),

    /// Classify every record in a CSV or JSON-lines file
    Classify(ClassifyArgs),
}

#[derive(Args, Debug)]
pub struct EncodeArgs {
    /// Text to encode, used as-is (no lowercasing or trimming)
    #[arg(long)]
    pub text: String,

    /// Length of the encoded sequence
    #[arg(long, default_value_t = MAX_SEQ_LEN)]
    pub max_len: usize,
}

#[derive(Args, Debug)]
pub struct ClassifyArgs {
    /// Record file with `occ1` and `label` columns (.csv, .jsonl or .json)
    #[arg(long)]
    pub data: PathBuf,

    /// Records per forward pass
    #[arg(long, default_value_t = 64)]
    pub batch_size: usize,

    /// Seed the parameter initialisation for repeatable output
    #[arg(long)]
    pub seed: Option<u64>,

    /// JSON file with vocab_size / hidden_size / num_classes
    #[arg(long)]
    pub model_config: Option<PathBuf>,

    /// Emit one JSON object per record instead of a table
    #[arg(long)]
    pub json: bool,
}

/// Layer 1 → Layer 2 boundary: the use case never sees clap types.
impl From<&ClassifyArgs> for ClassifyConfig {
    fn from(a: &ClassifyArgs) -> Self {
        ClassifyConfig {
            data_path:    a.data.clone(),
            batch_size:   a.batch_size,
            seed:         a.seed,
            model_config: a.model_config.clone(),
        }
    }
}
