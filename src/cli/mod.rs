// ============================================================
// Layer 1 — CLI / Presentation Layer
// ============================================================
// Parses arguments with clap, delegates to the data and
// application layers, and prints the results. Nothing here
// computes anything itself.

pub mod commands;

use anyhow::Result;
use clap::Parser;
use commands::{ClassifyArgs, Commands, EncodeArgs};

use crate::data::encoder;

#[derive(Parser, Debug)]
#[command(
    name = "hisco-classifier",
    version,
    about = "Encode occupation strings and classify them into HISCO codes with a character-level GRU."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    pub fn run(self) -> Result<()> {
        match self.command {
            Commands::Encode(args)   => run_encode(&args),
            Commands::Classify(args) => run_classify(&args),
        }
    }
}

fn run_encode(args: &EncodeArgs) -> Result<()> {
    let encoded = encoder::encode(&args.text, args.max_len);
    let unknown = encoded
        .iter()
        .filter(|&&id| id == encoder::UNKNOWN_INDEX)
        .count();

    tracing::debug!("Decoded back: {:?}", encoder::decode(&encoded));
    if unknown > 0 {
        tracing::warn!("{} character(s) are outside the alphabet and encode as 0", unknown);
    }

    println!("{}", serde_json::to_string(&encoded)?);
    Ok(())
}

fn run_classify(args: &ClassifyArgs) -> Result<()> {
    use crate::application::classify_use_case::ClassifyUseCase;

    tracing::info!("Classifying records from: {}", args.data.display());

    let results = ClassifyUseCase::new(args.into()).execute()?;

    if args.json {
        for r in &results {
            println!("{}", serde_json::to_string(r)?);
        }
    } else {
        println!("{:<34} {:>6} {:>9} {:>7}", "occ1", "label", "predicted", "prob");
        for r in &results {
            println!("{:<34} {:>6} {:>9} {:>7.4}", r.occ1, r.label, r.predicted, r.probability);
        }
    }
    Ok(())
}
