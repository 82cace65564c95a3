// ============================================================
// Layer 1 — CLI / Presentation Layer
// ============================================================
// Entry point for all user interaction, parsed with clap.
// All work is delegated to Layer 2 (application).
//
//   1. `vocab`    — build vocab.txt if it is missing
//   2. `samples`  — print raw windows as JSON lines
//   3. `generate` — write the sharded training set
//
// Reference: Rust Book §7 (Modules), §12 (CLI programs)

pub mod commands;

use anyhow::Result;
use clap::Parser;
use commands::{Commands, DataArgs, GenerateArgs, SamplesArgs};
use std::io::{self, Write};

#[derive(Parser, Debug)]
#[command(
    name = "sensor-modeling",
    version,
    about = "Turn a CASAS smart-home event log into a tokenized sensor-sequence dataset."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Match on the subcommand and dispatch to the correct use case.
    pub fn run(self) -> Result<()> {
        match self.command {
            Commands::Vocab(args)    => run_vocab(args),
            Commands::Samples(args)  => run_samples(args),
            Commands::Generate(args) => run_generate(args),
        }
    }
}

fn run_vocab(args: DataArgs) -> Result<()> {
    use crate::application::vocab_use_case::VocabUseCase;

    let report = VocabUseCase::new(args.into()).execute()?;
    let action = if report.built { "Built" } else { "Reused" };
    println!("{} vocabulary '{}' ({} sensors)", action, report.path.display(), report.entries);
    Ok(())
}

fn run_samples(args: SamplesArgs) -> Result<()> {
    use crate::application::samples_use_case::SamplesUseCase;

    let stdout  = io::stdout();
    let mut out = stdout.lock();

    let limit = args.limit;
    SamplesUseCase::new(args.into()).execute(limit, |sample| {
        serde_json::to_writer(&mut out, sample)?;
        out.write_all(b"\n")?;
        Ok(())
    })?;

    out.flush()?;
    Ok(())
}

fn run_generate(args: GenerateArgs) -> Result<()> {
    use crate::application::generate_use_case::GenerateUseCase;

    tracing::info!("Generating dataset from: {}", args.data.data_dir);

    let report = GenerateUseCase::new(args.into()).execute()?;
    println!(
        "Generated {} samples ({} train / {} eval, vocab_size={}) into {} shards.",
        report.samples,
        report.train,
        report.eval,
        report.vocab_size,
        report.shards.len()
    );
    Ok(())
}
