// ============================================================
// Layer 1 — CLI Commands and Arguments
// ============================================================
// Defines the three subcommands: `vocab`, `samples` and
// `generate`, and all their configurable flags.
//
// Reference: Rust Book §12 (Building a CLI Program)

use clap::{Args, Subcommand};

use crate::application::config::DatasetConfig;
use crate::domain::event::{ACTIVE_STATE, MOTION_SENSOR_TYPE};
use crate::domain::sample::DEFAULT_WINDOW_SIZE;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build vocab.txt from the event log (skipped if it exists)
    Vocab(DataArgs),

    /// Print raw training windows as JSON lines
    Samples(SamplesArgs),

    /// Write the encoded, sharded training dataset
    Generate(GenerateArgs),
}

/// Where the log and vocabulary live, and what counts as an event.
#[derive(Args, Debug, Clone)]
pub struct DataArgs {
    /// Directory containing the event log and vocabulary
    #[arg(long, default_value = "data")]
    pub data_dir: String,

    /// Event log file name inside the data directory
    #[arg(long, default_value = "tokyo.txt")]
    pub data_file: String,

    /// Vocabulary file name inside the data directory
    #[arg(long, default_value = "vocab.txt")]
    pub vocab_file: String,

    /// Sensor type tag of qualifying events
    #[arg(long, default_value = MOTION_SENSOR_TYPE)]
    pub sensor_type: String,

    /// Event state of qualifying events
    #[arg(long, default_value = ACTIVE_STATE)]
    pub active_state: String,
}

/// Windowing flags shared by the commands that cut samples.
#[derive(Args, Debug, Clone)]
pub struct WindowArgs {
    /// Number of sensor activations per training window
    #[arg(long, default_value_t = DEFAULT_WINDOW_SIZE)]
    pub window_size: usize,
}

#[derive(Args, Debug)]
pub struct SamplesArgs {
    #[command(flatten)]
    pub data: DataArgs,

    #[command(flatten)]
    pub window: WindowArgs,

    /// Stop after this many samples
    #[arg(long)]
    pub limit: Option<usize>,
}

#[derive(Args, Debug)]
pub struct GenerateArgs {
    #[command(flatten)]
    pub data: DataArgs,

    #[command(flatten)]
    pub window: WindowArgs,

    /// Directory the shards are written to
    #[arg(long, default_value = "data/generated")]
    pub output_dir: String,

    /// Seed for the per-shard shuffle
    #[arg(long)]
    pub seed: Option<u64>,

    /// Keep samples in log order inside each shard
    #[arg(long)]
    pub no_shuffle: bool,
}

/// The application layer never sees clap types.
impl From<DataArgs> for DatasetConfig {
    fn from(a: DataArgs) -> Self {
        DatasetConfig {
            data_dir:     a.data_dir,
            data_file:    a.data_file,
            vocab_file:   a.vocab_file,
            sensor_type:  a.sensor_type,
            active_state: a.active_state,
            ..DatasetConfig::default()
        }
    }
}

impl From<SamplesArgs> for DatasetConfig {
    fn from(a: SamplesArgs) -> Self {
        DatasetConfig {
            window_size: a.window.window_size,
            ..DatasetConfig::from(a.data)
        }
    }
}

impl From<GenerateArgs> for DatasetConfig {
    fn from(a: GenerateArgs) -> Self {
        DatasetConfig {
            output_dir:  a.output_dir,
            window_size: a.window.window_size,
            shuffle:     !a.no_shuffle,
            seed:        a.seed,
            ..DatasetConfig::from(a.data)
        }
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::Cli;
    use clap::Parser;

    #[test]
    fn test_generate_defaults() {
        let cli = Cli::try_parse_from(["sensor-modeling", "generate"]).unwrap();
        let Commands::Generate(args) = cli.command else {
            panic!("expected generate");
        };
        let cfg = DatasetConfig::from(args);
        assert_eq!(cfg.data_dir, "data");
        assert_eq!(cfg.window_size, 10);
        assert_eq!(cfg.sensor_type, "Control4-Motion");
        assert!(cfg.shuffle);
        assert_eq!(cfg.seed, None);
    }

    #[test]
    fn test_generate_flags() {
        let cli = Cli::try_parse_from([
            "sensor-modeling", "generate",
            "--data-dir", "/tmp/casas",
            "--output-dir", "/tmp/out",
            "--window-size", "5",
            "--seed", "9",
            "--no-shuffle",
        ])
        .unwrap();
        let Commands::Generate(args) = cli.command else {
            panic!("expected generate");
        };
        let cfg = DatasetConfig::from(args);
        assert_eq!(cfg.data_path().to_string_lossy(), "/tmp/casas/tokyo.txt");
        assert_eq!(cfg.output_dir, "/tmp/out");
        assert_eq!(cfg.window_size, 5);
        assert_eq!(cfg.seed, Some(9));
        assert!(!cfg.shuffle);
    }

    #[test]
    fn test_samples_limit() {
        let cli = Cli::try_parse_from(["sensor-modeling", "samples", "--limit", "3"]).unwrap();
        let Commands::Samples(args) = cli.command else {
            panic!("expected samples");
        };
        assert_eq!(args.limit, Some(3));
    }

    #[test]
    fn test_samples_window_size() {
        let cli = Cli::try_parse_from(["sensor-modeling", "samples", "--window-size", "4"]).unwrap();
        let Commands::Samples(args) = cli.command else {
            panic!("expected samples");
        };
        assert_eq!(DatasetConfig::from(args).window_size, 4);
    }

    #[test]
    fn test_vocab_rejects_window_size() {
        // vocabulary building does not window, so the flag is unknown there
        let res = Cli::try_parse_from(["sensor-modeling", "vocab", "--window-size", "5"]);
        assert!(res.is_err());
        assert!(Cli::try_parse_from(["sensor-modeling", "vocab"]).is_ok());
    }
}
