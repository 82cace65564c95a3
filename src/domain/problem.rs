// ============================================================
// Layer 3 — Sensor Problem Definition
// ============================================================
// Static description of the dataset this tool produces.
//
// The values here are what a training framework needs to know
// about the problem before it reads a single shard:
//
//   approx_vocab_size      — 50 (the tokyo house has ~50 sensors)
//   is_generate_per_split  — false: one generation pass, the
//                            shard splitter divides the output
//   vocab_filename         — vocab.txt, next to the log
//   dataset_splits         — 9 train shards + 1 eval shard
//
// With round-robin distribution over 10 shards, 9 shards of
// train and 1 of eval gives a 90% / 10% split.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Which part of the dataset a shard belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DatasetSplit {
    Train,
    Eval,
}

impl fmt::Display for DatasetSplit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Train => write!(f, "train"),
            Self::Eval  => write!(f, "dev"),
        }
    }
}

/// How many output shards a split is written to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SplitSpec {
    pub split:  DatasetSplit,
    pub shards: usize,
}

/// The CASAS tokyo sensor modelling problem.
#[derive(Debug, Clone, Copy, Default)]
pub struct SensorProblem;

impl SensorProblem {
    /// Name used as the prefix of every shard file
    pub const NAME: &'static str = "sensor_model";

    /// Raw event log inside the data directory
    pub const DATA_FILENAME: &'static str = "tokyo.txt";

    pub fn approx_vocab_size(&self) -> usize {
        50
    }

    pub fn is_generate_per_split(&self) -> bool {
        false
    }

    pub fn vocab_filename(&self) -> &'static str {
        "vocab.txt"
    }

    pub fn dataset_splits(&self) -> Vec<SplitSpec> {
        vec![
            SplitSpec { split: DatasetSplit::Train, shards: 9 },
            SplitSpec { split: DatasetSplit::Eval,  shards: 1 },
        ]
    }

    /// Shard file name, e.g. `sensor_model-train-00003-of-00009`.
    pub fn shard_filename(&self, split: DatasetSplit, shard: usize, num_shards: usize) -> String {
        format!("{}-{}-{:05}-of-{:05}", Self::NAME, split, shard, num_shards)
    }
}
