// ============================================================
// Layer 3 — Sample Domain Types
// ============================================================
// A Sample is one training example: a window of consecutive
// sensor activations, joined with single spaces.
//
//   {"targets": "M012 M013 M013 M020 ..."}
//
// The model is trained as a language model over these
// sequences (targets only, no inputs), so "targets" is the
// only key.
//
// An EncodedSample is the same window after the token encoder
// mapped each identifier to its vocabulary id and appended EOS.
//
// Reference: Rust Book §5 (Structs)

use serde::{Deserialize, Serialize};

/// Number of sensor identifiers in one training window
pub const DEFAULT_WINDOW_SIZE: usize = 10;

/// One raw training example.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sample {
    /// Space-joined sensor identifiers, in log order
    pub targets: String,
}

impl Sample {
    /// Build a sample from an ordered window of sensor identifiers.
    pub fn from_window(sensors: &[String]) -> Self {
        Self { targets: sensors.join(" ") }
    }

    /// Iterate over the sensor identifiers in this sample
    pub fn sensors(&self) -> impl Iterator<Item = &str> {
        self.targets.split_whitespace()
    }

    pub fn len(&self) -> usize {
        self.sensors().count()
    }

    pub fn is_empty(&self) -> bool {
        self.targets.trim().is_empty()
    }
}

/// A sample after tokenisation — vocabulary ids ending with EOS.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncodedSample {
    pub targets: Vec<u32>,
}

impl EncodedSample {
    pub fn new(targets: Vec<u32>) -> Self {
        Self { targets }
    }
}
