// ============================================================
// Layer 4 — Shard Splitter
// ============================================================
// Distributes generated samples over the output shards of
// every dataset split, then shuffles each shard.
//
// The problem declares its splits as shard counts, e.g.
//   train: 9 shards, eval: 1 shard
// which we flatten into one list of 10 shards:
//
//   index:  0     1     ...  8     9
//   shard:  tr/0  tr/1  ...  tr/8  dev/0
//
// Sample i goes to shard (i mod 10). Generation is a single
// unsplit pass, so this round-robin is what produces the
// 90% / 10% train/eval ratio.
//
// Why shuffle afterwards?
//   Samples come out in log (time) order. Shuffling each shard
//   keeps one day's routine from forming a contiguous block
//   inside a training shard.
//
// Uses Fisher-Yates shuffle via rand::seq::SliceRandom.
//
// Reference: Rust Book §8 (Vectors)
//            rand crate documentation

use rand::seq::SliceRandom;
use rand::Rng;

use crate::domain::problem::{DatasetSplit, SplitSpec};

/// One output shard and the samples assigned to it
#[derive(Debug, Clone, PartialEq)]
pub struct Shard<T> {
    pub split: DatasetSplit,
    /// Index of this shard within its split
    pub index: usize,
    /// Number of shards in this split
    pub of: usize,
    pub items: Vec<T>,
}

/// Flattened list of (split, index, of) shard slots.
#[derive(Debug, Clone)]
pub struct ShardPlan {
    slots: Vec<(DatasetSplit, usize, usize)>,
}

impl ShardPlan {
    /// # Panics
    /// Panics if the splits declare no shards at all.
    pub fn new(splits: &[SplitSpec]) -> Self {
        let slots: Vec<_> = splits
            .iter()
            .flat_map(|s| (0..s.shards).map(move |i| (s.split, i, s.shards)))
            .collect();

        assert!(!slots.is_empty(), "dataset splits declare no shards");
        Self { slots }
    }

    pub fn num_shards(&self) -> usize {
        self.slots.len()
    }

    /// Assign samples round-robin across every shard slot.
    pub fn assign<T>(&self, samples: impl IntoIterator<Item = T>) -> Vec<Shard<T>> {
        let mut shards: Vec<Shard<T>> = self
            .slots
            .iter()
            .map(|&(split, index, of)| Shard { split, index, of, items: Vec::new() })
            .collect();

        let n = shards.len();
        for (i, sample) in samples.into_iter().enumerate() {
            shards[i % n].items.push(sample);
        }

        shards
    }
}

/// Shuffle the contents of every shard in place.
pub fn shuffle_shards<T, R: Rng + ?Sized>(shards: &mut [Shard<T>], rng: &mut R) {
    for shard in shards.iter_mut() {
        shard.items.shuffle(rng);
    }
}

/// Number of samples that landed in `split`
pub fn split_len<T>(shards: &[Shard<T>], split: DatasetSplit) -> usize {
    shards
        .iter()
        .filter(|s| s.split == split)
        .map(|s| s.items.len())
        .sum()
}
