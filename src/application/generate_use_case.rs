// ============================================================
// Layer 2 — GenerateUseCase
// ============================================================
// Orchestrates full dataset generation in order:
//
//   Step 1: Get a token encoder      (Layer 6 - infra)
//           builds vocab.txt first if it is missing
//   Step 2: Stream raw samples       (Layer 4 - data)
//   Step 3: Encode each sample       (Layer 6 - infra)
//   Step 4: Assign to shards         (Layer 4 - data)
//   Step 5: Shuffle each shard       (Layer 4 - data)
//   Step 6: Write shards             (Layer 6 - infra)
//   Step 7: Save config              (Layer 6 - infra)
//
// Generation is a single unsplit pass: the round-robin shard
// assignment is what divides the data 90% train / 10% eval.
//
// Reference: Rust Book §13 (Iterators and Closures)

use anyhow::{bail, Context, Result};
use rand::{rngs::StdRng, SeedableRng};
use std::path::PathBuf;

use crate::application::config::DatasetConfig;
use crate::data::{
    sample_generator::SampleGenerator,
    splitter::{shuffle_shards, split_len, ShardPlan},
};
use crate::domain::problem::{DatasetSplit, SensorProblem};
use crate::domain::sample::EncodedSample;
use crate::infra::{
    dataset_store::DatasetStore,
    vocab_store::{FsVocabCache, VocabStore},
};

/// Summary of a generation run
#[derive(Debug, Clone)]
pub struct GenerateReport {
    pub samples:    usize,
    pub train:      usize,
    pub eval:       usize,
    pub vocab_size: usize,
    /// Shard files in shard order (train first)
    pub shards:     Vec<PathBuf>,
}

pub struct GenerateUseCase {
    config: DatasetConfig,
    problem: SensorProblem,
}

impl GenerateUseCase {
    pub fn new(config: DatasetConfig) -> Self {
        Self { config, problem: SensorProblem }
    }

    /// Execute the full generation pipeline end to end
    pub fn execute(&self) -> Result<GenerateReport> {
        let cfg = &self.config;
        if cfg.window_size == 0 {
            bail!("window size must be at least 1");
        }
        debug_assert!(!self.problem.is_generate_per_split());

        // ── Step 1: Token encoder (builds vocab.txt if missing) ───────────────
        let data_path = cfg.data_path();
        let vocab     = VocabStore::new(FsVocabCache::new(cfg.vocab_path()), cfg.filter());
        let encoder   = vocab.load_or_build(&data_path)?;

        if encoder.vocab_size() > self.problem.approx_vocab_size() * 2 {
            tracing::warn!(
                "Vocabulary has {} ids, far above the expected ~{}",
                encoder.vocab_size(),
                self.problem.approx_vocab_size()
            );
        }

        // ── Step 2 + 3: Stream and encode samples ─────────────────────────────
        tracing::info!("Generating samples from '{}'", data_path.display());
        let generator = SampleGenerator::open(&data_path, cfg.filter(), cfg.window_size)?;

        let mut encoded: Vec<EncodedSample> = Vec::new();
        for sample in generator {
            let sample = sample
                .with_context(|| format!("Cannot generate samples from '{}'", data_path.display()))?;
            let ids = encoder
                .encode_sample(&sample)
                .with_context(|| format!("Cannot encode sample '{}'", sample.targets))?;
            encoded.push(ids);
        }
        let total = encoded.len();
        tracing::info!("Generated {} samples", total);

        // ── Step 4: Round-robin over train + eval shards ──────────────────────
        let plan       = ShardPlan::new(&self.problem.dataset_splits());
        let mut shards = plan.assign(encoded);

        // ── Step 5: Shuffle within each shard ─────────────────────────────────
        if cfg.shuffle {
            let mut rng = match cfg.seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None       => StdRng::from_entropy(),
            };
            shuffle_shards(&mut shards, &mut rng);
        }

        let train = split_len(&shards, DatasetSplit::Train);
        let eval  = split_len(&shards, DatasetSplit::Eval);
        tracing::info!("Split: {} train, {} eval over {} shards", train, eval, plan.num_shards());

        // ── Step 6 + 7: Write shards and config ───────────────────────────────
        let store = DatasetStore::new(&cfg.output_dir)?;
        let paths = store.write_shards(&self.problem, &shards)?;
        store.save_config(cfg)?;

        tracing::info!("Wrote {} shards to '{}'", paths.len(), store.dir().display());

        Ok(GenerateReport {
            samples: total,
            train,
            eval,
            vocab_size: encoder.vocab_size(),
            shards: paths,
        })
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::dataset_store::read_shard;
    use crate::infra::token_encoder::EOS_ID;
    use std::fs;
    use std::path::Path;

    /// 1005 qualifying lines over 5 sensors, with noise lines between
    fn write_log(dir: &Path) {
        let mut log = String::new();
        for i in 0..1005 {
            log.push_str(&format!("2010-06-01 08:00:00 M{:03} ON Control4-Motion\n", i % 5));
            if i % 3 == 0 {
                log.push_str("2010-06-01 08:00:01 M001 OFF Control4-Motion\n");
                log.push_str("2010-06-01 08:00:02 D001 ON Control4-Door\n");
            }
        }
        fs::write(dir.join("tokyo.txt"), log).unwrap();
    }

    fn config(dir: &Path, out: &str, seed: Option<u64>, shuffle: bool) -> DatasetConfig {
        DatasetConfig {
            data_dir:   dir.to_string_lossy().to_string(),
            output_dir: dir.join(out).to_string_lossy().to_string(),
            shuffle,
            seed,
            ..DatasetConfig::default()
        }
    }

    #[test]
    fn test_generates_ninety_ten_shards() {
        let dir = tempfile::tempdir().unwrap();
        write_log(dir.path());

        let report = GenerateUseCase::new(config(dir.path(), "out", Some(1), true))
            .execute()
            .unwrap();

        // 1005 sensors → 100 full windows, 5 dropped
        assert_eq!(report.samples, 100);
        assert_eq!(report.train, 90);
        assert_eq!(report.eval, 10);
        assert_eq!(report.vocab_size, 7);
        assert_eq!(report.shards.len(), 10);
        assert!(report.shards[9].ends_with("sensor_model-dev-00000-of-00001"));

        let eval: Vec<EncodedSample> = read_shard(&report.shards[9]).unwrap();
        assert_eq!(eval.len(), 10);
        for s in &eval {
            assert_eq!(s.targets.len(), 11);
            assert_eq!(*s.targets.last().unwrap(), EOS_ID);
        }

        assert!(dir.path().join("vocab.txt").exists());
        assert!(dir.path().join("out").join("dataset_config.json").exists());
    }

    #[test]
    fn test_unshuffled_shards_keep_log_order() {
        let dir = tempfile::tempdir().unwrap();
        write_log(dir.path());

        let report = GenerateUseCase::new(config(dir.path(), "out", None, false))
            .execute()
            .unwrap();

        // samples 0, 10, 20 ... land in shard 0; every window starts
        // at a multiple of 10 sensors, so each starts with M000
        let first: Vec<EncodedSample> = read_shard(&report.shards[0]).unwrap();
        assert_eq!(first.len(), 10);
        assert!(first.iter().all(|s| s.targets[0] == 2));
    }

    #[test]
    fn test_same_seed_same_output() {
        let dir = tempfile::tempdir().unwrap();
        write_log(dir.path());

        let a = GenerateUseCase::new(config(dir.path(), "a", Some(42), true)).execute().unwrap();
        let b = GenerateUseCase::new(config(dir.path(), "b", Some(42), true)).execute().unwrap();

        for (pa, pb) in a.shards.iter().zip(&b.shards) {
            assert_eq!(fs::read(pa).unwrap(), fs::read(pb).unwrap());
        }
    }

    #[test]
    fn test_missing_log_fails() {
        let dir = tempfile::tempdir().unwrap();
        let res = GenerateUseCase::new(config(dir.path(), "out", None, true)).execute();
        assert!(res.is_err());
    }

    #[test]
    fn test_zero_window_rejected() {
        let dir = tempfile::tempdir().unwrap();
        write_log(dir.path());
        let cfg = DatasetConfig {
            window_size: 0,
            ..config(dir.path(), "out", None, true)
        };
        assert!(GenerateUseCase::new(cfg).execute().is_err());
    }
}
