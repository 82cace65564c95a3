// ============================================================
// Layer 2 — SamplesUseCase
// ============================================================
// Streams raw training windows to a caller-supplied sink.
//
// Like full generation, this first makes sure the vocabulary
// exists, so a preview run leaves the data directory in the
// same state a real run would.

use anyhow::{bail, Context, Result};

use crate::application::config::DatasetConfig;
use crate::data::sample_generator::SampleGenerator;
use crate::domain::sample::Sample;
use crate::infra::vocab_store::{FsVocabCache, VocabStore};

pub struct SamplesUseCase {
    config: DatasetConfig,
}

impl SamplesUseCase {
    pub fn new(config: DatasetConfig) -> Self {
        Self { config }
    }

    /// Feed up to `limit` samples (all when None) to `sink`.
    /// Returns how many samples were delivered.
    pub fn execute<F>(&self, limit: Option<usize>, mut sink: F) -> Result<usize>
    where
        F: FnMut(&Sample) -> Result<()>,
    {
        let cfg = &self.config;
        if cfg.window_size == 0 {
            bail!("window size must be at least 1");
        }

        let data_path = cfg.data_path();
        VocabStore::new(FsVocabCache::new(cfg.vocab_path()), cfg.filter()).ensure(&data_path)?;

        let generator = SampleGenerator::open(&data_path, cfg.filter(), cfg.window_size)?;

        let mut count = 0usize;
        for sample in generator.take(limit.unwrap_or(usize::MAX)) {
            let sample = sample
                .with_context(|| format!("Cannot generate samples from '{}'", data_path.display()))?;
            sink(&sample)?;
            count += 1;
        }

        tracing::info!("Streamed {} samples", count);
        Ok(count)
    }
}
