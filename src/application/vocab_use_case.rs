// ============================================================
// Layer 2 — VocabUseCase
// ============================================================
// Makes sure the vocabulary file exists, building it from the
// event log only when it is missing.

use anyhow::Result;
use std::path::PathBuf;

use crate::application::config::DatasetConfig;
use crate::domain::traits::VocabCache;
use crate::infra::vocab_store::{FsVocabCache, VocabStore};

/// Outcome of a vocabulary run
#[derive(Debug, Clone)]
pub struct VocabReport {
    pub path:    PathBuf,
    /// False when an existing file was reused
    pub built:   bool,
    pub entries: usize,
}

pub struct VocabUseCase {
    config: DatasetConfig,
}

impl VocabUseCase {
    pub fn new(config: DatasetConfig) -> Self {
        Self { config }
    }

    pub fn execute(&self) -> Result<VocabReport> {
        let cfg   = &self.config;
        let store = VocabStore::new(FsVocabCache::new(cfg.vocab_path()), cfg.filter());

        let built   = store.ensure(&cfg.data_path())?;
        let entries = store
            .cache()
            .read()?
            .lines()
            .filter(|l| !l.trim().is_empty())
            .count();

        Ok(VocabReport {
            path: store.cache().path().to_path_buf(),
            built,
            entries,
        })
    }
}
