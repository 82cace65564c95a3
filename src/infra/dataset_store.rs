// ============================================================
// Layer 6 — Dataset Store
// ============================================================
// Writes the generated shards and the run configuration.
//
// File layout:
//   <output_dir>/
//     sensor_model-train-00000-of-00009   ← JSON lines
//     ...
//     sensor_model-train-00008-of-00009
//     sensor_model-dev-00000-of-00001
//     dataset_config.json                 ← DatasetConfig
//
// Each shard line is one encoded sample:
//   {"targets":[14,3,3,9,27,27,11,4,4,8,1]}
//
// Shards are rewritten on every run.
//
// Reference: Rust Book §12 (I/O and File Handling)

use anyhow::{Context, Result};
use serde::Serialize;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::application::config::DatasetConfig;
use crate::data::splitter::Shard;
use crate::domain::problem::SensorProblem;

const CONFIG_FILENAME: &str = "dataset_config.json";

pub struct DatasetStore {
    dir: PathBuf,
}

impl DatasetStore {
    /// Create a store rooted at `dir`, creating the directory.
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)
            .with_context(|| format!("Cannot create output directory '{}'", dir.display()))?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Write one shard as JSON lines and return its path.
    pub fn write_shard<T: Serialize>(&self, problem: &SensorProblem, shard: &Shard<T>) -> Result<PathBuf> {
        let path = self
            .dir
            .join(problem.shard_filename(shard.split, shard.index, shard.of));

        let file = File::create(&path)
            .with_context(|| format!("Cannot create shard '{}'", path.display()))?;
        let mut out = BufWriter::new(file);

        for item in &shard.items {
            serde_json::to_writer(&mut out, item)?;
            out.write_all(b"\n")?;
        }
        out.flush()?;

        tracing::debug!("Wrote {} samples to '{}'", shard.items.len(), path.display());
        Ok(path)
    }

    /// Write every shard, returning the paths in shard order.
    pub fn write_shards<T: Serialize>(&self, problem: &SensorProblem, shards: &[Shard<T>]) -> Result<Vec<PathBuf>> {
        shards.iter().map(|s| self.write_shard(problem, s)).collect()
    }

    pub fn save_config(&self, cfg: &DatasetConfig) -> Result<()> {
        let path = self.dir.join(CONFIG_FILENAME);
        let json = serde_json::to_string_pretty(cfg)?;

        fs::write(&path, json)
            .with_context(|| format!("Cannot write config to '{}'", path.display()))?;

        tracing::debug!("Saved dataset config to '{}'", path.display());
        Ok(())
    }

    pub fn load_config(&self) -> Result<DatasetConfig> {
        let path = self.dir.join(CONFIG_FILENAME);
        let json = fs::read_to_string(&path)
            .with_context(|| format!("Cannot read config from '{}'", path.display()))?;

        Ok(serde_json::from_str(&json)?)
    }
}

/// Read a shard back as JSON values, one per line
pub fn read_shard<T: serde::de::DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Cannot read shard '{}'", path.display()))?;

    text.lines()
        .filter(|l| !l.trim().is_empty())
        .map(|l| serde_json::from_str(l).map_err(Into::into))
        .collect()
}
