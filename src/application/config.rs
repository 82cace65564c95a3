// ============================================================
// Layer 2 — Dataset Configuration
// ============================================================
// Every knob of a dataset-generation run.
// Serialisable so the generate workflow can save it next to
// the shards it wrote.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::domain::event::{EventFilter, ACTIVE_STATE, MOTION_SENSOR_TYPE};
use crate::domain::problem::SensorProblem;
use crate::domain::sample::DEFAULT_WINDOW_SIZE;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetConfig {
    pub data_dir:     String,
    pub data_file:    String,
    pub vocab_file:   String,
    pub output_dir:   String,
    pub window_size:  usize,
    pub sensor_type:  String,
    pub active_state: String,
    pub shuffle:      bool,
    pub seed:         Option<u64>,
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            data_dir:     "data".to_string(),
            data_file:    SensorProblem::DATA_FILENAME.to_string(),
            vocab_file:   SensorProblem.vocab_filename().to_string(),
            output_dir:   "data/generated".to_string(),
            window_size:  DEFAULT_WINDOW_SIZE,
            sensor_type:  MOTION_SENSOR_TYPE.to_string(),
            active_state: ACTIVE_STATE.to_string(),
            shuffle:      true,
            seed:         None,
        }
    }
}

impl DatasetConfig {
    /// `<data_dir>/<data_file>`
    pub fn data_path(&self) -> PathBuf {
        PathBuf::from(&self.data_dir).join(&self.data_file)
    }

    /// `<data_dir>/<vocab_file>`
    pub fn vocab_path(&self) -> PathBuf {
        PathBuf::from(&self.data_dir).join(&self.vocab_file)
    }

    pub fn filter(&self) -> EventFilter {
        EventFilter::new(&self.sensor_type, &self.active_state)
    }
}
