// ============================================================
// Layer 3 — Sensor Event Filter
// ============================================================
// A CASAS log line is a run of whitespace-separated fields:
//
//   2010-06-01 08:13:52.5 M012 ON Control4-Motion
//   │          │          │    │  │
//   │          │          │    │  └─ [4] sensor type tag
//   │          │          │    └──── [3] event state
//   │          │          └───────── [2] sensor identifier
//   └──────────┴──────────────────── [0..1] timestamp
//
// Only motion sensors switching ON are interesting for the
// sequence model, so a line "qualifies" when its type tag is
// Control4-Motion and its state is ON.
//
// Reference: Rust Book §8 (Strings), §5 (Structs)

use serde::{Deserialize, Serialize};

/// Field index holding the sensor identifier
pub const SENSOR_FIELD: usize = 2;

/// Field index holding the event state
pub const STATE_FIELD: usize = 3;

/// Field index holding the sensor type tag
pub const TYPE_FIELD: usize = 4;

/// Number of fields a well-formed line must have
pub const MIN_FIELDS: usize = TYPE_FIELD + 1;

/// Sensor type tag of the motion sensors we model
pub const MOTION_SENSOR_TYPE: &str = "Control4-Motion";

/// Event state marking a sensor activation
pub const ACTIVE_STATE: &str = "ON";

/// Split a raw log line into its whitespace-delimited fields.
pub fn split_fields(line: &str) -> Vec<&str> {
    line.split_whitespace().collect()
}

/// Decides which log lines contribute a sensor identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventFilter {
    /// Required value of the type tag field
    pub sensor_type: String,

    /// Required value of the state field
    pub active_state: String,
}

impl EventFilter {
    pub fn new(sensor_type: impl Into<String>, active_state: impl Into<String>) -> Self {
        Self {
            sensor_type:  sensor_type.into(),
            active_state: active_state.into(),
        }
    }

    /// Return the sensor identifier if the fields describe a
    /// qualifying event.
    ///
    /// Callers must pass at least MIN_FIELDS fields; shorter
    /// lines are handled differently by the vocabulary builder
    /// (skipped) and the sample generator (rejected).
    pub fn sensor<'a>(&self, fields: &[&'a str]) -> Option<&'a str> {
        debug_assert!(fields.len() >= MIN_FIELDS);

        if fields[TYPE_FIELD] == self.sensor_type && fields[STATE_FIELD] == self.active_state {
            Some(fields[SENSOR_FIELD])
        } else {
            None
        }
    }
}

impl Default for EventFilter {
    fn default() -> Self {
        Self::new(MOTION_SENSOR_TYPE, ACTIVE_STATE)
    }
}
