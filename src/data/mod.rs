// ============================================================
// Layer 4 — Data Pipeline
// ============================================================
// Everything between the raw event log and the sharded
// training set lives here.
//
//   tokyo.txt
//       │
//       ├──► vocab_builder     → unique sensor ids → vocab.txt
//       │
//       ▼
//   SampleGenerator           → windows of 10 sensor ids
//       │
//       ▼
//   (infra::TokenEncoder)     → vocabulary ids + EOS
//       │
//       ▼
//   ShardPlan / shuffle       → 9 train shards + 1 eval shard
//
// Each module is responsible for exactly one step.
//
// Reference: Rust Book §13 (Iterators and Closures)

/// Builds the sensor vocabulary from the event log
pub mod vocab_builder;

/// Streams fixed-size windows of sensor activations
pub mod sample_generator;

/// Distributes samples over train/eval shards
pub mod splitter;
