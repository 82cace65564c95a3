// ============================================================
// Layer 3 — Domain Layer
// ============================================================
// Pure Rust structs, enums and traits that define the core
// concepts of the dataset generator.
//
// Rules for this layer:
//   - NO tokenizer types allowed here
//   - NO file I/O
//   - Only plain Rust structs, enums, and traits
//
// Everything the log format "means" lives here: which field
// holds the sensor id, what counts as an active motion event,
// what a sample looks like and how the dataset is split.
//
// Reference: Rust Book §5 (Structs), §10 (Traits)

// Log line layout and the qualifying-event filter
pub mod event;

// Raw and encoded training samples
pub mod sample;

// Static problem configuration (vocab size, shard splits)
pub mod problem;

// Typed errors for the data and encoder layers
pub mod error;

// Core abstractions (traits) that other layers implement
pub mod traits;
