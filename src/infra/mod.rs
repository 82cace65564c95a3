// ============================================================
// Layer 6 — Infrastructure Layer
// ============================================================
// Everything that touches the disk or the tokenizer library:
//
//   vocab_store.rs   — vocab.txt as an existence-checked cache.
//                      Builds the vocabulary from the log the
//                      first time, reuses it afterwards, and
//                      hands out token encoders.
//
//   token_encoder.rs — Word-level encoder over the vocabulary
//                      (<pad>, <EOS>, then one id per sensor).
//
//   dataset_store.rs — Writes shard files as JSON lines and
//                      saves the run configuration.
//
// Reference: Rust Book §7 (Modules)
//            Rust Book §9 (Error Handling with anyhow)

/// Vocabulary cache and encoder accessor
pub mod vocab_store;

/// Sensor id ↔ token id mapping
pub mod token_encoder;

/// Shard and config persistence
pub mod dataset_store;
