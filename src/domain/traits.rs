// ============================================================
// Layer 3 — Core Traits (Abstractions)
// ============================================================
// The vocabulary file behaves like a tiny cache: it is built
// once from the log, and every later run only checks that it
// exists and reads it back.
//
// Putting the existence check, the read and the write behind
// a trait lets the encoder accessor be tested with an
// in-memory double that records whether a rebuild happened.
//
// Implementations:
//   - FsVocabCache  → a file on disk (infra::vocab_store)
//   - test doubles  → in-memory strings
//
// Reference: Rust Book §10 (Traits: Defining Shared Behaviour)

use anyhow::Result;

// ─── VocabCache ───────────────────────────────────────────────────────────────
/// Storage for the newline-joined vocabulary text.
pub trait VocabCache {
    /// True if a vocabulary has already been stored.
    fn exists(&self) -> bool;

    /// Read the stored vocabulary text.
    fn read(&self) -> Result<String>;

    /// Store vocabulary text, replacing nothing: callers only
    /// write when exists() is false.
    fn write(&self, contents: &str) -> Result<()>;

    /// Human readable location, used in log messages
    fn describe(&self) -> String;
}
