// ============================================================
// Layer 6 — Vocabulary Store
// ============================================================
// Owns the vocab.txt cache and hands out token encoders.
//
// The rule is simple: if the vocabulary file exists it is used
// as-is, otherwise it is built from the event log first. An
// existing file is never rewritten, even if the log changed.
// Delete vocab.txt to force a rebuild.
//
// There is no locking; two runs racing on an empty data
// directory may both build, and the last write wins.
//
// Reference: Rust Book §9 (Error Handling with anyhow)

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use crate::data::vocab_builder::build_vocab;
use crate::domain::event::EventFilter;
use crate::domain::traits::VocabCache;
use crate::infra::token_encoder::TokenEncoder;

// ─── FsVocabCache ─────────────────────────────────────────────────────────────
/// A vocabulary stored as a plain text file.
pub struct FsVocabCache {
    path: PathBuf,
}

impl FsVocabCache {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl VocabCache for FsVocabCache {
    fn exists(&self) -> bool {
        self.path.exists()
    }

    fn read(&self) -> Result<String> {
        fs::read_to_string(&self.path)
            .with_context(|| format!("Cannot read vocabulary '{}'", self.path.display()))
    }

    fn write(&self, contents: &str) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, contents)
            .with_context(|| format!("Cannot write vocabulary '{}'", self.path.display()))
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

// ─── VocabStore ───────────────────────────────────────────────────────────────
pub struct VocabStore<C: VocabCache> {
    cache: C,
    filter: EventFilter,
}

impl<C: VocabCache> VocabStore<C> {
    pub fn new(cache: C, filter: EventFilter) -> Self {
        Self { cache, filter }
    }

    pub fn cache(&self) -> &C {
        &self.cache
    }

    /// Build the vocabulary from `log_path` unless one is already
    /// stored. Returns true if a build happened.
    pub fn ensure(&self, log_path: &Path) -> Result<bool> {
        if self.cache.exists() {
            tracing::info!("Using existing vocabulary at {}", self.cache.describe());
            return Ok(false);
        }

        tracing::info!("No vocabulary at {}, building from log", self.cache.describe());
        build_vocab(log_path, &self.cache, &self.filter)?;
        Ok(true)
    }

    /// Ensure the vocabulary exists, then load an encoder from it.
    pub fn load_or_build(&self, log_path: &Path) -> Result<TokenEncoder> {
        self.ensure(log_path)?;

        let text    = self.cache.read()?;
        let encoder = TokenEncoder::from_vocab_text(&text)
            .with_context(|| format!("Cannot load encoder from {}", self.cache.describe()))?;

        tracing::info!("Loaded token encoder (vocab_size={})", encoder.vocab_size());
        Ok(encoder)
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};

    /// In-memory cache that counts how often it was written
    struct CountingCache {
        contents: RefCell<Option<String>>,
        writes:   Cell<usize>,
    }

    impl CountingCache {
        fn with(contents: Option<&str>) -> Self {
            Self {
                contents: RefCell::new(contents.map(str::to_string)),
                writes:   Cell::new(0),
            }
        }
    }

    impl VocabCache for CountingCache {
        fn exists(&self) -> bool {
            self.contents.borrow().is_some()
        }

        fn read(&self) -> Result<String> {
            self.contents
                .borrow()
                .clone()
                .ok_or_else(|| anyhow::anyhow!("nothing stored"))
        }

        fn write(&self, contents: &str) -> Result<()> {
            self.writes.set(self.writes.get() + 1);
            *self.contents.borrow_mut() = Some(contents.to_string());
            Ok(())
        }

        fn describe(&self) -> String {
            "counting cache".to_string()
        }
    }

    const LOG: &str = "t1 h1 S1 ON Control4-Motion\n\
                       t2 h1 S2 OFF Control4-Motion\n\
                       t3 h1 S1 ON Control4-Motion\n";

    fn write_log(dir: &Path) -> PathBuf {
        let path = dir.join("tokyo.txt");
        fs::write(&path, LOG).unwrap();
        path
    }

    #[test]
    fn test_builds_when_missing() {
        let dir   = tempfile::tempdir().unwrap();
        let log   = write_log(dir.path());
        let store = VocabStore::new(CountingCache::with(None), EventFilter::default());

        let enc = store.load_or_build(&log).unwrap();
        assert_eq!(store.cache().writes.get(), 1);
        assert_eq!(store.cache().read().unwrap(), "S1");
        assert_eq!(enc.vocab_size(), 3);
    }

    #[test]
    fn test_existing_vocab_is_not_rebuilt() {
        // the log does not even exist: a rebuild attempt would fail
        let store = VocabStore::new(CountingCache::with(Some("M9")), EventFilter::default());
        let enc   = store.load_or_build(Path::new("/nonexistent/tokyo.txt")).unwrap();

        assert_eq!(store.cache().writes.get(), 0);
        assert_eq!(enc.encode("M9").unwrap(), vec![2]);
    }

    #[test]
    fn test_second_run_leaves_file_byte_identical() {
        let dir   = tempfile::tempdir().unwrap();
        let log   = write_log(dir.path());
        let vocab = dir.path().join("vocab.txt");

        let store = VocabStore::new(FsVocabCache::new(&vocab), EventFilter::default());
        assert!(store.ensure(&log).unwrap());
        let first = fs::read(&vocab).unwrap();

        // change the log: the cached vocabulary must win
        fs::write(&log, "t1 h1 S7 ON Control4-Motion\n").unwrap();
        assert!(!store.ensure(&log).unwrap());
        assert_eq!(fs::read(&vocab).unwrap(), first);
    }

    #[test]
    fn test_missing_log_without_vocab_fails() {
        let dir   = tempfile::tempdir().unwrap();
        let store = VocabStore::new(
            FsVocabCache::new(dir.path().join("vocab.txt")),
            EventFilter::default(),
        );
        assert!(store.load_or_build(&dir.path().join("tokyo.txt")).is_err());
        assert!(!store.cache().exists());
    }
}
