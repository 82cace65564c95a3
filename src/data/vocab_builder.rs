// ============================================================
// Layer 4 — Vocabulary Builder
// ============================================================
// Scans the whole event log once and collects every sensor
// identifier that appears on a qualifying line.
//
//   2010-06-01 08:13:52 M012 ON  Control4-Motion   → M012
//   2010-06-01 08:13:55 M012 OFF Control4-Motion   → (skip)
//   2010-06-01 08:14:02 D003 ON  Control4-Door     → (skip)
//   2010-06-01 08:14:09 M013 ON  Control4-Motion   → M013
//   garbage                                        → (skip)
//
// Lines with fewer than five fields are malformed and are
// skipped without complaint. Duplicates collapse because the
// identifiers go into a set.
//
// The set is written newline-joined (no trailing newline).
// A BTreeSet keeps the file stable between machines.
//
// Reference: Rust Book §8 (Collections)

use anyhow::{Context, Result};
use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use crate::domain::event::{split_fields, EventFilter, MIN_FIELDS};
use crate::domain::traits::VocabCache;

/// Collect the unique sensor identifiers of all qualifying lines.
pub fn collect_vocab(text: &str, filter: &EventFilter) -> BTreeSet<String> {
    let mut sensors = BTreeSet::new();
    let mut skipped = 0usize;

    for line in text.split('\n') {
        let fields = split_fields(line);

        if fields.len() < MIN_FIELDS {
            skipped += 1;
            continue;
        }

        if let Some(sensor) = filter.sensor(&fields) {
            sensors.insert(sensor.to_string());
        }
    }

    tracing::debug!(
        "Collected {} unique sensors ({} short lines skipped)",
        sensors.len(),
        skipped
    );
    sensors
}

/// Join vocabulary entries into the on-disk text format
pub fn render_vocab(sensors: &BTreeSet<String>) -> String {
    sensors.iter().map(String::as_str).collect::<Vec<_>>().join("\n")
}

/// Read the log at `log_path`, build the vocabulary and store it
/// in `cache`. Returns the number of entries written.
pub fn build_vocab(log_path: &Path, cache: &dyn VocabCache, filter: &EventFilter) -> Result<usize> {
    let text = fs::read_to_string(log_path)
        .with_context(|| format!("Cannot read event log '{}'", log_path.display()))?;

    let sensors = collect_vocab(&text, filter);
    cache.write(&render_vocab(&sensors))?;

    tracing::info!(
        "Built vocabulary of {} sensors at {}",
        sensors.len(),
        cache.describe()
    );
    Ok(sensors.len())
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    struct MemoryCache {
        contents: RefCell<Option<String>>,
    }

    impl VocabCache for MemoryCache {
        fn exists(&self) -> bool {
            self.contents.borrow().is_some()
        }

        fn read(&self) -> Result<String> {
            self.contents
                .borrow()
                .clone()
                .ok_or_else(|| anyhow::anyhow!("empty cache"))
        }

        fn write(&self, contents: &str) -> Result<()> {
            *self.contents.borrow_mut() = Some(contents.to_string());
            Ok(())
        }

        fn describe(&self) -> String {
            "memory".to_string()
        }
    }

    #[test]
    fn test_duplicates_collapse() {
        let log = "t1 h1 S1 ON Control4-Motion\n\
                   t2 h1 S2 OFF Control4-Motion\n\
                   t3 h1 S1 ON Control4-Motion";
        let vocab = collect_vocab(log, &EventFilter::default());
        assert_eq!(vocab.len(), 1);
        assert!(vocab.contains("S1"));
    }

    #[test]
    fn test_non_matching_lines_never_contribute() {
        let log = "t1 h1 M1 ON Control4-Motion\n\
                   t2 h1 D1 ON Control4-Door\n\
                   t3 h1 M2 OFF Control4-Motion\n\
                   t4 h1 M3 on Control4-Motion";
        let vocab = collect_vocab(log, &EventFilter::default());
        assert_eq!(vocab.into_iter().collect::<Vec<_>>(), vec!["M1".to_string()]);
    }

    #[test]
    fn test_short_lines_are_skipped() {
        let log = "\n\
                   broken line\n\
                   t1 h1 M1 ON\n\
                   t2 h1 M2 ON Control4-Motion\n";
        let vocab = collect_vocab(log, &EventFilter::default());
        assert_eq!(vocab.into_iter().collect::<Vec<_>>(), vec!["M2".to_string()]);
    }

    #[test]
    fn test_render_has_no_trailing_newline() {
        let vocab: BTreeSet<String> = ["M2", "M1"].iter().map(|s| s.to_string()).collect();
        assert_eq!(render_vocab(&vocab), "M1\nM2");
        assert_eq!(render_vocab(&BTreeSet::new()), "");
    }

    #[test]
    fn test_build_vocab_writes_to_cache() {
        let dir = tempfile::tempdir().unwrap();
        let log = dir.path().join("tokyo.txt");
        fs::write(
            &log,
            "t1 h1 M2 ON Control4-Motion\nt2 h1 M1 ON Control4-Motion\nt3 h1 M2 ON Control4-Motion\n",
        )
        .unwrap();

        let cache = MemoryCache { contents: RefCell::new(None) };
        let n     = build_vocab(&log, &cache, &EventFilter::default()).unwrap();

        assert_eq!(n, 2);
        assert_eq!(cache.read().unwrap(), "M1\nM2");
    }

    #[test]
    fn test_missing_log_is_an_error() {
        let dir   = tempfile::tempdir().unwrap();
        let cache = MemoryCache { contents: RefCell::new(None) };
        let res   = build_vocab(&dir.path().join("missing.txt"), &cache, &EventFilter::default());
        assert!(res.is_err());
        assert!(!cache.exists());
    }
}
