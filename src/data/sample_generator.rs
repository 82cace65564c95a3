// ============================================================
// Layer 4 — Sample Generator
// ============================================================
// Streams the event log line by line and cuts the sequence of
// qualifying sensor activations into non-overlapping windows.
//
// Example with window_size = 3 (qualifying sensors only):
//   Log:     M1 M2 M3 M4 M5 M6 M7 M8
//   Sample 1: "M1 M2 M3"
//   Sample 2: "M4 M5 M6"
//   (M7 M8 is a partial window → dropped at end of file)
//
// Ordering detail: a full window is released when the NEXT
// line is read, before that line is filtered. At end of input
// a window that is exactly full is still released, a partial
// one is not.
//
// Unlike the vocabulary builder this pass does NOT tolerate
// short lines: a line with fewer than five fields ends the
// iteration with a MalformedLine error. A full window read
// before the bad line is still released first.
//
// A read error (e.g. invalid UTF-8) also ends the iteration,
// but a full window waiting on the unreadable line is lost.
//
// The generator is a plain Iterator, so it is lazy, finite and
// can only be walked once. Dropping it closes the file.
//
// Reference: Rust Book §13 (Iterators)

use std::fs::File;
use std::io::{BufRead, BufReader, Lines};
use std::path::Path;

use crate::domain::error::{DatasetError, DatasetResult};
use crate::domain::event::{split_fields, EventFilter, MIN_FIELDS};
use crate::domain::sample::Sample;

pub struct SampleGenerator<R> {
    lines: Lines<R>,
    filter: EventFilter,
    window_size: usize,
    /// Sensors collected for the current window
    window: Vec<String>,
    /// 1-based number of the last line read
    line_no: usize,
    /// Error held back while the window before it is emitted
    pending: Option<DatasetError>,
    done: bool,
}

impl SampleGenerator<BufReader<File>> {
    /// Open the log at `path` for streaming.
    pub fn open(path: &Path, filter: EventFilter, window_size: usize) -> DatasetResult<Self> {
        let file = File::open(path).map_err(|source| DatasetError::Log {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!("Streaming samples from '{}'", path.display());
        Ok(Self::new(BufReader::new(file), filter, window_size))
    }
}

impl<R: BufRead> SampleGenerator<R> {
    /// # Panics
    /// Panics if window_size is 0.
    pub fn new(reader: R, filter: EventFilter, window_size: usize) -> Self {
        assert!(window_size > 0, "window_size must be at least 1");
        Self {
            lines: reader.lines(),
            filter,
            window_size,
            window: Vec::with_capacity(window_size),
            line_no: 0,
            pending: None,
            done: false,
        }
    }

    fn window_full(&self) -> bool {
        self.window.len() >= self.window_size
    }

    fn take_window(&mut self) -> Sample {
        let sample = Sample::from_window(&self.window);
        self.window.clear();
        sample
    }

    fn fail(&mut self, err: DatasetError) -> Option<DatasetResult<Sample>> {
        self.done = true;
        Some(Err(err))
    }
}

impl<R: BufRead> Iterator for SampleGenerator<R> {
    type Item = DatasetResult<Sample>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(err) = self.pending.take() {
            return self.fail(err);
        }
        if self.done {
            return None;
        }

        loop {
            let line = match self.lines.next() {
                Some(Ok(line)) => line,
                // The line never arrived, so a full window waiting for
                // it is not released: the read error ends the pass.
                Some(Err(e)) => return self.fail(e.into()),
                None => {
                    self.done = true;
                    if self.window_full() {
                        return Some(Ok(self.take_window()));
                    }
                    if !self.window.is_empty() {
                        tracing::debug!(
                            "Dropping partial window of {} sensors at end of log",
                            self.window.len()
                        );
                    }
                    return None;
                }
            };
            self.line_no += 1;

            let ready = if self.window_full() {
                Some(self.take_window())
            } else {
                None
            };

            let fields = split_fields(&line);
            if fields.len() < MIN_FIELDS {
                let err = DatasetError::MalformedLine {
                    line:   self.line_no,
                    fields: fields.len(),
                };
                return match ready {
                    Some(sample) => {
                        self.pending = Some(err);
                        Some(Ok(sample))
                    }
                    None => self.fail(err),
                };
            }

            if let Some(sensor) = self.filter.sensor(&fields) {
                self.window.push(sensor.to_string());
            }

            if let Some(sample) = ready {
                return Some(Ok(sample));
            }
        }
    }
}
