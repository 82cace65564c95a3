// ============================================================
// Layer 3 — Dataset Errors
// ============================================================
// Failures raised by the data and encoder layers. The
// application layer wraps these in anyhow with context.

use std::fmt;
use std::path::PathBuf;

use crate::domain::event::MIN_FIELDS;

#[derive(Debug)]
pub enum DatasetError {
    /// A log line had too few fields for the sample generator
    MalformedLine { line: usize, fields: usize },
    /// A token was not found in the vocabulary
    UnknownToken(String),
    /// A token id has no vocabulary entry
    UnknownId(u32),
    /// The log file could not be opened or read
    Log { path: PathBuf, source: std::io::Error },
    Io(std::io::Error),
    Tokenizer(String),
}

impl fmt::Display for DatasetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MalformedLine { line, fields } => {
                write!(f, "line {} has {} fields, expected at least {}", line, fields, MIN_FIELDS)
            }
            Self::UnknownToken(token) => write!(f, "token '{}' is not in the vocabulary", token),
            Self::UnknownId(id) => write!(f, "id {} is not in the vocabulary", id),
            Self::Log { path, source } => {
                write!(f, "cannot read log '{}': {}", path.display(), source)
            }
            Self::Io(err) => write!(f, "io error: {}", err),
            Self::Tokenizer(msg) => write!(f, "tokenizer error: {}", msg),
        }
    }
}

impl std::error::Error for DatasetError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Log { source, .. } => Some(source),
            Self::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for DatasetError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

pub type DatasetResult<T> = std::result::Result<T, DatasetError>;
