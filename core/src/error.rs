use std::path::PathBuf;
use thiserror::Error;

/// Whether a failure happened while reading the dataset or writing the index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Input,
    Output,
}

#[derive(Error, Debug)]
pub enum IndexError {
    #[error("failed to read {}: {source}", path.display())]
    Read { path: PathBuf, source: std::io::Error },

    #[error("failed to parse {}: {source}", path.display())]
    Parse { path: PathBuf, source: serde_json::Error },

    #[error("expected a top-level {expected} in {}, found {found}", path.display())]
    Shape { path: PathBuf, expected: &'static str, found: &'static str },

    #[error("dataset has {count} records, more than a posting list can address")]
    TooManyRecords { count: usize },

    #[error("failed to write {}: {source}", path.display())]
    Write { path: PathBuf, source: std::io::Error },

    #[error("failed to serialize index: {0}")]
    Serialize(#[source] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, IndexError>;

impl IndexError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            IndexError::Read { .. }
            | IndexError::Parse { .. }
            | IndexError::Shape { .. }
            | IndexError::TooManyRecords { .. } => ErrorKind::Input,
            IndexError::Write { .. } | IndexError::Serialize(_) => ErrorKind::Output,
        }
    }
}

pub(crate) fn json_type_name(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}
