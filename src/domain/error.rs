// ============================================================
// Layer 3 — Snapshot Errors
// ============================================================
// Every failure the library layers can report.
//
// Three families, matching how failures reach the caller:
//   (a) filesystem errors  — Io
//   (b) format errors      — Format, Encode, EmptyRunLog
//   (c) lookup errors      — MissingKey, IndexOutOfRange,
//                            MissingLayer, TypeMismatch, ...
//
// Nothing here is recovered from. The application layer
// wraps these in anyhow with extra context.
//
// Reference: Rust Book §9 (Recoverable Errors with Result)
//            thiserror crate documentation

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("I/O error on '{path}': {source}")]
    Io {
        path:   PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Cannot parse run log '{path}': {source}")]
    Format {
        path:   PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Run log '{0}' is empty")]
    EmptyRunLog(PathBuf),

    #[error("Cannot serialise snapshot: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("Key '{0}' not found in snapshot")]
    MissingKey(String),

    #[error("Snapshot index {index} out of range (run log holds {len})")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Layer '{0}' not found in first snapshot")]
    MissingLayer(String),

    #[error("Field '{key}' is not {expected}")]
    TypeMismatch { key: String, expected: &'static str },

    #[error("Label is not valid UTF-8: {0}")]
    InvalidLabel(#[from] std::string::FromUtf8Error),

    #[error("Array data has {len} elements but shape {shape:?} needs {expected}")]
    ShapeMismatch {
        shape:    Vec<usize>,
        len:      usize,
        expected: usize,
    },

    #[error("Row {row} has {len} elements but row 0 has {expected}")]
    RaggedRows {
        row:      usize,
        len:      usize,
        expected: usize,
    },
}

impl SnapshotError {
    /// Attach a path to an io::Error
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io { path: path.into(), source }
    }

    pub fn type_mismatch(key: impl Into<String>, expected: &'static str) -> Self {
        Self::TypeMismatch { key: key.into(), expected }
    }
}

/// Result alias for the library layers
pub type Result<T> = std::result::Result<T, SnapshotError>;
