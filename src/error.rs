// Error types for the chart-of-accounts library
//
// The binary wraps these in anyhow with context; the library keeps them typed
// so callers can tell a broken catalog apart from a failed write.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoaError {
    /// Reading or writing a chart file failed
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A catalog row could not be turned into an account
    #[error("catalog line {line}: {reason}")]
    Catalog { line: u64, reason: String },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

impl CoaError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        CoaError::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn catalog(line: u64, reason: impl Into<String>) -> Self {
        CoaError::Catalog {
            line,
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, CoaError>;
