use std::path::PathBuf;

use thiserror::Error;

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

/// A required column is absent from the source file.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("missing required column '{column}' (found: {found})")]
pub struct SchemaError {
    pub column: String,
    /// Comma-separated list of the columns actually present.
    pub found: String,
}

impl SchemaError {
    pub fn missing(column: &str, present: &[String]) -> Self {
        SchemaError {
            column: column.to_string(),
            found: present.join(", "),
        }
    }
}

/// Failure while reading the dataset from disk.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("dataset file not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("cannot read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed data at row {row}: {reason}")]
    Malformed { row: usize, reason: String },

    #[error("unsupported file extension: .{0}")]
    UnsupportedFormat(String),
}

impl LoadError {
    pub fn malformed(row: usize, reason: impl Into<String>) -> Self {
        LoadError::Malformed {
            row,
            reason: reason.into(),
        }
    }
}

/// Anything that can go wrong between loading the file and drawing the chart.
#[derive(Debug, Error)]
pub enum DashboardError {
    #[error(transparent)]
    Load(#[from] LoadError),

    #[error(transparent)]
    Schema(#[from] SchemaError),
}

pub type DashboardResult<T> = Result<T, DashboardError>;
