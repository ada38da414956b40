use std::path::{Path, PathBuf};

use thiserror::Error;

pub type Result<T> = std::result::Result<T, BenchError>;

#[derive(Debug, Error)]
pub enum BenchError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid input in {}: {reason}", path.display())]
    Parse { path: PathBuf, reason: String },

    #[error("prediction file {} has no '{column}' column", path.display())]
    MissingColumn {
        path: PathBuf,
        column: &'static str,
    },

    #[error("no gold standard for cancer type {cancer_type}: expected {}", path.display())]
    MissingGoldStandard {
        cancer_type: String,
        path: PathBuf,
    },

    #[error("gold standard for cancer type {cancer_type} is empty: {}", path.display())]
    EmptyGoldStandard {
        cancer_type: String,
        path: PathBuf,
    },

    #[error("failed to encode JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl BenchError {
    pub fn read(path: &Path, source: std::io::Error) -> Self {
        BenchError::Read {
            path: path.to_path_buf(),
            source,
        }
    }

    pub fn write(path: &Path, source: std::io::Error) -> Self {
        BenchError::Write {
            path: path.to_path_buf(),
            source,
        }
    }

    pub fn parse(path: &Path, reason: impl Into<String>) -> Self {
        BenchError::Parse {
            path: path.to_path_buf(),
            reason: reason.into(),
        }
    }
}
