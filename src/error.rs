//! Error types for the fallible phases: fetching pages and writing the report.
//!
//! Structural problems in the menu forest are not errors. They are recorded on
//! the tree reports produced by `validate`.

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("page {page}: source unreachable: {source}")]
    Unreachable {
        page: u64,
        #[source]
        source: reqwest::Error,
    },

    #[error("page {page}: source returned HTTP {status}")]
    HttpStatus { page: u64, status: u16 },

    #[error("page {page}: malformed page: {reason}")]
    MalformedPage { page: u64, reason: String },
}

impl RepositoryError {
    pub fn malformed(page: u64, reason: impl Into<String>) -> Self {
        RepositoryError::MalformedPage {
            page,
            reason: reason.into(),
        }
    }

    /// The page number the failure relates to.
    pub fn page(&self) -> u64 {
        match self {
            RepositoryError::Unreachable { page, .. }
            | RepositoryError::HttpStatus { page, .. }
            | RepositoryError::MalformedPage { page, .. } => *page,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("failed to serialize report: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("failed to write report to '{}': {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Failure to parse a local node collection (not paginated).
#[derive(Debug, thiserror::Error)]
#[error("failed to parse menu nodes: {0}")]
pub struct NodeParseError(#[from] pub serde_json::Error);
