//! Error types for trainplan operations.
//!
//! An empty search result is deliberately NOT an error: a search that
//! completes without finding a feasible combination returns
//! `Ok(SearchResult)` with [`SearchStatus::Infeasible`]. Only catalog
//! loading/validation failures, bad configuration, and aborted searches
//! surface through [`Error`].
//!
//! [`SearchStatus::Infeasible`]: crate::search::SearchStatus::Infeasible

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for catalog loading and search execution.
#[derive(Debug, Error)]
pub enum Error {
    /// A catalog record is malformed or duplicates another record's name.
    #[error("invalid activity '{record}': {reason}")]
    Validation {
        /// Name of the offending record (or its position when unnamed).
        record: String,
        /// What is wrong with it.
        reason: String,
    },

    /// The catalog source does not exist. Never silently substituted
    /// with a default catalog.
    #[error("catalog not found: {0}")]
    NotFound(PathBuf),

    /// The catalog source exists but is not valid JSON.
    #[error("catalog parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// I/O failure other than a missing source.
    #[error("catalog i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid search configuration (zero time budget, top_n = 0, ...).
    #[error("invalid search config: {0}")]
    Config(String),

    /// The search hit its node-visit cap before completing. Only raised
    /// when best-effort mode is off; otherwise partial results are
    /// returned with `SearchStatus::NodeLimit`.
    #[error("search exhausted: visited {visited} nodes (limit {limit})")]
    ResourceExhausted {
        /// Nodes visited before the cap fired.
        visited: u64,
        /// The configured cap.
        limit: u64,
    },

    /// The search was cancelled via its cancellation flag. Only raised
    /// when best-effort mode is off.
    #[error("search cancelled")]
    Cancelled,
}

/// Result type alias for trainplan operations.
pub type Result<T> = std::result::Result<T, Error>;
