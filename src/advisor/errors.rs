//! Error types for the advisory round-trip.

use thiserror::Error;

/// Ways the advisory service can be unavailable for a turn.
///
/// None of these surface to the match; the agent recovers with its fallback
/// heuristic. Malformed reply *content* is not an error at all; the parser
/// absorbs it.
#[derive(Debug, Error)]
pub enum AdvisorError {
    /// Request never completed (connect failure, timeout, decode failure).
    #[error("advisory request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Service answered with a non-success status.
    #[error("advisory service returned {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },

    /// Service answered successfully but with nothing to parse.
    #[error("advisory reply was empty")]
    EmptyReply,
}

/// Result type for advisory operations
pub type Result<T> = std::result::Result<T, AdvisorError>;
