//! Matcher and embedding error types.

use thiserror::Error;

/// Errors reported by an embedding provider.
#[derive(Debug, Error)]
pub enum EmbedError {
    #[error("embedding request failed: {0}")]
    Request(String),

    #[error("invalid embedding response: {0}")]
    Response(String),

    #[error("{0}")]
    Other(String),
}

/// Convenience alias for embedding results.
pub type EmbedResult<T> = Result<T, EmbedError>;

/// Errors raised by the disambiguation engine.
#[derive(Debug, Error)]
pub enum MatchError {
    #[error("invalid match parameters: top_k must be at least 1")]
    ZeroTopK,

    #[error("invalid match parameters: min_score {0} is outside [-1, 1]")]
    MinScoreOutOfRange(f32),

    #[error("invalid match parameters: min_margin {0} must be a non-negative number")]
    NegativeMargin(f32),

    #[error("query has dimension {actual}, catalog expects {expected}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("query vector is zero or contains non-finite values")]
    DegenerateQuery,

    #[error("query vector has norm {norm}, expected unit length")]
    NonUnitQuery { norm: f32 },

    #[error("embedding for waypoint {name:?} has dimension {actual}, expected {expected}")]
    InconsistentDimension {
        name: String,
        expected: usize,
        actual: usize,
    },

    #[error("embedding for waypoint {name:?} is zero or contains non-finite values")]
    DegenerateEmbedding { name: String },

    #[error("embedding provider returned {actual} vectors for {expected} waypoints")]
    BatchSize { expected: usize, actual: usize },

    #[error(transparent)]
    Embedding(#[from] EmbedError),
}

/// Convenience alias for matcher results.
pub type MatcherResult<T> = Result<T, MatchError>;
