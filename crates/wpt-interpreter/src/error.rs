//! Interpreter error types.

use thiserror::Error;
use wpt_matcher::MatchError;
use wpt_protocol::prediction::LabelError;

/// Errors raised by a command classifier.
#[derive(Debug, Error)]
pub enum ClassifyError {
    #[error(transparent)]
    Label(#[from] LabelError),

    #[error("{0}")]
    Other(String),
}

/// Convenience alias for classifier results.
pub type ClassifyResult<T> = Result<T, ClassifyError>;

/// Errors raised while interpreting one command.
#[derive(Debug, Error)]
pub enum InterpretError {
    #[error("command text is empty")]
    EmptyCommand,

    #[error("classification failed: {0}")]
    Classify(#[from] ClassifyError),

    #[error("waypoint matching failed: {0}")]
    Match(#[from] MatchError),
}

/// Convenience alias for interpreter results.
pub type InterpretResult<T> = Result<T, InterpretError>;
