//! Error types for duration parsing.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DurationError {
    /// The input does not match `P[nY][nM][nW][nD][T[nH][nM][nS]]`.
    #[error("invalid duration: '{0}' is not a valid ISO 8601 duration string")]
    GrammarMismatch(String),

    /// A component's digits do not fit in a `u64`.
    #[error("invalid duration: {component} component '{digits}' is out of range")]
    NumericOverflow { component: char, digits: String },
}

pub type Result<T> = std::result::Result<T, DurationError>;
