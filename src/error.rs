//! Grid generation errors
//!
//! Every failure of the engine is an invalid argument of some sort: a bad
//! node count, a missing or degenerate distribution function, or a query
//! index out of range. Failures never touch the cached grid.

use thiserror::Error;

/// Broad classification of a [`GridError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Configuration or query argument rejected
    InvalidArgument,
}

/// Errors raised by distributions and grid generators
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GridError {
    /// Fewer than two nodes requested
    #[error("invalid argument: at least 2 nodes are required, got {0}")]
    TooFewNodes(usize),

    /// Function sampling domain has zero width
    #[error("invalid argument: function argument range is empty (first == last == {0})")]
    EmptyArgumentRange(f64),

    /// Function-driven distribution without a function
    #[error("invalid argument: no distribution function configured")]
    MissingFunction,

    /// Distribution function returned NaN or an infinity
    #[error("invalid argument: distribution function is undefined at {argument} (got {value})")]
    UndefinedFunctionValue { argument: f64, value: f64 },

    /// Function takes the same value at both ends of its domain
    #[error("invalid argument: distribution function has equal values ({0}) at both ends of its domain")]
    DegenerateFunctionRange(f64),

    /// Node or interval index outside `[0, len)`
    #[error("invalid argument: {what} index {index} out of range (count {len})")]
    IndexOutOfRange {
        what: &'static str,
        index: usize,
        len: usize,
    },
}

impl GridError {
    /// Error classification
    pub fn kind(&self) -> ErrorKind {
        ErrorKind::InvalidArgument
    }
}

/// Result type of the grid engine
pub type GridResult<T> = std::result::Result<T, GridError>;
