//! Error types.

use thiserror::Error;

/// Errors raised at solver entry or when building boards from raw input.
///
/// Search itself never fails: a run that does not reach zero conflicts
/// still returns its candidate, and callers inspect the conflict count.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueensError {
    /// A solver or harness parameter is out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// A row index or grid does not describe a board with one queen per column.
    #[error("invalid board: {0}")]
    InvalidBoard(String),

    /// The evaluation thread pool could not be created.
    #[error("worker pool error: {0}")]
    WorkerPool(String),
}

/// Result alias for fallible operations in this crate.
pub type Result<T> = std::result::Result<T, QueensError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = QueensError::InvalidConfiguration("population_size must be at least 1".into());
        assert_eq!(
            err.to_string(),
            "invalid configuration: population_size must be at least 1"
        );

        let err = QueensError::InvalidBoard("row 9 out of range".into());
        assert_eq!(err.to_string(), "invalid board: row 9 out of range");
    }
}
