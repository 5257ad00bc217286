//! Error types for truth-table construction

use std::fmt;
use std::io;

/// Errors raised when building a truth table from pre-computed results.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableError {
    /// The result column length does not match 2^(variable count)
    RowCountMismatch {
        /// Expected number of rows (2^n)
        expected: usize,
        /// Number of results supplied
        actual: usize,
    },
}

impl fmt::Display for TableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TableError::RowCountMismatch { expected, actual } => write!(
                f,
                "Expected {} truth-table rows, got {}",
                expected, actual
            ),
        }
    }
}

impl std::error::Error for TableError {}

impl From<TableError> for io::Error {
    fn from(err: TableError) -> Self {
        io::Error::new(io::ErrorKind::InvalidInput, err)
    }
}
