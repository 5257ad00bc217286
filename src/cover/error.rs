//! Error types for grid-based minimization

use std::fmt;
use std::io;

/// Errors raised before Karnaugh-map construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridError {
    /// The variable count is outside the supported range of 2 to 5
    UnsupportedVariableCount {
        /// The offending variable count
        count: usize,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridError::UnsupportedVariableCount { count } => write!(
                f,
                "Karnaugh maps support 2 to 5 variables, got {}",
                count
            ),
        }
    }
}

impl std::error::Error for GridError {}

impl From<GridError> for io::Error {
    fn from(err: GridError) -> Self {
        io::Error::new(io::ErrorKind::InvalidInput, err)
    }
}
