//! Error types for expression validation and evaluation

use std::fmt;
use std::io;

/// Errors raised while validating an infix expression string.
///
/// All variants are detected in a single left-to-right scan, before any
/// conversion or evaluation is attempted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// The expression is empty after whitespace removal
    EmptyExpression,
    /// A character is neither a variable, an operator symbol, nor a parenthesis
    InvalidCharacter {
        /// The offending character
        character: char,
        /// Its position in the whitespace-stripped expression
        position: usize,
    },
    /// Two binary operators appear with no operand between them
    ConsecutiveOperators {
        /// Position of the second operator
        position: usize,
    },
    /// Two operands appear with no operator between them
    MissingOperator {
        /// Position of the second operand
        position: usize,
    },
    /// Parenthesis depth goes negative or does not return to zero
    UnbalancedParentheses,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::EmptyExpression => write!(f, "Expression is empty"),
            ValidationError::InvalidCharacter {
                character,
                position,
            } => write!(
                f,
                "Invalid character '{}' at position {}",
                character, position
            ),
            ValidationError::ConsecutiveOperators { position } => {
                write!(f, "Two operators in a row at position {}", position)
            }
            ValidationError::MissingOperator { position } => {
                write!(f, "Missing operator between operands at position {}", position)
            }
            ValidationError::UnbalancedParentheses => write!(f, "Unbalanced parentheses"),
        }
    }
}

impl std::error::Error for ValidationError {}

impl From<ValidationError> for io::Error {
    fn from(err: ValidationError) -> Self {
        io::Error::new(io::ErrorKind::InvalidInput, err)
    }
}

/// Errors raised while evaluating a postfix token sequence.
///
/// After a successful validation these indicate an internal invariant
/// violation rather than a user error: a properly converted sequence neither
/// underflows nor leaves operands behind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EvalError {
    /// An operator was applied with too few operands on the stack
    StackUnderflow,
    /// The assignment has no entry for a referenced variable
    UnknownVariable {
        /// The variable that was not found
        variable: char,
    },
    /// Evaluation finished with more than one value on the stack
    UnusedOperands {
        /// Number of values left behind besides the result
        remaining: usize,
    },
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EvalError::StackUnderflow => write!(f, "Operator applied to too few operands"),
            EvalError::UnknownVariable { variable } => {
                write!(f, "Variable '{}' missing from assignment", variable)
            }
            EvalError::UnusedOperands { remaining } => {
                write!(f, "{} unused operand(s) left after evaluation", remaining)
            }
        }
    }
}

impl std::error::Error for EvalError {}

impl From<EvalError> for io::Error {
    fn from(err: EvalError) -> Self {
        io::Error::new(io::ErrorKind::InvalidData, err)
    }
}
