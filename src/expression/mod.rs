//! Expression validation, postfix conversion, and evaluation
//!
//! This module is the front of the pipeline: an infix expression string is
//! accepted by the validator, converted into a postfix token sequence by the
//! shunting-yard converter, and evaluated by a single-stack machine.
//!
//! # Quick Start
//!
//! ```
//! use karnaugh_logic::expression::Expression;
//! use karnaugh_logic::Syntax;
//!
//! # fn main() -> std::io::Result<()> {
//! let expr = Expression::parse("a & (b | !c)", &Syntax::default())?;
//!
//! assert_eq!(expr.variables(), &['a', 'b', 'c']);
//!
//! let mut assignment = karnaugh_logic::expression::Assignment::new();
//! assignment.insert('a', true);
//! assignment.insert('b', false);
//! assignment.insert('c', false);
//! assert_eq!(expr.evaluate(&assignment)?, true);
//! # Ok(())
//! # }
//! ```
//!
//! The evaluator is also usable standalone with hand-built token sequences;
//! see [`evaluate`].

mod converter;
pub mod error;
mod eval;
mod tokens;
mod validator;


pub use error::{EvalError, ValidationError};
pub use eval::{evaluate, evaluate_with_steps, subexpression_labels, Assignment};
pub use tokens::{Operator, Token};

use crate::Syntax;
use std::fmt;

/// A validated boolean expression together with its postfix token sequence.
///
/// Construction goes through [`Expression::parse`], which runs the validator
/// and the converter; an `Expression` value therefore always carries a
/// well-formed token sequence. Variables are the syntax-alphabet characters
/// the text contains, in alphabet order regardless of order of appearance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expression {
    text: String,
    variables: Vec<char>,
    tokens: Vec<Token>,
}

impl Expression {
    /// Validate `input` and convert it to postfix.
    ///
    /// Whitespace is removed first; all structural rules are then checked in
    /// a single left-to-right scan. See [`ValidationError`] for the error
    /// taxonomy.
    ///
    /// # Examples
    ///
    /// ```
    /// use karnaugh_logic::expression::{Expression, ValidationError};
    /// use karnaugh_logic::Syntax;
    ///
    /// let syntax = Syntax::default();
    ///
    /// let expr = Expression::parse("a -> b", &syntax).unwrap();
    /// assert_eq!(expr.text(), "a->b");
    ///
    /// let err = Expression::parse("a & | b", &syntax).unwrap_err();
    /// assert_eq!(err, ValidationError::ConsecutiveOperators { position: 2 });
    /// ```
    pub fn parse(input: &str, syntax: &Syntax) -> Result<Self, ValidationError> {
        let text: String = input.chars().filter(|c| !c.is_whitespace()).collect();
        let lexemes = validator::validate(&text, syntax)?;
        let infix: Vec<_> = lexemes.into_iter().map(|(lexeme, _)| lexeme).collect();
        let tokens = converter::to_postfix(&infix);
        let variables = syntax.variables_of(&text);
        Ok(Expression {
            text,
            variables,
            tokens,
        })
    }

    /// The whitespace-stripped expression text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Variables used by the expression, in alphabet order.
    pub fn variables(&self) -> &[char] {
        &self.variables
    }

    /// The postfix token sequence.
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Evaluate the expression under the given assignment.
    pub fn evaluate(&self, assignment: &Assignment) -> Result<bool, EvalError> {
        evaluate(&self.tokens, assignment)
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
