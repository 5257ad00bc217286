//! # Karnaugh Logic
//!
//! This crate parses a propositional expression over single-letter variables,
//! derives its full truth table and both canonical normal forms, and
//! minimizes those forms with two independent algorithms: iterative pairwise
//! consensus and Karnaugh-map group extraction.
//!
//! ## Overview
//!
//! The pipeline runs in one direction, each stage consuming the previous
//! stage's output:
//!
//! 1. **Validation**: lexical and structural acceptance of the infix string
//! 2. **Conversion**: shunting-yard transformation into a postfix sequence
//! 3. **Evaluation**: single-stack execution against an assignment
//! 4. **Truth table**: exhaustive enumeration of all 2^n assignments
//! 5. **Normal forms**: canonical disjunctive and conjunctive covers
//! 6. **Minimization**: consensus and Karnaugh paths, independently
//!
//! The two minimizers may produce different covers, but both realize the
//! same boolean function as the canonical form they consume.
//!
//! ## Quick Start
//!
//! ```
//! use karnaugh_logic::BoolFunction;
//!
//! # fn main() -> std::io::Result<()> {
//! let function = BoolFunction::parse("a & b | a & !b")?;
//!
//! // Truth table and its index form
//! assert_eq!(function.table().rows().len(), 4);
//! assert_eq!(function.table().index_form().binary, "0011");
//!
//! // Canonical disjunctive form, one term per true row
//! assert_eq!(function.forms().dnf().to_string(), "(a & !b) | (a & b)");
//!
//! // Consensus minimization collapses it to a single literal
//! assert_eq!(function.minimal_dnf().to_string(), "(a)");
//! # Ok(())
//! # }
//! ```
//!
//! ## Karnaugh maps
//!
//! ```
//! use karnaugh_logic::cover::Form;
//! use karnaugh_logic::BoolFunction;
//!
//! # fn main() -> std::io::Result<()> {
//! let function = BoolFunction::parse("a & b | a & !b")?;
//!
//! let map = function.karnaugh_map().map_err(std::io::Error::from)?;
//! assert_eq!(map.minimize(Form::Dnf).to_string(), "(a)");
//! # Ok(())
//! # }
//! ```
//!
//! ## Custom variable alphabets
//!
//! The accepted variable set is configuration, not a global: pass a
//! [`Syntax`] to process expressions over different universes side by side.
//!
//! ```
//! use karnaugh_logic::{BoolFunction, Syntax};
//!
//! # fn main() -> std::io::Result<()> {
//! let syntax = Syntax::new(['p', 'q', 'r']);
//! let function = BoolFunction::parse_with_syntax("p -> q", &syntax)?;
//! assert_eq!(function.expression().variables(), &['p', 'q']);
//! # Ok(())
//! # }
//! ```

// Public modules
pub mod cover;
pub mod expression;
pub mod forms;
pub mod table;

// Re-export high-level public API
pub use cover::{Cover, Form, KarnaughMap, Term};
pub use expression::{Assignment, Expression};
pub use forms::NormalForms;
pub use table::TruthTable;

use expression::{EvalError, ValidationError};
use std::fmt;
use std::io;

/// The expression syntax configuration: which characters are variables.
///
/// The variable alphabet is explicit configuration passed to the validator
/// rather than ambient state, so expressions over different universes can be
/// processed independently. The operator symbols and their precedence are
/// fixed by [`expression::Operator`].
///
/// The default alphabet is `a` through `e`: five variables, the maximum the
/// Karnaugh-map path supports.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Syntax {
    alphabet: Vec<char>,
}

impl Syntax {
    /// Create a syntax over the given variable alphabet.
    ///
    /// The alphabet is sorted and deduplicated; variable order everywhere in
    /// the crate is this sorted order, not order of appearance.
    pub fn new<I: IntoIterator<Item = char>>(alphabet: I) -> Self {
        let mut alphabet: Vec<char> = alphabet.into_iter().collect();
        alphabet.sort_unstable();
        alphabet.dedup();
        Syntax { alphabet }
    }

    /// The sorted variable alphabet.
    pub fn alphabet(&self) -> &[char] {
        &self.alphabet
    }

    /// Whether `c` is a variable of this syntax.
    pub fn is_variable(&self, c: char) -> bool {
        self.alphabet.binary_search(&c).is_ok()
    }

    /// The variables an expression text uses: the alphabet characters it
    /// contains, in alphabet order.
    pub fn variables_of(&self, text: &str) -> Vec<char> {
        self.alphabet
            .iter()
            .copied()
            .filter(|&c| text.contains(c))
            .collect()
    }
}

impl Default for Syntax {
    fn default() -> Self {
        Syntax::new('a'..='e')
    }
}

/// Errors that can occur while building a [`BoolFunction`].
///
/// Validation errors are user errors in the input string. Evaluation errors
/// after a successful validation indicate an internal invariant violation and
/// should be treated as implementation bugs, not input problems.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FunctionError {
    /// The expression string was rejected by the validator
    Validation(ValidationError),
    /// Evaluating the converted token sequence failed
    Eval(EvalError),
}

impl fmt::Display for FunctionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FunctionError::Validation(e) => write!(f, "{}", e),
            FunctionError::Eval(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for FunctionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FunctionError::Validation(e) => Some(e),
            FunctionError::Eval(e) => Some(e),
        }
    }
}

impl From<ValidationError> for FunctionError {
    fn from(err: ValidationError) -> Self {
        FunctionError::Validation(err)
    }
}

impl From<EvalError> for FunctionError {
    fn from(err: EvalError) -> Self {
        FunctionError::Eval(err)
    }
}

impl From<FunctionError> for io::Error {
    fn from(err: FunctionError) -> Self {
        match err {
            FunctionError::Validation(e) => e.into(),
            FunctionError::Eval(e) => e.into(),
        }
    }
}

/// A parsed boolean function with its truth table and canonical forms.
///
/// This is the in-process facade over the whole pipeline: parsing the
/// expression builds the table and derives both canonical forms eagerly;
/// the minimizers run on demand.
///
/// # Examples
///
/// ```
/// use karnaugh_logic::BoolFunction;
///
/// # fn main() -> std::io::Result<()> {
/// let function = BoolFunction::parse("a | !b")?;
///
/// assert_eq!(
///     function.forms().dnf().to_string(),
///     "(!a & !b) | (a & !b) | (a & b)"
/// );
/// assert_eq!(function.forms().dnf_indices(), &[0, 2, 3]);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct BoolFunction {
    expression: Expression,
    table: TruthTable,
    forms: NormalForms,
}

impl BoolFunction {
    /// Parse an expression over the default five-variable alphabet.
    pub fn parse(input: &str) -> Result<Self, FunctionError> {
        Self::parse_with_syntax(input, &Syntax::default())
    }

    /// Parse an expression over a caller-supplied alphabet.
    pub fn parse_with_syntax(input: &str, syntax: &Syntax) -> Result<Self, FunctionError> {
        let expression = Expression::parse(input, syntax)?;
        let table = TruthTable::build(&expression)?;
        let forms = NormalForms::derive(&table);
        Ok(BoolFunction {
            expression,
            table,
            forms,
        })
    }

    /// The validated expression.
    pub fn expression(&self) -> &Expression {
        &self.expression
    }

    /// The full truth table, rows in enumeration order.
    pub fn table(&self) -> &TruthTable {
        &self.table
    }

    /// Both canonical normal forms with their index lists.
    pub fn forms(&self) -> &NormalForms {
        &self.forms
    }

    /// Consensus-minimized disjunctive cover.
    pub fn minimal_dnf(&self) -> Cover {
        cover::consensus::minimize(self.forms.dnf())
    }

    /// Consensus-minimized conjunctive cover.
    pub fn minimal_cnf(&self) -> Cover {
        cover::consensus::minimize(self.forms.cnf())
    }

    /// Arrange the truth table on a Karnaugh-map grid.
    ///
    /// Fails unless the function uses two to five variables.
    pub fn karnaugh_map(&self) -> Result<KarnaughMap, cover::GridError> {
        KarnaughMap::build(&self.table)
    }
}
