//! Canonical normal forms read off a truth table
//!
//! The deriver is side-effect-free: it consumes already-computed rows in
//! their enumeration order and emits one fully-defined term per relevant
//! row, plus the list of row indices each form selects. The row order is
//! never re-sorted; the index lists depend on it.
//!
//! # Examples
//!
//! ```
//! use karnaugh_logic::BoolFunction;
//!
//! # fn main() -> std::io::Result<()> {
//! let function = BoolFunction::parse("a | !b")?;
//! let forms = function.forms();
//!
//! assert_eq!(forms.dnf().to_string(), "(!a & !b) | (a & !b) | (a & b)");
//! assert_eq!(forms.cnf().to_string(), "(a | !b)");
//! assert_eq!(forms.dnf_indices(), &[0, 2, 3]);
//! assert_eq!(forms.cnf_indices(), &[1]);
//! # Ok(())
//! # }
//! ```


use crate::cover::{Cover, Form, Term};
use crate::table::TruthTable;

/// The two canonical forms of a boolean function.
///
/// The disjunctive form has one conjunctive term per true row, literal
/// polarities equal to the row values. The conjunctive form has one clause
/// per false row with complemented polarities: a variable that is false in
/// the row appears un-negated (the de Morgan dual placement). Either side
/// may be empty when the function is constant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalForms {
    dnf: Cover,
    cnf: Cover,
    dnf_indices: Vec<usize>,
    cnf_indices: Vec<usize>,
}

impl NormalForms {
    /// Derive both canonical forms from a truth table.
    pub fn derive(table: &TruthTable) -> Self {
        let variables = table.variables().to_vec();
        let mut dnf_terms = Vec::new();
        let mut cnf_terms = Vec::new();
        let mut dnf_indices = Vec::new();
        let mut cnf_indices = Vec::new();

        for (index, row) in table.rows().iter().enumerate() {
            if row.result() {
                dnf_terms.push(Term::minterm(row.values()));
                dnf_indices.push(index);
            } else {
                cnf_terms.push(Term::maxterm(row.values()));
                cnf_indices.push(index);
            }
        }

        NormalForms {
            dnf: Cover::from_terms(Form::Dnf, variables.clone(), dnf_terms),
            cnf: Cover::from_terms(Form::Cnf, variables, cnf_terms),
            dnf_indices,
            cnf_indices,
        }
    }

    /// The canonical disjunctive cover (empty if no row is true).
    pub fn dnf(&self) -> &Cover {
        &self.dnf
    }

    /// The canonical conjunctive cover (empty if no row is false).
    pub fn cnf(&self) -> &Cover {
        &self.cnf
    }

    /// Indices of the true rows, in row order.
    pub fn dnf_indices(&self) -> &[usize] {
        &self.dnf_indices
    }

    /// Indices of the false rows, in row order.
    pub fn cnf_indices(&self) -> &[usize] {
        &self.cnf_indices
    }
}
