//! Truth-table enumeration and the index form
//!
//! A [`TruthTable`] enumerates every assignment of an expression's variables
//! in a fixed canonical order: row index `i` assigns the binary digits of
//! `i` to the variables in alphabet order, first variable as the
//! most-significant bit. The row order is itself data (the index form and
//! the normal-form index lists depend on it) and is never re-sorted.
//!
//! # Examples
//!
//! ```
//! use karnaugh_logic::expression::Expression;
//! use karnaugh_logic::{Syntax, TruthTable};
//!
//! # fn main() -> std::io::Result<()> {
//! let expr = Expression::parse("a & b", &Syntax::default())?;
//! let table = TruthTable::build(&expr)?;
//!
//! let results: Vec<bool> = table.rows().iter().map(|row| row.result()).collect();
//! assert_eq!(results, vec![false, false, false, true]);
//!
//! let index = table.index_form();
//! assert_eq!(index.binary, "0001");
//! assert_eq!(index.decimal, 1u8.into());
//! # Ok(())
//! # }
//! ```

pub mod error;

#[cfg(test)]
mod tests;

pub use error::TableError;

use crate::expression::{
    evaluate, evaluate_with_steps, subexpression_labels, Assignment, EvalError, Expression, Token,
};
use num_bigint::BigUint;
use std::fmt;

/// A single truth-table row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    values: Vec<bool>,
    sub_results: Vec<bool>,
    result: bool,
}

impl Row {
    /// Variable values, aligned with the table's variable list.
    pub fn values(&self) -> &[bool] {
        &self.values
    }

    /// Sub-expression results, aligned with the table's sub-expression
    /// labels. Empty unless the table was built in detailed mode.
    pub fn sub_results(&self) -> &[bool] {
        &self.sub_results
    }

    /// The expression's value at this row's assignment.
    pub fn result(&self) -> bool {
        self.result
    }
}

/// The result column read as a binary number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexForm {
    /// Concatenated results, row by row, `'1'` for true
    pub binary: String,
    /// The binary string interpreted base 2
    pub decimal: BigUint,
}

/// An ordered truth table over an expression's variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TruthTable {
    variables: Vec<char>,
    subexpressions: Vec<String>,
    rows: Vec<Row>,
}

impl TruthTable {
    /// Enumerate all assignments of `expression` and evaluate it for each.
    pub fn build(expression: &Expression) -> Result<Self, EvalError> {
        Self::from_tokens(expression.tokens(), expression.variables().to_vec(), false)
    }

    /// Like [`TruthTable::build`], additionally evaluating every compound
    /// sub-expression per row (innermost first, left to right).
    pub fn build_detailed(expression: &Expression) -> Result<Self, EvalError> {
        Self::from_tokens(expression.tokens(), expression.variables().to_vec(), true)
    }

    /// Build directly from a postfix token sequence and a variable list.
    ///
    /// `variables` must contain every variable the sequence references.
    /// A sequence over zero variables yields exactly one row.
    pub fn from_tokens(
        tokens: &[Token],
        variables: Vec<char>,
        detailed: bool,
    ) -> Result<Self, EvalError> {
        let subexpressions = if detailed {
            subexpression_labels(tokens)?
        } else {
            Vec::new()
        };
        let row_count = 1usize << variables.len();
        let mut rows = Vec::with_capacity(row_count);
        for index in 0..row_count {
            let values = bits(index, variables.len());
            let assignment: Assignment = variables
                .iter()
                .copied()
                .zip(values.iter().copied())
                .collect();
            let (sub_results, result) = if detailed {
                evaluate_with_steps(tokens, &assignment)?
            } else {
                (Vec::new(), evaluate(tokens, &assignment)?)
            };
            rows.push(Row {
                values,
                sub_results,
                result,
            });
        }
        Ok(TruthTable {
            variables,
            subexpressions,
            rows,
        })
    }

    /// Rebuild a table from a known result column, one entry per row in
    /// enumeration order.
    pub fn from_results(variables: Vec<char>, results: Vec<bool>) -> Result<Self, TableError> {
        let expected = 1usize << variables.len();
        if results.len() != expected {
            return Err(TableError::RowCountMismatch {
                expected,
                actual: results.len(),
            });
        }
        let width = variables.len();
        let rows = results
            .into_iter()
            .enumerate()
            .map(|(index, result)| Row {
                values: bits(index, width),
                sub_results: Vec::new(),
                result,
            })
            .collect();
        Ok(TruthTable {
            variables,
            subexpressions: Vec::new(),
            rows,
        })
    }

    /// Variables in alphabet order.
    pub fn variables(&self) -> &[char] {
        &self.variables
    }

    /// Rows in enumeration order.
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Sub-expression column labels (empty unless built detailed).
    pub fn subexpressions(&self) -> &[String] {
        &self.subexpressions
    }

    /// The assignment mapping of a row, if the index is in range.
    pub fn assignment(&self, row: usize) -> Option<Assignment> {
        self.rows.get(row).map(|row| {
            self.variables
                .iter()
                .copied()
                .zip(row.values.iter().copied())
                .collect()
        })
    }

    /// The result column as a binary string and its base-2 value.
    pub fn index_form(&self) -> IndexForm {
        let mut binary = String::with_capacity(self.rows.len());
        let mut decimal = BigUint::from(0u8);
        for row in &self.rows {
            binary.push(if row.result { '1' } else { '0' });
            decimal = (decimal << 1usize) | BigUint::from(row.result as u8);
        }
        IndexForm { binary, decimal }
    }
}

/// The binary digits of `index`, most-significant first, `width` wide.
fn bits(index: usize, width: usize) -> Vec<bool> {
    (0..width).rev().map(|bit| index >> bit & 1 == 1).collect()
}

impl fmt::Display for TruthTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut header: Vec<String> = self.variables.iter().map(char::to_string).collect();
        header.extend(self.subexpressions.iter().cloned());
        header.push("F".to_string());
        let widths: Vec<usize> = header.iter().map(String::len).collect();

        let header_line = header.join(" | ");
        writeln!(f, "{}", header_line)?;
        writeln!(f, "{}", "-".repeat(header_line.len()))?;

        for row in &self.rows {
            let cells = row
                .values
                .iter()
                .chain(&row.sub_results)
                .chain(std::iter::once(&row.result));
            let line: Vec<String> = cells
                .zip(&widths)
                .map(|(&value, &width)| format!("{:^width$}", value as u8))
                .collect();
            writeln!(f, "{}", line.join(" | "))?;
        }
        Ok(())
    }
}
