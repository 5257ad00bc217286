//! Karnaugh-map construction and geometric group extraction
//!
//! The grid path restates the truth table as a two-dimensional map indexed
//! by reflected Gray codes, one per axis, so that any two adjacent cells
//! (including across the grid edges) differ in exactly one variable. Group
//! search then collects maximal all-target rectangles with power-of-two cell
//! counts, wrapping toroidally on both axes, and collapses each selected
//! group to an implicant.
//!
//! # Examples
//!
//! ```
//! use karnaugh_logic::cover::{Form, KarnaughMap};
//! use karnaugh_logic::BoolFunction;
//!
//! # fn main() -> std::io::Result<()> {
//! let function = BoolFunction::parse("a & b | !a & c")?;
//!
//! let map = function.karnaugh_map().map_err(std::io::Error::from)?;
//! let cover = map.minimize(Form::Dnf);
//!
//! // every selected group realizes the function exactly
//! for row in 0..function.table().rows().len() {
//!     let assignment = function.table().assignment(row).unwrap();
//!     assert_eq!(
//!         cover.evaluate(&assignment),
//!         function.table().rows()[row].result()
//!     );
//! }
//! # Ok(())
//! # }
//! ```

use super::error::GridError;
use super::{Cover, Form, Term};
use crate::table::TruthTable;
use log::debug;
use std::collections::BTreeSet;
use std::fmt;

/// Reflected Gray code over `bits` bits.
///
/// The code for k bits is the code for k-1 bits prefixed with `false`,
/// followed by its reverse prefixed with `true`; zero bits yield a single
/// empty code. Consecutive entries, including the wrap from last to first,
/// differ in exactly one bit.
pub fn gray_code(bits: usize) -> Vec<Vec<bool>> {
    if bits == 0 {
        return vec![Vec::new()];
    }
    let smaller = gray_code(bits - 1);
    let mut code = Vec::with_capacity(smaller.len() * 2);
    for entry in &smaller {
        let mut prefixed = Vec::with_capacity(bits);
        prefixed.push(false);
        prefixed.extend_from_slice(entry);
        code.push(prefixed);
    }
    for entry in smaller.iter().rev() {
        let mut prefixed = Vec::with_capacity(bits);
        prefixed.push(true);
        prefixed.extend_from_slice(entry);
        code.push(prefixed);
    }
    code
}

/// A cell position as (row, column).
pub type Cell = (usize, usize);

/// A truth table arranged on a Gray-code grid.
///
/// The variable list splits into a row group and a column group: the row
/// group takes the first ⌊n/2⌋ variables for up to four variables, and the
/// first two for five. Cell (i, j) holds the table value of the assignment
/// formed by concatenating row code i and column code j.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KarnaughMap {
    variables: Vec<char>,
    row_width: usize,
    row_codes: Vec<Vec<bool>>,
    col_codes: Vec<Vec<bool>>,
    grid: Vec<Vec<bool>>,
}

impl KarnaughMap {
    /// Arrange a truth table on a grid. Requires two to five variables.
    pub fn build(table: &TruthTable) -> Result<Self, GridError> {
        let count = table.variables().len();
        if !(2..=5).contains(&count) {
            return Err(GridError::UnsupportedVariableCount { count });
        }
        let row_width = if count <= 4 { count / 2 } else { 2 };
        let row_codes = gray_code(row_width);
        let col_codes = gray_code(count - row_width);
        let grid = row_codes
            .iter()
            .map(|row_code| {
                col_codes
                    .iter()
                    .map(|col_code| {
                        // the concatenated code, read MSB-first, is the row index
                        let index = row_code
                            .iter()
                            .chain(col_code)
                            .fold(0usize, |acc, &bit| acc << 1 | bit as usize);
                        table.rows()[index].result()
                    })
                    .collect()
            })
            .collect();
        Ok(KarnaughMap {
            variables: table.variables().to_vec(),
            row_width,
            row_codes,
            col_codes,
            grid,
        })
    }

    /// Variables in alphabet order.
    pub fn variables(&self) -> &[char] {
        &self.variables
    }

    /// The row-group variables.
    pub fn row_variables(&self) -> &[char] {
        &self.variables[..self.row_width]
    }

    /// The column-group variables.
    pub fn col_variables(&self) -> &[char] {
        &self.variables[self.row_width..]
    }

    /// Gray codes indexing the rows.
    pub fn row_codes(&self) -> &[Vec<bool>] {
        &self.row_codes
    }

    /// Gray codes indexing the columns.
    pub fn col_codes(&self) -> &[Vec<bool>] {
        &self.col_codes
    }

    /// The cell value at (row, col), if in range.
    pub fn cell(&self, row: usize, col: usize) -> Option<bool> {
        self.grid.get(row).and_then(|cells| cells.get(col)).copied()
    }

    /// Extract a minimal covering implicant set for the given form.
    ///
    /// The disjunctive path groups true cells, the conjunctive path false
    /// cells. Groups are collected largest-first and kept only while they
    /// still cover an uncovered cell; each kept group becomes one term.
    pub fn minimize(&self, form: Form) -> Cover {
        let target = matches!(form, Form::Dnf);
        let groups = self.find_groups(target);
        let selected = select_cover(groups);
        let terms = selected
            .iter()
            .map(|group| self.implicant(group, form))
            .collect();
        Cover::from_terms(form, self.variables.clone(), terms)
    }

    /// All distinct rectangles whose cells all equal `target`, in decreasing
    /// cell-count order.
    ///
    /// Candidate shapes are the power-of-two rectangles h x w with
    /// h * w in {32, 16, 8, 4, 2, 1} that fit the grid; every anchor is
    /// tried with modular indexing on both axes, so rectangles wrap around
    /// the grid edges. A shape is accepted only with its exact cell count
    /// and only if its cells form a single subcube: an anchor that scrambles
    /// the Gray order would make the derived implicant wider than the group,
    /// so such windows are rejected as degenerate.
    fn find_groups(&self, target: bool) -> Vec<Vec<Cell>> {
        let rows = self.row_codes.len();
        let cols = self.col_codes.len();
        let mut seen: BTreeSet<Vec<Cell>> = BTreeSet::new();
        let mut groups = Vec::new();
        for &size in &[32usize, 16, 8, 4, 2, 1] {
            for (height, width) in shapes(size, rows, cols) {
                for row in 0..rows {
                    for col in 0..cols {
                        let mut cells: Vec<Cell> = (0..height)
                            .flat_map(|dr| {
                                (0..width).map(move |dc| ((row + dr) % rows, (col + dc) % cols))
                            })
                            .collect();
                        cells.sort_unstable();
                        if cells.iter().all(|&(r, c)| self.grid[r][c] == target)
                            && self.is_subcube(&cells)
                            && seen.insert(cells.clone())
                        {
                            debug!("found {}x{} group anchored at ({}, {})", height, width, row, col);
                            groups.push(cells);
                        }
                    }
                }
            }
        }
        groups
    }

    /// Collapse a group of cells to a term: positions whose Gray bit agrees
    /// across every cell become literals, disagreeing positions don't-cares.
    /// Literal polarity is the shared bit on the disjunctive path and its
    /// complement on the conjunctive path.
    fn implicant(&self, cells: &[Cell], form: Form) -> Term {
        let Some(&(first_row, first_col)) = cells.first() else {
            return Term::new(vec![None; self.variables.len()]);
        };
        let literals = (0..self.variables.len())
            .map(|position| {
                let first = self.code_bit(first_row, first_col, position);
                let agrees = cells
                    .iter()
                    .all(|&(r, c)| self.code_bit(r, c, position) == first);
                agrees.then(|| match form {
                    Form::Dnf => first,
                    Form::Cnf => !first,
                })
            })
            .collect();
        Term::new(literals)
    }

    /// Whether the cells are exactly the assignments pinned down by their
    /// agreeing positions. Holds for every Gray-aligned rectangle and fails
    /// for wrap anchors that break the single-subcube structure.
    fn is_subcube(&self, cells: &[Cell]) -> bool {
        let Some(&(first_row, first_col)) = cells.first() else {
            return false;
        };
        let agreeing = (0..self.variables.len())
            .filter(|&position| {
                let first = self.code_bit(first_row, first_col, position);
                cells
                    .iter()
                    .all(|&(r, c)| self.code_bit(r, c, position) == first)
            })
            .count();
        cells.len() == 1 << (self.variables.len() - agreeing)
    }

    /// The Gray-code bit of variable `position` at a cell.
    fn code_bit(&self, row: usize, col: usize, position: usize) -> bool {
        if position < self.row_width {
            self.row_codes[row][position]
        } else {
            self.col_codes[col][position - self.row_width]
        }
    }
}

/// Power-of-two rectangles with exactly `size` cells that fit a
/// `rows` x `cols` grid.
fn shapes(size: usize, rows: usize, cols: usize) -> Vec<(usize, usize)> {
    let mut shapes = Vec::new();
    let mut height = 1;
    while height <= size {
        let width = size / height;
        if height * width == size && height <= rows && width <= cols {
            shapes.push((height, width));
        }
        height *= 2;
    }
    shapes
}

/// Keep groups that still cover an uncovered cell, scanning in the given
/// (largest-first) order.
fn select_cover(groups: Vec<Vec<Cell>>) -> Vec<Vec<Cell>> {
    let mut covered: BTreeSet<Cell> = BTreeSet::new();
    let mut selected = Vec::new();
    for group in groups {
        if group.iter().any(|cell| !covered.contains(cell)) {
            covered.extend(group.iter().copied());
            selected.push(group);
        }
    }
    selected
}

impl fmt::Display for KarnaughMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let code_text = |code: &[bool]| -> String {
            code.iter().map(|&bit| if bit { '1' } else { '0' }).collect()
        };
        let row_header = self.row_width;
        let cell_width = self.variables.len() - self.row_width;

        writeln!(
            f,
            "rows ({}), columns ({})",
            self.row_variables().iter().collect::<String>(),
            self.col_variables().iter().collect::<String>()
        )?;
        write!(f, "{:row_header$}", "")?;
        for code in &self.col_codes {
            write!(f, " {}", code_text(code))?;
        }
        writeln!(f)?;
        for (code, cells) in self.row_codes.iter().zip(&self.grid) {
            write!(f, "{}", code_text(code))?;
            for &cell in cells {
                write!(f, " {:^cell_width$}", cell as u8)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
