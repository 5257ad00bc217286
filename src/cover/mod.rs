//! Terms, covers, and the two minimization algorithms
//!
//! A [`Term`] is a fixed-length vector of literals over the variable list,
//! one entry per variable in alphabet order: a defined entry is a literal
//! with a polarity, an undefined entry is a don't-care. The same encoding
//! serves both normal forms: a term is read as a conjunction of its
//! literals inside a DNF cover and as a disjunctive clause inside a CNF
//! cover.
//!
//! A [`Cover`] is an ordered set of terms with the form they belong to.
//! The two minimizers, [`consensus`] and [`karnaugh`], consume canonical
//! covers (respectively truth tables) and produce reduced covers realizing
//! the same function.

pub mod consensus;
pub mod error;
pub mod karnaugh;


pub use error::GridError;
pub use karnaugh::KarnaughMap;

use crate::expression::Assignment;
use std::fmt;

/// Which normal form a cover belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Form {
    /// Sum of products: terms are conjunctions, the cover their disjunction
    Dnf,
    /// Product of sums: terms are clauses, the cover their conjunction
    Cnf,
}

/// A product term or clause over a fixed variable list.
///
/// `Some(true)` is the plain literal, `Some(false)` the negated literal,
/// `None` a don't-care position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Term {
    literals: Vec<Option<bool>>,
}

impl Term {
    /// A term with the given literal polarities.
    pub fn new(literals: Vec<Option<bool>>) -> Self {
        Term { literals }
    }

    /// The fully-defined term covering exactly the given row of a truth
    /// table (disjunctive form): literal polarities equal the row values.
    pub fn minterm(values: &[bool]) -> Self {
        Term {
            literals: values.iter().map(|&v| Some(v)).collect(),
        }
    }

    /// The fully-defined clause excluding exactly the given row (conjunctive
    /// form): literal polarities are the complemented row values, so a
    /// variable that is false in the row appears un-negated.
    pub fn maxterm(values: &[bool]) -> Self {
        Term {
            literals: values.iter().map(|&v| Some(!v)).collect(),
        }
    }

    /// The literal vector, one entry per variable.
    pub fn literals(&self) -> &[Option<bool>] {
        &self.literals
    }

    /// Number of defined literals.
    pub fn literal_count(&self) -> usize {
        self.literals.iter().filter(|l| l.is_some()).count()
    }

    /// Merge two terms that differ in the value of exactly one position,
    /// both defined there and equal everywhere else. The differing position
    /// becomes a don't-care in the result.
    pub fn merge(&self, other: &Term) -> Option<Term> {
        if self.literals.len() != other.literals.len() {
            return None;
        }
        let mut diff = None;
        for (k, (&mine, &theirs)) in self.literals.iter().zip(&other.literals).enumerate() {
            if mine == theirs {
                continue;
            }
            match (mine, theirs, diff) {
                (Some(_), Some(_), None) => diff = Some(k),
                _ => return None,
            }
        }
        let position = diff?;
        let mut merged = self.literals.clone();
        merged[position] = None;
        Some(Term { literals: merged })
    }
}

/// An ordered set of terms forming a disjunction (DNF) or conjunction (CNF)
/// over a fixed variable list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cover {
    form: Form,
    variables: Vec<char>,
    terms: Vec<Term>,
}

impl Cover {
    /// An empty cover: constant false for DNF, constant true for CNF.
    pub fn new(form: Form, variables: Vec<char>) -> Self {
        Cover {
            form,
            variables,
            terms: Vec::new(),
        }
    }

    /// A cover with the given terms, in order.
    pub fn from_terms(form: Form, variables: Vec<char>, terms: Vec<Term>) -> Self {
        Cover {
            form,
            variables,
            terms,
        }
    }

    /// The form this cover belongs to.
    pub fn form(&self) -> Form {
        self.form
    }

    /// Variables in alphabet order.
    pub fn variables(&self) -> &[char] {
        &self.variables
    }

    /// The terms, in order.
    pub fn terms(&self) -> &[Term] {
        &self.terms
    }

    /// Number of terms.
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Whether the cover has no terms.
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Total number of defined literals across all terms.
    pub fn literal_count(&self) -> usize {
        self.terms.iter().map(Term::literal_count).sum()
    }

    /// Evaluate the cover at an assignment.
    ///
    /// An empty DNF cover is constant false and an empty CNF cover constant
    /// true; an empty-literal term is the respective neutral constant.
    pub fn evaluate(&self, assignment: &Assignment) -> bool {
        match self.form {
            Form::Dnf => self
                .terms
                .iter()
                .any(|term| self.term_holds(term, assignment)),
            Form::Cnf => self
                .terms
                .iter()
                .all(|term| self.clause_holds(term, assignment)),
        }
    }

    /// Which minimized term covers which canonical term: entry `(i, j)` is
    /// true iff term `i` of `self` subsumes term `j` of `canonical` (its
    /// literal set is a subset).
    pub fn coverage_matrix(&self, canonical: &Cover) -> Vec<Vec<bool>> {
        self.terms
            .iter()
            .map(|mine| {
                canonical
                    .terms
                    .iter()
                    .map(|original| subsumes(mine, original))
                    .collect()
            })
            .collect()
    }

    /// Conjunction reading: every defined literal matches the assignment.
    fn term_holds(&self, term: &Term, assignment: &Assignment) -> bool {
        term.literals
            .iter()
            .zip(&self.variables)
            .all(|(&literal, variable)| match literal {
                Some(polarity) => assignment.get(variable).copied() == Some(polarity),
                None => true,
            })
    }

    /// Disjunction reading: some defined literal matches the assignment.
    fn clause_holds(&self, term: &Term, assignment: &Assignment) -> bool {
        term.literals
            .iter()
            .zip(&self.variables)
            .any(|(&literal, variable)| match literal {
                Some(polarity) => assignment.get(variable).copied() == Some(polarity),
                None => false,
            })
    }
}

/// Whether every defined literal of `general` appears in `specific` with the
/// same polarity.
fn subsumes(general: &Term, specific: &Term) -> bool {
    general
        .literals()
        .iter()
        .zip(specific.literals())
        .all(|(&g, &s)| match g {
            Some(polarity) => s == Some(polarity),
            None => true,
        })
}

impl fmt::Display for Cover {
    /// Renders `(a & !b) | (c)` for DNF and `(a | !b) & (c)` for CNF. An
    /// empty-literal term prints the neutral constant; an empty cover prints
    /// nothing, like the canonical forms it derives from.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (inner, outer, neutral) = match self.form {
            Form::Dnf => (" & ", " | ", "1"),
            Form::Cnf => (" | ", " & ", "0"),
        };
        let rendered: Vec<String> = self
            .terms
            .iter()
            .map(|term| {
                let literals: Vec<String> = term
                    .literals
                    .iter()
                    .zip(&self.variables)
                    .filter_map(|(&literal, variable)| {
                        literal.map(|polarity| {
                            if polarity {
                                variable.to_string()
                            } else {
                                format!("!{}", variable)
                            }
                        })
                    })
                    .collect();
                if literals.is_empty() {
                    neutral.to_string()
                } else {
                    format!("({})", literals.join(inner))
                }
            })
            .collect();
        write!(f, "{}", rendered.join(outer))
    }
}
