//! Iterative pairwise term-consensus minimization
//!
//! The algebraic path reduces a canonical cover in two phases. The merge
//! phase repeatedly combines every unordered pair of terms differing in
//! exactly one defined position into a term with that position marked
//! don't-care, carrying unmerged terms over unchanged and collapsing
//! duplicates, until a round produces no new merges or its output equals
//! its input. The screening phase then drops terms whose removal leaves the
//! realized function unchanged.
//!
//! Both phases are form-agnostic at the term level; only the screening
//! evaluation reads the terms through their DNF or CNF interpretation.
//!
//! # Examples
//!
//! ```
//! use karnaugh_logic::cover::consensus;
//! use karnaugh_logic::BoolFunction;
//!
//! # fn main() -> std::io::Result<()> {
//! let function = BoolFunction::parse("a & b & c | !a & b & !c | a & !b & c")?;
//!
//! let minimized = consensus::minimize(function.forms().dnf());
//! assert_eq!(minimized.to_string(), "(a & c) | (!a & b & !c)");
//! # Ok(())
//! # }
//! ```

use super::{Cover, Form, Term};
use crate::expression::Assignment;
use log::{debug, trace};

/// Minimize a cover by pairwise consensus followed by redundancy screening.
///
/// An empty cover minimizes to itself; a single term is returned unchanged
/// (it is never tested against an empty remainder).
pub fn minimize(cover: &Cover) -> Cover {
    let mut terms = dedup(cover.terms().to_vec());
    loop {
        let (round, merges) = merge_round(&terms);
        let next = dedup(round);
        debug!(
            "consensus round: {} merges, {} -> {} terms",
            merges,
            terms.len(),
            next.len()
        );
        if merges == 0 || next == terms {
            break;
        }
        terms = next;
    }
    let kept = screen_redundant(terms, cover.form(), cover.variables());
    Cover::from_terms(cover.form(), cover.variables().to_vec(), kept)
}

/// One merge round over every unordered pair. Merged results come first, in
/// pair order; terms that merged with nobody survive unchanged after them.
fn merge_round(terms: &[Term]) -> (Vec<Term>, usize) {
    let mut result = Vec::new();
    let mut used = vec![false; terms.len()];
    let mut merges = 0;
    for i in 0..terms.len() {
        for j in i + 1..terms.len() {
            if let Some(merged) = terms[i].merge(&terms[j]) {
                trace!("merged {:?} + {:?} -> {:?}", terms[i], terms[j], merged);
                result.push(merged);
                used[i] = true;
                used[j] = true;
                merges += 1;
            }
        }
    }
    for (term, was_used) in terms.iter().zip(used) {
        if !was_used {
            result.push(term.clone());
        }
    }
    (result, merges)
}

/// Collapse duplicates, keeping first occurrences in order.
fn dedup(terms: Vec<Term>) -> Vec<Term> {
    let mut unique: Vec<Term> = Vec::with_capacity(terms.len());
    for term in terms {
        if !unique.contains(&term) {
            unique.push(term);
        }
    }
    unique
}

/// Drop terms whose removal leaves the function unchanged.
///
/// Decisions are made against an immutable snapshot of the fixpoint set:
/// each term is tested with earlier drops already honoured, which matches a
/// sequential removal pass without mutating the collection being iterated.
fn screen_redundant(terms: Vec<Term>, form: Form, variables: &[char]) -> Vec<Term> {
    let mut kept = vec![true; terms.len()];
    for i in 0..terms.len() {
        let rest: Vec<Term> = terms
            .iter()
            .enumerate()
            .filter(|&(j, _)| j != i && kept[j])
            .map(|(_, term)| term.clone())
            .collect();
        if rest.is_empty() {
            continue; // a lone term is never redundant
        }
        let rest = Cover::from_terms(form, variables.to_vec(), rest);
        if is_redundant(&terms[i], &rest) {
            debug!("dropping redundant term {:?}", terms[i]);
            kept[i] = false;
        }
    }
    terms
        .into_iter()
        .zip(kept)
        .filter_map(|(term, keep)| keep.then_some(term))
        .collect()
}

/// Whether `rest` alone already forces the target value over every
/// assignment `term` pins down.
///
/// For a DNF term those are the assignments satisfying its literals, and
/// `rest` must evaluate true on all of them; for a CNF clause they are the
/// assignments falsifying its literals, and `rest` must evaluate false.
/// Don't-care positions range over all combinations. The check evaluates
/// terms structurally against assignments, never through string
/// substitution.
fn is_redundant(term: &Term, rest: &Cover) -> bool {
    let required = matches!(rest.form(), Form::Dnf);
    let variables = rest.variables();

    let mut base = vec![false; variables.len()];
    let mut free = Vec::new();
    for (k, &literal) in term.literals().iter().enumerate() {
        match literal {
            Some(polarity) => {
                base[k] = match rest.form() {
                    Form::Dnf => polarity,
                    Form::Cnf => !polarity,
                }
            }
            None => free.push(k),
        }
    }

    for combination in 0..1usize << free.len() {
        let mut values = base.clone();
        for (bit, &k) in free.iter().enumerate() {
            values[k] = combination >> bit & 1 == 1;
        }
        let assignment: Assignment = variables.iter().copied().zip(values).collect();
        if rest.evaluate(&assignment) != required {
            return false;
        }
    }
    true
}
