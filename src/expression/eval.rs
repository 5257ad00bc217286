//! Stack evaluation of postfix token sequences

use super::error::EvalError;
use super::tokens::{Operator, Token};
use std::collections::BTreeMap;

/// A mapping from variable names to boolean values.
///
/// `BTreeMap` keeps iteration in alphabet order, matching the canonical
/// variable ordering used everywhere else in the crate.
pub type Assignment = BTreeMap<char, bool>;

/// Evaluate a postfix token sequence against a variable assignment.
///
/// Variables push their assigned value; negation pops one value and pushes
/// its complement; the binary operators pop the right operand first, then the
/// left. Implication of (a, b) is `!a | b`, equivalence is `a == b`.
///
/// This function is usable on its own with hand-built token sequences; it
/// does not require the full parsing pipeline.
///
/// # Examples
///
/// ```
/// use karnaugh_logic::expression::{evaluate, Assignment, Operator, Token};
///
/// # fn main() -> std::io::Result<()> {
/// let tokens = [Token::Var('a'), Token::Var('b'), Token::Op(Operator::And)];
///
/// let mut assignment = Assignment::new();
/// assignment.insert('a', true);
/// assignment.insert('b', false);
///
/// assert_eq!(evaluate(&tokens, &assignment)?, false);
/// # Ok(())
/// # }
/// ```
pub fn evaluate(tokens: &[Token], assignment: &Assignment) -> Result<bool, EvalError> {
    let mut stack: Vec<bool> = Vec::new();
    for &token in tokens {
        step(token, assignment, &mut stack)?;
    }
    finish(stack)
}

/// Evaluate while recording the intermediate result of every operator
/// application, in application order. The recorded column order matches
/// [`subexpression_labels`].
pub fn evaluate_with_steps(
    tokens: &[Token],
    assignment: &Assignment,
) -> Result<(Vec<bool>, bool), EvalError> {
    let mut stack: Vec<bool> = Vec::new();
    let mut steps = Vec::new();
    for &token in tokens {
        step(token, assignment, &mut stack)?;
        if matches!(token, Token::Op(_)) {
            // step() leaves the application result on top
            steps.push(*stack.last().ok_or(EvalError::StackUnderflow)?);
        }
    }
    let result = finish(stack)?;
    Ok((steps, result))
}

/// Reconstructed infix text of every compound sub-expression, innermost
/// first, in the order [`evaluate_with_steps`] reports results.
///
/// Binary applications are parenthesized; negations of single variables are
/// not, so `"a & b | c"` yields `["(a & b)", "((a & b) | c)"]` and
/// `"a & !b"` yields `["!b", "(a & !b)"]`.
pub fn subexpression_labels(tokens: &[Token]) -> Result<Vec<String>, EvalError> {
    let mut stack: Vec<String> = Vec::new();
    let mut labels = Vec::new();
    for &token in tokens {
        match token {
            Token::Var(name) => stack.push(name.to_string()),
            Token::Op(Operator::Not) => {
                let operand = stack.pop().ok_or(EvalError::StackUnderflow)?;
                let text = format!("!{}", operand);
                labels.push(text.clone());
                stack.push(text);
            }
            Token::Op(op) => {
                let right = stack.pop().ok_or(EvalError::StackUnderflow)?;
                let left = stack.pop().ok_or(EvalError::StackUnderflow)?;
                let text = format!("({} {} {})", left, op.symbol(), right);
                labels.push(text.clone());
                stack.push(text);
            }
        }
    }
    Ok(labels)
}

fn step(token: Token, assignment: &Assignment, stack: &mut Vec<bool>) -> Result<(), EvalError> {
    match token {
        Token::Var(name) => {
            let value = assignment
                .get(&name)
                .copied()
                .ok_or(EvalError::UnknownVariable { variable: name })?;
            stack.push(value);
        }
        Token::Op(Operator::Not) => {
            let value = stack.pop().ok_or(EvalError::StackUnderflow)?;
            stack.push(!value);
        }
        Token::Op(op) => {
            let right = stack.pop().ok_or(EvalError::StackUnderflow)?;
            let left = stack.pop().ok_or(EvalError::StackUnderflow)?;
            stack.push(op.apply(left, right));
        }
    }
    Ok(())
}

fn finish(mut stack: Vec<bool>) -> Result<bool, EvalError> {
    let result = stack.pop().ok_or(EvalError::StackUnderflow)?;
    if !stack.is_empty() {
        return Err(EvalError::UnusedOperands {
            remaining: stack.len(),
        });
    }
    Ok(result)
}
