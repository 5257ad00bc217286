//! Infix to postfix conversion

use super::tokens::{Lexeme, Operator, Token};

/// Convert validated infix lexemes into a postfix token sequence using the
/// shunting-yard algorithm.
///
/// Negation is a prefix operator: it is pushed without popping and binds the
/// next literal or parenthesized group. A binary operator pops every stacked
/// operator of greater-or-equal precedence first, which makes both binary
/// tiers left-associative. Parentheses are structural and do not appear in
/// the output.
///
/// The conversion is deterministic: a given infix sequence always yields the
/// same postfix sequence.
pub(crate) fn to_postfix(infix: &[Lexeme]) -> Vec<Token> {
    let mut output = Vec::with_capacity(infix.len());
    // `None` marks an open parenthesis on the operator stack
    let mut stack: Vec<Option<Operator>> = Vec::new();

    for &lexeme in infix {
        match lexeme {
            Lexeme::Var(name) => output.push(Token::Var(name)),
            Lexeme::Op(op) if op.is_unary() => stack.push(Some(op)),
            Lexeme::Op(op) => {
                while let Some(&Some(top)) = stack.last() {
                    if top.precedence() >= op.precedence() {
                        output.push(Token::Op(top));
                        stack.pop();
                    } else {
                        break;
                    }
                }
                stack.push(Some(op));
            }
            Lexeme::LParen => stack.push(None),
            Lexeme::RParen => {
                while let Some(entry) = stack.pop() {
                    match entry {
                        Some(op) => output.push(Token::Op(op)),
                        None => break,
                    }
                }
            }
        }
    }

    while let Some(entry) = stack.pop() {
        if let Some(op) = entry {
            output.push(Token::Op(op));
        }
    }
    output
}
