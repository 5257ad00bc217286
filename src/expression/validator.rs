//! Lexical and structural acceptance of infix expression strings

use super::error::ValidationError;
use super::tokens::{Lexeme, Operator};
use crate::Syntax;

/// Validate a whitespace-stripped expression against `syntax`, returning the
/// scanned infix lexemes with their character positions.
///
/// A single left-to-right pass checks that every character is a variable, an
/// operator symbol, or a parenthesis; that no two binary operators are
/// adjacent; that no two operands are adjacent; and that parenthesis depth
/// never goes negative and returns to zero at the end. The checks run in this
/// order at each position, so an input violating several rules reports the
/// leftmost violation.
pub(crate) fn validate(
    input: &str,
    syntax: &Syntax,
) -> Result<Vec<(Lexeme, usize)>, ValidationError> {
    if input.is_empty() {
        return Err(ValidationError::EmptyExpression);
    }

    let chars: Vec<char> = input.chars().collect();
    let mut lexemes: Vec<(Lexeme, usize)> = Vec::with_capacity(chars.len());
    let mut depth = 0usize;
    let mut i = 0;
    while i < chars.len() {
        let position = i;
        let lexeme = match chars[i] {
            c if syntax.is_variable(c) => Lexeme::Var(c),
            '!' => Lexeme::Op(Operator::Not),
            '&' => Lexeme::Op(Operator::And),
            '|' => Lexeme::Op(Operator::Or),
            '~' => Lexeme::Op(Operator::Iff),
            '-' => {
                // the implication arrow is the only two-character symbol
                if chars.get(i + 1) == Some(&'>') {
                    i += 1;
                    Lexeme::Op(Operator::Imply)
                } else {
                    return Err(ValidationError::InvalidCharacter {
                        character: '-',
                        position,
                    });
                }
            }
            '(' => Lexeme::LParen,
            ')' => Lexeme::RParen,
            c => {
                return Err(ValidationError::InvalidCharacter {
                    character: c,
                    position,
                })
            }
        };

        let previous = lexemes.last().map(|&(lexeme, _)| lexeme);
        match lexeme {
            Lexeme::Op(op) if !op.is_unary() => {
                if matches!(previous, Some(Lexeme::Op(_))) {
                    return Err(ValidationError::ConsecutiveOperators { position });
                }
            }
            Lexeme::Var(_) => {
                if matches!(previous, Some(Lexeme::Var(_) | Lexeme::RParen)) {
                    return Err(ValidationError::MissingOperator { position });
                }
            }
            Lexeme::LParen => {
                if matches!(previous, Some(Lexeme::Var(_) | Lexeme::RParen)) {
                    return Err(ValidationError::MissingOperator { position });
                }
                depth += 1;
            }
            Lexeme::RParen => {
                if depth == 0 {
                    return Err(ValidationError::UnbalancedParentheses);
                }
                depth -= 1;
            }
            Lexeme::Op(_) => {}
        }

        lexemes.push((lexeme, position));
        i += 1;
    }

    if depth != 0 {
        return Err(ValidationError::UnbalancedParentheses);
    }
    Ok(lexemes)
}
