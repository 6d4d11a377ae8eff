// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Syntactic validation of infix expressions.
//!
//! Validation runs before any structural work. Whitespace is removed first, then
//! every rule below must hold:
//!
//! 1. the expression is not empty
//! 2. every character is a digit, `.`, or one of `+-*/^~()`
//! 3. `.` is immediately followed by a digit, and a number holds at most one `.`
//! 4. parentheses balance and never close more than they opened
//! 5. no two binary operators are adjacent
//! 6. `~` is followed by a digit, `(` or another `~`
//! 7. the first character is a digit, `~` or `(`
//! 8. the last character is not an operator
//! 9. after `(`, a binary operator or `~` comes the start of an operand: a digit,
//!    `~` or `(`
//! 10. after a number or `)` comes a binary operator, `)` or the end; a number may
//!     also continue with more digits or `.`
//!
//! Rules 9 and 10 close the gaps left by the first eight (`()`, `(2+)`, `2(3)`,
//! `(1)(2)`, `5~3`), each of which would otherwise reach the task graph builder
//! with operands and operators that do not pair up.
//!
//! Callers only ever see one outcome, [`ExpressionError::Malformed`]; the broken
//! rule is reported through the debug log.

use std::fmt;

use super::operators::{BINARY_OPERATORS, CLOSE_PAREN, DECIMAL_POINT, OPEN_PAREN, UNARY_MINUS};
use crate::errors::ExpressionError;
use crate::observability::messages::engine::ExpressionRejected;
use crate::observability::messages::StructuredLog;

/// The first rule an expression broke.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Violation {
    Empty,
    UnexpectedCharacter { character: char, position: usize },
    DanglingDecimalPoint { position: usize },
    RepeatedDecimalPoint { position: usize },
    UnmatchedCloseParen { position: usize },
    UnclosedParen { depth: usize },
    AdjacentOperators { position: usize },
    DanglingUnaryMinus { position: usize },
    InvalidStart { character: char },
    InvalidEnd { character: char },
    MissingOperand { position: usize },
    MissingOperator { position: usize },
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Violation::Empty => write!(f, "expression is empty"),
            Violation::UnexpectedCharacter { character, position } => {
                write!(f, "unexpected character '{character}' at position {position}")
            }
            Violation::DanglingDecimalPoint { position } => {
                write!(f, "decimal point at position {position} is not followed by a digit")
            }
            Violation::RepeatedDecimalPoint { position } => {
                write!(f, "second decimal point in one number at position {position}")
            }
            Violation::UnmatchedCloseParen { position } => {
                write!(f, "')' at position {position} closes nothing")
            }
            Violation::UnclosedParen { depth } => write!(f, "{depth} unclosed '('"),
            Violation::AdjacentOperators { position } => {
                write!(f, "two binary operators in a row at position {position}")
            }
            Violation::DanglingUnaryMinus { position } => write!(
                f,
                "'~' at position {position} must be followed by a digit, '(' or '~'"
            ),
            Violation::InvalidStart { character } => {
                write!(f, "expression cannot start with '{character}'")
            }
            Violation::InvalidEnd { character } => {
                write!(f, "expression cannot end with '{character}'")
            }
            Violation::MissingOperand { position } => {
                write!(f, "operand expected after position {position}")
            }
            Violation::MissingOperator { position } => {
                write!(f, "operator expected after position {position}")
            }
        }
    }
}

/// Remove every whitespace character.
pub fn strip_whitespace(text: &str) -> String {
    text.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Whether `text` is a well-formed expression.
///
/// # Examples
/// ```
/// use calc_planner::engine::validate;
///
/// assert!(validate("2 + 3 * (4 - 1)"));
/// assert!(validate("~~(1.5)^2"));
/// assert!(!validate("2++3"));
/// assert!(!validate("(2+3"));
/// ```
pub fn validate(text: &str) -> bool {
    find_violation(text).is_none()
}

/// Validate and log the broken rule on failure.
pub fn check(text: &str) -> Result<(), ExpressionError> {
    match find_violation(text) {
        None => Ok(()),
        Some(violation) => {
            ExpressionRejected {
                expression: text,
                rule: &violation.to_string(),
            }
            .log();
            Err(ExpressionError::Malformed)
        }
    }
}

/// The first broken rule, in the order listed in the module docs.
pub fn find_violation(text: &str) -> Option<Violation> {
    let expr: Vec<char> = strip_whitespace(text).chars().collect();
    let (first, last) = match (expr.first(), expr.last()) {
        (Some(first), Some(last)) => (*first, *last),
        _ => return Some(Violation::Empty),
    };

    let mut seen_point = false;
    for (position, &ch) in expr.iter().enumerate() {
        if !is_allowed(ch) {
            return Some(Violation::UnexpectedCharacter {
                character: ch,
                position,
            });
        }
        if ch == DECIMAL_POINT && !expr.get(position + 1).is_some_and(|c| c.is_ascii_digit()) {
            return Some(Violation::DanglingDecimalPoint { position });
        }
        if ch == DECIMAL_POINT {
            if seen_point {
                return Some(Violation::RepeatedDecimalPoint { position });
            }
            seen_point = true;
        } else if !ch.is_ascii_digit() {
            seen_point = false;
        }
    }

    let mut depth = 0usize;
    for (position, &ch) in expr.iter().enumerate() {
        if ch == OPEN_PAREN {
            depth += 1;
        } else if ch == CLOSE_PAREN {
            depth = match depth.checked_sub(1) {
                Some(depth) => depth,
                None => return Some(Violation::UnmatchedCloseParen { position }),
            };
        }
    }
    if depth != 0 {
        return Some(Violation::UnclosedParen { depth });
    }

    for (position, pair) in expr.windows(2).enumerate() {
        let (current, next) = (pair[0], pair[1]);
        if is_binary_operator(current) && is_binary_operator(next) {
            return Some(Violation::AdjacentOperators { position });
        }
        if current == UNARY_MINUS
            && !(next.is_ascii_digit() || next == OPEN_PAREN || next == UNARY_MINUS)
        {
            return Some(Violation::DanglingUnaryMinus { position });
        }
    }

    if !(first.is_ascii_digit() || first == UNARY_MINUS || first == OPEN_PAREN) {
        return Some(Violation::InvalidStart { character: first });
    }

    // Covers a trailing '~' too, which the pairwise scan never sees as `current`.
    if is_binary_operator(last) || last == UNARY_MINUS {
        return Some(Violation::InvalidEnd { character: last });
    }

    for (position, pair) in expr.windows(2).enumerate() {
        let (current, next) = (pair[0], pair[1]);
        if expects_operand_after(current) && !starts_operand(next) {
            return Some(Violation::MissingOperand { position });
        }
        if ends_operand(current) && !continues_after_operand(current, next) {
            return Some(Violation::MissingOperator { position });
        }
    }

    None
}

fn starts_operand(ch: char) -> bool {
    ch.is_ascii_digit() || ch == UNARY_MINUS || ch == OPEN_PAREN
}

fn expects_operand_after(ch: char) -> bool {
    ch == OPEN_PAREN || ch == UNARY_MINUS || is_binary_operator(ch)
}

fn ends_operand(ch: char) -> bool {
    ch.is_ascii_digit() || ch == CLOSE_PAREN
}

fn continues_after_operand(current: char, next: char) -> bool {
    let continues_number = current.is_ascii_digit() && (next.is_ascii_digit() || next == DECIMAL_POINT);
    continues_number || next == CLOSE_PAREN || is_binary_operator(next)
}

fn is_allowed(ch: char) -> bool {
    ch.is_ascii_digit()
        || ch == DECIMAL_POINT
        || ch == UNARY_MINUS
        || ch == OPEN_PAREN
        || ch == CLOSE_PAREN
        || is_binary_operator(ch)
}

fn is_binary_operator(ch: char) -> bool {
    BINARY_OPERATORS.contains(ch)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_well_formed_expressions() {
        for expr in [
            "42",
            "2+3*4",
            "2^3^4",
            "~5+3",
            "~~5",
            "~(2+3)",
            "(1.5+2.25)/0.5",
            "((7))",
            " 2 *\t( 3 - 1 ) ",
            "2*~3",
        ] {
            assert!(validate(expr), "{expr:?} should be accepted");
        }
    }

    #[test]
    fn test_rejects_listed_malformed_expressions() {
        for expr in ["", "2++3", "(2+3", "2+", "2.+3", ")2+3("] {
            assert!(!validate(expr), "{expr:?} should be rejected");
        }
    }

    #[test]
    fn test_whitespace_only_is_empty() {
        assert_eq!(find_violation("   "), Some(Violation::Empty));
    }

    #[test]
    fn test_each_rule_reports_its_violation() {
        assert_eq!(
            find_violation("2+a"),
            Some(Violation::UnexpectedCharacter {
                character: 'a',
                position: 2
            })
        );
        assert_eq!(
            find_violation("2."),
            Some(Violation::DanglingDecimalPoint { position: 1 })
        );
        assert_eq!(
            find_violation("1.(2)"),
            Some(Violation::DanglingDecimalPoint { position: 1 })
        );
        assert_eq!(
            find_violation("1.2.3+4"),
            Some(Violation::RepeatedDecimalPoint { position: 3 })
        );
        assert_eq!(
            find_violation("2)+(3"),
            Some(Violation::UnmatchedCloseParen { position: 1 })
        );
        assert_eq!(
            find_violation("((2)"),
            Some(Violation::UnclosedParen { depth: 1 })
        );
        assert_eq!(
            find_violation("2*-3"),
            Some(Violation::AdjacentOperators { position: 1 })
        );
        assert_eq!(
            find_violation("~+3"),
            Some(Violation::DanglingUnaryMinus { position: 0 })
        );
        assert_eq!(
            find_violation("*3"),
            Some(Violation::InvalidStart { character: '*' })
        );
        assert_eq!(
            find_violation("3~"),
            Some(Violation::InvalidEnd { character: '~' })
        );
    }

    #[test]
    fn test_rejects_operand_operator_mismatches() {
        assert_eq!(find_violation("()"), Some(Violation::MissingOperand { position: 0 }));
        assert_eq!(find_violation("(+2)"), Some(Violation::MissingOperand { position: 0 }));
        assert_eq!(find_violation("(2+)"), Some(Violation::MissingOperand { position: 2 }));
        assert_eq!(find_violation("2(3)"), Some(Violation::MissingOperator { position: 0 }));
        assert_eq!(find_violation("(1)(2)"), Some(Violation::MissingOperator { position: 2 }));
        assert_eq!(find_violation("(1)2"), Some(Violation::MissingOperator { position: 2 }));
        assert_eq!(find_violation("5~3"), Some(Violation::MissingOperator { position: 0 }));
        assert_eq!(find_violation("(2).5"), Some(Violation::MissingOperator { position: 2 }));
    }

    #[test]
    fn test_unary_minus_after_operator_is_allowed() {
        // Only binary pairs are forbidden; '~' is not a binary operator.
        assert!(validate("2-~3"));
        assert!(validate("2^~1"));
    }

    #[test]
    fn test_check_returns_malformed() {
        assert_eq!(check("2++3"), Err(ExpressionError::Malformed));
        assert_eq!(check("2+3"), Ok(()));
    }
}
