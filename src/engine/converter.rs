// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Infix to postfix conversion.
//!
//! Classic operator-precedence rewriting: one left-to-right scan with a stack of
//! pending operators and an output list. Literals go straight to the output; an
//! incoming operator first emits every stacked operator that
//! [`OperatorInfo::yields_to`](super::operators::OperatorInfo::yields_to) it, up
//! to the nearest `(`.
//!
//! ```text
//! 2 + 3 * 4      ->  2 3 4 * +
//! 2 ^ 3 ^ 4      ->  2 3 4 ^ ^     (right associative)
//! ~ 5 + 3        ->  5 ~ 3 +
//! (1 + 2) * 3    ->  1 2 + 3 *
//! ```

use super::operators::{Operator, CLOSE_PAREN, DECIMAL_POINT, OPEN_PAREN};
use super::token::{Postfix, Token};
use super::validator::{check, strip_whitespace};
use crate::errors::{ExpressionError, PlanError, PlanningError};
use crate::observability::messages::engine::{PostfixConverted, UnbalancedParenthesis};
use crate::observability::messages::StructuredLog;

/// Entry on the pending-operator stack.
#[derive(Debug, Clone, Copy)]
enum Pending {
    Operator(Operator),
    /// Barrier: never emitted, only removed by its `)`.
    OpenParen,
}

/// Validate `infix` and convert it to postfix.
///
/// A validation failure is returned unchanged as [`PlanningError::Malformed`].
///
/// # Examples
/// ```
/// use calc_planner::engine::convert;
///
/// assert_eq!(convert("2+3*4").unwrap().to_string(), "2 3 4 * +");
/// assert_eq!(convert("2^3^4").unwrap().to_string(), "2 3 4 ^ ^");
/// assert!(convert("2++3").unwrap_err().is_malformed());
/// ```
pub fn convert(infix: &str) -> Result<Postfix, PlanningError> {
    check(infix)?;

    let expression = strip_whitespace(infix);
    let mut output: Vec<Token> = Vec::new();
    let mut pending: Vec<Pending> = Vec::new();
    let mut literal = String::new();

    for (position, ch) in expression.chars().enumerate() {
        if ch.is_ascii_digit() || ch == DECIMAL_POINT {
            literal.push(ch);
            continue;
        }
        flush_literal(&mut literal, &mut output);

        if ch == OPEN_PAREN {
            pending.push(Pending::OpenParen);
        } else if ch == CLOSE_PAREN {
            close_group(&mut pending, &mut output, position)?;
        } else {
            let operator = Operator::from_symbol(ch).ok_or(ExpressionError::Malformed)?;
            push_operator(operator, &mut pending, &mut output);
        }
    }
    flush_literal(&mut literal, &mut output);

    while let Some(entry) = pending.pop() {
        match entry {
            Pending::Operator(operator) => output.push(Token::Operator(operator)),
            Pending::OpenParen => return Err(unbalanced(expression.chars().count()).into()),
        }
    }

    let postfix = Postfix::from(output);
    PostfixConverted {
        infix,
        postfix: &postfix.to_string(),
        token_count: postfix.len(),
    }
    .log();

    Ok(postfix)
}

fn flush_literal(literal: &mut String, output: &mut Vec<Token>) {
    if !literal.is_empty() {
        output.push(Token::Number(std::mem::take(literal)));
    }
}

fn push_operator(operator: Operator, pending: &mut Vec<Pending>, output: &mut Vec<Token>) {
    let incoming = operator.info();
    while let Some(Pending::Operator(top)) = pending.last().copied() {
        if !top.info().yields_to(incoming) {
            break;
        }
        pending.pop();
        output.push(Token::Operator(top));
    }
    pending.push(Pending::Operator(operator));
}

fn close_group(
    pending: &mut Vec<Pending>,
    output: &mut Vec<Token>,
    position: usize,
) -> Result<(), PlanError> {
    loop {
        match pending.pop() {
            Some(Pending::Operator(operator)) => output.push(Token::Operator(operator)),
            Some(Pending::OpenParen) => return Ok(()),
            None => return Err(unbalanced(position)),
        }
    }
}

fn unbalanced(position: usize) -> PlanError {
    UnbalancedParenthesis { position }.log();
    PlanError::UnbalancedParenthesis { position }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn postfix(infix: &str) -> String {
        convert(infix).unwrap().to_string()
    }

    #[test]
    fn test_precedence() {
        assert_eq!(postfix("2+3*4"), "2 3 4 * +");
        assert_eq!(postfix("2*3+4"), "2 3 * 4 +");
        assert_eq!(postfix("1+2^3*4"), "1 2 3 ^ 4 * +");
    }

    #[test]
    fn test_left_associativity() {
        assert_eq!(postfix("8-3-2"), "8 3 - 2 -");
        assert_eq!(postfix("8/4*2"), "8 4 / 2 *");
        assert_eq!(postfix("1-2+3"), "1 2 - 3 +");
    }

    #[test]
    fn test_power_is_right_associative() {
        assert_eq!(postfix("2^3^4"), "2 3 4 ^ ^");
    }

    #[test]
    fn test_parentheses_override_precedence() {
        assert_eq!(postfix("(1+2)*3"), "1 2 + 3 *");
        assert_eq!(postfix("2*(3+(4-1))"), "2 3 4 1 - + *");
        assert_eq!(postfix("((7))"), "7");
    }

    #[test]
    fn test_unary_minus() {
        assert_eq!(postfix("~5+3"), "5 ~ 3 +");
        assert_eq!(postfix("~~5"), "5 ~ ~");
        assert_eq!(postfix("~(1+2)"), "1 2 + ~");
        assert_eq!(postfix("2*~3"), "2 3 ~ *");
        // '~' binds tighter than '^'.
        assert_eq!(postfix("~2^2"), "2 ~ 2 ^");
    }

    #[test]
    fn test_literals_keep_their_text() {
        let converted = convert(" 3.50 + 007 ").unwrap();
        assert_eq!(
            converted.tokens(),
            &[
                Token::Number("3.50".to_string()),
                Token::Number("007".to_string()),
                Token::Operator(Operator::Add),
            ]
        );
    }

    #[test]
    fn test_bare_literal() {
        assert_eq!(postfix("42"), "42");
    }

    #[test]
    fn test_malformed_input_is_propagated() {
        for infix in ["", "2++3", "(2+3", "2+", "2.+3", ")2+3("] {
            assert_eq!(
                convert(infix),
                Err(PlanningError::Malformed(ExpressionError::Malformed)),
                "{infix:?}"
            );
        }
    }
}
