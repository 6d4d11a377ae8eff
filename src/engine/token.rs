// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use serde::{Deserialize, Serialize};
use std::fmt;

use super::operators::{Operator, DECIMAL_POINT};

/// Opaque identifier a task publishes its result under.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VariableId(String);

impl VariableId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for VariableId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<VariableId> for String {
    fn from(value: VariableId) -> Self {
        value.0
    }
}

/// True for the text of a decimal literal: digits and `.` with at least one digit.
///
/// Variable identifiers never satisfy this, which is what lets a worker tell the
/// two operand kinds apart on the wire.
pub fn is_numeric_literal(text: &str) -> bool {
    text.chars().any(|c| c.is_ascii_digit())
        && text.chars().all(|c| c.is_ascii_digit() || c == DECIMAL_POINT)
}

/// One element of a postfix sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// Literal text exactly as written, decimals included.
    Number(String),
    Operator(Operator),
    Variable(VariableId),
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Number(text) => f.write_str(text),
            Token::Operator(operator) => write!(f, "{operator}"),
            Token::Variable(variable) => write!(f, "{variable}"),
        }
    }
}

/// A postfix token sequence, rendered space separated (`2 3 4 * +`).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Postfix(pub Vec<Token>);

impl Postfix {
    pub fn tokens(&self) -> &[Token] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of operators in the sequence, which is the number of tasks it reduces to.
    pub fn operator_count(&self) -> usize {
        self.0
            .iter()
            .filter(|token| matches!(token, Token::Operator(_)))
            .count()
    }
}

impl From<Vec<Token>> for Postfix {
    fn from(tokens: Vec<Token>) -> Self {
        Self(tokens)
    }
}

impl fmt::Display for Postfix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, token) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{token}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_literal_detection() {
        assert!(is_numeric_literal("42"));
        assert!(is_numeric_literal("3.14"));
        assert!(is_numeric_literal("0"));
        assert!(!is_numeric_literal(""));
        assert!(!is_numeric_literal("."));
        assert!(!is_numeric_literal("v1"));
        assert!(!is_numeric_literal("67e55044-10b1-426f-9247-bb680e5fe0c8"));
    }

    #[test]
    fn test_postfix_display() {
        let postfix = Postfix::from(vec![
            Token::Number("2".to_string()),
            Token::Number("3.5".to_string()),
            Token::Operator(Operator::Multiply),
            Token::Operator(Operator::Negate),
        ]);

        assert_eq!(postfix.to_string(), "2 3.5 * ~");
        assert_eq!(postfix.operator_count(), 2);
        assert_eq!(Postfix::default().to_string(), "");
    }
}
