// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Operator symbols, their precedence and associativity.
//!
//! The converter is a table lookup plus a stack discipline; everything it needs
//! to know about a symbol lives in [`OPERATOR_TABLE`].
//!
//! | Symbol | Meaning        | Precedence | Associativity |
//! |--------|----------------|-----------:|---------------|
//! | `+ -`  | add, subtract  | 1          | left          |
//! | `* /`  | multiply, divide | 2        | left          |
//! | `^`    | power          | 3          | right         |
//! | `~`    | unary minus    | 4          | right         |
//! | `(`    | group barrier  | 6          | left          |

use serde::{Deserialize, Serialize};
use std::fmt;

pub const OPEN_PAREN: char = '(';
pub const CLOSE_PAREN: char = ')';
pub const UNARY_MINUS: char = '~';
pub const DECIMAL_POINT: char = '.';
/// Symbols of the binary operators, in no particular order.
pub const BINARY_OPERATORS: &str = "+-*/^";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Associativity {
    Left,
    Right,
}

/// Precedence level and associativity of one symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OperatorInfo {
    pub precedence: u8,
    pub associativity: Associativity,
}

impl OperatorInfo {
    const fn left(precedence: u8) -> Self {
        Self {
            precedence,
            associativity: Associativity::Left,
        }
    }

    const fn right(precedence: u8) -> Self {
        Self {
            precedence,
            associativity: Associativity::Right,
        }
    }

    /// Whether a stacked operator with `self` must be emitted before pushing `incoming`.
    pub fn yields_to(self, incoming: OperatorInfo) -> bool {
        self.precedence > incoming.precedence
            || (self.precedence == incoming.precedence
                && incoming.associativity == Associativity::Left)
    }
}

/// Every symbol the converter may stack, with its precedence and associativity.
///
/// `~` is a prefix operator, so it must not emit a `~` already on the stack:
/// `~~5` is `5 ~ ~`, never `~ 5 ~`. Right associativity gives exactly that.
/// `(` carries the highest level so it is never emitted by a precedence
/// comparison; only a matching `)` removes it.
pub const OPERATOR_TABLE: [(char, OperatorInfo); 7] = [
    ('+', OperatorInfo::left(1)),
    ('-', OperatorInfo::left(1)),
    ('*', OperatorInfo::left(2)),
    ('/', OperatorInfo::left(2)),
    ('^', OperatorInfo::right(3)),
    (UNARY_MINUS, OperatorInfo::right(4)),
    (OPEN_PAREN, OperatorInfo::left(6)),
];

/// Look up a symbol in [`OPERATOR_TABLE`].
pub fn operator_info(symbol: char) -> Option<OperatorInfo> {
    OPERATOR_TABLE
        .iter()
        .find(|(candidate, _)| *candidate == symbol)
        .map(|(_, info)| *info)
}

/// An operator as it appears in the postfix sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
    Power,
    Negate,
}

impl Operator {
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '+' => Some(Operator::Add),
            '-' => Some(Operator::Subtract),
            '*' => Some(Operator::Multiply),
            '/' => Some(Operator::Divide),
            '^' => Some(Operator::Power),
            UNARY_MINUS => Some(Operator::Negate),
            _ => None,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Subtract => '-',
            Operator::Multiply => '*',
            Operator::Divide => '/',
            Operator::Power => '^',
            Operator::Negate => UNARY_MINUS,
        }
    }

    pub fn info(self) -> OperatorInfo {
        // Every variant has a row in the table.
        operator_info(self.symbol()).unwrap_or(OperatorInfo::left(0))
    }

    /// Number of operands the operator consumes.
    pub fn arity(self) -> usize {
        match self {
            Operator::Negate => 1,
            _ => 2,
        }
    }

    /// The arithmetic a task performs for this operator.
    ///
    /// Unary minus is lowered to subtraction from zero.
    pub fn sign(self) -> Sign {
        match self {
            Operator::Add => Sign::Add,
            Operator::Subtract | Operator::Negate => Sign::Subtract,
            Operator::Multiply => Sign::Multiply,
            Operator::Divide => Sign::Divide,
            Operator::Power => Sign::Power,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// The binary operation a task performs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sign {
    #[serde(rename = "+")]
    Add,
    #[serde(rename = "-")]
    Subtract,
    #[serde(rename = "*")]
    Multiply,
    #[serde(rename = "/")]
    Divide,
    #[serde(rename = "^")]
    Power,
}

impl Sign {
    pub fn symbol(self) -> char {
        match self {
            Sign::Add => '+',
            Sign::Subtract => '-',
            Sign::Multiply => '*',
            Sign::Divide => '/',
            Sign::Power => '^',
        }
    }
}

impl fmt::Display for Sign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
