// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! User-facing error for expressions rejected by the validator.

use thiserror::Error;

/// Message attached to every rejected expression.
///
/// Callers persist this text verbatim on the error-tagged record, so it is kept
/// stable and carries no detail about which rule failed.
pub const MALFORMED_EXPRESSION: &str =
    "line is not a mathematical expression or contains an error";

/// The single error kind the validator reports.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExpressionError {
    #[error("{}", MALFORMED_EXPRESSION)]
    Malformed,
}
