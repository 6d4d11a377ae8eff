// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Centralized message types for structured logging.
//!
//! Each message type implements `Display` for the human-readable line and
//! [`StructuredLog`] to emit the same event with structured fields at the level
//! documented on the type.
//!
//! * `engine` - expression validation, postfix conversion, task emission
//! * `service` - request lifecycle, persistence and queue dispatch
//! * `validation` - plan verification and configuration validation

use tracing::Span;

pub mod engine;
pub mod service;
pub mod validation;

/// Emits a message as a structured `tracing` event or span.
pub trait StructuredLog {
    /// Emit the event at the message's documented level.
    fn log(&self);

    /// Build a span carrying the message's fields.
    fn span(&self, name: &str) -> Span;
}
