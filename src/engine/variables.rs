// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Variable identifier generators.

use std::sync::atomic::{AtomicU64, Ordering};
use uuid::Uuid;

use super::token::VariableId;
use crate::traits::VariableGenerator;

/// Random v4 UUIDs.
///
/// Safe to use from any number of processes writing to one result store.
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidVariables;

impl VariableGenerator for UuidVariables {
    fn next_variable(&self) -> VariableId {
        VariableId::new(Uuid::new_v4().to_string())
    }

    fn name(&self) -> &'static str {
        "uuid"
    }
}

/// `prefix` followed by a counter starting at 1.
///
/// Unique for the lifetime of one instance; share the instance (behind an `Arc`)
/// between requests that publish into the same store. Readable identifiers make it
/// handy for diagnostics and tests.
#[derive(Debug)]
pub struct SequentialVariables {
    prefix: String,
    counter: AtomicU64,
}

impl SequentialVariables {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            counter: AtomicU64::new(0),
        }
    }
}

impl VariableGenerator for SequentialVariables {
    fn next_variable(&self) -> VariableId {
        let n = self.counter.fetch_add(1, Ordering::Relaxed) + 1;
        VariableId::new(format!("{}{}", self.prefix, n))
    }

    fn name(&self) -> &'static str {
        "sequential"
    }
}
