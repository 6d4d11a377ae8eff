// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod backends;   // in-memory repository and queue
pub mod config;     // YAML config + variable strategy
pub mod engine;     // validator, converter, task graph builder
pub mod errors;     // error handling
pub mod observability;
pub mod service;    // calculator orchestration
pub mod traits;     // repository, queue and variable seams
