// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod queue;
pub mod repository;
pub mod variables;

pub use queue::TaskQueue;
pub use repository::ExampleRepository;
pub use variables::VariableGenerator;
