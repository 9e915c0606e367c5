// SPDX-License-Identifier: MIT
// Copyright (c) 2023 Kagati Foundation

pub mod ir_types;
pub mod ir_instr;
pub mod expr;
pub mod record;
pub mod listener;
pub mod builder;

pub use builder::IRBuilder;
pub use listener::LittleListener;
pub use record::{IRModule, QueueKind, Record};

/// Identifier `write` treats as a line break rather than a variable.
pub const NEWLINE: &str = "newline";
