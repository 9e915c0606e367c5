// SPDX-License-Identifier: MIT
// Copyright (c) 2023 Kagati Foundation

pub mod scope;
pub mod stack;

pub use scope::*;
pub use stack::ScopeStack;
