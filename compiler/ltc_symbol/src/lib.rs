// SPDX-License-Identifier: MIT
// Copyright (c) 2023 Kagati Foundation

mod sym;
mod symbol_table;

pub use sym::*;
pub use symbol_table::*;
