// SPDX-License-Identifier: MIT
// Copyright (c) 2023 Kagati Foundation

pub mod builder;
pub mod options;
pub mod sink;

mod ctx;

pub use ctx::*;
