// SPDX-License-Identifier: MIT
// Copyright (c) 2023 Kagati Foundation

pub mod diagnostic;
pub mod code;
pub mod terminal;
