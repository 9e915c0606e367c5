// SPDX-License-Identifier: MIT
// Copyright (c) 2023 Kagati Foundation

use ltc_ir::ir_types::ArithOp;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum EmitError {
    #[error(
        "cannot emit {op:?} into `{target}`: expected a left and a right operand, found {found} (`{operands}`)"
    )]
    MalformedOperands {
        op: ArithOp,
        target: String,
        found: usize,
        operands: String,
    },
}
