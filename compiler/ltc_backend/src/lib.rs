// SPDX-License-Identifier: MIT
// Copyright (c) 2023 Kagati Foundation

pub mod error;
pub mod regalloc;
pub mod tiny;

use ltc_ir::{IRModule, Record};

use crate::error::EmitError;
use crate::regalloc::RegisterAllocator;

/// Parent trait for generating final code from recorded IR.
pub trait CodeGenerator {
    /// Generate code for a whole module.
    ///
    /// Returns the number of registers used.
    fn gen_module(&mut self, module: &IRModule) -> Result<usize, EmitError>;

    /// Generate code for one record.
    fn gen_record(&mut self, record: &Record, regs: &mut RegisterAllocator) -> Result<(), EmitError>;
}
