// SPDX-License-Identifier: MIT
// Copyright (c) 2023 Kagati Foundation

use std::cell::RefCell;
use std::rc::Rc;

use ltc_backend::error::EmitError;
use ltc_backend::tiny::TinyCodeGenerator;
use ltc_backend::CodeGenerator;
use ltc_ctx::builder::CompilerCtxBuilder;
use ltc_ctx::CompilerCtx;
use ltc_ir::{IRBuilder, IRModule, LittleListener};
use thiserror::Error;

use crate::construct::Construct;

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error(transparent)]
    Emit(#[from] EmitError),
}

/// What a finished compilation leaves behind besides its output lines.
#[derive(Debug, Clone)]
pub struct CompileOutput {
    pub module: IRModule,

    /// Registers used by the tiny code pass.
    pub registers: usize,

    /// Diagnostics reported during traversal.
    pub diagnostics: usize
}

/// Drives the traversal phase to completion, then the emission phase
/// exactly once.
#[derive(Debug)]
pub struct CompilerPipeline {
    pub ctx: Rc<RefCell<CompilerCtx>>
}

impl CompilerPipeline {
    #[allow(clippy::new_without_default)]
    pub fn new() -> Self {
        Self::with_ctx(CompilerCtxBuilder::new().build())
    }

    pub fn with_ctx(ctx: CompilerCtx) -> Self {
        Self {
            ctx: Rc::new(RefCell::new(ctx))
        }
    }

    pub fn compile<I>(&mut self, constructs: I) -> Result<CompileOutput, PipelineError>
    where
        I: IntoIterator<Item = Construct>
    {
        let module = self.build_ir(constructs);

        let diagnostics = {
            let ctx = self.ctx.borrow();
            if ctx.diagnostics.has_errors() {
                ctx.diagnostics.report_all();
            }
            ctx.diagnostics.len()
        };

        let mut cg = TinyCodeGenerator::new(self.ctx.clone());
        let registers = cg.gen_module(&module)?;
        tracing::info!(records = module.len(), registers, diagnostics, "compilation finished");

        Ok(CompileOutput {
            module,
            registers,
            diagnostics
        })
    }

    fn build_ir<I>(&mut self, constructs: I) -> IRModule
    where
        I: IntoIterator<Item = Construct>
    {
        let mut builder = IRBuilder::new(self.ctx.clone());
        builder.enter_program();
        for construct in constructs {
            construct.visit(&mut builder);
        }
        builder.exit_program();
        builder.build()
    }
}
