// SPDX-License-Identifier: MIT
// Copyright (c) 2023 Kagati Foundation

pub mod compiler;
pub mod construct;

use compiler::{CompileOutput, CompilerPipeline, PipelineError};
use construct::Construct;

/// Runs both phases over `constructs`, printing to standard output.
pub fn compile_constructs<I>(constructs: I) -> Result<CompileOutput, PipelineError>
where
    I: IntoIterator<Item = Construct>
{
    let mut comp = CompilerPipeline::new();
    comp.compile(constructs)
}
