// SPDX-License-Identifier: MIT
// Copyright (c) 2023 Kagati Foundation

use ltc_errors::diagnostic::DiagnosticBag;
use ltc_scope::ScopeStack;

use crate::options::CompilerOptions;
use crate::sink::{LineSink, StdoutSink};
use crate::CompilerCtx;

#[derive(Default)]
pub struct CompilerCtxBuilder {
    options: Option<CompilerOptions>,
    output: Option<Box<dyn LineSink>>
}

impl CompilerCtxBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn options(mut self, options: CompilerOptions) -> Self {
        self.options = Some(options);
        self
    }

    pub fn output(mut self, sink: Box<dyn LineSink>) -> Self {
        self.output = Some(sink);
        self
    }

    pub fn build(self) -> CompilerCtx {
        CompilerCtx::new(
            ScopeStack::default(),
            self.options.unwrap_or_default(),
            DiagnosticBag::default(),
            self.output.unwrap_or_else(|| Box::new(StdoutSink))
        )
    }
}

#[cfg(test)]
mod tests {
    use crate::options::{ClassifyPolicy, EmitOrder};
    use crate::sink::SharedBuffer;

    use super::*;

    #[test]
    fn test_builder_wires_sink_and_options() {
        let buffer = SharedBuffer::default();
        let options = CompilerOptions::builder()
            .emit_order(EmitOrder::Program)
            .build();
        let mut ctx = CompilerCtxBuilder::new()
            .options(options)
            .output(Box::new(buffer.clone()))
            .build();

        ctx.emit(";LINK");
        assert_eq!(buffer.lines(), vec![";LINK".to_string()]);
        assert_eq!(ctx.options.emit_order, EmitOrder::Program);
        assert_eq!(ctx.options.classify, ClassifyPolicy::Legacy);
        assert_eq!(ctx.scope.depth(), 1);
    }
}
