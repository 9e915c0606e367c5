// SPDX-License-Identifier: MIT
// Copyright (c) 2023 Kagati Foundation

use std::fmt::Debug;

use ltc_errors::diagnostic::{Diagnostic, DiagnosticBag};
use ltc_scope::ScopeStack;

use crate::options::CompilerOptions;
use crate::sink::{LineSink, StdoutSink};

/// State shared by the traversal and the emission pass.
pub struct CompilerCtx {
    pub scope: ScopeStack,

    pub diagnostics: DiagnosticBag,

    pub options: CompilerOptions,

    /// Both IR and tiny code lines end up here.
    pub output: Box<dyn LineSink>
}

impl Debug for CompilerCtx {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CompilerCtx")
            .field("scope", &self.scope)
            .field("diagnostics", &self.diagnostics)
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}

impl Default for CompilerCtx {
    fn default() -> Self {
        Self::new(
            ScopeStack::new(),
            CompilerOptions::default(),
            DiagnosticBag::default(),
            Box::new(StdoutSink)
        )
    }
}

impl CompilerCtx {
    pub fn new(
        scope: ScopeStack,
        options: CompilerOptions,
        diagnostics: DiagnosticBag,
        output: Box<dyn LineSink>
    ) -> Self {
        Self {
            scope,
            diagnostics,
            options,
            output
        }
    }

    pub fn emit(&mut self, line: &str) {
        self.output.emit(line);
    }

    pub fn report(&mut self, diag: Diagnostic) {
        tracing::error!(code = ?diag.code, "{}", diag.summary());
        self.diagnostics.push(diag);
    }
}
