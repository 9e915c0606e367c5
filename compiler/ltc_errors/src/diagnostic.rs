// SPDX-License-Identifier: MIT
// Copyright (c) 2023 Kagati Foundation

use itertools::Itertools;

use crate::code::ErrCode;
use crate::terminal::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
}

impl Severity {
    fn color(&self) -> &'static str {
        match self {
            Severity::Error => ANSI_COLOR_RED,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Diagnostic {
    pub code:               Option<ErrCode>,
    pub severity:           Severity,
    pub message:            String,
    /// Text of the construct that triggered the diagnostic.
    pub source_text:        Option<String>,
    pub notes:              Vec<String>,
}

impl Diagnostic {
    pub fn error(code: ErrCode, msg: &str) -> Self {
        Self {
            code: Some(code),
            severity: Severity::Error,
            message: msg.to_string(),
            source_text: None,
            notes: vec![]
        }
    }

    pub fn with_source(mut self, text: &str) -> Self {
        self.source_text = Some(text.to_string());
        self
    }

    pub fn with_note(mut self, note: &str) -> Self {
        self.notes.push(note.to_string());
        self
    }

    /// One-line rendering without terminal colors.
    pub fn summary(&self) -> String {
        let code = self.code.map(|c| format!("[{c}] ")).unwrap_or_default();
        match &self.source_text {
            Some(text) => format!("{code}{}: {}", self.message, text),
            None => format!("{code}{}", self.message),
        }
    }

    pub fn report(&self) {
        let code = self.code.map(|c| format!("[{c}]")).unwrap_or_default();

        // print severity and message
        eprintln!("{}{:?}{code}{ANSI_COLOR_RESET}: {}", self.severity.color(), self.severity, self.message);

        if let Some(text) = &self.source_text {
            eprintln!("  |");
            eprintln!("  | {text}");
            eprintln!("  |");
        }

        if !self.notes.is_empty() {
            eprintln!("  = note: {}", self.notes.iter().join("\n  = note: "));
        }
    }
}

#[derive(Debug, Default, Clone)]
pub struct DiagnosticBag {
    diagnostics: Vec<Diagnostic>,
}

impl DiagnosticBag {
    pub fn push(&mut self, diag: Diagnostic) {
        self.diagnostics.push(diag);
    }

    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(|d| matches!(d.severity, Severity::Error))
    }

    pub fn count(&self, code: ErrCode) -> usize {
        self.diagnostics.iter().filter(|d| d.code == Some(code)).count()
    }

    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    pub fn report_all(&self) {
        for diag in &self.diagnostics {
            diag.report();
        }
    }

    pub fn clear(&mut self) {
        self.diagnostics.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_includes_code_and_source() {
        let diag = Diagnostic::error(ErrCode::ASG1000, "invalid assignment expression")
            .with_source("x := := y");
        assert_eq!(diag.summary(), "[ASG1000] invalid assignment expression: x := := y");
    }

    #[test]
    fn test_bag_counts_by_code() {
        let mut bag = DiagnosticBag::default();
        assert!(!bag.has_errors());

        bag.push(Diagnostic::error(ErrCode::ASG1000, "a"));
        bag.push(Diagnostic::error(ErrCode::DCL1000, "b"));
        bag.push(Diagnostic::error(ErrCode::ASG1000, "c"));

        assert!(bag.has_errors());
        assert_eq!(bag.len(), 3);
        assert_eq!(bag.count(ErrCode::ASG1000), 2);
        assert_eq!(bag.count(ErrCode::DCL1001), 0);

        bag.clear();
        assert!(bag.is_empty());
    }
}
