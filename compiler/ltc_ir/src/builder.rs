// SPDX-License-Identifier: MIT
// Copyright (c) 2023 Kagati Foundation

use std::cell::RefCell;
use std::rc::Rc;

use ltc_ctx::CompilerCtx;
use ltc_errors::code::ErrCode;
use ltc_errors::diagnostic::Diagnostic;
use ltc_symbol::VarType;

use crate::expr::{classify, Rhs};
use crate::ir_instr::IRInstr;
use crate::ir_types::TempId;
use crate::listener::LittleListener;
use crate::record::{IRModule, Record};
use crate::NEWLINE;

const ASSIGN_OP: &str = ":=";
const STRING_KEYWORD: &str = "STRING";
const ENTRY_LABEL: &str = "main";

/// Builds IR while the parser walks the program. IR lines go to the
/// context's sink as soon as they are produced; the matching records
/// are kept for the tiny code pass.
#[derive(Debug)]
pub struct IRBuilder {
    ctx: Rc<RefCell<CompilerCtx>>,
    temp_counter: TempId,
    records: Vec<Record>
}

impl IRBuilder {
    pub fn new(ctx: Rc<RefCell<CompilerCtx>>) -> Self {
        Self {
            ctx,
            temp_counter: 0,
            records: vec![]
        }
    }

    /// Hands the recorded statements over to code generation.
    pub fn build(&mut self) -> IRModule {
        IRModule {
            records: std::mem::take(&mut self.records),
            temps: self.temp_counter
        }
    }

    pub fn temps_allocated(&self) -> usize {
        self.temp_counter
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    fn emit(&self, instr: IRInstr) {
        self.ctx.borrow_mut().emit(&instr.to_string());
    }

    fn report(&self, diag: Diagnostic) {
        self.ctx.borrow_mut().report(diag);
    }

    fn next_temp(&mut self) -> String {
        self.temp_counter += 1;
        self.current_temp()
    }

    fn current_temp(&self) -> String {
        format!("{}{}", self.ctx.borrow().options.temp_prefix, self.temp_counter)
    }

    fn var_type(&self, name: &str) -> VarType {
        self.ctx.borrow().scope.lookup_type(name).unwrap_or_default()
    }

    fn items(id_list: &str) -> impl Iterator<Item = &str> {
        id_list.split(',').map(str::trim).filter(|item| !item.is_empty())
    }
}

impl LittleListener for IRBuilder {
    fn enter_program(&mut self) {
        tracing::debug!("program start");
        self.emit(IRInstr::Begin);
        self.emit(IRInstr::Label(ENTRY_LABEL.to_string()));
        self.emit(IRInstr::Link);
    }

    fn enter_write_stmt(&mut self, id_list: &str) {
        for item in Self::items(id_list) {
            if item == NEWLINE {
                self.emit(IRInstr::WriteNewline);
                self.records.push(Record::WriteNewline);
                continue;
            }
            let ty = self.var_type(item);
            tracing::debug!(var = item, %ty, "write");
            self.emit(IRInstr::Write { ty, var: item.to_string() });
            self.records.push(Record::Write { var: item.to_string() });
        }
    }

    fn enter_read_stmt(&mut self, id_list: &str) {
        for item in Self::items(id_list) {
            let ty = self.var_type(item);
            tracing::debug!(var = item, %ty, "read");
            self.emit(IRInstr::Read { ty, var: item.to_string() });
            self.records.push(Record::Read { var: item.to_string() });
        }
    }

    fn enter_var_decl(&mut self, var_type: &str, id_list: &str) {
        let Some(ty) = VarType::from_keyword(var_type) else {
            self.report(
                Diagnostic::error(ErrCode::DCL1001, "unknown variable type")
                    .with_source(var_type.trim())
                    .with_note("expected `INT` or `FLOAT`")
            );
            return;
        };

        let mut ctx = self.ctx.borrow_mut();
        for name in Self::items(id_list) {
            tracing::debug!(name, %ty, "declare variable");
            ctx.scope.declare(name, ty);
        }
    }

    fn enter_string_decl(&mut self, text: &str) {
        let body = text.trim();
        let body = body.strip_prefix(STRING_KEYWORD).unwrap_or(body);

        for segment in split_outside_quotes(body, ',') {
            let parsed = segment.split_once(ASSIGN_OP)
                .map(|(name, literal)| {
                    let literal = literal.trim();
                    let literal = literal.strip_suffix(';').unwrap_or(literal).trim_end();
                    (name.trim(), literal)
                })
                .filter(|(name, _)| !name.is_empty());

            match parsed {
                Some((name, literal)) => {
                    tracing::debug!(name, literal, "declare string");
                    self.ctx.borrow_mut().scope.declare_string(name, literal);
                },
                None => self.report(
                    Diagnostic::error(ErrCode::DCL1000, "invalid string declaration")
                        .with_source(segment.trim())
                )
            }
        }
    }

    fn enter_assign_stmt(&mut self, text: &str) {
        let assignment = text.trim();
        let assignment = assignment.strip_suffix(';').unwrap_or(assignment).trim_end();

        let parts: Vec<&str> = assignment.split(ASSIGN_OP).map(str::trim).collect();
        let [variable, value] = parts[..] else {
            self.report(
                Diagnostic::error(ErrCode::ASG1000, "invalid assignment expression")
                    .with_source(assignment)
            );
            return;
        };

        let policy = self.ctx.borrow().options.classify;
        let rhs = classify(value, policy);
        let malformed = variable.is_empty() || match &rhs {
            Rhs::Binary(bin) => bin.operands.is_empty(),
            Rhs::Value(v) => v.is_empty()
        };
        if malformed {
            self.report(
                Diagnostic::error(ErrCode::ASG1000, "invalid assignment expression")
                    .with_source(assignment)
            );
            return;
        }

        let ty = self.var_type(variable);
        match rhs {
            Rhs::Binary(bin) => {
                if let Some(divisor) = bin.divisor().filter(|_| bin.has_float_divisor()) {
                    let dest = self.next_temp();
                    self.emit(IRInstr::Store { ty, src: divisor.to_string(), dest });
                }
                let dest = self.next_temp();
                tracing::debug!(var = variable, op = ?bin.op, operands = ?bin.operands, "arith");
                self.emit(IRInstr::Arith { op: bin.op, ty, operands: bin.operands.clone(), dest });
                self.records.push(Record::Arith {
                    op: bin.op,
                    operands: bin.operands,
                    target: variable.to_string()
                });
            },
            Rhs::Value(value) => {
                let dest = self.next_temp();
                tracing::debug!(var = variable, %value, "store constant");
                self.emit(IRInstr::Store { ty, src: value.clone(), dest });
                self.records.push(Record::Move { value, target: variable.to_string() });
            }
        }

        self.emit(IRInstr::Store { ty, src: self.current_temp(), dest: variable.to_string() });
    }
}

/// Splits `text` on `sep`, ignoring separators inside double quotes.
fn split_outside_quotes(text: &str, sep: char) -> Vec<&str> {
    let mut pieces = vec![];
    let mut in_quotes = false;
    let mut start = 0;
    for (idx, c) in text.char_indices() {
        if c == '"' {
            in_quotes = !in_quotes;
        } else if c == sep && !in_quotes {
            pieces.push(&text[start..idx]);
            start = idx + c.len_utf8();
        }
    }
    pieces.push(&text[start..]);
    pieces.into_iter().filter(|p| !p.trim().is_empty()).collect()
}
