// SPDX-License-Identifier: MIT
// Copyright (c) 2023 Kagati Foundation

pub mod opcode;

use std::cell::RefCell;
use std::rc::Rc;

use itertools::Itertools;
use ltc_ctx::options::EmitOrder;
use ltc_ctx::CompilerCtx;
use ltc_ir::ir_instr::IRInstr;
use ltc_ir::ir_types::ArithOp;
use ltc_ir::{IRModule, Record};
use ltc_symbol::SymbolKind;

use crate::error::EmitError;
use crate::regalloc::RegisterAllocator;
use crate::CodeGenerator;

pub use opcode::TinyInstr;

/// Emits tiny code from the records the IR builder collected.
#[derive(Debug)]
pub struct TinyCodeGenerator {
    ctx: Rc<RefCell<CompilerCtx>>
}

impl TinyCodeGenerator {
    pub fn new(ctx: Rc<RefCell<CompilerCtx>>) -> Self {
        Self { ctx }
    }

    fn emit(&self, line: &str) {
        self.ctx.borrow_mut().emit(line);
    }

    fn emit_instr(&self, instr: TinyInstr) {
        self.emit(&instr.to_string());
    }

    /// Declares every symbol of the global scope.
    fn emit_declarations(&self) {
        let decls: Vec<TinyInstr> = self.ctx.borrow()
            .scope
            .root()
            .iter()
            .map(|sym| match &sym.kind {
                SymbolKind::Variable(_) => TinyInstr::Var(sym.name.clone()),
                SymbolKind::Str { .. } => TinyInstr::Str {
                    name: sym.name.clone(),
                    value: sym.unquoted_literal().unwrap_or_default()
                }
            })
            .collect();

        for decl in decls {
            self.emit_instr(decl);
        }
    }

    fn gen_arith(
        &self,
        op: ArithOp,
        operands: &[String],
        target: &str,
        regs: &mut RegisterAllocator
    ) -> Result<(), EmitError> {
        let [lhs, rhs] = binary_operands(op, operands, target)?;

        // a division result lands in the divisor's own name
        let dest = match op {
            ArithOp::Div => rhs.as_str(),
            _ => target
        };

        let reg = regs.allocate();
        tracing::debug!(?op, %lhs, %rhs, %dest, reg = %reg, "emit arith");
        self.emit_instr(TinyInstr::Move { src: lhs.clone(), dest: reg.name.clone() });
        self.emit_instr(TinyInstr::Arith { op, operand: rhs.clone(), reg: reg.clone() });
        self.emit_instr(TinyInstr::Move { src: reg.name, dest: dest.to_string() });
        Ok(())
    }
}

fn binary_operands<'a>(
    op: ArithOp,
    operands: &'a [String],
    target: &str
) -> Result<&'a [String; 2], EmitError> {
    operands.try_into().map_err(|_| EmitError::MalformedOperands {
        op,
        target: target.to_string(),
        found: operands.len(),
        operands: operands.join(" ")
    })
}

/// Rejects the module before anything is written if an arithmetic
/// record does not carry exactly two operands.
fn check_module(module: &IRModule) -> Result<(), EmitError> {
    for record in &module.records {
        if let Record::Arith { op, operands, target } = record {
            binary_operands(*op, operands, target)?;
        }
    }
    Ok(())
}

/// Position of a record in the grouped layout.
fn group_rank(record: &Record) -> u8 {
    match record {
        Record::Move { .. } => 0,
        Record::Read { .. } => 1,
        Record::Arith { op: ArithOp::Sub, .. } => 2,
        Record::Arith { op: ArithOp::Mul, .. } => 3,
        Record::Arith { op: ArithOp::Add, .. } => 4,
        Record::Arith { op: ArithOp::Div, .. } => 5,
        Record::Write { .. } | Record::WriteNewline => 6
    }
}

impl CodeGenerator for TinyCodeGenerator {
    fn gen_module(&mut self, module: &IRModule) -> Result<usize, EmitError> {
        let (order, prefix) = {
            let ctx = self.ctx.borrow();
            (ctx.options.emit_order, ctx.options.register_prefix.clone())
        };
        check_module(module)?;
        let mut regs = RegisterAllocator::new(&prefix);

        self.emit(&IRInstr::Ret.to_string());
        self.emit(&IRInstr::TinyCode.to_string());
        self.emit_declarations();

        let records: Vec<&Record> = match order {
            EmitOrder::Grouped => module.records.iter().sorted_by_key(|r| group_rank(r)).collect(),
            EmitOrder::Program => module.records.iter().collect()
        };
        for record in records {
            self.gen_record(record, &mut regs)?;
        }

        self.emit_instr(TinyInstr::Halt);
        tracing::debug!(registers = regs.allocated(), "tiny code done");
        Ok(regs.allocated())
    }

    fn gen_record(&mut self, record: &Record, regs: &mut RegisterAllocator) -> Result<(), EmitError> {
        match record {
            Record::Move { value, target } => {
                let reg = regs.allocate();
                self.emit_instr(TinyInstr::Move { src: value.clone(), dest: reg.name.clone() });
                self.emit_instr(TinyInstr::Move { src: reg.name, dest: target.clone() });
                Ok(())
            },
            Record::Arith { op, operands, target } => self.gen_arith(*op, operands, target, regs),
            Record::Read { var } => {
                self.emit_instr(TinyInstr::ReadInt(var.clone()));
                Ok(())
            },
            Record::Write { var } => {
                self.emit_instr(TinyInstr::WriteInt(var.clone()));
                Ok(())
            },
            Record::WriteNewline => {
                self.emit_instr(TinyInstr::WriteNewline);
                Ok(())
            }
        }
    }
}
