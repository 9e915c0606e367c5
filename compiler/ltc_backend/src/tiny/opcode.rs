// SPDX-License-Identifier: MIT
// Copyright (c) 2023 Kagati Foundation

use std::fmt::Display;

use ltc_ir::ir_types::ArithOp;

use crate::regalloc::Register;

/// One line of tiny code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TinyInstr {
    Var(String),

    /// String constant; the value is written between quotes.
    Str {
        name: String,
        value: String
    },

    Move {
        src: String,
        dest: String
    },

    /// `op` applied to `operand` and `reg`, result in `reg`.
    Arith {
        op: ArithOp,
        operand: String,
        reg: Register
    },

    ReadInt(String),

    WriteInt(String),

    WriteNewline,

    Halt
}

impl TinyInstr {
    pub fn arith_mnemonic(op: ArithOp) -> &'static str {
        match op {
            ArithOp::Add => "addi",
            ArithOp::Sub => "subi",
            ArithOp::Mul => "muli",
            ArithOp::Div => "divi"
        }
    }
}

impl Display for TinyInstr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Var(name) => write!(f, "var {name}"),
            Self::Str { name, value } => write!(f, "str {name} \"{value}\""),
            Self::Move { src, dest } => write!(f, "move {src} {dest}"),
            Self::Arith { op, operand, reg } => write!(f, "{} {operand} {reg}", Self::arith_mnemonic(*op)),
            Self::ReadInt(var) => write!(f, "sys readi {var}"),
            Self::WriteInt(var) => write!(f, "sys writei {var}"),
            Self::WriteNewline => write!(f, "sys writes newline"),
            Self::Halt => write!(f, "sys halt"),
        }
    }
}
