// SPDX-License-Identifier: MIT
// Copyright (c) 2023 Kagati Foundation

use std::fmt;

use itertools::Itertools;
use ltc_symbol::VarType;

use crate::ir_types::ArithOp;

/// Every IR line starts with this marker.
pub const IR_MARKER: char = ';';

/// One line of IR text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IRInstr {
    /// Start of the IR listing.
    Begin,

    Label(String),

    Link,

    Ret,

    /// Marks where the IR listing ends and tiny code begins.
    TinyCode,

    Read {
        ty: VarType,
        var: String
    },

    Write {
        ty: VarType,
        var: String
    },

    WriteNewline,

    /// `op` applied to `operands`, result in temporary `dest`.
    Arith {
        op: ArithOp,
        ty: VarType,
        operands: Vec<String>,
        dest: String
    },

    Store {
        ty: VarType,
        src: String,
        dest: String
    }
}

impl fmt::Display for IRInstr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{IR_MARKER}")?;
        match self {
            Self::Begin => write!(f, "IR code"),
            Self::Label(name) => write!(f, "LABEL {name}"),
            Self::Link => write!(f, "LINK"),
            Self::Ret => write!(f, "RET"),
            Self::TinyCode => write!(f, "tiny code"),
            Self::Read { ty, var } => write!(f, "READ{} {var}", ty.suffix()),
            Self::Write { ty, var } => write!(f, "WRITE{} {var}", ty.suffix()),
            Self::WriteNewline => write!(f, "WRITES newline"),
            Self::Arith { op, ty, operands, dest } => {
                write!(f, "{}{} {} {dest}", op.ir_mnemonic(), ty.suffix(), operands.iter().join(" "))
            },
            Self::Store { ty, src, dest } => write!(f, "STORE{} {src} {dest}", ty.suffix())
        }
    }
}
