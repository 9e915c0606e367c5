// SPDX-License-Identifier: MIT
// Copyright (c) 2023 Kagati Foundation

/// Temporary identifier.
pub type TempId = usize;

/// Binary operations an assignment can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArithOp {
    Add,
    Sub,
    Mul,
    Div
}

impl ArithOp {
    /// Priority used by the textual classifier: the first operator in
    /// this list that occurs anywhere in the text wins.
    pub const LEGACY_PRIORITY: [ArithOp; 4] = [ArithOp::Mul, ArithOp::Add, ArithOp::Sub, ArithOp::Div];

    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '+' => Some(Self::Add),
            '-' => Some(Self::Sub),
            '*' => Some(Self::Mul),
            '/' => Some(Self::Div),
            _ => None
        }
    }

    pub fn symbol(&self) -> char {
        match self {
            Self::Add => '+',
            Self::Sub => '-',
            Self::Mul => '*',
            Self::Div => '/'
        }
    }

    pub fn precedence(&self) -> u8 {
        match self {
            Self::Add | Self::Sub => 1,
            Self::Mul | Self::Div => 2
        }
    }

    /// IR opcode without its type suffix.
    pub fn ir_mnemonic(&self) -> &'static str {
        match self {
            Self::Add => "ADD",
            Self::Sub => "SUB",
            Self::Mul => "MULT",
            Self::Div => "DIV"
        }
    }
}
