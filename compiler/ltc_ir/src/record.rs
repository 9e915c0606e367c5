// SPDX-License-Identifier: MIT
// Copyright (c) 2023 Kagati Foundation

use crate::ir_types::ArithOp;
use crate::NEWLINE;

/// A statement as recorded during traversal, in program order. Each
/// record owns its operands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Record {
    /// Constant (or plain value) assignment.
    Move {
        value: String,
        target: String
    },

    Arith {
        op: ArithOp,
        operands: Vec<String>,
        target: String
    },

    Read {
        var: String
    },

    Write {
        var: String
    },

    WriteNewline
}

impl Record {
    /// Whether emitting this record takes a register.
    pub fn needs_register(&self) -> bool {
        matches!(self, Self::Move { .. } | Self::Arith { .. })
    }

    /// Assignment target, for records that store into a variable.
    pub fn target(&self) -> Option<&str> {
        match self {
            Self::Move { target, .. } | Self::Arith { target, .. } => Some(target),
            _ => None
        }
    }
}

/// Per-kind operand views over the record stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueueKind {
    Write,
    Read,
    /// Targets of constant assignments.
    Move,
    Mul,
    Sub,
    Add,
    Div,
    /// Targets of every assignment.
    Store,
    Constant
}

impl QueueKind {
    fn arith_op(&self) -> Option<ArithOp> {
        match self {
            Self::Mul => Some(ArithOp::Mul),
            Self::Sub => Some(ArithOp::Sub),
            Self::Add => Some(ArithOp::Add),
            Self::Div => Some(ArithOp::Div),
            _ => None
        }
    }
}

/// Result of the traversal phase.
#[derive(Debug, Default, Clone)]
pub struct IRModule {
    pub records: Vec<Record>,

    /// Temporaries handed out while building.
    pub temps: usize
}

impl IRModule {
    /// Entries of one queue in the order they were recorded.
    pub fn queue(&self, kind: QueueKind) -> Vec<String> {
        self.records.iter()
            .filter_map(|record| match (kind, record) {
                (QueueKind::Write, Record::Write { var }) => Some(var.clone()),
                (QueueKind::Write, Record::WriteNewline) => Some(NEWLINE.to_string()),
                (QueueKind::Read, Record::Read { var }) => Some(var.clone()),
                (QueueKind::Move, Record::Move { target, .. }) => Some(target.clone()),
                (QueueKind::Constant, Record::Move { value, .. }) => Some(value.clone()),
                (QueueKind::Store, rec) => rec.target().map(String::from),
                (kind, Record::Arith { op, operands, .. }) if kind.arith_op() == Some(*op) => {
                    Some(operands.join(" "))
                },
                _ => None
            })
            .collect()
    }

    /// Number of records that take a register when emitted.
    pub fn register_demand(&self) -> usize {
        self.records.iter().filter(|r| r.needs_register()).count()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> IRModule {
        IRModule {
            records: vec![
                Record::Read { var: "a".into() },
                Record::Move { value: "5".into(), target: "b".into() },
                Record::Arith { op: ArithOp::Add, operands: vec!["a".into(), "b".into()], target: "c".into() },
                Record::Arith { op: ArithOp::Mul, operands: vec!["c".into(), "2".into()], target: "d".into() },
                Record::Write { var: "d".into() },
                Record::WriteNewline
            ],
            temps: 3
        }
    }

    #[test]
    fn test_queues_keep_recording_order() {
        let module = sample();
        assert_eq!(module.queue(QueueKind::Write), vec!["d", "newline"]);
        assert_eq!(module.queue(QueueKind::Read), vec!["a"]);
        assert_eq!(module.queue(QueueKind::Constant), vec!["5"]);
        assert_eq!(module.queue(QueueKind::Move), vec!["b"]);
        assert_eq!(module.queue(QueueKind::Add), vec!["a b"]);
        assert_eq!(module.queue(QueueKind::Mul), vec!["c 2"]);
        assert!(module.queue(QueueKind::Sub).is_empty());
        assert_eq!(module.queue(QueueKind::Store), vec!["b", "c", "d"]);
    }

    #[test]
    fn test_register_demand_counts_assignments() {
        assert_eq!(sample().register_demand(), 3);
        assert_eq!(IRModule::default().register_demand(), 0);
    }
}
