// SPDX-License-Identifier: MIT
// Copyright (c) 2023 Kagati Foundation

use std::cell::RefCell;
use std::rc::Rc;

/// Line-oriented destination for generated code.
pub trait LineSink {
    fn emit(&mut self, line: &str);
}

/// Prints every line to standard output.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutSink;

impl LineSink for StdoutSink {
    fn emit(&mut self, line: &str) {
        println!("{line}");
    }
}

impl LineSink for Vec<String> {
    fn emit(&mut self, line: &str) {
        self.push(line.to_string());
    }
}

/// Cloneable in-memory sink. Every clone appends to the same buffer,
/// so a handle kept outside the compiler can read the lines back.
#[derive(Debug, Default, Clone)]
pub struct SharedBuffer {
    lines: Rc<RefCell<Vec<String>>>
}

impl SharedBuffer {
    pub fn lines(&self) -> Vec<String> {
        self.lines.borrow().clone()
    }

    pub fn len(&self) -> usize {
        self.lines.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.borrow().is_empty()
    }
}

impl LineSink for SharedBuffer {
    fn emit(&mut self, line: &str) {
        self.lines.borrow_mut().push(line.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shared_buffer_clones_share_lines() {
        let buffer = SharedBuffer::default();
        let mut writer: Box<dyn LineSink> = Box::new(buffer.clone());
        writer.emit("var x");
        writer.emit("sys halt");

        assert_eq!(buffer.len(), 2);
        assert_eq!(buffer.lines(), vec!["var x", "sys halt"]);
    }

    #[test]
    fn test_vec_sink() {
        let mut lines: Vec<String> = vec![];
        lines.emit(";IR code");
        assert_eq!(lines, vec![";IR code"]);
    }
}
