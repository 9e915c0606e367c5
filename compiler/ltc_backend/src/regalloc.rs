// SPDX-License-Identifier: MIT
// Copyright (c) 2023 Kagati Foundation

use std::fmt;

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Register {
    pub id: usize,
    pub name: String
}

impl fmt::Display for Register {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Hands out a fresh register per request. Registers are never reused;
/// one allocator lives for a single emission pass.
#[derive(Debug, Clone)]
pub struct RegisterAllocator {
    prefix: String,
    next_id: usize
}

impl RegisterAllocator {
    pub fn new(prefix: &str) -> Self {
        Self {
            prefix: prefix.to_string(),
            next_id: 0 // begin the count
        }
    }

    pub fn allocate(&mut self) -> Register {
        let id = self.next_id;
        self.next_id += 1;
        Register {
            id,
            name: format!("{}{id}", self.prefix)
        }
    }

    /// Registers handed out so far.
    pub fn allocated(&self) -> usize {
        self.next_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registers_are_numbered_from_zero() {
        let mut regs = RegisterAllocator::new("r");
        assert_eq!(regs.allocated(), 0);

        let r0 = regs.allocate();
        let r1 = regs.allocate();
        assert_eq!((r0.id, r0.name.as_str()), (0, "r0"));
        assert_eq!(r1.to_string(), "r1");
        assert_eq!(regs.allocated(), 2);
    }

    #[test]
    fn test_custom_prefix() {
        let mut regs = RegisterAllocator::new("R");
        assert_eq!(regs.allocate().name, "R0");
    }
}
