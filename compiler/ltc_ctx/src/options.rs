// SPDX-License-Identifier: MIT
// Copyright (c) 2023 Kagati Foundation

/// How the operator of an assignment's right-hand side is chosen.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum ClassifyPolicy {
    /// First operator found in the fixed order `*`, `+`, `-`, `/`,
    /// regardless of where it sits in the expression.
    #[default]
    Legacy,

    /// Operator picked from the token stream: the lowest-precedence,
    /// rightmost operator outside parentheses.
    Structural
}

/// Order in which the emitter walks the recorded instructions.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum EmitOrder {
    /// Constants, then reads, then subtract, multiply, add and divide
    /// instructions, then writes.
    #[default]
    Grouped,

    /// Statement order of the source program.
    Program
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompilerOptions {
    pub classify: ClassifyPolicy,
    pub emit_order: EmitOrder,
    pub register_prefix: String,
    pub temp_prefix: String
}

impl Default for CompilerOptions {
    fn default() -> Self {
        Self {
            classify: ClassifyPolicy::default(),
            emit_order: EmitOrder::default(),
            register_prefix: String::from("r"),
            temp_prefix: String::from("$T")
        }
    }
}

impl CompilerOptions {
    pub fn builder() -> CompilerOptionsBuilder {
        CompilerOptionsBuilder::default()
    }
}

#[derive(Debug, Default)]
pub struct CompilerOptionsBuilder {
    classify: Option<ClassifyPolicy>,
    emit_order: Option<EmitOrder>,
    register_prefix: Option<String>,
    temp_prefix: Option<String>
}

impl CompilerOptionsBuilder {
    pub fn classify(mut self, policy: ClassifyPolicy) -> Self {
        self.classify = Some(policy);
        self
    }

    pub fn emit_order(mut self, order: EmitOrder) -> Self {
        self.emit_order = Some(order);
        self
    }

    pub fn register_prefix(mut self, prefix: &str) -> Self {
        self.register_prefix = Some(prefix.to_string());
        self
    }

    pub fn temp_prefix(mut self, prefix: &str) -> Self {
        self.temp_prefix = Some(prefix.to_string());
        self
    }

    pub fn build(self) -> CompilerOptions {
        let defaults = CompilerOptions::default();
        CompilerOptions {
            classify: self.classify.unwrap_or(defaults.classify),
            emit_order: self.emit_order.unwrap_or(defaults.emit_order),
            register_prefix: self.register_prefix.unwrap_or(defaults.register_prefix),
            temp_prefix: self.temp_prefix.unwrap_or(defaults.temp_prefix)
        }
    }
}
