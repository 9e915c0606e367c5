// SPDX-License-Identifier: MIT
// Copyright (c) 2023 Kagati Foundation

use ltc_symbol::{SymTable, Symbol, VarType};

use crate::scope::*;

/// Stack of scopes. The root (global) scope is pushed on creation and
/// can never be popped.
#[derive(Debug, Clone)]
pub struct ScopeStack {
    stack: Vec<Scope>,
    next_id: usize
}

impl Default for ScopeStack {
    fn default() -> Self {
        Self::new()
    }
}

impl ScopeStack {
    pub fn new() -> Self {
        Self {
            stack: vec![Scope::new(ROOT_SCOPE_ID, None)],
            next_id: 1 // since zero(0) is for the root scope
        }
    }

    /// Creates a new innermost scope.
    ///
    /// Returns the ID of newly created scope.
    pub fn push_scope(&mut self) -> ScopeId {
        let id = ScopeId(self.next_id);
        self.next_id += 1;
        let parent = self.current().id;
        self.stack.push(Scope::new(id, Some(parent)));
        tracing::debug!(scope = id.0, parent = parent.0, "entered scope");
        id
    }

    /// Goes back to the enclosing scope.
    ///
    /// Returns the popped scope, or `None` when only the root is left.
    pub fn pop_scope(&mut self) -> Option<Scope> {
        if self.stack.len() <= 1 {
            tracing::warn!("refusing to pop the root scope");
            return None;
        }
        let popped = self.stack.pop();
        if let Some(scope) = &popped {
            tracing::debug!(scope = scope.id.0, "left scope");
        }
        popped
    }

    pub fn declare(&mut self, name: &str, ty: VarType) -> Option<Symbol> {
        self.current_mut().add_sym(Symbol::variable(name, ty))
    }

    pub fn declare_string(&mut self, name: &str, literal: &str) -> Option<Symbol> {
        self.current_mut().add_sym(Symbol::string(name, literal))
    }

    /// Type of `name` in the innermost scope. Outer scopes are not searched.
    pub fn lookup_type(&self, name: &str) -> Option<VarType> {
        self.current().lookup_type(name)
    }

    pub fn lookup(&self, name: &str) -> Option<&Symbol> {
        self.current().get_sym(name)
    }

    pub fn current(&self) -> &Scope {
        // the root scope is never popped
        &self.stack[self.stack.len() - 1]
    }

    fn current_mut(&mut self) -> &mut Scope {
        let top = self.stack.len() - 1;
        &mut self.stack[top]
    }

    pub fn root(&self) -> &SymTable {
        self.stack[0].symbols()
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }
}
