// SPDX-License-Identifier: MIT
// Copyright (c) 2023 Kagati Foundation

use ltc_symbol::{SymTable, Symbol, VarType};

/// Scope ID
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq)]
pub struct ScopeId(pub usize);

pub const ROOT_SCOPE_ID: ScopeId = ScopeId(0);

#[derive(Debug, Clone)]
pub struct Scope {
    pub(crate) symt: SymTable,
    pub(crate) parent: Option<ScopeId>,
    pub id: ScopeId
}

impl Scope {
    pub fn new(id: ScopeId, parent: Option<ScopeId>) -> Self {
        Self {
            symt: SymTable::new(),
            parent,
            id
        }
    }

    pub fn add_sym(&mut self, sym: Symbol) -> Option<Symbol> {
        self.symt.declare(sym)
    }

    pub fn get_sym(&self, name: &str) -> Option<&Symbol> {
        self.symt.get(name)
    }

    pub fn lookup_type(&self, name: &str) -> Option<VarType> {
        self.symt.lookup_type(name)
    }

    pub fn parent(&self) -> Option<ScopeId> {
        self.parent
    }

    pub fn symbols(&self) -> &SymTable {
        &self.symt
    }
}
