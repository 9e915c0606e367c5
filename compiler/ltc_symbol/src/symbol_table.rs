// SPDX-License-Identifier: MIT
// Copyright (c) 2023 Kagati Foundation

use indexmap::IndexMap;

use crate::{Symbol, VarType};

/// Symbols of a single scope, kept in first-declaration order.
#[derive(Debug, Default, Clone)]
pub struct SymTable {
    symbols: IndexMap<String, Symbol>,
}

impl SymTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `sym`, replacing any earlier entry with the same name.
    ///
    /// Returns the replaced symbol, if there was one.
    pub fn declare(&mut self, sym: Symbol) -> Option<Symbol> {
        self.symbols.insert(sym.name.clone(), sym)
    }

    pub fn get(&self, name: &str) -> Option<&Symbol> {
        self.symbols.get(name)
    }

    pub fn lookup_type(&self, name: &str) -> Option<VarType> {
        self.get(name).and_then(Symbol::var_type)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.symbols.contains_key(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Symbol> {
        self.symbols.values()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}
