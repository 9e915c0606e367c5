// SPDX-License-Identifier: MIT
// Copyright (c) 2023 Kagati Foundation

use std::collections::HashMap;
use std::fmt;

use lazy_static::lazy_static;

/// Numeric type a variable can be declared with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum VarType {
    /// Undeclared names fall back to this.
    #[default]
    Int,
    Float,
}

lazy_static! {
    static ref TYPE_KEYWORDS: HashMap<&'static str, VarType> = {
        let mut keywords = HashMap::new();
        keywords.insert("INT", VarType::Int);
        keywords.insert("FLOAT", VarType::Float);
        keywords
    };
}

impl VarType {
    /// Maps a declaration's type keyword (`INT`, `FLOAT`) onto a type.
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        TYPE_KEYWORDS.get(keyword.trim()).copied()
    }

    /// Suffix used by typed IR opcodes (`ADDI`, `ADDF`, ...).
    pub fn suffix(&self) -> char {
        match self {
            Self::Int => 'I',
            Self::Float => 'F',
        }
    }
}

impl fmt::Display for VarType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int => write!(f, "INT"),
            Self::Float => write!(f, "FLOAT"),
        }
    }
}

/// What a name in the symbol table stands for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SymbolKind {
    Variable(VarType),

    /// String constant. The literal keeps its surrounding quotes.
    Str {
        literal: String
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Symbol {
    pub name: String,
    pub kind: SymbolKind,
}

impl Symbol {
    pub fn variable(name: &str, ty: VarType) -> Self {
        Self {
            name: name.to_string(),
            kind: SymbolKind::Variable(ty),
        }
    }

    pub fn string(name: &str, literal: &str) -> Self {
        Self {
            name: name.to_string(),
            kind: SymbolKind::Str { literal: literal.to_string() },
        }
    }

    /// Declared numeric type; string constants have none.
    pub fn var_type(&self) -> Option<VarType> {
        match &self.kind {
            SymbolKind::Variable(ty) => Some(*ty),
            SymbolKind::Str { .. } => None,
        }
    }

    pub fn is_string(&self) -> bool {
        matches!(self.kind, SymbolKind::Str { .. })
    }

    /// String literal with every double quote removed.
    pub fn unquoted_literal(&self) -> Option<String> {
        match &self.kind {
            SymbolKind::Str { literal } => Some(literal.replace('"', "")),
            SymbolKind::Variable(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_keywords() {
        assert_eq!(VarType::from_keyword("INT"), Some(VarType::Int));
        assert_eq!(VarType::from_keyword(" FLOAT "), Some(VarType::Float));
        assert_eq!(VarType::from_keyword("float"), None);
        assert_eq!(VarType::from_keyword("STRING"), None);
    }

    #[test]
    fn test_unquoted_literal() {
        let sym = Symbol::string("greeting", "\"hello world\"");
        assert_eq!(sym.unquoted_literal().as_deref(), Some("hello world"));
        assert_eq!(sym.var_type(), None);
        assert!(Symbol::variable("x", VarType::Int).unquoted_literal().is_none());
    }
}
