// SPDX-License-Identifier: MIT
// Copyright (c) 2023 Kagati Foundation

use ltc_ir::LittleListener;

/// A parse event for one syntactic construct, carrying its source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Construct {
    VarDecl {
        var_type: String,
        id_list: String
    },

    StringDecl(String),

    Assign(String),

    Read(String),

    Write(String)
}

impl Construct {
    pub fn var_decl(var_type: &str, id_list: &str) -> Self {
        Self::VarDecl {
            var_type: var_type.to_string(),
            id_list: id_list.to_string()
        }
    }

    pub fn string_decl(text: &str) -> Self {
        Self::StringDecl(text.to_string())
    }

    pub fn assign(text: &str) -> Self {
        Self::Assign(text.to_string())
    }

    pub fn read(id_list: &str) -> Self {
        Self::Read(id_list.to_string())
    }

    pub fn write(id_list: &str) -> Self {
        Self::Write(id_list.to_string())
    }

    /// Invokes the listener callback matching this construct.
    pub fn visit(&self, listener: &mut dyn LittleListener) {
        match self {
            Self::VarDecl { var_type, id_list } => listener.enter_var_decl(var_type, id_list),
            Self::StringDecl(text) => listener.enter_string_decl(text),
            Self::Assign(text) => listener.enter_assign_stmt(text),
            Self::Read(id_list) => listener.enter_read_stmt(id_list),
            Self::Write(id_list) => listener.enter_write_stmt(id_list)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Recorder {
        calls: Vec<String>
    }

    impl LittleListener for Recorder {
        fn enter_program(&mut self) {
            self.calls.push("program".into());
        }

        fn enter_write_stmt(&mut self, id_list: &str) {
            self.calls.push(format!("write {id_list}"));
        }

        fn enter_read_stmt(&mut self, id_list: &str) {
            self.calls.push(format!("read {id_list}"));
        }

        fn enter_var_decl(&mut self, var_type: &str, id_list: &str) {
            self.calls.push(format!("var {var_type} {id_list}"));
        }

        fn enter_string_decl(&mut self, text: &str) {
            self.calls.push(format!("str {text}"));
        }

        fn enter_assign_stmt(&mut self, text: &str) {
            self.calls.push(format!("assign {text}"));
        }
    }

    #[test]
    fn test_visit_dispatches_to_matching_callback() {
        let mut rec = Recorder::default();
        let constructs = [
            Construct::var_decl("INT", "a,b"),
            Construct::string_decl("STRING s := \"x\";"),
            Construct::assign("a := 1"),
            Construct::read("b"),
            Construct::write("a,newline"),
        ];
        for c in &constructs {
            c.visit(&mut rec);
        }
        assert_eq!(rec.calls, vec![
            "var INT a,b",
            "str STRING s := \"x\";",
            "assign a := 1",
            "read b",
            "write a,newline",
        ]);
    }
}
