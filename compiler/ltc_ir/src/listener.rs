// SPDX-License-Identifier: MIT
// Copyright (c) 2023 Kagati Foundation

/// Callbacks a parser of the Little language drives, one per construct,
/// in depth-first left-to-right order.
///
/// Arguments are source text as the parser sees it. List arguments are
/// comma-separated.
pub trait LittleListener {
    fn enter_program(&mut self);

    fn exit_program(&mut self) {}

    /// `id_list`: identifiers to print; `newline` prints a line break.
    fn enter_write_stmt(&mut self, id_list: &str);

    fn enter_read_stmt(&mut self, id_list: &str);

    /// `var_type`: the declaration's type keyword (`INT` or `FLOAT`).
    fn enter_var_decl(&mut self, var_type: &str, id_list: &str);

    /// `text`: the whole declaration, e.g. `STRING msg := "hi";`.
    fn enter_string_decl(&mut self, text: &str);

    /// `text`: the assignment expression, e.g. `x := y + 3`.
    fn enter_assign_stmt(&mut self, text: &str);
}
