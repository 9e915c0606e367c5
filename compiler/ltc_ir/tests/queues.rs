#[cfg(test)]
mod tests_queues {
    use std::cell::RefCell;
    use std::rc::Rc;

    use ltc_ctx::builder::CompilerCtxBuilder;
    use ltc_ctx::sink::SharedBuffer;
    use ltc_ir::{IRBuilder, LittleListener, QueueKind};

    fn traverse(program: impl FnOnce(&mut IRBuilder)) -> (ltc_ir::IRModule, Vec<String>) {
        let buffer = SharedBuffer::default();
        let ctx = CompilerCtxBuilder::new().output(Box::new(buffer.clone())).build();
        let mut builder = IRBuilder::new(Rc::new(RefCell::new(ctx)));
        builder.enter_program();
        program(&mut builder);
        builder.exit_program();
        (builder.build(), buffer.lines())
    }

    #[test]
    fn test_queues_follow_traversal_order() {
        let (module, _) = traverse(|b| {
            b.enter_var_decl("INT", "a,b,c");
            b.enter_read_stmt("a,b");
            b.enter_assign_stmt("c := a * b");
            b.enter_assign_stmt("a := 2");
            b.enter_assign_stmt("b := c - a");
            b.enter_assign_stmt("c := 9");
            b.enter_assign_stmt("a := c / b");
            b.enter_write_stmt("a,newline,c");
        });

        assert_eq!(module.queue(QueueKind::Read), vec!["a", "b"]);
        assert_eq!(module.queue(QueueKind::Write), vec!["a", "newline", "c"]);
        assert_eq!(module.queue(QueueKind::Mul), vec!["a b"]);
        assert_eq!(module.queue(QueueKind::Sub), vec!["c a"]);
        assert_eq!(module.queue(QueueKind::Div), vec!["c b"]);
        assert!(module.queue(QueueKind::Add).is_empty());
        assert_eq!(module.queue(QueueKind::Constant), vec!["2", "9"]);
        assert_eq!(module.queue(QueueKind::Move), vec!["a", "c"]);
        assert_eq!(module.queue(QueueKind::Store), vec!["c", "a", "b", "c", "a"]);
    }

    #[test]
    fn test_one_final_store_per_assignment() {
        let (module, lines) = traverse(|b| {
            b.enter_var_decl("FLOAT", "x");
            b.enter_assign_stmt("x := 1.5");
            b.enter_assign_stmt("x := x / 0.5");
            b.enter_assign_stmt("x := x + 1");
            b.enter_assign_stmt("bogus");
        });

        let final_stores: Vec<&String> = lines.iter()
            .filter(|l| l.starts_with(";STOREF $T"))
            .collect();
        assert_eq!(final_stores, vec![";STOREF $T1 x", ";STOREF $T3 x", ";STOREF $T4 x"]);
        assert_eq!(module.temps, 4);
        assert_eq!(module.queue(QueueKind::Store).len(), 3);
    }

    #[test]
    fn test_temporaries_are_never_reused() {
        let (_, lines) = traverse(|b| {
            b.enter_assign_stmt("a := 1");
            b.enter_assign_stmt("b := 2");
        });

        assert_eq!(&lines[3..], &[
            ";STOREI 1 $T1", ";STOREI $T1 a",
            ";STOREI 2 $T2", ";STOREI $T2 b",
        ]);
    }
}
