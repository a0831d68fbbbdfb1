use crate::util::*;
use clear::parser::ParseErrorKind;

#[test]
fn single_literal() {
    assert_eq!(eval("3.0"), 3.0);
    assert_eq!(eval("42"), 42.0);
    assert_eq!(eval("0.5"), 0.5);
}

#[test]
fn grouping() {
    assert_eq!(eval("(2 + 3) * 4"), 20.0);
    assert_eq!(eval("2 + 3 * 4"), 14.0);
    assert_eq!(eval("2 * (3 + 4) * 5"), 70.0);
    assert_eq!(eval("((((1))))"), 1.0);
}

#[test]
fn arithmetic() {
    assert_eq!(eval("5 - 2"), 3.0);
    assert_eq!(eval("6 / 4"), 1.5);
    assert_eq!(eval("2.5 * 4"), 10.0);
    assert_eq!(eval("1.5e2 + 2E1"), 170.0);
    assert_eq!(eval("25e-2"), 0.25);
}

#[test]
fn left_associativity() {
    assert_eq!(eval("10 - 4 - 3"), 3.0);
    assert_eq!(eval("64 / 4 / 2"), 8.0);
    assert_eq!(eval("8 / 2 * 4"), 16.0);
}

#[test]
fn negation() {
    assert_eq!(eval("-3"), -3.0);
    assert_eq!(eval("--3"), 3.0);
    assert_eq!(eval("-(2 + 3) * 2"), -10.0);
    assert_eq!(eval("4 - -2"), 6.0);
}

#[test]
fn ieee_semantics() {
    assert_eq!(eval("1 / 0"), f64::INFINITY);
    assert_eq!(eval("-1 / 0"), f64::NEG_INFINITY);
    assert!(eval("0 / 0").is_nan());
    assert_eq!(eval("0.1 + 0.2"), 0.1 + 0.2);
}

#[test]
fn last_statement_is_result() {
    assert_eq!(eval("1; 2; 3"), 3.0);
    assert_eq!(eval("1 + 1\n2 * 5"), 10.0);
    assert_eq!(eval("
        // leading comment
        7 * 6; /* trailing */
    "), 42.0);
}

#[test]
fn statements_leave_stack_clean() {
    let chunk = compile("1; 2; 3; 4");
    let mut vm = VM::new();
    vm.start(&chunk);
    let mut max_depth = 0;
    loop {
        max_depth = max_depth.max(vm.stack().len());
        if vm.step(&chunk).unwrap().is_some() {
            break;
        }
    }
    assert_eq!(max_depth, 1);
    assert!(vm.stack().is_empty());
}

#[test]
fn hand_written_chunk() {
    let mut chunk = Chunk::new();
    let a = chunk.add_constant(Value::new(5.0)) as u8;
    let b = chunk.add_constant(Value::new(2.0)) as u8;
    chunk.write_constant(a, 1);
    chunk.write_constant(b, 1);
    chunk.write_subtract(1);
    chunk.write_return(1);
    assert_eq!(VM::new().interpret(&chunk), Ok(Value::new(3.0)));
}

#[test]
fn vm_is_reusable() {
    let first = compile("1 + 1");
    let second = compile("2 * 21");
    let mut vm = VM::new();
    assert_eq!(vm.interpret(&first), Ok(Value::new(2.0)));
    assert_eq!(vm.interpret(&second), Ok(Value::new(42.0)));
    assert_eq!(vm.interpret(&first), Ok(Value::new(2.0)));
    assert_eq!(vm.state(), VMState::Halted);
}

#[test]
fn deep_nesting() {
    let depth = MAX_NESTING;
    let code = format!("{}1{}", "(".repeat(depth), ")".repeat(depth));
    assert_eq!(eval(&code), 1.0);
    let code = format!("{}1", "-".repeat(depth));
    assert_eq!(eval(&code), 1.0);
}

#[test]
fn excessive_nesting_is_an_error() {
    for code in [ format!("{}1", "-".repeat(200_000)), format!("{}1{}", "(".repeat(10_000), ")".repeat(10_000)) ] {
        match run(&code) {
            Err(Error::ParseError(err)) => assert_eq!(err.kind(), &ParseErrorKind::NestingTooDeep),
            other => panic!("Expected nesting error, got {:?}", other),
        }
    }
}

#[test]
fn independent_vms_in_parallel() {
    let handles: Vec<_> = (0..4).map(|i| std::thread::spawn(move || {
        let chunk = compile(&format!("{} * 10 + 1", i));
        VM::new().interpret(&chunk).map(|value| value.as_f64())
    })).collect();
    for (i, handle) in handles.into_iter().enumerate() {
        assert_eq!(handle.join().unwrap(), Ok(i as f64 * 10.0 + 1.0));
    }
}
