use crate::util::*;

#[test]
fn new_vm_is_halted() {
    let chunk = compile("1");
    let mut vm = VM::new();
    assert_eq!(vm.state(), VMState::Halted);
    assert_eq!(vm.step(&chunk).unwrap_err().kind(), &RuntimeErrorKind::NotRunning);
}

#[test]
fn step_through_program() {
    let chunk = compile("(2 + 3) * 4");
    let mut vm = VM::new();
    vm.start(&chunk);
    assert_eq!(vm.ip(), 0);

    assert_eq!(vm.step(&chunk), Ok(None));
    assert_eq!(vm.ip(), 2);
    assert_eq!(vm.stack(), &[ Value::new(2.0) ]);

    assert_eq!(vm.step(&chunk), Ok(None));
    assert_eq!(vm.stack(), &[ Value::new(2.0), Value::new(3.0) ]);

    assert_eq!(vm.step(&chunk), Ok(None));
    assert_eq!(vm.ip(), 5);
    assert_eq!(vm.stack(), &[ Value::new(5.0) ]);

    assert_eq!(vm.step(&chunk), Ok(None));
    assert_eq!(vm.step(&chunk), Ok(None));
    assert_eq!(vm.stack(), &[ Value::new(20.0) ]);

    assert_eq!(vm.step(&chunk), Ok(Some(Value::new(20.0))));
    assert_eq!(vm.state(), VMState::Halted);
    assert!(vm.stack().is_empty());
}

#[test]
fn bounded_execution() {
    let code = literal_sum(100);
    let chunk = compile(&code);
    let mut vm = VM::new();
    vm.start(&chunk);
    let mut steps = 0;
    while steps < 10 && vm.step(&chunk).unwrap().is_none() {
        steps += 1;
    }
    assert_eq!(steps, 10);
    assert_eq!(vm.state(), VMState::Running);
    // restarting discards the previous run
    assert_eq!(vm.interpret(&chunk), Ok(Value::new(4950.0)));
}
