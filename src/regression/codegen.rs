use crate::codegen::Instruction::{self, *};
use crate::ops::Cmp;
use crate::parser;

fn code(program: &str) -> Vec<Instruction> {
    parser::compile(program)
        .unwrap_or_else(|e| panic!("{}", e))
        .instructions()
        .to_vec()
}

fn variables(program: &str) -> Vec<String> {
    parser::compile(program)
        .unwrap_or_else(|e| panic!("{}", e))
        .variables()
        .map(|(_, name)| name.clone())
        .collect()
}

#[test]
fn assignment_and_write() {
    assert_eq!(
        code("BEGIN x := 2 + 3 * 4; WRITE(x) END"),
        vec![
            Push(2),
            Push(3),
            Push(4),
            Mult,
            Add,
            Store(0),
            Load(0),
            Print,
            Stop
        ]
    );
}

#[test]
fn negative_literal_and_read() {
    assert_eq!(
        code("begin x := -5; y := read end"),
        vec![Push(5), Invert, Store(0), Input, Store(1), Stop]
    );
}

#[test]
fn if_else() {
    assert_eq!(
        code("begin if a < 1 then write(1) else write(2) fi end"),
        vec![
            Load(0),
            Push(1),
            Compare(Cmp::Lt),
            JumpNo(7),
            Push(1),
            Print,
            Jump(9),
            Push(2),
            Print,
            Stop
        ]
    );
}

#[test]
fn if_without_else() {
    assert_eq!(
        code("begin if a = 0 then write(a) fi end"),
        vec![
            Load(0),
            Push(0),
            Compare(Cmp::Eq),
            JumpNo(6),
            Load(0),
            Print,
            Stop
        ]
    );
}

#[test]
fn while_loop() {
    assert_eq!(
        code("begin while i < 3 do i := i + 1 od end"),
        vec![
            Load(0),
            Push(3),
            Compare(Cmp::Lt),
            JumpNo(9),
            Load(0),
            Push(1),
            Add,
            Store(0),
            Jump(0),
            Stop
        ]
    );
}

#[test]
fn counted_loop() {
    let program = "begin\nloop\nwrite(5)\nendloop\nend";

    assert_eq!(
        code(program),
        vec![
            Push(2),
            Print,
            Input,
            Store(0),
            Load(0),
            Push(0),
            Compare(Cmp::Le),
            JumpYes(15),
            Push(5),
            Print,
            Load(0),
            Push(1),
            Sub,
            Store(0),
            Jump(4),
            Stop
        ]
    );
    assert_eq!(variables(program), vec!["2:loop-count"]);
}

#[test]
fn switch() {
    let program = "begin switch x case 1: write(1) break; default: write(0) endswitch end";

    assert_eq!(
        code(program),
        vec![
            Load(0),
            Store(1),
            Push(0),
            Store(2),
            Push(1),
            Load(1),
            Compare(Cmp::Eq),
            Store(3),
            Load(3),
            JumpNo(15),
            Push(1),
            Print,
            Push(1),
            Store(2),
            Jump(19),
            Load(2),
            JumpYes(19),
            Push(0),
            Print,
            Stop
        ]
    );
    assert_eq!(
        variables(program),
        vec!["x", "1:switch-value", "2:switch-matched", "7:case-result"]
    );
}

#[test]
fn every_case_leaves_past_endswitch() {
    let instructions = code(
        "begin switch x
            case 1: write(1) break;
            case 2: write(2) break;
            case 3: write(3) break;
            default: write(0)
        endswitch end",
    );

    let end = instructions.len() - 1;
    assert_eq!(instructions[end], Stop);

    let exits = instructions
        .iter()
        .filter(|i| **i == Jump(end))
        .count();
    assert_eq!(exits, 3);
    assert!(!instructions.contains(&Nop));
}
