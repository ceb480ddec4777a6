//! Dispatch tests for individual node kinds.

use super::*;
use crate::{buffer_handler, EvalError};
use pretty_assertions::assert_eq;
use quill_ir::Node;

fn run(interner: &StringInterner, arena: &NodeArena, root: NodeId) -> EvalResult {
    InterpreterBuilder::new(interner, arena)
        .print_handler(buffer_handler())
        .build()
        .evaluate(root)
}

#[test]
fn literal_yields_value() {
    let interner = StringInterner::new();
    let mut arena = NodeArena::new();
    let root = arena.literal(-17);
    assert_eq!(run(&interner, &arena, root), Ok(-17));
}

#[test]
fn bare_name_yields_zero() {
    let interner = StringInterner::new();
    let x = interner.intern("x");
    let mut arena = NodeArena::new();
    let root = arena.name(x);

    let mut interp = Interpreter::new(&interner, &arena);
    assert_eq!(interp.evaluate(root), Ok(0));
    // A label is not a variable reference.
    assert_eq!(interp.env.lookup(x), None);
}

#[test]
fn arithmetic_wraps() {
    let interner = StringInterner::new();
    let mut arena = NodeArena::new();
    let max = arena.literal(i64::MAX);
    let one = arena.literal(1);
    let root = arena.plus(max, one);
    assert_eq!(run(&interner, &arena, root), Ok(i64::MIN));
}

#[test]
fn arithmetic_evaluates_left_first() {
    let interner = StringInterner::new();
    let x = interner.intern("x");
    let mut arena = NodeArena::new();
    // (x = 3) - x: left assigns before right reads.
    let three = arena.literal(3);
    let assign = arena.assign(x, three);
    let read = arena.variable(x);
    let root = arena.minus(assign, read);
    assert_eq!(run(&interner, &arena, root), Ok(0));
}

#[test]
fn logic_coerces_nonzero() {
    let interner = StringInterner::new();
    let mut arena = NodeArena::new();
    let five = arena.literal(5);
    let neg = arena.literal(-2);
    let zero = arena.literal(0);
    let and = arena.and(five, neg);
    let xor = arena.xor(five, neg);
    let or = arena.or(zero, zero);

    assert_eq!(run(&interner, &arena, and), Ok(1));
    assert_eq!(run(&interner, &arena, xor), Ok(0));
    assert_eq!(run(&interner, &arena, or), Ok(0));
}

#[test]
fn not_maps_zero_to_one() {
    let interner = StringInterner::new();
    let mut arena = NodeArena::new();
    let zero = arena.literal(0);
    let seven = arena.literal(7);
    let not_zero = arena.not(zero);
    let not_seven = arena.not(seven);
    assert_eq!(run(&interner, &arena, not_zero), Ok(1));
    assert_eq!(run(&interner, &arena, not_seven), Ok(0));
}

#[test]
fn if_true_yields_body() {
    let interner = StringInterner::new();
    let mut arena = NodeArena::new();
    let cond = arena.literal(2);
    let body = arena.literal(40);
    let root = arena.if_then(cond, body);
    assert_eq!(run(&interner, &arena, root), Ok(40));
}

#[test]
fn sequence_yields_first() {
    let interner = StringInterner::new();
    let mut arena = NodeArena::new();
    let a = arena.literal(1);
    let b = arena.literal(2);
    let root = arena.seq(a, b);
    assert_eq!(run(&interner, &arena, root), Ok(1));
}

#[test]
fn tuple_yields_head_only() {
    let interner = StringInterner::new();
    let x = interner.intern("x");
    let mut arena = NodeArena::new();
    let head = arena.literal(8);
    let nine = arena.literal(9);
    let tail_effect = arena.assign(x, nine);
    let Some(list) = arena.list(&[head, tail_effect]) else {
        panic!("non-empty list");
    };

    let mut interp = Interpreter::new(&interner, &arena);
    assert_eq!(interp.evaluate(list), Ok(8));
    assert_eq!(interp.env.lookup(x), None);
}

#[test]
fn block_without_return_yields_zero() {
    let interner = StringInterner::new();
    let mut arena = NodeArena::new();
    let inner = arena.literal(3);
    let root = arena.block(inner);
    assert_eq!(run(&interner, &arena, root), Ok(0));
}

#[test]
fn return_outside_block_writes_root_slot() {
    let interner = StringInterner::new();
    let mut arena = NodeArena::new();
    let value = arena.literal(11);
    let root = arena.ret(value);

    let mut interp = Interpreter::new(&interner, &arena);
    assert_eq!(interp.evaluate(root), Ok(11));
    assert_eq!(interp.env.return_value(), Ok(11));
}

#[test]
fn last_return_wins() {
    let interner = StringInterner::new();
    let mut arena = NodeArena::new();
    let one = arena.literal(1);
    let two = arena.literal(2);
    let r1 = arena.ret(one);
    let r2 = arena.ret(two);
    let body = arena.seq(r1, r2);
    let root = arena.block(body);
    assert_eq!(run(&interner, &arena, root), Ok(2));
}

#[test]
fn log_writes_decimal_line() {
    let interner = StringInterner::new();
    let mut arena = NodeArena::new();
    let a = arena.literal(-4);
    let b = arena.literal(12);
    let log_a = arena.log(a);
    let log_b = arena.log(b);
    let root = arena.seq(log_a, log_b);

    let output = buffer_handler();
    let mut interp = InterpreterBuilder::new(&interner, &arena)
        .print_handler(output.clone())
        .build();
    assert_eq!(interp.evaluate(root), Ok(-4));
    assert_eq!(output.get_output(), "-4\n12\n");
}

#[test]
fn function_def_yields_zero_and_registers() {
    let interner = StringInterner::new();
    let f = interner.intern("f");
    let mut arena = NodeArena::new();
    let body = arena.literal(1);
    let root = arena.function(f, &[], body);

    let mut interp = Interpreter::new(&interner, &arena);
    assert_eq!(interp.evaluate(root), Ok(0));
    assert!(interp.env.resolve_function(f).is_some());
}

#[test]
fn invalid_parameter_is_rejected_before_call_frame() {
    let interner = StringInterner::new();
    let f = interner.intern("f");
    let mut arena = NodeArena::new();
    let bogus = arena.literal(1);
    let params = arena.list(&[bogus]);
    let body = arena.literal(0);
    let def = arena.alloc(Node::FunctionDef {
        name: f,
        params,
        body,
    });
    let arg = arena.literal(2);
    let call = arena.call(f, &[arg]);
    let root = arena.seq(def, call);

    let mut interp = Interpreter::new(&interner, &arena);
    assert_eq!(
        interp.evaluate(root),
        Err(EvalError::InvalidParameter {
            function: "f".to_owned(),
            found: "literal",
        })
    );
    assert_eq!(interp.env.depth(), 1);
}

#[test]
fn variable_parameters_are_accepted() {
    let interner = StringInterner::new();
    let id = interner.intern("id");
    let v = interner.intern("v");
    let mut arena = NodeArena::new();
    let param = arena.variable(v);
    let params = arena.list(&[param]);
    let body = arena.variable(v);
    let def = arena.alloc(Node::FunctionDef {
        name: id,
        params,
        body,
    });
    let arg = arena.literal(31);
    let call = arena.call(id, &[arg]);
    let root = arena.seq(def, call);

    // Sequence yields the definition's 0; inspect the call separately.
    let mut interp = Interpreter::new(&interner, &arena);
    assert_eq!(interp.evaluate(root), Ok(0));
    assert_eq!(interp.eval(call), Ok(31));
}

#[test]
fn evaluate_shorthand_uses_fresh_environment() {
    let interner = StringInterner::new();
    let mut arena = NodeArena::new();
    let a = arena.literal(6);
    let b = arena.literal(7);
    let root = arena.mult(a, b);
    assert_eq!(evaluate(&arena, &interner, root), Ok(42));
}

#[test]
fn builder_keeps_supplied_environment() {
    let interner = StringInterner::new();
    let x = interner.intern("x");
    let mut env = Environment::new();
    assert_eq!(env.bind_local(x, 5), Ok(()));

    let mut arena = NodeArena::new();
    let root = arena.variable(x);
    let mut interp = InterpreterBuilder::new(&interner, &arena)
        .env(env)
        .mode(EvalMode::FrameLocal)
        .build();
    assert_eq!(interp.mode(), EvalMode::FrameLocal);
    assert_eq!(interp.evaluate(root), Ok(5));
}
