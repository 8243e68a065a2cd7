use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use fp_value::Value;
use pretty_assertions::assert_eq;

use super::*;
use crate::forms::test_helpers::{int, ints, is_even};

fn shorter_than(n: usize) -> Func {
    Func::new(move |x: &Value| match x.as_seq() {
        Some(s) => Value::Bool(s.len() < n),
        None => Value::Bottom,
    })
}

fn append_zero(x: &Value) -> Value {
    x.as_seq()
        .map_or(Value::Bottom, |s| Value::Seq(s.push_back(int(0))))
}

#[test]
fn grows_until_predicate_fails() {
    let f = while_form(shorter_than(3), append_zero);
    assert_eq!(f.call(&Value::empty()), ints(&[0, 0, 0]));
    assert_eq!(f.call(&ints(&[9, 9])), ints(&[9, 9, 0]));
}

#[test]
fn false_guard_returns_input_without_stepping() {
    let steps = Arc::new(AtomicUsize::new(0));
    let step = {
        let steps = Arc::clone(&steps);
        Func::new(move |x: &Value| {
            steps.fetch_add(1, Ordering::SeqCst);
            x.clone()
        })
    };
    let f = while_form(shorter_than(0), step);
    let x = ints(&[1, 2]);
    assert_eq!(f.call(&x), x);
    assert_eq!(steps.load(Ordering::SeqCst), 0);
}

#[test]
fn bottom_or_non_boolean_predicate() {
    let f = while_form(shorter_than(3), append_zero);
    assert_eq!(f.call(&Value::Bottom), Value::Bottom);
    assert_eq!(f.call(&int(1)), Value::Bottom);

    let sizes = while_form(|x: &Value| x.clone(), append_zero);
    assert_eq!(sizes.call(&Value::Size(1)), Value::Bottom);
}

#[test]
fn bottom_step_halts() {
    let f = while_form(|_: &Value| Value::Bool(true), |_: &Value| Value::Bottom);
    assert_eq!(f.call(&int(0)), Value::Bottom);
}

#[test]
fn predicate_turning_bottom_mid_loop() {
    // 1 -> 2 -> "two": `is_even` is bottom on text.
    let step = |x: &Value| match x.cast::<i64>() {
        Ok(1) => int(2),
        Ok(_) => Value::atom("two"),
        Err(_) => Value::Bottom,
    };
    let p = |x: &Value| {
        let even = is_even(x);
        if even.is_bottom() {
            even
        } else {
            Value::Bool(true)
        }
    };
    assert_eq!(while_form(p, step).call(&int(1)), Value::Bottom);
}

#[test]
fn long_loops_run_in_constant_stack() {
    let below = |x: &Value| x.cast::<i64>().map_or(Value::Bottom, |n| Value::Bool(n < 1_000_000));
    let inc = |x: &Value| x.cast::<i64>().map_or(Value::Bottom, |n| Value::of(n + 1));
    assert_eq!(while_form(below, inc).call(&int(0)), int(1_000_000));
}
