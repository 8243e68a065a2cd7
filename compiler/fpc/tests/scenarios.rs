//! End-to-end scenarios: primitives and forms combined, under both policies.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

use fp_forms::{ExecPolicy, Forms, Func, PoolConfig, WorkerPool};
use fp_prims::{add, apndr, id, length, lift, lt, mul, select, trans};
use fp_value::{Num, Value};
use pretty_assertions::assert_eq;

fn int(n: i64) -> Value {
    Value::of(n)
}

fn ints(xs: &[i64]) -> Value {
    Value::seq(xs.iter().map(|&n| int(n)))
}

fn sym(s: &str) -> Value {
    Value::atom(s)
}

fn all_forms() -> Vec<Forms> {
    let four = WorkerPool::new(&PoolConfig::with_threads(4)).expect("pool builds");
    vec![Forms::sequential(), Forms::new(ExecPolicy::Parallel(four))]
}

#[test]
fn select_second_element() {
    let x = Value::seq([sym("A"), Value::seq([sym("B"), sym("C")])]);
    assert_eq!(select(2).call(&x), Value::seq([sym("B"), sym("C")]));
    assert_eq!(select(2).call(&Value::seq([sym("A")])), Value::Bottom);
}

#[test]
fn insert_sum() {
    for forms in all_forms() {
        let sum = forms.insert(add::<i64, Num>, Some(int(0)));
        assert_eq!(sum.call(&ints(&[1, 2, 3, 4])), int(10), "{forms:?}");
    }
}

#[test]
fn apply_to_all_products() {
    let pairs = Value::seq([ints(&[2, 3]), ints(&[4, 5])]);
    for forms in all_forms() {
        assert_eq!(forms.apply_to_all(mul::<i64, Num>).call(&pairs), ints(&[6, 20]));
    }
}

#[test]
fn transpose() {
    let m = Value::seq([ints(&[1, 2, 3]), ints(&[4, 5, 6])]);
    assert_eq!(
        trans(&m),
        Value::seq([ints(&[1, 4]), ints(&[2, 5]), ints(&[3, 6])])
    );
}

#[test]
fn while_appends_until_length_three() {
    for forms in all_forms() {
        let shorter_than_three = Func::new(lt::<usize, Num>)
            * forms.construct([Func::new(length), forms.constant(Value::Size(3))]);
        let append_zero = Func::new(apndr) * forms.construct([Func::new(id), forms.constant(int(0))]);
        let grow = forms.while_form(shorter_than_three, append_zero);
        assert_eq!(grow.call(&Value::empty()), ints(&[0, 0, 0]));
        assert_eq!(grow.call(&ints(&[7, 7, 7, 7])), ints(&[7, 7, 7, 7]));
    }
}

#[test]
fn condition_on_parity() {
    let is_even = lift::<i64, bool, Num, _>("is_even", |n| n % 2 == 0);
    for forms in all_forms() {
        let parity = forms.condition(
            is_even.clone(),
            forms.constant(sym("E")),
            forms.constant(sym("O")),
        );
        assert_eq!(parity.call(&int(4)), sym("E"));
        assert_eq!(parity.call(&int(5)), sym("O"));
        assert_eq!(parity.call(&Value::Bottom), Value::Bottom);
    }
}

#[test]
fn demo_programs_agree_across_policies() {
    for demo in [fpc::Demo::MatMul, fpc::Demo::Evens, fpc::Demo::Sort] {
        let x = demo.input(6, 1);
        let results: Vec<Value> = all_forms()
            .iter()
            .map(|forms| demo.program(forms).call(&x))
            .collect();
        assert!(!results[0].is_bottom(), "{demo}");
        assert_eq!(results[0], results[1], "{demo}");
    }
}
