use std::time::Duration;

use fp_value::{Num, Value};
use pretty_assertions::assert_eq;

use super::*;
use crate::forms::test_helpers::{int, ints, is_even, length, mul, policies};

#[test]
fn maps_pairs_in_order() {
    let pairs = Value::seq([ints(&[2, 3]), ints(&[4, 5])]);
    for policy in policies() {
        let f = apply_to_all(mul, &policy);
        assert_eq!(f.call(&pairs), ints(&[6, 20]), "{policy:?}");
    }
}

#[test]
fn non_sequence_is_bottom() {
    for policy in policies() {
        let f = apply_to_all(length, &policy);
        assert_eq!(f.call(&int(1)), Value::Bottom);
        assert_eq!(f.call(&Value::Bottom), Value::Bottom);
        assert_eq!(f.call(&Value::empty()), Value::empty());
    }
}

#[test]
fn element_failures_stay_local() {
    let mixed = Value::seq([int(2), Value::atom("x"), Value::Bottom, int(3)]);
    for policy in policies() {
        let f = apply_to_all(is_even, &policy);
        assert_eq!(
            f.call(&mixed),
            Value::seq([Value::Bool(true), Value::Bottom, Value::Bottom, Value::Bool(false)])
        );
    }
}

#[test]
fn guard_rejects_before_calling() {
    // `wrap` is total, so bottoms below come from the guard alone.
    let wrap = |x: &Value| Value::seq([x.clone()]);
    let mixed = Value::seq([int(1), ints(&[2]), Value::Bool(true)]);
    for policy in policies() {
        let f = apply_to_all_guarded(wrap, Guard::<Num>::of::<i64>(), &policy);
        assert_eq!(
            f.call(&mixed),
            Value::seq([Value::seq([int(1)]), Value::Bottom, Value::Bottom])
        );
        let f = apply_to_all_guarded(wrap, Guard::Sequence, &policy);
        assert_eq!(
            f.call(&mixed),
            Value::seq([Value::Bottom, Value::seq([ints(&[2])]), Value::Bottom])
        );
    }
}

#[test]
fn parallel_keeps_input_order() {
    let sleepy = |x: &Value| {
        let n = x.cast::<i64>().unwrap_or(0);
        std::thread::sleep(Duration::from_millis(u64::try_from(20 - n).unwrap_or(0)));
        Value::of(n * 10)
    };
    let f = apply_to_all(sleepy, &policies()[2]);
    assert_eq!(f.call(&ints(&[0, 5, 10, 15])), ints(&[0, 50, 100, 150]));
}

#[test]
fn nested_maps() {
    let matrix = Value::seq([ints(&[1, 2]), ints(&[3]), Value::empty()]);
    for policy in policies() {
        let inner = apply_to_all(is_even, &policy);
        let f = apply_to_all(inner, &policy);
        assert_eq!(
            f.call(&matrix),
            Value::seq([
                Value::seq([Value::Bool(false), Value::Bool(true)]),
                Value::seq([Value::Bool(false)]),
                Value::empty(),
            ])
        );
    }
}
