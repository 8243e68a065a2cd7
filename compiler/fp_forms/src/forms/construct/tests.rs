use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use fp_value::Value;
use pretty_assertions::assert_eq;

use super::*;
use crate::forms::constant;
use crate::forms::test_helpers::{int, ints, length, policies};

#[test]
fn yields_one_element_per_function_in_order() {
    for policy in policies() {
        let f = construct(
            [
                Func::new(length),
                constant(int(7)),
                Func::new(|x: &Value| Value::seq([x.clone(), x.clone()])),
            ],
            &policy,
        );
        let x = ints(&[1, 2, 3]);
        assert_eq!(
            f.call(&x),
            Value::seq([Value::Size(3), int(7), Value::pair(x.clone(), x.clone())]),
            "{policy:?}"
        );
    }
}

#[test]
fn empty_construct_is_empty_sequence() {
    for policy in policies() {
        let f = construct(Vec::<Func>::new(), &policy);
        assert_eq!(f.call(&int(1)), Value::empty());
    }
}

#[test]
fn bottom_argument_still_reaches_every_function() {
    let calls = Arc::new(AtomicUsize::new(0));
    let counting = {
        let calls = Arc::clone(&calls);
        Func::new(move |x: &Value| {
            calls.fetch_add(1, Ordering::SeqCst);
            x.clone()
        })
    };
    for policy in policies() {
        calls.store(0, Ordering::SeqCst);
        let f = construct([counting.clone(), counting.clone(), Func::new(length)], &policy);
        assert_eq!(
            f.call(&Value::Bottom),
            Value::seq([Value::Bottom, Value::Bottom, Value::Bottom])
        );
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }
}

#[test]
fn order_is_independent_of_completion_order() {
    // Earlier functions finish last.
    let slow = |n: u64| {
        Func::new(move |_: &Value| {
            std::thread::sleep(Duration::from_millis(40 - n * 10));
            Value::Size(usize::try_from(n).unwrap_or(0))
        })
    };
    let f = construct([slow(0), slow(1), slow(2), slow(3)], &policies()[2]);
    assert_eq!(
        f.call(&int(0)),
        Value::seq((0..4).map(Value::Size))
    );
}
