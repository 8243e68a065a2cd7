use fp_value::Value;
use pretty_assertions::assert_eq;

use super::*;

fn sym(s: &str) -> Value {
    Value::atom(s)
}

fn syms(xs: &[&str]) -> Value {
    Value::seq(xs.iter().map(|s| sym(s)))
}

#[test]
fn select_is_one_based() {
    let x = Value::seq([sym("A"), syms(&["B", "C"])]);
    assert_eq!(select(2).call(&x), syms(&["B", "C"]));
    assert_eq!(select(1).call(&x), sym("A"));
    assert_eq!(select(2).call(&Value::seq([sym("A")])), Value::Bottom);
    assert_eq!(select(0).call(&x), Value::Bottom);
}

#[test]
fn select_needs_a_sequence() {
    assert_eq!(select::<fp_value::Num>(1).call(&sym("A")), Value::Bottom);
    assert_eq!(select::<fp_value::Num>(1).call(&Value::Bottom), Value::Bottom);
}

#[test]
fn rselect_counts_from_the_right() {
    let x = syms(&["A", "B", "C"]);
    assert_eq!(rselect(1).call(&x), sym("C"));
    assert_eq!(rselect(3).call(&x), sym("A"));
    assert_eq!(rselect(4).call(&x), Value::Bottom);
    assert_eq!(rselect(0).call(&x), Value::Bottom);
}

#[test]
fn tails() {
    let x = syms(&["A", "B", "C"]);
    assert_eq!(tail(&x), syms(&["B", "C"]));
    assert_eq!(rtail(&x), syms(&["A", "B"]));
    assert_eq!(tail(&syms(&["A"])), Value::empty());
    assert_eq!(rtail(&syms(&["A"])), Value::empty());
    assert_eq!(tail(&Value::<fp_value::Num>::empty()), Value::Bottom);
    assert_eq!(rtail(&Value::<fp_value::Num>::empty()), Value::Bottom);
    assert_eq!(tail(&sym("A")), Value::Bottom);
}

#[test]
fn id_returns_its_argument() {
    assert_eq!(id(&sym("A")), sym("A"));
    assert_eq!(id(&Value::<fp_value::Num>::Bottom), Value::Bottom);
}
