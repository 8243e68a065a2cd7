use fp_value::{Num, Value};

use super::*;

fn pair(a: bool, b: bool) -> Value {
    Value::pair(Value::Bool(a), Value::Bool(b))
}

#[test]
fn truth_tables() {
    for a in [false, true] {
        for b in [false, true] {
            assert_eq!(and(&pair(a, b)), Value::Bool(a && b));
            assert_eq!(or(&pair(a, b)), Value::Bool(a || b));
        }
        assert_eq!(not(&Value::<Num>::Bool(a)), Value::Bool(!a));
    }
}

#[test]
fn non_boolean_operands() {
    let mixed = Value::<Num>::pair(Value::Bool(true), Value::of(1_i64));
    assert_eq!(and(&mixed), Value::Bottom);
    assert_eq!(or(&Value::<Num>::pair(Value::Bool(true), Value::Bottom)), Value::Bottom);
    assert_eq!(and(&Value::seq([Value::<Num>::Bool(true)])), Value::Bottom);
    assert_eq!(not(&Value::<Num>::Size(0)), Value::Bottom);
    assert_eq!(not(&Value::<Num>::Bottom), Value::Bottom);
}
