use fp_value::{Scalar, Value};

use crate::{pair_arg, undefined};

fn boolean<S: Scalar>(prim: &'static str, x: &Value<S>, op: fn(bool, bool) -> bool) -> Value<S> {
    let Some((a, b)) = pair_arg(prim, x) else {
        return Value::Bottom;
    };
    match (a.as_bool(), b.as_bool()) {
        (Some(a), Some(b)) => Value::Bool(op(a, b)),
        _ => undefined(prim, x),
    }
}

/// `<a, b> -> a ∧ b` over `Bool`s.
pub fn and<S: Scalar>(x: &Value<S>) -> Value<S> {
    boolean("and", x, |a, b| a && b)
}

/// `<a, b> -> a ∨ b` over `Bool`s.
pub fn or<S: Scalar>(x: &Value<S>) -> Value<S> {
    boolean("or", x, |a, b| a || b)
}

pub fn not<S: Scalar>(x: &Value<S>) -> Value<S> {
    match x.as_bool() {
        Some(b) => Value::Bool(!b),
        None => undefined("not", x),
    }
}

#[cfg(test)]
mod tests;
