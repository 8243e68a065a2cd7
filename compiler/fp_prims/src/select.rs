use fp_forms::Func;
use fp_value::{Scalar, Value};

use crate::{seq_arg, undefined};

/// `select(i)` is `<x1, ..., xn> -> xi`; bottom unless `1 <= i <= n`.
pub fn select<S: Scalar>(i: usize) -> Func<S> {
    Func::named("select", move |x| {
        let Some(s) = seq_arg("select", x) else {
            return Value::Bottom;
        };
        match i.checked_sub(1).and_then(|k| s.get(k)) {
            Some(v) => v.clone(),
            None => undefined("select", x),
        }
    })
}

/// `rselect(i)` selects from the right: `rselect(1)` is the last element.
pub fn rselect<S: Scalar>(i: usize) -> Func<S> {
    Func::named("rselect", move |x| {
        let Some(s) = seq_arg("rselect", x) else {
            return Value::Bottom;
        };
        let index = if i == 0 { None } else { s.len().checked_sub(i) };
        match index.and_then(|k| s.get(k)) {
            Some(v) => v.clone(),
            None => undefined("rselect", x),
        }
    })
}

/// `<x1, x2, ..., xn> -> <x2, ..., xn>`; bottom on `<>`.
pub fn tail<S: Scalar>(x: &Value<S>) -> Value<S> {
    match seq_arg("tail", x) {
        Some(s) if !s.is_empty() => Value::Seq(s.drop(1)),
        Some(_) => undefined("tail", x),
        None => Value::Bottom,
    }
}

/// `<x1, ..., xn-1, xn> -> <x1, ..., xn-1>`; bottom on `<>`.
pub fn rtail<S: Scalar>(x: &Value<S>) -> Value<S> {
    match seq_arg("rtail", x) {
        Some(s) if !s.is_empty() => Value::Seq(s.take(s.len() - 1)),
        Some(_) => undefined("rtail", x),
        None => Value::Bottom,
    }
}

/// The identity, bottom included.
pub fn id<S: Scalar>(x: &Value<S>) -> Value<S> {
    x.clone()
}

#[cfg(test)]
mod tests;
