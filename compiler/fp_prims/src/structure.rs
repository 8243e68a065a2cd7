//! Shape primitives: length, emptiness, reversal, transposition,
//! distribution, appending and rotation.

use fp_forms::{ExecPolicy, Func};
use fp_value::{Scalar, Sequence, Value};

use crate::{pair_arg, seq_arg, undefined};

/// Number of elements, as a `Size`.
pub fn length<S: Scalar>(x: &Value<S>) -> Value<S> {
    seq_arg("length", x).map_or(Value::Bottom, |s| Value::Size(s.len()))
}

/// `T` for `<>`, `F` for any other sequence.
pub fn null<S: Scalar>(x: &Value<S>) -> Value<S> {
    seq_arg("null", x).map_or(Value::Bottom, |s| Value::Bool(s.is_empty()))
}

/// `T` for any non-sequence and for `<>`; `F` for a non-empty sequence.
pub fn atom<S: Scalar>(x: &Value<S>) -> Value<S> {
    match x {
        Value::Bottom => Value::Bottom,
        Value::Seq(s) => Value::Bool(s.is_empty()),
        _ => Value::Bool(true),
    }
}

pub fn reverse<S: Scalar>(x: &Value<S>) -> Value<S> {
    seq_arg("reverse", x).map_or(Value::Bottom, |s| Value::Seq(s.reversed()))
}

/// Transpose a sequence of rows, truncating every row to the shortest one.
///
/// `<<1, 2, 3>, <4, 5, 6>>` gives `<<1, 4>, <2, 5>, <3, 6>>`. Bottom if any
/// row is not a sequence; `<>` transposes to `<>`.
pub fn trans<S: Scalar>(x: &Value<S>) -> Value<S> {
    let Some(s) = seq_arg("trans", x) else {
        return Value::Bottom;
    };
    let Some(rows) = s.iter().map(Value::as_seq).collect::<Option<Vec<_>>>() else {
        return undefined("trans", x);
    };
    let width = rows.iter().map(|r| r.len()).min().unwrap_or(0);
    let mut heads: Vec<_> = rows.iter().map(|r| r.iter()).collect();
    (0..width)
        .map(|_| {
            heads
                .iter_mut()
                .filter_map(Iterator::next)
                .cloned()
                .collect::<Sequence<S>>()
                .into_value()
        })
        .collect::<Sequence<S>>()
        .into_value()
}

/// `distl` is `<y, <z1, ..., zn>> -> <<y, z1>, ..., <y, zn>>`.
///
/// Under a parallel policy the pairs are built on the pool.
pub fn distl<S: Scalar>(policy: &ExecPolicy) -> Func<S> {
    distribute("distl", Side::Left, policy)
}

/// `distr` is `<<y1, ..., yn>, z> -> <<y1, z>, ..., <yn, z>>`.
pub fn distr<S: Scalar>(policy: &ExecPolicy) -> Func<S> {
    distribute("distr", Side::Right, policy)
}

/// Which pair component is held fixed while the other is spread.
#[derive(Clone, Copy)]
enum Side {
    Left,
    Right,
}

fn distribute<S: Scalar>(name: &'static str, side: Side, policy: &ExecPolicy) -> Func<S> {
    let pool = policy.pool().cloned();
    Func::named(name, move |x| {
        let Some((a, b)) = pair_arg(name, x) else {
            return Value::Bottom;
        };
        let (fixed, spread) = match side {
            Side::Left => (a, b),
            Side::Right => (b, a),
        };
        let Some(spread) = spread.as_seq() else {
            return undefined(name, x);
        };
        let make = |e: &Value<S>| match side {
            Side::Left => Value::pair(fixed.clone(), e.clone()),
            Side::Right => Value::pair(e.clone(), fixed.clone()),
        };
        let pairs = match &pool {
            Some(pool) => Sequence::from_vec(
                pool.map_indexed(spread.len(), |i| spread.get(i).map_or(Value::Bottom, make)),
            ),
            None => spread.iter().map(make).collect(),
        };
        Value::Seq(pairs)
    })
}

/// `apndl` is `<y, <z1, ..., zn>> -> <y, z1, ..., zn>`.
pub fn apndl<S: Scalar>(x: &Value<S>) -> Value<S> {
    let Some((y, zs)) = pair_arg("apndl", x) else {
        return Value::Bottom;
    };
    match zs.as_seq() {
        Some(zs) => Value::Seq(zs.push_front(y.clone())),
        None => undefined("apndl", x),
    }
}

/// `apndr` is `<<y1, ..., yn>, z> -> <y1, ..., yn, z>`.
pub fn apndr<S: Scalar>(x: &Value<S>) -> Value<S> {
    let Some((ys, z)) = pair_arg("apndr", x) else {
        return Value::Bottom;
    };
    match ys.as_seq() {
        Some(ys) => Value::Seq(ys.push_back(z.clone())),
        None => undefined("apndr", x),
    }
}

/// Rotate left: `<x1, x2, ..., xn> -> <x2, ..., xn, x1>`.
pub fn rotl<S: Scalar>(x: &Value<S>) -> Value<S> {
    let Some(s) = seq_arg("rotl", x) else {
        return Value::Bottom;
    };
    match s.first() {
        Some(first) if s.len() > 1 => Value::Seq(s.drop(1).push_back(first.clone())),
        _ => x.clone(),
    }
}

/// Rotate right: `<x1, ..., xn-1, xn> -> <xn, x1, ..., xn-1>`.
pub fn rotr<S: Scalar>(x: &Value<S>) -> Value<S> {
    let Some(s) = seq_arg("rotr", x) else {
        return Value::Bottom;
    };
    match s.last() {
        Some(last) if s.len() > 1 => Value::Seq(s.take(s.len() - 1).push_front(last.clone())),
        _ => x.clone(),
    }
}
