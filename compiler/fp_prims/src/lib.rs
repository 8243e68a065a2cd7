//! FP Prims - primitive functions for the functional-forms engine.
//!
//! Every primitive is a bottom-preserving `Value -> Value` function:
//! bottom in, bottom out; a wrong case, wrong arity or wrong payload type
//! yields bottom; domain errors (division by zero, overflow, out-of-range
//! index) yield bottom. Binary primitives take a pair `<a, b>`.
//! Indices are 1-based.
//!
//! Plain primitives are generic functions usable directly as form
//! arguments (`apply_to_all(tail, &policy)`); parameterised ones (`select(i)`,
//! `distl(&policy)`) return a [`Func`](fp_forms::Func).
//!
//! # Logging
//!
//! A primitive that turns a non-bottom argument into bottom emits a
//! `trace` event naming the primitive and the offending case. Nothing else
//! is logged.

mod arith;
mod equality;
mod lift;
mod logic;
mod select;
mod structure;

pub use arith::{add, div, ge, gt, le, lt, mul, rem, sub, Arith};
pub use equality::eq;
pub use lift::{lift, lift_pair};
pub use logic::{and, not, or};
pub use select::{id, rselect, rtail, select, tail};
pub use structure::{
    apndl, apndr, atom, distl, distr, length, null, reverse, rotl, rotr, trans,
};

use fp_value::{Scalar, Sequence, Value};

fn reject<S: Scalar>(prim: &'static str, x: &Value<S>) {
    if !x.is_bottom() {
        tracing::trace!(primitive = prim, input = x.case_name(), "undefined on input");
    }
}

/// Bottom for an argument `prim` is undefined on.
pub(crate) fn undefined<S: Scalar>(prim: &'static str, x: &Value<S>) -> Value<S> {
    reject(prim, x);
    Value::Bottom
}

/// The argument as a sequence; logs when it is not one.
pub(crate) fn seq_arg<'a, S: Scalar>(prim: &'static str, x: &'a Value<S>) -> Option<&'a Sequence<S>> {
    let s = x.as_seq();
    if s.is_none() {
        reject(prim, x);
    }
    s
}

/// The argument as a pair `<a, b>`; logs when it is not one.
pub(crate) fn pair_arg<'a, S: Scalar>(
    prim: &'static str,
    x: &'a Value<S>,
) -> Option<(&'a Value<S>, &'a Value<S>)> {
    let pair = x.as_pair();
    if pair.is_none() {
        reject(prim, x);
    }
    pair
}
