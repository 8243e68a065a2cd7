use fp_value::{Scalar, Sequence, Value};

use crate::{ExecPolicy, Func, Guard, IntoFunc};

/// `apply_to_all(f)` is `<x1, ..., xn> -> <f(x1), ..., f(xn)>`.
///
/// A non-sequence or bottom argument yields bottom. The output keeps input
/// order under both policies; under the parallel one each `f(xi)` is an
/// independent task.
pub fn apply_to_all<S: Scalar>(f: impl IntoFunc<S>, policy: &ExecPolicy) -> Func<S> {
    apply_to_all_guarded(f, Guard::Any, policy)
}

/// [`apply_to_all`] whose elements must pass `guard`; elements that fail it
/// map to bottom without calling `f`.
pub fn apply_to_all_guarded<S: Scalar>(
    f: impl IntoFunc<S>,
    guard: Guard<S>,
    policy: &ExecPolicy,
) -> Func<S> {
    let f = f.into_func();
    let apply = move |x: &Value<S>| {
        if guard.admits(x) {
            fp_stack::ensure_sufficient_stack(|| f.call(x))
        } else {
            Value::Bottom
        }
    };
    match policy.pool().cloned() {
        None => Func::named("apply_to_all", move |x| match x.as_seq() {
            Some(s) => Value::Seq(s.iter().map(&apply).collect()),
            None => Value::Bottom,
        }),
        Some(pool) => Func::named("apply_to_all", move |x| {
            let Some(s) = x.as_seq() else {
                return Value::Bottom;
            };
            tracing::trace!(len = s.len(), "apply_to_all fan-out");
            let results = pool.map_indexed(s.len(), |i| s.get(i).map_or(Value::Bottom, &apply));
            Value::Seq(Sequence::from_vec(results))
        }),
    }
}

#[cfg(test)]
mod tests;
