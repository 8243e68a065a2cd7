use fp_value::{OrBottom, Scalar, Value};

use crate::{ExecPolicy, Func, IntoFunc};

/// `condition(p, f, g)` is `x -> p(x) ? f(x) : g(x)`.
///
/// If `p(x)` is bottom or not a `Bool` the result is bottom.
///
/// - Sequential: `p(x)` first, then exactly one of `f(x)` / `g(x)`.
/// - Parallel: `f(x)` and `g(x)` are started speculatively on the pool
///   while the caller computes `p(x)`; only the selected branch is awaited.
///   The other runs to completion and its result is dropped, so this is
///   only meaningful for side-effect-free `f` and `g`.
pub fn condition<S: Scalar>(
    p: impl IntoFunc<S>,
    f: impl IntoFunc<S>,
    g: impl IntoFunc<S>,
    policy: &ExecPolicy,
) -> Func<S> {
    let p = p.into_func();
    let f = f.into_func();
    let g = g.into_func();
    match policy.pool().cloned() {
        None => Func::named("condition", move |x| match p.call(x) {
            Value::Bool(true) => f.call(x),
            Value::Bool(false) => g.call(x),
            _ => Value::Bottom,
        }),
        Some(pool) => Func::named("condition", move |x| {
            let then_branch = {
                let (f, x) = (f.clone(), x.clone());
                pool.spawn(move || f.call(&x))
            };
            let else_branch = {
                let (g, x) = (g.clone(), x.clone());
                pool.spawn(move || g.call(&x))
            };
            match p.call(x) {
                Value::Bool(true) => {
                    tracing::trace!(discarded = g.name(), "speculative branch dropped");
                    then_branch.wait().or_bottom()
                }
                Value::Bool(false) => {
                    tracing::trace!(discarded = f.name(), "speculative branch dropped");
                    else_branch.wait().or_bottom()
                }
                _ => Value::Bottom,
            }
        }),
    }
}
