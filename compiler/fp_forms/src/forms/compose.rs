use fp_value::Scalar;

use crate::{Func, IntoFunc};

/// `compose(f, g)` is `x -> f(g(x))`.
///
/// Adds no bottom check of its own; `f` and `g` check their inputs.
/// Associative: `compose(compose(f, g), h)` and `compose(f, compose(g, h))`
/// denote the same function.
pub fn compose<S: Scalar>(f: impl IntoFunc<S>, g: impl IntoFunc<S>) -> Func<S> {
    let f = f.into_func();
    let g = g.into_func();
    Func::named("compose", move |x| {
        fp_stack::ensure_sufficient_stack(|| f.call(&g.call(x)))
    })
}
