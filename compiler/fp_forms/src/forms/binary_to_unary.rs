use fp_value::{Scalar, Value};

use crate::{Func, IntoFunc};

/// `binary_to_unary(f, x)` is `y -> f(<x, y>)`.
///
/// Fixes the first component of a pair-consuming function, e.g. to turn
/// `add` into "add 1" for use under `apply_to_all`.
pub fn binary_to_unary<S: Scalar>(f: impl IntoFunc<S>, x: Value<S>) -> Func<S> {
    let f = f.into_func();
    Func::named("binary_to_unary", move |y| f.call(&Value::pair(x.clone(), y.clone())))
}
