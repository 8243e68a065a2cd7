use fp_value::{Scalar, Value};

use crate::Func;

/// `constant(c)` is `x -> c`, except that a bottom argument yields bottom.
pub fn constant<S: Scalar>(c: Value<S>) -> Func<S> {
    Func::named("constant", move |x| {
        if x.is_bottom() {
            Value::Bottom
        } else {
            c.clone()
        }
    })
}
