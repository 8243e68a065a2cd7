use fp_forms::Func;
use fp_value::{Cast, Scalar, Value};

use crate::{pair_arg, undefined};

/// Lift a plain function on payloads into a bottom-preserving primitive.
///
/// ```text
/// let is_even = lift("is_even", |n: i64| n % 2 == 0);
/// let to_int = lift("to_int", |b: bool| i64::from(b));
/// ```
///
/// An argument that is not a `T` yields bottom.
pub fn lift<T, R, S, F>(name: &'static str, f: F) -> Func<S>
where
    S: Scalar,
    T: Cast<S>,
    R: Cast<S>,
    F: Fn(T) -> R + Send + Sync + 'static,
{
    Func::named(name, move |x| match T::cast_from(x) {
        Some(v) => f(v).into_value(),
        None => undefined(name, x),
    })
}

/// Lift a partial binary function into a primitive over pairs `<a, b>`.
/// `None` from `f` is a domain error.
pub fn lift_pair<T, R, S, F>(name: &'static str, f: F) -> Func<S>
where
    S: Scalar,
    T: Cast<S>,
    R: Cast<S>,
    F: Fn(T, T) -> Option<R> + Send + Sync + 'static,
{
    Func::named(name, move |x| {
        let Some((a, b)) = pair_arg(name, x) else {
            return Value::Bottom;
        };
        match (T::cast_from(a), T::cast_from(b)) {
            (Some(a), Some(b)) => f(a, b).map_or_else(|| undefined(name, x), Cast::into_value),
            _ => undefined(name, x),
        }
    })
}
