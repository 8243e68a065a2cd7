use fp_value::{Cast, Scalar, Value};

use crate::{pair_arg, undefined};

/// Structural equality over a pair: `<a, b> -> a = b`.
///
/// Payload atoms compare as `T`; `Bool` and `Size` atoms compare directly.
/// Sequences are equal when they have the same length and are equal
/// element-wise. Values of different cases (a sequence and an atom, or
/// atoms that are not both `T`) are unequal. A bottom anywhere in the
/// compared structure makes the result bottom.
pub fn eq<T, S>(x: &Value<S>) -> Value<S>
where
    S: Scalar,
    T: Cast<S> + PartialEq,
{
    let Some((a, b)) = pair_arg("eq", x) else {
        return Value::Bottom;
    };
    match equal::<T, S>(a, b) {
        Some(result) => Value::Bool(result),
        None => undefined("eq", x),
    }
}

/// `None` if a bottom was found.
fn equal<T, S>(a: &Value<S>, b: &Value<S>) -> Option<bool>
where
    S: Scalar,
    T: Cast<S> + PartialEq,
{
    fp_stack::ensure_sufficient_stack(|| match (a, b) {
        (Value::Bottom, _) | (_, Value::Bottom) => None,
        (Value::Seq(ys), Value::Seq(zs)) => {
            if ys.len() != zs.len() {
                return Some(false);
            }
            // Keep scanning after a mismatch: a later bottom still wins.
            let mut all = true;
            for (y, z) in ys.iter().zip(zs) {
                all &= equal::<T, S>(y, z)?;
            }
            Some(all)
        }
        (Value::Bool(y), Value::Bool(z)) => Some(y == z),
        (Value::Size(y), Value::Size(z)) => Some(y == z),
        _ => match (T::cast_from(a), T::cast_from(b)) {
            (Some(y), Some(z)) => Some(y == z),
            _ => Some(false),
        },
    })
}
