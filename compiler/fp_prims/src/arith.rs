//! Arithmetic and ordering over pairs of payload atoms.
//!
//! All arithmetic is checked: overflow, division by zero and remainder by
//! zero are domain errors and yield bottom.

use fp_value::{Cast, Scalar, Value};

use crate::{pair_arg, undefined};

/// Checked arithmetic on a payload type.
pub trait Arith: Sized {
    fn add(self, rhs: Self) -> Option<Self>;
    fn sub(self, rhs: Self) -> Option<Self>;
    fn mul(self, rhs: Self) -> Option<Self>;
    /// `None` on a zero divisor.
    fn div(self, rhs: Self) -> Option<Self>;
    /// `None` on a zero divisor.
    fn rem(self, rhs: Self) -> Option<Self>;
}

macro_rules! checked_int_arith {
    ($($ty:ty),+) => {$(
        impl Arith for $ty {
            fn add(self, rhs: Self) -> Option<Self> {
                self.checked_add(rhs)
            }
            fn sub(self, rhs: Self) -> Option<Self> {
                self.checked_sub(rhs)
            }
            fn mul(self, rhs: Self) -> Option<Self> {
                self.checked_mul(rhs)
            }
            fn div(self, rhs: Self) -> Option<Self> {
                self.checked_div(rhs)
            }
            fn rem(self, rhs: Self) -> Option<Self> {
                self.checked_rem(rhs)
            }
        }
    )+};
}

checked_int_arith!(i64, usize);

/// Floats follow IEEE-754 except that a zero divisor is a domain error.
impl Arith for f64 {
    fn add(self, rhs: Self) -> Option<Self> {
        Some(self + rhs)
    }
    fn sub(self, rhs: Self) -> Option<Self> {
        Some(self - rhs)
    }
    fn mul(self, rhs: Self) -> Option<Self> {
        Some(self * rhs)
    }
    fn div(self, rhs: Self) -> Option<Self> {
        (rhs != 0.0).then(|| self / rhs)
    }
    fn rem(self, rhs: Self) -> Option<Self> {
        (rhs != 0.0).then(|| self % rhs)
    }
}

/// Apply `op` to the two `T` components of a pair.
fn binary<T, R, S>(prim: &'static str, x: &Value<S>, op: impl FnOnce(T, T) -> Option<R>) -> Value<S>
where
    S: Scalar,
    T: Cast<S>,
    R: Cast<S>,
{
    let Some((a, b)) = pair_arg(prim, x) else {
        return Value::Bottom;
    };
    match (T::cast_from(a), T::cast_from(b)) {
        (Some(a), Some(b)) => match op(a, b) {
            Some(r) => r.into_value(),
            None => undefined(prim, x),
        },
        _ => undefined(prim, x),
    }
}

pub fn add<T: Cast<S> + Arith, S: Scalar>(x: &Value<S>) -> Value<S> {
    binary("add", x, T::add)
}

pub fn sub<T: Cast<S> + Arith, S: Scalar>(x: &Value<S>) -> Value<S> {
    binary("sub", x, T::sub)
}

pub fn mul<T: Cast<S> + Arith, S: Scalar>(x: &Value<S>) -> Value<S> {
    binary("mul", x, T::mul)
}

pub fn div<T: Cast<S> + Arith, S: Scalar>(x: &Value<S>) -> Value<S> {
    binary("div", x, T::div)
}

pub fn rem<T: Cast<S> + Arith, S: Scalar>(x: &Value<S>) -> Value<S> {
    binary("rem", x, T::rem)
}

/// `<a, b> -> a < b`.
pub fn lt<T: Cast<S> + PartialOrd, S: Scalar>(x: &Value<S>) -> Value<S> {
    binary("lt", x, |a: T, b: T| Some(a < b))
}

pub fn le<T: Cast<S> + PartialOrd, S: Scalar>(x: &Value<S>) -> Value<S> {
    binary("le", x, |a: T, b: T| Some(a <= b))
}

pub fn gt<T: Cast<S> + PartialOrd, S: Scalar>(x: &Value<S>) -> Value<S> {
    binary("gt", x, |a: T, b: T| Some(a > b))
}

pub fn ge<T: Cast<S> + PartialOrd, S: Scalar>(x: &Value<S>) -> Value<S> {
    binary("ge", x, |a: T, b: T| Some(a >= b))
}
