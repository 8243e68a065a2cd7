//! Shareable `Value -> Value` functions.
//!
//! A `Func` is an `Arc`'d closure: cloning is a reference-count bump, and
//! the same instance may be called repeatedly and from several threads at
//! once. Captures are frozen when the closure is built; there is no mutable
//! state shared between invocations.

use std::fmt;
use std::ops::Mul;
use std::sync::Arc;

use fp_value::{Num, Scalar, Value};

type Body<S> = dyn Fn(&Value<S>) -> Value<S> + Send + Sync;

/// A function of the FP algebra.
pub struct Func<S = Num> {
    name: &'static str,
    body: Arc<Body<S>>,
}

impl<S: Scalar> Func<S> {
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&Value<S>) -> Value<S> + Send + Sync + 'static,
    {
        Self::named("<fn>", f)
    }

    /// A function carrying a name for `Debug` output and tracing.
    pub fn named<F>(name: &'static str, f: F) -> Self
    where
        F: Fn(&Value<S>) -> Value<S> + Send + Sync + 'static,
    {
        Func {
            name,
            body: Arc::new(f),
        }
    }

    /// The identity function.
    pub fn id() -> Self {
        Self::named("id", Value::clone)
    }

    #[inline]
    pub fn call(&self, x: &Value<S>) -> Value<S> {
        (self.body)(x)
    }

    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl<S> Clone for Func<S> {
    fn clone(&self) -> Self {
        Func {
            name: self.name,
            body: Arc::clone(&self.body),
        }
    }
}

impl<S> fmt::Debug for Func<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Func").field(&self.name).finish()
    }
}

/// `f * g` is Backus' `f ∘ g`.
impl<S: Scalar> Mul for Func<S> {
    type Output = Func<S>;

    fn mul(self, rhs: Func<S>) -> Func<S> {
        crate::compose(self, rhs)
    }
}

/// Anything usable where a form expects a function: a `Func`, a primitive
/// `fn(&Value<S>) -> Value<S>`, or a closure with an annotated argument.
pub trait IntoFunc<S> {
    fn into_func(self) -> Func<S>;
}

impl<S> IntoFunc<S> for Func<S> {
    #[inline]
    fn into_func(self) -> Func<S> {
        self
    }
}

impl<S, F> IntoFunc<S> for F
where
    S: Scalar,
    F: Fn(&Value<S>) -> Value<S> + Send + Sync + 'static,
{
    fn into_func(self) -> Func<S> {
        Func::new(self)
    }
}
