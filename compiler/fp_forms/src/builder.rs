//! Policy-carrying form builder.
//!
//! ```text
//! let forms = Forms::new(ExecPolicy::parallel());
//! let ip = forms.insert(add, Some(Value::of(0_i64)))
//!     * forms.apply_to_all(mul)
//!     * Func::new(trans);
//! ```

use std::marker::PhantomData;

use fp_value::{Num, Scalar, Value};

use crate::{forms, ExecPolicy, Func, Guard, IntoFunc};

/// Builds form instances that all run under one [`ExecPolicy`].
pub struct Forms<S = Num> {
    policy: ExecPolicy,
    _scalar: PhantomData<fn() -> S>,
}

impl<S: Scalar> Forms<S> {
    pub fn new(policy: ExecPolicy) -> Self {
        Forms {
            policy,
            _scalar: PhantomData,
        }
    }

    pub fn sequential() -> Self {
        Self::new(ExecPolicy::Sequential)
    }

    pub fn policy(&self) -> &ExecPolicy {
        &self.policy
    }

    pub fn compose(&self, f: impl IntoFunc<S>, g: impl IntoFunc<S>) -> Func<S> {
        forms::compose(f, g)
    }

    pub fn construct<I>(&self, fs: I) -> Func<S>
    where
        I: IntoIterator,
        I::Item: IntoFunc<S>,
    {
        forms::construct(fs, &self.policy)
    }

    pub fn condition(
        &self,
        p: impl IntoFunc<S>,
        f: impl IntoFunc<S>,
        g: impl IntoFunc<S>,
    ) -> Func<S> {
        forms::condition(p, f, g, &self.policy)
    }

    pub fn constant(&self, c: Value<S>) -> Func<S> {
        forms::constant(c)
    }

    pub fn insert(&self, f: impl IntoFunc<S>, neutral: Option<Value<S>>) -> Func<S> {
        forms::insert(f, &self.policy, neutral)
    }

    pub fn apply_to_all(&self, f: impl IntoFunc<S>) -> Func<S> {
        forms::apply_to_all(f, &self.policy)
    }

    pub fn apply_to_all_where(&self, f: impl IntoFunc<S>, guard: Guard<S>) -> Func<S> {
        forms::apply_to_all_guarded(f, guard, &self.policy)
    }

    pub fn binary_to_unary(&self, f: impl IntoFunc<S>, x: Value<S>) -> Func<S> {
        forms::binary_to_unary(f, x)
    }

    pub fn while_form(&self, p: impl IntoFunc<S>, f: impl IntoFunc<S>) -> Func<S> {
        forms::while_form(p, f)
    }
}

impl<S> Clone for Forms<S> {
    fn clone(&self) -> Self {
        Forms {
            policy: self.policy.clone(),
            _scalar: PhantomData,
        }
    }
}

impl<S> std::fmt::Debug for Forms<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Forms").field("policy", &self.policy).finish()
    }
}

impl<S: Scalar> Default for Forms<S> {
    fn default() -> Self {
        Self::sequential()
    }
}
