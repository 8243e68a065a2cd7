//! The `Value` sum type and its checked extraction.
//!
//! # Cases
//!
//! | case     | meaning                                         |
//! |----------|-------------------------------------------------|
//! | `Bottom` | undefined; absorbing for every form/primitive   |
//! | `Bool`   | truth values produced by predicates             |
//! | `Size`   | lengths and cardinalities                       |
//! | `Atom`   | one payload of the scalar set `S`               |
//! | `Seq`    | an ordered sequence of values                   |
//!
//! No case is observable except through [`Value::cast`] (or the pattern
//! matches inside this workspace's forms and primitives). A failed cast is an
//! ordinary `Err`, never a panic.

use std::fmt;

use thiserror::Error;

use crate::{Num, Scalar, Sequence};

/// A value of the FP algebra over the scalar set `S`.
#[derive(Clone)]
pub enum Value<S = Num> {
    /// The undefined value.
    Bottom,
    /// Truth value.
    Bool(bool),
    /// Length or cardinality.
    Size(usize),
    /// Scalar payload.
    Atom(S),
    /// Sequence of values (possibly nested, possibly empty).
    Seq(Sequence<S>),
}

/// Why a checked extraction failed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum CastError {
    #[error("expected {expected}, found bottom")]
    Bottom { expected: &'static str },
    #[error("expected {expected}, found {found}")]
    Mismatch {
        expected: &'static str,
        found: &'static str,
    },
}

/// A Rust type that one case of `Value<S>` can be extracted into.
///
/// Implemented here for `bool`, `usize` and `Sequence<S>`, and by
/// `scalar_set!` for every payload type of a scalar set.
pub trait Cast<S: Scalar>: Sized {
    /// Case name used in `CastError`s.
    const CASE: &'static str;

    /// Extract `Self` if `value` holds this case.
    fn cast_from(value: &Value<S>) -> Option<Self>;

    /// Wrap `self` into the matching case.
    fn into_value(self) -> Value<S>;
}

impl<S: Scalar> Cast<S> for bool {
    const CASE: &'static str = "bool";

    fn cast_from(value: &Value<S>) -> Option<Self> {
        match value {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    fn into_value(self) -> Value<S> {
        Value::Bool(self)
    }
}

impl<S: Scalar> Cast<S> for usize {
    const CASE: &'static str = "size";

    fn cast_from(value: &Value<S>) -> Option<Self> {
        match value {
            Value::Size(n) => Some(*n),
            _ => None,
        }
    }

    fn into_value(self) -> Value<S> {
        Value::Size(self)
    }
}

impl<S: Scalar> Cast<S> for Sequence<S> {
    const CASE: &'static str = "sequence";

    fn cast_from(value: &Value<S>) -> Option<Self> {
        match value {
            Value::Seq(s) => Some(s.clone()),
            _ => None,
        }
    }

    fn into_value(self) -> Value<S> {
        Value::Seq(self)
    }
}

impl<S: Scalar> Value<S> {
    /// Wrap any castable Rust value.
    #[inline]
    pub fn of<T: Cast<S>>(x: T) -> Self {
        x.into_value()
    }

    /// Wrap a scalar payload.
    #[inline]
    pub fn atom(s: impl Into<S>) -> Self {
        Value::Atom(s.into())
    }

    /// Build a sequence value from its elements.
    pub fn seq<I: IntoIterator<Item = Value<S>>>(items: I) -> Self {
        Value::Seq(items.into_iter().collect())
    }

    /// The empty sequence `<>`.
    pub fn empty() -> Self {
        Value::Seq(Sequence::new())
    }

    /// The pair `<a, b>`, the argument shape of binary functions.
    pub fn pair(a: Value<S>, b: Value<S>) -> Self {
        Value::Seq(Sequence::pair(a, b))
    }

    #[inline]
    pub fn is_bottom(&self) -> bool {
        matches!(self, Value::Bottom)
    }

    #[inline]
    pub fn is_sequence(&self) -> bool {
        matches!(self, Value::Seq(_))
    }

    /// Defined and not a sequence.
    #[inline]
    pub fn is_atom(&self) -> bool {
        matches!(self, Value::Bool(_) | Value::Size(_) | Value::Atom(_))
    }

    /// Whether this value holds the case `T` extracts.
    pub fn is<T: Cast<S>>(&self) -> bool {
        T::cast_from(self).is_some()
    }

    /// Checked extraction of the case `T`.
    pub fn cast<T: Cast<S>>(&self) -> Result<T, CastError> {
        T::cast_from(self).ok_or_else(|| match self {
            Value::Bottom => CastError::Bottom { expected: T::CASE },
            other => CastError::Mismatch {
                expected: T::CASE,
                found: other.case_name(),
            },
        })
    }

    /// Borrow the sequence, if this is one.
    #[inline]
    pub fn as_seq(&self) -> Option<&Sequence<S>> {
        match self {
            Value::Seq(s) => Some(s),
            _ => None,
        }
    }

    #[inline]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Borrow both components of a pair `<a, b>`.
    ///
    /// `None` for anything that is not a sequence of exactly two elements.
    pub fn as_pair(&self) -> Option<(&Value<S>, &Value<S>)> {
        let s = self.as_seq()?;
        if s.len() != 2 {
            return None;
        }
        Some((s.get(0)?, s.get(1)?))
    }

    /// Name of the occupied case (`"bottom"`, `"bool"`, `"size"`, `"sequence"`
    /// or the payload type name).
    pub fn case_name(&self) -> &'static str {
        match self {
            Value::Bottom => "bottom",
            Value::Bool(_) => "bool",
            Value::Size(_) => "size",
            Value::Atom(s) => s.kind(),
            Value::Seq(_) => "sequence",
        }
    }
}

impl<S> Default for Value<S> {
    fn default() -> Self {
        Value::Bottom
    }
}

impl<S> From<bool> for Value<S> {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl<S> From<usize> for Value<S> {
    fn from(n: usize) -> Self {
        Value::Size(n)
    }
}

impl<S> From<Sequence<S>> for Value<S> {
    fn from(s: Sequence<S>) -> Self {
        Value::Seq(s)
    }
}

/// Collapse a failed computation into `Bottom`.
pub trait OrBottom<S> {
    fn or_bottom(self) -> Value<S>;
}

impl<S, E> OrBottom<S> for Result<Value<S>, E> {
    #[inline]
    fn or_bottom(self) -> Value<S> {
        self.unwrap_or(Value::Bottom)
    }
}

impl<S> OrBottom<S> for Option<Value<S>> {
    #[inline]
    fn or_bottom(self) -> Value<S> {
        self.unwrap_or(Value::Bottom)
    }
}

/// Structural equality. Algebra-level equality is the `eq` primitive.
impl<S: Scalar> PartialEq for Value<S> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Bottom, Value::Bottom) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Size(a), Value::Size(b)) => a == b,
            (Value::Atom(a), Value::Atom(b)) => a == b,
            (Value::Seq(a), Value::Seq(b)) => fp_stack::ensure_sufficient_stack(|| a == b),
            _ => false,
        }
    }
}

impl<S: Scalar> fmt::Debug for Value<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Bottom => f.write_str("Bottom"),
            Value::Bool(b) => f.debug_tuple("Bool").field(b).finish(),
            Value::Size(n) => f.debug_tuple("Size").field(n).finish(),
            Value::Atom(s) => f.debug_tuple("Atom").field(s).finish(),
            Value::Seq(s) => f.debug_tuple("Seq").field(s).finish(),
        }
    }
}

/// Backus notation: `⊥`, `T`/`F`, sequences as `<a, b, c>`.
impl<S: Scalar> fmt::Display for Value<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Bottom => f.write_str("⊥"),
            Value::Bool(true) => f.write_str("T"),
            Value::Bool(false) => f.write_str("F"),
            Value::Size(n) => write!(f, "{n}"),
            Value::Atom(s) => write!(f, "{s}"),
            Value::Seq(s) => write!(f, "{s}"),
        }
    }
}
