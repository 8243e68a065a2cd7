use std::fmt;

use fp_value::{Cast, Num, Scalar, Value};

/// Element constraint checked by [`apply_to_all_guarded`](crate::apply_to_all_guarded)
/// before the mapped function sees an element.
pub enum Guard<S: Scalar = Num> {
    /// Every element, bottom included, reaches the function.
    Any,
    /// Sequences only.
    Sequence,
    /// Any non-sequence, non-bottom value.
    Atom,
    Bool,
    Size,
    /// Values a [`Cast`] target accepts; `kind` is its case name for display.
    Payload {
        kind: &'static str,
        admits: fn(&Value<S>) -> bool,
    },
}

impl<S: Scalar> Guard<S> {
    /// Guard admitting exactly the values `T` can be cast from.
    pub fn of<T: Cast<S>>() -> Self {
        Guard::Payload {
            kind: T::CASE,
            admits: |x| T::cast_from(x).is_some(),
        }
    }

    pub fn admits(self, x: &Value<S>) -> bool {
        match self {
            Guard::Any => true,
            Guard::Sequence => x.is_sequence(),
            Guard::Atom => x.is_atom(),
            Guard::Bool => matches!(x, Value::Bool(_)),
            Guard::Size => matches!(x, Value::Size(_)),
            Guard::Payload { admits, .. } => admits(x),
        }
    }
}

impl<S: Scalar> Clone for Guard<S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S: Scalar> Copy for Guard<S> {}

impl<S: Scalar> Default for Guard<S> {
    fn default() -> Self {
        Guard::Any
    }
}

impl<S: Scalar> fmt::Debug for Guard<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Guard::Any => f.write_str("Any"),
            Guard::Sequence => f.write_str("Sequence"),
            Guard::Atom => f.write_str("Atom"),
            Guard::Bool => f.write_str("Bool"),
            Guard::Size => f.write_str("Size"),
            Guard::Payload { kind, .. } => f.debug_tuple("Payload").field(kind).finish(),
        }
    }
}
