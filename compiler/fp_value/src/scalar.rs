//! Scalar sets: the caller-chosen payload types an atom may carry.
//!
//! Besides bottom, `Bool`, `Size` and sequences, a `Value<S>` holds atoms of
//! the scalar set `S`. A scalar set is an enum with one variant per payload
//! type; exactly one variant is occupied per atom. Declare one with
//! [`scalar_set!`](crate::scalar_set), which also wires every payload type
//! into checked extraction:
//!
//! ```text
//! scalar_set! {
//!     pub enum Number {
//!         Int(i32),
//!         Long(i64),
//!     }
//! }
//!
//! let v: Value<Number> = Value::of(42_i64);
//! assert_eq!(v.cast::<i64>(), Ok(42));
//! assert!(v.cast::<i32>().is_err());
//! ```
//!
//! Payload types must not be `bool`, `usize` or `Sequence`: those cases are
//! built into `Value` and already implement `Cast` for every scalar set.

use std::fmt;
use std::sync::Arc;

/// A closed set of scalar payload types.
pub trait Scalar: Clone + fmt::Debug + fmt::Display + PartialEq + Send + Sync + 'static {
    /// Name of the payload type this scalar currently holds.
    fn kind(&self) -> &'static str;
}

/// Declare a scalar set enum and its `Cast` implementations.
///
/// The generated enum derives `Clone`, `Debug` and `PartialEq`, implements
/// `Scalar` and `Display`, and gets `From<T>` for every payload type `T`.
#[macro_export]
macro_rules! scalar_set {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $($variant:ident($ty:ty)),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Debug, PartialEq)]
        $vis enum $name {
            $($variant($ty)),+
        }

        impl $crate::Scalar for $name {
            fn kind(&self) -> &'static str {
                match self {
                    $(Self::$variant(_) => stringify!($ty)),+
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                match self {
                    $(Self::$variant(v) => ::std::fmt::Display::fmt(v, f)),+
                }
            }
        }

        $(
            impl ::std::convert::From<$ty> for $name {
                fn from(v: $ty) -> Self {
                    Self::$variant(v)
                }
            }

            impl $crate::Cast<$name> for $ty {
                const CASE: &'static str = stringify!($ty);

                fn cast_from(value: &$crate::Value<$name>) -> ::std::option::Option<Self> {
                    match value {
                        $crate::Value::Atom($name::$variant(v)) => {
                            ::std::option::Option::Some(::std::clone::Clone::clone(v))
                        }
                        _ => ::std::option::Option::None,
                    }
                }

                fn into_value(self) -> $crate::Value<$name> {
                    $crate::Value::Atom($name::$variant(self))
                }
            }
        )+
    };
}

crate::scalar_set! {
    /// General-purpose scalar set: integers, floats and text.
    pub enum Num {
        Int(i64),
        Float(f64),
        Text(Arc<str>),
    }
}

impl From<&str> for Num {
    fn from(s: &str) -> Self {
        Num::Text(Arc::from(s))
    }
}

/// The empty scalar set: values are built only from `Bool`, `Size` and sequences.
#[derive(Clone, Debug, PartialEq)]
pub enum Never {}

impl Scalar for Never {
    fn kind(&self) -> &'static str {
        match *self {}
    }
}

impl fmt::Display for Never {
    fn fmt(&self, _: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {}
    }
}
