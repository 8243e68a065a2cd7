//! FP Value - the value universe of the functional-forms engine.
//!
//! This crate provides:
//! - `Value<S>`: bottom, the built-in `Bool`/`Size` atoms, caller-chosen
//!   scalar payloads, and sequences
//! - `Sequence<S>`: persistent, structurally shared ordered container
//! - Scalar sets (`Scalar`, `scalar_set!`, the ready-made `Num` and the empty `Never`)
//! - Checked extraction (`Cast`, `CastError`, `OrBottom`)
//!
//! # Bottom
//!
//! `Value::Bottom` is the only error representation of the algebra. Every
//! extraction is total: asking a value for a case it does not hold produces
//! a `CastError`, which callers collapse into `Bottom` with [`OrBottom`].
//!
//! # Sharing
//!
//! Values are immutable. Sequences are RRB trees (`im::Vector`), so cloning a
//! value is O(1) and derived sequences share unmodified subtrees with their
//! source. All internals are `Arc`-based: values move freely between worker
//! threads.

mod scalar;
mod sequence;
mod value;

pub use scalar::{Never, Num, Scalar};
pub use sequence::{Iter, Sequence};
pub use value::{Cast, CastError, OrBottom, Value};
