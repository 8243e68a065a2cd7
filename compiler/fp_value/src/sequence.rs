//! Persistent sequences.
//!
//! `Sequence<S>` wraps an `im::Vector` (relaxed radix balanced tree):
//!
//! | operation                       | cost             |
//! |---------------------------------|------------------|
//! | `len`                           | O(1)             |
//! | `get`, `update`                 | O(log n)         |
//! | `take`, `drop`, `slice`         | O(log n)         |
//! | `concat`                        | O(log n)         |
//! | `push_front`, `push_back`       | amortised O(1)   |
//! | `clone`                         | O(1)             |
//!
//! Every operation takes `&self` and returns a new handle; the receiver is
//! never modified and unchanged subtrees are shared between the two.

use std::fmt;
use std::ops::Range;

use im::Vector;

use crate::{Scalar, Value};

/// Immutable, structurally shared, 0-indexed sequence of values.
#[derive(Clone)]
pub struct Sequence<S>(Vector<Value<S>>);

/// Borrowing iterator over a sequence, in index order.
pub type Iter<'a, S> = im::vector::Iter<'a, Value<S>>;

impl<S: Scalar> Sequence<S> {
    /// The empty sequence.
    pub fn new() -> Self {
        Sequence(Vector::new())
    }

    pub fn from_vec(items: Vec<Value<S>>) -> Self {
        Sequence(Vector::from(items))
    }

    /// A sequence of `n` bottoms, to be filled by `update`.
    pub fn filled(n: usize) -> Self {
        std::iter::repeat(Value::Bottom).take(n).collect()
    }

    pub fn pair(a: Value<S>, b: Value<S>) -> Self {
        let mut v = Vector::new();
        v.push_back(a);
        v.push_back(b);
        Sequence(v)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Element at 0-based index `i`.
    #[inline]
    pub fn get(&self, i: usize) -> Option<&Value<S>> {
        self.0.get(i)
    }

    pub fn first(&self) -> Option<&Value<S>> {
        self.0.front()
    }

    pub fn last(&self) -> Option<&Value<S>> {
        self.0.back()
    }

    /// The first `n` elements (all of them if `n >= len`).
    pub fn take(&self, n: usize) -> Self {
        if n >= self.len() {
            return self.clone();
        }
        Sequence(self.0.take(n))
    }

    /// Everything after the first `n` elements (empty if `n >= len`).
    pub fn drop(&self, n: usize) -> Self {
        if n >= self.len() {
            return Self::new();
        }
        Sequence(self.0.skip(n))
    }

    /// Elements in `range`, clamped to the sequence bounds.
    pub fn slice(&self, range: Range<usize>) -> Self {
        let end = range.end.min(self.len());
        let start = range.start.min(end);
        self.drop(start).take(end - start)
    }

    pub fn concat(&self, other: &Self) -> Self {
        let mut v = self.0.clone();
        v.append(other.0.clone());
        Sequence(v)
    }

    pub fn push_front(&self, x: Value<S>) -> Self {
        let mut v = self.0.clone();
        v.push_front(x);
        Sequence(v)
    }

    pub fn push_back(&self, x: Value<S>) -> Self {
        let mut v = self.0.clone();
        v.push_back(x);
        Sequence(v)
    }

    /// Replace the element at `i`; `None` if `i` is out of bounds.
    pub fn update(&self, i: usize, x: Value<S>) -> Option<Self> {
        (i < self.len()).then(|| Sequence(self.0.update(i, x)))
    }

    pub fn reversed(&self) -> Self {
        self.iter().rev().cloned().collect()
    }

    pub fn iter(&self) -> Iter<'_, S> {
        self.0.iter()
    }

    #[inline]
    pub fn into_value(self) -> Value<S> {
        Value::Seq(self)
    }
}

impl<S: Scalar> Default for Sequence<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Scalar> From<Vec<Value<S>>> for Sequence<S> {
    fn from(items: Vec<Value<S>>) -> Self {
        Self::from_vec(items)
    }
}

impl<S: Scalar> FromIterator<Value<S>> for Sequence<S> {
    fn from_iter<I: IntoIterator<Item = Value<S>>>(iter: I) -> Self {
        Sequence(iter.into_iter().collect())
    }
}

impl<'a, S: Scalar> IntoIterator for &'a Sequence<S> {
    type Item = &'a Value<S>;
    type IntoIter = Iter<'a, S>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl<S: Scalar> IntoIterator for Sequence<S> {
    type Item = Value<S>;
    type IntoIter = im::vector::ConsumingIter<Value<S>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<S: Scalar> PartialEq for Sequence<S> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().zip(other.iter()).all(|(a, b)| a == b)
    }
}

impl<S: Scalar> fmt::Debug for Sequence<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<S: Scalar> fmt::Display for Sequence<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fp_stack::ensure_sufficient_stack(|| {
            f.write_str("<")?;
            for (i, v) in self.iter().enumerate() {
                if i > 0 {
                    f.write_str(", ")?;
                }
                write!(f, "{v}")?;
            }
            f.write_str(">")
        })
    }
}
