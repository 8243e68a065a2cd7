//! Stack safety for deeply nested programs.
//!
//! A program built from functional forms is a tree of closures, and
//! evaluating it recurses once per level of nesting: `compose(f, compose(g, ...))`,
//! `apply_to_all(apply_to_all(...))`, element-wise equality of deeply nested
//! sequences. Long compose chains built in a loop can reach tens of thousands
//! of frames, so the recursive entry points run inside [`ensure_sufficient_stack`].
//!
//! # Platform Support
//!
//! - **Native targets**: `stacker` allocates a fresh stack segment on demand.
//! - **WASM targets**: plain call.
//!
//! Rayon worker threads get their own (smaller) stacks; the guard applies to
//! them as well, so parallel forms do not need a separate budget.

/// Remaining stack below which a new segment is allocated (128KB).
const RED_ZONE: usize = 128 * 1024;

/// Size of each newly allocated stack segment (2MB).
const SEGMENT_SIZE: usize = 2 * 1024 * 1024;

/// Run `f`, growing the stack first if less than the red zone remains.
///
/// ```text
/// fn depth(v: &Value<S>) -> usize {
///     ensure_sufficient_stack(|| match v {
///         Value::Seq(s) => 1 + s.iter().map(depth).max().unwrap_or(0),
///         _ => 0,
///     })
/// }
/// ```
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, SEGMENT_SIZE, f)
}

/// WASM version: the host manages the stack.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
