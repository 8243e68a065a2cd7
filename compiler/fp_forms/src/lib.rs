//! FP Forms - the functional-forms engine.
//!
//! Programs are values of type [`Func`]: type-erased, shareable
//! `Value -> Value` functions. Functional forms consume functions (and
//! values) and produce new functions:
//!
//! | form                | meaning                                      |
//! |---------------------|----------------------------------------------|
//! | `compose(f, g)`     | `x -> f(g(x))`                               |
//! | `construct([f..])`  | `x -> <f1(x), ..., fn(x)>`                   |
//! | `condition(p,f,g)`  | `x -> p(x) ? f(x) : g(x)`                    |
//! | `constant(c)`       | `x -> c` (bottom-checked)                    |
//! | `insert(f, e)`      | left fold of `f` over a sequence             |
//! | `apply_to_all(f)`   | `<x1..xn> -> <f(x1)..f(xn)>`                 |
//! | `binary_to_unary`   | `y -> f(<x, y>)`                             |
//! | `while_form(p, f)`  | iterate `f` while `p` holds                  |
//!
//! # Execution Strategy
//!
//! Forms with independent sub-work (`construct`, `condition`, `insert`,
//! `apply_to_all`) capture an [`ExecPolicy`] when they are built. The
//! parallel policy runs fan-out on a [`WorkerPool`] (rayon) and joins before
//! returning, so every form call is synchronous for its caller. Results are
//! assembled in input order regardless of completion order.
//!
//! # Bottom
//!
//! Forms never panic on malformed input: each checks its own argument and
//! yields `Value::Bottom` when the shape precondition fails.

mod builder;
mod exec;
mod forms;
mod func;

pub use builder::Forms;
pub use exec::{ExecPolicy, Pending, PoolConfig, PoolError, WorkerPool};
pub use forms::{
    apply_to_all, apply_to_all_guarded, binary_to_unary, compose, condition, constant, construct,
    insert, while_form, Guard,
};
pub use func::{Func, IntoFunc};

pub use fp_value::{Cast, Never, Num, OrBottom, Scalar, Sequence, Value};
