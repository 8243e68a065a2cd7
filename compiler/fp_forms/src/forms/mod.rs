//! The functional forms.
//!
//! Each form is a constructor returning a [`Func`](crate::Func). Forms that
//! fan out take the [`ExecPolicy`](crate::ExecPolicy) they will run under;
//! the others never suspend beyond what their sub-functions do.
//!
//! Bottom discipline: a form checks the shape of its own argument and
//! returns `Bottom` without calling sub-functions whose preconditions are
//! not met. Checks on the *elements* of that argument are left to the
//! sub-functions.

mod apply_to_all;
mod binary_to_unary;
mod compose;
mod condition;
mod constant;
mod construct;
mod guard;
mod insert;
mod while_form;

pub use apply_to_all::{apply_to_all, apply_to_all_guarded};
pub use binary_to_unary::binary_to_unary;
pub use compose::compose;
pub use condition::condition;
pub use constant::constant;
pub use construct::construct;
pub use guard::Guard;
pub use insert::insert;
pub use while_form::while_form;
