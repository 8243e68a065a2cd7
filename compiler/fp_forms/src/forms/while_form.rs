use fp_value::{Scalar, Value};

use crate::{Func, IntoFunc};

/// `while_form(p, f)` is `x -> { while p(x) { x = f(x) }; x }`.
///
/// Iterates in place, so the number of steps does not grow the stack.
/// Halts with bottom as soon as `p` yields bottom or a non-`Bool`, or `f`
/// yields bottom. Never parallel: each step depends on the previous one.
pub fn while_form<S: Scalar>(p: impl IntoFunc<S>, f: impl IntoFunc<S>) -> Func<S> {
    let p = p.into_func();
    let f = f.into_func();
    Func::named("while", move |x| {
        let mut current = x.clone();
        loop {
            match p.call(&current) {
                Value::Bool(true) => {}
                Value::Bool(false) => return current,
                _ => return Value::Bottom,
            }
            current = f.call(&current);
            if current.is_bottom() {
                return Value::Bottom;
            }
        }
    })
}

#[cfg(test)]
mod tests;
