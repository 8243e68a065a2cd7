use fp_value::{Scalar, Sequence, Value};

use crate::{ExecPolicy, Func, IntoFunc};

/// `construct([f1, ..., fn])` is `x -> <f1(x), ..., fn(x)>`.
///
/// Always yields a sequence of exactly `n` elements in index order. Every
/// `fi` is called, even on a bottom argument: bottom checks belong to the
/// `fi`. Under the parallel policy the `fi(x)` run as independent tasks and
/// the sequence is assembled after all of them finish.
pub fn construct<S, I>(fs: I, policy: &ExecPolicy) -> Func<S>
where
    S: Scalar,
    I: IntoIterator,
    I::Item: IntoFunc<S>,
{
    let fs: Vec<Func<S>> = fs.into_iter().map(IntoFunc::into_func).collect();
    match policy.pool().cloned() {
        Some(pool) => Func::named("construct", move |x| {
            let results = pool.map_indexed(fs.len(), |i| fs[i].call(x));
            Value::Seq(Sequence::from_vec(results))
        }),
        None => Func::named("construct", move |x| {
            Value::Seq(fs.iter().map(|f| f.call(x)).collect())
        }),
    }
}

#[cfg(test)]
mod tests;
