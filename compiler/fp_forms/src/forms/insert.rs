use fp_value::{Scalar, Sequence, Value};

use crate::exec::partition;
use crate::{ExecPolicy, Func, IntoFunc};

/// `insert(f, neutral)` is the left fold of the pair function `f` over a
/// sequence: `f(<...f(<f(<e, x1>), x2>)..., xn>)`.
///
/// The fold is seeded by `neutral` when given, and by `x1` otherwise. An
/// empty sequence yields `neutral` sequentially, or bottom when there is no
/// neutral. A non-sequence or bottom argument yields bottom.
///
/// # Parallel reduction
///
/// The sequence is split into `W` contiguous chunks (`W` = pool workers,
/// boundaries fixed by length and `W`). Each chunk is folded on its own
/// worker from `neutral`, then the partial results are folded in chunk order
/// from `neutral` again, so all `W` partials take part and an empty chunk
/// contributes `neutral`. Without a neutral each non-empty chunk is seeded by
/// its own first element, empty chunks are skipped, and the partials are
/// seeded by the first partial.
///
/// This equals the sequential fold only if `f` is associative and `neutral`
/// is a two-sided identity of `f`. That is a precondition on the caller;
/// it is not checked.
pub fn insert<S: Scalar>(
    f: impl IntoFunc<S>,
    policy: &ExecPolicy,
    neutral: Option<Value<S>>,
) -> Func<S> {
    let f = f.into_func();
    match policy.pool().cloned() {
        None => Func::named("insert", move |x| match x.as_seq() {
            Some(s) => fold(&f, neutral.as_ref(), s.iter()),
            None => Value::Bottom,
        }),
        Some(pool) => Func::named("insert", move |x| {
            let Some(s) = x.as_seq() else {
                return Value::Bottom;
            };
            let chunks = partition(s.len(), pool.workers());
            tracing::trace!(len = s.len(), chunks = chunks.len(), "insert partition");
            let partials = pool.map_ranges(chunks, |range| match &neutral {
                // An empty chunk's partial is the neutral itself.
                Some(_) => Some(fold(&f, neutral.as_ref(), s.slice(range).iter())),
                // Without a neutral an empty chunk has no partial.
                None if range.is_empty() => None,
                None => Some(fold(&f, None, s.slice(range).iter())),
            });
            fold(&f, neutral.as_ref(), partials.iter().flatten())
        }),
    }
}

/// Sequential left fold; an exhausted iterator yields the seed.
fn fold<'a, S: Scalar>(
    f: &Func<S>,
    neutral: Option<&Value<S>>,
    mut items: impl Iterator<Item = &'a Value<S>>,
) -> Value<S> {
    let seed = match neutral {
        Some(e) => e.clone(),
        None => match items.next() {
            Some(first) => first.clone(),
            None => return Value::Bottom,
        },
    };
    items.fold(seed, |acc, x| {
        f.call(&Value::Seq(Sequence::pair(acc, x.clone())))
    })
}
