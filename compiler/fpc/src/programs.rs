//! The demo programs, written as functional forms over `Num`.
//!
//! Every constructor takes the [`Forms`] builder whose policy the program
//! should run under.

use std::sync::Arc;

use fp_forms::{Forms, Func};
use fp_prims::{add, distl, distr, eq, id, lift, mul, rem, select, trans};
use fp_value::{Num, Value};

/// Inner product of a pair of vectors: `/+ ∘ α* ∘ trans`.
pub fn ip(forms: &Forms) -> Func {
    forms.insert(add::<i64, Num>, Some(Value::of(0_i64)))
        * forms.apply_to_all(mul::<i64, Num>)
        * Func::new(trans)
}

/// Matrix product of a pair of matrices (sequences of rows):
/// `α(α IP) ∘ α distl ∘ distr ∘ [1, trans ∘ 2]`.
pub fn mm(forms: &Forms) -> Func {
    let left_and_columns = forms.construct([select(1), Func::new(trans) * select(2)]);
    forms.apply_to_all(forms.apply_to_all(ip(forms)))
        * forms.apply_to_all(distl(forms.policy()))
        * distr(forms.policy())
        * left_and_columns
}

/// `isEven = eq ∘ [rem ∘ [id, 2̄], 0̄]`.
pub fn is_even(forms: &Forms) -> Func {
    let two = forms.constant(Value::of(2_i64));
    let zero = forms.constant(Value::of(0_i64));
    let mod2 = Func::new(rem::<i64, Num>) * forms.construct([Func::new(id), two]);
    Func::new(eq::<i64, Num>) * forms.construct([mod2, zero])
}

/// `toInt = id → 1̄; 0̄`.
pub fn to_int(forms: &Forms) -> Func {
    forms.condition(
        id,
        forms.constant(Value::of(1_i64)),
        forms.constant(Value::of(0_i64)),
    )
}

/// Number of even integers in a sequence: `/+ ∘ α toInt ∘ α isEven`.
pub fn count_evens(forms: &Forms) -> Func {
    forms.insert(add::<i64, Num>, Some(Value::of(0_i64)))
        * forms.apply_to_all(to_int(forms))
        * forms.apply_to_all(is_even(forms))
}

/// Sort the characters of a text atom.
pub fn sort_text() -> Func {
    lift("sort", |s: Arc<str>| -> Arc<str> {
        let mut chars: Vec<char> = s.chars().collect();
        chars.sort_unstable();
        chars.into_iter().collect::<String>().into()
    })
}

/// Sort every string of every row: `α(α sort)`.
pub fn sort_all(forms: &Forms) -> Func {
    forms.apply_to_all(forms.apply_to_all(sort_text()))
}
