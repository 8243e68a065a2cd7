//! Input builders for the demo programs.

use std::sync::Arc;

use fp_value::Value;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

const CHARSET: &[u8] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

/// `n x n` matrix with entries `i + j`.
pub fn square_matrix(n: usize) -> Value {
    Value::seq((0..n).map(|i| Value::seq((0..n).map(|j| int(i + j)))))
}

/// The pair `<m, m>` multiplied by the `matmul` demo.
pub fn matmul_input(n: usize) -> Value {
    let m = square_matrix(n);
    Value::pair(m.clone(), m)
}

/// `<0, 1, ..., n - 1>`.
pub fn range(n: usize) -> Value {
    Value::seq((0..n).map(int))
}

/// `rows` rows of `per_row` random alphanumeric strings of length `len`,
/// reproducible for a given `seed`.
pub fn random_strings(rows: usize, per_row: usize, len: usize, seed: u64) -> Value {
    let mut rng = ChaCha20Rng::seed_from_u64(seed);
    let mut out = Vec::with_capacity(rows);
    for _ in 0..rows {
        let row: Vec<Value> = (0..per_row).map(|_| random_string(&mut rng, len)).collect();
        out.push(Value::seq(row));
    }
    Value::seq(out)
}

fn random_string(rng: &mut impl Rng, len: usize) -> Value {
    let s: String = (0..len)
        .map(|_| char::from(CHARSET[rng.random_range(0..CHARSET.len())]))
        .collect();
    Value::atom(Arc::<str>::from(s))
}

fn int(n: usize) -> Value {
    Value::of(i64::try_from(n).unwrap_or(i64::MAX))
}
