use tracing::trace;

use crate::matrix::Matrix;
use crate::shape::Shape;

/// Generate the deterministic `n x n` benchmark matrix for `seed`.
///
/// Element `(i, j)` is `(seed / n / n) * (i - j) * (i + j)`, evaluated left to
/// right in f64. `n == 0` yields an empty matrix.
pub fn matgen(n: usize, seed: f64) -> Matrix {
    trace!(n, seed, "generating matrix");
    let nf = n as f64;
    let tmp = seed / nf / nf;
    let mut data = Vec::with_capacity(n * n);
    for i in 0..n {
        for j in 0..n {
            let diff = i as f64 - j as f64;
            let sum = (i + j) as f64;
            data.push(tmp * diff * sum);
        }
    }
    Matrix::new(data, Shape::square(n))
}
