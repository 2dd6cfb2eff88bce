//! Matmul kernels shared by the CPU backends.

use crate::error::{MatrixError, Result};

/// Transpose a row-major matrix: `dst = src^T`.
///
/// `src` is `rows x cols`, `dst` must hold `cols x rows` elements. Column `j`
/// of `src` becomes row `j` of `dst`.
pub fn transpose(src: &[f64], dst: &mut [f64], rows: usize, cols: usize) {
    for i in 0..rows {
        for j in 0..cols {
            dst[j * rows + i] = src[i * cols + j];
        }
    }
}

/// Inner product of two equal-length slices, accumulated left to right from 0.0.
#[inline]
pub fn dot(a: &[f64], b: &[f64]) -> f64 {
    let mut s = 0.0;
    for (x, y) in a.iter().zip(b) {
        s += x * y;
    }
    s
}

pub(crate) fn check_operands(a: &[f64], b: &[f64], m: usize, k: usize, n: usize) -> Result<()> {
    if a.len() != m * k {
        return Err(MatrixError::Other(format!(
            "matmul: a.len()={} but expected m*k={}",
            a.len(),
            m * k
        )));
    }
    if b.len() != k * n {
        return Err(MatrixError::Other(format!(
            "matmul: b.len()={} but expected k*n={}",
            b.len(),
            k * n
        )));
    }
    Ok(())
}

/// `C = A @ B` via an explicit transpose of `B`.
///
/// `B^T` is materialised first so both operands of every dot product are read
/// contiguously. Element `(i, j)` is `dot(row i of A, row j of B^T)`.
pub fn matmul_transposed(a: &[f64], b: &[f64], m: usize, k: usize, n: usize) -> Result<Vec<f64>> {
    check_operands(a, b, m, k, n)?;

    let mut bt = vec![0.0f64; n * k];
    transpose(b, &mut bt, k, n);

    let mut c = vec![0.0f64; m * n];
    for i in 0..m {
        let a_row = &a[i * k..(i + 1) * k];
        for j in 0..n {
            c[i * n + j] = dot(a_row, &bt[j * k..(j + 1) * k]);
        }
    }
    Ok(c)
}

/// Reference `C = A @ B` with the textbook triple loop, striding down the
/// columns of `B`.
pub fn matmul_naive(a: &[f64], b: &[f64], m: usize, k: usize, n: usize) -> Result<Vec<f64>> {
    check_operands(a, b, m, k, n)?;

    let mut c = vec![0.0f64; m * n];
    for i in 0..m {
        for j in 0..n {
            let mut sum = 0.0f64;
            for p in 0..k {
                sum += a[i * k + p] * b[p * n + j];
            }
            c[i * n + j] = sum;
        }
    }
    Ok(c)
}
