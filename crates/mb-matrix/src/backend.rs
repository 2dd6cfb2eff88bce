use std::fmt::Debug;

use crate::error::Result;

/// Trait for pluggable matrix multiplication kernels.
///
/// Operands are passed as row-major f64 slices and the product is returned as
/// an owned vector. Implementations must accumulate each output element in a
/// fixed order so that repeated runs are bit-for-bit identical.
pub trait MatmulBackend: Send + Sync + Debug {
    /// Returns the name of this backend (e.g., "transposed", "naive").
    fn name(&self) -> &str;

    /// Matrix multiplication: C = A @ B.
    ///
    /// - `a`: row-major data of shape [m, k]
    /// - `b`: row-major data of shape [k, n]
    /// - Returns: row-major data of shape [m, n]
    fn matmul(&self, a: &[f64], b: &[f64], m: usize, k: usize, n: usize) -> Result<Vec<f64>>;
}
