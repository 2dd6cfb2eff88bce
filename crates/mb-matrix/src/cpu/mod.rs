pub mod matmul;

use crate::backend::MatmulBackend;
use crate::error::Result;

pub use matmul::{dot, transpose};

/// CPU backend that multiplies against an explicit transpose of the right
/// operand.
///
/// This is the kernel the benchmark times and the one its calibration value
/// was measured with.
#[derive(Debug, Clone)]
pub struct TransposedBackend;

impl TransposedBackend {
    pub fn new() -> Self {
        TransposedBackend
    }
}

impl Default for TransposedBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl MatmulBackend for TransposedBackend {
    fn name(&self) -> &str {
        "transposed"
    }

    fn matmul(&self, a: &[f64], b: &[f64], m: usize, k: usize, n: usize) -> Result<Vec<f64>> {
        matmul::matmul_transposed(a, b, m, k, n)
    }
}

/// Reference CPU backend using the plain `i, j, p` triple loop.
#[derive(Debug, Clone)]
pub struct NaiveBackend;

impl NaiveBackend {
    pub fn new() -> Self {
        NaiveBackend
    }
}

impl Default for NaiveBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl MatmulBackend for NaiveBackend {
    fn name(&self) -> &str {
        "naive"
    }

    fn matmul(&self, a: &[f64], b: &[f64], m: usize, k: usize, n: usize) -> Result<Vec<f64>> {
        matmul::matmul_naive(a, b, m, k, n)
    }
}
