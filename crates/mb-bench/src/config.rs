/// Matrix dimension used when none is given on the command line.
pub const DEFAULT_SIZE: usize = 100;
/// Requested size of the self-check run (clamped to 100).
pub const CHECK_SIZE: usize = 101;
/// Calibrated center value of the self-check product.
pub const EXPECTED_CENTER: f64 = -18.67;
/// Absolute tolerance of the self-check.
pub const TOLERANCE: f64 = 0.1;

/// Parameters for one benchmark invocation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BenchConfig {
    /// Requested size of the timed run.
    pub size: usize,
    pub check_size: usize,
    pub expected: f64,
    pub tolerance: f64,
}

impl Default for BenchConfig {
    fn default() -> Self {
        BenchConfig {
            size: DEFAULT_SIZE,
            check_size: CHECK_SIZE,
            expected: EXPECTED_CENTER,
            tolerance: TOLERANCE,
        }
    }
}

impl BenchConfig {
    pub fn with_size(mut self, size: usize) -> Self {
        self.size = size;
        self
    }

    pub fn with_check_size(mut self, check_size: usize) -> Self {
        self.check_size = check_size;
        self
    }

    pub fn with_expected(mut self, expected: f64) -> Self {
        self.expected = expected;
        self
    }

    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }
}
