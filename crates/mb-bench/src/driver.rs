use std::io::Write;
use std::time::{Duration, Instant};

use mb_matrix::{matgen, MatmulBackend, TransposedBackend};
use tracing::{debug, info};

use crate::config::BenchConfig;
use crate::error::{BenchError, Result};

/// Seed of the left operand.
pub const SEED_A: f64 = 1.0;
/// Seed of the right operand.
pub const SEED_B: f64 = 2.0;

/// Round a requested size down to the nearest even number.
pub fn effective_size(n: usize) -> usize {
    n / 2 * 2
}

/// Multiply the two benchmark matrices of (even-clamped) size `n` with the
/// transposed kernel and return the center element of the product.
pub fn calc(n: usize) -> Result<f64> {
    calc_with(n, &TransposedBackend)
}

/// Same as [`calc`] but with an arbitrary backend.
pub fn calc_with(n: usize, backend: &dyn MatmulBackend) -> Result<f64> {
    let size = effective_size(n);
    debug!(requested = n, size, backend = backend.name(), "calc");

    let a = matgen(size, SEED_A);
    let b = matgen(size, SEED_B);
    let x = a.matmul(&b, backend)?;
    Ok(x.center()?)
}

/// Run the fixed-size calibration check.
///
/// Returns the computed center value, or `BenchError::SelfCheck` when it is
/// further than `tolerance` from `expected`.
pub fn self_check(config: &BenchConfig, backend: &dyn MatmulBackend) -> Result<f64> {
    let left = calc_with(config.check_size, backend)?;
    let right = config.expected;
    debug!(left, right, tolerance = config.tolerance, "self-check");
    if (left - right).abs() > config.tolerance {
        return Err(BenchError::SelfCheck { left, right });
    }
    Ok(left)
}

/// Outcome of one timed `calc` call.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub size: usize,
    pub effective_size: usize,
    pub value: f64,
    pub elapsed: Duration,
}

impl Report {
    /// The benchmark value as printed on the first output line.
    pub fn value_line(&self) -> String {
        format!("{}", self.value)
    }

    /// Wall-clock time as printed on the second output line.
    pub fn time_line(&self) -> String {
        format!("time: {:.6} s", self.elapsed.as_secs_f64())
    }
}

/// Time a single `calc` at size `n`.
pub fn timed_run(n: usize, backend: &dyn MatmulBackend) -> Result<Report> {
    let start = Instant::now();
    let value = calc_with(n, backend)?;
    let elapsed = start.elapsed();
    info!(size = n, value, elapsed_s = elapsed.as_secs_f64(), "timed run finished");
    Ok(Report {
        size: n,
        effective_size: effective_size(n),
        value,
        elapsed,
    })
}

/// Self-check, then time `config.size` and write the two report lines to `out`.
///
/// Nothing is written if the self-check fails.
pub fn run<W: Write>(config: &BenchConfig, backend: &dyn MatmulBackend, out: &mut W) -> Result<Report> {
    self_check(config, backend)?;
    let report = timed_run(config.size, backend)?;
    writeln!(out, "{}", report.value_line())?;
    writeln!(out, "{}", report.time_line())?;
    Ok(report)
}
