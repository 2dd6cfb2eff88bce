//! `mb-bench` - Transpose-then-dot matrix multiplication micro-benchmark.
//!
//! Generates two deterministic square matrices, multiplies them, checks the
//! center element of the product against a calibrated constant and times the
//! computation at a caller-chosen size.

pub mod config;
pub mod driver;
pub mod error;
pub mod logging;

pub use config::{BenchConfig, CHECK_SIZE, DEFAULT_SIZE, EXPECTED_CENTER, TOLERANCE};
pub use driver::{calc, calc_with, effective_size, run, self_check, timed_run, Report};
pub use error::{BenchError, Result};
