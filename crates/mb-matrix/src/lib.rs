//! `mb-matrix` - Dense matrices and matmul kernels for matmul-bench.
//!
//! This crate provides:
//! - A row-major f64 `Matrix` type with a 2-D `Shape`
//! - A `MatmulBackend` trait for pluggable multiplication kernels
//! - `TransposedBackend` (transpose-then-dot) and a reference `NaiveBackend`
//! - The deterministic benchmark matrix generator

pub mod backend;
pub mod cpu;
pub mod error;
pub mod generate;
pub mod matrix;
pub mod shape;

// Re-export primary types at the crate root for convenience.
pub use backend::MatmulBackend;
pub use cpu::{NaiveBackend, TransposedBackend};
pub use error::{MatrixError, Result};
pub use generate::matgen;
pub use matrix::Matrix;
pub use shape::Shape;
