use mb_matrix::MatrixError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BenchError {
    /// The fixed-size self-check landed outside the calibrated tolerance.
    #[error("{left:.6} != {right:.6}")]
    SelfCheck { left: f64, right: f64 },
    #[error("matrix error: {0}")]
    Matrix(#[from] MatrixError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, BenchError>;
