use crate::backend::MatmulBackend;
use crate::cpu::matmul::transpose;
use crate::error::{MatrixError, Result};
use crate::shape::Shape;

/// A dense, row-major matrix of f64 values.
///
/// Dimensions are fixed at construction. Operations such as `transpose` and
/// `matmul` return new matrices rather than mutating in place.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    data: Vec<f64>,
    shape: Shape,
}

impl Matrix {
    /// Create a new matrix from row-major data and a shape.
    ///
    /// # Panics
    /// Panics if `data.len() != shape.numel()`.
    pub fn new(data: Vec<f64>, shape: Shape) -> Self {
        assert_eq!(
            data.len(),
            shape.numel(),
            "data length {} does not match shape {} (numel={})",
            data.len(),
            shape,
            shape.numel()
        );
        Matrix { data, shape }
    }

    /// Create a zero-filled matrix with the given shape.
    pub fn zeros(shape: Shape) -> Self {
        Matrix {
            data: vec![0.0; shape.numel()],
            shape,
        }
    }

    /// Create the `n x n` identity matrix.
    pub fn identity(n: usize) -> Self {
        let mut m = Matrix::zeros(Shape::square(n));
        for i in 0..n {
            m.data[i * n + i] = 1.0;
        }
        m
    }

    /// Build a matrix from a list of rows.
    ///
    /// All rows must have the same length.
    pub fn from_rows(rows: &[Vec<f64>]) -> Result<Matrix> {
        let cols = rows.first().map_or(0, Vec::len);
        let mut data = Vec::with_capacity(rows.len() * cols);
        for (i, row) in rows.iter().enumerate() {
            if row.len() != cols {
                return Err(MatrixError::RaggedRows {
                    row: i,
                    expected: cols,
                    got: row.len(),
                });
            }
            data.extend_from_slice(row);
        }
        Ok(Matrix::new(data, Shape::new(rows.len(), cols)))
    }

    pub fn shape(&self) -> Shape {
        self.shape
    }

    pub fn rows(&self) -> usize {
        self.shape.rows()
    }

    pub fn cols(&self) -> usize {
        self.shape.cols()
    }

    /// Returns the underlying row-major data.
    pub fn data(&self) -> &[f64] {
        &self.data
    }

    /// Returns row `i` as a contiguous slice.
    ///
    /// # Panics
    /// Panics if `i >= rows()`.
    pub fn row(&self, i: usize) -> &[f64] {
        let cols = self.cols();
        &self.data[i * cols..(i + 1) * cols]
    }

    /// Returns the element at `(row, col)`.
    pub fn get(&self, row: usize, col: usize) -> Result<f64> {
        self.shape
            .offset(row, col)
            .map(|o| self.data[o])
            .ok_or(MatrixError::IndexOutOfBounds {
                row,
                col,
                rows: self.rows(),
                cols: self.cols(),
            })
    }

    /// Returns the element at `(rows / 2, cols / 2)`.
    pub fn center(&self) -> Result<f64> {
        self.get(self.rows() / 2, self.cols() / 2)
    }

    /// Returns a new matrix with rows and columns swapped.
    pub fn transpose(&self) -> Matrix {
        let mut data = vec![0.0; self.data.len()];
        transpose(&self.data, &mut data, self.rows(), self.cols());
        Matrix {
            data,
            shape: self.shape.transposed(),
        }
    }

    /// Matrix multiplication using the given backend.
    ///
    /// self is [m, k], other is [k, n], result is [m, n].
    pub fn matmul(&self, other: &Matrix, backend: &dyn MatmulBackend) -> Result<Matrix> {
        let m = self.rows();
        let k = self.cols();
        let k2 = other.rows();
        let n = other.cols();

        if k != k2 {
            return Err(MatrixError::MatmulMismatch { m, k, k2, n });
        }

        let data = backend.matmul(&self.data, &other.data, m, k, n)?;
        if data.len() != m * n {
            return Err(MatrixError::ShapeMismatch {
                expected: vec![m, n],
                got: vec![data.len()],
            });
        }
        Ok(Matrix::new(data, Shape::new(m, n)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cpu::{NaiveBackend, TransposedBackend};

    #[test]
    fn test_new_matrix() {
        let m = Matrix::new(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0], Shape::new(2, 3));
        assert_eq!(m.rows(), 2);
        assert_eq!(m.cols(), 3);
        assert_eq!(m.row(1), &[4.0, 5.0, 6.0]);
        assert_eq!(m.get(0, 2).unwrap(), 3.0);
    }

    #[test]
    #[should_panic]
    fn test_new_shape_mismatch_panics() {
        let _m = Matrix::new(vec![1.0, 2.0], Shape::new(1, 3));
    }

    #[test]
    fn test_get_out_of_bounds() {
        let m = Matrix::zeros(Shape::new(2, 2));
        assert!(matches!(
            m.get(2, 0),
            Err(MatrixError::IndexOutOfBounds { row: 2, col: 0, .. })
        ));
    }

    #[test]
    fn test_center() {
        let m = Matrix::from_rows(&[
            vec![1.0, 2.0, 3.0, 4.0],
            vec![5.0, 6.0, 7.0, 8.0],
            vec![9.0, 10.0, 11.0, 12.0],
            vec![13.0, 14.0, 15.0, 16.0],
        ])
        .unwrap();
        assert_eq!(m.center().unwrap(), 11.0);
        assert!(Matrix::zeros(Shape::square(0)).center().is_err());
    }

    #[test]
    fn test_from_rows_ragged() {
        let err = Matrix::from_rows(&[vec![1.0, 2.0], vec![3.0]]).unwrap_err();
        assert!(matches!(err, MatrixError::RaggedRows { row: 1, expected: 2, got: 1 }));
    }

    #[test]
    fn test_transpose() {
        let m = Matrix::from_rows(&[vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]).unwrap();
        let t = m.transpose();
        assert_eq!(t.shape(), Shape::new(3, 2));
        assert_eq!(t.data(), &[1.0, 4.0, 2.0, 5.0, 3.0, 6.0]);
        assert_eq!(t.transpose(), m);
    }

    #[test]
    fn test_matmul() {
        let a = Matrix::from_rows(&[vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
        let b = Matrix::from_rows(&[vec![5.0, 6.0], vec![7.0, 8.0]]).unwrap();
        let c = a.matmul(&b, &TransposedBackend).unwrap();
        assert_eq!(c.shape(), Shape::square(2));
        assert_eq!(c.data(), &[19.0, 22.0, 43.0, 50.0]);
    }

    #[test]
    fn test_matmul_identity() {
        let a = Matrix::from_rows(&[
            vec![0.5, -2.0, 3.25],
            vec![1.0, 0.0, -1.5],
            vec![7.0, 0.125, 2.0],
        ])
        .unwrap();
        let i = Matrix::identity(3);
        assert_eq!(a.matmul(&i, &TransposedBackend).unwrap(), a);
        assert_eq!(i.matmul(&a, &NaiveBackend).unwrap(), a);
    }

    #[test]
    fn test_matmul_dimension_mismatch() {
        let a = Matrix::new(vec![1.0, 2.0, 3.0], Shape::new(1, 3));
        let b = Matrix::new(vec![1.0, 2.0, 3.0, 4.0], Shape::new(2, 2));
        assert!(matches!(
            a.matmul(&b, &TransposedBackend),
            Err(MatrixError::MatmulMismatch { m: 1, k: 3, k2: 2, n: 2 })
        ));
    }
}
