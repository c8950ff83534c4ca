//! Determinant, cofactor, adjoint and inverse of square matrices.
//!
//! The determinant is computed by cofactor expansion along the first row,
//! recursing through [`Matrix::minor`] until the 2x2 (`ad - bc`) or 1x1 base
//! case. This is O(N!) and is implemented for N <= 4 only; larger matrices
//! need an LU decomposition instead.
//!
//! The inverse is the adjoint divided by the determinant. The determinant is
//! not recomputed: expanding along row 0 uses exactly the cofactors already
//! stored in column 0 of the adjoint, so `det = row(0) . adjoint.col(0)`.
//!
//! # Usage
//!
//! ```rust
//! use just_math::{Determinant, Matrix};
//!
//! let m = Matrix::from_rows([[1, 2], [3, 4]]);
//! assert_eq!(m.det(), -2);
//!
//! let m = Matrix::from_rows([[2.0, 0.0], [0.0, 4.0]]);
//! assert_eq!(m.invert().unwrap(), Matrix::from_rows([[0.5, 0.0], [0.0, 0.25]]));
//! ```

use just_core::{Error, Result};
use num_traits::Float;
use tracing::debug;

use crate::scalar::checkerboard;
use crate::{Matrix, Scalar};

/// Square matrices with a determinant.
///
/// Implemented for `Matrix<N, N, T>` with N in 1..=4.
pub trait Determinant {
    /// Element type.
    type Scalar: Scalar;

    /// The determinant.
    fn det(&self) -> Self::Scalar;

    /// `det(minor(row, col)) * (-1)^(row + col)`.
    ///
    /// # Panics
    ///
    /// If `row` or `col` is out of bounds.
    fn cofactor(&self, row: usize, col: usize) -> Self::Scalar;
}

impl<T: Scalar> Determinant for Matrix<1, 1, T> {
    type Scalar = T;

    #[inline]
    fn det(&self) -> T {
        self.m[0][0]
    }

    /// The minor of a 1x1 matrix is empty and has determinant one.
    #[inline]
    fn cofactor(&self, row: usize, col: usize) -> T {
        assert!(row == 0 && col == 0, "cofactor ({}, {}) out of bounds for 1x1 matrix", row, col);
        T::one()
    }
}

impl<T: Scalar> Determinant for Matrix<2, 2, T> {
    type Scalar = T;

    #[inline]
    fn det(&self) -> T {
        self.m[0][0] * self.m[1][1] - self.m[0][1] * self.m[1][0]
    }

    #[inline]
    fn cofactor(&self, row: usize, col: usize) -> T {
        let minor: Matrix<1, 1, T> = self.minor(row, col);
        checkerboard(minor.det(), row, col)
    }
}

macro_rules! impl_cofactor_expansion {
    ($($n:literal => $sub:literal),*) => {$(
        impl<T: Scalar> Determinant for Matrix<$n, $n, T> {
            type Scalar = T;

            fn det(&self) -> T {
                (0..$n).fold(T::zero(), |sum, col| sum + self.m[0][col] * self.cofactor(0, col))
            }

            fn cofactor(&self, row: usize, col: usize) -> T {
                let minor: Matrix<$sub, $sub, T> = self.minor(row, col);
                checkerboard(minor.det(), row, col)
            }
        }
    )*};
}

impl_cofactor_expansion!(3 => 2, 4 => 3);

impl<const N: usize, T: Scalar> Matrix<N, N, T>
where
    Self: Determinant<Scalar = T>,
{
    /// The adjoint (adjugate): the transpose of the cofactor matrix.
    ///
    /// Filled directly as `adjoint[col][row] = cofactor(row, col)`.
    pub fn adjoint(&self) -> Self {
        let mut adjoint = Self::zero();
        for row in 0..N {
            for col in 0..N {
                adjoint.m[col][row] = self.cofactor(row, col);
            }
        }
        adjoint
    }
}

impl<const N: usize, T: Scalar + Float> Matrix<N, N, T>
where
    Self: Determinant<Scalar = T>,
{
    /// The inverse matrix, `adjoint / det`.
    ///
    /// Only float matrices invert; integer division would truncate the
    /// adjoint. Integer matrices still have [`Matrix::adjoint`].
    ///
    /// # Errors
    ///
    /// [`Error::SingularMatrix`] when the determinant is exactly zero.
    /// Near-singular float matrices invert to large but finite values.
    ///
    /// # Example
    ///
    /// ```rust
    /// use just_math::Matrix;
    ///
    /// let singular = Matrix::from_rows([[1.0, 2.0], [2.0, 4.0]]);
    /// assert!(singular.invert().is_err());
    /// ```
    ///
    /// ```compile_fail
    /// use just_math::Matrix;
    ///
    /// let _ = Matrix::from_rows([[1, 2], [3, 4]]).invert();
    /// ```
    pub fn invert(&self) -> Result<Self> {
        let adjoint = self.adjoint();
        let det = self.row(0).dot(adjoint.col(0));
        if det == T::zero() {
            debug!(size = N, "matrix is singular");
            return Err(Error::singular_matrix(N));
        }
        Ok(adjoint.div_scalar(det))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Matrix3f, Matrix4d, Matrix4f};
    use approx::assert_abs_diff_eq;

    fn sample4() -> Matrix4d {
        Matrix4d::from_rows([
            [4.0, 7.0, 2.0, 3.0],
            [0.0, 5.0, 0.0, 1.0],
            [1.0, 0.0, 6.0, 2.0],
            [3.0, 1.0, 1.0, 8.0],
        ])
    }

    #[test]
    fn test_det_1x1() {
        assert_eq!(Matrix::from_rows([[7]]).det(), 7);
    }

    #[test]
    fn test_det_2x2() {
        assert_eq!(Matrix::from_rows([[1, 2], [3, 4]]).det(), -2);
        assert_eq!(Matrix::from_rows([[3.0, 8.0], [4.0, 6.0]]).det(), -14.0);
    }

    #[test]
    fn test_det_3x3() {
        let m = Matrix::from_rows([[1, 2, 3], [0, 1, 4], [5, 6, 0]]);
        assert_eq!(m.det(), 1);
        let m = Matrix::from_rows([[6, 1, 1], [4, -2, 5], [2, 8, 7]]);
        assert_eq!(m.det(), -306);
    }

    #[test]
    fn test_det_4x4() {
        let m = Matrix::from_rows([[1, 0, 2, -1], [3, 0, 0, 5], [2, 1, 4, -3], [1, 0, 5, 0]]);
        assert_eq!(m.det(), 30);
        assert_eq!(Matrix::<4, 4, i64>::identity().det(), 1);
    }

    #[test]
    fn test_det_transpose_invariant() {
        let m = sample4();
        assert_abs_diff_eq!(m.det(), m.transpose().det(), epsilon = 1e-9);
    }

    #[test]
    fn test_cofactor_signs() {
        let m = Matrix::from_rows([[1, 2, 3], [4, 5, 6], [7, 8, 10]]);
        // minor(0, 1) = [[4, 6], [7, 10]] -> 40 - 42 = -2, sign -1
        assert_eq!(m.cofactor(0, 1), 2);
        // minor(1, 1) = [[1, 3], [7, 10]] -> 10 - 21 = -11, sign +1
        assert_eq!(m.cofactor(1, 1), -11);
    }

    #[test]
    fn test_adjoint() {
        let m = Matrix::from_rows([[1, 2], [3, 4]]);
        assert_eq!(m.adjoint(), Matrix::from_rows([[4, -2], [-3, 1]]));

        // adj(M) * M = det(M) * I
        let m = Matrix::from_rows([[1, 2, 3], [0, 1, 4], [5, 6, 0]]);
        assert_eq!(m.adjoint() * m, Matrix::<3, 3, i32>::identity() * m.det());
    }

    #[test]
    fn test_adjoint_1x1() {
        assert_eq!(Matrix::from_rows([[5]]).adjoint(), Matrix::from_rows([[1]]));
        assert_eq!(Matrix::from_rows([[4.0]]).invert().unwrap(), Matrix::from_rows([[0.25]]));
    }

    #[test]
    fn test_invert_3x3() {
        let m = Matrix3f::from_rows([[1.0, 2.0, 3.0], [0.0, 1.0, 4.0], [5.0, 6.0, 0.0]]);
        let inv = m.invert().unwrap();
        assert_eq!(
            inv,
            Matrix3f::from_rows([[-24.0, 18.0, 5.0], [20.0, -15.0, -4.0], [-5.0, 4.0, 1.0]])
        );
        assert_abs_diff_eq!(m * inv, Matrix3f::identity(), epsilon = 1e-5);
    }

    #[test]
    fn test_invert_4x4() {
        let m = sample4();
        let inv = m.invert().unwrap();
        assert_abs_diff_eq!(m * inv, Matrix4d::identity(), epsilon = 1e-12);
        assert_abs_diff_eq!(inv * m, Matrix4d::identity(), epsilon = 1e-12);
        assert_abs_diff_eq!(inv.invert().unwrap(), m, epsilon = 1e-10);
    }

    #[test]
    fn test_invert_singular() {
        let m = Matrix4f::from_rows([
            [1.0, 2.0, 3.0, 4.0],
            [2.0, 4.0, 6.0, 8.0], // 2 * row 0
            [0.0, 1.0, 0.0, 1.0],
            [1.0, 1.0, 1.0, 1.0],
        ]);
        assert_eq!(m.invert(), Err(Error::singular_matrix(4)));
        assert_eq!(Matrix::<2, 2, f32>::zero().invert(), Err(Error::singular_matrix(2)));
    }

    #[test]
    fn test_integer_matrix_inverts_through_float() {
        // invert is float-only; convert before dividing to keep the fractions
        let m = Matrix::from_rows([[1, 2], [3, 4]]);
        assert_eq!(m.adjoint(), Matrix::from_rows([[4, -2], [-3, 1]]));
        let mf = Matrix::<2, 2, f64>::from_fn(|row, col| m.m[row][col] as f64);
        let inv = mf.invert().unwrap();
        assert_eq!(inv, Matrix::from_rows([[-2.0, 1.0], [1.5, -0.5]]));
        assert_eq!(mf * inv, Matrix::identity());
    }
}
