//! ROW x COL matrix type.
//!
//! [`Matrix`] is used for every linear and affine transform in just-rs:
//! rotations, scales, translations, view and projection matrices.
//!
//! # Convention
//!
//! Matrices are stored in **row-major** order. Both vector conventions are
//! available and the caller picks the one that matches their data:
//!
//! ```text
//! column vector:  Matrix<R, C> * Vector<C> = Vector<R>   (v'[r] = row(r) . v)
//! row vector:     Vector<R> * Matrix<R, C> = Vector<C>   (v'[c] = v . col(c))
//! ```
//!
//! Shapes are const generic parameters, so a dimension mismatch is a compile
//! error:
//!
//! ```compile_fail
//! use just_math::Matrix;
//!
//! let a = Matrix::<2, 3, i32>::zero();
//! let b = Matrix::<2, 3, i32>::zero();
//! let _ = a * b; // inner dimensions 3 and 2 differ
//! ```
//!
//! # Usage
//!
//! ```rust
//! use just_math::{Matrix, Vector};
//!
//! let a = Matrix::from_rows([[1, 2, 3], [4, 5, 6]]);
//! let b = Matrix::from_rows([[1, 0], [0, 1], [1, 1]]);
//! assert_eq!(a * b, Matrix::from_rows([[4, 5], [10, 11]]));
//! assert_eq!(a * Vector::from_array([1, 0, 1]), Vector::from_array([4, 10]));
//! ```

use std::fmt;
use std::ops::{Add, Div, Index, IndexMut, Mul, Neg, Sub};

use approx::{AbsDiffEq, RelativeEq};
use num_traits::Float;

use crate::{Scalar, Vector};

/// A ROW x COL matrix of scalar `T`, stored row-major.
///
/// # Example
///
/// ```rust
/// use just_math::Matrix;
///
/// let m = Matrix::from_rows([[1, 2], [3, 4]]);
/// assert_eq!(m[1][0], 3);
/// assert_eq!(m.transpose(), Matrix::from_rows([[1, 3], [2, 4]]));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(C)]
pub struct Matrix<const ROW: usize, const COL: usize, T> {
    /// Matrix elements in row-major order: `m[row][col]`
    pub m: [[T; COL]; ROW],
}

impl<const ROW: usize, const COL: usize, T> Matrix<ROW, COL, T> {
    /// Creates a matrix from row arrays.
    #[inline]
    pub const fn from_rows(rows: [[T; COL]; ROW]) -> Self {
        Self { m: rows }
    }

    /// Consumes the matrix and returns its rows.
    #[inline]
    pub fn to_rows(self) -> [[T; COL]; ROW] {
        self.m
    }

    /// Number of rows.
    #[inline]
    pub const fn rows(&self) -> usize {
        ROW
    }

    /// Number of columns.
    #[inline]
    pub const fn cols(&self) -> usize {
        COL
    }
}

impl<const ROW: usize, const COL: usize, T: Scalar> Matrix<ROW, COL, T> {
    /// Builds a matrix by evaluating `f(row, col)` for every element.
    #[inline]
    pub fn from_fn<F: FnMut(usize, usize) -> T>(mut f: F) -> Self {
        Self::from_rows(std::array::from_fn(|row| {
            std::array::from_fn(|col| f(row, col))
        }))
    }

    /// Creates a matrix from column arrays.
    ///
    /// Transposes the input (columns become rows internally).
    #[inline]
    pub fn from_cols(cols: [[T; ROW]; COL]) -> Self {
        Self::from_fn(|row, col| cols[col][row])
    }

    /// Creates a matrix from row vectors.
    #[inline]
    pub fn from_row_vectors(rows: [Vector<COL, T>; ROW]) -> Self {
        Self::from_rows(rows.map(Vector::to_array))
    }

    /// Creates a matrix from column vectors.
    #[inline]
    pub fn from_col_vectors(cols: [Vector<ROW, T>; COL]) -> Self {
        Self::from_cols(cols.map(Vector::to_array))
    }

    /// Zero matrix.
    #[inline]
    pub fn zero() -> Self {
        Self::from_rows([[T::zero(); COL]; ROW])
    }

    /// Returns a row as a vector.
    #[inline]
    pub fn row(&self, i: usize) -> Vector<COL, T> {
        Vector::from_array(self.m[i])
    }

    /// Returns a column as a vector.
    #[inline]
    pub fn col(&self, j: usize) -> Vector<ROW, T> {
        Vector::from_fn(|row| self.m[row][j])
    }

    /// Returns the transpose of this matrix. Exact, no arithmetic involved.
    #[inline]
    pub fn transpose(&self) -> Matrix<COL, ROW, T> {
        Matrix::from_fn(|row, col| self.m[col][row])
    }

    /// The submatrix left after deleting row `i` and column `j`.
    ///
    /// The output shape must be one row and one column smaller; this is
    /// checked at compile time.
    ///
    /// # Panics
    ///
    /// If `i >= ROW` or `j >= COL`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use just_math::Matrix;
    ///
    /// let m = Matrix::from_rows([[1, 2, 3], [4, 5, 6], [7, 8, 9]]);
    /// let minor: Matrix<2, 2, i32> = m.minor(1, 1);
    /// assert_eq!(minor, Matrix::from_rows([[1, 3], [7, 9]]));
    /// ```
    pub fn minor<const SUB_ROW: usize, const SUB_COL: usize>(
        &self,
        i: usize,
        j: usize,
    ) -> Matrix<SUB_ROW, SUB_COL, T> {
        const {
            assert!(
                SUB_ROW + 1 == ROW && SUB_COL + 1 == COL,
                "a minor drops exactly one row and one column"
            )
        };
        assert!(
            i < ROW && j < COL,
            "minor ({}, {}) out of bounds for {}x{} matrix",
            i,
            j,
            ROW,
            COL
        );

        Matrix::from_fn(|row, col| {
            let src_row = if row < i { row } else { row + 1 };
            let src_col = if col < j { col } else { col + 1 };
            self.m[src_row][src_col]
        })
    }

    /// Multiplies two matrices: `result[r][c] = self.row(r) . other.col(c)`.
    #[inline]
    pub fn mul_mat<const K: usize>(&self, other: &Matrix<COL, K, T>) -> Matrix<ROW, K, T> {
        Matrix::from_fn(|row, col| self.row(row).dot(other.col(col)))
    }

    /// Transforms a column vector: `self * v`.
    #[inline]
    pub fn mul_vector(&self, v: Vector<COL, T>) -> Vector<ROW, T> {
        Vector::from_fn(|row| v.dot(self.row(row)))
    }

    /// Transforms a row vector: `v * self`.
    #[inline]
    pub fn vector_mul(&self, v: Vector<ROW, T>) -> Vector<COL, T> {
        Vector::from_fn(|col| v.dot(self.col(col)))
    }

    /// Multiplies every element by `k`.
    #[inline]
    pub fn mul_scalar(&self, k: T) -> Self {
        Self::from_fn(|row, col| self.m[row][col] * k)
    }

    /// Divides every element by `k`.
    #[inline]
    pub fn div_scalar(&self, k: T) -> Self {
        Self::from_fn(|row, col| self.m[row][col] / k)
    }
}

impl<const N: usize, T: Scalar> Matrix<N, N, T> {
    /// Identity matrix.
    #[inline]
    pub fn identity() -> Self {
        Self::from_fn(|row, col| if row == col { T::one() } else { T::zero() })
    }

    /// Creates a diagonal matrix.
    #[inline]
    pub fn from_diagonal(d: Vector<N, T>) -> Self {
        Self::from_fn(|row, col| if row == col { d[row] } else { T::zero() })
    }

    /// The main diagonal.
    #[inline]
    pub fn diagonal(&self) -> Vector<N, T> {
        Vector::from_fn(|i| self.m[i][i])
    }
}

impl<const ROW: usize, const COL: usize, T: Scalar + Float> Matrix<ROW, COL, T> {
    /// Returns true if all elements are finite (not NaN or infinite).
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.m.iter().flatten().all(|x| x.is_finite())
    }
}

impl<const ROW: usize, const COL: usize, T: Scalar> Default for Matrix<ROW, COL, T> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<const ROW: usize, const COL: usize, T> Index<usize> for Matrix<ROW, COL, T> {
    type Output = [T; COL];

    #[inline]
    fn index(&self, i: usize) -> &[T; COL] {
        &self.m[i]
    }
}

impl<const ROW: usize, const COL: usize, T> IndexMut<usize> for Matrix<ROW, COL, T> {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut [T; COL] {
        &mut self.m[i]
    }
}

// Matrix + Matrix
impl<const ROW: usize, const COL: usize, T: Scalar> Add for Matrix<ROW, COL, T> {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::from_fn(|row, col| self.m[row][col] + rhs.m[row][col])
    }
}

// Matrix - Matrix
impl<const ROW: usize, const COL: usize, T: Scalar> Sub for Matrix<ROW, COL, T> {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::from_fn(|row, col| self.m[row][col] - rhs.m[row][col])
    }
}

impl<const ROW: usize, const COL: usize, T: Scalar> Neg for Matrix<ROW, COL, T> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self::from_fn(|row, col| -self.m[row][col])
    }
}

// Matrix<ROW, COM> * Matrix<COM, COL>
impl<const ROW: usize, const COM: usize, const COL: usize, T: Scalar> Mul<Matrix<COM, COL, T>>
    for Matrix<ROW, COM, T>
{
    type Output = Matrix<ROW, COL, T>;

    #[inline]
    fn mul(self, rhs: Matrix<COM, COL, T>) -> Matrix<ROW, COL, T> {
        self.mul_mat(&rhs)
    }
}

// Matrix * column vector
impl<const ROW: usize, const COL: usize, T: Scalar> Mul<Vector<COL, T>> for Matrix<ROW, COL, T> {
    type Output = Vector<ROW, T>;

    #[inline]
    fn mul(self, rhs: Vector<COL, T>) -> Vector<ROW, T> {
        self.mul_vector(rhs)
    }
}

// Row vector * Matrix
impl<const ROW: usize, const COL: usize, T: Scalar> Mul<Matrix<ROW, COL, T>> for Vector<ROW, T> {
    type Output = Vector<COL, T>;

    #[inline]
    fn mul(self, rhs: Matrix<ROW, COL, T>) -> Vector<COL, T> {
        rhs.vector_mul(self)
    }
}

// Matrix * k, k * Matrix, Matrix / k
macro_rules! impl_matrix_scalar_ops {
    ($($t:ty),*) => {$(
        impl<const ROW: usize, const COL: usize> Mul<$t> for Matrix<ROW, COL, $t> {
            type Output = Self;

            #[inline]
            fn mul(self, rhs: $t) -> Self {
                self.mul_scalar(rhs)
            }
        }

        impl<const ROW: usize, const COL: usize> Mul<Matrix<ROW, COL, $t>> for $t {
            type Output = Matrix<ROW, COL, $t>;

            #[inline]
            fn mul(self, rhs: Matrix<ROW, COL, $t>) -> Matrix<ROW, COL, $t> {
                rhs.mul_scalar(self)
            }
        }

        impl<const ROW: usize, const COL: usize> Div<$t> for Matrix<ROW, COL, $t> {
            type Output = Self;

            #[inline]
            fn div(self, rhs: $t) -> Self {
                self.div_scalar(rhs)
            }
        }
    )*};
}

impl_matrix_scalar_ops!(f32, f64, i8, i16, i32, i64, i128, isize);

impl<const ROW: usize, const COL: usize, T> From<[[T; COL]; ROW]> for Matrix<ROW, COL, T> {
    #[inline]
    fn from(rows: [[T; COL]; ROW]) -> Self {
        Self::from_rows(rows)
    }
}

impl<const ROW: usize, const COL: usize, T: fmt::Display> fmt::Display for Matrix<ROW, COL, T> {
    /// One bracketed row per line; precision and width are forwarded.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.m.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            f.write_str("[")?;
            for (j, value) in row.iter().enumerate() {
                if j > 0 {
                    f.write_str(", ")?;
                }
                match (f.width(), f.precision()) {
                    (Some(w), Some(p)) => write!(f, "{value:>w$.p$}")?,
                    (Some(w), None) => write!(f, "{value:>w$}")?,
                    (None, Some(p)) => write!(f, "{value:.p$}")?,
                    (None, None) => write!(f, "{value}")?,
                }
            }
            f.write_str("]")?;
        }
        Ok(())
    }
}

impl<const ROW: usize, const COL: usize, T: AbsDiffEq> AbsDiffEq for Matrix<ROW, COL, T>
where
    T::Epsilon: Copy,
{
    type Epsilon = T::Epsilon;

    fn default_epsilon() -> T::Epsilon {
        T::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: T::Epsilon) -> bool {
        self.m
            .iter()
            .flatten()
            .zip(other.m.iter().flatten())
            .all(|(a, b)| a.abs_diff_eq(b, epsilon))
    }
}

impl<const ROW: usize, const COL: usize, T: RelativeEq> RelativeEq for Matrix<ROW, COL, T>
where
    T::Epsilon: Copy,
{
    fn default_max_relative() -> T::Epsilon {
        T::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: T::Epsilon, max_relative: T::Epsilon) -> bool {
        self.m
            .iter()
            .flatten()
            .zip(other.m.iter().flatten())
            .all(|(a, b)| a.relative_eq(b, epsilon, max_relative))
    }
}
