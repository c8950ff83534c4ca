//! Scalar bound shared by every container.

use std::fmt::Debug;
use std::ops::Neg;

use num_traits::Num;

/// Numeric element type of [`Vector`](crate::Vector), [`Point`](crate::Point)
/// and [`Matrix`](crate::Matrix).
///
/// Implemented for every `Copy` signed number: `f32`, `f64`, `i8`..`i128`
/// and `isize`. Negation is required because cofactors alternate sign.
///
/// Operations that need a square root or exact division (`length`,
/// `normalize`, `invert`) additionally require [`num_traits::Float`].
pub trait Scalar: Copy + Debug + Num + Neg<Output = Self> {
    /// Two, used for midpoints.
    #[inline]
    fn two() -> Self {
        Self::one() + Self::one()
    }
}

impl<T> Scalar for T where T: Copy + Debug + Num + Neg<Output = T> {}

/// Applies the cofactor sign `(-1)^(row + col)` to `value`.
#[inline]
pub(crate) fn checkerboard<T: Scalar>(value: T, row: usize, col: usize) -> T {
    if (row + col) % 2 == 1 { -value } else { value }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two() {
        assert_eq!(<f32 as Scalar>::two(), 2.0);
        assert_eq!(<i64 as Scalar>::two(), 2);
    }

    #[test]
    fn test_checkerboard() {
        assert_eq!(checkerboard(3, 0, 0), 3);
        assert_eq!(checkerboard(3, 0, 1), -3);
        assert_eq!(checkerboard(3, 1, 1), 3);
        assert_eq!(checkerboard(3.0, 2, 1), -3.0);
    }
}
