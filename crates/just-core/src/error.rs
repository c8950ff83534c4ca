//! Error types for just-rs operations.
//!
//! Every fallible numeric operation in the workspace reports through the
//! [`Error`] enum defined here. The failure modes are all precondition
//! violations that would otherwise produce silent infinities or NaNs:
//!
//! - Inverting a singular matrix
//! - Normalizing a zero-length vector
//! - Building a projection from a degenerate frustum
//! - Dividing a homogeneous point with `w == 0`
//!
//! # Usage
//!
//! ```rust
//! use just_core::{Error, Result};
//!
//! fn reciprocal(x: f32) -> Result<f32> {
//!     if x == 0.0 {
//!         return Err(Error::ZeroLength);
//!     }
//!     Ok(1.0 / x)
//! }
//! assert!(reciprocal(0.0).is_err());
//! ```
//!
//! # Dependencies
//!
//! - [`thiserror`] - For derive macro error implementation
//!
//! # Used By
//!
//! - `just-math` - Inversion and normalization
//! - `just-transform` - Projection builders and camera
//! - `just-cli` - Wrapped with `anyhow` context

use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in vector, matrix and transform computations.
///
/// # Categories
///
/// - **Matrix errors**: [`SingularMatrix`](Error::SingularMatrix)
/// - **Vector errors**: [`ZeroLength`](Error::ZeroLength)
/// - **Projection errors**: [`DegenerateFrustum`](Error::DegenerateFrustum),
///   [`PointAtInfinity`](Error::PointAtInfinity)
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// The matrix has a zero determinant and cannot be inverted.
    ///
    /// # Example
    ///
    /// ```rust
    /// use just_core::Error;
    ///
    /// let err = Error::singular_matrix(3);
    /// assert!(err.to_string().contains("3x3"));
    /// ```
    #[error("singular {size}x{size} matrix cannot be inverted")]
    SingularMatrix {
        /// Matrix dimension
        size: usize,
    },

    /// A vector with zero length was normalized.
    #[error("cannot normalize a zero-length vector")]
    ZeroLength,

    /// Projection parameters describe an empty or infinite frustum.
    ///
    /// Returned when `near == far`, when the field of view yields a zero or
    /// non-finite half-height, or when the aspect ratio is zero.
    #[error("degenerate frustum: near={near}, far={far}, fov={fov}, aspect={aspect}")]
    DegenerateFrustum {
        /// Near plane distance
        near: f32,
        /// Far plane distance
        far: f32,
        /// Vertical field of view in degrees
        fov: f32,
        /// Width / height
        aspect: f32,
    },

    /// A homogeneous point with `w == 0` was divided through by `w`.
    #[error("point at infinity (w = 0) has no cartesian position")]
    PointAtInfinity,
}

impl Error {
    /// Creates an [`Error::SingularMatrix`] error.
    #[inline]
    pub fn singular_matrix(size: usize) -> Self {
        Self::SingularMatrix { size }
    }

    /// Creates an [`Error::DegenerateFrustum`] error.
    #[inline]
    pub fn degenerate_frustum(near: f32, far: f32, fov: f32, aspect: f32) -> Self {
        Self::DegenerateFrustum {
            near,
            far,
            fov,
            aspect,
        }
    }

    /// Returns `true` if this error comes from a division by zero in
    /// matrix or vector algebra.
    #[inline]
    pub fn is_algebra_error(&self) -> bool {
        matches!(self, Self::SingularMatrix { .. } | Self::ZeroLength)
    }

    /// Returns `true` if this error comes from a projection.
    #[inline]
    pub fn is_projection_error(&self) -> bool {
        matches!(self, Self::DegenerateFrustum { .. } | Self::PointAtInfinity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_singular_matrix() {
        let err = Error::singular_matrix(4);
        assert!(err.to_string().contains("4x4"));
        assert!(err.is_algebra_error());
        assert!(!err.is_projection_error());
    }

    #[test]
    fn test_degenerate_frustum() {
        let err = Error::degenerate_frustum(1.0, 1.0, 90.0, 1.0);
        let msg = err.to_string();
        assert!(msg.contains("near=1"));
        assert!(msg.contains("fov=90"));
        assert!(err.is_projection_error());
    }

    #[test]
    fn test_zero_length() {
        assert!(Error::ZeroLength.is_algebra_error());
        assert_eq!(Error::ZeroLength.to_string(), "cannot normalize a zero-length vector");
    }
}
