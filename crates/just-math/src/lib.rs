//! # just-math
//!
//! Fixed-size linear algebra for a 3D renderer.
//!
//! This crate provides the numeric containers and their algebra:
//!
//! - [`Vector`] - N-component direction/magnitude with dot, cross, length
//! - [`Point`] - N-component position, including homogeneous `Point<4, T>`
//! - [`Matrix`] - ROW x COL matrix with products, transpose and minors
//! - [`Determinant`] - determinant, cofactor, adjoint and inverse for N <= 4
//!
//! # Design
//!
//! Dimensions are const generic parameters, so every shape check happens at
//! compile time. Dimension-specific behaviour (2D/3D cross product, the 1x1
//! and 2x2 determinant base cases, homogeneous point arithmetic) lives in
//! impls on concrete dimensions rather than in runtime branches.
//!
//! Matrices are **row-major**. Column vectors (`matrix * vector`) and row
//! vectors (`vector * matrix`) are both supported.
//!
//! # Usage
//!
//! ```rust
//! use just_math::{Determinant, Matrix3f, Vector3f};
//!
//! let m = Matrix3f::from_rows([
//!     [2.0, 0.0, 0.0],
//!     [0.0, 4.0, 0.0],
//!     [0.0, 0.0, 8.0],
//! ]);
//! assert_eq!(m.det(), 64.0);
//!
//! let inv = m.invert().unwrap();
//! assert_eq!(inv * (m * Vector3f::new(1.0, 2.0, 3.0)), Vector3f::new(1.0, 2.0, 3.0));
//! ```
//!
//! # Dependencies
//!
//! - [`num-traits`](num_traits) - Generic scalar bound
//! - [`approx`] - Tolerance comparisons for floating point containers
//! - [`just-core`](just_core) - Error types
//!
//! # Used By
//!
//! - `just-transform` - Transform and camera matrices
//! - `just-geometry` - Rays and hit records

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod determinant;
mod matrix;
mod point;
mod scalar;
#[cfg(feature = "serde")]
mod serde_impl;
mod vector;

pub use determinant::*;
pub use matrix::*;
pub use point::*;
pub use scalar::Scalar;
pub use vector::*;

/// 2D vector.
pub type Vector2<T> = Vector<2, T>;
/// 3D vector.
pub type Vector3<T> = Vector<3, T>;
/// 4D vector.
pub type Vector4<T> = Vector<4, T>;

/// 2D `f32` vector.
pub type Vector2f = Vector<2, f32>;
/// 3D `f32` vector.
pub type Vector3f = Vector<3, f32>;
/// 4D `f32` vector.
pub type Vector4f = Vector<4, f32>;
/// 2D `i32` vector.
pub type Vector2i = Vector<2, i32>;
/// 3D `i32` vector.
pub type Vector3i = Vector<3, i32>;

/// 2D `f32` point.
pub type Point2f = Point<2, f32>;
/// 3D `f32` point.
pub type Point3f = Point<3, f32>;
/// Homogeneous `f32` point.
pub type Point4f = Point<4, f32>;

/// 2x2 `f32` matrix.
pub type Matrix2f = Matrix<2, 2, f32>;
/// 3x3 `f32` matrix.
pub type Matrix3f = Matrix<3, 3, f32>;
/// 4x4 `f32` matrix.
pub type Matrix4f = Matrix<4, 4, f32>;
/// 4x4 `f64` matrix.
pub type Matrix4d = Matrix<4, 4, f64>;

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```
/// use just_math::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{
        Determinant, Matrix, Matrix2f, Matrix3f, Matrix4d, Matrix4f, Point, Point2f, Point3f,
        Point4f, Scalar, Vector, Vector2, Vector2f, Vector2i, Vector3, Vector3f, Vector3i,
        Vector4, Vector4f,
    };
}
