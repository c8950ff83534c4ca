//! N-dimensional point type.
//!
//! A [`Point`] is a position. Subtracting two points gives the [`Vector`]
//! between them; a point plus a vector is another point.
//!
//! Point plus vector works for any `N`. Point plus point and point minus
//! point are implemented for `N` in 1..=8; `N = 4` is homogeneous.
//!
//! # Homogeneous points
//!
//! `Point<4, T>` is a homogeneous point `(x, y, z, w)` and does not follow the
//! general rules:
//!
//! - `p + q` is the **midpoint** of the xyz parts with `w = 1`, not a sum.
//! - `p - q` is the `Vector<3, T>` of the xyz differences. `w` is ignored and
//!   no perspective divide happens, so this is only meaningful for affine
//!   (`w = 1`) points.
//!
//! ```rust
//! use just_math::Point4f;
//!
//! let a = Point4f::new(2.0, 0.0, 0.0, 1.0);
//! let b = Point4f::new(0.0, 2.0, 0.0, 1.0);
//! assert_eq!(a + b, Point4f::new(1.0, 1.0, 0.0, 1.0));
//! ```

use std::fmt;
use std::ops::{Add, Index, IndexMut, Sub};

use approx::{AbsDiffEq, RelativeEq};
use just_core::{Error, Result};
use num_traits::Float;

use crate::vector::write_components;
use crate::{Scalar, Vector};

/// An N-component position of scalar `T`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct Point<const N: usize, T> {
    /// Coordinates in order.
    pub data: [T; N],
}

impl<const N: usize, T> Point<N, T> {
    /// Creates a point from a coordinate array.
    #[inline]
    pub const fn from_array(data: [T; N]) -> Self {
        Self { data }
    }

    /// Consumes the point and returns its coordinates.
    #[inline]
    pub fn to_array(self) -> [T; N] {
        self.data
    }
}

impl<const N: usize, T: Scalar> Point<N, T> {
    /// The origin.
    #[inline]
    pub fn origin() -> Self {
        Self::from_array([T::zero(); N])
    }

    /// The position vector from the origin to this point.
    #[inline]
    pub fn to_vector(self) -> Vector<N, T> {
        Vector::from_array(self.data)
    }

    /// The point at the tip of `v` placed at the origin.
    #[inline]
    pub fn from_vector(v: Vector<N, T>) -> Self {
        Self::from_array(v.data)
    }
}

impl<T: Scalar> Point<2, T> {
    /// Creates a 2D point.
    #[inline]
    pub const fn new(x: T, y: T) -> Self {
        Self::from_array([x, y])
    }

    /// X coordinate.
    #[inline]
    pub fn x(&self) -> T {
        self.data[0]
    }

    /// Y coordinate.
    #[inline]
    pub fn y(&self) -> T {
        self.data[1]
    }
}

impl<T: Scalar> Point<3, T> {
    /// Creates a 3D point.
    #[inline]
    pub const fn new(x: T, y: T, z: T) -> Self {
        Self::from_array([x, y, z])
    }

    /// X coordinate.
    #[inline]
    pub fn x(&self) -> T {
        self.data[0]
    }

    /// Y coordinate.
    #[inline]
    pub fn y(&self) -> T {
        self.data[1]
    }

    /// Z coordinate.
    #[inline]
    pub fn z(&self) -> T {
        self.data[2]
    }

    /// Homogeneous form with `w = 1`.
    #[inline]
    pub fn to_homogeneous(self) -> Point<4, T> {
        Point::<4, T>::new(self.x(), self.y(), self.z(), T::one())
    }
}

impl<T: Scalar> Point<4, T> {
    /// Creates a homogeneous point.
    #[inline]
    pub const fn new(x: T, y: T, z: T, w: T) -> Self {
        Self::from_array([x, y, z, w])
    }

    /// X coordinate.
    #[inline]
    pub fn x(&self) -> T {
        self.data[0]
    }

    /// Y coordinate.
    #[inline]
    pub fn y(&self) -> T {
        self.data[1]
    }

    /// Z coordinate.
    #[inline]
    pub fn z(&self) -> T {
        self.data[2]
    }

    /// Homogeneous weight.
    #[inline]
    pub fn w(&self) -> T {
        self.data[3]
    }
}

impl<T: Scalar + Float> Point<4, T> {
    /// Divides xyz through by `w`.
    ///
    /// # Errors
    ///
    /// [`Error::PointAtInfinity`] when `w == 0`.
    pub fn to_cartesian(self) -> Result<Point<3, T>> {
        let w = self.w();
        if w == T::zero() {
            return Err(Error::PointAtInfinity);
        }
        Ok(Point::<3, T>::new(self.x() / w, self.y() / w, self.z() / w))
    }
}

impl<const N: usize, T: Scalar> Default for Point<N, T> {
    fn default() -> Self {
        Self::origin()
    }
}

impl<const N: usize, T> Index<usize> for Point<N, T> {
    type Output = T;

    #[inline]
    fn index(&self, i: usize) -> &T {
        &self.data[i]
    }
}

impl<const N: usize, T> IndexMut<usize> for Point<N, T> {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut T {
        &mut self.data[i]
    }
}

// Point + Point (pairwise sum) and Point - Point -> Vector
macro_rules! impl_affine_point_ops {
    ($($n:literal),*) => {$(
        impl<T: Scalar> Add for Point<$n, T> {
            type Output = Self;

            #[inline]
            fn add(self, rhs: Self) -> Self {
                Self::from_array(std::array::from_fn(|i| self.data[i] + rhs.data[i]))
            }
        }

        impl<T: Scalar> Sub for Point<$n, T> {
            type Output = Vector<$n, T>;

            #[inline]
            fn sub(self, rhs: Self) -> Vector<$n, T> {
                Vector::from_fn(|i| self.data[i] - rhs.data[i])
            }
        }
    )*};
}

impl_affine_point_ops!(1, 2, 3, 5, 6, 7, 8);

// Homogeneous Point + Point: midpoint with w = 1
impl<T: Scalar> Add for Point<4, T> {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        let half = |i: usize| (self.data[i] + rhs.data[i]) / T::two();
        Self::new(half(0), half(1), half(2), T::one())
    }
}

// Homogeneous Point - Point: xyz difference, w ignored
impl<T: Scalar> Sub for Point<4, T> {
    type Output = Vector<3, T>;

    #[inline]
    fn sub(self, rhs: Self) -> Vector<3, T> {
        Vector::from_fn(|i| self.data[i] - rhs.data[i])
    }
}

// Point + Vector
impl<const N: usize, T: Scalar> Add<Vector<N, T>> for Point<N, T> {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Vector<N, T>) -> Self {
        Self::from_vector(self.to_vector() + rhs)
    }
}

// Point - Vector
impl<const N: usize, T: Scalar> Sub<Vector<N, T>> for Point<N, T> {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Vector<N, T>) -> Self {
        Self::from_vector(self.to_vector() - rhs)
    }
}

impl<const N: usize, T> From<[T; N]> for Point<N, T> {
    #[inline]
    fn from(data: [T; N]) -> Self {
        Self::from_array(data)
    }
}

impl<const N: usize, T: fmt::Display> fmt::Display for Point<N, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_components(f, &self.data)
    }
}

impl<const N: usize, T: AbsDiffEq> AbsDiffEq for Point<N, T>
where
    T::Epsilon: Copy,
{
    type Epsilon = T::Epsilon;

    fn default_epsilon() -> T::Epsilon {
        T::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: T::Epsilon) -> bool {
        self.data
            .iter()
            .zip(other.data.iter())
            .all(|(a, b)| a.abs_diff_eq(b, epsilon))
    }
}

impl<const N: usize, T: RelativeEq> RelativeEq for Point<N, T>
where
    T::Epsilon: Copy,
{
    fn default_max_relative() -> T::Epsilon {
        T::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: T::Epsilon, max_relative: T::Epsilon) -> bool {
        self.data
            .iter()
            .zip(other.data.iter())
            .all(|(a, b)| a.relative_eq(b, epsilon, max_relative))
    }
}
