//! N-dimensional vector type.
//!
//! [`Vector`] is a direction/magnitude quantity with a compile-time
//! component count. There is no normalization invariant; call
//! [`Vector::normalize`] when a unit vector is needed.
//!
//! # Usage
//!
//! ```rust
//! use just_math::Vector3f;
//!
//! let a = Vector3f::new(1.0, 0.0, 0.0);
//! let b = Vector3f::new(0.0, 1.0, 0.0);
//! assert_eq!(a.cross(b), Vector3f::new(0.0, 0.0, 1.0));
//! assert_eq!(a.dot(b), 0.0);
//! ```

use std::fmt;
use std::ops::{Add, AddAssign, Div, Index, IndexMut, Mul, Neg, Sub, SubAssign};

use approx::{AbsDiffEq, RelativeEq};
use just_core::{Error, Result};
use num_traits::Float;

use crate::Scalar;

/// An N-component vector of scalar `T`.
///
/// Components are accessed by index `v[i]` for any `N`, and through the
/// named accessors `x()`, `y()`, `z()`, `w()` for `N` = 2, 3, 4.
///
/// # Example
///
/// ```rust
/// use just_math::Vector;
///
/// let v = Vector::from_array([1, 2, 3, 4, 5]);
/// assert_eq!(v.dot(v), 55);
/// assert_eq!(v[4], 5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct Vector<const N: usize, T> {
    /// Components in order.
    pub data: [T; N],
}

impl<const N: usize, T> Vector<N, T> {
    /// Creates a vector from a component array.
    #[inline]
    pub const fn from_array(data: [T; N]) -> Self {
        Self { data }
    }

    /// Consumes the vector and returns its components.
    #[inline]
    pub fn to_array(self) -> [T; N] {
        self.data
    }

    /// Components as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Iterator over the components.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    /// Number of components.
    #[inline]
    pub const fn len(&self) -> usize {
        N
    }

    /// Returns `true` for the zero-dimensional vector.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        N == 0
    }
}

impl<const N: usize, T: Scalar> Vector<N, T> {
    /// Builds a vector by evaluating `f` at every index.
    #[inline]
    pub fn from_fn<F: FnMut(usize) -> T>(f: F) -> Self {
        Self::from_array(std::array::from_fn(f))
    }

    /// Vector with every component equal to `value`.
    #[inline]
    pub fn splat(value: T) -> Self {
        Self::from_array([value; N])
    }

    /// The zero vector.
    #[inline]
    pub fn zero() -> Self {
        Self::splat(T::zero())
    }

    /// Applies `f` to every component.
    #[inline]
    pub fn map<U, F: FnMut(T) -> U>(self, f: F) -> Vector<N, U> {
        Vector::from_array(self.data.map(f))
    }

    #[inline]
    fn zip_with<F: Fn(T, T) -> T>(self, rhs: Self, f: F) -> Self {
        Self::from_fn(|i| f(self.data[i], rhs.data[i]))
    }

    /// Dot product.
    #[inline]
    pub fn dot(self, other: Self) -> T {
        self.data
            .iter()
            .zip(other.data.iter())
            .fold(T::zero(), |sum, (&a, &b)| sum + a * b)
    }

    /// Squared length (avoids sqrt, works for integers).
    #[inline]
    pub fn length_squared(self) -> T {
        self.dot(self)
    }

    /// Multiplies every component by `k`.
    #[inline]
    pub fn mul_scalar(self, k: T) -> Self {
        self.map(|c| c * k)
    }

    /// Divides every component by `k`.
    #[inline]
    pub fn div_scalar(self, k: T) -> Self {
        self.map(|c| c / k)
    }
}

impl<const N: usize, T: Scalar + Float> Vector<N, T> {
    /// Euclidean length, `sqrt(sum of squares)`.
    ///
    /// When the sum of squares overflows or leaves the normal range, the
    /// components are first scaled by the largest magnitude, so large and
    /// tiny vectors keep a finite non-zero length.
    #[inline]
    pub fn length(self) -> T {
        let squared = self.length_squared();
        if squared.is_normal() {
            return squared.sqrt();
        }
        let scale = self.max_abs();
        if scale == T::zero() || !scale.is_finite() {
            return squared.sqrt();
        }
        self.div_scalar(scale).length_squared().sqrt() * scale
    }

    /// Largest absolute component.
    #[inline]
    pub fn max_abs(self) -> T {
        self.data.iter().fold(T::zero(), |max, c| max.max(c.abs()))
    }

    /// Returns the unit vector pointing in the same direction.
    ///
    /// Components containing NaN or infinity give a non-finite result.
    ///
    /// # Errors
    ///
    /// [`Error::ZeroLength`] if every component is zero.
    ///
    /// # Example
    ///
    /// ```rust
    /// use approx::assert_abs_diff_eq;
    /// use just_math::Vector3f;
    ///
    /// let v = Vector3f::new(3.0, 0.0, 4.0).normalize().unwrap();
    /// assert_abs_diff_eq!(v, Vector3f::new(0.6, 0.0, 0.8), epsilon = 1e-6);
    /// assert!(Vector3f::zero().normalize().is_err());
    /// ```
    pub fn normalize(self) -> Result<Self> {
        let len = self.length();
        if len == T::zero() {
            return Err(Error::ZeroLength);
        }
        Ok(self.div_scalar(len))
    }

    /// Returns true if all components are finite (not NaN or infinite).
    #[inline]
    pub fn is_finite(self) -> bool {
        self.data.iter().all(|c| c.is_finite())
    }
}

impl<T: Scalar> Vector<2, T> {
    /// Creates a 2D vector.
    #[inline]
    pub const fn new(x: T, y: T) -> Self {
        Self::from_array([x, y])
    }

    /// X component.
    #[inline]
    pub fn x(&self) -> T {
        self.data[0]
    }

    /// Y component.
    #[inline]
    pub fn y(&self) -> T {
        self.data[1]
    }

    /// 2D cross product: the z component of the 3D cross product of
    /// `(self, 0)` and `(other, 0)`.
    #[inline]
    pub fn cross(self, other: Self) -> T {
        self.x() * other.y() - other.x() * self.y()
    }
}

impl<T: Scalar> Vector<3, T> {
    /// Creates a 3D vector.
    #[inline]
    pub const fn new(x: T, y: T, z: T) -> Self {
        Self::from_array([x, y, z])
    }

    /// X component.
    #[inline]
    pub fn x(&self) -> T {
        self.data[0]
    }

    /// Y component.
    #[inline]
    pub fn y(&self) -> T {
        self.data[1]
    }

    /// Z component.
    #[inline]
    pub fn z(&self) -> T {
        self.data[2]
    }

    /// Cross product.
    #[inline]
    pub fn cross(self, other: Self) -> Self {
        Self::new(
            self.y() * other.z() - other.y() * self.z(),
            self.z() * other.x() - other.z() * self.x(),
            self.x() * other.y() - other.x() * self.y(),
        )
    }

    /// Appends a fourth component.
    #[inline]
    pub fn extend(self, w: T) -> Vector<4, T> {
        Vector::<4, T>::new(self.x(), self.y(), self.z(), w)
    }
}

impl<T: Scalar> Vector<4, T> {
    /// Creates a 4D vector.
    #[inline]
    pub const fn new(x: T, y: T, z: T, w: T) -> Self {
        Self::from_array([x, y, z, w])
    }

    /// X component.
    #[inline]
    pub fn x(&self) -> T {
        self.data[0]
    }

    /// Y component.
    #[inline]
    pub fn y(&self) -> T {
        self.data[1]
    }

    /// Z component.
    #[inline]
    pub fn z(&self) -> T {
        self.data[2]
    }

    /// W component.
    #[inline]
    pub fn w(&self) -> T {
        self.data[3]
    }

    /// Drops the fourth component.
    #[inline]
    pub fn truncate(self) -> Vector<3, T> {
        Vector::<3, T>::new(self.x(), self.y(), self.z())
    }
}

impl<const N: usize, T: Scalar> Default for Vector<N, T> {
    fn default() -> Self {
        Self::zero()
    }
}

// Indexing
impl<const N: usize, T> Index<usize> for Vector<N, T> {
    type Output = T;

    #[inline]
    fn index(&self, i: usize) -> &T {
        &self.data[i]
    }
}

impl<const N: usize, T> IndexMut<usize> for Vector<N, T> {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut T {
        &mut self.data[i]
    }
}

impl<const N: usize, T: Scalar> Neg for Vector<N, T> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        self.map(|c| -c)
    }
}

// Vector + Vector
impl<const N: usize, T: Scalar> Add for Vector<N, T> {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        self.zip_with(rhs, |a, b| a + b)
    }
}

// Vector - Vector
impl<const N: usize, T: Scalar> Sub for Vector<N, T> {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        self.zip_with(rhs, |a, b| a - b)
    }
}

// Vector * Vector (component-wise)
impl<const N: usize, T: Scalar> Mul for Vector<N, T> {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        self.zip_with(rhs, |a, b| a * b)
    }
}

// Vector / Vector (component-wise)
impl<const N: usize, T: Scalar> Div for Vector<N, T> {
    type Output = Self;

    #[inline]
    fn div(self, rhs: Self) -> Self {
        self.zip_with(rhs, |a, b| a / b)
    }
}

impl<const N: usize, T: Scalar> AddAssign for Vector<N, T> {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<const N: usize, T: Scalar> SubAssign for Vector<N, T> {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

// Vector * k, k * Vector, Vector / k
macro_rules! impl_vector_scalar_ops {
    ($($t:ty),*) => {$(
        impl<const N: usize> Mul<$t> for Vector<N, $t> {
            type Output = Self;

            #[inline]
            fn mul(self, rhs: $t) -> Self {
                self.mul_scalar(rhs)
            }
        }

        impl<const N: usize> Mul<Vector<N, $t>> for $t {
            type Output = Vector<N, $t>;

            #[inline]
            fn mul(self, rhs: Vector<N, $t>) -> Vector<N, $t> {
                rhs.mul_scalar(self)
            }
        }

        impl<const N: usize> Div<$t> for Vector<N, $t> {
            type Output = Self;

            #[inline]
            fn div(self, rhs: $t) -> Self {
                self.div_scalar(rhs)
            }
        }
    )*};
}

impl_vector_scalar_ops!(f32, f64, i8, i16, i32, i64, i128, isize);

impl<const N: usize, T> From<[T; N]> for Vector<N, T> {
    #[inline]
    fn from(data: [T; N]) -> Self {
        Self::from_array(data)
    }
}

impl<const N: usize, T> From<Vector<N, T>> for [T; N] {
    #[inline]
    fn from(v: Vector<N, T>) -> [T; N] {
        v.data
    }
}

impl<const N: usize, T: fmt::Display> fmt::Display for Vector<N, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_components(f, &self.data)
    }
}

/// Writes `(a, b, c)`, forwarding the formatter's precision.
pub(crate) fn write_components<T: fmt::Display>(
    f: &mut fmt::Formatter<'_>,
    components: &[T],
) -> fmt::Result {
    f.write_str("(")?;
    for (i, c) in components.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        match f.precision() {
            Some(p) => write!(f, "{c:.p$}")?,
            None => write!(f, "{c}")?,
        }
    }
    f.write_str(")")
}

impl<const N: usize, T: AbsDiffEq> AbsDiffEq for Vector<N, T>
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

impl<const N: usize, T: RelativeEq> RelativeEq for Vector<N, T>
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Vector2f, Vector3f, Vector3i};
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    #[test]
    fn test_vector_new() {
        let v = Vector3f::new(1.0, 2.0, 3.0);
        assert_eq!(v.x(), 1.0);
        assert_eq!(v.y(), 2.0);
        assert_eq!(v.z(), 3.0);
        assert_eq!(v[2], 3.0);
    }

    #[test]
    fn test_vector_ops() {
        let a = Vector3f::new(1.0, 2.0, 3.0);
        let b = Vector3f::new(4.0, 5.0, 6.0);

        assert_eq!(a + b, Vector3f::new(5.0, 7.0, 9.0));
        assert_eq!(b - a, Vector3f::new(3.0, 3.0, 3.0));
        assert_eq!(a * b, Vector3f::new(4.0, 10.0, 18.0));
        assert_eq!(b / a, Vector3f::new(4.0, 2.5, 2.0));
        assert_eq!(a * 2.0, Vector3f::new(2.0, 4.0, 6.0));
        assert_eq!(2.0 * a, Vector3f::new(2.0, 4.0, 6.0));
        assert_eq!(b / 2.0, Vector3f::new(2.0, 2.5, 3.0));
        assert_eq!(-a, Vector3f::new(-1.0, -2.0, -3.0));
    }

    #[test]
    fn test_vector_ops_do_not_mutate() {
        let a = Vector3i::new(1, 2, 3);
        let b = Vector3i::new(1, 1, 1);
        let _ = a + b;
        assert_eq!(a, Vector3i::new(1, 2, 3));

        let mut c = a;
        c += b;
        c -= Vector3i::new(0, 0, 4);
        assert_eq!(c, Vector3i::new(2, 3, 0));
    }

    #[test]
    fn test_scalar_ops_narrow_and_wide_ints() {
        let v: Vector<3, i8> = Vector::from_array([1, -2, 3]);
        assert_eq!(v * 3i8, Vector::from_array([3, -6, 9]));
        assert_eq!(3i8 * v, v * 3);
        let w: Vector<2, isize> = Vector::from_array([10, -4]);
        assert_eq!(w / 2isize, Vector::from_array([5, -2]));
        let big: Vector<2, i128> = Vector::from_array([1i128 << 100, 1]);
        assert_eq!(big * 2i128, Vector::from_array([1i128 << 101, 2]));
    }

    #[test]
    fn test_vector_dot() {
        let a = Vector3f::new(1.0, 2.0, 3.0);
        let b = Vector3f::new(4.0, 5.0, 6.0);
        assert_eq!(a.dot(b), 32.0);
        assert_eq!(a.dot(b), b.dot(a));
    }

    #[test]
    fn test_cross_2d() {
        let a = Vector2f::new(1.0, 0.0);
        let b = Vector2f::new(0.0, 1.0);
        assert_eq!(a.cross(b), 1.0);
        assert_eq!(b.cross(a), -1.0);
    }

    #[test]
    fn test_cross_3d() {
        let a = Vector3i::new(1, 2, 3);
        let b = Vector3i::new(-4, 0, 7);
        let c = a.cross(b);
        assert_eq!(c, -b.cross(a));
        assert_eq!(a.dot(c), 0);
        assert_eq!(b.dot(c), 0);
        assert_eq!(Vector3i::new(1, 0, 0).cross(Vector3i::new(0, 1, 0)), Vector3i::new(0, 0, 1));
    }

    #[test]
    fn test_length_and_normalize() {
        let v = Vector3f::new(2.0, 3.0, 6.0);
        assert_eq!(v.length(), 7.0);
        assert_eq!(v.length_squared(), 49.0);

        let n = v.normalize().unwrap();
        assert_abs_diff_eq!(n.length(), 1.0, epsilon = 1e-6);
        assert_abs_diff_eq!(n, Vector3f::new(2.0 / 7.0, 3.0 / 7.0, 6.0 / 7.0), epsilon = 1e-6);
    }

    #[test]
    fn test_normalize_zero() {
        assert_eq!(Vector3f::zero().normalize(), Err(Error::ZeroLength));
    }

    #[test]
    fn test_normalize_large_components() {
        // squares overflow f32
        let v = Vector3f::new(3e19, 4e19, 0.0);
        assert_relative_eq!(v.length(), 5e19, max_relative = 1e-6);
        let n = v.normalize().unwrap();
        assert_abs_diff_eq!(n, Vector3f::new(0.6, 0.8, 0.0), epsilon = 1e-6);
    }

    #[test]
    fn test_normalize_tiny_components() {
        // squares underflow to zero
        let v = Vector3f::new(1e-30, 0.0, 0.0);
        assert_eq!(v.length(), 1e-30);
        assert_eq!(v.normalize().unwrap(), Vector3f::new(1.0, 0.0, 0.0));

        let v = Vector3f::new(0.0, -3e-25, 4e-25);
        assert_abs_diff_eq!(v.normalize().unwrap(), Vector3f::new(0.0, -0.6, 0.8), epsilon = 1e-6);
    }

    #[test]
    fn test_extend_truncate() {
        let v = Vector3f::new(1.0, 2.0, 3.0);
        let h = v.extend(1.0);
        assert_eq!(h.w(), 1.0);
        assert_eq!(h.truncate(), v);
    }

    #[test]
    fn test_generic_dimension() {
        let v: Vector<6, i32> = Vector::from_fn(|i| i as i32);
        assert_eq!(v.len(), 6);
        assert_eq!(v.length_squared(), 55);
        assert_eq!((v + v)[5], 10);
    }

    #[test]
    fn test_display() {
        let v = Vector3f::new(1.0, 0.5, -2.0);
        assert_eq!(v.to_string(), "(1, 0.5, -2)");
        assert_eq!(format!("{v:.2}"), "(1.00, 0.50, -2.00)");
    }
}
