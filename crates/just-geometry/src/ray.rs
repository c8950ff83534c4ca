//! Parametric rays.

use just_core::Result;
use just_math::{Point3f, Vector3f};

/// A ray `origin + t * direction`.
///
/// The direction is not required to be normalized.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Ray3f {
    /// Start point
    pub origin: Point3f,
    /// Direction of travel
    pub direction: Vector3f,
}

impl Ray3f {
    /// Creates a ray.
    #[inline]
    pub const fn new(origin: Point3f, direction: Vector3f) -> Self {
        Self { origin, direction }
    }

    /// A ray from `origin` through `target`, with unit direction.
    ///
    /// # Errors
    ///
    /// [`just_core::Error::ZeroLength`] when `origin == target`.
    pub fn through(origin: Point3f, target: Point3f) -> Result<Self> {
        Ok(Self::new(origin, (target - origin).normalize()?))
    }

    /// The point at parameter `t`.
    #[inline]
    pub fn at(&self, t: f32) -> Point3f {
        self.origin + self.direction * t
    }
}
