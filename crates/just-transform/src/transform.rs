//! Object placement: position, scale and rotation.

use just_math::Vector3f;

/// Placement of an object in the world.
///
/// An immutable snapshot consumed by [`object_to_world`](crate::object_to_world),
/// which applies rotation, then scale, then translation.
///
/// # Example
///
/// ```rust
/// use just_transform::Transform;
/// use just_math::Vector3f;
///
/// let t = Transform::from_position(Vector3f::new(0.0, 1.0, 5.0));
/// assert_eq!(t.scale, Vector3f::splat(1.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Transform {
    /// World-space translation
    pub position: Vector3f,
    /// Per-axis scale factors
    pub scale: Vector3f,
    /// Euler angles in degrees, applied X then Y then Z
    pub rotation: Vector3f,
}

impl Transform {
    /// Identity placement: origin, unit scale, no rotation.
    pub const IDENTITY: Self = Self {
        position: Vector3f::new(0.0, 0.0, 0.0),
        scale: Vector3f::new(1.0, 1.0, 1.0),
        rotation: Vector3f::new(0.0, 0.0, 0.0),
    };

    /// Creates a transform from all three parts.
    #[inline]
    pub const fn new(position: Vector3f, scale: Vector3f, rotation: Vector3f) -> Self {
        Self {
            position,
            scale,
            rotation,
        }
    }

    /// A pure translation.
    #[inline]
    pub const fn from_position(position: Vector3f) -> Self {
        Self {
            position,
            ..Self::IDENTITY
        }
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}
