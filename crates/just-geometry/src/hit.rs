//! Ray/surface intersection record.

use std::fmt;

use just_math::Vector3f;

/// Result of intersecting a ray with a surface.
///
/// `Default` is the miss record: everything zero, `is_hit == false`.
///
/// # Display
///
/// ```text
/// position = (x, y, z)
/// normal   = (x, y, z)
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HitRecord {
    /// Hit position
    pub position: Vector3f,
    /// Surface normal at the hit
    pub normal: Vector3f,
    /// Ray parameter of the hit
    pub time: f32,
    /// Whether anything was hit
    pub is_hit: bool,
}

impl HitRecord {
    /// A record for a successful hit.
    pub fn hit(position: Vector3f, normal: Vector3f, time: f32) -> Self {
        Self {
            position,
            normal,
            time,
            is_hit: true,
        }
    }

    /// The miss record.
    pub fn miss() -> Self {
        Self::default()
    }
}

impl fmt::Display for HitRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "position = {}", self.position)?;
        write!(f, "normal   = {}", self.normal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_miss_is_zeroed() {
        let miss = HitRecord::miss();
        assert!(!miss.is_hit);
        assert_eq!(miss.time, 0.0);
        assert_eq!(miss.position, Vector3f::zero());
        assert_eq!(miss.normal, Vector3f::zero());
    }

    #[test]
    fn test_display() {
        let hit = HitRecord::hit(Vector3f::new(1.0, 2.0, 3.0), Vector3f::new(0.0, 1.0, 0.0), 4.0);
        assert_eq!(hit.to_string(), "position = (1, 2, 3)\nnormal   = (0, 1, 0)");
    }
}
