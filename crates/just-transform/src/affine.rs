//! Scale, translation and object-to-world matrices.

use just_math::{Matrix4f, Vector3f};

use crate::{Transform, rotation_matrix_from_vector};

/// Per-axis scale.
pub fn scale_matrix(x: f32, y: f32, z: f32) -> Matrix4f {
    Matrix4f::from_rows([
        [x, 0.0, 0.0, 0.0],
        [0.0, y, 0.0, 0.0],
        [0.0, 0.0, z, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ])
}

/// [`scale_matrix`] with the factors packed in a vector.
pub fn scale_matrix_from_vector(scale: Vector3f) -> Matrix4f {
    scale_matrix(scale.x(), scale.y(), scale.z())
}

/// Homogeneous translation.
pub fn translation_matrix(x: f32, y: f32, z: f32) -> Matrix4f {
    Matrix4f::from_rows([
        [1.0, 0.0, 0.0, x],
        [0.0, 1.0, 0.0, y],
        [0.0, 0.0, 1.0, z],
        [0.0, 0.0, 0.0, 1.0],
    ])
}

/// [`translation_matrix`] with the offset packed in a vector.
pub fn translation_matrix_from_vector(position: Vector3f) -> Matrix4f {
    translation_matrix(position.x(), position.y(), position.z())
}

/// Model matrix `Translation * Scale * Rotation`.
///
/// Rotation is applied first, then scale, then translation.
pub fn object_to_world(transform: &Transform) -> Matrix4f {
    object_to_world_parts(transform.position, transform.scale, transform.rotation)
}

/// [`object_to_world`] from loose parts.
pub fn object_to_world_parts(position: Vector3f, scale: Vector3f, rotation: Vector3f) -> Matrix4f {
    translation_matrix_from_vector(position)
        * scale_matrix_from_vector(scale)
        * rotation_matrix_from_vector(rotation)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use just_math::{Point3f, Vector4f};

    #[test]
    fn test_scale() {
        let v = scale_matrix(2.0, 3.0, 4.0) * Vector4f::new(1.0, 1.0, 1.0, 1.0);
        assert_eq!(v, Vector4f::new(2.0, 3.0, 4.0, 1.0));
        assert_eq!(scale_matrix_from_vector(Vector3f::new(2.0, 3.0, 4.0)), scale_matrix(2.0, 3.0, 4.0));
    }

    #[test]
    fn test_translation_moves_points_not_directions() {
        let m = translation_matrix(1.0, 2.0, 3.0);
        let point = m * Point3f::new(1.0, 1.0, 1.0).to_homogeneous().to_vector();
        assert_eq!(point, Vector4f::new(2.0, 3.0, 4.0, 1.0));
        let direction = m * Vector4f::new(1.0, 1.0, 1.0, 0.0);
        assert_eq!(direction, Vector4f::new(1.0, 1.0, 1.0, 0.0));
        assert_eq!(translation_matrix_from_vector(Vector3f::new(1.0, 2.0, 3.0)), m);
    }

    #[test]
    fn test_identity_transform() {
        assert_abs_diff_eq!(object_to_world(&Transform::IDENTITY), Matrix4f::identity());
        assert_abs_diff_eq!(
            object_to_world_parts(Vector3f::zero(), Vector3f::splat(1.0), Vector3f::zero()),
            Matrix4f::identity()
        );
    }

    #[test]
    fn test_object_to_world_order() {
        let t = Transform::new(
            Vector3f::new(10.0, 0.0, 0.0),
            Vector3f::new(2.0, 2.0, 2.0),
            Vector3f::new(0.0, 0.0, 90.0),
        );
        // +X rotates to +Y, scales to (0, 2, 0), then moves by (10, 0, 0).
        let p = object_to_world(&t) * Vector4f::new(1.0, 0.0, 0.0, 1.0);
        assert_abs_diff_eq!(p, Vector4f::new(10.0, 2.0, 0.0, 1.0), epsilon = 1e-5);
    }
}
