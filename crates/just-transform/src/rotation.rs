//! Rotation matrices.
//!
//! Angles are in **degrees** and are converted with [`f32::to_radians`].
//! All rotations are right-handed: a positive angle turns counter-clockwise
//! when looking down the axis towards the origin.

use just_math::{Matrix4f, Vector3f};

/// Rotation about the X axis.
pub fn x_rotation_matrix(angle: f32) -> Matrix4f {
    let (sin, cos) = angle.to_radians().sin_cos();
    Matrix4f::from_rows([
        [1.0, 0.0, 0.0, 0.0],
        [0.0, cos, -sin, 0.0],
        [0.0, sin, cos, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ])
}

/// Rotation about the Y axis.
pub fn y_rotation_matrix(angle: f32) -> Matrix4f {
    let (sin, cos) = angle.to_radians().sin_cos();
    Matrix4f::from_rows([
        [cos, 0.0, sin, 0.0],
        [0.0, 1.0, 0.0, 0.0],
        [-sin, 0.0, cos, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ])
}

/// Rotation about the Z axis.
pub fn z_rotation_matrix(angle: f32) -> Matrix4f {
    let (sin, cos) = angle.to_radians().sin_cos();
    Matrix4f::from_rows([
        [cos, -sin, 0.0, 0.0],
        [sin, cos, 0.0, 0.0],
        [0.0, 0.0, 1.0, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ])
}

/// Euler rotation `Z * Y * X`: X is applied first, then Y, then Z.
///
/// # Example
///
/// ```rust
/// use just_transform::rotation_matrix;
/// use just_math::{Matrix4f, Vector4f};
///
/// let m = rotation_matrix(0.0, 0.0, 90.0);
/// let v = m * Vector4f::new(1.0, 0.0, 0.0, 0.0);
/// assert!((v.y() - 1.0).abs() < 1e-6);
/// ```
pub fn rotation_matrix(x: f32, y: f32, z: f32) -> Matrix4f {
    z_rotation_matrix(z) * y_rotation_matrix(y) * x_rotation_matrix(x)
}

/// [`rotation_matrix`] with the angles packed as `(x, y, z)`.
pub fn rotation_matrix_from_vector(rotation: Vector3f) -> Matrix4f {
    rotation_matrix(rotation.x(), rotation.y(), rotation.z())
}

/// Change-of-basis matrix with `i`, `j`, `k` as its first three columns.
///
/// The caller is responsible for the basis being orthonormal; nothing is
/// validated.
pub fn rotation_matrix_from_basis(i: Vector3f, j: Vector3f, k: Vector3f) -> Matrix4f {
    Matrix4f::from_rows([
        [i.x(), j.x(), k.x(), 0.0],
        [i.y(), j.y(), k.y(), 0.0],
        [i.z(), j.z(), k.z(), 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use just_math::{Determinant, Vector4f};

    #[test]
    fn test_zero_rotation_is_identity() {
        assert_abs_diff_eq!(rotation_matrix(0.0, 0.0, 0.0), Matrix4f::identity());
        assert_abs_diff_eq!(rotation_matrix_from_vector(Vector3f::zero()), Matrix4f::identity());
    }

    #[test]
    fn test_axis_rotations() {
        let x = Vector4f::new(1.0, 0.0, 0.0, 0.0);
        let y = Vector4f::new(0.0, 1.0, 0.0, 0.0);
        let z = Vector4f::new(0.0, 0.0, 1.0, 0.0);

        assert_abs_diff_eq!(x_rotation_matrix(90.0) * y, z, epsilon = 1e-6);
        assert_abs_diff_eq!(y_rotation_matrix(90.0) * z, x, epsilon = 1e-6);
        assert_abs_diff_eq!(z_rotation_matrix(90.0) * x, y, epsilon = 1e-6);
    }

    #[test]
    fn test_composition_order() {
        // X first: +Y -> +Z, then Z (90) leaves +Z alone.
        let v = rotation_matrix(90.0, 0.0, 90.0) * Vector4f::new(0.0, 1.0, 0.0, 0.0);
        assert_abs_diff_eq!(v, Vector4f::new(0.0, 0.0, 1.0, 0.0), epsilon = 1e-6);

        // Reversed order would give Z first: +Y -> -X, then X leaves -X alone.
        let reversed = x_rotation_matrix(90.0) * z_rotation_matrix(90.0);
        let w = reversed * Vector4f::new(0.0, 1.0, 0.0, 0.0);
        assert_abs_diff_eq!(w, Vector4f::new(-1.0, 0.0, 0.0, 0.0), epsilon = 1e-6);
    }

    #[test]
    fn test_rotation_is_orthonormal() {
        let m = rotation_matrix(30.0, -45.0, 110.0);
        assert_abs_diff_eq!(m * m.transpose(), Matrix4f::identity(), epsilon = 1e-6);
        assert_abs_diff_eq!(m.det(), 1.0, epsilon = 1e-5);
        assert_abs_diff_eq!(m.invert().unwrap(), m.transpose(), epsilon = 1e-5);
    }

    #[test]
    fn test_from_basis() {
        let i = Vector3f::new(0.0, 1.0, 0.0);
        let j = Vector3f::new(-1.0, 0.0, 0.0);
        let k = Vector3f::new(0.0, 0.0, 1.0);
        let m = rotation_matrix_from_basis(i, j, k);
        assert_eq!(m.col(0), Vector4f::new(0.0, 1.0, 0.0, 0.0));
        assert_eq!(m.col(1), Vector4f::new(-1.0, 0.0, 0.0, 0.0));
        assert_abs_diff_eq!(m, z_rotation_matrix(90.0), epsilon = 1e-6);
    }
}
