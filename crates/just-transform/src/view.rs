//! View (look-at) matrix.

use just_core::Result;
use just_math::{Matrix4f, Vector3f};

use crate::{rotation_matrix_from_basis, translation_matrix_from_vector};

/// World-to-camera matrix for a camera at `origin` looking at `target`.
///
/// The camera basis is orthogonalized from the inputs:
///
/// ```text
/// g   = normalize(target - origin)   forward
/// gxt = normalize(g x up)            right
/// t   = gxt x g                      recomputed up
/// ```
///
/// The result is `transpose(R(gxt, t, -g)) * T(-origin)`: translate the
/// camera to the origin, then project onto the camera axes. `R` is
/// orthonormal, so its transpose is its inverse. The camera looks down -Z.
///
/// # Errors
///
/// [`just_core::Error::ZeroLength`] when `origin == target` or `up` is
/// parallel to the viewing direction.
///
/// # Example
///
/// ```rust
/// use just_transform::look_at;
/// use just_math::{Vector3f, Vector4f};
///
/// let view = look_at(
///     Vector3f::new(0.0, 0.0, 5.0),
///     Vector3f::zero(),
///     Vector3f::new(0.0, 1.0, 0.0),
/// ).unwrap();
/// let eye = view * Vector4f::new(0.0, 0.0, 5.0, 1.0);
/// assert_eq!(eye, Vector4f::new(0.0, 0.0, 0.0, 1.0));
/// ```
pub fn look_at(origin: Vector3f, target: Vector3f, up: Vector3f) -> Result<Matrix4f> {
    let g = (target - origin).normalize()?;
    let gxt = g.cross(up).normalize()?;
    let t = gxt.cross(g);
    Ok(rotation_matrix_from_basis(gxt, t, -g).transpose() * translation_matrix_from_vector(-origin))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use just_core::Error;
    use just_math::{Determinant, Vector4f};

    #[test]
    fn test_target_lands_on_negative_z() {
        let view = look_at(
            Vector3f::new(3.0, 4.0, 0.0),
            Vector3f::new(0.0, 0.0, 0.0),
            Vector3f::new(0.0, 0.0, 1.0),
        )
        .unwrap();
        // Target is 5 units ahead.
        let target = view * Vector4f::new(0.0, 0.0, 0.0, 1.0);
        assert_abs_diff_eq!(target, Vector4f::new(0.0, 0.0, -5.0, 1.0), epsilon = 1e-5);
        // World up stays camera up.
        let up = view * Vector4f::new(0.0, 0.0, 1.0, 0.0);
        assert_abs_diff_eq!(up, Vector4f::new(0.0, 1.0, 0.0, 0.0), epsilon = 1e-6);
    }

    #[test]
    fn test_far_away_camera() {
        // the squared distance overflows f32
        let view = look_at(
            Vector3f::new(0.0, 0.0, 3e19),
            Vector3f::zero(),
            Vector3f::new(0.0, 1.0, 0.0),
        )
        .unwrap();
        let target = view * Vector4f::new(0.0, 0.0, 0.0, 1.0);
        assert_eq!(target, Vector4f::new(0.0, 0.0, -3e19, 1.0));
    }

    #[test]
    fn test_view_is_rigid() {
        let view = look_at(
            Vector3f::new(1.0, 2.0, 3.0),
            Vector3f::new(-2.0, 0.5, 1.0),
            Vector3f::new(0.0, 1.0, 0.0),
        )
        .unwrap();
        assert_abs_diff_eq!(view.det(), 1.0, epsilon = 1e-5);
        assert_eq!(view.row(3), Vector4f::new(0.0, 0.0, 0.0, 1.0));
    }

    #[test]
    fn test_degenerate_inputs() {
        let up = Vector3f::new(0.0, 1.0, 0.0);
        assert_eq!(look_at(Vector3f::splat(1.0), Vector3f::splat(1.0), up), Err(Error::ZeroLength));
        assert_eq!(
            look_at(Vector3f::zero(), Vector3f::new(0.0, 5.0, 0.0), up),
            Err(Error::ZeroLength)
        );
    }
}
