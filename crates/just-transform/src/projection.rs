//! Projection and viewport matrices.
//!
//! `near` and `far` are positive distances along the viewing direction (the
//! camera looks down -Z). `fov` is the vertical field of view in degrees and
//! `aspect_ratio` is width / height. Both projections map the frustum into
//! the `[-1, 1]` cube.

use just_core::{Error, Result};
use just_math::{Matrix4f, Vector2f};
use tracing::warn;

/// Half-height `t` and half-width `r` of the near plane.
fn near_plane_extent(aspect_ratio: f32, fov: f32, near: f32, far: f32) -> Result<(f32, f32)> {
    let t = (fov / 2.0).to_radians().tan() * near;
    let r = t * aspect_ratio;
    let usable = |x: f32| x != 0.0 && x.is_finite();
    if near == far || !usable(t) || !usable(r) {
        warn!(near, far, fov, aspect_ratio, "degenerate frustum");
        return Err(Error::degenerate_frustum(near, far, fov, aspect_ratio));
    }
    Ok((t, r))
}

/// Orthographic projection of the box spanned by the near plane extent and
/// `[near, far]`.
///
/// Depth maps `+z` in `[near, far]` to `[-1, 1]`. A view space looking down
/// -Z negates z before this matrix, see [`Projection::matrix`](crate::Projection::matrix).
///
/// ```text
/// t = tan(fov / 2) * near,  r = t * aspect_ratio
///
/// | 1/r  0    0        0            |
/// | 0    1/t  0        0            |
/// | 0    0    2/(f-n)  -(f+n)/(f-n) |
/// | 0    0    0        1            |
/// ```
///
/// # Errors
///
/// [`Error::DegenerateFrustum`] when `near == far`, or `t` / `r` is zero or
/// not finite.
pub fn orthogonal_project(aspect_ratio: f32, fov: f32, near: f32, far: f32) -> Result<Matrix4f> {
    let (t, r) = near_plane_extent(aspect_ratio, fov, near, far)?;
    let (n, f) = (near, far);
    Ok(Matrix4f::from_rows([
        [1.0 / r, 0.0, 0.0, 0.0],
        [0.0, 1.0 / t, 0.0, 0.0],
        [0.0, 0.0, 2.0 / (f - n), -(f + n) / (f - n)],
        [0.0, 0.0, 0.0, 1.0],
    ]))
}

/// Squashes the perspective frustum into the box an orthographic projection
/// expects. x and y are scaled by `near`, z is remapped non-linearly, and the
/// depth moves into `w`.
pub fn perspective_to_orthogonal(near: f32, far: f32) -> Matrix4f {
    let (n, f) = (near, far);
    Matrix4f::from_rows([
        [n, 0.0, 0.0, 0.0],
        [0.0, n, 0.0, 0.0],
        [0.0, 0.0, -(n + f), -n * f],
        [0.0, 0.0, 1.0, 0.0],
    ])
}

/// Perspective projection.
///
/// ```text
/// | n/r  0    0             0           |
/// | 0    n/t  0             0           |
/// | 0    0    -(f+n)/(f-n)  -2fn/(f-n)  |
/// | 0    0    -1            0           |
/// ```
///
/// A camera-space point at `z = -near` lands on the near clip plane with
/// `w = near`.
///
/// # Errors
///
/// Same as [`orthogonal_project`].
///
/// # Example
///
/// ```rust
/// use just_transform::perspective_project;
/// use just_math::Vector4f;
///
/// let p = perspective_project(1.0, 90.0, 1.0, 10.0).unwrap();
/// let clip = p * Vector4f::new(0.0, 0.0, -1.0, 1.0);
/// assert_eq!(clip.w(), 1.0);
/// assert!((clip.z() / clip.w() + 1.0).abs() < 1e-6);
/// ```
pub fn perspective_project(aspect_ratio: f32, fov: f32, near: f32, far: f32) -> Result<Matrix4f> {
    let (t, r) = near_plane_extent(aspect_ratio, fov, near, far)?;
    let (n, f) = (near, far);
    Ok(Matrix4f::from_rows([
        [n / r, 0.0, 0.0, 0.0],
        [0.0, n / t, 0.0, 0.0],
        [0.0, 0.0, -(n + f) / (f - n), -2.0 * f * n / (f - n)],
        [0.0, 0.0, -1.0, 0.0],
    ]))
}

/// Viewport transform from normalized device coordinates to pixels.
///
/// NDC `(-1, -1)` maps to `(0, 0)` and `(1, 1)` to `(width, height)`; z is
/// left untouched.
pub fn screen_mapping(size: Vector2f) -> Matrix4f {
    let (hw, hh) = (size.x() / 2.0, size.y() / 2.0);
    Matrix4f::from_rows([
        [hw, 0.0, 0.0, hw],
        [0.0, hh, 0.0, hh],
        [0.0, 0.0, 1.0, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ])
}
