//! Camera description and its view/projection matrices.
//!
//! Perspective and orthogonal cameras share every field; the only difference
//! is which projection builder they call, so the kind is a plain tag.

use std::fmt;
use std::str::FromStr;

use just_core::Result;
use just_math::{Matrix4f, Point3f, Point4f, Vector2f, Vector3f};
use tracing::trace;

use crate::{
    Transform, look_at, orthogonal_project, perspective_project, scale_matrix, screen_mapping,
};

/// Projection model of a [`Camera`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Projection {
    /// Pinhole camera, see [`perspective_project`].
    #[default]
    Perspective,
    /// Parallel projection, see [`orthogonal_project`].
    Orthogonal,
}

impl Projection {
    /// Lowercase name, as accepted by [`FromStr`].
    pub const fn name(self) -> &'static str {
        match self {
            Self::Perspective => "perspective",
            Self::Orthogonal => "orthogonal",
        }
    }

    /// Builds the projection matrix for this model.
    ///
    /// View space looks down -Z. [`orthogonal_project`] maps +z to depth, so
    /// the orthogonal model negates view z first; both models then send the
    /// near plane to NDC z = -1 and the far plane to +1.
    pub fn matrix(self, aspect_ratio: f32, fov: f32, near: f32, far: f32) -> Result<Matrix4f> {
        match self {
            Self::Perspective => perspective_project(aspect_ratio, fov, near, far),
            Self::Orthogonal => {
                Ok(orthogonal_project(aspect_ratio, fov, near, far)? * scale_matrix(1.0, 1.0, -1.0))
            }
        }
    }
}

impl fmt::Display for Projection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Projection {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "perspective" | "persp" => Ok(Self::Perspective),
            "orthogonal" | "orthographic" | "ortho" => Ok(Self::Orthogonal),
            other => Err(format!("unknown projection '{other}'")),
        }
    }
}

/// A camera placed in the world.
///
/// # Example
///
/// ```rust
/// use just_transform::{Camera, Projection};
/// use just_math::Vector3f;
///
/// let camera = Camera::new(
///     Projection::Perspective,
///     Vector3f::new(0.0, 0.0, 5.0),
///     Vector3f::zero(),
///     1.0,
///     100.0,
///     60.0,
///     16.0 / 9.0,
/// );
/// let vp = camera.view_projection().unwrap();
/// assert!(vp.is_finite());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Camera {
    /// Projection model
    pub projection: Projection,
    /// Placement; only `position` is used for the view matrix
    pub transform: Transform,
    /// Point the camera looks at
    pub target: Vector3f,
    /// World up hint
    pub up: Vector3f,
    /// Vertical field of view in degrees
    pub fov: f32,
    /// Width / height
    pub aspect_ratio: f32,
    /// Near plane distance
    pub near: f32,
    /// Far plane distance
    pub far: f32,
}

impl Camera {
    /// World +Y, the default up hint.
    pub const DEFAULT_UP: Vector3f = Vector3f::new(0.0, 1.0, 0.0);

    /// Creates a camera at `position` looking at `target` with +Y up.
    pub fn new(
        projection: Projection,
        position: Vector3f,
        target: Vector3f,
        near: f32,
        far: f32,
        fov: f32,
        aspect_ratio: f32,
    ) -> Self {
        Self {
            projection,
            transform: Transform::from_position(position),
            target,
            up: Self::DEFAULT_UP,
            fov,
            aspect_ratio,
            near,
            far,
        }
    }

    /// Replaces the up hint.
    pub fn with_up(mut self, up: Vector3f) -> Self {
        self.up = up;
        self
    }

    /// Camera position.
    #[inline]
    pub fn position(&self) -> Vector3f {
        self.transform.position
    }

    /// World-to-camera matrix.
    pub fn view_matrix(&self) -> Result<Matrix4f> {
        look_at(self.position(), self.target, self.up)
    }

    /// Camera-to-clip matrix for the camera's projection model.
    pub fn projection_matrix(&self) -> Result<Matrix4f> {
        self.projection
            .matrix(self.aspect_ratio, self.fov, self.near, self.far)
    }

    /// World-to-clip matrix, `projection * view`.
    pub fn view_projection(&self) -> Result<Matrix4f> {
        let view = self.view_matrix()?;
        let projection = self.projection_matrix()?;
        trace!(
            projection = %self.projection,
            fov = self.fov,
            near = self.near,
            far = self.far,
            "view_projection"
        );
        Ok(projection * view)
    }

    /// Maps a world point to screen space: pixels in x and y, NDC depth in z.
    ///
    /// # Errors
    ///
    /// Any error of the view or projection builders, and
    /// [`just_core::Error::PointAtInfinity`] for a point in the camera plane
    /// of a perspective camera.
    pub fn project_point(&self, point: Point3f, screen_size: Vector2f) -> Result<Point3f> {
        let clip = screen_mapping(screen_size)
            * self.view_projection()?
            * point.to_homogeneous().to_vector();
        Point4f::from_vector(clip).to_cartesian()
    }
}
