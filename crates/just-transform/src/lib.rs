//! # just-transform
//!
//! Transform matrix builders for a 3D renderer.
//!
//! Every builder is a pure function returning a [`Matrix4f`](just_math::Matrix4f)
//! for column vectors (`matrix * vector`). Builders compose by multiplication,
//! evaluated left to right as written, so the right-most matrix is applied
//! first.
//!
//! - Rotation: [`x_rotation_matrix`], [`y_rotation_matrix`], [`z_rotation_matrix`],
//!   [`rotation_matrix`] (`Z * Y * X`), [`rotation_matrix_from_basis`]
//! - Affine: [`scale_matrix`], [`translation_matrix`], [`object_to_world`]
//!   (`Translation * Scale * Rotation`)
//! - Camera: [`look_at`], [`orthogonal_project`], [`perspective_to_orthogonal`],
//!   [`perspective_project`], [`screen_mapping`]
//! - [`Camera`] bundles the camera parameters and picks the projection by
//!   its [`Projection`] tag.
//!
//! Angles are in degrees.
//!
//! # Usage
//!
//! ```rust
//! use just_transform::{look_at, perspective_project, screen_mapping};
//! use just_math::{Vector2f, Vector3f, Vector4f};
//!
//! let view = look_at(Vector3f::new(0.0, 0.0, 5.0), Vector3f::zero(), Vector3f::new(0.0, 1.0, 0.0))?;
//! let projection = perspective_project(4.0 / 3.0, 60.0, 0.1, 100.0)?;
//! let screen = screen_mapping(Vector2f::new(640.0, 480.0));
//!
//! let clip = screen * projection * view * Vector4f::new(0.0, 0.0, 0.0, 1.0);
//! assert!((clip.x() / clip.w() - 320.0).abs() < 1e-3);
//! # Ok::<(), just_core::Error>(())
//! ```
//!
//! # Dependencies
//!
//! - [`just-math`](just_math) - Matrix and vector types
//! - [`just-core`](just_core) - Error types
//! - [`tracing`] - Diagnostics for degenerate inputs
//!
//! # Used By
//!
//! - `just-cli` - Camera and projection commands

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod affine;
mod camera;
mod projection;
mod rotation;
mod transform;
mod view;

pub use affine::*;
pub use camera::*;
pub use projection::*;
pub use rotation::*;
pub use transform::*;
pub use view::*;
