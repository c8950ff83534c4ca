//! # just-geometry
//!
//! Geometric records consumed by intersection code: [`Ray3f`] and
//! [`HitRecord`]. No intersection routines live here.
//!
//! # Usage
//!
//! ```rust
//! use just_geometry::{HitRecord, Ray3f};
//! use just_math::{Point3f, Vector3f};
//!
//! let ray = Ray3f::new(Point3f::new(0.0, 0.0, 0.0), Vector3f::new(0.0, 0.0, -1.0));
//! let hit = HitRecord::hit(ray.at(2.0).to_vector(), Vector3f::new(0.0, 0.0, 1.0), 2.0);
//! println!("{hit}");
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod hit;
mod ray;

pub use hit::*;
pub use ray::*;
