//! # just-core
//!
//! Core types shared by every just-rs crate.
//!
//! At the moment this is the error taxonomy: [`Error`] and the [`Result`]
//! alias. Dimension mismatches never show up here; they are rejected by the
//! type system in `just-math`.
//!
//! ## Crate Structure
//!
//! ```text
//! just-core (this crate)
//!    ^
//!    |
//!    +-- just-math (vectors, points, matrices)
//!    +-- just-transform (transform builders, camera)
//!    +-- just-geometry (ray, hit record)
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod error;

pub use error::*;

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```
/// use just_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{Error, Result};
}
