//! Camera command.
//!
//! Prints the view, projection, view-projection and screen mapping matrices
//! of a camera built from the command line.

use crate::CameraArgs;
use anyhow::{Context, Result};
use just_math::Vector2f;
use just_transform::screen_mapping;
use serde_json::json;
use tracing::{debug, trace};

const PRECISION: usize = 4;

/// Runs the camera command.
pub fn run(args: CameraArgs, verbose: bool) -> Result<()> {
    let camera = args.camera.camera();
    trace!(projection = %camera.projection, fov = camera.fov, "camera::run");

    let view = camera.view_matrix().context("Invalid camera orientation")?;
    let projection = camera.projection_matrix().context("Invalid camera frustum")?;
    let view_projection = projection * view;
    let screen = screen_mapping(Vector2f::new(args.camera.width, args.camera.height));
    debug!(aspect = camera.aspect_ratio, "camera matrices built");

    if args.json {
        return super::print_json(&json!({
            "camera": camera,
            "view": view,
            "projection": projection,
            "view_projection": view_projection,
            "screen": screen,
        }));
    }

    println!("Camera: {}", camera.projection);
    if verbose {
        println!("  Position: {}", camera.position());
        println!("  Target:   {}", camera.target);
        println!("  Up:       {}", camera.up);
        println!(
            "  Fov:      {} deg, aspect {:.4}, near {}, far {}",
            camera.fov, camera.aspect_ratio, camera.near, camera.far
        );
    }
    super::print_matrix("View", &view, PRECISION);
    super::print_matrix("Projection", &projection, PRECISION);
    super::print_matrix("View-projection", &view_projection, PRECISION);
    super::print_matrix("Screen", &screen, PRECISION);
    Ok(())
}
