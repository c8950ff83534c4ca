//! Project command: world point to screen pixels.

use crate::ProjectArgs;
use anyhow::{Context, Result};
use just_math::Vector2f;
use serde_json::json;
use tracing::trace;

/// Runs the project command.
pub fn run(args: ProjectArgs, verbose: bool) -> Result<()> {
    let camera = args.camera.camera();
    let size = Vector2f::new(args.camera.width, args.camera.height);
    trace!(point = %args.point, projection = %camera.projection, "project::run");

    let screen = camera
        .project_point(args.point, size)
        .with_context(|| format!("Failed to project {}", args.point))?;
    let visible = (0.0..=size.x()).contains(&screen.x()) && (0.0..=size.y()).contains(&screen.y());

    if args.json {
        return super::print_json(&json!({
            "world": args.point,
            "screen": screen,
            "visible": visible,
        }));
    }

    if verbose {
        println!("World:  {}", args.point);
        println!("Camera: {} at {}", camera.projection, camera.position());
    }
    println!("Screen: {:.3}", screen);
    if !visible {
        println!("(outside the {}x{} viewport)", size.x(), size.y());
    }
    Ok(())
}
