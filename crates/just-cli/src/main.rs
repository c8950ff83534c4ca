//! jl - camera and matrix toolkit CLI
//!
//! Prints view/projection matrices, projects points to the screen and
//! inverts small matrices.

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use just_math::{Point3f, Vector3f};
use just_transform::{Camera, Projection};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "jl")]
#[command(author, version, about = "Camera and matrix toolkit")]
#[command(long_about = "
Builds the matrices a 3D renderer needs and prints them.

Examples:
  jl camera                                   # Default perspective camera
  jl camera --kind orthogonal --fov 45        # Orthogonal camera matrices
  jl camera --origin 3,4,5 --target 0,0,0 --json
  jl project 1,0,0 --width 1920 --height 1080
  jl invert 1 2 3 4                           # 2x2 inverse
  jl invert 4 7 2 3 0 5 0 1 1 0 6 2 3 1 1 8   # 4x4 inverse
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output (debug logging)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Print view, projection and viewport matrices of a camera
    #[command(visible_alias = "c")]
    Camera(CameraArgs),

    /// Project a world-space point to screen space
    #[command(visible_alias = "p")]
    Project(ProjectArgs),

    /// Print determinant, adjoint and inverse of a square matrix
    #[command(visible_alias = "inv")]
    Invert(InvertArgs),
}

/// Camera parameters shared by `camera` and `project`.
#[derive(Args)]
struct CameraOptions {
    /// Projection model: perspective (persp) or orthogonal (ortho)
    #[arg(short, long, default_value = "perspective")]
    kind: Projection,

    /// Camera position x,y,z
    #[arg(long, value_parser = parse_vector3, default_value = "0,0,5", allow_hyphen_values = true)]
    origin: Vector3f,

    /// Look-at target x,y,z
    #[arg(long, value_parser = parse_vector3, default_value = "0,0,0", allow_hyphen_values = true)]
    target: Vector3f,

    /// Up hint x,y,z
    #[arg(long, value_parser = parse_vector3, default_value = "0,1,0", allow_hyphen_values = true)]
    up: Vector3f,

    /// Vertical field of view in degrees
    #[arg(long, default_value = "60")]
    fov: f32,

    /// Aspect ratio (width / height); defaults to width / height
    #[arg(long)]
    aspect: Option<f32>,

    /// Near plane distance
    #[arg(long, default_value = "0.1")]
    near: f32,

    /// Far plane distance
    #[arg(long, default_value = "100")]
    far: f32,

    /// Screen width in pixels
    #[arg(short = 'W', long, default_value = "1280")]
    width: f32,

    /// Screen height in pixels
    #[arg(short = 'H', long, default_value = "720")]
    height: f32,
}

impl CameraOptions {
    fn camera(&self) -> Camera {
        let aspect = self.aspect.unwrap_or(self.width / self.height);
        Camera::new(
            self.kind,
            self.origin,
            self.target,
            self.near,
            self.far,
            self.fov,
            aspect,
        )
        .with_up(self.up)
    }
}

#[derive(Args)]
struct CameraArgs {
    #[command(flatten)]
    camera: CameraOptions,

    /// Machine-readable output (JSON)
    #[arg(long)]
    json: bool,
}

#[derive(Args)]
struct ProjectArgs {
    /// World-space point x,y,z
    #[arg(value_parser = parse_point3, allow_hyphen_values = true)]
    point: Point3f,

    #[command(flatten)]
    camera: CameraOptions,

    /// Machine-readable output (JSON)
    #[arg(long)]
    json: bool,
}

#[derive(Args)]
struct InvertArgs {
    /// Row-major elements: 1, 4, 9 or 16 numbers
    #[arg(required = true, allow_negative_numbers = true)]
    values: Vec<f32>,

    /// Decimal places
    #[arg(short, long, default_value = "4")]
    precision: usize,

    /// Machine-readable output (JSON)
    #[arg(long)]
    json: bool,
}

fn parse_components<const N: usize>(s: &str) -> std::result::Result<[f32; N], String> {
    let parts = s
        .split(',')
        .map(|p| p.trim().parse::<f32>().map_err(|e| format!("'{}': {}", p.trim(), e)))
        .collect::<std::result::Result<Vec<_>, _>>()?;
    let len = parts.len();
    parts
        .try_into()
        .map_err(|_| format!("expected {} comma-separated numbers, got {}", N, len))
}

fn parse_vector3(s: &str) -> std::result::Result<Vector3f, String> {
    parse_components::<3>(s).map(Vector3f::from_array)
}

fn parse_point3(s: &str) -> std::result::Result<Point3f, String> {
    parse_components::<3>(s).map(Point3f::from_array)
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Camera(args) => commands::camera::run(args, cli.verbose),
        Commands::Project(args) => commands::project::run(args, cli.verbose),
        Commands::Invert(args) => commands::invert::run(args, cli.verbose),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_vector3() {
        assert_eq!(parse_vector3("1, -2,3.5").unwrap(), Vector3f::new(1.0, -2.0, 3.5));
        assert!(parse_vector3("1,2").is_err());
        assert!(parse_vector3("1,x,3").is_err());
    }

    #[test]
    fn test_cli_definition() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_aspect_defaults_to_screen() {
        let cli = Cli::parse_from(["jl", "camera", "-W", "800", "-H", "400"]);
        let Commands::Camera(args) = cli.command else {
            panic!("expected camera command");
        };
        assert_eq!(args.camera.camera().aspect_ratio, 2.0);
        assert_eq!(args.camera.kind, Projection::Perspective);
    }

    #[test]
    fn test_kind_alias() {
        let cli = Cli::parse_from(["jl", "camera", "--kind", "ortho"]);
        let Commands::Camera(args) = cli.command else {
            panic!("expected camera command");
        };
        assert_eq!(args.camera.kind, Projection::Orthogonal);
    }

    #[test]
    fn test_negative_point() {
        let cli = Cli::parse_from(["jl", "project", "--", "-1,0,-3"]);
        let Commands::Project(args) = cli.command else {
            panic!("expected project command");
        };
        assert_eq!(args.point, Point3f::new(-1.0, 0.0, -3.0));
    }
}
