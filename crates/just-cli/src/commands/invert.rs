//! Invert command.
//!
//! Reads a square matrix as row-major numbers and prints its determinant,
//! adjoint and inverse.

use crate::InvertArgs;
use anyhow::{Result, bail};
use just_math::{Determinant, Matrix};
use serde_json::json;
use tracing::{debug, trace};

/// Runs the invert command.
///
/// The matrix size follows from the element count: 1, 4, 9 or 16.
pub fn run(args: InvertArgs, verbose: bool) -> Result<()> {
    trace!(count = args.values.len(), "invert::run");
    match args.values.len() {
        1 => report::<1>(&args, verbose),
        4 => report::<2>(&args, verbose),
        9 => report::<3>(&args, verbose),
        16 => report::<4>(&args, verbose),
        n => bail!("Expected 1, 4, 9 or 16 values for a square matrix, got {}", n),
    }
}

fn report<const N: usize>(args: &InvertArgs, verbose: bool) -> Result<()>
where
    Matrix<N, N, f32>: Determinant<Scalar = f32>,
{
    let matrix = Matrix::<N, N, f32>::from_fn(|row, col| args.values[row * N + col]);
    let det = matrix.det();
    let adjoint = matrix.adjoint();
    let inverse = matrix.invert();
    debug!(size = N, det, singular = inverse.is_err(), "matrix analyzed");

    if args.json {
        return super::print_json(&json!({
            "size": N,
            "matrix": matrix,
            "det": det,
            "adjoint": adjoint,
            "inverse": inverse.as_ref().ok(),
        }));
    }

    if verbose {
        super::print_matrix("Matrix", &matrix, args.precision);
    }
    println!("Determinant: {:.p$}", det, p = args.precision);
    super::print_matrix("Adjoint", &adjoint, args.precision);
    let inverse = inverse?;
    super::print_matrix("Inverse", &inverse, args.precision);
    Ok(())
}
