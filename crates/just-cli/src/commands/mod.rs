//! CLI command implementations

pub mod camera;
pub mod invert;
pub mod project;

use anyhow::{Context, Result};
use serde_json::Value;

/// Pretty-prints a JSON document to stdout.
pub fn print_json(value: &Value) -> Result<()> {
    let text = serde_json::to_string_pretty(value).context("Failed to serialize output")?;
    println!("{}", text);
    Ok(())
}

/// Prints a labelled matrix block, one row per line, indented.
pub fn print_matrix<M: std::fmt::Display>(label: &str, matrix: &M, precision: usize) {
    println!("{}:", label);
    let text = format!("{:>w$.p$}", matrix, w = precision + 4, p = precision);
    for line in text.lines() {
        println!("  {}", line);
    }
}
