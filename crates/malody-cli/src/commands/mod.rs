//! CLI command implementations.
//!
//! This module contains the implementation of each CLI command.

pub mod check;
pub mod modes;
pub mod wire;

use std::fs::File;
use std::io::BufReader;

use anyhow::{Context, Result};
use malody_core::{Chart, ChartInput, ChartLoader};

/// Open a chart file and build it with the built-in registry.
pub fn load_chart(loader: &ChartLoader, path: &str) -> Result<Chart> {
    let file = File::open(path).with_context(|| format!("Failed to open {}", path))?;
    let chart = loader
        .load(ChartInput::reader(BufReader::new(file)))
        .with_context(|| format!("Failed to load {}", path))?;
    Ok(chart)
}
