//! Wire command implementation.

use anyhow::Result;
use malody_core::ChartLoader;

use super::load_chart;

/// Run the wire command
pub fn run(file: &str, pretty: bool) -> Result<()> {
    let chart = load_chart(&ChartLoader::default(), file)?;
    let wire = chart.to_wire();

    let output = if pretty {
        serde_json::to_string_pretty(&wire)?
    } else {
        serde_json::to_string(&wire)?
    };
    println!("{}", output);
    Ok(())
}
