//! Check command implementation.

use anyhow::{Result, bail};
use malody_core::ChartLoader;
use tracing::{error, info};

use super::load_chart;

/// Run the check command
pub fn run(files: &[String]) -> Result<()> {
    let loader = ChartLoader::default();
    let mut failed = 0usize;

    for path in files {
        match load_chart(&loader, path) {
            Ok(chart) => {
                let document = chart.document();
                let meta = document.meta();
                println!(
                    "{}: {} [{}] by {} - {} timings, {} effects, {} objects",
                    path,
                    meta.name,
                    document.mode().name(),
                    meta.creator,
                    document.timings().len(),
                    document.effect_count(),
                    document.object_count(),
                );
            }
            Err(e) => {
                error!("{:#}", e);
                failed += 1;
            }
        }
    }

    info!("Checked {} chart(s), {} failed", files.len(), failed);
    if failed > 0 {
        bail!("{} of {} chart(s) failed to load", failed, files.len());
    }
    Ok(())
}
