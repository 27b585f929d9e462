//! Aggregate command implementation

use anyhow::{Context, Result};
use rl_pipeline::aggregate;
use rl_pipeline::paths::DataPaths;
use rl_pipeline::snapshot::SnapshotSpec;

use crate::cli::GlobalArgs;

/// Execute the aggregate command
pub fn execute(global: &GlobalArgs) -> Result<()> {
    let paths = DataPaths::new(global.data_dir.as_str());
    let report = aggregate::run(&paths, &SnapshotSpec::CURRENT)
        .context("dataset aggregation failed")?;

    println!("Dataset written: {}", paths.dataset().display());
    println!("  Repositories:   {}", report.rows);
    println!("  Dockerfile:     {:.1}%", report.docker_share * 100.0);
    println!("  Docker Compose: {:.1}%", report.compose_share * 100.0);
    println!("  Kubernetes:     {:.1}%", report.kubernetes_share * 100.0);
    Ok(())
}
