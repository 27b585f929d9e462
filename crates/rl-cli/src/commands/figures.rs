//! Figures command implementation

use anyhow::{Context, Result};
use rl_pipeline::paths::DataPaths;

use crate::cli::GlobalArgs;

/// Execute the figures command
pub fn execute(global: &GlobalArgs) -> Result<()> {
    let paths = DataPaths::new(global.data_dir.as_str());
    let written = rl_figures::render_all(&paths.dataset(), &paths.figures_dir())
        .context("figure rendering failed")?;

    println!("Rendered {} figures:", written.len());
    for path in &written {
        println!("  {}", path.display());
    }
    Ok(())
}
