//! rl-figures - Figure stage for Repolens
//!
//! Pure consumer of the aggregated dataset CSV: computes small grouped
//! aggregates (adoption rates, cumulative distributions, bar counts,
//! co-occurrence heatmaps) and renders them as SVG files. This stage has
//! no validation contract; a stale dataset produces wrong but non-fatal
//! charts.

pub mod bars;
pub mod components;
pub mod dataset;
pub mod error;
pub mod heatmap;
pub mod render;
pub mod trends;
pub mod types;

pub use dataset::Dataset;
pub use error::{FigureError, FigureResult};
pub use types::{Bar, HeatmapGrid, Series};

use std::path::{Path, PathBuf};

/// Render all eight figures from the dataset CSV into `out_dir`
pub fn render_all(dataset_path: &Path, out_dir: &Path) -> FigureResult<Vec<PathBuf>> {
    let dataset = Dataset::load(dataset_path)?;
    std::fs::create_dir_all(out_dir).map_err(|e| FigureError::IoWithPath {
        path: out_dir.display().to_string(),
        source: e,
    })?;

    let mut written = Vec::new();
    let mut save = |name: &str| {
        let path = out_dir.join(name);
        written.push(path.clone());
        path
    };

    render::bar_chart(
        &save("language_distribution.svg"),
        &bars::language_usage(&dataset)?,
        "Language",
        "No. of Repositories",
        false,
    )?;
    render::line_chart(
        &save("language_trends.svg"),
        &trends::language_trend_series(&dataset)?,
        "Year",
        "Perc. of Repositories",
        trends::TREND_YEARS[0]..trends::TREND_YEARS[trends::TREND_YEARS.len() - 1],
        0.0..1.0,
    )?;
    render::line_chart(
        &save("component_distribution_cdf.svg"),
        &components::component_cdfs(&dataset)?,
        "No. of Components",
        "Cum. Dist. of Repositories",
        0..components::MAX_COMPONENTS as i32,
        0.0..1.05,
    )?;
    render::bar_chart(
        &save("category_distribution.svg"),
        &bars::category_shares(&dataset)?,
        "Category",
        "Percentage of Repositories",
        true,
    )?;
    render::bar_chart(
        &save("database_distribution.svg"),
        &bars::database_usage(&dataset)?,
        "Database",
        "No. of Repositories",
        true,
    )?;
    render::bar_chart(
        &save("gateway_distribution.svg"),
        &bars::gateway_usage(&dataset)?,
        "Gateway",
        "No. of Repositories",
        false,
    )?;
    render::heatmap_chart(
        &save("component_heatmap_by_language.svg"),
        &heatmap::co_occurrence_by_language(&dataset)?,
        "Languages",
        "Supporting Components",
    )?;
    render::heatmap_chart(
        &save("component_heatmap_by_tech.svg"),
        &heatmap::co_occurrence_by_technology(&dataset)?,
        "Supporting Components",
        "Languages",
    )?;

    for path in &written {
        log::info!("figure written to {}", path.display());
    }
    Ok(written)
}
