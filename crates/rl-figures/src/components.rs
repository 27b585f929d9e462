//! Component count distributions
//!
//! Cumulative distribution of repositories over the number of
//! microservices, supporting components, and total components.

use crate::dataset::Dataset;
use crate::error::FigureResult;
use crate::types::Series;

/// Largest component count shown on the distribution axis
pub const MAX_COMPONENTS: usize = 33;

/// Dataset column and display label per distribution series
pub const COMPONENT_COLUMNS: [(&str, &str); 3] = [
    ("num_ms", "Microservices"),
    ("num_sup_comp", "Supporting Components"),
    ("num_total_comp", "All Components"),
];

/// Cumulative share of repositories with at most N components
pub fn component_cdfs(dataset: &Dataset) -> FigureResult<Vec<Series>> {
    let mut series = Vec::with_capacity(COMPONENT_COLUMNS.len());

    for (column, label) in COMPONENT_COLUMNS {
        let values = dataset.numeric(column)?;

        // Repositories per exact count; a count of zero contributes
        // nothing to the distribution.
        let mut counts = vec![0usize; MAX_COMPONENTS + 1];
        for value in values {
            let count = value.round() as i64;
            if count > 0 && count <= MAX_COMPONENTS as i64 {
                counts[count as usize] += 1;
            }
        }
        let total: usize = counts.iter().sum();

        let mut cumulative = 0usize;
        let points = counts
            .iter()
            .enumerate()
            .map(|(n, &at_n)| {
                cumulative += at_n;
                let share = if total == 0 {
                    0.0
                } else {
                    cumulative as f64 / total as f64
                };
                (n as i32, share)
            })
            .collect();
        series.push(Series {
            label: label.to_string(),
            points,
        });
    }
    Ok(series)
}

#[cfg(test)]
#[path = "components_test.rs"]
mod tests;
