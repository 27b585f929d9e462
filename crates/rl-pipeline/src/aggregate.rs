//! Join/derive stage
//!
//! Joins the five source tables one-to-one on the repository URL,
//! projects the dataset column allowlist, derives the category indicator
//! columns, and writes the flat dataset CSV.

use crate::categories::{CORE_LANGUAGES, TECHNOLOGY_CATEGORIES};
use crate::components::load_components;
use crate::containerization::load_containerization;
use crate::error::{PipelineError, PipelineResult};
use crate::languages::load_languages;
use crate::metadata::load_metadata;
use crate::paths::DataPaths;
use crate::snapshot::SnapshotSpec;
use crate::technologies::load_technologies;
use rl_frame::{csv_io, Frame};

/// Fixed leading columns of the dataset, before the language and
/// technology blocks
const LEADING_COLUMNS: [&str; 15] = [
    "id",
    "created_at",
    "updated_at",
    "size",
    "language",
    "has_wiki",
    "license",
    "is_template",
    "num_ms",
    "num_sup_comp",
    "num_total_comp",
    "is_fork",
    "num_forks",
    "num_watchers",
    "is_archived",
];

/// Containerization adoption shares reported after a successful run
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AggregateReport {
    pub rows: usize,
    pub docker_share: f64,
    pub compose_share: f64,
    pub kubernetes_share: f64,
}

/// Run the full aggregation stage: load, join, derive, write
pub fn run(paths: &DataPaths, spec: &SnapshotSpec) -> PipelineResult<AggregateReport> {
    log::info!(
        "aggregating dataset under {}",
        paths.root().display()
    );

    let components = load_components(&paths.component_counts(), spec)?;
    log::info!("component counts: {} repositories", components.len());
    let metadata = load_metadata(&paths.metadata())?;
    log::info!("metadata: {} repositories", metadata.len());
    let languages = load_languages(&paths.languages(), spec)?;
    log::info!(
        "languages: {} retained columns",
        languages.column_names().len()
    );
    let technologies = load_technologies(&paths.technologies(), spec)?;
    log::info!(
        "technologies: {} detected columns",
        technologies.column_names().len()
    );
    let containerization = load_containerization(&paths.containerization(), spec)?;

    let dataset = build_dataset(
        &components,
        &metadata,
        languages,
        technologies,
        &containerization,
        spec,
    )?;

    let report = usage_report(&dataset)?;
    log::info!("docker usage: {:.3}", report.docker_share);
    log::info!("docker-compose usage: {:.3}", report.compose_share);
    log::info!("kubernetes usage: {:.3}", report.kubernetes_share);

    std::fs::create_dir_all(paths.dataset_dir()).map_err(|e| PipelineError::IoWithPath {
        path: paths.dataset_dir().display().to_string(),
        source: e,
    })?;
    csv_io::write_file(&dataset, &paths.dataset())?;
    log::info!("dataset written to {}", paths.dataset().display());

    Ok(report)
}

/// Join the five source frames and derive the indicator columns
pub fn build_dataset(
    components: &Frame,
    metadata: &Frame,
    mut languages: Frame,
    mut technologies: Frame,
    containerization: &Frame,
    spec: &SnapshotSpec,
) -> PipelineResult<Frame> {
    languages.prefix_columns("lan_");
    technologies.prefix_columns("tech_");

    let joined = components
        .inner_join_one_to_one(metadata)?
        .inner_join_one_to_one(&languages)?
        .inner_join_one_to_one(&technologies)?
        .inner_join_one_to_one(containerization)?;

    if joined.len() != spec.rows {
        return Err(PipelineError::PostJoinRowCount {
            expected: spec.rows,
            actual: joined.len(),
        });
    }

    let lan_columns: Vec<String> = languages
        .column_names()
        .iter()
        .map(|s| s.to_string())
        .collect();
    let tech_columns: Vec<String> = technologies
        .column_names()
        .iter()
        .map(|s| s.to_string())
        .collect();

    let mut allowlist: Vec<&str> = LEADING_COLUMNS.to_vec();
    allowlist.extend(lan_columns.iter().map(String::as_str));
    allowlist.extend(tech_columns.iter().map(String::as_str));
    allowlist.extend(["docker", "compose", "kubernetes"]);

    let mut dataset = joined.select(&allowlist)?;

    // Nonzero usage of any retained language outside the core set.
    let other_languages: Vec<String> = lan_columns
        .iter()
        .filter(|column| {
            !CORE_LANGUAGES
                .iter()
                .any(|core| **column == format!("lan_{core}"))
        })
        .cloned()
        .collect();
    let counts = dataset.count_positive_across(&other_languages)?;
    dataset.insert_column("has_OtherLang", counts)?;

    for category in TECHNOLOGY_CATEGORIES {
        // Group members the detector never reported simply contribute
        // nothing to the count.
        let members: Vec<String> = category
            .members
            .iter()
            .map(|member| format!("tech_{member}"))
            .filter(|column| dataset.has_column(column))
            .collect();
        let counts = dataset.count_positive_across(&members)?;
        dataset.insert_column(category.column, counts)?;
    }

    Ok(dataset)
}

/// Share of repositories with each containerization flag set
fn usage_report(dataset: &Frame) -> PipelineResult<AggregateReport> {
    let rows = dataset.len();
    let share = |column: &str| -> PipelineResult<f64> {
        if rows == 0 {
            return Ok(0.0);
        }
        let positive = dataset
            .column(column)?
            .iter()
            .filter(|v| v.is_positive())
            .count();
        Ok(positive as f64 / rows as f64)
    };
    Ok(AggregateReport {
        rows,
        docker_share: share("docker")?,
        compose_share: share("compose")?,
        kubernetes_share: share("kubernetes")?,
    })
}

#[cfg(test)]
#[path = "aggregate_test.rs"]
mod tests;
