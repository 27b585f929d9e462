//! Language/technology co-occurrence heatmaps
//!
//! Both heatmaps share the same underlying grid of co-usage counts; they
//! differ only in the normalization axis. Rates are rounded to two
//! decimals, matching the annotated display.

use crate::dataset::Dataset;
use crate::error::FigureResult;
use crate::types::HeatmapGrid;

/// Language columns and display labels on the heatmap axes
pub const HEATMAP_LANGUAGES: [(&str, &str); 7] = [
    ("lan_Java", "Java"),
    ("lan_JavaScript", "JavaScript"),
    ("lan_C#", "C#"),
    ("lan_TypeScript", "TypeScript"),
    ("lan_Go", "Go"),
    ("lan_Python", "Python"),
    ("has_OtherLang", "Other"),
];

/// Supporting technology columns and display labels on the heatmap axes
pub const HEATMAP_TECHNOLOGIES: [(&str, &str); 19] = [
    ("tech_Prometheus", "Prometheus"),
    ("tech_MongoDB", "MongoDB"),
    ("tech_MySQL", "MySQL"),
    ("tech_PostgreSQL", "PostgreSQL"),
    ("tech_MsSQL", "MsSQL"),
    ("tech_Redis", "Redis"),
    ("tech_React", "React"),
    ("tech_NextJS", "NextJS"),
    ("tech_VueJS", "VueJS"),
    ("tech_AngularJS", "AngularJS"),
    ("tech_Jaeger", "Jaeger"),
    ("tech_Zipkin", "Zipkin"),
    ("tech_OpenTelemetry", "OpenTelemetry"),
    ("tech_ElasticSearch", "ElasticSearch"),
    ("tech_Kafka", "Kafka"),
    ("tech_RabbitMQ", "RabbitMQ"),
    ("tech_Consul", "Consul"),
    ("tech_nginx", "nginx"),
    ("tech_Zuul", "Zuul"),
];

/// Share of a language's repositories that also use each technology.
/// Rows are technologies, columns are languages.
pub fn co_occurrence_by_language(dataset: &Dataset) -> FigureResult<HeatmapGrid> {
    let languages = masks(dataset, &HEATMAP_LANGUAGES)?;
    let technologies = masks(dataset, &HEATMAP_TECHNOLOGIES)?;

    let cells = technologies
        .iter()
        .map(|(_, tech_mask)| {
            languages
                .iter()
                .map(|(_, lang_mask)| rate(lang_mask, tech_mask, lang_mask))
                .collect()
        })
        .collect();

    Ok(HeatmapGrid {
        x_labels: labels(&HEATMAP_LANGUAGES),
        y_labels: labels(&HEATMAP_TECHNOLOGIES),
        cells,
    })
}

/// Share of a technology's repositories attributed to each language.
/// Rows are languages, columns are technologies.
pub fn co_occurrence_by_technology(dataset: &Dataset) -> FigureResult<HeatmapGrid> {
    let languages = masks(dataset, &HEATMAP_LANGUAGES)?;
    let technologies = masks(dataset, &HEATMAP_TECHNOLOGIES)?;

    let cells = languages
        .iter()
        .map(|(_, lang_mask)| {
            technologies
                .iter()
                .map(|(_, tech_mask)| rate(lang_mask, tech_mask, tech_mask))
                .collect()
        })
        .collect();

    Ok(HeatmapGrid {
        x_labels: labels(&HEATMAP_TECHNOLOGIES),
        y_labels: labels(&HEATMAP_LANGUAGES),
        cells,
    })
}

fn masks<'a>(
    dataset: &Dataset,
    columns: &[(&str, &'a str)],
) -> FigureResult<Vec<(&'a str, Vec<bool>)>> {
    columns
        .iter()
        .map(|(column, label)| Ok((*label, dataset.positive(column)?)))
        .collect()
}

fn labels(columns: &[(&str, &str)]) -> Vec<String> {
    columns.iter().map(|(_, label)| label.to_string()).collect()
}

/// Co-usage count over the denominator mask's count, rounded to two
/// decimals; an unused denominator yields 0.0.
fn rate(lang_mask: &[bool], tech_mask: &[bool], denominator: &[bool]) -> f64 {
    let both = lang_mask
        .iter()
        .zip(tech_mask)
        .filter(|(&l, &t)| l && t)
        .count();
    let base = denominator.iter().filter(|&&d| d).count();
    if base == 0 {
        return 0.0;
    }
    ((both as f64 / base as f64) * 100.0).round() / 100.0
}

#[cfg(test)]
#[path = "heatmap_test.rs"]
mod tests;
