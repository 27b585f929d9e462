//! Bar chart aggregates: language usage, category shares, datastore and
//! gateway adoption

use crate::dataset::Dataset;
use crate::error::FigureResult;
use crate::types::Bar;

/// Dataset column and display label per language bar
pub const LANGUAGE_BARS: [(&str, &str); 7] = [
    ("lan_Java", "Java"),
    ("lan_JavaScript", "JavaScript"),
    ("lan_TypeScript", "TypeScript"),
    ("lan_C#", "C#"),
    ("lan_Python", "Python"),
    ("lan_Go", "Go"),
    ("has_OtherLang", "Other"),
];

/// Derived category column and display label per category bar
pub const CATEGORY_BARS: [(&str, &str); 9] = [
    ("has_Datastorage", "Data Storage"),
    ("has_MessageQueue", "Message Queue"),
    ("has_Observability", "Observability"),
    ("has_Gateway", "Gateway"),
    ("has_Frontend", "Frontend"),
    ("has_Communication", "Communication"),
    ("has_Auth", "Authentication"),
    ("has_BenchmarkTooling", "Benchmark Tooling"),
    ("has_OtherTech", "Other"),
];

/// Datastore columns and display labels, generic catch-all last
pub const DATABASE_BARS: [(&str, &str); 10] = [
    ("tech_MongoDB", "MongoDB"),
    ("tech_Redis", "Redis"),
    ("tech_PostgreSQL", "PostgreSQL"),
    ("tech_MySQL", "MySQL"),
    ("tech_MsSQL", "MsSQL"),
    ("tech_MariaDB", "MariaDB"),
    ("tech_SnowflakeDB", "SnowflakeDB"),
    ("tech_Cassandra", "Cassandra"),
    ("tech_OracleDB", "OracleDB"),
    ("tech_Database", "Other"),
];

/// Gateway columns and display labels
pub const GATEWAY_BARS: [(&str, &str); 6] = [
    ("tech_nginx", "nginx"),
    ("tech_Zuul", "Zuul"),
    ("tech_Ocelot", "Ocelot"),
    ("tech_Envoy", "Envoy"),
    ("tech_Kong", "Kong"),
    ("tech_Traefik", "Traefik"),
];

fn positive_count(dataset: &Dataset, column: &str) -> FigureResult<usize> {
    Ok(dataset.positive(column)?.iter().filter(|&&p| p).count())
}

/// Repositories using each language
pub fn language_usage(dataset: &Dataset) -> FigureResult<Vec<Bar>> {
    count_bars(dataset, &LANGUAGE_BARS)
}

/// Share of repositories per derived technology category
pub fn category_shares(dataset: &Dataset) -> FigureResult<Vec<Bar>> {
    let total = dataset.len();
    CATEGORY_BARS
        .iter()
        .map(|(column, label)| {
            let count = positive_count(dataset, column)?;
            let share = if total == 0 {
                0.0
            } else {
                count as f64 / total as f64
            };
            Ok(Bar {
                label: label.to_string(),
                value: share,
            })
        })
        .collect()
}

/// Repositories using each datastore engine
pub fn database_usage(dataset: &Dataset) -> FigureResult<Vec<Bar>> {
    count_bars(dataset, &DATABASE_BARS)
}

/// Repositories using each gateway technology
pub fn gateway_usage(dataset: &Dataset) -> FigureResult<Vec<Bar>> {
    count_bars(dataset, &GATEWAY_BARS)
}

fn count_bars(dataset: &Dataset, columns: &[(&str, &str)]) -> FigureResult<Vec<Bar>> {
    columns
        .iter()
        .map(|(column, label)| {
            Ok(Bar {
                label: label.to_string(),
                value: positive_count(dataset, column)? as f64,
            })
        })
        .collect()
}

#[cfg(test)]
#[path = "bars_test.rs"]
mod tests;
