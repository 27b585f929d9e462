//! Language adoption over time
//!
//! For each core language (plus the other-language indicator), the share
//! of repositories created in a given year that use it.

use crate::dataset::Dataset;
use crate::error::FigureResult;
use crate::types::Series;

/// Years shown on the trend chart
pub const TREND_YEARS: [i32; 10] = [2015, 2016, 2017, 2018, 2019, 2020, 2021, 2022, 2023, 2024];

/// Dataset column and display label per trend series
pub const TREND_LANGUAGES: [(&str, &str); 7] = [
    ("lan_Java", "Java"),
    ("lan_JavaScript", "JavaScript"),
    ("lan_TypeScript", "TypeScript"),
    ("lan_C#", "C#"),
    ("lan_Go", "Go"),
    ("lan_Python", "Python"),
    ("has_OtherLang", "Other"),
];

/// Adoption rate per year for every trend language
pub fn language_trend_series(dataset: &Dataset) -> FigureResult<Vec<Series>> {
    let years = dataset.years();
    let mut series = Vec::with_capacity(TREND_LANGUAGES.len());

    for (column, label) in TREND_LANGUAGES {
        let positive = dataset.positive(column)?;
        let points = TREND_YEARS
            .iter()
            .map(|&year| {
                let total = years.iter().filter(|&&y| y == year).count();
                let used = years
                    .iter()
                    .zip(&positive)
                    .filter(|(&y, &used)| y == year && used)
                    .count();
                let rate = if total == 0 {
                    0.0
                } else {
                    used as f64 / total as f64
                };
                (year, rate)
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
#[path = "trends_test.rs"]
mod tests;
