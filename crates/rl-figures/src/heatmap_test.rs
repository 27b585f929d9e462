use super::*;
use rl_frame::csv_io;

/// One dataset row per entry, listing the positive language and
/// technology columns for that repository.
fn dataset(rows: &[(&[&str], &[&str])]) -> Dataset {
    let mut text = String::from("created_at");
    for (column, _) in HEATMAP_LANGUAGES {
        text.push(',');
        text.push_str(column);
    }
    for (column, _) in HEATMAP_TECHNOLOGIES {
        text.push(',');
        text.push_str(column);
    }
    for (languages, technologies) in rows {
        text.push_str("\n2020-01-01T00:00:00Z");
        for (column, _) in HEATMAP_LANGUAGES {
            text.push(',');
            text.push(if languages.contains(&column) { '1' } else { '0' });
        }
        for (column, _) in HEATMAP_TECHNOLOGIES {
            text.push(',');
            text.push(if technologies.contains(&column) { '1' } else { '0' });
        }
    }
    Dataset::from_frame(csv_io::read_positional(text.as_bytes()).unwrap()).unwrap()
}

#[test]
fn test_by_language_normalizes_over_each_language() {
    let dataset = dataset(&[
        (&["lan_Java"], &["tech_Kafka"]),
        (&["lan_Java"], &[]),
        (&["lan_Go"], &["tech_Kafka"]),
    ]);
    let grid = co_occurrence_by_language(&dataset).unwrap();

    assert_eq!(grid.x_labels.len(), HEATMAP_LANGUAGES.len());
    assert_eq!(grid.y_labels.len(), HEATMAP_TECHNOLOGIES.len());

    let kafka = grid.y_labels.iter().position(|l| l == "Kafka").unwrap();
    let java = grid.x_labels.iter().position(|l| l == "Java").unwrap();
    let go = grid.x_labels.iter().position(|l| l == "Go").unwrap();

    // One of two Java repositories uses Kafka; the only Go one does.
    assert_eq!(grid.cells[kafka][java], 0.5);
    assert_eq!(grid.cells[kafka][go], 1.0);
}

#[test]
fn test_by_technology_normalizes_over_each_technology() {
    let dataset = dataset(&[
        (&["lan_Java"], &["tech_Kafka"]),
        (&["lan_Go"], &["tech_Kafka"]),
    ]);
    let grid = co_occurrence_by_technology(&dataset).unwrap();

    let java = grid.y_labels.iter().position(|l| l == "Java").unwrap();
    let kafka = grid.x_labels.iter().position(|l| l == "Kafka").unwrap();

    assert_eq!(grid.cells[java][kafka], 0.5);
}

#[test]
fn test_unused_denominator_yields_zero() {
    let dataset = dataset(&[(&["lan_Java"], &[])]);

    let by_language = co_occurrence_by_language(&dataset).unwrap();
    let by_technology = co_occurrence_by_technology(&dataset).unwrap();

    // No repository uses Zuul: every rate normalized over it is zero
    // rather than a division failure.
    let zuul = by_technology
        .x_labels
        .iter()
        .position(|l| l == "Zuul")
        .unwrap();
    for row in &by_technology.cells {
        assert_eq!(row[zuul], 0.0);
    }
    for row in &by_language.cells {
        assert_eq!(row.len(), HEATMAP_LANGUAGES.len());
    }
}

#[test]
fn test_rates_are_rounded_to_two_decimals() {
    let dataset = dataset(&[
        (&["lan_Java"], &["tech_Redis"]),
        (&["lan_Java"], &[]),
        (&["lan_Java"], &[]),
    ]);
    let grid = co_occurrence_by_language(&dataset).unwrap();

    let redis = grid.y_labels.iter().position(|l| l == "Redis").unwrap();
    let java = grid.x_labels.iter().position(|l| l == "Java").unwrap();
    assert_eq!(grid.cells[redis][java], 0.33);
}
