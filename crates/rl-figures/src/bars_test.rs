use super::*;
use rl_frame::csv_io;

/// One dataset row per entry; each entry lists the columns that are
/// positive for that repository.
fn dataset(columns: &[(&str, &str)], rows: &[&[&str]]) -> Dataset {
    let mut text = String::from("created_at");
    for (column, _) in columns {
        text.push(',');
        text.push_str(column);
    }
    for positives in rows {
        text.push_str("\n2020-01-01T00:00:00Z");
        for (column, _) in columns {
            text.push(',');
            text.push(if positives.contains(column) { '1' } else { '0' });
        }
    }
    Dataset::from_frame(csv_io::read_positional(text.as_bytes()).unwrap()).unwrap()
}

#[test]
fn test_language_usage_counts_repositories() {
    let dataset = dataset(
        &LANGUAGE_BARS,
        &[
            &["lan_Java", "lan_Go"],
            &["lan_Java"],
            &["has_OtherLang"],
        ],
    );
    let bars = language_usage(&dataset).unwrap();

    let labels: Vec<&str> = bars.iter().map(|b| b.label.as_str()).collect();
    assert_eq!(
        labels,
        vec!["Java", "JavaScript", "TypeScript", "C#", "Python", "Go", "Other"]
    );
    assert_eq!(bars[0].value, 2.0);
    assert_eq!(bars[5].value, 1.0);
    assert_eq!(bars[6].value, 1.0);
}

#[test]
fn test_category_shares_are_fractions_of_all_repositories() {
    let dataset = dataset(
        &CATEGORY_BARS,
        &[
            &["has_Datastorage", "has_Gateway"],
            &["has_Datastorage"],
            &["has_Observability"],
            &[],
        ],
    );
    let bars = category_shares(&dataset).unwrap();

    assert_eq!(bars[0].label, "Data Storage");
    assert_eq!(bars[0].value, 0.5);
    assert_eq!(bars[3].label, "Gateway");
    assert_eq!(bars[3].value, 0.25);
    assert_eq!(bars[8].label, "Other");
    assert_eq!(bars[8].value, 0.0);
}

#[test]
fn test_database_usage_ends_with_generic_catch_all() {
    let dataset = dataset(
        &DATABASE_BARS,
        &[&["tech_MongoDB", "tech_Database"], &["tech_MongoDB"]],
    );
    let bars = database_usage(&dataset).unwrap();

    assert_eq!(bars.len(), 10);
    assert_eq!(bars[0].label, "MongoDB");
    assert_eq!(bars[0].value, 2.0);
    assert_eq!(bars[9].label, "Other");
    assert_eq!(bars[9].value, 1.0);
}

#[test]
fn test_gateway_usage_counts_each_technology() {
    let dataset = dataset(&GATEWAY_BARS, &[&["tech_nginx"], &["tech_nginx", "tech_Kong"]]);
    let bars = gateway_usage(&dataset).unwrap();

    assert_eq!(bars.len(), 6);
    assert_eq!(bars[0].label, "nginx");
    assert_eq!(bars[0].value, 2.0);
    assert_eq!(bars[4].label, "Kong");
    assert_eq!(bars[4].value, 1.0);
}
