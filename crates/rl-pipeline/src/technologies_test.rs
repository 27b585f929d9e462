use super::*;
use tempfile::TempDir;

const SPEC: SnapshotSpec = SnapshotSpec {
    rows: 2,
    max_microservices: 4,
    max_supporting: 6,
    max_total: 10,
};

fn write_files(files: &[(&str, &str)]) -> TempDir {
    let dir = TempDir::new().unwrap();
    for (name, content) in files {
        std::fs::write(dir.path().join(name), content).unwrap();
    }
    dir
}

#[test]
fn test_database_suppression() {
    let dir = write_files(&[
        (
            "acme---shop.json",
            r#"{ "MySQL": { "total_count": 5 }, "Database": { "total_count": 3 } }"#,
        ),
        (
            "beta---cart.json",
            r#"{ "MySQL": { "total_count": 0 }, "Database": { "total_count": 2 } }"#,
        ),
    ]);
    let frame = load_technologies(dir.path(), &SPEC).unwrap();

    // A named engine is present: the generic catch-all must not count
    // the repository again.
    assert_eq!(
        frame.value("https://github.com/acme/shop", "Database").unwrap(),
        &Value::Int(0)
    );
    // No named engine: the catch-all keeps its detected count.
    assert_eq!(
        frame.value("https://github.com/beta/cart", "Database").unwrap(),
        &Value::Int(2)
    );
}

#[test]
fn test_missing_technology_fills_zero() {
    let dir = write_files(&[
        ("acme---shop.json", r#"{ "Kafka": { "total_count": 3 } }"#),
        ("beta---cart.json", r#"{ "Redis": { "total_count": 1 } }"#),
    ]);
    let frame = load_technologies(dir.path(), &SPEC).unwrap();

    assert_eq!(
        frame.value("https://github.com/beta/cart", "Kafka").unwrap(),
        &Value::Int(0)
    );
    assert_eq!(
        frame.value("https://github.com/acme/shop", "Redis").unwrap(),
        &Value::Int(0)
    );
}

#[test]
fn test_row_count_enforced() {
    let dir = write_files(&[("acme---shop.json", r#"{ "Kafka": { "total_count": 1 } }"#)]);
    let err = load_technologies(dir.path(), &SPEC).unwrap_err();
    assert!(matches!(
        err,
        PipelineError::RowCount { source_name: "technologies", expected: 2, actual: 1 }
    ));
}

#[test]
fn test_non_mapping_file_rejected() {
    let dir = write_files(&[
        ("acme---shop.json", "[]"),
        ("beta---cart.json", r#"{ "Kafka": { "total_count": 1 } }"#),
    ]);
    let err = load_technologies(dir.path(), &SPEC).unwrap_err();
    assert!(matches!(err, PipelineError::NotAMapping { .. }));
}

#[test]
fn test_missing_total_count_rejected() {
    let dir = write_files(&[
        ("acme---shop.json", r#"{ "Kafka": { "matches": 1 } }"#),
        ("beta---cart.json", r#"{ "Kafka": { "total_count": 1 } }"#),
    ]);
    let err = load_technologies(dir.path(), &SPEC).unwrap_err();
    assert!(matches!(
        err,
        PipelineError::MissingField { field: "total_count", .. }
    ));
}
