use super::*;
use rl_frame::{FrameError, Value};
use std::path::Path;
use tempfile::TempDir;

const SPEC: SnapshotSpec = SnapshotSpec {
    rows: 2,
    max_microservices: 4,
    max_supporting: 6,
    max_total: 10,
};

const METADATA: &str = r#"[
  {
    "id": 101,
    "html_url": "https://github.com/acme/shop",
    "created_at": "2021-03-01T10:00:00Z",
    "updated_at": "2024-06-01T10:00:00Z",
    "size": 2048,
    "language": "Java",
    "has_wiki": true,
    "license": { "key": "mit", "name": "MIT License" },
    "is_template": false,
    "fork": false,
    "forks": 12,
    "watchers": 40,
    "archived": false
  },
  {
    "id": 102,
    "html_url": "https://github.com/beta/cart",
    "created_at": "2019-07-15T10:00:00Z",
    "updated_at": "2023-01-01T10:00:00Z",
    "size": 512,
    "language": "TypeScript",
    "has_wiki": false,
    "license": null,
    "is_template": false,
    "fork": false,
    "forks": 3,
    "watchers": 7,
    "archived": false
  }
]"#;

/// Lay out a complete two-repository raw data tree
fn write_tree(root: &Path) {
    let raw = root.join("raw_data");
    std::fs::create_dir_all(raw.join("applications")).unwrap();
    for sub in ["technologies", "languages", "containerization"] {
        std::fs::create_dir_all(raw.join(sub)).unwrap();
    }

    std::fs::write(
        raw.join("application_components.csv"),
        "https://github.com/acme/shop,2,3\nhttps://github.com/beta/cart,4,6\n",
    )
    .unwrap();
    std::fs::write(raw.join("applications/automatic_filtering.json"), METADATA).unwrap();

    std::fs::write(
        raw.join("languages/acme---shop.json"),
        r#"{ "Java": { "percentage": 80.0 }, "Go": { "percentage": 20.0 } }"#,
    )
    .unwrap();
    std::fs::write(
        raw.join("languages/beta---cart.json"),
        r#"{ "TypeScript": { "percentage": 60.0 }, "Rust": { "percentage": 40.0 } }"#,
    )
    .unwrap();

    std::fs::write(
        raw.join("technologies/acme---shop.json"),
        r#"{
          "Kafka": { "total_count": 3 },
          "RabbitMQ": { "total_count": 1 },
          "Nats": { "total_count": 0 },
          "MySQL": { "total_count": 5 },
          "Database": { "total_count": 3 },
          "nginx": { "total_count": 2 }
        }"#,
    )
    .unwrap();
    std::fs::write(
        raw.join("technologies/beta---cart.json"),
        r#"{ "Keycloak": { "total_count": 1 }, "Database": { "total_count": 2 } }"#,
    )
    .unwrap();

    std::fs::write(
        raw.join("containerization/acme---shop.json"),
        r#"{
          "Dockerfile": { "total_count": 2 },
          "DockerCompose": { "total_count": 1 },
          "Kubernetes": { "total_count": 0 }
        }"#,
    )
    .unwrap();
    std::fs::write(
        raw.join("containerization/beta---cart.json"),
        r#"{
          "Dockerfile": { "total_count": 0 },
          "DockerCompose": { "total_count": 0 },
          "Kubernetes": { "total_count": 0 }
        }"#,
    )
    .unwrap();
}

#[test]
fn test_end_to_end_aggregation() {
    let dir = TempDir::new().unwrap();
    write_tree(dir.path());
    let paths = DataPaths::new(dir.path());

    let report = run(&paths, &SPEC).unwrap();
    assert_eq!(report.rows, 2);
    assert!((report.docker_share - 0.5).abs() < 1e-9);
    assert!((report.compose_share - 0.5).abs() < 1e-9);
    assert!((report.kubernetes_share - 0.0).abs() < 1e-9);

    let dataset = rl_frame::csv_io::read_file_positional(&paths.dataset()).unwrap();
    assert_eq!(dataset.len(), 2);

    // Rows are sorted by URL: acme/shop first.
    assert_eq!(dataset.value("0", "num_total_comp").unwrap(), &Value::Int(5));
    assert_eq!(dataset.value("1", "num_total_comp").unwrap(), &Value::Int(10));

    // Database suppression made it through the join.
    assert_eq!(dataset.value("0", "tech_Database").unwrap(), &Value::Int(0));
    assert_eq!(dataset.value("1", "tech_Database").unwrap(), &Value::Int(2));

    // Exactly two of {Kafka, RabbitMQ, Nats} are positive for acme/shop.
    assert_eq!(dataset.value("0", "has_MessageQueue").unwrap(), &Value::Int(2));
    assert_eq!(dataset.value("1", "has_MessageQueue").unwrap(), &Value::Int(0));

    // Rust is the only non-core language with usage.
    assert_eq!(dataset.value("0", "has_OtherLang").unwrap(), &Value::Int(0));
    assert_eq!(dataset.value("1", "has_OtherLang").unwrap(), &Value::Int(1));

    // Both repositories hit a datastore (named engine vs. catch-all).
    assert_eq!(dataset.value("0", "has_Datastorage").unwrap(), &Value::Int(1));
    assert_eq!(dataset.value("1", "has_Datastorage").unwrap(), &Value::Int(1));

    assert_eq!(dataset.value("0", "has_Gateway").unwrap(), &Value::Int(1));
    assert_eq!(dataset.value("1", "has_Auth").unwrap(), &Value::Int(1));

    assert_eq!(dataset.value("0", "docker").unwrap(), &Value::Bool(true));
    assert_eq!(dataset.value("1", "docker").unwrap(), &Value::Bool(false));

    // Fixed column order: allowlist, then the derived indicators.
    let names = dataset.column_names();
    assert_eq!(names[0], "id");
    assert_eq!(names[names.len() - 10], "has_OtherLang");
    assert_eq!(names[names.len() - 1], "has_OtherTech");
}

#[test]
fn test_single_repository_tree() {
    let dir = TempDir::new().unwrap();
    let raw = dir.path().join("raw_data");
    std::fs::create_dir_all(raw.join("applications")).unwrap();
    for sub in ["technologies", "languages", "containerization"] {
        std::fs::create_dir_all(raw.join(sub)).unwrap();
    }

    std::fs::write(
        raw.join("application_components.csv"),
        "https://github.com/a/b,2,3\n",
    )
    .unwrap();
    std::fs::write(
        raw.join("applications/automatic_filtering.json"),
        r#"[{
          "id": 1,
          "html_url": "https://github.com/a/b",
          "created_at": "2020-01-01T00:00:00Z",
          "updated_at": "2020-06-01T00:00:00Z",
          "size": 10,
          "language": "Java",
          "has_wiki": false,
          "license": null,
          "is_template": false,
          "fork": false,
          "forks": 0,
          "watchers": 1,
          "archived": false
        }]"#,
    )
    .unwrap();
    std::fs::write(
        raw.join("languages/a---b.json"),
        r#"{ "Java": { "percentage": 100.0 } }"#,
    )
    .unwrap();
    std::fs::write(
        raw.join("technologies/a---b.json"),
        r#"{ "Kafka": { "total_count": 1 } }"#,
    )
    .unwrap();
    std::fs::write(
        raw.join("containerization/a---b.json"),
        r#"{
          "Dockerfile": { "total_count": 1 },
          "DockerCompose": { "total_count": 0 },
          "Kubernetes": { "total_count": 0 }
        }"#,
    )
    .unwrap();

    let spec = SnapshotSpec {
        rows: 1,
        max_microservices: 2,
        max_supporting: 3,
        max_total: 5,
    };
    let report = run(&DataPaths::new(dir.path()), &spec).unwrap();
    assert_eq!(report.rows, 1);

    let dataset =
        rl_frame::csv_io::read_file_positional(&DataPaths::new(dir.path()).dataset()).unwrap();
    assert_eq!(dataset.len(), 1);
    assert_eq!(dataset.value("0", "num_total_comp").unwrap(), &Value::Int(5));
    assert_eq!(dataset.value("0", "has_MessageQueue").unwrap(), &Value::Int(1));
    assert_eq!(dataset.value("0", "has_OtherLang").unwrap(), &Value::Int(0));
    assert_eq!(dataset.value("0", "docker").unwrap(), &Value::Bool(true));
}

#[test]
fn test_repeated_runs_are_byte_identical() {
    let dir = TempDir::new().unwrap();
    write_tree(dir.path());
    let paths = DataPaths::new(dir.path());

    run(&paths, &SPEC).unwrap();
    let first = std::fs::read(paths.dataset()).unwrap();
    run(&paths, &SPEC).unwrap();
    let second = std::fs::read(paths.dataset()).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_missing_repository_in_metadata_is_fatal() {
    let dir = TempDir::new().unwrap();
    write_tree(dir.path());
    // Keep only acme/shop in the metadata array.
    let truncated = METADATA.replace("https://github.com/beta/cart", "https://github.com/beta/other");
    std::fs::write(
        dir.path().join("raw_data/applications/automatic_filtering.json"),
        truncated,
    )
    .unwrap();

    let err = run(&DataPaths::new(dir.path()), &SPEC).unwrap_err();
    assert!(matches!(
        err,
        PipelineError::Frame(FrameError::JoinKeyMismatch { .. })
    ));

    // Fail-fast: no dataset file was produced.
    assert!(!DataPaths::new(dir.path()).dataset().exists());
}

#[test]
fn test_derived_category_columns_count_not_flag() {
    let dir = TempDir::new().unwrap();
    write_tree(dir.path());
    let paths = DataPaths::new(dir.path());
    let spec = SPEC;

    let components = crate::components::load_components(&paths.component_counts(), &spec).unwrap();
    let metadata = crate::metadata::load_metadata(&paths.metadata()).unwrap();
    let languages = crate::languages::load_languages(&paths.languages(), &spec).unwrap();
    let technologies =
        crate::technologies::load_technologies(&paths.technologies(), &spec).unwrap();
    let containerization =
        crate::containerization::load_containerization(&paths.containerization(), &spec).unwrap();

    let dataset = build_dataset(
        &components,
        &metadata,
        languages,
        technologies,
        &containerization,
        &spec,
    )
    .unwrap();

    // Counts, not booleans: acme/shop has two positive message-queue
    // technologies and they are reported as 2.
    assert_eq!(
        dataset
            .value("https://github.com/acme/shop", "has_MessageQueue")
            .unwrap(),
        &Value::Int(2)
    );
}
