//! Curated technology and language groupings
//!
//! These lists are part of the dataset definition: the derived
//! `has_*` columns count positive membership across them.

/// Languages treated as first-class in the dataset; everything else
/// feeds the `has_OtherLang` indicator.
pub const CORE_LANGUAGES: [&str; 6] = ["Java", "JavaScript", "TypeScript", "C#", "Go", "Python"];

/// Named datastore engines whose presence suppresses the generic
/// `Database` catch-all (double-counting guard, preserved as-is).
pub const DATASTORE_TECHNOLOGIES: [&str; 9] = [
    "MongoDB",
    "MySQL",
    "OracleDB",
    "SnowflakeDB",
    "PostgreSQL",
    "MsSQL",
    "Redis",
    "Cassandra",
    "MariaDB",
];

/// One derived category column and its member technologies
#[derive(Debug, Clone, Copy)]
pub struct CategorySpec {
    /// Name of the derived dataset column
    pub column: &'static str,
    /// Member technology names (without the `tech_` prefix)
    pub members: &'static [&'static str],
}

/// The nine derived technology categories, in dataset column order
pub const TECHNOLOGY_CATEGORIES: [CategorySpec; 9] = [
    CategorySpec {
        column: "has_Gateway",
        members: &["nginx", "Zuul", "Kong", "Envoy", "Traefik", "Ocelot"],
    },
    CategorySpec {
        column: "has_MessageQueue",
        members: &["Kafka", "RabbitMQ", "Nats"],
    },
    CategorySpec {
        column: "has_Auth",
        members: &["Keycloak", "Vault"],
    },
    CategorySpec {
        column: "has_BenchmarkTooling",
        members: &["Locust", "K6", "JMeter"],
    },
    CategorySpec {
        column: "has_Datastorage",
        members: &[
            "MongoDB",
            "MySQL",
            "PostgreSQL",
            "SnowflakeDB",
            "OracleDB",
            "MsSQL",
            "Redis",
            "Cassandra",
            "MariaDB",
            "ElasticSearch",
            "MinIO",
            "Database",
        ],
    },
    CategorySpec {
        column: "has_Observability",
        members: &[
            "Prometheus",
            "Jaeger",
            "Zipkin",
            "OpenTelemetry",
            "Logstash",
            "Filebeat",
            "Hystrix",
            "Kiali",
            "Grafana",
            "Kibana",
            "Akhq",
            "Portainer",
        ],
    },
    CategorySpec {
        column: "has_Frontend",
        members: &[
            "React",
            "NextJS",
            "Svelte",
            "SvelteKit",
            "VueJS",
            "Nuxt",
            "AngularJS",
            "AnalogJS",
        ],
    },
    CategorySpec {
        column: "has_Communication",
        members: &["Dapr", "Istio", "Consul"],
    },
    CategorySpec {
        column: "has_OtherTech",
        members: &["Eureka", "Zookeeper"],
    },
];
