/// Server configuration
///
/// # Environment variables
///
/// Every field can be overridden from the environment (or a `.env` file):
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | PORT | 5050 | HTTP port |
/// | DATABASE_URL | mem:// | SurrealDB connection string |
/// | DB_NAMESPACE | mern | SurrealDB namespace |
/// | DB_NAME | employees | SurrealDB database |
/// | DB_USERNAME | - | Root user for remote stores |
/// | DB_PASSWORD | - | Root password for remote stores |
/// | DB_RETRY_SECS | 5 | Delay between connection attempts |
/// | LOG_LEVEL | info | Default log filter |
/// | LOG_DIR | - | Directory for rolling log files |
/// | SHUTDOWN_TIMEOUT_MS | 10000 | Graceful shutdown budget |
/// | ENVIRONMENT | development | Environment label |
///
/// # Example
///
/// ```ignore
/// PORT=8080 DATABASE_URL=ws://localhost:8000 cargo run -p record-server
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP port
    pub http_port: u16,
    /// Store connection string (`mem://`, `ws://host:port`, ...)
    pub database_url: String,
    pub db_namespace: String,
    pub db_name: String,
    pub db_username: Option<String>,
    pub db_password: Option<String>,
    /// Seconds between reconnect attempts after a failed start
    pub db_retry_secs: u64,
    pub log_level: String,
    pub log_dir: Option<String>,
    pub shutdown_timeout_ms: u64,
    /// development | staging | production
    pub environment: String,
}

impl Config {
    /// Load configuration from environment variables
    ///
    /// Unset or unparsable values fall back to their defaults.
    pub fn from_env() -> Self {
        Self {
            http_port: env_parse("PORT", 5050),
            database_url: std::env::var("DATABASE_URL").unwrap_or_else(|_| "mem://".into()),
            db_namespace: std::env::var("DB_NAMESPACE").unwrap_or_else(|_| "mern".into()),
            db_name: std::env::var("DB_NAME").unwrap_or_else(|_| "employees".into()),
            db_username: env_non_empty("DB_USERNAME"),
            db_password: env_non_empty("DB_PASSWORD"),
            db_retry_secs: env_parse("DB_RETRY_SECS", 5),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_dir: env_non_empty("LOG_DIR"),
            shutdown_timeout_ms: env_parse("SHUTDOWN_TIMEOUT_MS", 10000),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
        }
    }

    /// Override the parts tests care about
    ///
    /// Everything else keeps its built-in default, ignoring the environment.
    pub fn with_overrides(http_port: u16, database_url: impl Into<String>) -> Self {
        Self {
            http_port,
            database_url: database_url.into(),
            ..Self::default()
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            http_port: 5050,
            database_url: "mem://".into(),
            db_namespace: "mern".into(),
            db_name: "employees".into(),
            db_username: None,
            db_password: None,
            db_retry_secs: 5,
            log_level: "info".into(),
            log_dir: None,
            shutdown_timeout_ms: 10000,
            environment: "development".into(),
        }
    }
}

fn env_parse<T: std::str::FromStr>(name: &str, default: T) -> T {
    std::env::var(name)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

fn env_non_empty(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.is_empty())
}
