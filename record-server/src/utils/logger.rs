//! Logging Infrastructure
//!
//! `RUST_LOG` takes precedence. Otherwise the configured level applies to
//! this crate, to `tower_http` and to store failures (target `database`);
//! everything else logs warnings and errors only.

use std::path::Path;
use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset
pub fn default_filter(level: &str) -> EnvFilter {
    EnvFilter::new(format!(
        "warn,record_server={level},tower_http={level},database={level}"
    ))
}

/// Initialize the logger, writing to a daily rolling file when `log_dir` exists
pub fn init_logger_with_file(log_level: Option<&str>, log_dir: Option<&str>) {
    let level = log_level.unwrap_or("info");
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter(level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_target(false);

    if let Some(dir) = log_dir {
        let log_path = Path::new(dir);
        if log_path.is_dir() {
            let file_appender = tracing_appender::rolling::daily(log_path, "record-server");
            let _ = subscriber.with_writer(file_appender).try_init();
            return;
        }
        eprintln!("LOG_DIR {dir} does not exist, logging to stdout");
    }

    // A subscriber may already be installed (tests, embedding)
    let _ = subscriber.try_init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing::Level;

    fn enabled_under(filter: EnvFilter) -> (bool, bool, bool) {
        let subscriber = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::sink)
            .finish();
        tracing::subscriber::with_default(subscriber, || {
            (
                tracing::enabled!(target: "database", Level::ERROR),
                tracing::enabled!(target: "record_server::api", Level::INFO),
                tracing::enabled!(target: "surrealdb::core", Level::INFO),
            )
        })
    }

    #[test]
    fn default_filter_keeps_store_failures() {
        let (database, crate_info, dependency_info) = enabled_under(default_filter("info"));
        assert!(database);
        assert!(crate_info);
        assert!(!dependency_info);
    }

    #[test]
    fn errors_pass_even_at_the_strictest_level() {
        let (database, crate_info, _) = enabled_under(default_filter("error"));
        assert!(database);
        assert!(!crate_info);
    }
}
