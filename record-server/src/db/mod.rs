//! Database Module
//!
//! Owns the single SurrealDB handle shared by every request.
//!
//! The handle is created unconnected and then connected from the configured
//! connection string. A failed first attempt does not stop the server: the
//! error is logged and a background task keeps retrying until the store is
//! reachable. Until then, store calls fail and surface as 500s.

pub mod repository;

use std::time::Duration;

use surrealdb::Surreal;
use surrealdb::engine::any::Any;
use surrealdb::opt::auth::Root;
use tokio_util::sync::CancellationToken;

use crate::core::Config;
use repository::{RECORDS_TABLE, RepoResult};

/// Schema for the `records` table; every document carries all three fields
const SCHEMA: &str = r#"
DEFINE TABLE IF NOT EXISTS records SCHEMAFULL;
DEFINE FIELD IF NOT EXISTS name ON records TYPE string;
DEFINE FIELD IF NOT EXISTS position ON records TYPE string;
DEFINE FIELD IF NOT EXISTS level ON records TYPE string;
"#;

/// Database service, owns the SurrealDB client
#[derive(Clone, Debug)]
pub struct DbService {
    db: Surreal<Any>,
    config: Config,
    shutdown: CancellationToken,
}

impl DbService {
    /// Create the handle and make the first connection attempt
    ///
    /// Never fails. On error a reconnect loop is spawned and the returned
    /// service is usable as soon as that loop succeeds.
    pub async fn connect(config: &Config) -> Self {
        let service = Self {
            db: Surreal::init(),
            config: config.clone(),
            shutdown: CancellationToken::new(),
        };

        let mut connected = false;
        match service.attempt(&mut connected).await {
            Ok(()) => {
                tracing::info!(
                    url = %config.database_url,
                    ns = %config.db_namespace,
                    db = %config.db_name,
                    "Pinged the store, connection established"
                );
            }
            Err(e) => {
                tracing::error!(url = %config.database_url, "Failed to connect to the store: {}", e);
                service.spawn_reconnect(connected);
            }
        }

        service
    }

    /// Shared client handle
    pub fn db(&self) -> &Surreal<Any> {
        &self.db
    }

    /// Stop any pending reconnect attempts and release the handle
    pub async fn close(self) {
        self.shutdown.cancel();
        if let Err(e) = self.db.invalidate().await {
            tracing::debug!("Store session invalidation skipped: {}", e);
        }
        tracing::info!("Store connection released");
    }

    /// One connection attempt
    ///
    /// `connected` records whether the transport is already up, so a retry
    /// after a failed later step does not reconnect.
    async fn attempt(&self, connected: &mut bool) -> RepoResult<()> {
        if !*connected {
            self.db.connect(self.config.database_url.as_str()).await?;
            *connected = true;
        }

        if let (Some(username), Some(password)) =
            (&self.config.db_username, &self.config.db_password)
        {
            self.db
                .signin(Root {
                    username: username.as_str(),
                    password: password.as_str(),
                })
                .await?;
        }

        self.db
            .use_ns(self.config.db_namespace.as_str())
            .use_db(self.config.db_name.as_str())
            .await?;
        self.db.query(SCHEMA).await?.check()?;
        self.db.health().await?;

        tracing::debug!(table = RECORDS_TABLE, "Store schema ready");
        Ok(())
    }

    fn spawn_reconnect(&self, mut connected: bool) {
        let service = self.clone();
        let delay = Duration::from_secs(self.config.db_retry_secs.max(1));

        tokio::spawn(async move {
            let mut attempts: u32 = 1;
            loop {
                tokio::select! {
                    _ = service.shutdown.cancelled() => {
                        tracing::debug!("Reconnect loop cancelled");
                        return;
                    }
                    _ = tokio::time::sleep(delay) => {}
                }

                attempts += 1;
                match service.attempt(&mut connected).await {
                    Ok(()) => {
                        tracing::info!(attempts, "Store connection established after retry");
                        return;
                    }
                    Err(e) => {
                        tracing::warn!(attempts, "Store still unreachable: {}", e);
                    }
                }
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn connects_to_memory_store() {
        let config = Config::with_overrides(0, "mem://");
        let service = DbService::connect(&config).await;
        service.db().health().await.unwrap();
        service.close().await;
    }

    #[tokio::test]
    async fn unreachable_store_does_not_panic() {
        let mut config = Config::with_overrides(0, "ws://127.0.0.1:1");
        config.db_retry_secs = 60;
        let service = DbService::connect(&config).await;
        assert!(service.db().health().await.is_err());
        service.close().await;
    }
}
