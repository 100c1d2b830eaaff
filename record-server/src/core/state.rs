use std::sync::Arc;

use crate::core::Config;
use crate::db::DbService;
use crate::db::repository::{RecordRepository, RecordStore};

/// Server state shared by every handler
///
/// Cheap to clone: the store sits behind an `Arc`. The state never owns the
/// database lifecycle; whoever built the [`DbService`] closes it.
#[derive(Clone)]
pub struct ServerState {
    /// Server configuration
    pub config: Config,
    /// Record store accessor
    pub records: Arc<dyn RecordStore>,
}

impl ServerState {
    /// Build state around any store implementation
    pub fn new(config: Config, records: Arc<dyn RecordStore>) -> Self {
        Self { config, records }
    }

    /// Build state backed by the SurrealDB repository of `db`
    pub fn with_db(config: Config, db: &DbService) -> Self {
        let repo = RecordRepository::new(db.db().clone());
        Self::new(config, Arc::new(repo))
    }
}

impl std::fmt::Debug for ServerState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServerState")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
