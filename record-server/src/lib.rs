//! Record Server - REST backend for employee records
//!
//! # Architecture
//!
//! - **Store** (`db`): one SurrealDB handle, the `records` table and the
//!   record store accessor on top of it
//! - **HTTP API** (`api`): `/record` CRUD endpoints plus status routes
//! - **Core** (`core`): configuration, handler state, server lifecycle
//!
//! ```text
//! record-server/src/
//! ├── core/          # config, state, server
//! ├── api/           # routes and handlers
//! ├── middleware/    # request logging
//! ├── utils/         # errors, logger
//! └── db/            # store handle and repository
//! ```

pub mod api;
pub mod core;
pub mod db;
pub mod middleware;
pub mod utils;

pub use api::build_app;
pub use crate::core::{Config, Server, ServerState};
pub use db::DbService;
pub use db::repository::{RecordRepository, RecordStore, RepoError, RepoResult};
pub use utils::{AppError, AppResult};

pub use utils::logger::init_logger_with_file;

/// Load `.env` and initialize logging
pub fn setup_environment() -> Config {
    // A missing .env file is fine
    let _ = dotenv::dotenv();
    let config = Config::from_env();
    init_logger_with_file(Some(&config.log_level), config.log_dir.as_deref());
    config
}
