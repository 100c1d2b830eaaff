//! Server Implementation
//!
//! HTTP server startup and shutdown

use std::future::{Future, IntoFuture};
use std::net::SocketAddr;
use std::time::Duration;

use axum::Router;
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;

use crate::api::build_app;
use crate::core::{Config, Result, ServerError, ServerState};
use crate::db::DbService;

/// HTTP Server
pub struct Server {
    config: Config,
}

impl Server {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Connect the store, serve until Ctrl-C, then release the store
    pub async fn run(&self) -> Result<()> {
        let db = DbService::connect(&self.config).await;
        let state = ServerState::with_db(self.config.clone(), &db);

        let addr = SocketAddr::from(([0, 0, 0, 0], self.config.http_port));
        let listener = TcpListener::bind(addr)
            .await
            .map_err(|e| ServerError::Bind(addr, e))?;
        tracing::info!("Server listening on port {}", self.config.http_port);

        let shutdown = async {
            let _ = tokio::signal::ctrl_c().await;
            tracing::info!("Shutting down...");
        };

        let result = serve(
            listener,
            build_app(state),
            shutdown,
            Duration::from_millis(self.config.shutdown_timeout_ms),
        )
        .await;

        db.close().await;
        result
    }
}

/// Serve `app` on `listener` until `shutdown` resolves
///
/// In-flight requests get `grace` to finish once shutdown starts.
pub async fn serve<F>(listener: TcpListener, app: Router, shutdown: F, grace: Duration) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let token = CancellationToken::new();
    let drain = token.clone();
    let server = axum::serve(listener, app)
        .with_graceful_shutdown(async move { drain.cancelled().await })
        .into_future();

    tokio::select! {
        res = server => res.map_err(ServerError::Serve),
        _ = async {
            shutdown.await;
            token.cancel();
            tokio::time::sleep(grace).await;
        } => {
            tracing::warn!(grace_ms = grace.as_millis() as u64, "Graceful shutdown timed out");
            Ok(())
        }
    }
}
