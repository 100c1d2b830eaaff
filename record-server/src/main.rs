use record_server::{Server, setup_environment};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Environment (.env, logging) and configuration
    let config = setup_environment();

    tracing::info!(
        environment = %config.environment,
        "Record server starting..."
    );

    // 2. Serve until Ctrl-C; the store is connected and released inside
    let server = Server::new(config);
    if let Err(e) = server.run().await {
        tracing::error!("Server error: {}", e);
        return Err(e.into());
    }

    Ok(())
}
