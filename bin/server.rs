// Bill Demo - Web Server
// Greeting at / and the bill list at /api/bills

use anyhow::{Context, Result};
use bill_demo::api::{build_router, DEFAULT_ADDR};
use bill_demo::logging;

#[tokio::main]
async fn main() -> Result<()> {
    logging::init_server_logger();

    let app = build_router();

    let listener = tokio::net::TcpListener::bind(DEFAULT_ADDR)
        .await
        .with_context(|| format!("Failed to bind to {}", DEFAULT_ADDR))?;

    tracing::info!(addr = DEFAULT_ADDR, version = bill_demo::VERSION, "server listening");

    axum::serve(listener, app)
        .await
        .context("Server error")?;

    Ok(())
}
