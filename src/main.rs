use std::sync::Arc;

use anyhow::Context;
use tracing::{info, warn};

use ledger_service::api::build_app;
use ledger_service::config::Config;
use ledger_service::domain::Ledger;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    setup_tracing();
    let config = Config::from_env()?;

    let ledger = Arc::new(Ledger::new());
    let app = build_app(ledger);

    let listener = tokio::net::TcpListener::bind(config.listen_addr)
        .await
        .context(format!("Can't bind to `{}`", config.listen_addr))?;
    info!(addr = %listener.local_addr()?, "Ledger service listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!("Ledger service stopped");
    Ok(())
}

fn setup_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Can't listen for shutdown signal: {e}");
        std::future::pending::<()>().await;
    }
}
