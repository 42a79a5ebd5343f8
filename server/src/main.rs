use std::{fs::OpenOptions, net::SocketAddr, sync::Arc};

use anyhow::Context;
use server::{app, config::ServerConfig, server_state::ServerState};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ServerConfig::from_env()?;

    std::fs::create_dir_all(&config.log_dir)
        .with_context(|| format!("creating log directory {}", config.log_dir.display()))?;
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(config.log_dir.join("server.log"))
        .context("opening server.log")?;

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| format!("{}=trace", env!("CARGO_CRATE_NAME")).into())
        )
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::fmt::layer().with_ansi(false).with_writer(file))
        .init();

    tracing::info!("Starting server...");
    tracing::info!("Relaying /api to {}", config.backend_url);
    tracing::info!("Serving frontend from {}", config.dist_dir.display());

    let bind = config.bind;
    let server_state = Arc::new(ServerState::new(config).context("building backend client")?);

    let listener = tokio::net::TcpListener::bind(bind)
        .await
        .with_context(|| format!("binding {bind}"))?;
    tracing::info!("Listening on {}", listener.local_addr()?);

    axum::serve(
        listener,
        app(server_state).into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}
