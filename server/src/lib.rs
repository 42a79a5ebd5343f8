use std::{net::SocketAddr, sync::Arc};

use axum::{
    extract::{ConnectInfo, Request},
    middleware::{from_fn, Next},
    response::Response,
    routing::any,
    Router,
};
use tower_http::services::{ServeDir, ServeFile};

use crate::server_state::ServerState;

pub mod config;
pub mod relay;
pub mod server_state;

/// Backend relay plus the single page app. Unknown paths get `index.html`
/// so client side routes survive a reload.
pub fn app(state: Arc<ServerState>) -> Router {
    let dist_dir = &state.config.dist_dir;
    let spa = ServeDir::new(dist_dir).fallback(ServeFile::new(dist_dir.join("index.html")));

    Router::new()
        .route("/api/{*path}", any(relay::relay))
        .fallback_service(spa)
        .with_state(state)
        .layer(from_fn(log_request))
}

async fn log_request(req: Request, next: Next) -> Response {
    let method = req.method().clone();
    let path = req.uri().path().to_owned();
    let client = req
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| addr.ip().to_string())
        .unwrap_or_else(|| "unknown".to_owned());

    let response = next.run(req).await;
    tracing::debug!("{} {} from {} -> {}", method, path, client, response.status());
    response
}
