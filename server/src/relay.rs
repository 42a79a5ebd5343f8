use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{Path, RawQuery, State},
    http::{header::CONTENT_TYPE, HeaderMap, Method, StatusCode},
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::server_state::ServerState;

#[derive(Debug, Error)]
pub enum RelayError {
    #[error("backend {url} unreachable: {source}")]
    Unreachable { url: String, source: reqwest::Error },
    #[error("failed to read backend response from {url}: {source}")]
    Body { url: String, source: reqwest::Error },
}

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        tracing::error!("{self}");
        (StatusCode::BAD_GATEWAY, self.to_string()).into_response()
    }
}

/// Forwards `/api/*` to the backend and hands its answer back untouched.
pub async fn relay(
    State(state): State<Arc<ServerState>>,
    Path(path): Path<String>,
    RawQuery(query): RawQuery,
    method: Method,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response, RelayError> {
    let mut url = format!("{}/api/{}", state.config.backend_url, path);
    if let Some(query) = query {
        url.push('?');
        url.push_str(&query);
    }

    tracing::debug!("Relaying {} {}", method, url);

    let mut request = state.client.request(method, &url).body(body);
    if let Some(content_type) = headers.get(CONTENT_TYPE) {
        request = request.header(CONTENT_TYPE, content_type);
    }

    let response = match request.send().await {
        Ok(response) => response,
        Err(source) => return Err(RelayError::Unreachable { url, source }),
    };

    let status = response.status();
    let content_type = response.headers().get(CONTENT_TYPE).cloned();
    let body = match response.bytes().await {
        Ok(body) => body,
        Err(source) => return Err(RelayError::Body { url, source }),
    };

    if !status.is_success() {
        tracing::warn!("Backend answered {} for {}", status, url);
    }

    let mut relayed = (status, body).into_response();
    if let Some(content_type) = content_type {
        relayed.headers_mut().insert(CONTENT_TYPE, content_type);
    }
    Ok(relayed)
}
