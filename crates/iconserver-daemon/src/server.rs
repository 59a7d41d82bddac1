//! HTTP routes and server loop.
//!
//! Outward behavior is deliberately binary: callers see either a 200 with
//! the icon preview URL, or a 500 with the fixed generic body. Upstream
//! failure detail stays in the logs.

use std::sync::Arc;

use axum::extract::{Path, Request, State};
use axum::http::{header, HeaderValue, StatusCode};
use axum::middleware::{self, Next};
use axum::response::{IntoResponse, Json, Response};
use axum::routing::get;
use axum::Router;
use serde_json::json;
use tracing::{error, info};

use iconserver_client::IconClient;

use crate::api_docs::api_docs;
use crate::config::ServerConfig;
use crate::error::Result;

/// Plain-text banner served at `/`.
pub const BANNER: &str = "Icon Server v1.0";

const ALLOWED_HEADERS: &str = "Origin, X-Requested-With, Content-Type, Accept";

/// Shared, read-only per-process state. One `Arc` clone per request task;
/// no locks, the client is immutable after startup.
pub struct AppState {
    /// Signed upstream client.
    pub client: IconClient,
}

/// Builds the application router.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(banner))
        .route("/api-docs.json", get(serve_api_docs))
        .route("/icon/{searchTerm}", get(get_icon))
        .layer(middleware::from_fn(cors_headers))
        .with_state(state)
}

/// Binds the listener and serves until the process is torn down.
///
/// # Errors
///
/// Returns an error if the upstream client cannot be built or the
/// listener fails to bind.
pub async fn run(config: ServerConfig) -> Result<()> {
    let client = IconClient::new(config.credentials)?;
    let state = Arc::new(AppState { client });

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port)).await?;
    info!(port = config.port, "icon server listening");

    axum::serve(listener, router(state)).await?;
    Ok(())
}

/// Stamps the CORS headers on every response, matching the original
/// service which set them unconditionally rather than per-preflight.
async fn cors_headers(request: Request, next: Next) -> Response {
    let mut response = next.run(request).await;
    let headers = response.headers_mut();
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_ORIGIN,
        HeaderValue::from_static("*"),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static(ALLOWED_HEADERS),
    );
    response
}

async fn banner() -> &'static str {
    BANNER
}

async fn serve_api_docs() -> Json<serde_json::Value> {
    Json(api_docs())
}

/// `GET /icon/{searchTerm}`.
///
/// Every failure collapses to the same generic body so upstream internals
/// and credential-adjacent diagnostics never reach the caller.
async fn get_icon(
    State(state): State<Arc<AppState>>,
    Path(search_term): Path<String>,
) -> Response {
    match state.client.lookup(&search_term).await {
        Ok(icon) => icon.preview_url.into_response(),
        Err(err) => {
            error!(search_term = %search_term, error = %err, "error fetching icon");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "status": 500, "message": "Error fetching icon" })),
            )
                .into_response()
        }
    }
}
