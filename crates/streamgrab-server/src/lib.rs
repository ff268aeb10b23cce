//! Streamgrab HTTP API
//!
//! A single endpoint, `GET /?url=<page>`, running one extraction per request.
//!
//! ```text
//! GET /?url=https://example.com/view_video?id=42
//!
//! 200 OK
//! {
//!   "title": "Example",
//!   "video_url": "https://example.com/view_video?id=42",
//!   "streaming_urls": [
//!     { "quality": "720", "format": "hls", "url": "https://cdn...", "Developer": "Silent Ghost" }
//!   ]
//! }
//! ```

use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use serde::Deserialize;
use serde_json::json;
use streamgrab_core::{
    ClientConfig, ExtractionResult, ExtractorError, ExtractorOptions, StreamClient,
    StreamExtractor,
};
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::trace::TraceLayer;

/// Server settings
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Overall deadline for one request, in seconds
    pub request_timeout_secs: u64,
    pub client: ClientConfig,
    pub options: ExtractorOptions,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
            request_timeout_secs: 60,
            client: ClientConfig::default(),
            options: ExtractorOptions::default(),
        }
    }
}

/// State shared by all requests; read-only after startup
#[derive(Clone)]
pub struct AppState {
    pub client: Arc<StreamClient>,
    pub options: ExtractorOptions,
    /// Overall deadline for one extraction
    pub request_timeout: Duration,
}

impl AppState {
    pub fn new(client: StreamClient, options: ExtractorOptions, request_timeout: Duration) -> Self {
        Self {
            client: Arc::new(client),
            options,
            request_timeout,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ExtractParams {
    /// Target video page URL
    pub url: String,
}

/// Request failure mapped onto an HTTP response
#[derive(Debug)]
pub enum ApiError {
    /// The page fetch failed or the input was rejected
    Extraction(ExtractorError),
    /// The whole extraction ran past the request deadline
    DeadlineExceeded(Duration),
}

impl From<ExtractorError> for ApiError {
    fn from(error: ExtractorError) -> Self {
        Self::Extraction(error)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            ApiError::Extraction(error) => {
                let status = match &error {
                    ExtractorError::InvalidUrl(_) => StatusCode::BAD_REQUEST,
                    e if e.is_timeout() => StatusCode::GATEWAY_TIMEOUT,
                    ExtractorError::UpstreamStatus { .. } | ExtractorError::HttpError(_) => {
                        StatusCode::BAD_GATEWAY
                    }
                };

                let mut body = json!({ "error": error });
                if let Some(upstream) = error.upstream_status() {
                    body["upstream_status"] = json!(upstream);
                }
                (status, body)
            }
            ApiError::DeadlineExceeded(deadline) => {
                let message = format!(
                    "Extraction exceeded the {}s request deadline",
                    deadline.as_secs()
                );
                (StatusCode::GATEWAY_TIMEOUT, json!({ "error": message }))
            }
        };

        (status, Json(body)).into_response()
    }
}

/// Create the router with all routes and layers
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(extract))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn extract(
    State(state): State<AppState>,
    Query(params): Query<ExtractParams>,
) -> Result<Json<ExtractionResult>, ApiError> {
    let extractor = StreamExtractor::new(state.client, &params.url, state.options)
        .inspect_err(|e| tracing::debug!("Rejected request: {}", e))?;

    // Expiry drops the pipeline future, cancelling the fetch or in-flight HEAD requests
    match tokio::time::timeout(state.request_timeout, extractor.extract()).await {
        Ok(Ok(result)) => Ok(Json(result)),
        Ok(Err(e)) => {
            tracing::warn!(url = %params.url, "Extraction failed: {}", e);
            Err(e.into())
        }
        Err(_) => {
            tracing::warn!(
                url = %params.url,
                deadline_secs = state.request_timeout.as_secs(),
                "Extraction exceeded request deadline"
            );
            Err(ApiError::DeadlineExceeded(state.request_timeout))
        }
    }
}

/// Bind the listening socket
///
/// `host` may be an IP literal (`0.0.0.0`, `::`) or a hostname such as
/// `localhost`.
pub async fn bind(config: &ServerConfig) -> Result<TcpListener> {
    TcpListener::bind((config.host.as_str(), config.port))
        .await
        .with_context(|| format!("Failed to bind {}:{}", config.host, config.port))
}

/// Start the HTTP server and run until a shutdown signal arrives
pub async fn start_server(config: ServerConfig) -> Result<()> {
    let listener = bind(&config).await?;
    serve(listener, config).await
}

/// Serve the API on an already bound listener
pub async fn serve(listener: TcpListener, config: ServerConfig) -> Result<()> {
    let client = StreamClient::with_config(config.client.clone())
        .context("Failed to build HTTP client")?;
    let state = AppState::new(
        client,
        config.options,
        Duration::from_secs(config.request_timeout_secs),
    );
    let app = create_router(state);

    tracing::info!("Starting server on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        match signal::ctrl_c().await {
            Ok(()) => {}
            Err(e) => {
                tracing::error!("Failed to install Ctrl+C handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
