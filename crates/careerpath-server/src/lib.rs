//! # careerpath-server
//!
//! HTTP API for the careerpath service. Provides:
//!
//! - `POST /analyze` — extract skills from free text and return career insights
//! - `GET /health` — liveness check
//! - `GET /metrics` — Prometheus text metrics

pub mod metrics;

use axum::{
    Router,
    extract::State,
    http::StatusCode,
    response::Json,
    routing::{get, post},
};
use careerpath_config::schema::ServerConfig;
use careerpath_core::{Analyzer, CareerError, InsightRecord, SkillStore};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

/// Shared server state.
pub struct AppState {
    pub analyzer: Analyzer,
    pub metrics: metrics::Metrics,
}

impl AppState {
    pub fn new(store: Arc<dyn SkillStore>) -> Self {
        Self {
            analyzer: Analyzer::new(store),
            metrics: metrics::Metrics::new(),
        }
    }
}

/// Health check response.
#[derive(Serialize)]
struct HealthResponse {
    status: String,
    version: String,
    uptime_secs: u64,
}

/// Analyze request body. A missing `skills` field is treated as empty text.
#[derive(Debug, Default, Deserialize)]
pub struct AnalyzeRequest {
    #[serde(default)]
    pub skills: String,
}

/// Build the Axum router.
pub fn build_router(state: Arc<AppState>, config: &ServerConfig) -> Router {
    let router = Router::new()
        .route("/analyze", post(analyze_handler))
        .route("/health", get(health_handler))
        .route("/metrics", get(metrics_handler))
        .with_state(state)
        .layer(TraceLayer::new_for_http());

    if config.cors {
        router.layer(CorsLayer::permissive())
    } else {
        router
    }
}

async fn analyze_handler(
    State(state): State<Arc<AppState>>,
    Json(req): Json<AnalyzeRequest>,
) -> Result<Json<InsightRecord>, StatusCode> {
    state.metrics.inc_http_requests();
    state.metrics.inc_analyze_requests();

    match state.analyzer.analyze(&req.skills).await {
        Ok(record) => {
            state.metrics.add_skills_matched(record.len());
            Ok(Json(record))
        }
        Err(e) => {
            if matches!(e, CareerError::Store(_)) {
                state.metrics.inc_store_errors();
            }
            warn!(error = %e, "skill analysis failed");
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

async fn health_handler(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    state.metrics.inc_http_requests();
    Json(HealthResponse {
        status: "ok".into(),
        version: env!("CARGO_PKG_VERSION").into(),
        uptime_secs: state.metrics.uptime_secs(),
    })
}

/// Prometheus-compatible metrics endpoint.
async fn metrics_handler(
    State(state): State<Arc<AppState>>,
) -> (
    StatusCode,
    [(axum::http::header::HeaderName, &'static str); 1],
    String,
) {
    let body = state.metrics.render_prometheus();
    (
        StatusCode::OK,
        [(
            axum::http::header::CONTENT_TYPE,
            "text/plain; version=0.0.4; charset=utf-8",
        )],
        body,
    )
}

/// Start the HTTP server and run until Ctrl-C.
pub async fn start_server(
    state: Arc<AppState>,
    config: ServerConfig,
) -> careerpath_core::Result<()> {
    let listen = config.listen.clone();
    let router = build_router(state, &config);

    info!(listen = %listen, cors = config.cors, "starting HTTP server");

    let listener = tokio::net::TcpListener::bind(&listen)
        .await
        .map_err(|e| CareerError::Server(format!("failed to bind {}: {}", listen, e)))?;

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| CareerError::Server(format!("server error: {}", e)))?;

    info!("HTTP server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
