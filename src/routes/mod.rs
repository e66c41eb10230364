// HTTP + WebSocket routes over the diagnostics engine

mod http;
mod ws;

use axum::{Router, routing::get};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

use crate::config::AppConfig;
use crate::engine::DiagnosticsEngine;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) engine: Arc<DiagnosticsEngine>,
    pub(crate) config: AppConfig,
}

pub fn app(engine: Arc<DiagnosticsEngine>, config: AppConfig) -> Router {
    let state = AppState { engine, config };
    Router::new()
        .route("/", get(|| async { "netpulse: local network diagnostics" })) // GET /
        .route("/version", get(http::version_handler)) // GET /version
        .route("/api/status", get(http::status_handler)) // GET /api/status
        .route("/api/system-health", get(http::system_health_handler)) // GET /api/system-health
        .route("/api/traceroute", get(http::traceroute_handler)) // GET /api/traceroute
        .route("/api/port-scan", get(http::port_scan_handler)) // GET /api/port-scan
        .route("/api/speedtest/download", get(http::speedtest_download_handler)) // GET /api/speedtest/download
        .route("/ws/health", get(ws::ws_health)) // WS /ws/health
        .layer(CorsLayer::new().allow_origin(Any))
        .with_state(state)
}
