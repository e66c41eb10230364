// GET handlers: version, status, system health, traceroute, port scan, speedtest payload

use axum::{
    extract::{ConnectInfo, Request, State},
    http::{StatusCode, header},
    response::IntoResponse,
};
use bytes::Bytes;
use std::net::SocketAddr;

use super::AppState;
use crate::version::{NAME, VERSION};

/// Size of the throughput-test payload.
const SPEEDTEST_PAYLOAD_BYTES: usize = 10 * 1024 * 1024;

/// GET /version — service name and version (from Cargo.toml at build time).
pub(super) async fn version_handler() -> impl IntoResponse {
    axum::Json(serde_json::json!({
        "name": NAME,
        "version": VERSION,
    }))
}

/// GET /api/status — one freshly composed snapshot. WAN address is the connecting peer.
pub(super) async fn status_handler(
    State(state): State<AppState>,
    request: Request,
) -> impl IntoResponse {
    let wan_address = request
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| addr.ip().to_canonical().to_string());
    axum::Json(state.engine.compose_status(wan_address).await)
}

/// GET /api/system-health — host metrics, or 500 if the OS read failed.
pub(super) async fn system_health_handler(State(state): State<AppState>) -> impl IntoResponse {
    match state.engine.report_health().await {
        Ok(health) => axum::Json(health).into_response(),
        Err(e) => {
            tracing::warn!(error = %e, operation = "report_health", "host health read failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                axum::Json(serde_json::json!({ "error": e.to_string() })),
            )
                .into_response()
        }
    }
}

/// GET /api/traceroute — opaque route report for the configured target.
pub(super) async fn traceroute_handler(State(state): State<AppState>) -> impl IntoResponse {
    let output = state
        .engine
        .run_route_trace(&state.config.probes.route_trace_target)
        .await;
    axum::Json(serde_json::json!({ "output": output }))
}

/// GET /api/port-scan — open/closed per configured port, in configured order.
pub(super) async fn port_scan_handler(State(state): State<AppState>) -> impl IntoResponse {
    let ports = state.config.port_scan.ports.clone();
    axum::Json(state.engine.scan_ports(&ports).await)
}

/// GET /api/speedtest/download — fixed payload the client times to estimate throughput.
pub(super) async fn speedtest_download_handler() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "application/octet-stream")],
        Bytes::from(vec![b'a'; SPEEDTEST_PAYLOAD_BYTES]),
    )
}
