// WebSocket health stream

use axum::{
    extract::{
        State,
        ws::{Message, WebSocket, WebSocketUpgrade},
    },
    response::IntoResponse,
};
use bytes::Bytes;
use std::sync::Arc;
use tokio::time::{Duration, timeout};

use super::AppState;
use crate::engine::DiagnosticsEngine;
use crate::error::HealthError;
use crate::models::HostHealth;

pub(super) const WS_PING_INTERVAL: Duration = Duration::from_secs(30);
pub(super) const WS_SEND_TIMEOUT: Duration = Duration::from_secs(10);

pub(super) async fn ws_health(
    ws: WebSocketUpgrade,
    State(state): State<AppState>,
) -> impl IntoResponse {
    let engine = state.engine.clone();
    let interval_ms = state.config.publishing.health_stream_frequency_ms;
    ws.on_upgrade(move |socket| async move {
        if let Err(e) = stream_health(socket, engine, interval_ms).await {
            tracing::info!("Health stream error: {}", e);
        }
    })
}

async fn stream_health(
    mut socket: WebSocket,
    engine: Arc<DiagnosticsEngine>,
    interval_ms: u64,
) -> anyhow::Result<()> {
    tracing::info!("Client connected to health stream");
    let mut tick = tokio::time::interval(Duration::from_millis(interval_ms));
    tick.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);
    let mut ping_interval = tokio::time::interval(WS_PING_INTERVAL);
    ping_interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);
    loop {
        tokio::select! {
            _ = tick.tick() => {
                let Some(json) = health_frame(engine.report_health().await) else {
                    continue;
                };
                let r = timeout(WS_SEND_TIMEOUT, socket.send(Message::Text(json.into()))).await;
                if r.is_err() || r.unwrap_or(Ok(())).is_err() {
                    break;
                }
            }
            _ = ping_interval.tick() => {
                let r = timeout(WS_SEND_TIMEOUT, socket.send(Message::Ping(Bytes::new()))).await;
                if r.is_err() || r.unwrap_or(Ok(())).is_err() {
                    break;
                }
            }
        }
    }
    tracing::debug!("Health stream closed");
    Ok(())
}

/// A failed reading only costs its own tick; the stream stays open.
fn health_frame(reading: Result<HostHealth, HealthError>) -> Option<String> {
    let health = match reading {
        Ok(health) => health,
        Err(e) => {
            tracing::warn!(error = %e, "host health reading failed, skipping tick");
            return None;
        }
    };
    match serde_json::to_string(&health) {
        Ok(json) => Some(json),
        Err(e) => {
            tracing::warn!(error = %e, "host health serialization failed, skipping tick");
            None
        }
    }
}
