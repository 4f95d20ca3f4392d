//! Liveness and status handlers

use crate::state::AppState;
use axum::{extract::State, Json};
use podcast_core::types::{HealthPayload, StatusPayload};
use podcast_core::{generator, Envelope};

/// Liveness probe; any request body is ignored
pub async fn health_check(State(state): State<AppState>) -> Json<Envelope<HealthPayload>> {
    Json(Envelope::ok(generator::health(&state.context)))
}

/// Per-subsystem status report
pub async fn system_status() -> Json<Envelope<StatusPayload>> {
    Json(Envelope::ok(generator::system_status()))
}
