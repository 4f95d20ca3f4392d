//! Script, cover, audio and video generation handlers

use crate::extract::LenientJson;
use crate::state::AppState;
use axum::{extract::State, Json};
use podcast_core::types::{AudioPayload, CoverPayload, ScriptPayload, VideoPayload};
use podcast_core::{generator, AudioRequest, CoverRequest, Envelope, ScriptRequest, VideoRequest};

pub async fn generate_script(
    State(state): State<AppState>,
    LenientJson(request): LenientJson<ScriptRequest>,
) -> Json<Envelope<ScriptPayload>> {
    tracing::debug!(
        gossips = request.gossips().len(),
        target_duration = %request.target_duration(),
        "Generating script"
    );

    Json(Envelope::ok(generator::generate_script(
        &request,
        &state.context,
    )))
}

pub async fn generate_cover(
    State(state): State<AppState>,
    LenientJson(request): LenientJson<CoverRequest>,
) -> Json<Envelope<CoverPayload>> {
    tracing::debug!(theme = ?request.episode_theme(), "Generating cover");

    Json(Envelope::ok(generator::generate_cover(&request, &state.context)))
}

pub async fn generate_audio(
    State(state): State<AppState>,
    LenientJson(request): LenientJson<AudioRequest>,
) -> Json<Envelope<AudioPayload>> {
    tracing::debug!(segments = request.segment_count(), "Generating audio");

    Json(Envelope::ok(generator::generate_audio(&request, &state.context)))
}

pub async fn generate_video(
    State(state): State<AppState>,
    LenientJson(request): LenientJson<VideoRequest>,
) -> Json<Envelope<VideoPayload>> {
    tracing::debug!(video_type = request.video_type(), "Generating video");

    Json(Envelope::ok(generator::generate_video(&request, &state.context)))
}
