//! Gossip search handler

use crate::extract::LenientJson;
use axum::Json;
use podcast_core::types::SearchResult;
use podcast_core::{generator, Envelope, SearchParams};

/// Search the fixture gossip set by minimum score
pub async fn search_gossips(
    LenientJson(params): LenientJson<SearchParams>,
) -> Json<Envelope<SearchResult>> {
    tracing::debug!(
        limit = params.limit(),
        min_score = params.min_score(),
        "Searching gossips"
    );

    let result = generator::search_gossips(&params);
    tracing::debug!(total_found = result.total_found, "Gossip search complete");

    Json(Envelope::ok(result))
}
