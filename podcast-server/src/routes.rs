//! API routes

use crate::config::CorsOrigins;
use crate::handlers;
use crate::state::AppState;
use axum::{
    http::{header, Method},
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

/// Build the CORS layer. Only `Content-Type` and `Authorization` may be sent.
fn cors_layer(origins: &CorsOrigins) -> CorsLayer {
    let allow_origin = match origins {
        CorsOrigins::Any => AllowOrigin::any(),
        CorsOrigins::List(list) => AllowOrigin::list(list.iter().cloned()),
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
}

/// Create the application router
pub fn create_router(state: AppState) -> Router {
    let cors = cors_layer(&state.cors_origins);

    let n8n_routes = Router::new()
        .route("/health", get(handlers::health_check))
        .route("/status", get(handlers::system_status))
        .route("/gossips/search", post(handlers::search_gossips))
        .route("/script/generate", post(handlers::generate_script))
        .route("/cover/generate", post(handlers::generate_cover))
        .route("/audio/generate", post(handlers::generate_audio))
        .route("/video/generate", post(handlers::generate_video));

    Router::new()
        .nest("/n8n", n8n_routes)
        .fallback(handlers::not_found)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
        .with_state(state)
}
