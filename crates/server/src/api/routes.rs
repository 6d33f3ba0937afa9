use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use super::{discover, events, handlers, movies, settings};
use crate::state::AppState;

pub fn create_router(state: Arc<AppState>) -> Router {
    let api_routes = Router::new()
        // Health and config
        .route("/health", get(handlers::health))
        .route("/config", get(handlers::get_config))
        // Tracked movies
        .route("/movies", get(movies::list_movies))
        .route("/movies", post(movies::add_movie))
        .route("/movies/remove", post(movies::remove_movie))
        // Runtime settings
        .route("/settings", post(settings::update_settings))
        // TMDB discovery
        .route("/movies/upcoming", get(discover::upcoming))
        .route("/movies/popular", get(discover::popular))
        // External event webhooks
        .route("/events/feed", post(events::feed_batch))
        .route("/events/download-complete", post(events::download_complete))
        .with_state(state);

    Router::new()
        .nest("/api/v1", api_routes)
        .layer(TraceLayer::new_for_http())
}
