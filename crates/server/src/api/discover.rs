//! TMDB discovery endpoints (upcoming/popular listings).

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::{extract::State, Json};
use std::sync::Arc;
use tracing::warn;

use reelgrab_core::{TmdbClient, TmdbError, TmdbMovie};

use super::handlers::{engine_unavailable, ErrorResponse};
use crate::state::AppState;

pub async fn upcoming(State(state): State<Arc<AppState>>) -> Response {
    listing(state, Listing::Upcoming).await
}

pub async fn popular(State(state): State<Arc<AppState>>) -> Response {
    listing(state, Listing::Popular).await
}

enum Listing {
    Upcoming,
    Popular,
}

async fn listing(state: Arc<AppState>, which: Listing) -> Response {
    // The API key lives in mutable runtime settings, so the client is built
    // per request from the current snapshot.
    let settings = match state.engine().snapshot().await {
        Ok(settings) => settings,
        Err(e) => return engine_unavailable(e).into_response(),
    };

    let client = match TmdbClient::new(settings.tmdb_api_key) {
        Ok(client) => client,
        Err(e) => return tmdb_error(e),
    };

    let result = match which {
        Listing::Upcoming => client.get_upcoming().await,
        Listing::Popular => client.get_popular().await,
    };

    match result {
        Ok(movies) => Json::<Vec<TmdbMovie>>(movies).into_response(),
        Err(e) => tmdb_error(e),
    }
}

fn tmdb_error(e: TmdbError) -> Response {
    let status = match e {
        TmdbError::NotConfigured(_) => StatusCode::BAD_REQUEST,
        TmdbError::RateLimitExceeded => StatusCode::TOO_MANY_REQUESTS,
        _ => StatusCode::BAD_GATEWAY,
    };
    warn!("TMDB listing failed: {}", e);
    (
        status,
        Json(ErrorResponse {
            error: e.to_string(),
        }),
    )
        .into_response()
}
