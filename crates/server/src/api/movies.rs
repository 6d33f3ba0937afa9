//! Tracked-movie CRUD endpoints.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::{extract::State, Json};
use serde::Deserialize;
use std::sync::Arc;

use reelgrab_core::{AddOutcome, RemoveOutcome};

use super::handlers::{engine_unavailable, ErrorResponse, SettingsResponse};
use crate::state::AppState;

#[derive(Deserialize)]
pub struct MovieRequest {
    #[serde(default)]
    pub movie: String,
}

pub async fn list_movies(State(state): State<Arc<AppState>>) -> Response {
    match state.engine().snapshot().await {
        Ok(settings) => Json(SettingsResponse::from(settings)).into_response(),
        Err(e) => engine_unavailable(e).into_response(),
    }
}

pub async fn add_movie(
    State(state): State<Arc<AppState>>,
    Json(request): Json<MovieRequest>,
) -> Response {
    if request.movie.trim().is_empty() {
        return bad_request("movie is required");
    }

    match state.engine().add_movie(request.movie).await {
        Ok(AddOutcome::Added(settings)) => Json(SettingsResponse::from(settings)).into_response(),
        Ok(AddOutcome::AlreadyTracked) => conflict("movie is already tracked"),
        Err(e) => engine_unavailable(e).into_response(),
    }
}

pub async fn remove_movie(
    State(state): State<Arc<AppState>>,
    Json(request): Json<MovieRequest>,
) -> Response {
    if request.movie.trim().is_empty() {
        return bad_request("movie is required");
    }

    match state.engine().remove_movie(request.movie).await {
        Ok(RemoveOutcome::Removed(settings)) => {
            Json(SettingsResponse::from(settings)).into_response()
        }
        Ok(RemoveOutcome::NotTracked) => conflict("movie is not tracked"),
        Err(e) => engine_unavailable(e).into_response(),
    }
}

fn bad_request(message: &str) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse {
            error: message.to_string(),
        }),
    )
        .into_response()
}

fn conflict(message: &str) -> Response {
    (
        StatusCode::CONFLICT,
        Json(ErrorResponse {
            error: message.to_string(),
        }),
    )
        .into_response()
}
