//! Runtime settings endpoint.

use axum::response::{IntoResponse, Response};
use axum::{extract::State, Json};
use std::sync::Arc;

use reelgrab_core::SettingsPatch;

use super::handlers::{engine_unavailable, SettingsResponse};
use crate::state::AppState;

pub async fn update_settings(
    State(state): State<Arc<AppState>>,
    Json(patch): Json<SettingsPatch>,
) -> Response {
    match state.engine().update_settings(patch).await {
        Ok(settings) => Json(SettingsResponse::from(settings)).into_response(),
        Err(e) => engine_unavailable(e).into_response(),
    }
}
