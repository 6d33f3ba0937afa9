use axum::http::StatusCode;
use axum::{extract::State, Json};
use serde::Serialize;
use std::sync::Arc;

use reelgrab_core::{EngineError, SanitizedConfig, Settings, VALID_RESOLUTIONS};

use crate::state::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}

pub async fn get_config(State(state): State<Arc<AppState>>) -> Json<SanitizedConfig> {
    Json(state.sanitized_config())
}

/// Settings snapshot plus the accepted resolution labels, the shape every
/// mutating endpoint responds with.
#[derive(Serialize)]
pub struct SettingsResponse {
    #[serde(flatten)]
    pub settings: Settings,
    #[serde(rename = "validResolutions")]
    pub valid_resolutions: Vec<&'static str>,
}

impl From<Settings> for SettingsResponse {
    fn from(settings: Settings) -> Self {
        Self {
            settings,
            valid_resolutions: VALID_RESOLUTIONS.to_vec(),
        }
    }
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// The engine task is gone; nothing sensible left to serve.
pub fn engine_unavailable(e: EngineError) -> (StatusCode, Json<ErrorResponse>) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse {
            error: e.to_string(),
        }),
    )
}
