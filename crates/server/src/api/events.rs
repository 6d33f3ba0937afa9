//! Webhook endpoints translating external notifications into engine events.

use axum::response::{IntoResponse, Response};
use axum::{extract::State, Json};
use serde::Serialize;
use std::sync::Arc;

use reelgrab_core::{CompletionOutcome, CompletionRecord, FeedBatch};

use super::handlers::engine_unavailable;
use crate::state::AppState;

#[derive(Serialize)]
pub struct FeedResponse {
    /// Number of torrent records appended by this batch.
    pub appended: usize,
}

/// A feed poller delivers a batch of pre-parsed items.
pub async fn feed_batch(
    State(state): State<Arc<AppState>>,
    Json(batch): Json<FeedBatch>,
) -> Response {
    match state.engine().feed_batch(batch).await {
        Ok(appended) => Json(FeedResponse { appended }).into_response(),
        Err(e) => engine_unavailable(e).into_response(),
    }
}

/// The torrent client reports a finished download.
pub async fn download_complete(
    State(state): State<Arc<AppState>>,
    Json(record): Json<CompletionRecord>,
) -> Response {
    match state.engine().download_complete(record).await {
        Ok(outcome) => Json::<CompletionOutcome>(outcome).into_response(),
        Err(e) => engine_unavailable(e).into_response(),
    }
}
