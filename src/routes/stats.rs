// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Top-items passthrough routes.
//!
//! Each handler forwards one bearer-authenticated GET to the Web API and
//! returns the JSON body unmodified. Neither the token nor the time-range
//! value is validated here: Spotify rejects or ignores bad input, and the
//! relay maps any upstream failure to the generic 500.

use axum::{
    extract::{Query, State},
    http::header,
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use serde::Deserialize;
use std::sync::Arc;

use crate::error::Result;
use crate::services::TopItemKind;
use crate::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/top-artists", get(top_artists))
        .route("/top-tracks", get(top_tracks))
}

/// Query parameters for the top-items endpoints.
#[derive(Deserialize)]
pub struct TopItemsParams {
    #[serde(default)]
    access_token: String,
    #[serde(default = "default_time_range")]
    time_range: String,
}

fn default_time_range() -> String {
    "long_term".to_string()
}

/// Forward a top-artists request upstream.
async fn top_artists(
    State(state): State<Arc<AppState>>,
    Query(params): Query<TopItemsParams>,
) -> Result<Response> {
    forward(state, TopItemKind::Artists, params).await
}

/// Forward a top-tracks request upstream.
async fn top_tracks(
    State(state): State<Arc<AppState>>,
    Query(params): Query<TopItemsParams>,
) -> Result<Response> {
    forward(state, TopItemKind::Tracks, params).await
}

async fn forward(
    state: Arc<AppState>,
    kind: TopItemKind,
    params: TopItemsParams,
) -> Result<Response> {
    let body = state
        .spotify
        .top_items(kind, &params.access_token, &params.time_range)
        .await?;

    tracing::debug!(
        kind = kind.path(),
        time_range = %params.time_range,
        "Forwarded top-items request"
    );

    Ok(([(header::CONTENT_TYPE, "application/json")], body).into_response())
}
