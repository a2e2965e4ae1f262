// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Shared test helpers: a mock upstream standing in for the Spotify
//! accounts and Web API hosts, plus relay app builders.

use axum::{
    extract::Query,
    http::{header, HeaderMap, StatusCode},
    response::IntoResponse,
    routing::{get, post},
    Form, Json, Router,
};
use serde_json::json;
use std::collections::HashMap;
use std::sync::Arc;

use tunestats::config::Config;
use tunestats::routes::create_router;
use tunestats::services::SpotifyClient;
use tunestats::AppState;

/// Access token the mock token endpoint hands out.
#[allow(dead_code)]
pub const MOCK_ACCESS_TOKEN: &str = "XYZ";
/// Refresh token the mock token endpoint hands out.
#[allow(dead_code)]
pub const MOCK_REFRESH_TOKEN: &str = "UVW";

/// Bind a router to an ephemeral local port and serve it.
#[allow(dead_code)]
pub async fn spawn_server(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{}", addr)
}

/// Spawn the mock upstream. One server plays both Spotify hosts: the
/// accounts service at `/api/token` and the Web API under `/v1`.
#[allow(dead_code)]
pub async fn spawn_mock_upstream() -> String {
    let app = Router::new()
        .route("/api/token", post(token_exchange))
        .route("/v1/me/top/artists", get(top_artists))
        .route("/v1/me/top/tracks", get(top_tracks));

    spawn_server(app).await
}

/// Build a relay app pointed at the given mock upstream.
#[allow(dead_code)]
pub fn create_test_app(upstream_base: &str) -> Router {
    let config = Config::test_default();
    let spotify = SpotifyClient::with_base_urls(
        config.spotify_client_id.clone(),
        config.spotify_client_secret.clone(),
        upstream_base.to_string(),
        format!("{}/v1", upstream_base),
    );

    create_router(Arc::new(AppState { config, spotify }))
}

/// Spawn a full relay (with mock upstream behind it) for clients that
/// need a real HTTP endpoint. Returns the relay base URL.
#[allow(dead_code)]
pub async fn spawn_relay() -> String {
    let upstream = spawn_mock_upstream().await;
    spawn_server(create_test_app(&upstream)).await
}

// ─── Mock upstream handlers ──────────────────────────────────────────────

async fn token_exchange(
    headers: HeaderMap,
    Form(params): Form<HashMap<String, String>>,
) -> axum::response::Response {
    let basic_auth = headers
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .map(|h| h.starts_with("Basic "))
        .unwrap_or(false);

    let grant_ok = params.get("grant_type").map(String::as_str) == Some("authorization_code");
    let code = params.get("code").map(String::as_str).unwrap_or("");

    // Anything empty, malformed or expired is rejected like the real
    // accounts service rejects it.
    if !basic_auth || !grant_ok || code.is_empty() || code.starts_with("bad") || code.starts_with("expired") {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({"error": "invalid_grant"})),
        )
            .into_response();
    }

    Json(json!({
        "access_token": MOCK_ACCESS_TOKEN,
        "refresh_token": MOCK_REFRESH_TOKEN,
        "token_type": "Bearer",
        "expires_in": 3600,
        "scope": "user-top-read user-read-recently-played"
    }))
    .into_response()
}

fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
}

fn unauthorized() -> axum::response::Response {
    (
        StatusCode::UNAUTHORIZED,
        Json(json!({"error": {"status": 401, "message": "The access token expired"}})),
    )
        .into_response()
}

/// 50 artists; names carry the received time range so forwarding is
/// observable end to end.
async fn top_artists(
    headers: HeaderMap,
    Query(params): Query<HashMap<String, String>>,
) -> axum::response::Response {
    if bearer_token(&headers) != Some(MOCK_ACCESS_TOKEN) {
        return unauthorized();
    }

    let time_range = params.get("time_range").cloned().unwrap_or_default();
    let items: Vec<_> = (0..50)
        .map(|i| {
            json!({
                "id": format!("artist-{i}"),
                "name": format!("Artist {i} ({time_range})"),
                "images": [{"url": format!("https://i.scdn.co/image/artist-{i}")}]
            })
        })
        .collect();

    Json(json!({"items": items, "time_range": time_range})).into_response()
}

/// 50 tracks with albums, same shape as the artists handler.
async fn top_tracks(
    headers: HeaderMap,
    Query(params): Query<HashMap<String, String>>,
) -> axum::response::Response {
    if bearer_token(&headers) != Some(MOCK_ACCESS_TOKEN) {
        return unauthorized();
    }

    let time_range = params.get("time_range").cloned().unwrap_or_default();
    let items: Vec<_> = (0..50)
        .map(|i| {
            json!({
                "id": format!("track-{i}"),
                "name": format!("Track {i} ({time_range})"),
                "album": {
                    "name": format!("Album {i}"),
                    "images": [{"url": format!("https://i.scdn.co/image/album-{i}")}]
                }
            })
        })
        .collect();

    Json(json!({"items": items, "time_range": time_range})).into_response()
}
