// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Spotify OAuth authentication routes.
//!
//! Three-step handshake: `/login` redirects the browser to Spotify's
//! authorize page, Spotify redirects back to `/callback` with a one-time
//! code, and the relay exchanges the code server-to-server before sending
//! the browser on to the frontend with both tokens in the query string.
//! The relay keeps no copy of the tokens; ownership transfers to the
//! client on that final redirect.

use axum::{
    extract::{Query, State},
    response::Redirect,
    routing::get,
    Router,
};
use serde::Deserialize;
use std::sync::Arc;

use crate::error::Result;
use crate::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/login", get(login))
        .route("/callback", get(callback))
}

/// Start the OAuth flow - redirect to Spotify authorization.
async fn login(State(state): State<Arc<AppState>>) -> Redirect {
    let auth_url = state.spotify.authorize_url(&state.config.redirect_uri);

    tracing::info!(
        client_id = %state.config.spotify_client_id,
        "Starting OAuth flow, redirecting to Spotify"
    );

    Redirect::temporary(&auth_url)
}

/// Query parameters Spotify sends to the callback.
#[derive(Deserialize)]
pub struct CallbackParams {
    /// Single-use authorization code. Absent code behaves like the empty
    /// string: the exchange is attempted and fails upstream.
    #[serde(default)]
    code: String,
}

/// OAuth callback - exchange the code for tokens and hand them to the
/// frontend.
async fn callback(
    State(state): State<Arc<AppState>>,
    Query(params): Query<CallbackParams>,
) -> Result<Redirect> {
    tracing::info!("Exchanging authorization code for tokens");

    let tokens = state
        .spotify
        .exchange_code(&params.code, &state.config.redirect_uri)
        .await?;

    // Tokens transit the browser's address bar here, exactly as the
    // frontend expects to receive them.
    let redirect_url = format!(
        "{}?access_token={}&refresh_token={}",
        state.config.frontend_url, tokens.access_token, tokens.refresh_token
    );

    Ok(Redirect::temporary(&redirect_url))
}
