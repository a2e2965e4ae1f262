// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Spotify client for the OAuth handshake and top-items passthrough.
//!
//! Handles:
//! - Authorize URL construction for the login redirect
//! - Authorization-code exchange (HTTP Basic client credentials)
//! - Bearer-authenticated top-items fetches, returned verbatim
//!
//! There is no retry, caching, or token refresh: each call maps to exactly
//! one upstream request and the caller owns the resulting tokens.

use crate::error::AppError;
use serde::Deserialize;

/// OAuth scopes requested at login: read access to top items and
/// recently-played history.
pub const SCOPES: &str = "user-top-read user-read-recently-played";

/// Which top-items collection to fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TopItemKind {
    Artists,
    Tracks,
}

impl TopItemKind {
    /// Path segment under `/me/top/` on the Web API.
    pub fn path(&self) -> &'static str {
        match self {
            TopItemKind::Artists => "artists",
            TopItemKind::Tracks => "tracks",
        }
    }
}

/// Spotify API client.
#[derive(Clone)]
pub struct SpotifyClient {
    http: reqwest::Client,
    accounts_base_url: String,
    api_base_url: String,
    client_id: String,
    client_secret: String,
}

impl SpotifyClient {
    /// Create a new Spotify client with OAuth credentials, pointed at the
    /// real accounts and Web API hosts.
    pub fn new(client_id: String, client_secret: String) -> Self {
        Self::with_base_urls(
            client_id,
            client_secret,
            "https://accounts.spotify.com".to_string(),
            "https://api.spotify.com/v1".to_string(),
        )
    }

    /// Create a client with overridden base URLs. Tests point this at a
    /// local mock standing in for both Spotify hosts.
    pub fn with_base_urls(
        client_id: String,
        client_secret: String,
        accounts_base_url: String,
        api_base_url: String,
    ) -> Self {
        Self {
            http: reqwest::Client::new(),
            accounts_base_url,
            api_base_url,
            client_id,
            client_secret,
        }
    }

    /// Build the authorize URL the browser is redirected to at login.
    ///
    /// Pure string construction; always succeeds.
    pub fn authorize_url(&self, redirect_uri: &str) -> String {
        format!(
            "{}/authorize?response_type=code&client_id={}&scope={}&redirect_uri={}",
            self.accounts_base_url,
            self.client_id,
            urlencoding::encode(SCOPES),
            urlencoding::encode(redirect_uri),
        )
    }

    /// Exchange an authorization code for an access/refresh token pair.
    ///
    /// Server-to-server POST with HTTP Basic client credentials. The code
    /// is single-use and short-lived; a rejected exchange is not retried.
    pub async fn exchange_code(
        &self,
        code: &str,
        redirect_uri: &str,
    ) -> Result<TokenExchangeResponse, AppError> {
        let url = format!("{}/api/token", self.accounts_base_url);

        let response = self
            .http
            .post(&url)
            .basic_auth(&self.client_id, Some(&self.client_secret))
            .form(&[
                ("grant_type", "authorization_code"),
                ("code", code),
                ("redirect_uri", redirect_uri),
            ])
            .send()
            .await
            .map_err(|e| AppError::TokenExchange(format!("request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            tracing::error!(status = %status, body = %body, "Spotify token exchange failed");
            return Err(AppError::TokenExchange(format!(
                "exchange failed with status {}",
                status
            )));
        }

        response
            .json()
            .await
            .map_err(|e| AppError::TokenExchange(format!("failed to parse token response: {}", e)))
    }

    /// Fetch a top-items collection and return the JSON body verbatim.
    ///
    /// The token and time-range value are forwarded as given; Spotify
    /// rejects or ignores anything malformed.
    pub async fn top_items(
        &self,
        kind: TopItemKind,
        access_token: &str,
        time_range: &str,
    ) -> Result<String, AppError> {
        let url = format!("{}/me/top/{}", self.api_base_url, kind.path());

        let response = self
            .http
            .get(&url)
            .bearer_auth(access_token)
            .query(&[("time_range", time_range)])
            .send()
            .await
            .map_err(|e| AppError::Upstream(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::Upstream(format!("HTTP {}: {}", status, body)));
        }

        response
            .text()
            .await
            .map_err(|e| AppError::Upstream(format!("failed to read body: {}", e)))
    }
}

/// Token exchange response from the accounts service.
///
/// Spotify also returns `token_type`, `scope` and `expires_in`; nothing in
/// this system tracks expiry, so only the tokens themselves are read.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenExchangeResponse {
    pub access_token: String,
    pub refresh_token: String,
}
