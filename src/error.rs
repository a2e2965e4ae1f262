// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Application error types.
//!
//! The relay deliberately keeps the error surface coarse: every failure
//! maps to a generic 500 with a plain text body, and the detail goes to
//! the log only. Callers re-authenticate or retry by hand; nothing in the
//! protocol depends on structured error payloads.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

/// Application error type that converts to HTTP responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// The authorization server rejected the code-for-token exchange.
    #[error("token exchange failed: {0}")]
    TokenExchange(String),

    /// The resource API call failed (expired token, upstream outage, ...).
    #[error("Spotify API error: {0}")]
    Upstream(String),

    #[error("internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            AppError::TokenExchange(msg) => {
                tracing::error!(error = %msg, "Token exchange failed");
            }
            AppError::Upstream(msg) => {
                tracing::error!(error = %msg, "Upstream Spotify request failed");
            }
            AppError::Internal(err) => {
                tracing::error!(error = %err, "Internal server error");
            }
        }

        (StatusCode::INTERNAL_SERVER_ERROR, "Server error").into_response()
    }
}

/// Result type alias for handlers
pub type Result<T> = std::result::Result<T, AppError>;
