// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Tunestats relay server
//!
//! Mediates between the browser and Spotify: runs the OAuth
//! authorization-code exchange and forwards the two top-items calls.

use tunestats::{config::Config, services::SpotifyClient, AppState};

use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging();

    // Load configuration from environment
    let config = Config::from_env().expect("Failed to load configuration");
    tracing::info!(port = config.port, "Starting Tunestats relay");

    let spotify = SpotifyClient::new(
        config.spotify_client_id.clone(),
        config.spotify_client_secret.clone(),
    );

    // Build shared state
    let state = Arc::new(AppState { config, spotify });

    // Build router
    let port = state.config.port;
    let app = tunestats::routes::create_router(state);

    // Start server
    let addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(address = %addr, "Server listening");

    axum::serve(listener, app).await?;
    Ok(())
}

/// Initialize structured logging with env-filter overrides.
fn init_logging() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("tunestats=debug".parse().unwrap())
                .add_directive("info".parse().unwrap()),
        )
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();
}
