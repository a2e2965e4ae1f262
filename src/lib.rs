// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Tunestats: your top Spotify artists and tracks
//!
//! This crate provides the OAuth relay that sits between the browser and
//! the Spotify accounts/Web API, plus the headless client session core
//! (login state, top-item fetching, panel image export).

pub mod config;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod session;

use config::Config;
use services::SpotifyClient;

/// Shared application state.
pub struct AppState {
    pub config: Config,
    pub spotify: SpotifyClient,
}
