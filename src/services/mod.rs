// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - upstream Spotify access.

pub mod spotify;

pub use spotify::{SpotifyClient, TokenExchangeResponse, TopItemKind};
