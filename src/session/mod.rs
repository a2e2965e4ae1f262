// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Client session core.
//!
//! Headless counterpart of the browser UI: it owns the durable token
//! store, the explicit session state machine, the selected time range and
//! the fetched top-item lists. It talks only to the relay, never to
//! Spotify directly. Embedders drive it from a single-threaded context;
//! every operation runs to completion before the next one starts.

pub mod app;
pub mod export;
pub mod state;
pub mod store;

pub use app::{StatsSession, TOP_ARTISTS_LIMIT, TOP_TRACKS_LIMIT};
pub use export::{BandRasterizer, Panel, PanelSnapshot, PanelStyle, Rasterize, EXPORT_BACKGROUND};
pub use state::{ActiveView, SessionState};
pub use store::{MemoryTokenStore, TokenStore, ACCESS_TOKEN_KEY};

/// Client-side error type.
///
/// Relay and export failures stay local to the session: the caller gets
/// the error, the session keeps its prior view state.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("relay request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("relay returned HTTP {0}")]
    RelayStatus(u16),

    #[error("panel rasterization failed: {0}")]
    Image(#[from] image::ImageError),

    #[error("panel export I/O failed: {0}")]
    Io(#[from] std::io::Error),
}
