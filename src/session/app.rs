// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! The client application core.
//!
//! `StatsSession` mirrors the browser app: bootstrap from the current URL,
//! on-demand top-item fetches through the relay, a time-range selector
//! that never refetches by itself, logout, and panel export. Fetch
//! failures surface as a user-facing alert and leave prior view state
//! untouched.

use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::models::{Artist, TimeRange, TopItemsPage, Track};

use super::export::{Panel, PanelSnapshot, PanelStyle, Rasterize, EXPORT_BACKGROUND};
use super::state::SessionState;
use super::store::{TokenStore, ACCESS_TOKEN_KEY};
use super::SessionError;

/// Fixed display count for the artists list.
pub const TOP_ARTISTS_LIMIT: usize = 3;
/// Fixed display count for the tracks list.
pub const TOP_TRACKS_LIMIT: usize = 10;

/// Visible path after a successful bootstrap.
const STATS_PATH: &str = "/stats";
/// Visible path after logout.
const ROOT_PATH: &str = "/";

/// Client session talking to the relay.
pub struct StatsSession<S: TokenStore> {
    store: S,
    http: reqwest::Client,
    relay_url: String,
    state: SessionState,
    time_range: TimeRange,
    location: String,
    top_artists: Vec<Artist>,
    top_tracks: Vec<Track>,
    alert: Option<String>,
    artists_panel: PanelStyle,
    tracks_panel: PanelStyle,
}

/// Query parameters the session looks for at bootstrap.
#[derive(Deserialize)]
struct BootstrapParams {
    access_token: Option<String>,
}

impl<S: TokenStore> StatsSession<S> {
    pub fn new(relay_url: impl Into<String>, store: S) -> Self {
        Self {
            store,
            http: reqwest::Client::new(),
            relay_url: relay_url.into(),
            state: SessionState::default(),
            time_range: TimeRange::default(),
            location: ROOT_PATH.to_string(),
            top_artists: Vec::new(),
            top_tracks: Vec::new(),
            alert: None,
            artists_panel: PanelStyle::default(),
            tracks_panel: PanelStyle::default(),
        }
    }

    // ─── Session bootstrap ───────────────────────────────────────────────

    /// Restore login state at startup from the visible URL or the durable
    /// store, and rewrite the visible path so the token leaves the address
    /// bar without another network round trip.
    ///
    /// No validity check happens here; a stale token only surfaces when a
    /// later fetch fails.
    pub fn bootstrap(&mut self, url: &str) {
        let query = url.splitn(2, '?').nth(1).unwrap_or("");
        let url_token = serde_urlencoded::from_str::<BootstrapParams>(query)
            .ok()
            .and_then(|p| p.access_token)
            .filter(|t| !t.is_empty());

        if let Some(token) = url_token {
            self.store.set(ACCESS_TOKEN_KEY, &token);
            self.state.login_success();
            self.location = STATS_PATH.to_string();
            tracing::debug!("Bootstrapped from URL token");
        } else if self.store.get(ACCESS_TOKEN_KEY).is_some() {
            self.state.login_success();
            self.location = STATS_PATH.to_string();
            tracing::debug!("Bootstrapped from stored token");
        } else {
            self.state = SessionState::LoggedOut;
        }
    }

    // ─── Data fetch ──────────────────────────────────────────────────────

    /// Fetch and display the top artists. A no-op without a stored token.
    pub async fn fetch_top_artists(&mut self) -> Result<(), SessionError> {
        let Some(token) = self.store.get(ACCESS_TOKEN_KEY) else {
            return Ok(());
        };

        match self.request_items::<Artist>("top-artists", &token).await {
            Ok(items) => {
                self.top_artists = items.into_iter().take(TOP_ARTISTS_LIMIT).collect();
                self.state.show_artists();
                self.alert = None;
                Ok(())
            }
            Err(e) => {
                tracing::error!(error = %e, "Error fetching top artists");
                self.alert = Some("Error fetching top artists. Please try again later.".to_string());
                Err(e)
            }
        }
    }

    /// Fetch and display the top tracks. A no-op without a stored token.
    pub async fn fetch_top_tracks(&mut self) -> Result<(), SessionError> {
        let Some(token) = self.store.get(ACCESS_TOKEN_KEY) else {
            return Ok(());
        };

        match self.request_items::<Track>("top-tracks", &token).await {
            Ok(items) => {
                self.top_tracks = items.into_iter().take(TOP_TRACKS_LIMIT).collect();
                self.state.show_tracks();
                self.alert = None;
                Ok(())
            }
            Err(e) => {
                tracing::error!(error = %e, "Error fetching top tracks");
                self.alert = Some("Error fetching top tracks. Please try again later.".to_string());
                Err(e)
            }
        }
    }

    async fn request_items<T: DeserializeOwned>(
        &self,
        path: &str,
        token: &str,
    ) -> Result<Vec<T>, SessionError> {
        let response = self
            .http
            .get(format!("{}/{}", self.relay_url, path))
            .query(&[
                ("access_token", token),
                ("time_range", self.time_range.as_str()),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(SessionError::RelayStatus(response.status().as_u16()));
        }

        let page: TopItemsPage<T> = response.json().await?;
        Ok(page.items)
    }

    /// Change the selected time range. Does not refetch; the user
    /// re-invokes a fetch action to see the new period.
    pub fn set_time_range(&mut self, range: TimeRange) {
        self.time_range = range;
    }

    // ─── Logout ──────────────────────────────────────────────────────────

    /// Clear the stored token and all fetched state. Regaining access
    /// requires the full login handshake.
    pub fn logout(&mut self) {
        self.store.clear(ACCESS_TOKEN_KEY);
        self.state.logout();
        self.top_artists.clear();
        self.top_tracks.clear();
        self.alert = None;
        self.location = ROOT_PATH.to_string();
    }

    // ─── Panel export ────────────────────────────────────────────────────

    /// Export a panel to its fixed filename under `out_dir`.
    ///
    /// The panel background is overridden for the rasterization and
    /// restored before this method returns, on success and on failure.
    pub fn export_panel(
        &mut self,
        panel: Panel,
        rasterizer: &dyn Rasterize,
        out_dir: &Path,
    ) -> Result<PathBuf, SessionError> {
        let original = self.panel_style(panel).background;
        self.panel_style_mut(panel).background = EXPORT_BACKGROUND;

        let snapshot = self.panel_snapshot(panel);
        let rendered = rasterizer.rasterize(&snapshot);

        self.panel_style_mut(panel).background = original;

        let image = rendered?;
        let path = out_dir.join(panel.filename());
        image.save(&path)?;
        Ok(path)
    }

    fn panel_snapshot(&self, panel: Panel) -> PanelSnapshot {
        let lines = match panel {
            Panel::Artists => self.top_artists.iter().map(|a| a.name.clone()).collect(),
            Panel::Tracks => self.top_tracks.iter().map(|t| t.name.clone()).collect(),
        };

        PanelSnapshot {
            title: panel.title().to_string(),
            lines,
            background: self.panel_style(panel).background,
        }
    }

    fn panel_style(&self, panel: Panel) -> &PanelStyle {
        match panel {
            Panel::Artists => &self.artists_panel,
            Panel::Tracks => &self.tracks_panel,
        }
    }

    fn panel_style_mut(&mut self, panel: Panel) -> &mut PanelStyle {
        match panel {
            Panel::Artists => &mut self.artists_panel,
            Panel::Tracks => &mut self.tracks_panel,
        }
    }

    // ─── Accessors ───────────────────────────────────────────────────────

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_logged_in(&self) -> bool {
        self.state.is_logged_in()
    }

    pub fn time_range(&self) -> TimeRange {
        self.time_range
    }

    /// Visible location, as the browser address bar would show it.
    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn top_artists(&self) -> &[Artist] {
        &self.top_artists
    }

    pub fn top_tracks(&self) -> &[Track] {
        &self.top_tracks
    }

    /// Pending user-facing alert from the last failed fetch, if any.
    pub fn alert(&self) -> Option<&str> {
        self.alert.as_deref()
    }

    /// Current background color of a panel.
    pub fn panel_background(&self, panel: Panel) -> image::Rgba<u8> {
        self.panel_style(panel).background
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}
