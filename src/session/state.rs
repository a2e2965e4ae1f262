// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Explicit session state machine.
//!
//! The browser original encoded this as loose `isLoggedIn`/`activeSection`
//! flags; here the states and transitions are spelled out. The only way
//! out of `LoggedOut` is `login_success` with a fresh token, and a view
//! can only be shown while logged in.

/// Which result list is currently displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveView {
    #[default]
    None,
    Artists,
    Tracks,
}

/// Login/view state of the client session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionState {
    #[default]
    LoggedOut,
    LoggedIn {
        view: ActiveView,
    },
}

impl SessionState {
    pub fn is_logged_in(&self) -> bool {
        matches!(self, SessionState::LoggedIn { .. })
    }

    /// Currently displayed view; `None` while logged out.
    pub fn view(&self) -> ActiveView {
        match self {
            SessionState::LoggedOut => ActiveView::None,
            SessionState::LoggedIn { view } => *view,
        }
    }

    /// A token was obtained: enter the logged-in state with no view shown.
    /// A fresh token also resets the view of an already-logged-in session.
    pub fn login_success(&mut self) {
        *self = SessionState::LoggedIn {
            view: ActiveView::None,
        };
    }

    /// Show the artists list. Invalid while logged out; returns whether
    /// the transition applied.
    pub fn show_artists(&mut self) -> bool {
        self.show(ActiveView::Artists)
    }

    /// Show the tracks list. Invalid while logged out; returns whether
    /// the transition applied.
    pub fn show_tracks(&mut self) -> bool {
        self.show(ActiveView::Tracks)
    }

    fn show(&mut self, next: ActiveView) -> bool {
        match self {
            SessionState::LoggedOut => false,
            SessionState::LoggedIn { view } => {
                *view = next;
                true
            }
        }
    }

    /// Drop back to logged-out. Irreversible without a new token.
    pub fn logout(&mut self) {
        *self = SessionState::LoggedOut;
    }
}
