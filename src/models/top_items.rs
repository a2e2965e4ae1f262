// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Top-items data types.
//!
//! The relay forwards Spotify's JSON untouched; these types exist for the
//! client side, which reads only the fields it renders. The time-range
//! enum likewise lives in client view state only, since the relay passes
//! the raw query value through without checking membership.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Period filter for "top items" queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeRange {
    /// All time
    #[default]
    LongTerm,
    /// Last 6 months
    MediumTerm,
    /// Last month
    ShortTerm,
}

impl TimeRange {
    /// Wire value sent as the `time_range` query parameter.
    pub fn as_str(&self) -> &'static str {
        match self {
            TimeRange::LongTerm => "long_term",
            TimeRange::MediumTerm => "medium_term",
            TimeRange::ShortTerm => "short_term",
        }
    }

    /// Human label, as shown in the time-range dropdown.
    pub fn label(&self) -> &'static str {
        match self {
            TimeRange::LongTerm => "All time",
            TimeRange::MediumTerm => "Last 6 Months",
            TimeRange::ShortTerm => "Last Month",
        }
    }
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One page of top items as returned by the Web API.
#[derive(Debug, Clone, Deserialize)]
pub struct TopItemsPage<T> {
    #[serde(default = "Vec::new")]
    pub items: Vec<T>,
}

/// Artist record, reduced to what the UI renders.
#[derive(Debug, Clone, Deserialize)]
pub struct Artist {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub images: Vec<Image>,
}

impl Artist {
    /// Primary artist image, if Spotify supplied one.
    pub fn image_url(&self) -> Option<&str> {
        self.images.first().map(|i| i.url.as_str())
    }
}

/// Track record with its containing album.
#[derive(Debug, Clone, Deserialize)]
pub struct Track {
    pub id: String,
    pub name: String,
    pub album: Album,
}

impl Track {
    /// Album art for the track, if Spotify supplied one.
    pub fn image_url(&self) -> Option<&str> {
        self.album.images.first().map(|i| i.url.as_str())
    }
}

/// Containing album of a track.
#[derive(Debug, Clone, Deserialize)]
pub struct Album {
    pub name: String,
    #[serde(default)]
    pub images: Vec<Image>,
}

/// Image reference from the Web API.
#[derive(Debug, Clone, Deserialize)]
pub struct Image {
    pub url: String,
}
