// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Data models for the application.

pub mod top_items;

pub use top_items::{Album, Artist, Image, TimeRange, TopItemsPage, Track};
