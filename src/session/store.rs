// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Durable client-side key-value storage.
//!
//! The browser original keeps the access token in `localStorage`; here the
//! store is an injectable capability so tests and embedders can supply any
//! persistence backend. Only the session's single-threaded context ever
//! reads or writes it.

use std::collections::HashMap;

/// Storage key holding the access token.
pub const ACCESS_TOKEN_KEY: &str = "access_token";

/// Key-value storage capability for client-side persistence.
pub trait TokenStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
    fn clear(&mut self, key: &str);
}

/// In-memory store, the default backend.
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    values: HashMap<String, String>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TokenStore for MemoryTokenStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_string(), value.to_string());
    }

    fn clear(&mut self, key: &str) {
        self.values.remove(key);
    }
}
