//! Application configuration loaded once from environment variables.

use std::env;

/// Application configuration, loaded once at startup and passed by
/// reference through shared state. There are no ambient globals.
#[derive(Debug, Clone)]
pub struct Config {
    /// Spotify OAuth client ID (public)
    pub spotify_client_id: String,
    /// Spotify OAuth client secret
    pub spotify_client_secret: String,
    /// Redirect URI registered with Spotify for the OAuth callback
    pub redirect_uri: String,
    /// Frontend URL that receives the post-callback token redirect
    pub frontend_url: String,
    /// Server port
    pub port: u16,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Reads a `.env` file first if one is present, so local development
    /// only needs the Spotify app credentials dropped next to the binary.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        Ok(Self {
            spotify_client_id: env::var("SPOTIFY_CLIENT_ID")
                .map_err(|_| ConfigError::Missing("SPOTIFY_CLIENT_ID"))?,
            spotify_client_secret: env::var("SPOTIFY_CLIENT_SECRET")
                .map(|v| v.trim().to_string())
                .map_err(|_| ConfigError::Missing("SPOTIFY_CLIENT_SECRET"))?,
            redirect_uri: env::var("REDIRECT_URI")
                .map_err(|_| ConfigError::Missing("REDIRECT_URI"))?,
            frontend_url: env::var("FRONTEND_URL")
                .unwrap_or_else(|_| "http://localhost:3000".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "5000".to_string())
                .parse()
                .unwrap_or(5000),
        })
    }

    /// Fixed config for tests; no environment access.
    pub fn test_default() -> Self {
        Self {
            spotify_client_id: "test_client_id".to_string(),
            spotify_client_secret: "test_secret".to_string(),
            redirect_uri: "http://localhost:5000/callback".to_string(),
            frontend_url: "http://localhost:3000".to_string(),
            port: 5000,
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(&'static str),
}
