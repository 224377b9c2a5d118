use anyhow::{Context, Result};

/// Default chat model used when OPENAI_MODEL is not set
pub const DEFAULT_MODEL: &str = "gpt-4-turbo";

/// Default OAuth redirect for local development
const DEFAULT_REDIRECT_URI: &str = "http://127.0.0.1:3000/auth/callback";

/// Application configuration from environment
#[derive(Debug, Clone)]
pub struct Config {
    pub tmdb_api_key: String,
    pub openai_api_key: String,
    pub openai_model: String,
    pub spotify_client_id: String,
    pub spotify_client_secret: String,
    pub spotify_redirect_uri: String,
}

impl Config {
    /// Load configuration from the .env file and environment
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // Not an error if .env is missing

        let tmdb_api_key = std::env::var("TMDB_API_KEY").context("TMDB_API_KEY not set")?;

        let openai_api_key = std::env::var("OPENAI_API_KEY").context("OPENAI_API_KEY not set")?;

        let openai_model =
            std::env::var("OPENAI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());

        let spotify_client_id =
            std::env::var("SPOTIFY_CLIENT_ID").context("SPOTIFY_CLIENT_ID not set")?;

        let spotify_client_secret =
            std::env::var("SPOTIFY_CLIENT_SECRET").context("SPOTIFY_CLIENT_SECRET not set")?;

        let spotify_redirect_uri = std::env::var("SPOTIFY_REDIRECT_URI")
            .unwrap_or_else(|_| DEFAULT_REDIRECT_URI.to_string());

        Ok(Self {
            tmdb_api_key,
            openai_api_key,
            openai_model,
            spotify_client_id,
            spotify_client_secret,
            spotify_redirect_uri,
        })
    }
}
