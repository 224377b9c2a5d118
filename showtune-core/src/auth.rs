//! Spotify OAuth (authorization-code flow)
//!
//! The application never manages accounts of its own: it builds the
//! authorize redirect, exchanges the callback code for a token, and hands
//! the bearer token to the client. Everything downstream only consumes
//! "a bearer token, present or none".

use crate::config::Config;
use crate::error::Error;
use crate::http::get_client;
use serde::Deserialize;

const AUTHORIZE_URL: &str = "https://accounts.spotify.com/authorize";
const TOKEN_URL: &str = "https://accounts.spotify.com/api/token";

/// Scopes needed for search-on-behalf and playlist save-back.
const SCOPES: &str = "user-read-email user-read-private playlist-modify-private";

/// Token response from the accounts service
#[derive(Debug, Clone, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(default)]
    pub expires_in: u64,
    #[serde(default)]
    pub refresh_token: Option<String>,
}

/// Build the authorize URL the login button redirects to.
pub fn authorize_url(config: &Config) -> Result<String, Error> {
    let url = reqwest::Url::parse_with_params(
        AUTHORIZE_URL,
        &[
            ("client_id", config.spotify_client_id.as_str()),
            ("response_type", "code"),
            ("redirect_uri", config.spotify_redirect_uri.as_str()),
            ("scope", SCOPES),
        ],
    )
    .map_err(|e| Error::Catalog(format!("invalid authorize URL: {e}")))?;

    Ok(url.into())
}

/// Exchange the callback code for an access token.
pub async fn exchange_code(code: &str, config: &Config) -> Result<TokenResponse, Error> {
    let resp = get_client()
        .post(TOKEN_URL)
        .basic_auth(
            &config.spotify_client_id,
            Some(&config.spotify_client_secret),
        )
        .form(&[
            ("grant_type", "authorization_code"),
            ("code", code),
            ("redirect_uri", config.spotify_redirect_uri.as_str()),
        ])
        .send()
        .await?;

    if !resp.status().is_success() {
        return Err(Error::Catalog(format!(
            "token exchange returned {}",
            resp.status()
        )));
    }

    resp.json()
        .await
        .map_err(|e| Error::Catalog(format!("parse token response: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> Config {
        Config {
            tmdb_api_key: "tmdb".to_string(),
            openai_api_key: "openai".to_string(),
            openai_model: "gpt-4-turbo".to_string(),
            spotify_client_id: "client-id".to_string(),
            spotify_client_secret: "client-secret".to_string(),
            spotify_redirect_uri: "http://127.0.0.1:3000/auth/callback".to_string(),
        }
    }

    #[test]
    fn authorize_url_carries_client_and_redirect() {
        let url = authorize_url(&test_config()).unwrap();
        assert!(url.starts_with("https://accounts.spotify.com/authorize?"));
        assert!(url.contains("client_id=client-id"));
        assert!(url.contains("response_type=code"));
        assert!(url.contains("redirect_uri=http%3A%2F%2F127.0.0.1%3A3000%2Fauth%2Fcallback"));
    }

    #[test]
    fn token_response_tolerates_missing_refresh_token() {
        let token: TokenResponse = serde_json::from_value(serde_json::json!({
            "access_token": "abc",
            "token_type": "Bearer",
            "expires_in": 3600
        }))
        .unwrap();
        assert_eq!(token.access_token, "abc");
        assert!(token.refresh_token.is_none());
    }
}
