//! Spotify Web API client
//!
//! Track search for the resolution loop, plus the thin playlist-creation
//! passthrough behind the save button. Every call carries the user's own
//! bearer token; this module never holds credentials of its own.

use crate::error::Error;
use crate::http::get_client;
use crate::models::Track;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

const API_BASE: &str = "https://api.spotify.com/v1";

/// Seam for the track-resolution loop.
///
/// The pipeline only ever asks "top match for this query, or none"; a stub
/// implementation stands in for Spotify in tests.
#[async_trait]
pub trait TrackCatalog: Send + Sync {
    async fn find_track(&self, query: &str) -> Result<Option<Track>, Error>;
}

/// The real catalog, backed by `/v1/search`.
pub struct SpotifyCatalog {
    access_token: String,
}

impl SpotifyCatalog {
    pub fn new(access_token: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    tracks: SearchTracks,
}

#[derive(Debug, Deserialize)]
struct SearchTracks {
    #[serde(default)]
    items: Vec<Track>,
}

#[async_trait]
impl TrackCatalog for SpotifyCatalog {
    /// Search the catalog and keep the single best match.
    ///
    /// An empty result set is `Ok(None)`, not an error; only transport
    /// failures and non-2xx statuses fail the call.
    async fn find_track(&self, query: &str) -> Result<Option<Track>, Error> {
        debug!(query = %query, "Spotify track search");

        let resp = get_client()
            .get(format!("{API_BASE}/search"))
            .query(&[("q", query), ("type", "track"), ("limit", "1")])
            .bearer_auth(&self.access_token)
            .send()
            .await?;

        if !resp.status().is_success() {
            return Err(Error::Catalog(format!(
                "Spotify search returned {}",
                resp.status()
            )));
        }

        let search: SearchResponse = resp
            .json()
            .await
            .map_err(|e| Error::Catalog(format!("parse search response: {e}")))?;

        Ok(search.tracks.items.into_iter().next())
    }
}

#[derive(Debug, Deserialize)]
struct Me {
    id: String,
}

#[derive(Debug, Serialize)]
struct CreatePlaylistRequest<'a> {
    name: &'a str,
    description: &'a str,
    public: bool,
}

#[derive(Debug, Deserialize)]
struct CreatedPlaylist {
    id: String,
    #[serde(default)]
    external_urls: crate::models::ExternalUrls,
}

#[derive(Debug, Serialize)]
struct AddTracksRequest<'a> {
    uris: &'a [String],
}

async fn check_status(resp: reqwest::Response, what: &str) -> Result<reqwest::Response, Error> {
    if !resp.status().is_success() {
        return Err(Error::Catalog(format!("{what} returned {}", resp.status())));
    }
    Ok(resp)
}

/// Create a private playlist on the user's account and add the given
/// track URIs. Returns the playlist's public URL.
pub async fn save_playlist(
    access_token: &str,
    name: &str,
    description: &str,
    uris: &[String],
) -> Result<String, Error> {
    let client = get_client();

    let me: Me = check_status(
        client
            .get(format!("{API_BASE}/me"))
            .bearer_auth(access_token)
            .send()
            .await?,
        "Spotify /me",
    )
    .await?
    .json()
    .await
    .map_err(|e| Error::Catalog(format!("parse /me response: {e}")))?;

    let created: CreatedPlaylist = check_status(
        client
            .post(format!("{API_BASE}/users/{}/playlists", me.id))
            .bearer_auth(access_token)
            .json(&CreatePlaylistRequest {
                name,
                description,
                public: false,
            })
            .send()
            .await?,
        "Spotify playlist creation",
    )
    .await?
    .json()
    .await
    .map_err(|e| Error::Catalog(format!("parse playlist response: {e}")))?;

    check_status(
        client
            .post(format!("{API_BASE}/playlists/{}/tracks", created.id))
            .bearer_auth(access_token)
            .json(&AddTracksRequest { uris })
            .send()
            .await?,
        "Spotify add tracks",
    )
    .await?;

    Ok(created.external_urls.spotify)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_response_takes_top_item() {
        let payload = serde_json::json!({
            "tracks": {
                "items": [
                    {
                        "id": "3BQHpFgAp4l80e1XslIjNI",
                        "uri": "spotify:track:3BQHpFgAp4l80e1XslIjNI",
                        "name": "Yellow",
                        "duration_ms": 266773,
                        "artists": [{"name": "Coldplay"}],
                        "album": {
                            "id": "6ZG5lRT77aJ3btmArcykra",
                            "name": "Parachutes",
                            "release_date": "2000-07-10",
                            "images": [{"url": "https://i.scdn.co/image/yellow"}]
                        },
                        "external_urls": {"spotify": "https://open.spotify.com/track/3BQ"}
                    }
                ]
            }
        });

        let parsed: SearchResponse = serde_json::from_value(payload).unwrap();
        let track = parsed.tracks.items.into_iter().next().unwrap();
        assert_eq!(track.name, "Yellow");
        assert_eq!(track.artist_line(), "Coldplay");
        assert_eq!(track.cover_url(), Some("https://i.scdn.co/image/yellow"));
        assert!(track.reason.is_none());
    }

    #[test]
    fn empty_items_is_a_miss() {
        let parsed: SearchResponse =
            serde_json::from_value(serde_json::json!({"tracks": {"items": []}})).unwrap();
        assert!(parsed.tracks.items.is_empty());
    }
}
