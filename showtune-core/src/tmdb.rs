//! TMDB (The Movie Database) metadata client
//!
//! Uses TMDB API v3: https://developer.themoviedb.org/docs

use crate::error::Error;
use crate::http::get_client;
use crate::models::{ShowDetail, ShowSearchResults};
use async_trait::async_trait;
use tracing::debug;

const BASE_URL: &str = "https://api.themoviedb.org/3";

/// Poster/image CDN prefix; callers append a size segment and path.
pub const IMAGE_BASE: &str = "https://image.tmdb.org/t/p";

async fn get_json<T: serde::de::DeserializeOwned>(
    path: &str,
    api_key: &str,
    params: &[(&str, &str)],
) -> Result<T, Error> {
    let mut all_params = vec![("api_key", api_key)];
    all_params.extend_from_slice(params);

    let url = format!("{BASE_URL}{path}");
    debug!(url = %url, "TMDB request");

    let resp = get_client().get(&url).query(&all_params).send().await?;

    if !resp.status().is_success() {
        return Err(status_error(resp.status()));
    }

    resp.json()
        .await
        .map_err(|e| Error::Metadata(format!("parse JSON: {e}")))
}

/// A non-2xx provider status, e.g. a show id TMDB does not know.
fn status_error(status: reqwest::StatusCode) -> Error {
    Error::Metadata(format!("TMDB returned {status}"))
}

/// Seam for the pipeline's show-detail lookup.
///
/// The generation pipeline only ever needs "extended metadata for this
/// show id, or an error"; a stub stands in for TMDB in tests.
#[async_trait]
pub trait ShowMetadata: Send + Sync {
    async fn show_detail(&self, show_id: u64) -> Result<ShowDetail, Error>;
}

/// The real metadata provider, backed by the TMDB v3 API.
pub struct TmdbMetadata {
    api_key: String,
}

impl TmdbMetadata {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
        }
    }
}

#[async_trait]
impl ShowMetadata for TmdbMetadata {
    async fn show_detail(&self, show_id: u64) -> Result<ShowDetail, Error> {
        show_detail(show_id, &self.api_key).await
    }
}

/// Search TV shows by free-text query.
///
/// The result list is the provider's, untransformed; an empty list is a
/// normal response, not an error.
pub async fn search_tv(query: &str, api_key: &str) -> Result<ShowSearchResults, Error> {
    get_json(
        "/search/tv",
        api_key,
        &[("query", query), ("include_adult", "false")],
    )
    .await
}

/// Fetch extended show metadata (genres, creators, keywords) in one call.
pub async fn show_detail(show_id: u64, api_key: &str) -> Result<ShowDetail, Error> {
    get_json(
        &format!("/tv/{show_id}"),
        api_key,
        &[("append_to_response", "keywords,credits")],
    )
    .await
}

/// Poster URL at the given width, e.g. `poster_url("w92", "/abc.jpg")`.
#[must_use]
pub fn poster_url(size: &str, path: &str) -> String {
    format!("{IMAGE_BASE}/{size}{path}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ShowSearchResults;

    #[test]
    fn search_results_deserialize_from_provider_shape() {
        let payload = serde_json::json!({
            "page": 1,
            "results": [
                {
                    "id": 1396,
                    "name": "Breaking Bad",
                    "overview": "A high school chemistry teacher...",
                    "first_air_date": "2008-01-20",
                    "poster_path": "/bb.jpg",
                    "vote_average": 9.5
                },
                {
                    "id": 60059,
                    "name": "Better Call Saul"
                }
            ],
            "total_results": 2
        });

        let parsed: ShowSearchResults = serde_json::from_value(payload).unwrap();
        assert_eq!(parsed.results.len(), 2);
        assert_eq!(parsed.results[0].name, "Breaking Bad");
        assert_eq!(parsed.results[1].overview, "");
    }

    #[test]
    fn empty_result_list_is_not_an_error() {
        let parsed: ShowSearchResults =
            serde_json::from_value(serde_json::json!({"page": 1, "results": []})).unwrap();
        assert!(parsed.results.is_empty());
    }

    #[test]
    fn unknown_show_status_maps_to_a_metadata_error() {
        let err = status_error(reqwest::StatusCode::NOT_FOUND);
        assert!(matches!(&err, Error::Metadata(_)));
        assert_eq!(err.to_string(), "metadata provider error: TMDB returned 404 Not Found");
    }

    #[test]
    fn poster_url_joins_size_and_path() {
        assert_eq!(
            poster_url("w92", "/abc.jpg"),
            "https://image.tmdb.org/t/p/w92/abc.jpg"
        );
    }
}
