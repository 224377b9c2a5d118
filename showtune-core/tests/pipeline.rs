//! Pipeline failure behavior against stub providers
//!
//! Run with: cargo test -p showtune-core --test pipeline

use showtune_core::config::Config;
use showtune_core::error::Error;
use showtune_core::models::{ShowDetail, Track};
use showtune_core::playlist::generate_with;
use showtune_core::spotify::TrackCatalog;
use showtune_core::tmdb::ShowMetadata;

/// Metadata provider that knows no shows, the way TMDB answers an id
/// that does not exist.
struct UnknownShowMetadata;

#[async_trait::async_trait]
impl ShowMetadata for UnknownShowMetadata {
    async fn show_detail(&self, _show_id: u64) -> Result<ShowDetail, Error> {
        Err(Error::Metadata("TMDB returned 404 Not Found".to_string()))
    }
}

struct EmptyCatalog;

#[async_trait::async_trait]
impl TrackCatalog for EmptyCatalog {
    async fn find_track(&self, _query: &str) -> Result<Option<Track>, Error> {
        Ok(None)
    }
}

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

#[tokio::test]
async fn unknown_show_fails_the_pipeline_with_a_metadata_error() {
    // Detail fetch is the first stage; its failure is the whole request's
    // failure, with no partial playlist.
    let err = generate_with(
        &UnknownShowMetadata,
        &EmptyCatalog,
        999_999_999,
        "No Such Show",
        "",
        &test_config(),
    )
    .await
    .unwrap_err();

    assert!(matches!(err, Error::Metadata(_)));
}
