//! Playlist generation and save-back for the web layer
//!
//! Thin wrappers over showtune_core with request-scoped logging.

use showtune_core::error::Error;
use showtune_core::models::Playlist;
use std::time::Instant;
use tracing::{error, info};

pub async fn generate(
    show_id: u64,
    show_name: &str,
    overview: &str,
    access_token: &str,
) -> Result<Playlist, Error> {
    let config = super::config::get().map_err(|e| Error::Config(e.to_string()))?;
    let start = Instant::now();

    let result =
        showtune_core::playlist::generate_playlist(show_id, show_name, overview, access_token, config)
            .await;
    let duration_ms = start.elapsed().as_millis();

    match &result {
        Ok(playlist) => {
            info!(
                show = %show_name,
                tracks = playlist.tracks.len(),
                duration_ms = %duration_ms,
                "Playlist generated"
            );
        }
        Err(e) => {
            error!(
                show = %show_name,
                error = %e,
                duration_ms = %duration_ms,
                "Playlist generation failed"
            );
        }
    }

    result
}

pub async fn save(access_token: &str, show_name: &str, uris: &[String]) -> Result<String, Error> {
    let name = format!("{show_name} Soundtrack");
    let description = format!("Generated by ShowTunes for \"{show_name}\"");

    let result = showtune_core::spotify::save_playlist(access_token, &name, &description, uris).await;

    match &result {
        Ok(url) => {
            info!(show = %show_name, tracks = uris.len(), url = %url, "Playlist saved");
        }
        Err(e) => {
            error!(show = %show_name, error = %e, "Playlist save failed");
        }
    }

    result
}
