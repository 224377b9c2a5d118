//! The playlist-generation pipeline
//!
//! Four sequential stages, each propagating its own error: show detail
//! fetch (TMDB), prompt build, model call (OpenAI), and per-recommendation
//! track resolution (Spotify). A recommendation with no catalog match is
//! dropped from the result; the playlist shrinks rather than the request
//! failing.

use crate::config::Config;
use crate::error::Error;
use crate::http::strip_markdown_json;
use crate::models::{Playlist, Recommendation, ShowDetail, Track};
use crate::openai::{self, ChatRequest};
use crate::spotify::{SpotifyCatalog, TrackCatalog};
use crate::tmdb::{ShowMetadata, TmdbMetadata};
use std::time::Instant;
use tracing::{info, warn};

/// Number of songs the model is asked for
pub const PLAYLIST_SIZE: usize = 5;

/// Temperature for model sampling
const LLM_TEMPERATURE: f32 = 0.7;

/// Generous ceiling for five (title, artist, reason) triples
const MAX_RESPONSE_TOKENS: u32 = 800;

/// Build the fixed prompt from a show's metadata.
fn build_prompt(show_name: &str, overview: &str, detail: &ShowDetail) -> String {
    let genres = detail.genre_names();
    let era = detail
        .first_air_date
        .as_deref()
        .and_then(|d| d.get(..4))
        .unwrap_or("unknown era");
    let creators = detail.creator_names();
    let keywords = detail.keyword_names();

    format!(
        r#"Create a playlist of {PLAYLIST_SIZE} songs that would be the perfect soundtrack for the TV show "{show_name}".

Information about the show:
- Genres: {genres}
- Era: {era}
- Created by: {creators}
- Overview: {overview}
- Keywords: {keywords}

For each song, provide:
1. Song title
2. Artist name
3. A brief explanation of why this song fits the show (max 2 sentences)

Format your response as a JSON array with objects containing songTitle, artist, and reason fields.
Don't include any text before or after the JSON."#
    )
}

/// Parse the model's textual response as a JSON array of triples.
///
/// No schema validation beyond what serde needs; a malformed response is
/// `Error::ModelJson` and fails the whole request.
fn parse_recommendations(content: &str) -> Result<Vec<Recommendation>, Error> {
    serde_json::from_str(strip_markdown_json(content)).map_err(Error::ModelJson)
}

/// Resolve recommendations against the catalog, one lookup at a time.
///
/// The top match for `"{title} {artist}"` is kept with the
/// recommendation's reason attached; a miss is logged and dropped, so the
/// result can be shorter than the input. Order follows the model's.
pub async fn resolve_tracks(
    catalog: &dyn TrackCatalog,
    recommendations: &[Recommendation],
) -> Result<Vec<Track>, Error> {
    let mut tracks = Vec::with_capacity(recommendations.len());

    for rec in recommendations {
        let query = format!("{} {}", rec.song_title, rec.artist);
        match catalog.find_track(&query).await? {
            Some(mut track) => {
                track.reason = Some(rec.reason.clone());
                tracks.push(track);
            }
            None => {
                warn!(
                    title = %rec.song_title,
                    artist = %rec.artist,
                    "No catalog match, dropping recommendation"
                );
            }
        }
    }

    Ok(tracks)
}

/// Generate a playlist for a show: detail fetch, model call, resolution.
pub async fn generate_playlist(
    show_id: u64,
    show_name: &str,
    overview: &str,
    access_token: &str,
    config: &Config,
) -> Result<Playlist, Error> {
    let metadata = TmdbMetadata::new(&config.tmdb_api_key);
    let catalog = SpotifyCatalog::new(access_token);
    generate_with(&metadata, &catalog, show_id, show_name, overview, config).await
}

/// The pipeline itself, over injected providers.
pub async fn generate_with(
    metadata: &dyn ShowMetadata,
    catalog: &dyn TrackCatalog,
    show_id: u64,
    show_name: &str,
    overview: &str,
    config: &Config,
) -> Result<Playlist, Error> {
    let start = Instant::now();

    info!(show_id = %show_id, show = %show_name, "Stage 1: Fetching show detail");
    let detail = metadata.show_detail(show_id).await?;

    let prompt = build_prompt(show_name, overview, &detail);

    info!(model = %config.openai_model, "Stage 2: Requesting recommendations");
    let request = ChatRequest::new(&config.openai_model, prompt)
        .temperature(LLM_TEMPERATURE)
        .max_tokens(MAX_RESPONSE_TOKENS);
    let response = openai::chat_completion(&request, &config.openai_api_key).await?;
    let recommendations = parse_recommendations(response.content_or_err()?)?;

    info!(
        count = recommendations.len(),
        "Stage 3: Resolving tracks against catalog"
    );
    let tracks = resolve_tracks(catalog, &recommendations).await?;

    info!(
        show = %show_name,
        requested = recommendations.len(),
        resolved = tracks.len(),
        duration_ms = %start.elapsed().as_millis(),
        "Playlist pipeline completed"
    );

    Ok(Playlist { tracks })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Named;

    fn detail() -> ShowDetail {
        ShowDetail {
            genres: vec![
                Named {
                    name: "Drama".to_string(),
                },
                Named {
                    name: "Crime".to_string(),
                },
            ],
            first_air_date: Some("2008-01-20".to_string()),
            created_by: vec![Named {
                name: "Vince Gilligan".to_string(),
            }],
            keywords: crate::models::KeywordList {
                results: vec![Named {
                    name: "desert".to_string(),
                }],
            },
        }
    }

    #[test]
    fn prompt_interpolates_show_metadata() {
        let prompt = build_prompt("Breaking Bad", "A chemistry teacher...", &detail());

        assert!(prompt.contains(r#"the TV show "Breaking Bad""#));
        assert!(prompt.contains("- Genres: Drama, Crime"));
        assert!(prompt.contains("- Era: 2008"));
        assert!(prompt.contains("- Created by: Vince Gilligan"));
        assert!(prompt.contains("- Keywords: desert"));
        assert!(prompt.contains("songTitle, artist, and reason"));
    }

    #[test]
    fn prompt_falls_back_to_unknown_era() {
        let undated = ShowDetail::default();
        let prompt = build_prompt("Some Show", "", &undated);
        assert!(prompt.contains("- Era: unknown era"));
    }

    #[test]
    fn recommendations_parse_from_plain_json() {
        let recs = parse_recommendations(
            r#"[
                {"songTitle": "Creep", "artist": "Radiohead", "reason": "Broody."},
                {"songTitle": "Yellow", "artist": "Coldplay", "reason": "Hopeful."}
            ]"#,
        )
        .unwrap();
        assert_eq!(recs.len(), 2);
        assert_eq!(recs[1].artist, "Coldplay");
    }

    #[test]
    fn recommendations_parse_through_markdown_fences() {
        let recs = parse_recommendations(
            "```json\n[{\"songTitle\": \"Creep\", \"artist\": \"Radiohead\", \"reason\": \"x\"}]\n```",
        )
        .unwrap();
        assert_eq!(recs.len(), 1);
    }

    #[test]
    fn malformed_model_output_is_an_error() {
        let err = parse_recommendations("Here are some songs you might like!").unwrap_err();
        assert!(matches!(err, Error::ModelJson(_)));
    }
}
