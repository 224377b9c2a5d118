use serde::{Deserialize, Serialize};

/// A TV series record as returned by the TMDB search endpoint.
///
/// Fields are passed through verbatim from the provider and never
/// mutated after the fetch.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Show {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub overview: String,
    #[serde(default)]
    pub first_air_date: Option<String>,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub vote_average: Option<f64>,
}

impl Show {
    /// Year of the first air date, if the provider supplied one.
    #[must_use]
    pub fn first_air_year(&self) -> Option<&str> {
        self.first_air_date.as_deref().and_then(|d| d.get(..4))
    }
}

/// TMDB search response envelope (`{"results": [...]}`).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ShowSearchResults {
    #[serde(default)]
    pub results: Vec<Show>,
}

/// A named entity inside TMDB detail payloads (genres, creators, keywords).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Named {
    pub name: String,
}

/// TV keywords arrive wrapped as `{"results": [...]}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct KeywordList {
    #[serde(default)]
    pub results: Vec<Named>,
}

/// Extended show metadata from `/tv/{id}?append_to_response=keywords,credits`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ShowDetail {
    #[serde(default)]
    pub genres: Vec<Named>,
    #[serde(default)]
    pub first_air_date: Option<String>,
    #[serde(default)]
    pub created_by: Vec<Named>,
    #[serde(default)]
    pub keywords: KeywordList,
}

impl ShowDetail {
    pub fn genre_names(&self) -> String {
        join_names(&self.genres)
    }

    pub fn creator_names(&self) -> String {
        join_names(&self.created_by)
    }

    pub fn keyword_names(&self) -> String {
        join_names(&self.keywords.results)
    }
}

fn join_names(items: &[Named]) -> String {
    items
        .iter()
        .map(|n| n.name.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

/// One (title, artist, reason) triple produced by the language model.
///
/// Parsed from the model's JSON array; not validated beyond parse success.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub song_title: String,
    pub artist: String,
    pub reason: String,
}

/// Track artist (Spotify shape).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Artist {
    pub name: String,
}

/// Album cover image.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Image {
    pub url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Album {
    #[serde(default)]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub images: Vec<Image>,
    #[serde(default)]
    pub release_date: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExternalUrls {
    #[serde(default)]
    pub spotify: String,
}

/// A resolved, playable song from the streaming catalog.
///
/// `reason` is not part of the provider payload; the pipeline attaches the
/// originating recommendation's justification before the track is returned.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Track {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub uri: String,
    #[serde(default)]
    pub artists: Vec<Artist>,
    #[serde(default)]
    pub album: Album,
    #[serde(default)]
    pub duration_ms: u64,
    #[serde(default)]
    pub external_urls: ExternalUrls,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl Track {
    /// Comma-separated artist names for display.
    #[must_use]
    pub fn artist_line(&self) -> String {
        self.artists
            .iter()
            .map(|a| a.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Duration as `m:ss`.
    #[must_use]
    pub fn duration_display(&self) -> String {
        let secs = self.duration_ms / 1000;
        format!("{}:{:02}", secs / 60, secs % 60)
    }

    /// First album cover URL, if any.
    #[must_use]
    pub fn cover_url(&self) -> Option<&str> {
        self.album.images.first().map(|i| i.url.as_str())
    }
}

/// The generated playlist for one request/response cycle.
///
/// At most one track per recommendation; recommendations without a catalog
/// match are absent. Never persisted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Playlist {
    pub tracks: Vec<Track>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duration_display_pads_seconds() {
        let track = Track {
            duration_ms: 245_000,
            ..Default::default()
        };
        assert_eq!(track.duration_display(), "4:05");
    }

    #[test]
    fn first_air_year_takes_year_prefix() {
        let show = Show {
            first_air_date: Some("2008-01-20".to_string()),
            ..Default::default()
        };
        assert_eq!(show.first_air_year(), Some("2008"));

        let undated = Show::default();
        assert_eq!(undated.first_air_year(), None);
    }

    #[test]
    fn recommendation_parses_camel_case() {
        let rec: Recommendation = serde_json::from_str(
            r#"{"songTitle": "Creep", "artist": "Radiohead", "reason": "Fits the mood."}"#,
        )
        .unwrap();
        assert_eq!(rec.song_title, "Creep");
        assert_eq!(rec.artist, "Radiohead");
    }

    #[test]
    fn keywords_deserialize_from_tv_wrapper() {
        let detail: ShowDetail = serde_json::from_value(serde_json::json!({
            "genres": [{"id": 18, "name": "Drama"}, {"id": 80, "name": "Crime"}],
            "first_air_date": "2008-01-20",
            "created_by": [{"name": "Vince Gilligan"}],
            "keywords": {"results": [{"name": "drug cartel"}, {"name": "desert"}]}
        }))
        .unwrap();

        assert_eq!(detail.genre_names(), "Drama, Crime");
        assert_eq!(detail.creator_names(), "Vince Gilligan");
        assert_eq!(detail.keyword_names(), "drug cartel, desert");
    }
}
