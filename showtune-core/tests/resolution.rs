//! Track-resolution behavior against a stub catalog
//!
//! Run with: cargo test -p showtune-core --test resolution

use showtune_core::error::Error;
use showtune_core::models::{Recommendation, Track};
use showtune_core::playlist::resolve_tracks;
use showtune_core::spotify::TrackCatalog;

/// Catalog that only knows the tracks it was given, keyed by
/// `"{title} {artist}"` query.
struct StubCatalog {
    known: Vec<(String, Track)>,
}

#[async_trait::async_trait]
impl TrackCatalog for StubCatalog {
    async fn find_track(&self, query: &str) -> Result<Option<Track>, Error> {
        Ok(self
            .known
            .iter()
            .find(|(q, _)| q == query)
            .map(|(_, t)| t.clone()))
    }
}

/// Catalog whose every lookup fails at the transport level.
struct BrokenCatalog;

#[async_trait::async_trait]
impl TrackCatalog for BrokenCatalog {
    async fn find_track(&self, _query: &str) -> Result<Option<Track>, Error> {
        Err(Error::Catalog("Spotify search returned 503".to_string()))
    }
}

fn rec(title: &str, artist: &str, reason: &str) -> Recommendation {
    Recommendation {
        song_title: title.to_string(),
        artist: artist.to_string(),
        reason: reason.to_string(),
    }
}

fn track(id: &str, name: &str) -> Track {
    Track {
        id: id.to_string(),
        name: name.to_string(),
        ..Default::default()
    }
}

#[tokio::test]
async fn misses_shrink_the_playlist_without_error() {
    // Five recommendations, two of which the catalog cannot match.
    let recommendations = vec![
        rec("Creep", "Radiohead", "Broody outsider anthem."),
        rec("Nonexistent Song", "Nobody", "Will not match."),
        rec("Yellow", "Coldplay", "Hopeful and warm."),
        rec("Another Ghost", "No One", "Will not match either."),
        rec("Time", "Pink Floyd", "The ticking of the era."),
    ];

    let catalog = StubCatalog {
        known: vec![
            ("Creep Radiohead".to_string(), track("t1", "Creep")),
            ("Yellow Coldplay".to_string(), track("t2", "Yellow")),
            ("Time Pink Floyd".to_string(), track("t3", "Time")),
        ],
    };

    let tracks = resolve_tracks(&catalog, &recommendations).await.unwrap();

    assert_eq!(tracks.len(), 3);
    assert_eq!(tracks[0].name, "Creep");
    assert_eq!(tracks[1].name, "Yellow");
    assert_eq!(tracks[2].name, "Time");

    // Each survivor carries its own justification, unmodified.
    assert_eq!(tracks[0].reason.as_deref(), Some("Broody outsider anthem."));
    assert_eq!(tracks[1].reason.as_deref(), Some("Hopeful and warm."));
    assert_eq!(tracks[2].reason.as_deref(), Some("The ticking of the era."));
}

#[tokio::test]
async fn no_matches_yields_an_empty_playlist() {
    let recommendations = vec![rec("A", "B", "r1"), rec("C", "D", "r2")];
    let catalog = StubCatalog { known: vec![] };

    let tracks = resolve_tracks(&catalog, &recommendations).await.unwrap();
    assert!(tracks.is_empty());
}

#[tokio::test]
async fn catalog_failure_fails_the_whole_stage() {
    let recommendations = vec![rec("Creep", "Radiohead", "r")];

    let err = resolve_tracks(&BrokenCatalog, &recommendations)
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Catalog(_)));
}

#[tokio::test]
async fn resolution_preserves_recommendation_order() {
    let recommendations = vec![
        rec("Time", "Pink Floyd", "r1"),
        rec("Creep", "Radiohead", "r2"),
    ];
    let catalog = StubCatalog {
        known: vec![
            ("Creep Radiohead".to_string(), track("t1", "Creep")),
            ("Time Pink Floyd".to_string(), track("t2", "Time")),
        ],
    };

    let tracks = resolve_tracks(&catalog, &recommendations).await.unwrap();
    assert_eq!(tracks[0].name, "Time");
    assert_eq!(tracks[1].name, "Creep");
}
