use crate::components::auth::use_auth;
use crate::components::player::PlayerPanel;
use leptos::prelude::*;
use showtune_core::models::{Playlist, Show, Track};

#[server]
pub async fn save_playlist_to_spotify(
    token: String,
    show_name: String,
    track_uris: Vec<String>,
) -> Result<String, ServerFnError> {
    use crate::server;

    if token.trim().is_empty() {
        return Err(ServerFnError::new("Authentication required"));
    }
    if track_uris.is_empty() {
        return Err(ServerFnError::new("Track list is required"));
    }

    server::playlist::save(&token, &show_name, &track_uris)
        .await
        .map_err(|_| ServerFnError::new("Failed to save playlist"))
}

/// Save-button state machine. Once `Saved`, the button goes inert so the
/// same playlist cannot be saved twice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SaveState {
    Idle,
    Saving,
    Saved,
    Failed,
}

impl SaveState {
    fn label(self) -> &'static str {
        match self {
            SaveState::Idle => "Save to Spotify",
            SaveState::Saving => "Saving...",
            SaveState::Saved => "Saved to Spotify",
            SaveState::Failed => "Save failed - try again",
        }
    }

    fn is_busy(self) -> bool {
        matches!(self, SaveState::Saving | SaveState::Saved)
    }
}

/// The generated playlist: show header, save button, track rows, and the
/// now-playing panel for whichever track is active.
#[component]
pub fn PlaylistResult(playlist: Playlist, show: Show) -> impl IntoView {
    let auth = use_auth();

    let (active_track, set_active_track) = signal(Option::<Track>::None);
    let (save_state, set_save_state) = signal(SaveState::Idle);

    let show_name = show.name.clone();
    let track_uris: Vec<String> = playlist.tracks.iter().map(|t| t.uri.clone()).collect();
    let tracks = playlist.tracks.clone();

    let on_save = move |_| {
        // Idle and Failed are the only states a click can act from
        if save_state.get().is_busy() {
            return;
        }

        let token = auth.get().token.clone().unwrap_or_default();
        let name = show_name.clone();
        let uris = track_uris.clone();

        set_save_state.set(SaveState::Saving);

        leptos::task::spawn_local(async move {
            match save_playlist_to_spotify(token, name, uris).await {
                Ok(_) => set_save_state.set(SaveState::Saved),
                Err(e) => {
                    set_save_state.set(SaveState::Failed);
                    leptos::logging::error!("Save error: {}", e);
                }
            }
        });
    };

    let year = show
        .first_air_year()
        .map(|y| y.to_string())
        .unwrap_or_default();

    view! {
        <div class="playlist-result">
            <div class="show-header">
                {match &show.poster_path {
                    Some(path) => view! {
                        <img
                            class="show-poster"
                            src=format!("https://image.tmdb.org/t/p/w500{path}")
                            alt=show.name.clone()
                        />
                    }.into_any(),
                    None => view! {
                        <div class="show-poster placeholder">"No Image"</div>
                    }.into_any(),
                }}

                <div class="show-info">
                    <h2>{show.name.clone()}</h2>
                    <p class="show-meta">
                        {year}
                        {show.vote_average.map(|v| format!(" \u{2022} {:.1}/10", v))}
                    </p>
                    <p class="show-overview">{show.overview.clone()}</p>

                    <h3>"Your Custom Playlist"</h3>
                    <p class="playlist-blurb">
                        {format!("Based on the mood, era, and themes of \"{}\"", show.name)}
                    </p>

                    <button
                        class="save-button"
                        class:saved=move || save_state.get() == SaveState::Saved
                        prop:disabled=move || save_state.get().is_busy()
                        on:click=on_save
                    >
                        {move || save_state.get().label()}
                    </button>
                </div>
            </div>

            <div class="track-list">
                <For
                    each={move || tracks.clone().into_iter().enumerate().collect::<Vec<_>>()}
                    key=|(_, track)| track.id.clone()
                    children=move |(index, track): (usize, Track)| {
                        let track_for_click = track.clone();
                        let track_id = track.id.clone();
                        let is_active = move || {
                            active_track
                                .get()
                                .is_some_and(|active| active.id == track_id)
                        };
                        view! {
                            <div
                                class="track-row"
                                class:active=is_active
                                role="button"
                                on:click=move |_| set_active_track.set(Some(track_for_click.clone()))
                            >
                                <div class="track-index">{index + 1}</div>
                                {track.cover_url().map(|url| view! {
                                    <img
                                        class="track-cover"
                                        src=url.to_string()
                                        alt=track.album.name.clone()
                                        loading="lazy"
                                    />
                                })}
                                <div class="track-info">
                                    <div class="track-name">{track.name.clone()}</div>
                                    <div class="track-artists">{track.artist_line()}</div>
                                    {track.reason.clone().map(|reason| view! {
                                        <p class="track-reason">{reason}</p>
                                    })}
                                </div>
                                <div class="track-duration">{track.duration_display()}</div>
                            </div>
                        }
                    }
                />
            </div>

            // Keyed on track id: switching tracks remounts the panel, which
            // also resets it to collapsed.
            {move || active_track.get().map(|track| view! {
                <div class="player-dock">
                    <PlayerPanel track=track />
                </div>
            })}
        </div>
    }
}
