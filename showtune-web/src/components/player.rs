use leptos::prelude::*;
use showtune_core::models::Track;

/// Now-playing bar for the selected track. Starts collapsed; clicking the
/// header toggles an expanded view with album details and an outbound
/// Spotify link.
#[component]
pub fn PlayerPanel(track: Track) -> impl IntoView {
    let (expanded, set_expanded) = signal(false);

    let release_year = track
        .album
        .release_date
        .as_deref()
        .and_then(|d| d.get(..4))
        .map(str::to_owned);
    let album_name = track.album.name.clone();
    let spotify_url = track.external_urls.spotify.clone();
    let duration = track.duration_display();

    view! {
        <div class="player-panel" class:expanded=move || expanded.get()>
            <div
                class="player-bar"
                role="button"
                on:click=move |_| set_expanded.update(|open| *open = !*open)
            >
                {track.cover_url().map(|url| view! {
                    <img class="player-cover" src=url.to_string() alt=track.album.name.clone() />
                })}
                <div class="player-track">
                    <div class="player-name">{track.name.clone()}</div>
                    <div class="player-artists">{track.artist_line()}</div>
                </div>
                <span class="player-toggle">
                    {move || if expanded.get() { "\u{25bc}" } else { "\u{25b2}" }}
                </span>
            </div>

            {move || {
                let album_name = album_name.clone();
                let release_year = release_year.clone();
                let spotify_url = spotify_url.clone();
                let duration = duration.clone();
                expanded.get().then(|| view! {
                    <div class="player-details">
                        <dl>
                            <dt>"Album"</dt>
                            <dd>{album_name}</dd>
                            {release_year.map(|year| view! {
                                <dt>"Released"</dt>
                                <dd>{year}</dd>
                            })}
                            <dt>"Duration"</dt>
                            <dd>{duration}</dd>
                        </dl>
                        <a
                            class="player-link"
                            href=spotify_url
                            target="_blank"
                            rel="noopener noreferrer"
                        >
                            "Open in Spotify"
                        </a>
                    </div>
                })
            }}
        </div>
    }
}
