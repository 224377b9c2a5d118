use crate::components::auth::{use_auth, use_require_auth};
use crate::components::playlist::PlaylistResult;
use crate::components::show_search::ShowSearch;
use crate::components::user_menu::UserMenu;
use leptos::prelude::*;
use showtune_core::models::{Playlist, Show};

#[server]
pub async fn generate_playlist(show: Show, token: String) -> Result<Playlist, ServerFnError> {
    use crate::server;

    if token.trim().is_empty() {
        return Err(ServerFnError::new("Authentication required"));
    }
    if show.id == 0 {
        return Err(ServerFnError::new("Show information is required"));
    }

    server::playlist::generate(show.id, &show.name, &show.overview, &token)
        .await
        .map_err(|_| ServerFnError::new("Failed to generate playlist"))
}

#[component]
pub fn Home() -> impl IntoView {
    // Auth check - redirects to /login if not authenticated
    let auth_ready = use_require_auth();

    let (selected_show, set_selected_show) = signal(Option::<Show>::None);
    let (playlist, set_playlist) = signal(Option::<Playlist>::None);
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal(Option::<String>::None);

    let auth = use_auth();

    let on_show_select = Callback::new(move |show: Show| {
        if loading.get() {
            return;
        }

        let token = auth.get().token.clone().unwrap_or_default();

        set_selected_show.set(Some(show.clone()));
        set_playlist.set(None);
        set_loading.set(true);
        set_error.set(None);

        leptos::task::spawn_local(async move {
            match generate_playlist(show, token).await {
                Ok(result) => {
                    set_playlist.set(Some(result));
                }
                Err(e) => {
                    set_error.set(Some(
                        "Error generating playlist. Please try again.".to_string(),
                    ));
                    leptos::logging::error!("Generate error: {}", e);
                }
            }
            set_loading.set(false);
        });
    });

    // Gate on the auth check; until it passes this renders a placeholder
    // while use_require_auth redirects.
    view! {
        {move || {
            if !auth_ready.get() {
                return view! { <div class="loading">"Loading..."</div> }.into_any();
            }

            view! {
                <div class="home-container">
                    <div class="top-bar">
                        <UserMenu />
                    </div>

                    <header class="hero">
                        <h1>"Find Your Show's Perfect Soundtrack"</h1>
                        <p class="tagline">
                            "Enter a TV show and discover a custom playlist that matches its vibe"
                        </p>
                    </header>

                    <ShowSearch on_select=on_show_select />

                    {move || loading.get().then(|| view! {
                        <div class="generating">
                            <div class="search-spinner"></div>
                            <p>"Curating your playlist..."</p>
                        </div>
                    })}

                    {move || error.get().map(|err| view! {
                        <div class="error-message">{err}</div>
                    })}

                    {move || {
                        let playlist = playlist.get()?;
                        let show = selected_show.get()?;
                        Some(view! {
                            <PlaylistResult playlist=playlist show=show />
                        })
                    }}
                </div>
            }
            .into_any()
        }}
    }
}
