//! Authentication UI components
//!
//! OAuth itself happens on the server (/auth/login redirects to Spotify,
//! /auth/callback exchanges the code); the client only stores the bearer
//! token and hands it to server functions.

use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_query_map};

/// Auth state stored in context: a Spotify bearer token, present or none.
#[derive(Debug, Clone, Default)]
pub struct AuthState {
    pub token: Option<String>,
}

impl AuthState {
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }
}

/// Provide auth context for the entire app
#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    let (auth_state, set_auth_state) = signal(AuthState::default());

    // Load token from localStorage on mount
    Effect::new(move |_| {
        #[cfg(target_arch = "wasm32")]
        {
            if let Some(window) = web_sys::window() {
                if let Ok(Some(storage)) = window.local_storage() {
                    if let Ok(Some(token)) = storage.get_item("spotify_token") {
                        set_auth_state.set(AuthState { token: Some(token) });
                    }
                }
            }
        }
    });

    provide_context(auth_state);
    provide_context(set_auth_state);

    children()
}

/// Get auth read signal from context
pub fn use_auth() -> ReadSignal<AuthState> {
    expect_context::<ReadSignal<AuthState>>()
}

/// Get auth write signal from context
pub fn use_set_auth() -> WriteSignal<AuthState> {
    expect_context::<WriteSignal<AuthState>>()
}

/// Save auth to localStorage
#[allow(unused_variables)]
pub fn save_auth_to_storage(state: &AuthState) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                if let Some(token) = &state.token {
                    let _ = storage.set_item("spotify_token", token);
                } else {
                    let _ = storage.remove_item("spotify_token");
                }
            }
        }
    }
}

/// Full-page login screen
///
/// Also the landing spot for the OAuth callback redirect: a `token` query
/// parameter is captured into storage, an `error` parameter is shown.
#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = use_auth();
    let set_auth = use_set_auth();
    let query = use_query_map();
    let navigate = use_navigate();

    // Capture the token handed over by /auth/callback
    Effect::new(move |_| {
        if let Some(token) = query.get().get("token") {
            if !token.is_empty() {
                let state = AuthState { token: Some(token) };
                save_auth_to_storage(&state);
                set_auth.set(state);
            }
        }
    });

    // Redirect to home once authenticated
    let nav_effect = navigate.clone();
    Effect::new(move |_| {
        if auth.get().is_authenticated() {
            nav_effect("/", Default::default());
        }
    });

    let oauth_error = move || query.get().get("error").map(|_| ());

    view! {
        <div class="login-page">
            <div class="login-container">
                <div class="login-header">
                    <h1>"ShowTunes"</h1>
                    <p class="login-subtitle">"Turn any TV show into a custom playlist"</p>
                </div>

                {move || oauth_error().map(|_| view! {
                    <div class="form-error">
                        "Spotify login didn't go through. Please try again."
                    </div>
                })}

                <a class="spotify-login-button" href="/auth/login" rel="external">
                    "Continue with Spotify"
                </a>

                <p class="login-hint">
                    "We only use your account to search songs and save playlists."
                </p>
            </div>
        </div>
    }
}

/// Hook for protecting routes - call this at the start of protected components
/// Returns true if authenticated, false if redirecting
pub fn use_require_auth() -> ReadSignal<bool> {
    let auth = use_auth();
    let navigate = use_navigate();
    let (ready, set_ready) = signal(false);

    Effect::new(move |_| {
        if !auth.get().is_authenticated() {
            navigate("/login", Default::default());
        } else {
            set_ready.set(true);
        }
    });

    ready
}
