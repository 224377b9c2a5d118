use crate::components::auth::{save_auth_to_storage, use_auth, use_set_auth, AuthState};
use leptos::prelude::*;

/// Account dropdown in the page header. Only rendered on authenticated
/// pages, so it assumes a token is present.
#[component]
pub fn UserMenu() -> impl IntoView {
    let auth = use_auth();
    let set_auth = use_set_auth();
    let (open, set_open) = signal(false);

    let logout = move |_| {
        let cleared = AuthState::default();
        save_auth_to_storage(&cleared);
        set_auth.set(cleared);
        set_open.set(false);
    };

    view! {
        <div class="user-menu">
            <button
                class="user-menu-button"
                on:click=move |_| set_open.update(|open| *open = !*open)
            >
                "Account"
                <span class="user-menu-caret">
                    {move || if open.get() { "\u{25b4}" } else { "\u{25be}" }}
                </span>
            </button>

            {move || open.get().then(|| view! {
                <div class="user-menu-dropdown">
                    <div class="user-menu-status">
                        {move || {
                            if auth.get().is_authenticated() {
                                "Connected to Spotify"
                            } else {
                                "Not connected"
                            }
                        }}
                    </div>
                    <button class="user-menu-item" on:click=logout>
                        "Log out"
                    </button>
                </div>
            })}
        </div>
    }
}
