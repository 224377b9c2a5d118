use leptos::prelude::*;
use showtune_core::models::Show;
use std::time::Duration;

/// Debounce window between keystrokes and the search request
const DEBOUNCE_MS: u64 = 500;

#[server]
pub async fn search_shows(query: String) -> Result<Vec<Show>, ServerFnError> {
    use crate::server;

    let trimmed = query.trim().to_string();
    if trimmed.is_empty() {
        return Ok(Vec::new());
    }

    match server::tmdb::search(&trimmed).await {
        Ok(results) => Ok(results.results),
        Err(e) => {
            tracing::error!(query = %trimmed, error = %e, "Show search failed");
            Err(ServerFnError::new("Failed to search for shows"))
        }
    }
}

/// Search box with a debounced query and a results dropdown.
///
/// Widget states: idle, debounced-typing, loading, results-shown, error.
/// Selecting a show fills the input, closes the dropdown, and hands the
/// show to the parent.
#[component]
pub fn ShowSearch(on_select: Callback<Show>) -> impl IntoView {
    let (query, set_query) = signal(String::new());
    let (results, set_results) = signal(Vec::<Show>::new());
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal(Option::<String>::None);
    let (dropdown_open, set_dropdown_open) = signal(false);

    let debounce: StoredValue<Option<TimeoutHandle>> = StoredValue::new(None);

    let do_search = move |search_query: String| {
        let trimmed = search_query.trim().to_string();
        if trimmed.is_empty() {
            set_results.set(Vec::new());
            set_dropdown_open.set(false);
            return;
        }

        set_loading.set(true);
        set_error.set(None);

        leptos::task::spawn_local(async move {
            match search_shows(trimmed).await {
                Ok(shows) => {
                    set_dropdown_open.set(!shows.is_empty());
                    set_results.set(shows);
                }
                Err(e) => {
                    set_error.set(Some("Error searching shows. Please try again.".to_string()));
                    leptos::logging::error!("Search error: {}", e);
                }
            }
            set_loading.set(false);
        });
    };

    let on_input = move |ev: web_sys::Event| {
        let value = event_target_value(&ev);
        set_query.set(value.clone());

        // Restart the debounce window on every keystroke
        if let Some(handle) = debounce.get_value() {
            handle.clear();
        }
        let handle = set_timeout_with_handle(
            move || do_search(value),
            Duration::from_millis(DEBOUNCE_MS),
        )
        .ok();
        debounce.set_value(handle);
    };

    let on_focus = move |_| {
        if !results.get().is_empty() {
            set_dropdown_open.set(true);
        }
    };

    let select_show = move |show: Show| {
        set_query.set(show.name.clone());
        set_dropdown_open.set(false);
        on_select.run(show);
    };

    view! {
        <div class="show-search">
            <div class="search-input-container">
                <input
                    type="text"
                    class="search-input"
                    placeholder="Search for a TV show..."
                    prop:value=query
                    on:input=on_input
                    on:focus=on_focus
                />
                {move || loading.get().then(|| view! {
                    <div class="search-spinner" aria-label="Searching"></div>
                })}
            </div>

            {move || error.get().map(|err| view! {
                <div class="search-error">{err}</div>
            })}

            {move || (dropdown_open.get() && !results.get().is_empty()).then(|| view! {
                <div class="search-dropdown">
                    <For
                        each=move || results.get()
                        key=|show| show.id
                        children=move |show: Show| {
                            let show_for_click = show.clone();
                            let year = show
                                .first_air_year()
                                .map(|y| y.to_string())
                                .unwrap_or_else(|| "Unknown year".to_string());
                            view! {
                                <div
                                    class="search-result"
                                    role="button"
                                    on:click=move |_| select_show(show_for_click.clone())
                                >
                                    {match &show.poster_path {
                                        Some(path) => view! {
                                            <img
                                                class="result-poster"
                                                src=format!("https://image.tmdb.org/t/p/w92{path}")
                                                alt=show.name.clone()
                                                loading="lazy"
                                            />
                                        }.into_any(),
                                        None => view! {
                                            <div class="result-poster placeholder">"No Image"</div>
                                        }.into_any(),
                                    }}
                                    <div class="result-info">
                                        <div class="result-name">{show.name.clone()}</div>
                                        <div class="result-year">{year}</div>
                                    </div>
                                </div>
                            }
                        }
                    />
                </div>
            })}
        </div>
    }
}
