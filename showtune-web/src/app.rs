use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{
    components::{Route, Router, Routes},
    path,
};

use crate::components::auth::{AuthProvider, LoginPage};
use crate::components::home::Home;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Stylesheet id="leptos" href="/pkg/showtune-web.css"/>
        <Title text="ShowTunes - playlists for your favorite shows"/>
        <Meta name="description" content="Turn any TV show into a custom Spotify playlist"/>

        <AuthProvider>
            <Router>
                <main>
                    <Routes fallback=|| "Page not found.">
                        <Route path=path!("/") view=Home/>
                        <Route path=path!("/login") view=LoginPage/>
                    </Routes>
                </main>
            </Router>
        </AuthProvider>
    }
}
