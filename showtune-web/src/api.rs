//! REST endpoints
//!
//! The external interface of the application: show search, playlist
//! generation, playlist save-back, and the Spotify OAuth redirect pair.
//! Handlers validate input and auth, then delegate to the server layer;
//! any upstream failure becomes a generic 500 with a static message.

use crate::server;
use axum::{
    Json, Router,
    extract::Query,
    extract::rejection::JsonRejection,
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Redirect, Response},
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use tracing::{error, warn};

#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: &'static str,
}

fn error_response(status: StatusCode, message: &'static str) -> Response {
    (status, Json(ErrorResponse { error: message })).into_response()
}

/// All REST routes. Handlers take no state, so the router plugs into any
/// outer state type.
pub fn routes<S: Clone + Send + Sync + 'static>() -> Router<S> {
    Router::new()
        .route("/api/search-show", get(search_show))
        .route("/api/generate-playlist", post(generate_playlist))
        .route("/api/save-playlist", post(save_playlist))
        .route("/auth/login", get(login))
        .route("/auth/callback", get(callback))
}

// ============================================================================
// Show search
// ============================================================================

#[derive(Debug, Deserialize)]
struct SearchParams {
    #[serde(default)]
    query: Option<String>,
}

/// GET /api/search-show?query=... - proxy to the TMDB TV search
async fn search_show(Query(params): Query<SearchParams>) -> Response {
    let Some(query) = params.query.filter(|q| !q.trim().is_empty()) else {
        return error_response(StatusCode::BAD_REQUEST, "Query parameter is required");
    };

    match server::tmdb::search(&query).await {
        Ok(results) => Json(results).into_response(),
        Err(e) => {
            error!(query = %query, error = %e, "Show search failed");
            error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to search for shows",
            )
        }
    }
}

// ============================================================================
// Playlist generation
// ============================================================================

#[derive(Debug, Deserialize)]
struct GenerateRequest {
    show: Option<ShowInput>,
}

#[derive(Debug, Deserialize)]
struct ShowInput {
    #[serde(default)]
    id: Option<u64>,
    #[serde(default)]
    name: String,
    #[serde(default)]
    overview: String,
}

/// POST /api/generate-playlist - the full pipeline behind one request
///
/// Auth is checked before the body is even parsed, so an unauthenticated
/// call gets 401 no matter what the payload looks like.
async fn generate_playlist(
    headers: HeaderMap,
    body: Result<Json<GenerateRequest>, JsonRejection>,
) -> Response {
    let Some(token) = server::auth::bearer_token(&headers) else {
        return error_response(StatusCode::UNAUTHORIZED, "Authentication required");
    };

    let Ok(Json(request)) = body else {
        return error_response(StatusCode::BAD_REQUEST, "Show information is required");
    };
    let Some(show) = request.show else {
        return error_response(StatusCode::BAD_REQUEST, "Show information is required");
    };
    let Some(show_id) = show.id else {
        return error_response(StatusCode::BAD_REQUEST, "Show information is required");
    };

    match server::playlist::generate(show_id, &show.name, &show.overview, &token).await {
        Ok(playlist) => Json(playlist).into_response(),
        Err(_) => error_response(
            StatusCode::INTERNAL_SERVER_ERROR,
            "Failed to generate playlist",
        ),
    }
}

// ============================================================================
// Playlist save-back
// ============================================================================

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SaveRequest {
    #[serde(default)]
    show_name: String,
    #[serde(default)]
    track_uris: Vec<String>,
}

/// POST /api/save-playlist - passthrough to Spotify playlist creation
async fn save_playlist(
    headers: HeaderMap,
    body: Result<Json<SaveRequest>, JsonRejection>,
) -> Response {
    let Some(token) = server::auth::bearer_token(&headers) else {
        return error_response(StatusCode::UNAUTHORIZED, "Authentication required");
    };

    let Ok(Json(request)) = body else {
        return error_response(StatusCode::BAD_REQUEST, "Track list is required");
    };
    if request.track_uris.is_empty() {
        return error_response(StatusCode::BAD_REQUEST, "Track list is required");
    }

    match server::playlist::save(&token, &request.show_name, &request.track_uris).await {
        Ok(url) => Json(serde_json::json!({ "playlistUrl": url })).into_response(),
        Err(_) => error_response(StatusCode::INTERNAL_SERVER_ERROR, "Failed to save playlist"),
    }
}

// ============================================================================
// Spotify OAuth
// ============================================================================

/// GET /auth/login - redirect to the Spotify authorize page
async fn login() -> Response {
    let config = match server::config::get() {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "OAuth configuration missing");
            return error_response(StatusCode::INTERNAL_SERVER_ERROR, "Login is not configured");
        }
    };

    match showtune_core::auth::authorize_url(config) {
        Ok(url) => Redirect::temporary(&url).into_response(),
        Err(e) => {
            error!(error = %e, "Failed to build authorize URL");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, "Login is not configured")
        }
    }
}

#[derive(Debug, Deserialize)]
struct CallbackParams {
    #[serde(default)]
    code: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

/// GET /auth/callback - exchange the code, hand the token to the client
async fn callback(Query(params): Query<CallbackParams>) -> Response {
    if let Some(denied) = params.error {
        warn!(error = %denied, "OAuth callback returned an error");
        return Redirect::temporary("/login?error=denied").into_response();
    }

    let Some(code) = params.code else {
        return error_response(StatusCode::BAD_REQUEST, "Missing authorization code");
    };

    let config = match server::config::get() {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "OAuth configuration missing");
            return error_response(StatusCode::INTERNAL_SERVER_ERROR, "Login is not configured");
        }
    };

    match showtune_core::auth::exchange_code(&code, config).await {
        Ok(token) => {
            Redirect::temporary(&format!("/login?token={}", token.access_token)).into_response()
        }
        Err(e) => {
            error!(error = %e, "Token exchange failed");
            Redirect::temporary("/login?error=exchange").into_response()
        }
    }
}
