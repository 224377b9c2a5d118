//! Show search for the web layer, delegating to showtune_core

use showtune_core::error::Error;
use showtune_core::models::ShowSearchResults;

pub async fn search(query: &str) -> Result<ShowSearchResults, Error> {
    let config = super::config::get().map_err(|e| Error::Config(e.to_string()))?;
    showtune_core::tmdb::search_tv(query, &config.tmdb_api_key).await
}
