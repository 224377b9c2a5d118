use thiserror::Error;

/// Errors from the playlist-generation pipeline and its upstream services.
///
/// Every variant maps to a 500 at the request boundary; the distinction
/// exists so each pipeline stage propagates its own failure explicitly
/// instead of funnelling through one broad catch-all.
#[derive(Debug, Error)]
pub enum Error {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("metadata provider error: {0}")]
    Metadata(String),

    #[error("catalog provider error: {0}")]
    Catalog(String),

    #[error("model error: {0}")]
    Model(String),

    #[error("model response was not valid JSON: {0}")]
    ModelJson(#[source] serde_json::Error),
}
