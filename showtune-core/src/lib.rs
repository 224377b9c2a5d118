// Models are always available
pub mod models;

// Server-only modules
#[cfg(feature = "server")]
pub mod auth;
#[cfg(feature = "server")]
pub mod config;
#[cfg(feature = "server")]
pub mod error;
#[cfg(feature = "server")]
pub mod http;
#[cfg(feature = "server")]
pub mod openai;
#[cfg(feature = "server")]
pub mod playlist;
#[cfg(feature = "server")]
pub mod spotify;
#[cfg(feature = "server")]
pub mod tmdb;

// Re-export commonly used types
pub use models::{Playlist, Recommendation, Show, ShowDetail, Track};

#[cfg(feature = "server")]
pub use config::Config;
#[cfg(feature = "server")]
pub use error::Error;
#[cfg(feature = "server")]
pub use spotify::TrackCatalog;
#[cfg(feature = "server")]
pub use tmdb::ShowMetadata;
