pub mod auth;
pub mod config;
pub mod playlist;
pub mod tmdb;
