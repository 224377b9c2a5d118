pub mod auth;
pub mod home;
pub mod player;
pub mod playlist;
pub mod show_search;
pub mod user_menu;
