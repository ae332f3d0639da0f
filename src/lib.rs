pub mod api;
pub mod app_state;
pub mod config;
pub mod crawler;
pub mod extractor;
pub mod fetcher;
pub mod health;
