pub mod app;
pub mod catalog;
pub mod config;
pub mod entry;
pub mod fallback;
pub mod handlers;
pub mod ident;
pub mod playback;
pub mod ui;
pub mod views;
