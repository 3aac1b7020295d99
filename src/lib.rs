pub mod api;
pub mod config;
pub mod logging;
pub mod repository;
pub mod session;
pub mod ui;
