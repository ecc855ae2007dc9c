mod app;
mod config;
mod effects;
mod location;
mod logging;
mod ui;

pub use app::run_app;
