mod app;
mod effects;
mod input;
mod logging;
mod opener;
mod settings;
mod ui;

pub use app::run_app;
