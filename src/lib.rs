//! Library exports for the potability app, its tools, and tests.
/// Application directory resolution.
pub mod app_dirs;
/// TOML settings.
pub mod config;
/// egui front end.
pub mod egui_app;
/// Input validation and model invocation.
pub mod gateway;
/// Tracing setup.
pub mod logging;
/// Trained classifier capability and artifact loader.
pub mod model;
/// Validated measurement records.
pub mod record;
/// Fixed measurement schema.
pub mod schema;
