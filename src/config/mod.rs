//! Application configuration stored as TOML in the app directory.

mod io;
mod types;

pub use io::{config_path, load_from, load_or_default, resolve_model_path, save_to_path};
pub use types::{AppConfig, ConfigError, InterfaceSettings, ModelSettings};

/// Default filename used to store the app configuration.
pub const CONFIG_FILE_NAME: &str = "config.toml";
/// Model artifact looked up in the app directory when none is configured.
pub const DEFAULT_MODEL_FILE_NAME: &str = "best_random_forest.json";
