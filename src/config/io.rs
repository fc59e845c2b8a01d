use std::path::{Path, PathBuf};

use crate::app_dirs;

use super::types::{AppConfig, ConfigError};
use super::{CONFIG_FILE_NAME, DEFAULT_MODEL_FILE_NAME};

/// Resolve the configuration file path, ensuring the parent directory exists.
pub fn config_path() -> Result<PathBuf, ConfigError> {
    let dir = app_dirs::app_root_dir()?;
    Ok(dir.join(CONFIG_FILE_NAME))
}

/// Load configuration from disk, returning defaults if missing.
///
/// A missing file is written out with defaults so users can find and edit it.
pub fn load_or_default() -> Result<AppConfig, ConfigError> {
    let path = config_path()?;
    if !path.exists() {
        let config = AppConfig::default();
        save_to_path(&config, &path)?;
        tracing::info!("Wrote default config to {}", path.display());
        return Ok(config);
    }
    load_from(&path)
}

/// Load configuration from a specific file; a missing file yields defaults.
pub fn load_from(path: &Path) -> Result<AppConfig, ConfigError> {
    if !path.exists() {
        return Ok(AppConfig::default());
    }
    let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str(&text).map_err(|source| ConfigError::ParseToml {
        path: path.to_path_buf(),
        source,
    })
}

/// Save configuration to a specific path, creating parent directories as needed.
///
/// The file is written beside the target and renamed into place so a crash
/// never leaves a truncated config behind.
pub fn save_to_path(config: &AppConfig, path: &Path) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|source| ConfigError::Write {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    let data = toml::to_string_pretty(config).map_err(|source| ConfigError::SerializeToml {
        path: path.to_path_buf(),
        source,
    })?;
    let tmp_path = path.with_extension("toml.tmp");
    std::fs::write(&tmp_path, data.as_bytes()).map_err(|source| ConfigError::Write {
        path: tmp_path.clone(),
        source,
    })?;
    std::fs::rename(&tmp_path, path).map_err(|source| ConfigError::Write {
        path: path.to_path_buf(),
        source,
    })
}

/// Resolve the model artifact path from settings.
///
/// Absent settings fall back to [`DEFAULT_MODEL_FILE_NAME`] in the app
/// directory; relative paths are anchored there too.
pub fn resolve_model_path(config: &AppConfig) -> Result<PathBuf, ConfigError> {
    let root = app_dirs::app_root_dir()?;
    Ok(resolve_model_path_in(config, &root))
}

pub(super) fn resolve_model_path_in(config: &AppConfig, root: &Path) -> PathBuf {
    match &config.model.path {
        Some(path) if path.is_absolute() => path.clone(),
        Some(path) => root.join(path),
        None => root.join(DEFAULT_MODEL_FILE_NAME),
    }
}

#[cfg(test)]
mod tests {
    use super::super::types::{InterfaceSettings, ModelSettings};
    use super::*;
    use crate::app_dirs::{APP_DIR_NAME, ConfigBaseGuard};
    use tempfile::tempdir;

    #[test]
    fn saves_and_reloads_settings() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("cfg.toml");
        let cfg = AppConfig {
            model: ModelSettings {
                path: Some(PathBuf::from("models/forest.json")),
            },
            interface: InterfaceSettings {
                dark_mode: true,
                show_field_help: false,
            },
        };
        save_to_path(&cfg, &path).unwrap();
        assert_eq!(load_from(&path).unwrap(), cfg);
        assert!(!path.with_extension("toml.tmp").exists());
    }

    #[test]
    fn missing_keys_fall_back_to_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("cfg.toml");
        std::fs::write(&path, "[interface]\ndark_mode = true\nunknown = 3\n").unwrap();
        let cfg = load_from(&path).unwrap();
        assert!(cfg.interface.dark_mode);
        assert!(cfg.interface.show_field_help);
        assert_eq!(cfg.model.path, None);
    }

    #[test]
    fn invalid_toml_is_reported_with_path() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("cfg.toml");
        std::fs::write(&path, "[model\npath = 1").unwrap();
        let err = load_from(&path).unwrap_err();
        assert!(matches!(err, ConfigError::ParseToml { .. }));
        assert!(err.to_string().contains("cfg.toml"));
    }

    #[test]
    fn load_or_default_writes_defaults_on_first_run() {
        let dir = tempdir().unwrap();
        let _guard = ConfigBaseGuard::set(dir.path().to_path_buf());
        let cfg = load_or_default().unwrap();
        assert_eq!(cfg, AppConfig::default());
        assert!(
            dir.path()
                .join(APP_DIR_NAME)
                .join(CONFIG_FILE_NAME)
                .is_file()
        );
    }

    #[test]
    fn model_path_resolution() {
        let root = Path::new("/data/.potability");
        let mut cfg = AppConfig::default();
        assert_eq!(
            resolve_model_path_in(&cfg, root),
            root.join(DEFAULT_MODEL_FILE_NAME)
        );
        cfg.model.path = Some(PathBuf::from("custom.json"));
        assert_eq!(resolve_model_path_in(&cfg, root), root.join("custom.json"));
        let absolute = std::env::temp_dir().join("forest.json");
        cfg.model.path = Some(absolute.clone());
        assert_eq!(resolve_model_path_in(&cfg, root), absolute);
    }
}
