#![allow(dead_code)]

pub mod potability_env;

use std::path::{Path, PathBuf};

/// JSON of the bundled three-tree sample forest.
pub const SAMPLE_FOREST: &str = include_str!("../../assets/models/sample_forest.json");

/// Write the sample forest where the app looks for its default model.
pub fn install_sample_model(config_home: &Path) -> PathBuf {
    let app_dir = config_home.join(potability::app_dirs::APP_DIR_NAME);
    std::fs::create_dir_all(&app_dir).expect("create app dir");
    let path = app_dir.join(potability::config::DEFAULT_MODEL_FILE_NAME);
    std::fs::write(&path, SAMPLE_FOREST).expect("write sample model");
    path
}

/// Schema defaults as owned `(name, text)` pairs.
pub fn default_pairs() -> Vec<(String, String)> {
    potability::schema::FIELDS
        .iter()
        .map(|spec| (spec.name.to_string(), spec.default.to_string()))
        .collect()
}
