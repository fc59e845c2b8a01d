//! Trained classifier capability and its on-disk adapter.
//!
//! The rest of the crate only sees [`PotabilityModel`]: a read-only handle
//! that predicts labels for a column-labelled frame and reports one importance
//! score per feature. [`RandomForestModel`] is the single implementation and
//! loads a JSON export of a fitted random forest.

mod forest;
mod frame;

use std::path::PathBuf;

use thiserror::Error;

pub use forest::{FOREST_FORMAT_VERSION, ForestArtifact, RandomForestModel, TreeArrays};
pub use frame::FeatureFrame;

/// Read-only classifier shared by every request.
pub trait PotabilityModel: Send + Sync {
    /// Predict one integer label per frame row.
    fn predict(&self, frame: &FeatureFrame) -> Result<Vec<i64>, ModelError>;

    /// Importance score per feature, aligned with the training column order.
    fn feature_importances(&self) -> &[f64];
}

/// Failure raised by a model while predicting.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ModelError {
    /// Frame columns differ from the columns the model was fitted on.
    #[error("Feature names mismatch: expected {expected:?}, got {found:?}")]
    FeatureNames {
        expected: Vec<String>,
        found: Vec<String>,
    },
    /// A row does not have one value per column.
    #[error("Row {row} has {found} values but the model expects {expected}")]
    RowWidth {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// A value is NaN or infinite.
    #[error("Row {row} column {column} is not a finite number")]
    NonFiniteValue { row: usize, column: String },
}

/// The model artifact could not be loaded or does not fit the schema.
#[derive(Debug, Error)]
pub enum ModelLoadError {
    /// Failed to read the artifact file.
    #[error("Failed to read model {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    /// The artifact is not valid JSON for the expected layout.
    #[error("Invalid model file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    /// The artifact was written with an unsupported format version.
    #[error("Unsupported model format version {found} (expected {expected})")]
    UnsupportedVersion { found: u32, expected: u32 },
    /// The artifact parsed but violates a structural invariant.
    #[error("Malformed model: {0}")]
    Malformed(String),
    /// The model does not describe the nine-measurement schema.
    #[error("Model does not match the measurement schema: {0}")]
    SchemaMismatch(String),
}
