//! Mediates between raw form input and the loaded classifier.
//!
//! The gateway owns the contract between the nine-field schema and the model:
//! it validates input, wraps a record as a one-row frame in schema order,
//! checks the frame before the model sees it, and maps the raw label to a
//! verdict. It holds no mutable state; the model handle is shared read-only.

use std::path::Path;
use std::sync::Arc;

use thiserror::Error;

use crate::model::{FeatureFrame, ModelError, ModelLoadError, PotabilityModel, RandomForestModel};
use crate::record::{InvalidInput, MeasurementRecord};
use crate::schema::{self, FIELD_COUNT};

/// Raw label the model uses for potable water.
pub const POTABLE_LABEL: i64 = 1;

/// Two-valued outcome of a prediction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PredictionVerdict {
    /// Safe for consumption.
    Potable,
    /// Not recommended for consumption.
    NotPotable,
}

impl PredictionVerdict {
    /// Map a raw model label; anything other than `1` is not potable.
    pub fn from_label(label: i64) -> Self {
        if label == POTABLE_LABEL {
            Self::Potable
        } else {
            Self::NotPotable
        }
    }

    /// Banner text shown to the user.
    pub fn message(self) -> &'static str {
        match self {
            Self::Potable => "The water IS potable. Safe for consumption!",
            Self::NotPotable => "The water is NOT potable. Not recommended for consumption.",
        }
    }
}

/// The model failed while predicting a well-formed record.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ModelInvocationError {
    /// The model raised during inference.
    #[error("Model inference failed: {0}")]
    Model(#[from] ModelError),
    /// The model returned no label for the submitted row.
    #[error("Model returned no prediction")]
    EmptyPrediction,
}

/// One row of the transposed input echo.
#[derive(Debug, Clone, PartialEq)]
pub struct EchoRow {
    /// Column name.
    pub field: String,
    /// Value exactly as submitted.
    pub value: f64,
}

/// Verdict plus the echo of what was submitted.
#[derive(Debug, Clone, PartialEq)]
pub struct VerdictReport {
    pub verdict: PredictionVerdict,
    pub message: &'static str,
    pub echo: Vec<EchoRow>,
}

/// One bar of the feature-importance chart.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureImportance {
    pub field: &'static str,
    pub value: f64,
}

/// Validates input, invokes the model, and maps its output.
#[derive(Clone)]
pub struct PredictionGateway {
    model: Arc<dyn PotabilityModel>,
}

impl std::fmt::Debug for PredictionGateway {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PredictionGateway").finish_non_exhaustive()
    }
}

impl PredictionGateway {
    /// Wrap a loaded model, checking that it describes the nine-field schema.
    pub fn new(model: Arc<dyn PotabilityModel>) -> Result<Self, ModelLoadError> {
        let reported = model.feature_importances().len();
        if reported != FIELD_COUNT {
            return Err(ModelLoadError::SchemaMismatch(format!(
                "model reports {reported} feature importances, expected {FIELD_COUNT}"
            )));
        }
        Ok(Self { model })
    }

    /// Load the forest artifact at `path` and wrap it.
    ///
    /// The artifact must have been fitted on the schema columns in schema order.
    pub fn load(path: &Path) -> Result<Self, ModelLoadError> {
        let model = RandomForestModel::load_json(path)?;
        check_feature_names(model.feature_names())?;
        Self::new(Arc::new(model))
    }

    /// Validate raw `(name, text)` pairs into a record.
    pub fn collect_inputs<'a, 'b, I>(
        &self,
        entries: I,
    ) -> Result<MeasurementRecord, InvalidInput>
    where
        I: IntoIterator<Item = (&'a str, &'b str)>,
    {
        MeasurementRecord::collect(entries)
    }

    /// Predict the verdict for one record.
    pub fn predict(
        &self,
        record: &MeasurementRecord,
    ) -> Result<PredictionVerdict, ModelInvocationError> {
        let frame = FeatureFrame::single_row(record);
        let labels = self.model.predict(&frame)?;
        if labels.len() > 1 {
            tracing::warn!(
                "Model returned {} labels for a single row; using the first",
                labels.len()
            );
        }
        let label = labels
            .first()
            .copied()
            .ok_or(ModelInvocationError::EmptyPrediction)?;
        Ok(PredictionVerdict::from_label(label))
    }

    /// Pair the verdict with a transposed echo of the submitted record.
    pub fn render_verdict(
        &self,
        record: &MeasurementRecord,
        verdict: PredictionVerdict,
    ) -> VerdictReport {
        let echo = FeatureFrame::single_row(record)
            .transpose()
            .into_iter()
            .map(|(field, value)| EchoRow { field, value })
            .collect();
        VerdictReport {
            verdict,
            message: verdict.message(),
            echo,
        }
    }

    /// Validate, predict, and render in one step.
    pub fn submit<'a, 'b, I>(&self, entries: I) -> Result<VerdictReport, SubmitError>
    where
        I: IntoIterator<Item = (&'a str, &'b str)>,
    {
        let record = self.collect_inputs(entries)?;
        let verdict = self.predict(&record)?;
        Ok(self.render_verdict(&record, verdict))
    }

    /// Model importances paired with schema columns, in schema order.
    pub fn feature_importances(&self) -> Vec<FeatureImportance> {
        schema::FIELDS
            .iter()
            .zip(self.model.feature_importances())
            .map(|(spec, &value)| FeatureImportance {
                field: spec.name,
                value,
            })
            .collect()
    }
}

fn check_feature_names(names: &[String]) -> Result<(), ModelLoadError> {
    let expected = schema::column_names();
    if names.len() != FIELD_COUNT || names.iter().zip(expected).any(|(name, col)| name != col) {
        return Err(ModelLoadError::SchemaMismatch(format!(
            "model was fitted on columns {names:?}, expected {expected:?}"
        )));
    }
    Ok(())
}

/// Failure of a combined [`PredictionGateway::submit`] call.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SubmitError {
    /// Input was rejected before reaching the model.
    #[error(transparent)]
    Invalid(#[from] InvalidInput),
    /// The model failed during inference.
    #[error(transparent)]
    Invocation(#[from] ModelInvocationError),
}
