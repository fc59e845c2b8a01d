//! Bridges the prediction gateway to the egui UI.

use crate::egui_app::state::*;
use crate::egui_app::view_model::{self, ImportanceRow};
use crate::gateway::{PredictionGateway, PredictionVerdict};
use crate::record::{self, InputIssue};
use crate::schema::{FIELD_COUNT, FIELDS};

/// Maintains UI state and drives submissions through the gateway.
pub struct PredictionController {
    pub ui: UiState,
    gateway: PredictionGateway,
    importance_rows: Vec<ImportanceRow>,
}

impl PredictionController {
    pub fn new(gateway: PredictionGateway) -> Self {
        let importance_rows = view_model::importance_rows(&gateway.feature_importances());
        Self {
            ui: UiState::default(),
            gateway,
            importance_rows,
        }
    }

    /// Replace the text of one field by schema index.
    pub fn set_field(&mut self, index: usize, text: impl Into<String>) {
        if let Some(slot) = self.ui.form.fields.get_mut(index) {
            *slot = text.into();
        }
    }

    /// Restore every field to its schema default.
    pub fn reset_form(&mut self) {
        self.ui.form = FormState::default();
        self.ui.outcome = None;
        self.ui.phase = SubmissionPhase::Idle;
        self.set_status("Form reset to default values", StatusTone::Idle);
    }

    /// Inline validation message for one field, if its text is unusable.
    pub fn field_issue(&self, index: usize) -> Option<InputIssue> {
        let spec = FIELDS.get(index)?;
        let text = self.ui.form.fields.get(index)?;
        record::parse_field(spec, text).err()
    }

    /// Whether every field currently parses within bounds.
    pub fn form_is_valid(&self) -> bool {
        (0..FIELD_COUNT).all(|index| self.field_issue(index).is_none())
    }

    /// Validate the form, predict, and store the outcome.
    pub fn submit(&mut self) {
        let record = match self.gateway.collect_inputs(self.ui.form.entries()) {
            Ok(record) => record,
            Err(err) => {
                tracing::info!("Submission rejected: {err}");
                self.set_status(err.to_string(), StatusTone::Warning);
                self.ui.outcome = Some(SubmissionOutcome::Rejected(err));
                self.ui.phase = SubmissionPhase::Idle;
                return;
            }
        };
        self.ui.phase = SubmissionPhase::Submitted;
        match self.gateway.predict(&record) {
            Ok(verdict) => {
                let report = self.gateway.render_verdict(&record, verdict);
                tracing::info!("Prediction: {:?} for {:?}", verdict, record.values());
                let tone = match verdict {
                    PredictionVerdict::Potable => StatusTone::Info,
                    PredictionVerdict::NotPotable => StatusTone::Warning,
                };
                self.set_status(report.message, tone);
                self.ui.outcome = Some(SubmissionOutcome::Verdict(report));
                self.ui.phase = SubmissionPhase::Predicted;
            }
            Err(err) => {
                tracing::error!("Prediction failed: {err}");
                self.set_status("Prediction failed", StatusTone::Error);
                self.ui.outcome = Some(SubmissionOutcome::Failed(
                    "Something went wrong while predicting. Please try again.".into(),
                ));
                self.ui.phase = SubmissionPhase::Idle;
            }
        }
    }

    /// Return to idle once a verdict has been shown.
    pub fn acknowledge_verdict(&mut self) {
        if self.ui.phase == SubmissionPhase::Predicted {
            self.ui.phase = SubmissionPhase::Idle;
        }
    }

    pub fn select_tab(&mut self, tab: ActiveTab) {
        self.ui.tab = tab;
    }

    /// Feature-importance bars in schema order.
    pub fn importance_rows(&self) -> &[ImportanceRow] {
        &self.importance_rows
    }

    pub fn set_status(&mut self, text: impl Into<String>, tone: StatusTone) {
        let (label, color) = status_badge(tone);
        self.ui.status.text = text.into();
        self.ui.status.badge_label = label;
        self.ui.status.badge_color = color;
    }
}
