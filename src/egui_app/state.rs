//! Shared state types for the egui UI.

use egui::Color32;

use crate::gateway::VerdictReport;
use crate::record::InvalidInput;
use crate::schema::{FIELD_COUNT, FIELDS};

/// Top-level UI model consumed by the egui renderer.
#[derive(Clone, Debug)]
pub struct UiState {
    pub tab: ActiveTab,
    pub form: FormState,
    pub phase: SubmissionPhase,
    /// Result of the most recent submission, if any.
    pub outcome: Option<SubmissionOutcome>,
    pub status: StatusBarState,
    pub show_field_help: bool,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            tab: ActiveTab::Prediction,
            form: FormState::default(),
            phase: SubmissionPhase::Idle,
            outcome: None,
            status: StatusBarState::idle(),
            show_field_help: true,
        }
    }
}

/// Tabs along the top of the window.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActiveTab {
    Prediction,
    ExtraInformation,
}

impl ActiveTab {
    pub const ALL: [ActiveTab; 2] = [ActiveTab::Prediction, ActiveTab::ExtraInformation];

    pub fn label(self) -> &'static str {
        match self {
            ActiveTab::Prediction => "Prediction",
            ActiveTab::ExtraInformation => "Extra information",
        }
    }
}

/// Text buffers for the nine form fields, in schema order.
#[derive(Clone, Debug, PartialEq)]
pub struct FormState {
    pub fields: [String; FIELD_COUNT],
}

impl Default for FormState {
    fn default() -> Self {
        Self {
            fields: FIELDS.map(|spec| spec.default.to_string()),
        }
    }
}

impl FormState {
    /// `(column, text)` pairs ready for validation.
    pub fn entries(&self) -> impl Iterator<Item = (&'static str, &str)> + '_ {
        FIELDS
            .iter()
            .zip(self.fields.iter())
            .map(|(spec, text)| (spec.name, text.as_str()))
    }
}

/// Where the current submission stands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmissionPhase {
    /// Waiting for the user to submit.
    Idle,
    /// A record has been built and handed to the model.
    Submitted,
    /// A verdict is available for display.
    Predicted,
}

/// What the last submission produced.
#[derive(Clone, Debug, PartialEq)]
pub enum SubmissionOutcome {
    Verdict(VerdictReport),
    Rejected(InvalidInput),
    /// Inference failed; the message is safe to show to the user.
    Failed(String),
}

/// Status badge + text shown in the footer.
#[derive(Clone, Debug, PartialEq)]
pub struct StatusBarState {
    /// Main status message text.
    pub text: String,
    /// Badge label shown next to the status.
    pub badge_label: String,
    /// Badge color.
    pub badge_color: Color32,
}

impl StatusBarState {
    /// Default status shown before the first submission.
    pub fn idle() -> Self {
        let (badge_label, badge_color) = status_badge(StatusTone::Idle);
        Self {
            text: "Enter the water characteristics and press Predict".into(),
            badge_label,
            badge_color,
        }
    }
}

/// Severity of a status message.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusTone {
    Idle,
    Info,
    Warning,
    Error,
}

pub(crate) fn status_badge(tone: StatusTone) -> (String, Color32) {
    match tone {
        StatusTone::Idle => ("Idle".into(), Color32::from_rgb(120, 128, 140)),
        StatusTone::Info => ("Info".into(), Color32::from_rgb(64, 140, 112)),
        StatusTone::Warning => ("Warning".into(), Color32::from_rgb(204, 142, 32)),
        StatusTone::Error => ("Error".into(), Color32::from_rgb(196, 64, 64)),
    }
}
