use super::style;
use super::*;
use crate::egui_app::state::SubmissionOutcome;
use crate::egui_app::view_model;
use crate::gateway::{PredictionVerdict, VerdictReport};
use crate::schema::FIELDS;
use eframe::egui::{Color32, RichText};

const FORM_COLUMNS: usize = 3;
const FIELD_WIDTH: f32 = 180.0;

impl EguiApp {
    pub(super) fn render_prediction_tab(&mut self, ui: &mut egui::Ui) {
        let palette = self.palette();
        ui.heading(
            RichText::new("Water Potability Prediction")
                .size(26.0)
                .color(palette.accent_water),
        );
        ui.add_space(6.0);
        ui.horizontal_wrapped(|ui| {
            ui.spacing_mut().item_spacing.x = 0.0;
            ui.label("This app uses a Machine Learning model to predict if water is ");
            ui.label(RichText::new("potable").strong());
            ui.label(" or ");
            ui.label(RichText::new("not potable").strong());
            ui.label(".");
        });
        ui.label("Please enter the water characteristics:");
        ui.add_space(12.0);

        let submit_requested = self.render_form(ui);
        ui.add_space(10.0);
        let submit_clicked = ui
            .horizontal(|ui| {
                let predict = egui::Button::new(
                    RichText::new("Predict").strong().color(Color32::WHITE),
                )
                .fill(style::primary_button_fill(palette))
                .min_size(egui::vec2(120.0, 32.0));
                let clicked = ui.add(predict).clicked();
                if ui.button("Reset").clicked() {
                    self.controller.reset_form();
                }
                clicked
            })
            .inner;
        if submit_clicked || submit_requested {
            self.controller.submit();
        }

        let Some(outcome) = self.controller.ui.outcome.clone() else {
            return;
        };
        ui.add_space(12.0);
        ui.separator();
        match outcome {
            SubmissionOutcome::Verdict(report) => {
                self.render_verdict(ui, &report);
                self.controller.acknowledge_verdict();
            }
            SubmissionOutcome::Rejected(err) => {
                banner(ui, palette.error_fill, palette.warning, &err.to_string());
            }
            SubmissionOutcome::Failed(message) => {
                banner(ui, palette.error_fill, palette.warning, &message);
            }
        }
    }

    /// Draw the nine inputs; returns true when Enter was pressed in a field.
    fn render_form(&mut self, ui: &mut egui::Ui) -> bool {
        let palette = self.palette();
        let show_help = self.controller.ui.show_field_help;
        let rows = FIELDS.len().div_ceil(FORM_COLUMNS);
        let mut submit_requested = false;
        ui.columns(FORM_COLUMNS, |columns| {
            for (col, column_ui) in columns.iter_mut().enumerate() {
                for row in 0..rows {
                    let index = col * rows + row;
                    let Some(spec) = FIELDS.get(index) else {
                        continue;
                    };
                    let label = column_ui.label(RichText::new(spec.label).strong());
                    if show_help {
                        label.on_hover_text(spec.help);
                    }
                    let mut text = self.controller.ui.form.fields[index].clone();
                    let response = column_ui.add(
                        egui::TextEdit::singleline(&mut text)
                            .desired_width(FIELD_WIDTH)
                            .hint_text(view_model::format_value(spec.default)),
                    );
                    let response = if show_help {
                        response.on_hover_text(spec.help)
                    } else {
                        response
                    };
                    if response.changed() {
                        self.controller.set_field(index, text);
                    }
                    if response.lost_focus() && column_ui.input(|i| i.key_pressed(egui::Key::Enter))
                    {
                        submit_requested = true;
                    }
                    if let Some(issue) = self.controller.field_issue(index) {
                        column_ui.label(
                            RichText::new(issue.to_string())
                                .small()
                                .color(palette.warning),
                        );
                    }
                    column_ui.add_space(8.0);
                }
            }
        });
        submit_requested
    }

    fn render_verdict(&self, ui: &mut egui::Ui, report: &VerdictReport) {
        let palette = self.palette();
        let (fill, text_color) = match report.verdict {
            PredictionVerdict::Potable => (palette.success_fill, palette.success),
            PredictionVerdict::NotPotable => (palette.error_fill, palette.warning),
        };
        banner(ui, fill, text_color, report.message);
        ui.separator();
        ui.label(RichText::new("Input values:").strong());
        ui.add_space(4.0);
        egui::Grid::new("echo_table")
            .striped(true)
            .num_columns(2)
            .min_col_width(140.0)
            .show(ui, |ui| {
                ui.label(RichText::new("Measurement").color(palette.text_muted));
                ui.label(RichText::new("Value").color(palette.text_muted));
                ui.end_row();
                for row in &report.echo {
                    ui.label(&row.field);
                    ui.label(view_model::format_value(row.value));
                    ui.end_row();
                }
            });
    }
}

fn banner(ui: &mut egui::Ui, fill: Color32, text_color: Color32, message: &str) {
    Frame::new()
        .fill(fill)
        .corner_radius(6.0)
        .inner_margin(Margin::symmetric(12, 10))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(RichText::new(message).size(16.0).strong().color(text_color));
        });
}
