//! egui renderer for the application UI.

mod chrome;
mod importance_tab;
mod prediction_tab;
pub mod style;

use crate::config::InterfaceSettings;
use crate::egui_app::controller::PredictionController;
use crate::egui_app::state::ActiveTab;
use eframe::egui::{self, Frame, Margin};

/// Smallest window that still fits the three-column form.
pub const MIN_VIEWPORT_SIZE: egui::Vec2 = egui::vec2(720.0, 560.0);

/// Renders the egui UI using the shared controller state.
pub struct EguiApp {
    controller: PredictionController,
    dark_mode: bool,
    visuals_set: bool,
}

impl EguiApp {
    pub fn new(mut controller: PredictionController, interface: &InterfaceSettings) -> Self {
        controller.ui.show_field_help = interface.show_field_help;
        Self {
            controller,
            dark_mode: interface.dark_mode,
            visuals_set: false,
        }
    }

    fn palette(&self) -> style::Palette {
        style::palette(self.dark_mode)
    }

    fn apply_visuals(&mut self, ctx: &egui::Context) {
        if self.visuals_set {
            return;
        }
        let mut visuals = if self.dark_mode {
            egui::Visuals::dark()
        } else {
            egui::Visuals::light()
        };
        style::apply_visuals(&mut visuals, self.palette());
        ctx.set_visuals(visuals);
        self.visuals_set = true;
    }
}

impl eframe::App for EguiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.apply_visuals(ctx);
        self.render_top_bar(ctx);
        self.render_status(ctx);
        let palette = self.palette();
        egui::CentralPanel::default()
            .frame(
                Frame::new()
                    .fill(palette.bg_secondary)
                    .inner_margin(Margin::symmetric(24, 16)),
            )
            .show(ctx, |ui| {
                egui::ScrollArea::vertical()
                    .auto_shrink([false, false])
                    .show(ui, |ui| match self.controller.ui.tab {
                        ActiveTab::Prediction => self.render_prediction_tab(ui),
                        ActiveTab::ExtraInformation => self.render_importance_tab(ui),
                    });
            });
    }
}
