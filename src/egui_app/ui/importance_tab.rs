use super::*;
use eframe::egui::{Align2, FontId, Pos2, Rect, RichText, Stroke};

const ROW_HEIGHT: f32 = 28.0;
const BAR_HEIGHT: f32 = 18.0;
const LABEL_WIDTH: f32 = 140.0;
const VALUE_WIDTH: f32 = 64.0;
const TITLE_HEIGHT: f32 = 32.0;

impl EguiApp {
    pub(super) fn render_importance_tab(&mut self, ui: &mut egui::Ui) {
        let palette = self.palette();
        ui.heading(RichText::new("Feature Importance").color(palette.accent_water));
        ui.label(
            RichText::new("How much each measurement influences the model's predictions.")
                .color(palette.text_muted),
        );
        ui.add_space(12.0);

        let rows = self.controller.importance_rows();
        let width = ui.available_width().max(LABEL_WIDTH + VALUE_WIDTH + 120.0);
        let height = TITLE_HEIGHT + rows.len() as f32 * ROW_HEIGHT + 8.0;
        let (rect, _) = ui.allocate_exact_size(egui::vec2(width, height), egui::Sense::hover());
        let painter = ui.painter_at(rect);
        painter.rect_filled(rect, 6.0, palette.bg_primary);
        painter.text(
            Pos2::new(rect.center().x, rect.top() + TITLE_HEIGHT / 2.0),
            Align2::CENTER_CENTER,
            "Feature Importance",
            FontId::proportional(15.0),
            palette.text_primary,
        );

        let bar_left = rect.left() + LABEL_WIDTH;
        let bar_span = (rect.right() - VALUE_WIDTH - bar_left).max(1.0);
        let chart_top = rect.top() + TITLE_HEIGHT;
        painter.line_segment(
            [
                Pos2::new(bar_left, chart_top),
                Pos2::new(bar_left, chart_top + rows.len() as f32 * ROW_HEIGHT),
            ],
            Stroke::new(1.0, palette.panel_outline),
        );
        for (index, row) in rows.iter().enumerate() {
            let center_y = chart_top + index as f32 * ROW_HEIGHT + ROW_HEIGHT / 2.0;
            painter.text(
                Pos2::new(bar_left - 8.0, center_y),
                Align2::RIGHT_CENTER,
                row.label,
                FontId::proportional(13.0),
                palette.text_primary,
            );
            let bar_rect = Rect::from_min_size(
                Pos2::new(bar_left, center_y - BAR_HEIGHT / 2.0),
                egui::vec2(bar_span * row.fraction, BAR_HEIGHT),
            );
            painter.rect_filled(bar_rect, 0.0, palette.bar_fill);
            painter.text(
                Pos2::new(bar_rect.right() + 6.0, center_y),
                Align2::LEFT_CENTER,
                format!("{:.3}", row.value),
                FontId::monospace(12.0),
                palette.text_muted,
            );
        }
    }
}
