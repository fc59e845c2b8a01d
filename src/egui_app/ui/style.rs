use eframe::egui::{
    Color32, Stroke, Visuals,
    epaint::{CornerRadius, Shadow},
    style::WidgetVisuals,
};

#[derive(Clone, Copy)]
pub struct Palette {
    pub bg_primary: Color32,
    pub bg_secondary: Color32,
    pub bg_tertiary: Color32,
    pub panel_outline: Color32,
    pub grid_soft: Color32,
    pub text_primary: Color32,
    pub text_muted: Color32,
    pub accent_water: Color32,
    pub bar_fill: Color32,
    pub warning: Color32,
    pub success: Color32,
    pub success_fill: Color32,
    pub error_fill: Color32,
}

pub fn palette(dark: bool) -> Palette {
    if dark {
        Palette {
            bg_primary: Color32::from_rgb(10, 14, 20),
            bg_secondary: Color32::from_rgb(22, 28, 36),
            bg_tertiary: Color32::from_rgb(38, 46, 58),
            panel_outline: Color32::from_rgb(48, 58, 72),
            grid_soft: Color32::from_rgb(30, 36, 46),
            text_primary: Color32::from_rgb(205, 214, 224),
            text_muted: Color32::from_rgb(140, 150, 162),
            accent_water: Color32::from_rgb(0, 114, 198),
            bar_fill: Color32::from_rgb(96, 160, 220),
            warning: Color32::from_rgb(220, 110, 96),
            success: Color32::from_rgb(112, 196, 146),
            success_fill: Color32::from_rgb(24, 60, 40),
            error_fill: Color32::from_rgb(72, 28, 28),
        }
    } else {
        Palette {
            bg_primary: Color32::from_rgb(255, 255, 255),
            bg_secondary: Color32::from_rgb(240, 246, 252),
            bg_tertiary: Color32::from_rgb(222, 232, 244),
            panel_outline: Color32::from_rgb(190, 206, 226),
            grid_soft: Color32::from_rgb(230, 238, 248),
            text_primary: Color32::from_rgb(28, 36, 48),
            text_muted: Color32::from_rgb(96, 108, 122),
            accent_water: Color32::from_rgb(0, 114, 198),
            bar_fill: Color32::from_rgb(8, 48, 107),
            warning: Color32::from_rgb(176, 48, 40),
            success: Color32::from_rgb(24, 112, 64),
            success_fill: Color32::from_rgb(220, 242, 228),
            error_fill: Color32::from_rgb(252, 226, 224),
        }
    }
}

pub fn apply_visuals(visuals: &mut Visuals, palette: Palette) {
    visuals.window_fill = palette.bg_primary;
    visuals.panel_fill = palette.bg_secondary;
    visuals.override_text_color = Some(palette.text_primary);
    visuals.hyperlink_color = palette.accent_water;
    visuals.extreme_bg_color = palette.bg_primary;
    visuals.faint_bg_color = palette.grid_soft;
    visuals.error_fg_color = palette.warning;
    visuals.warn_fg_color = palette.warning;
    visuals.selection.bg_fill = palette.bg_tertiary;
    visuals.selection.stroke = Stroke::new(1.0, palette.accent_water);
    visuals.widgets.noninteractive.bg_fill = palette.bg_secondary;
    visuals.widgets.noninteractive.fg_stroke = Stroke::new(1.0, palette.text_primary);
    set_rounded(&mut visuals.widgets.inactive, palette);
    set_rounded(&mut visuals.widgets.hovered, palette);
    set_rounded(&mut visuals.widgets.active, palette);
    set_rounded(&mut visuals.widgets.open, palette);
    visuals.window_corner_radius = CornerRadius::same(8);
    visuals.menu_corner_radius = CornerRadius::same(8);
    visuals.popup_shadow = Shadow::NONE;
    visuals.button_frame = true;
}

fn set_rounded(vis: &mut WidgetVisuals, palette: Palette) {
    vis.corner_radius = CornerRadius::same(8);
    vis.bg_fill = palette.bg_primary;
    vis.weak_bg_fill = palette.bg_tertiary;
    vis.bg_stroke = Stroke::new(1.0, palette.accent_water);
    vis.fg_stroke = Stroke::new(1.0, palette.text_primary);
}

pub fn section_stroke(palette: Palette) -> Stroke {
    Stroke::new(1.0, palette.panel_outline)
}

/// Fill for the primary action button.
pub fn primary_button_fill(palette: Palette) -> Color32 {
    palette.accent_water
}
