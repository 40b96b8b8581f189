//! Visual styling for volknob widgets.

use egui::{Color32, CornerRadius, Stroke, Style, Visuals};

/// Theme colors for the widgets and the demo window.
pub struct Theme {
    /// Main window background color.
    pub background: Color32,
    /// Panel background color.
    pub panel_bg: Color32,
    /// Border around the knob and bar group.
    pub border: Color32,
    /// Lit volume bar segments.
    pub bar_active: Color32,
    /// Unlit volume bar segments.
    pub bar_inactive: Color32,
    /// Knob disc fill.
    pub knob_face: Color32,
    /// Ring around the knob disc.
    pub knob_ring: Color32,
    /// Knob position tick.
    pub knob_indicator: Color32,
    /// Primary text color.
    pub text_primary: Color32,
    /// Secondary/muted text color.
    pub text_secondary: Color32,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            background: Color32::from_rgb(16, 16, 16),
            panel_bg: Color32::from_rgb(16, 16, 16),
            border: Color32::GREEN,
            bar_active: Color32::GREEN,
            bar_inactive: Color32::DARK_GRAY,
            knob_face: Color32::LIGHT_GRAY,
            knob_ring: Color32::GRAY,
            knob_indicator: Color32::DARK_GRAY,
            text_primary: Color32::from_rgb(230, 230, 235),
            text_secondary: Color32::from_rgb(150, 150, 160),
        }
    }
}

impl Theme {
    /// Apply the theme to an egui context.
    pub fn apply(&self, ctx: &egui::Context) {
        let mut style = Style::default();

        let mut visuals = Visuals::dark();

        visuals.window_fill = self.panel_bg;
        visuals.panel_fill = self.background;
        visuals.extreme_bg_color = self.background;

        visuals.widgets.noninteractive.bg_fill = self.panel_bg;
        visuals.widgets.noninteractive.fg_stroke = Stroke::new(1.0, self.text_secondary);
        visuals.widgets.noninteractive.corner_radius = CornerRadius::same(4);

        visuals.widgets.hovered.fg_stroke = Stroke::new(1.5, self.border);
        visuals.widgets.active.fg_stroke = Stroke::new(2.0, self.border);

        visuals.override_text_color = Some(self.text_primary);

        style.visuals = visuals;
        style.spacing.item_spacing = egui::vec2(8.0, 6.0);

        ctx.set_style(style);
    }
}
