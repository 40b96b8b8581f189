//! Main application state and UI layout.

use egui::{Align, CentralPanel, Context, Frame, Layout, Margin, Stroke, Ui};
use volknob_config::WidgetConfig;
use volknob_core::{SharedState, Subscription};
use volknob_gui_core::{Knob, Theme, VolumeBar};

/// Border stroke width around the knob and bar group.
const BORDER_WIDTH: f32 = 1.0;

/// Corner radius of the border.
const BORDER_RADIUS: f32 = 10.0;

/// Padding between the border and the widgets.
const GROUP_PADDING: i8 = 30;

/// Main application state.
///
/// The [`SharedState`] lives exactly as long as the app. Dropping the app
/// abandons any update still queued behind it.
pub struct VolknobApp {
    state: SharedState,
    /// Render-side observer of the volume level.
    volume: Subscription<f32>,
    config: WidgetConfig,
    theme: Theme,
}

impl VolknobApp {
    /// Create the app inside an eframe window.
    pub fn new(cc: &eframe::CreationContext<'_>, config: WidgetConfig) -> Self {
        let app = Self::with_config(config);
        app.theme.apply(&cc.egui_ctx);
        app
    }

    /// Create the app without a window, for headless use.
    ///
    /// `config` must already be validated.
    pub fn with_config(config: WidgetConfig) -> Self {
        let state = SharedState::with_volume(&config.mapper(), config.initial_volume);
        let volume = state.subscribe_volume();
        tracing::info!(
            limiting_angle = config.limiting_angle,
            bar_count = config.bar_count,
            initial_volume = config.initial_volume,
            "widget config"
        );
        Self {
            state,
            volume,
            config,
            theme: Theme::default(),
        }
    }

    /// The shared state behind both widgets.
    pub fn state(&self) -> &SharedState {
        &self.state
    }

    /// Drain queued updates, then lay out one frame.
    pub fn ui(&mut self, ctx: &Context) {
        let applied = self.state.apply_pending();
        if applied > 0 {
            tracing::debug!(
                applied,
                rotation = self.state.rotation(),
                volume = self.state.volume(),
                "state updated"
            );
        }
        let volume = self.volume.latest();

        let panel_frame = Frame::new().fill(self.theme.background);
        CentralPanel::default().frame(panel_frame).show(ctx, |ui| {
            let group_height = self.config.knob_diameter + 2.0 * f32::from(GROUP_PADDING);
            let top = ((ui.available_height() - group_height) / 2.0).max(0.0);

            ui.with_layout(Layout::top_down(Align::Center), |ui| {
                ui.add_space(top);
                self.render_controls(ui, volume);
            });
        });
    }

    /// Render the bordered knob + bar row.
    fn render_controls(&self, ui: &mut Ui, volume: f32) {
        let group_frame = Frame::new()
            .stroke(Stroke::new(BORDER_WIDTH, self.theme.border))
            .corner_radius(BORDER_RADIUS)
            .inner_margin(Margin::same(GROUP_PADDING));

        group_frame.show(ui, |ui| {
            ui.horizontal(|ui| {
                let handle = self.state.handle();
                ui.add(
                    Knob::new(&self.state)
                        .mapper(self.config.mapper())
                        .diameter(self.config.knob_diameter)
                        .theme(&self.theme)
                        .on_change(move |percent| handle.update_volume(percent)),
                );
                ui.add_space(self.config.spacing);
                ui.add(
                    VolumeBar::new(self.config.bar_model(), volume)
                        .height(self.config.bar_height)
                        .theme(&self.theme),
                );
            });
        });
    }
}

impl eframe::App for VolknobApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.ui(ctx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::RawInput;

    #[test]
    fn test_initial_state_follows_config() {
        let config = WidgetConfig {
            limiting_angle: 40.0,
            ..WidgetConfig::default()
        };
        let app = VolknobApp::with_config(config);
        assert_eq!(app.state().rotation(), 40.0);
        assert_eq!(app.state().volume(), 0.0);
    }

    #[test]
    fn test_initial_volume_points_knob() {
        let config = WidgetConfig {
            initial_volume: 1.0,
            ..WidgetConfig::default()
        };
        let mut app = VolknobApp::with_config(config);
        assert_eq!(app.state().volume(), 1.0);
        assert!((app.state().rotation() - 335.0).abs() < 1e-4);
        assert_eq!(app.volume.latest(), 1.0);
    }

    #[test]
    fn test_frame_applies_queued_updates() {
        let mut app = VolknobApp::with_config(WidgetConfig::default());
        let handle = app.state().handle();
        handle.update_rotation(180.0);
        handle.update_volume(0.5);

        let ctx = Context::default();
        let _ = ctx.run(RawInput::default(), |ctx| app.ui(ctx));

        assert_eq!(app.state().rotation(), 180.0);
        assert_eq!(app.state().volume(), 0.5);
        assert_eq!(app.volume.latest(), 0.5);
    }
}
