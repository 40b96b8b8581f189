//! Segmented volume bar.

use crate::theme::Theme;
use egui::{Color32, Rect, Response, Sense, Ui, Widget, pos2, vec2};
use volknob_core::{BarModel, SEGMENT_CORNER_RADIUS};

/// Horizontal bar of discrete segments lit up to the current volume.
pub struct VolumeBar {
    model: BarModel,
    volume: f32,
    width: Option<f32>,
    height: f32,
    active_color: Color32,
    inactive_color: Color32,
}

impl VolumeBar {
    /// Create a bar showing `volume` (0.0 to 1.0).
    pub fn new(model: BarModel, volume: f32) -> Self {
        let theme = Theme::default();
        Self {
            model,
            volume,
            width: None,
            height: 30.0,
            active_color: theme.bar_active,
            inactive_color: theme.bar_inactive,
        }
    }

    /// Fixed width. Without it the bar fills the available width.
    pub fn width(mut self, width: f32) -> Self {
        self.width = Some(width);
        self
    }

    /// Bar height in points.
    pub fn height(mut self, height: f32) -> Self {
        self.height = height;
        self
    }

    /// Take segment colors from a theme.
    pub fn theme(mut self, theme: &Theme) -> Self {
        self.active_color = theme.bar_active;
        self.inactive_color = theme.bar_inactive;
        self
    }
}

impl Widget for VolumeBar {
    fn ui(self, ui: &mut Ui) -> Response {
        let width = self.width.unwrap_or_else(|| ui.available_width());
        let (rect, response) = ui.allocate_exact_size(vec2(width, self.height), Sense::hover());

        if ui.is_rect_visible(rect) {
            let painter = ui.painter();
            for (segment, active) in segment_rects(&self.model, rect, self.volume) {
                let color = if active {
                    self.active_color
                } else {
                    self.inactive_color
                };
                painter.rect_filled(segment, SEGMENT_CORNER_RADIUS, color);
            }
        }

        response
    }
}

/// Screen rectangles of every segment in `rect`, paired with their active flag.
pub fn segment_rects(model: &BarModel, rect: Rect, volume: f32) -> Vec<(Rect, bool)> {
    model
        .segments(rect.width(), volume)
        .map(|s| {
            let min = pos2(rect.left() + s.left, rect.top());
            (
                Rect::from_min_size(min, vec2(s.width, rect.height())),
                s.active,
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_segment_rects_fill_height() {
        let rect = Rect::from_min_size(pos2(10.0, 20.0), vec2(400.0, 30.0));
        let rects = segment_rects(&BarModel::new(20), rect, 0.5);
        assert_eq!(rects.len(), 20);

        let (first, active) = rects[0];
        assert!(active);
        assert_eq!(first.min, pos2(15.0, 20.0));
        assert_eq!(first.size(), vec2(10.0, 30.0));

        assert_eq!(rects.iter().filter(|(_, a)| *a).count(), 11);
        assert!(rects[10].1);
        assert!(!rects[11].1);
    }

    #[test]
    fn test_segments_stay_inside_bar() {
        let rect = Rect::from_min_size(pos2(0.0, 0.0), vec2(237.0, 12.0));
        for (segment, _) in segment_rects(&BarModel::new(7), rect, 1.0) {
            assert!(rect.contains_rect(segment), "{segment:?} outside {rect:?}");
        }
    }
}
