//! Pointer-tracking rotary knob.
//!
//! Unlike a drag-distance knob, this one follows the direction of the
//! pointer around its center:
//! - Press or drag anywhere on the knob to point it at the pointer
//! - A dead zone around 12 o'clock separates the minimum from the maximum
//! - Holding still or releasing does nothing; the knob stays where it was
//!   last pointed
//!
//! The drawn face puts its tick opposite the pointer, so the tick sweeps
//! the bottom of the dial and the dead zone shows there.
//!
//! The widget owns no rotation. It reads and writes through a
//! [`RotationBridge`] and reports the normalized value to an optional
//! `on_change` callback.

use crate::rotation_bridge::RotationBridge;
use crate::theme::Theme;
use egui::{
    Color32, ImageSource, Painter, Pos2, Rect, Response, Sense, Stroke, Ui, Vec2, Widget, pos2,
    vec2,
};
use volknob_core::{AngleMapper, PointerEvent, PointerPhase, PointerTracker};

const HALF_TURN: f32 = 180.0;

/// What the knob looks like.
pub enum KnobFace<'a> {
    /// Vector face: disc, ring and a position tick.
    Drawn,
    /// A dial image rotated about its center.
    Image(ImageSource<'a>),
}

/// Rotary knob parameters.
pub struct Knob<'a> {
    rotation: &'a dyn RotationBridge,
    tracker: PointerTracker,
    diameter: f32,
    face: KnobFace<'a>,
    on_change: Option<Box<dyn FnMut(f32) + 'a>>,
    face_color: Color32,
    ring_color: Color32,
    indicator_color: Color32,
}

impl<'a> Knob<'a> {
    /// Create a knob with the default mapper.
    pub fn new(rotation: &'a dyn RotationBridge) -> Self {
        let theme = Theme::default();
        Self {
            rotation,
            tracker: PointerTracker::new(AngleMapper::default()),
            diameter: 100.0,
            face: KnobFace::Drawn,
            on_change: None,
            face_color: theme.knob_face,
            ring_color: theme.knob_ring,
            indicator_color: theme.knob_indicator,
        }
    }

    /// Use a specific mapper (limiting angle).
    pub fn mapper(mut self, mapper: AngleMapper) -> Self {
        self.tracker = PointerTracker::new(mapper);
        self
    }

    /// Set knob diameter in points.
    pub fn diameter(mut self, diameter: f32) -> Self {
        self.diameter = diameter;
        self
    }

    /// Set the face.
    pub fn face(mut self, face: KnobFace<'a>) -> Self {
        self.face = face;
        self
    }

    /// Called with the normalized value whenever the pointer moves the knob.
    pub fn on_change(mut self, callback: impl FnMut(f32) + 'a) -> Self {
        self.on_change = Some(Box::new(callback));
        self
    }

    /// Take drawn-face colors from a theme.
    pub fn theme(mut self, theme: &Theme) -> Self {
        self.face_color = theme.knob_face;
        self.ring_color = theme.knob_ring;
        self.indicator_color = theme.knob_indicator;
        self
    }

    fn paint_drawn(&self, painter: &Painter, rect: Rect, rotation: f32) {
        let center = rect.center();
        let radius = rect.width().min(rect.height()) / 2.0;
        let ring = radius * 0.15;

        // Disc and ring
        painter.circle_filled(center, radius, self.face_color);
        painter.circle_stroke(
            center,
            radius - ring / 2.0,
            Stroke::new(ring, self.ring_color),
        );

        // Position tick with round caps
        let angle = tick_angle(rotation);
        let tick_width = radius * 0.1;
        let outer = indicator_point(center, radius - ring - tick_width, angle);
        let inner = indicator_point(center, radius - ring - tick_width - radius * 0.12, angle);
        painter.line_segment([inner, outer], Stroke::new(tick_width, self.indicator_color));
        painter.circle_filled(inner, tick_width / 2.0, self.indicator_color);
        painter.circle_filled(outer, tick_width / 2.0, self.indicator_color);
    }
}

impl Widget for Knob<'_> {
    fn ui(mut self, ui: &mut Ui) -> Response {
        let size = vec2(self.diameter, self.diameter);
        let (rect, mut response) = ui.allocate_exact_size(size, Sense::click_and_drag());
        self.tracker.layout(rect.width(), rect.height());

        if let Some(event) = pointer_event(ui, &response, rect) {
            let step = self.tracker.step(event, self.rotation.rotation());
            if let Some(percent) = step.percent {
                self.rotation.update_rotation(step.rotation);
                if let Some(on_change) = self.on_change.as_mut() {
                    on_change(percent);
                }
                response.mark_changed();
                // Queued writes land next frame.
                ui.ctx().request_repaint();
            }
        }

        if ui.is_rect_visible(rect) {
            let angle = self.rotation.rotation();
            match &self.face {
                KnobFace::Drawn => self.paint_drawn(ui.painter(), rect, angle),
                KnobFace::Image(source) => {
                    egui::Image::new(source.clone())
                        .rotate(angle.to_radians(), vec2(0.5, 0.5))
                        .paint_at(ui, rect);
                }
            }
        }

        response
    }
}

/// Translate this frame's egui pointer state into a core pointer event.
fn pointer_event(ui: &Ui, response: &Response, rect: Rect) -> Option<PointerEvent> {
    let (pressed, released, moved) = ui.input(|i| {
        (
            i.pointer.any_pressed(),
            i.pointer.any_released(),
            i.pointer.delta() != Vec2::ZERO,
        )
    });
    let phase = if response.is_pointer_button_down_on() {
        if pressed {
            PointerPhase::Down
        } else if moved {
            PointerPhase::Move
        } else {
            // Held still: no event.
            return None;
        }
    } else if released && (response.drag_stopped() || response.clicked()) {
        PointerPhase::Up
    } else {
        return None;
    };

    let pos = response
        .interact_pointer_pos()
        .or_else(|| ui.input(|i| i.pointer.interact_pos()))?;
    let local = pos - rect.min;
    Some(PointerEvent::new(phase, (local.x, local.y)))
}

/// Direction of the drawn tick: 6 o'clock turned clockwise by `rotation`.
fn tick_angle(rotation: f32) -> f32 {
    rotation + HALF_TURN
}

/// Point `distance` from `center`, `angle` degrees clockwise from 12 o'clock.
pub fn indicator_point(center: Pos2, distance: f32, angle: f32) -> Pos2 {
    let rad = angle.to_radians();
    pos2(center.x + distance * rad.sin(), center.y - distance * rad.cos())
}
