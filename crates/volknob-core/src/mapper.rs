//! Pointer-to-value mapping for the rotary knob.
//!
//! The knob is driven by the direction from its center to the pointer, not by
//! drag distance. The direction is measured clockwise from 12 o'clock in
//! screen space (y grows downward), giving a raw angle in `[-180°, 180°]`:
//!
//! ```text
//!                 0°
//!           -L  ┌───┐  +L        dead zone [-L, L]
//!              ╲│   │╱
//!   -90° ───────( • )─────── 90°
//!               │   │
//!              ±180°
//! ```
//!
//! Angles inside the dead zone `[-L, L]` (L = limiting angle) are ignored.
//! Negative angles past the dead zone are wrapped to `360° + raw`, so the usable
//! arc becomes one increasing scale from `L` (just clockwise of the dead zone)
//! to `360° - L` (just counter-clockwise of it). The percentage is the
//! position on that scale:
//!
//! ```text
//! percent = (angle - L) / (360 - 2L)
//! ```

use crate::geometry::Point;
use libm::atan2f;

/// Default half-width of the dead zone, in degrees.
pub const DEFAULT_LIMITING_ANGLE: f32 = 25.0;

/// Degrees in a full turn.
pub const FULL_TURN: f32 = 360.0;

const HALF_TURN: f32 = 180.0;

/// An accepted mapper output.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KnobReading {
    /// Knob rotation in degrees, within `[L, 360 - L]`.
    pub angle: f32,
    /// Normalized position on the usable arc, within `[0, 1]`.
    pub percent: f32,
}

/// Maps pointer positions to knob rotation and a normalized value.
///
/// Stateless apart from the configured limiting angle; every call is a pure
/// function of its inputs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AngleMapper {
    limiting_angle: f32,
}

impl Default for AngleMapper {
    fn default() -> Self {
        Self::new(DEFAULT_LIMITING_ANGLE)
    }
}

impl AngleMapper {
    /// Create a mapper with the given dead-zone half-width in degrees.
    ///
    /// `limiting_angle` must lie in `[0, 180)`. Values outside that range are
    /// a programming error; configuration read at runtime is validated before
    /// it reaches this constructor.
    pub fn new(limiting_angle: f32) -> Self {
        debug_assert!(
            (0.0..HALF_TURN).contains(&limiting_angle),
            "limiting angle must be in [0, 180), got {limiting_angle}"
        );
        Self { limiting_angle }
    }

    /// Dead-zone half-width in degrees.
    #[inline]
    pub fn limiting_angle(&self) -> f32 {
        self.limiting_angle
    }

    /// Rotation of a knob that has not been touched yet.
    ///
    /// This is the low end of the usable arc, i.e. `percent == 0`.
    #[inline]
    pub fn rest_angle(&self) -> f32 {
        self.limiting_angle
    }

    /// Width of the usable arc in degrees (`360 - 2L`).
    #[inline]
    pub fn usable_arc(&self) -> f32 {
        FULL_TURN - 2.0 * self.limiting_angle
    }

    /// Direction from `center` to `pointer` in degrees, clockwise from 12 o'clock.
    ///
    /// Returns `None` when the pointer sits exactly on the center (no
    /// direction exists) or when either point is not finite.
    pub fn raw_angle(pointer: Point, center: Point) -> Option<f32> {
        if !pointer.is_finite() || !center.is_finite() {
            return None;
        }
        let dx = center.x - pointer.x;
        let dy = center.y - pointer.y;
        if dx == 0.0 && dy == 0.0 {
            return None;
        }
        Some(-atan2f(dx, dy).to_degrees())
    }

    /// Whether a raw angle falls inside the dead zone `[-L, L]`.
    #[inline]
    pub fn in_dead_zone(&self, raw: f32) -> bool {
        (-self.limiting_angle..=self.limiting_angle).contains(&raw)
    }

    /// Map a raw angle (as produced by [`raw_angle`](Self::raw_angle)).
    ///
    /// Returns `None` for angles in the dead zone and for non-finite input.
    pub fn map_raw_angle(&self, raw: f32) -> Option<KnobReading> {
        if !raw.is_finite() || self.in_dead_zone(raw) {
            return None;
        }
        let angle = if raw < -self.limiting_angle {
            FULL_TURN + raw
        } else {
            raw
        };
        Some(KnobReading {
            angle,
            percent: self.percent_for_angle(angle),
        })
    }

    /// Map a pointer position relative to the knob center.
    pub fn map_pointer(&self, pointer: Point, center: Point) -> Option<KnobReading> {
        Self::raw_angle(pointer, center).and_then(|raw| self.map_raw_angle(raw))
    }

    /// Position of a wrapped angle on the usable arc.
    ///
    /// Clamped to `[0, 1]` so rounding at the arc ends never leaks outside.
    #[inline]
    pub fn percent_for_angle(&self, angle: f32) -> f32 {
        ((angle - self.limiting_angle) / self.usable_arc()).clamp(0.0, 1.0)
    }

    /// Inverse of [`percent_for_angle`](Self::percent_for_angle).
    ///
    /// Used to point the knob at a value that was set from elsewhere.
    #[inline]
    pub fn angle_for_percent(&self, percent: f32) -> f32 {
        self.limiting_angle + percent.clamp(0.0, 1.0) * self.usable_arc()
    }
}
