//! Pointer-event control flow for the knob, decoupled from any UI host.
//!
//! [`PointerTracker::step`] is a pure function of `(event, current rotation)`
//! returning the next rotation and, when the event was accepted, the value to
//! report to the knob's owner. Hosts translate their own input events into
//! [`PointerEvent`]s and call [`PointerTracker::layout`] whenever the knob's
//! size changes.

use crate::geometry::Point;
use crate::mapper::AngleMapper;

/// Phase of a pointer interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerPhase {
    /// Pointer pressed on the knob.
    Down,
    /// Pointer moved while pressed.
    Move,
    /// Pointer released.
    Up,
    /// Interaction aborted by the host (focus loss, gesture stolen, ...).
    Cancel,
}

impl PointerPhase {
    /// Whether this phase can rotate the knob.
    #[inline]
    pub fn tracks(self) -> bool {
        matches!(self, Self::Down | Self::Move)
    }
}

/// A pointer event in the knob's local coordinate space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    /// Interaction phase.
    pub phase: PointerPhase,
    /// Pointer position relative to the knob's top-left corner.
    pub position: Point,
}

impl PointerEvent {
    /// Create an event.
    pub fn new(phase: PointerPhase, position: impl Into<Point>) -> Self {
        Self {
            phase,
            position: position.into(),
        }
    }

    /// Pointer-down at `(x, y)`.
    pub fn down(x: f32, y: f32) -> Self {
        Self::new(PointerPhase::Down, (x, y))
    }

    /// Pointer-move at `(x, y)`.
    pub fn moved(x: f32, y: f32) -> Self {
        Self::new(PointerPhase::Move, (x, y))
    }

    /// Pointer-up at `(x, y)`.
    pub fn up(x: f32, y: f32) -> Self {
        Self::new(PointerPhase::Up, (x, y))
    }
}

/// Result of feeding one pointer event to the tracker.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KnobStep {
    /// Rotation after the event, in degrees.
    pub rotation: f32,
    /// Normalized value to report, `None` if the event changed nothing.
    pub percent: Option<f32>,
}

impl KnobStep {
    fn unchanged(rotation: f32) -> Self {
        Self {
            rotation,
            percent: None,
        }
    }

    /// Whether the event was accepted.
    #[inline]
    pub fn changed(&self) -> bool {
        self.percent.is_some()
    }
}

/// Turns pointer events into knob steps.
///
/// Holds the mapper and the knob center cached from the last layout pass.
/// Until the first layout the center is the local origin.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointerTracker {
    mapper: AngleMapper,
    center: Point,
}

impl PointerTracker {
    /// Create a tracker around `mapper`.
    pub fn new(mapper: AngleMapper) -> Self {
        Self {
            mapper,
            center: Point::ZERO,
        }
    }

    /// Cache the knob center for a knob of the given local size.
    pub fn layout(&mut self, width: f32, height: f32) {
        self.center = Point::new(width / 2.0, height / 2.0);
    }

    /// Cached knob center in local coordinates.
    #[inline]
    pub fn center(&self) -> Point {
        self.center
    }

    /// The underlying mapper.
    #[inline]
    pub fn mapper(&self) -> &AngleMapper {
        &self.mapper
    }

    /// Compute the knob state after `event`.
    ///
    /// Down and Move events are mapped; a reading outside the dead zone
    /// replaces the rotation. Up, Cancel, dead-zone and degenerate input keep
    /// `current_rotation` and report nothing.
    pub fn step(&self, event: PointerEvent, current_rotation: f32) -> KnobStep {
        if !event.phase.tracks() {
            return KnobStep::unchanged(current_rotation);
        }
        match self.mapper.map_pointer(event.position, self.center) {
            Some(reading) => KnobStep {
                rotation: reading.angle,
                percent: Some(reading.percent),
            },
            None => KnobStep::unchanged(current_rotation),
        }
    }
}
