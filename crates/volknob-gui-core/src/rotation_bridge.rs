//! Rotation storage seen from the knob widget.
//!
//! [`RotationBridge`] decouples the knob from where its rotation lives. Two
//! implementations ship with the crate:
//!
//! ```text
//! Knob ──► RotationBridge::update_rotation(angle)
//!                   │
//!          ┌────────┴────────┐
//!          │ SharedState     │  queued, applied at frame start
//!          │ Cell<f32>       │  immediate, widget-local
//!          └────────┬────────┘
//!                   │
//! render ◄── RotationBridge::rotation()
//! ```

use std::cell::Cell;
use volknob_core::SharedState;

/// Read and write access to a knob rotation in degrees.
pub trait RotationBridge {
    /// Rotation to render.
    fn rotation(&self) -> f32;

    /// Store a new rotation produced by the angle mapper.
    ///
    /// Implementations may defer the write; [`rotation`](Self::rotation)
    /// is only required to reflect it once pending updates are applied.
    fn update_rotation(&self, angle: f32);
}

impl RotationBridge for SharedState {
    fn rotation(&self) -> f32 {
        SharedState::rotation(self)
    }

    fn update_rotation(&self, angle: f32) {
        SharedState::update_rotation(self, angle);
    }
}

/// Widget-local rotation with no shared holder behind it.
impl RotationBridge for Cell<f32> {
    fn rotation(&self) -> f32 {
        self.get()
    }

    fn update_rotation(&self, angle: f32) {
        self.set(angle);
    }
}
