//! egui widgets for the volknob knob and volume bar.
//!
//! This crate draws what [`volknob_core`] computes. The knob forwards pointer
//! input to the core's [`PointerTracker`](volknob_core::PointerTracker) and
//! writes accepted rotations through a [`RotationBridge`]; the volume bar
//! renders a [`BarModel`](volknob_core::BarModel) at a given level.
//!
//! # Modules
//!
//! - [`rotation_bridge`] - Where the knob reads and writes its rotation
//! - [`theme`] - Colors and egui style application
//! - [`widgets`] - [`Knob`] and [`VolumeBar`]

pub mod rotation_bridge;
pub mod theme;
pub mod widgets;

pub use rotation_bridge::RotationBridge;
pub use theme::Theme;
pub use widgets::{Knob, KnobFace, VolumeBar};
