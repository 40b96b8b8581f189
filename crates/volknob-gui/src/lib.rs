//! Volknob GUI - demo window for the knob and volume bar widgets
//!
//! Composes a [`Knob`](volknob_gui_core::Knob) and a
//! [`VolumeBar`](volknob_gui_core::VolumeBar) around one
//! [`SharedState`](volknob_core::SharedState): turning the knob queues a
//! rotation and a volume update, and the bar renders whatever volume the
//! state holds after the queue is drained.

pub mod app;

pub use app::VolknobApp;
