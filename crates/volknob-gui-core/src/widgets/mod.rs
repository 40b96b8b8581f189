//! Knob and volume bar widgets.
//!
//! - [`Knob`] - Pointer-tracking rotary control, drawn or image face
//! - [`VolumeBar`] - Segmented level bar

mod knob;
mod volume_bar;

pub use knob::{Knob, KnobFace, indicator_point};
pub use volume_bar::{VolumeBar, segment_rects};
