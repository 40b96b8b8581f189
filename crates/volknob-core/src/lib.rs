//! Volknob Core - host-independent logic for the knob and volume bar widgets
//!
//! This crate holds everything in volknob that is real computation rather than
//! drawing: turning a pointer position into a knob rotation and a normalized
//! value, deciding which volume bar segments light up, and the observable
//! state cell both widgets render from.
//!
//! # Core Abstractions
//!
//! ## Angle Mapping
//!
//! - [`AngleMapper`] - Pointer position to `(rotation, percent)` with a dead zone
//! - [`KnobReading`] - One accepted mapper output
//!
//! ## Pointer Tracking
//!
//! - [`PointerTracker`] - Caches the knob center and filters pointer phases
//! - [`PointerEvent`] / [`PointerPhase`] - Host-neutral pointer input
//!
//! ## Volume Bar
//!
//! - [`BarModel`] - Active segment count and segment geometry
//!
//! ## Shared State (`std` only)
//!
//! - [`SharedState`] - Rotation and volume observables behind an ordered update queue
//! - [`Observable`] - Latest-value cell with seeded subscriptions
//!
//! # no_std Support
//!
//! Mapping, tracking and bar geometry are `no_std` compatible. The shared
//! state holder needs thread-safe channels and is gated on the default
//! `std` feature:
//!
//! ```toml
//! [dependencies]
//! volknob-core = { version = "0.1", default-features = false }
//! ```
//!
//! # Example
//!
//! ```rust
//! use volknob_core::{AngleMapper, Point};
//!
//! let mapper = AngleMapper::default();
//! let center = Point::new(50.0, 50.0);
//!
//! // Pointer straight to the right of the center: a quarter turn clockwise.
//! let reading = mapper.map_pointer(Point::new(90.0, 50.0), center).unwrap();
//! assert!((reading.angle - 90.0).abs() < 1e-4);
//!
//! // Pointer straight above the center sits in the dead zone.
//! assert!(mapper.map_pointer(Point::new(50.0, 10.0), center).is_none());
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

pub mod bar;
pub mod geometry;
pub mod mapper;
pub mod pointer;
#[cfg(feature = "std")]
pub mod state;

pub use bar::{BarModel, DEFAULT_BAR_COUNT, SEGMENT_CORNER_RADIUS, Segment};
pub use geometry::Point;
pub use mapper::{AngleMapper, DEFAULT_LIMITING_ANGLE, FULL_TURN, KnobReading};
pub use pointer::{KnobStep, PointerEvent, PointerPhase, PointerTracker};
#[cfg(feature = "std")]
pub use state::{Observable, SharedState, StateHandle, StateUpdate, Subscription};
