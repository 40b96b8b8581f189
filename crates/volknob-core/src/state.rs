//! Observable shared state for the knob and the volume bar.
//!
//! Two scalars live here: the knob rotation (degrees) and the volume level
//! (0.0 to 1.0). Writers never touch them directly. Updates go through a
//! FIFO command channel and are applied when the UI thread calls
//! [`SharedState::apply_pending`], once per frame:
//!
//! ```text
//! knob pointer handler ──► StateHandle::update_rotation ──┐
//! owner callback       ──► StateHandle::update_volume   ──┤  unbounded FIFO
//!                                                         ▼
//! UI frame start ──► SharedState::apply_pending ──► Observable::set ──► subscribers
//! ```
//!
//! The queue is scoped to the [`SharedState`]. Dropping it abandons every
//! queued update, and later sends from surviving [`StateHandle`]s are
//! discarded.

use crate::mapper::{AngleMapper, DEFAULT_LIMITING_ANGLE};
use crossbeam_channel::{Receiver, Sender, TryRecvError, unbounded};
use parking_lot::{Mutex, RwLock};

/// A latest-value cell with push notification.
///
/// Every [`Subscription`] starts with the value current at subscription time
/// and then receives each later value in the order it was set.
#[derive(Debug)]
pub struct Observable<T> {
    value: RwLock<T>,
    subscribers: Mutex<Vec<Sender<T>>>,
}

impl<T: Copy> Observable<T> {
    /// Create a cell holding `initial`.
    pub fn new(initial: T) -> Self {
        Self {
            value: RwLock::new(initial),
            subscribers: Mutex::new(Vec::new()),
        }
    }

    /// Current value.
    #[inline]
    pub fn get(&self) -> T {
        *self.value.read()
    }

    /// Replace the value and notify subscribers.
    ///
    /// Subscribers whose [`Subscription`] has been dropped are pruned.
    pub fn set(&self, value: T) {
        // Subscriber lock held across the write so a concurrent subscribe
        // sees either the old value plus this update, or only the new value.
        let mut subscribers = self.subscribers.lock();
        *self.value.write() = value;
        subscribers.retain(|tx| tx.send(value).is_ok());
    }

    /// Subscribe to this cell.
    pub fn subscribe(&self) -> Subscription<T> {
        let mut subscribers = self.subscribers.lock();
        let current = *self.value.read();
        let (tx, rx) = unbounded();
        // Cannot fail: `rx` is alive.
        let _ = tx.send(current);
        subscribers.push(tx);
        Subscription {
            rx,
            latest: current,
            closed: false,
        }
    }

    /// Number of live subscribers as of the last notification.
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.lock().len()
    }
}

impl<T: Copy + Default> Default for Observable<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

/// Receiving side of an [`Observable`].
#[derive(Debug)]
pub struct Subscription<T> {
    rx: Receiver<T>,
    latest: T,
    closed: bool,
}

impl<T: Copy> Subscription<T> {
    /// Next value not yet observed, if any.
    pub fn try_next(&mut self) -> Option<T> {
        match self.rx.try_recv() {
            Ok(value) => {
                self.latest = value;
                Some(value)
            }
            Err(TryRecvError::Disconnected) => {
                self.closed = true;
                None
            }
            Err(TryRecvError::Empty) => None,
        }
    }

    /// Drain pending values and return the most recent one.
    pub fn latest(&mut self) -> T {
        while self.try_next().is_some() {}
        self.latest
    }

    /// Iterate over pending values in order.
    pub fn pending(&mut self) -> impl Iterator<Item = T> + '_ {
        core::iter::from_fn(move || self.try_next())
    }

    /// Whether the observed cell has been dropped and all values drained.
    pub fn is_closed(&self) -> bool {
        self.closed
    }
}

/// A queued state mutation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StateUpdate {
    /// Replace the knob rotation (degrees).
    Rotation(f32),
    /// Replace the volume level.
    Volume(f32),
}

/// Cloneable fire-and-forget writer for a [`SharedState`].
#[derive(Debug, Clone)]
pub struct StateHandle {
    tx: Sender<StateUpdate>,
}

impl StateHandle {
    /// Queue a rotation update.
    pub fn update_rotation(&self, angle: f32) {
        self.send(StateUpdate::Rotation(angle));
    }

    /// Queue a volume update.
    pub fn update_volume(&self, level: f32) {
        self.send(StateUpdate::Volume(level));
    }

    /// Queue an update. Silently dropped once the owning state is gone.
    pub fn send(&self, update: StateUpdate) {
        if self.tx.send(update).is_err() {
            #[cfg(feature = "tracing")]
            tracing::trace!(?update, "state scope torn down, update dropped");
        }
    }
}

/// Single source of truth for knob rotation and volume level.
///
/// No range checks happen here; the angle mapper guarantees its outputs.
#[derive(Debug)]
pub struct SharedState {
    rotation: Observable<f32>,
    volume: Observable<f32>,
    handle: StateHandle,
    rx: Receiver<StateUpdate>,
}

impl Default for SharedState {
    fn default() -> Self {
        Self::new(DEFAULT_LIMITING_ANGLE)
    }
}

impl SharedState {
    /// Create a holder with the given initial rotation and zero volume.
    pub fn new(initial_rotation: f32) -> Self {
        let (tx, rx) = unbounded();
        Self {
            rotation: Observable::new(initial_rotation),
            volume: Observable::new(0.0),
            handle: StateHandle { tx },
            rx,
        }
    }

    /// Create a holder whose rotation starts at the mapper's rest angle.
    pub fn for_mapper(mapper: &AngleMapper) -> Self {
        Self::new(mapper.rest_angle())
    }

    /// Create a holder preset to `volume`, with the knob pointed to match.
    ///
    /// `volume` is clamped to `[0, 1]`.
    pub fn with_volume(mapper: &AngleMapper, volume: f32) -> Self {
        let volume = volume.clamp(0.0, 1.0);
        let state = Self::new(mapper.angle_for_percent(volume));
        state.volume.set(volume);
        state
    }

    /// A writer that can be moved into callbacks.
    pub fn handle(&self) -> StateHandle {
        self.handle.clone()
    }

    /// Queue a rotation update.
    pub fn update_rotation(&self, angle: f32) {
        self.handle.update_rotation(angle);
    }

    /// Queue a volume update.
    pub fn update_volume(&self, level: f32) {
        self.handle.update_volume(level);
    }

    /// Apply every queued update in issue order. Returns how many were applied.
    pub fn apply_pending(&self) -> usize {
        let mut applied = 0;
        for update in self.rx.try_iter() {
            match update {
                StateUpdate::Rotation(angle) => self.rotation.set(angle),
                StateUpdate::Volume(level) => self.volume.set(level),
            }
            applied += 1;
        }
        #[cfg(feature = "tracing")]
        if applied > 0 {
            tracing::trace!(
                applied,
                rotation = self.rotation.get(),
                volume = self.volume.get(),
                "applied state updates"
            );
        }
        applied
    }

    /// Discard every queued update without applying it. Returns how many were dropped.
    pub fn cancel_pending(&self) -> usize {
        let dropped = self.rx.try_iter().count();
        #[cfg(feature = "tracing")]
        if dropped > 0 {
            tracing::debug!(dropped, "cancelled pending state updates");
        }
        dropped
    }

    /// Number of queued, not yet applied updates.
    pub fn pending_len(&self) -> usize {
        self.rx.len()
    }

    /// Current knob rotation in degrees.
    pub fn rotation(&self) -> f32 {
        self.rotation.get()
    }

    /// Current volume level.
    pub fn volume(&self) -> f32 {
        self.volume.get()
    }

    /// Observe the knob rotation.
    pub fn subscribe_rotation(&self) -> Subscription<f32> {
        self.rotation.subscribe()
    }

    /// Observe the volume level.
    pub fn subscribe_volume(&self) -> Subscription<f32> {
        self.volume.subscribe()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_values() {
        let state = SharedState::default();
        assert_eq!(state.rotation(), 25.0);
        assert_eq!(state.volume(), 0.0);

        let state = SharedState::for_mapper(&AngleMapper::new(40.0));
        assert_eq!(state.rotation(), 40.0);
    }

    #[test]
    fn test_preset_volume_points_knob() {
        let mapper = AngleMapper::default();
        let state = SharedState::with_volume(&mapper, 0.5);
        assert_eq!(state.volume(), 0.5);
        assert!((state.rotation() - 180.0).abs() < 1e-4);
        assert_eq!(state.pending_len(), 0);

        let state = SharedState::with_volume(&mapper, 0.0);
        assert_eq!(state.rotation(), mapper.rest_angle());

        let state = SharedState::with_volume(&mapper, 3.0);
        assert_eq!(state.volume(), 1.0);
        assert!((state.rotation() - 335.0).abs() < 1e-4);
    }

    #[test]
    fn test_updates_are_deferred_until_applied() {
        let state = SharedState::default();
        state.update_rotation(90.0);
        state.update_volume(0.5);
        assert_eq!(state.rotation(), 25.0);
        assert_eq!(state.pending_len(), 2);

        assert_eq!(state.apply_pending(), 2);
        assert_eq!(state.rotation(), 90.0);
        assert_eq!(state.volume(), 0.5);
        assert_eq!(state.pending_len(), 0);
    }

    #[test]
    fn test_updates_apply_in_issue_order() {
        let state = SharedState::default();
        let mut sub = state.subscribe_volume();
        let handle = state.handle();
        for level in [0.1, 0.2, 0.3] {
            handle.update_volume(level);
        }
        state.update_volume(0.05);
        state.apply_pending();

        let seen: Vec<f32> = sub.pending().collect();
        assert_eq!(seen, vec![0.0, 0.1, 0.2, 0.3, 0.05]);
        assert_eq!(state.volume(), 0.05);
    }

    #[test]
    fn test_late_subscriber_sees_current_value() {
        let state = SharedState::default();
        state.update_rotation(120.0);
        state.apply_pending();

        let mut sub = state.subscribe_rotation();
        assert_eq!(sub.try_next(), Some(120.0));
        assert_eq!(sub.try_next(), None);

        state.update_rotation(130.0);
        state.apply_pending();
        assert_eq!(sub.latest(), 130.0);
    }

    #[test]
    fn test_many_subscribers() {
        let cell = Observable::new(1u32);
        let mut a = cell.subscribe();
        let mut b = cell.subscribe();
        cell.set(2);
        assert_eq!(a.latest(), 2);
        assert_eq!(b.pending().collect::<Vec<_>>(), vec![1, 2]);
        assert_eq!(cell.subscriber_count(), 2);
    }

    #[test]
    fn test_dropped_subscriber_is_pruned() {
        let cell = Observable::new(0u32);
        let sub = cell.subscribe();
        let _keep = cell.subscribe();
        drop(sub);
        cell.set(1);
        assert_eq!(cell.subscriber_count(), 1);
    }

    #[test]
    fn test_cancel_pending_discards() {
        let state = SharedState::default();
        state.update_rotation(200.0);
        state.update_volume(0.9);
        assert_eq!(state.cancel_pending(), 2);
        assert_eq!(state.apply_pending(), 0);
        assert_eq!(state.rotation(), 25.0);
        assert_eq!(state.volume(), 0.0);
    }

    #[test]
    fn test_teardown_abandons_updates() {
        let state = SharedState::default();
        let handle = state.handle();
        let mut sub = state.subscribe_rotation();
        handle.update_rotation(300.0);
        drop(state);

        // Sending after teardown is a silent no-op.
        handle.update_rotation(310.0);

        assert_eq!(sub.latest(), 25.0);
        assert!(sub.is_closed());
    }

    #[test]
    fn test_no_validation_at_this_layer() {
        let state = SharedState::default();
        state.update_volume(7.5);
        state.update_rotation(-40.0);
        state.apply_pending();
        assert_eq!(state.volume(), 7.5);
        assert_eq!(state.rotation(), -40.0);
    }
}
