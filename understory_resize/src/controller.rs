// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The resize controller: one drag state machine per handle.
//!
//! Each handle moves between two phases:
//!
//! ```text
//! Idle --start--> Dragging --move--> Dragging --end--> Idle
//! ```
//!
//! Starting a drag attaches the handle's move listener to
//! [`EventType::MOVE`] and its end listener to [`EventType::END`]. Ending the
//! drag detaches the move listener only. The end listener stays attached
//! unless [`ResizeConfig::detach_end_listener`] is set; a stray end event on an
//! idle handle is a no-op either way.
//!
//! If the platform never delivers an end event (lost pointer capture, a
//! cancelled touch), call [`ResizeController::cancel`] to detach both
//! listeners.
//! [`ResizeController::release_end_listeners`] removes the end listeners that
//! completed drags left behind.

use kurbo::{Point, Size};
use smallvec::SmallVec;
use tracing::{debug, trace, warn};

use crate::broadcast::{DimensionBroadcast, SubscriptionId};
use crate::error::ResizeError;
use crate::event::PointerEvent;
use crate::geometry::Geometry;
use crate::handle::{Axis, Handle};
use crate::listener::{
    EventSource, EventType, HandleListeners, Listener, ListenerRegistry, ListenerRole,
};
use crate::style::StyleTarget;
use crate::tracker::PointerTracker;

/// Per-handle drag phase.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub enum DragPhase {
    /// No drag in progress; move events are ignored.
    #[default]
    Idle,
    /// Between a start event and its end event.
    Dragging,
}

/// Tunables for a [`ResizeController`].
#[derive(Copy, Clone, Debug, PartialEq, Default)]
pub struct ResizeConfig {
    /// Smallest width or height a drag may produce, in pixels.
    ///
    /// `None` leaves sizes unclamped; moves that would collapse the element are
    /// then rejected with [`ResizeError::DegenerateGeometry`].
    pub min_size: Option<f64>,
    /// Also detach the end listener when a drag ends.
    pub detach_end_listener: bool,
}

impl ResizeConfig {
    /// Clamp resized dimensions to at least `min_size` pixels.
    #[must_use]
    pub fn with_min_size(mut self, min_size: f64) -> Self {
        self.min_size = Some(min_size);
        self
    }

    /// Detach the end listener together with the move listener.
    #[must_use]
    pub fn with_detach_end_listener(mut self, detach: bool) -> Self {
        self.detach_end_listener = detach;
        self
    }
}

/// Translates pointer drags on six handles into size changes of one element.
///
/// `S` is where drag listeners are attached (see [`EventSource`]), `T` is the
/// element style that receives pixel sizes. The controller is the only writer
/// of the geometry and of its [`DimensionBroadcast`].
#[derive(Debug)]
pub struct ResizeController<S, T> {
    geometry: Geometry,
    tracker: PointerTracker,
    source: S,
    style: T,
    config: ResizeConfig,
    listeners: [HandleListeners; Handle::COUNT],
    phases: [DragPhase; Handle::COUNT],
    end_attached: [bool; Handle::COUNT],
    dimensions: DimensionBroadcast,
}

impl<S: EventSource, T: StyleTarget> ResizeController<S, T> {
    /// Create a controller with the default [`ResizeConfig`].
    pub fn new(geometry: Geometry, cursor: Point, source: S, style: T) -> Self {
        Self::with_config(geometry, cursor, source, style, ResizeConfig::default())
    }

    /// Create a controller.
    ///
    /// The dimension broadcast is seeded with the geometry's size and every
    /// handle starts [`DragPhase::Idle`].
    pub fn with_config(
        geometry: Geometry,
        cursor: Point,
        source: S,
        style: T,
        config: ResizeConfig,
    ) -> Self {
        Self {
            geometry,
            tracker: PointerTracker::new(cursor),
            source,
            style,
            config,
            listeners: Handle::ALL.map(HandleListeners::new),
            phases: [DragPhase::Idle; Handle::COUNT],
            end_attached: [false; Handle::COUNT],
            dimensions: DimensionBroadcast::new(geometry.size()),
        }
    }

    /// Start dragging the top edge.
    pub fn start_top(&mut self, event: &mut PointerEvent) -> Result<(), ResizeError> {
        self.start(Handle::Top, event)
    }

    /// Start dragging the right edge.
    pub fn start_right(&mut self, event: &mut PointerEvent) -> Result<(), ResizeError> {
        self.start(Handle::Right, event)
    }

    /// Start dragging the bottom edge.
    pub fn start_bottom(&mut self, event: &mut PointerEvent) -> Result<(), ResizeError> {
        self.start(Handle::Bottom, event)
    }

    /// Start dragging the left edge.
    pub fn start_left(&mut self, event: &mut PointerEvent) -> Result<(), ResizeError> {
        self.start(Handle::Left, event)
    }

    /// Start dragging the top corner.
    pub fn start_top_corner(&mut self, event: &mut PointerEvent) -> Result<(), ResizeError> {
        self.start(Handle::TopCorner, event)
    }

    /// Start dragging the bottom corner.
    pub fn start_bottom_corner(&mut self, event: &mut PointerEvent) -> Result<(), ResizeError> {
        self.start(Handle::BottomCorner, event)
    }

    /// Start a drag on `handle` from a pointer-down or touch-start event.
    ///
    /// The event's default action is always suppressed. If `handle` is
    /// already dragging nothing else happens. Fails if the event has no
    /// contact point, in which case the handle stays idle.
    pub fn start(&mut self, handle: Handle, event: &mut PointerEvent) -> Result<(), ResizeError> {
        event.prevent_default();
        if self.is_dragging(handle) {
            trace!(?handle, "resize drag already active");
            return Ok(());
        }
        let contact = event
            .contact_point()
            .inspect_err(|_| warn!(?handle, "resize start without contact point"))?;
        self.tracker.begin(handle, contact);

        let pair = self.listeners[handle.index()];
        for event_type in pair.drag_move.event_types() {
            self.source.add_listener(event_type, pair.drag_move);
        }
        for event_type in pair.drag_end.event_types() {
            self.source.add_listener(event_type, pair.drag_end);
        }
        self.end_attached[handle.index()] = true;
        self.phases[handle.index()] = DragPhase::Dragging;
        debug!(?handle, x = contact.x, y = contact.y, "resize drag started");
        Ok(())
    }

    /// Invoke an attached listener with the event it was dispatched.
    ///
    /// Move listeners of idle handles and end listeners of idle handles do
    /// nothing.
    pub fn handle(
        &mut self,
        listener: Listener,
        event: &mut PointerEvent,
    ) -> Result<(), ResizeError> {
        match listener.role {
            ListenerRole::Move => self.drag_move(listener.handle, event),
            ListenerRole::End => {
                self.drag_end(listener.handle);
                Ok(())
            }
        }
    }

    /// Detach `handle`'s move and end listeners and return it to idle without
    /// an end event. Returns `false` if the handle was not dragging.
    pub fn cancel(&mut self, handle: Handle) -> bool {
        if !self.is_dragging(handle) {
            return false;
        }
        let pair = self.listeners[handle.index()];
        self.detach(pair.drag_move);
        self.detach_end(handle);
        self.phases[handle.index()] = DragPhase::Idle;
        debug!(?handle, "resize drag cancelled");
        true
    }

    /// [`cancel`](Self::cancel) every dragging handle. Returns how many were
    /// cancelled.
    ///
    /// Idle handles are left alone, including end listeners that completed
    /// drags kept attached; see [`release_end_listeners`](Self::release_end_listeners).
    pub fn cancel_all(&mut self) -> usize {
        Handle::ALL
            .into_iter()
            .filter(|&handle| self.cancel(handle))
            .count()
    }

    /// Detach the end listeners that completed drags left attached.
    ///
    /// Only idle handles are touched, so a drag in progress still ends
    /// normally. Returns how many handles had their end listener removed.
    pub fn release_end_listeners(&mut self) -> usize {
        let mut released = 0;
        for handle in Handle::ALL {
            if !self.is_dragging(handle) && self.end_attached[handle.index()] {
                self.detach_end(handle);
                released += 1;
            }
        }
        if released > 0 {
            debug!(released, "released idle end listeners");
        }
        released
    }

    fn drag_move(&mut self, handle: Handle, event: &PointerEvent) -> Result<(), ResizeError> {
        if !self.is_dragging(handle) {
            return Ok(());
        }
        let contact = event
            .contact_point()
            .inspect_err(|_| warn!(?handle, "resize move without contact point"))?;
        let delta = self.tracker.advance(handle, contact);

        let resized = if handle.locks_aspect_ratio() {
            self.move_corner(delta)
        } else {
            self.move_edge(handle.axis(), delta)
        };
        let size =
            resized.inspect_err(|err| warn!(?handle, delta, %err, "resize move rejected"))?;

        self.dimensions.publish(size);
        trace!(?handle, width = size.width, height = size.height, "resized");
        Ok(())
    }

    fn move_edge(&mut self, axis: Axis, delta: f64) -> Result<Size, ResizeError> {
        let size = self
            .geometry
            .resize_edge(axis, delta, self.config.min_size)?;
        match axis {
            Axis::Horizontal => self.style.set_width(size.width),
            Axis::Vertical => self.style.set_height(size.height),
        }
        Ok(size)
    }

    fn move_corner(&mut self, delta: f64) -> Result<Size, ResizeError> {
        let size = self.geometry.resize_corner(delta, self.config.min_size)?;
        self.style.set_width(size.width);
        self.style.set_height(size.height);
        Ok(size)
    }

    fn drag_end(&mut self, handle: Handle) {
        if !self.is_dragging(handle) {
            return;
        }
        let pair = self.listeners[handle.index()];
        self.detach(pair.drag_move);
        if self.config.detach_end_listener {
            self.detach_end(handle);
        }
        self.phases[handle.index()] = DragPhase::Idle;
        debug!(?handle, "resize drag ended");
    }

    fn detach_end(&mut self, handle: Handle) {
        self.detach(self.listeners[handle.index()].drag_end);
        self.end_attached[handle.index()] = false;
    }

    fn detach(&mut self, listener: Listener) {
        for event_type in listener.event_types() {
            self.source.remove_listener(event_type, listener);
        }
    }

    /// Subscribe to size changes; `observer` is called right away with the
    /// current size.
    pub fn subscribe(&mut self, observer: impl FnMut(Size) + 'static) -> SubscriptionId {
        self.dimensions.subscribe(observer)
    }

    /// Drop a subscription made with [`subscribe`](Self::subscribe).
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.dimensions.unsubscribe(id)
    }

    /// The current phase of `handle`.
    #[must_use]
    pub fn phase(&self, handle: Handle) -> DragPhase {
        self.phases[handle.index()]
    }

    /// Returns `true` while `handle` is between start and end.
    #[must_use]
    pub fn is_dragging(&self, handle: Handle) -> bool {
        self.phase(handle) == DragPhase::Dragging
    }

    /// The listener pair `handle` attaches during a drag.
    #[must_use]
    pub fn listeners(&self, handle: Handle) -> HandleListeners {
        self.listeners[handle.index()]
    }

    /// Current geometry.
    #[must_use]
    pub fn geometry(&self) -> Geometry {
        self.geometry
    }

    /// Last stored pointer coordinates.
    #[must_use]
    pub fn cursor(&self) -> Point {
        self.tracker.cursor()
    }

    /// The dimension broadcast, for reading the latest size and revision.
    #[must_use]
    pub fn dimensions(&self) -> &DimensionBroadcast {
        &self.dimensions
    }

    /// Configuration in effect.
    #[must_use]
    pub fn config(&self) -> ResizeConfig {
        self.config
    }

    /// The event source listeners are attached to.
    #[must_use]
    pub fn source(&self) -> &S {
        &self.source
    }

    /// The style receiving pixel sizes.
    #[must_use]
    pub fn style(&self) -> &T {
        &self.style
    }
}

impl<T: StyleTarget> ResizeController<ListenerRegistry, T> {
    /// Deliver `event` to every listener attached to `event_type`.
    ///
    /// Listeners are snapshotted before delivery; one detached by an earlier
    /// listener in the same dispatch is skipped. Delivery stops at the first
    /// error. Returns the number of listeners invoked.
    pub fn dispatch(
        &mut self,
        event_type: EventType,
        event: &mut PointerEvent,
    ) -> Result<usize, ResizeError> {
        let attached: SmallVec<[Listener; Handle::COUNT]> =
            self.source.listeners(event_type).collect();
        let mut invoked = 0;
        for listener in attached {
            if !self.source.is_attached(event_type, listener) {
                continue;
            }
            self.handle(listener, event)?;
            invoked += 1;
        }
        Ok(invoked)
    }
}
