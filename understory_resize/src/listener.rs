// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Listener tokens and the event source they are attached to.
//!
//! A drag gesture attaches a handle's move and end listeners to a global event
//! source (typically the document) so movement is tracked even after the
//! pointer leaves the handle. Detaching must remove exactly what was attached,
//! so listeners are plain [`Copy`] tokens created once per handle and compared
//! by value.
//!
//! ```
//! use understory_resize::handle::Handle;
//! use understory_resize::listener::{EventSource, EventType, Listener, ListenerRegistry};
//!
//! let mut registry = ListenerRegistry::default();
//! let listener = Listener::drag_move(Handle::Top);
//!
//! registry.add_listener(EventType::MouseMove, listener);
//! registry.add_listener(EventType::MouseMove, listener);
//! assert_eq!(registry.listeners(EventType::MouseMove).count(), 1);
//!
//! registry.remove_listener(EventType::MouseMove, listener);
//! assert!(!registry.is_attached(EventType::MouseMove, listener));
//! ```

use alloc::vec::Vec;

use crate::handle::Handle;

/// Event streams a drag listens to.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum EventType {
    /// Pointer (mouse) movement.
    MouseMove,
    /// Touch movement.
    TouchMove,
    /// Pointer (mouse) release.
    MouseUp,
    /// Touch release.
    TouchEnd,
}

impl EventType {
    /// Number of event types.
    pub const COUNT: usize = 4;

    /// Streams a move listener is attached to.
    pub const MOVE: [Self; 2] = [Self::MouseMove, Self::TouchMove];

    /// Streams an end listener is attached to.
    pub const END: [Self; 2] = [Self::MouseUp, Self::TouchEnd];

    const fn index(self) -> usize {
        match self {
            Self::MouseMove => 0,
            Self::TouchMove => 1,
            Self::MouseUp => 2,
            Self::TouchEnd => 3,
        }
    }
}

/// What a listener does when invoked.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ListenerRole {
    /// Apply pointer movement to the geometry.
    Move,
    /// Finish the drag.
    End,
}

/// Stable identity of one handle's move or end callback.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Listener {
    /// Handle the listener belongs to.
    pub handle: Handle,
    /// Move or end.
    pub role: ListenerRole,
}

impl Listener {
    /// The move listener of `handle`.
    #[must_use]
    pub const fn drag_move(handle: Handle) -> Self {
        Self {
            handle,
            role: ListenerRole::Move,
        }
    }

    /// The end listener of `handle`.
    #[must_use]
    pub const fn drag_end(handle: Handle) -> Self {
        Self {
            handle,
            role: ListenerRole::End,
        }
    }

    /// Event streams this listener is attached to during a drag.
    #[must_use]
    pub const fn event_types(self) -> [EventType; 2] {
        match self.role {
            ListenerRole::Move => EventType::MOVE,
            ListenerRole::End => EventType::END,
        }
    }
}

/// The move/end listener pair owned by one handle.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct HandleListeners {
    /// Attached to [`EventType::MOVE`] for the duration of a drag.
    pub drag_move: Listener,
    /// Attached to [`EventType::END`] when a drag starts.
    pub drag_end: Listener,
}

impl HandleListeners {
    /// Build the pair for `handle`.
    #[must_use]
    pub const fn new(handle: Handle) -> Self {
        Self {
            drag_move: Listener::drag_move(handle),
            drag_end: Listener::drag_end(handle),
        }
    }
}

/// Something that dispatches pointer and touch events to attached listeners.
pub trait EventSource {
    /// Attach `listener` to the `event` stream.
    fn add_listener(&mut self, event: EventType, listener: Listener);

    /// Detach `listener` from the `event` stream. Detaching a listener that
    /// is not attached does nothing.
    fn remove_listener(&mut self, event: EventType, listener: Listener);
}

impl<S: EventSource + ?Sized> EventSource for &mut S {
    fn add_listener(&mut self, event: EventType, listener: Listener) {
        (**self).add_listener(event, listener);
    }

    fn remove_listener(&mut self, event: EventType, listener: Listener) {
        (**self).remove_listener(event, listener);
    }
}

/// In-memory [`EventSource`].
///
/// Listeners are kept per event type in attachment order. Attaching a
/// listener that is already attached to that type is ignored.
#[derive(Clone, Debug, Default)]
pub struct ListenerRegistry {
    streams: [Vec<Listener>; EventType::COUNT],
}

impl ListenerRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Listeners attached to `event`, in attachment order.
    pub fn listeners(&self, event: EventType) -> impl Iterator<Item = Listener> + '_ {
        self.streams[event.index()].iter().copied()
    }

    /// Returns `true` if `listener` is attached to `event`.
    #[must_use]
    pub fn is_attached(&self, event: EventType, listener: Listener) -> bool {
        self.streams[event.index()].contains(&listener)
    }

    /// Total number of attachments across all event types.
    #[must_use]
    pub fn len(&self) -> usize {
        self.streams.iter().map(Vec::len).sum()
    }

    /// Returns `true` if nothing is attached.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.streams.iter().all(Vec::is_empty)
    }
}

impl EventSource for ListenerRegistry {
    fn add_listener(&mut self, event: EventType, listener: Listener) {
        let stream = &mut self.streams[event.index()];
        if !stream.contains(&listener) {
            stream.push(listener);
        }
    }

    fn remove_listener(&mut self, event: EventType, listener: Listener) {
        self.streams[event.index()].retain(|l| *l != listener);
    }
}
