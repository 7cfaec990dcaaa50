// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Understory Resize: pointer-driven resizing of a rectangular element.
//!
//! This crate provides a headless controller that turns drags on six fixed
//! handles into width/height changes of one element:
//!
//! - [`Handle`]: the four edges plus a top and a bottom corner.
//! - [`ResizeController`]: one `Idle`/`Dragging` state machine per handle,
//!   attaching and detaching listeners on an [`EventSource`] and writing
//!   pixel sizes to a [`StyleTarget`].
//! - [`DimensionBroadcast`]: a per-controller observable of the current size.
//!
//! Edge handles change one dimension and let the aspect ratio follow. Corner
//! handles change the height and derive the width from the stored ratio, so a
//! corner drag never changes the ratio.
//!
//! It does **not** render handles, hit test, or own an event loop. Callers
//! route pointer-down events on their handle widgets to the matching
//! `start_*` method and deliver document-level move/up events to the
//! listeners the controller attached.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Size};
//! use understory_resize::{
//!     EventType, Geometry, InlineStyle, ListenerRegistry, PointerEvent, ResizeController,
//! };
//!
//! let geometry = Geometry::new(2.0, 200.0, 100.0).unwrap();
//! let mut resize = ResizeController::new(
//!     geometry,
//!     Point::ZERO,
//!     ListenerRegistry::new(),
//!     InlineStyle::new(),
//! );
//!
//! // Pointer down on the bottom corner handle.
//! let mut down = PointerEvent::mouse(Point::new(300.0, 100.0));
//! resize.start_bottom_corner(&mut down).unwrap();
//! assert!(down.default_prevented());
//!
//! // Drag down by 50: height grows to 150, width follows the 2:1 ratio.
//! let mut drag = PointerEvent::mouse(Point::new(300.0, 150.0));
//! resize.dispatch(EventType::MouseMove, &mut drag).unwrap();
//! assert_eq!(resize.dimensions().latest(), Size::new(300.0, 150.0));
//! assert_eq!(resize.style().css_width().as_deref(), Some("300px"));
//!
//! // Release: later moves no longer resize.
//! resize.dispatch(EventType::MouseUp, &mut drag).unwrap();
//! resize.dispatch(EventType::MouseMove, &mut PointerEvent::mouse(Point::new(0.0, 0.0))).unwrap();
//! assert_eq!(resize.geometry().size(), Size::new(300.0, 150.0));
//! ```
//!
//! ## Observing the size
//!
//! ```rust
//! use core::cell::Cell;
//! use std::rc::Rc;
//!
//! use kurbo::{Point, Size};
//! use understory_resize::{
//!     EventType, Geometry, InlineStyle, ListenerRegistry, PointerEvent, ResizeController,
//! };
//!
//! let geometry = Geometry::new(2.0, 200.0, 100.0).unwrap();
//! let mut resize =
//!     ResizeController::new(geometry, Point::ZERO, ListenerRegistry::new(), InlineStyle::new());
//!
//! let label = Rc::new(Cell::new(Size::ZERO));
//! let sink = label.clone();
//! resize.subscribe(move |size| sink.set(size));
//! assert_eq!(label.get(), Size::new(200.0, 100.0));
//!
//! resize.start_left(&mut PointerEvent::mouse(Point::new(100.0, 0.0))).unwrap();
//! resize.dispatch(EventType::MouseMove, &mut PointerEvent::mouse(Point::new(80.0, 0.0))).unwrap();
//! assert_eq!(label.get(), Size::new(220.0, 100.0));
//! ```
//!
//! ## Listener lifecycle
//!
//! Ending a drag detaches the handle's move listener but leaves its end
//! listener attached; a later end event on an idle handle does nothing. Set
//! [`ResizeConfig::detach_end_listener`] to remove both. Hosts that see
//! pointer-cancel or lost-capture events should call
//! [`ResizeController::cancel`], since no end event will follow, and
//! [`ResizeController::release_end_listeners`] clears end listeners left by
//! completed drags.
//!
//! This crate is `no_std` compatible (with `alloc`).

#![no_std]

extern crate alloc;

pub mod broadcast;
pub mod controller;
pub mod error;
pub mod event;
pub mod geometry;
pub mod handle;
pub mod listener;
pub mod style;
pub mod tracker;

pub use broadcast::{DimensionBroadcast, SubscriptionId};
pub use controller::{DragPhase, ResizeConfig, ResizeController};
pub use error::{DegenerateGeometryError, InvalidEventError, ResizeError};
pub use event::{PointerEvent, PointerSource};
pub use geometry::Geometry;
pub use handle::{Axis, Handle};
pub use listener::{EventSource, EventType, HandleListeners, Listener, ListenerRegistry, ListenerRole};
pub use style::{InlineStyle, StyleTarget};
pub use tracker::PointerTracker;
