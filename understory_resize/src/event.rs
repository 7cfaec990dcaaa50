// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pointer and touch input as seen by the resize controller.
//!
//! Only the primary contact point matters. For touch input that is the first
//! active touch, falling back to the first changed touch (touch-end events
//! have no active touches left).

use kurbo::Point;
use smallvec::SmallVec;

use crate::error::InvalidEventError;

/// Contact points of a touch event.
pub type TouchList = SmallVec<[Point; 2]>;

/// Where an event's coordinates came from.
#[derive(Clone, Debug, PartialEq)]
pub enum PointerSource {
    /// A mouse or pen pointer with a single position.
    Mouse(Point),
    /// A touch event.
    Touch {
        /// Contacts currently on the surface.
        touches: TouchList,
        /// Contacts that changed in this event.
        changed_touches: TouchList,
    },
}

/// A pointer-down/move/up or touch-start/move/end event.
#[derive(Clone, Debug, PartialEq)]
pub struct PointerEvent {
    source: PointerSource,
    default_prevented: bool,
}

impl PointerEvent {
    /// A mouse event at `position`.
    #[must_use]
    pub fn mouse(position: Point) -> Self {
        Self {
            source: PointerSource::Mouse(position),
            default_prevented: false,
        }
    }

    /// A touch event with the given active and changed contacts.
    #[must_use]
    pub fn touch(
        touches: impl IntoIterator<Item = Point>,
        changed_touches: impl IntoIterator<Item = Point>,
    ) -> Self {
        Self {
            source: PointerSource::Touch {
                touches: touches.into_iter().collect(),
                changed_touches: changed_touches.into_iter().collect(),
            },
            default_prevented: false,
        }
    }

    /// The event's coordinate source.
    #[must_use]
    pub fn source(&self) -> &PointerSource {
        &self.source
    }

    /// The primary contact point.
    pub fn contact_point(&self) -> Result<Point, InvalidEventError> {
        match &self.source {
            PointerSource::Mouse(position) => Ok(*position),
            PointerSource::Touch {
                touches,
                changed_touches,
            } => touches
                .first()
                .or_else(|| changed_touches.first())
                .copied()
                .ok_or(InvalidEventError),
        }
    }

    /// Suppress the platform's default action (text selection, native drag,
    /// scrolling).
    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    /// Returns `true` once [`PointerEvent::prevent_default`] has been called.
    #[must_use]
    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }
}
