// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pointer tracker: turn successive contact points into per-handle deltas.
//!
//! ## Usage
//!
//! 1) When a drag starts, call [`PointerTracker::begin`] with the contact point.
//! 2) On each move, call [`PointerTracker::advance`] to get the signed growth
//!    since the previous move.
//!
//! Only the coordinate on the handle's axis is read or written, so a vertical
//! drag leaves the stored `x` alone.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::Point;
//! use understory_resize::handle::Handle;
//! use understory_resize::tracker::PointerTracker;
//!
//! let mut tracker = PointerTracker::new(Point::ZERO);
//! tracker.begin(Handle::Top, Point::new(5.0, 100.0));
//!
//! // Upward by 10: the top edge grows by 10.
//! assert_eq!(tracker.advance(Handle::Top, Point::new(5.0, 90.0)), 10.0);
//! // Deltas are incremental, not relative to the start.
//! assert_eq!(tracker.advance(Handle::Top, Point::new(5.0, 85.0)), 5.0);
//! ```

use kurbo::Point;

use crate::handle::{Axis, Handle};

/// Last seen pointer coordinates.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
pub struct PointerTracker {
    cursor: Point,
}

impl PointerTracker {
    /// Create a tracker with an initial pointer position.
    #[must_use]
    pub fn new(cursor: Point) -> Self {
        Self { cursor }
    }

    /// Last stored coordinates.
    #[must_use]
    pub fn cursor(&self) -> Point {
        self.cursor
    }

    /// Store `contact` on `handle`'s axis as the reference for the next move.
    pub fn begin(&mut self, handle: Handle, contact: Point) {
        self.store(handle.axis(), contact);
    }

    /// Signed growth for `handle` since the last stored position, then store
    /// `contact`.
    ///
    /// A non-finite coordinate yields a non-finite delta and is not stored, so
    /// the next finite move is measured from the last good position.
    pub fn advance(&mut self, handle: Handle, contact: Point) -> f64 {
        let axis = handle.axis();
        let delta = handle.signed_delta(axis.coordinate(self.cursor), axis.coordinate(contact));
        self.store(axis, contact);
        delta
    }

    fn store(&mut self, axis: Axis, contact: Point) {
        if !axis.coordinate(contact).is_finite() {
            return;
        }
        match axis {
            Axis::Horizontal => self.cursor.x = contact.x,
            Axis::Vertical => self.cursor.y = contact.y,
        }
    }
}
