// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Resize handles and their static behavior.
//!
//! Each [`Handle`] is bound at compile time to the pointer axis it reads, the
//! sign it applies to pointer movement, and whether it locks the aspect ratio.
//!
//! ```
//! use understory_resize::handle::{Axis, Handle};
//!
//! assert_eq!(Handle::Left.axis(), Axis::Horizontal);
//! // Moving the pointer left by 20 grows the element from the left edge.
//! assert_eq!(Handle::Left.signed_delta(100.0, 80.0), 20.0);
//! assert!(Handle::BottomCorner.locks_aspect_ratio());
//! ```

use kurbo::Point;

/// Pointer axis a handle reads from.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    /// The `x` coordinate; drives width.
    Horizontal,
    /// The `y` coordinate; drives height.
    Vertical,
}

impl Axis {
    /// Extract this axis' coordinate from a point.
    #[must_use]
    pub fn coordinate(self, point: Point) -> f64 {
        match self {
            Self::Horizontal => point.x,
            Self::Vertical => point.y,
        }
    }
}

/// One of the six drag affordances around a resizable element.
///
/// Only the top and bottom corners exist. Both derive width from height.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Handle {
    /// Top edge; grows height when dragged upward.
    Top,
    /// Right edge; grows width when dragged rightward.
    Right,
    /// Bottom edge; grows height when dragged downward.
    Bottom,
    /// Left edge; grows width when dragged leftward.
    Left,
    /// Top corner; grows height when dragged upward, keeping the aspect ratio.
    TopCorner,
    /// Bottom corner; grows height when dragged downward, keeping the aspect ratio.
    BottomCorner,
}

impl Handle {
    /// Number of handles.
    pub const COUNT: usize = 6;

    /// Every handle, in [`Handle::index`] order.
    pub const ALL: [Self; Self::COUNT] = [
        Self::Top,
        Self::Right,
        Self::Bottom,
        Self::Left,
        Self::TopCorner,
        Self::BottomCorner,
    ];

    /// Dense index in `0..Handle::COUNT`, for per-handle storage.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Top => 0,
            Self::Right => 1,
            Self::Bottom => 2,
            Self::Left => 3,
            Self::TopCorner => 4,
            Self::BottomCorner => 5,
        }
    }

    /// The pointer axis this handle tracks.
    #[must_use]
    pub const fn axis(self) -> Axis {
        match self {
            Self::Right | Self::Left => Axis::Horizontal,
            Self::Top | Self::Bottom | Self::TopCorner | Self::BottomCorner => Axis::Vertical,
        }
    }

    /// Returns `true` for the corner handles.
    #[must_use]
    pub const fn is_corner(self) -> bool {
        matches!(self, Self::TopCorner | Self::BottomCorner)
    }

    /// Returns `true` if dragging this handle keeps `width / height` fixed.
    ///
    /// Edge handles instead recompute the ratio from the new size.
    #[must_use]
    pub const fn locks_aspect_ratio(self) -> bool {
        self.is_corner()
    }

    /// Returns `true` if pointer movement toward smaller coordinates grows
    /// the element (top and left sides).
    #[must_use]
    pub const fn grows_toward_origin(self) -> bool {
        matches!(self, Self::Top | Self::Left | Self::TopCorner)
    }

    /// Growth of the driven dimension for a pointer moving from `previous`
    /// to `current` along [`Handle::axis`].
    #[must_use]
    pub fn signed_delta(self, previous: f64, current: f64) -> f64 {
        if self.grows_toward_origin() {
            previous - current
        } else {
            current - previous
        }
    }
}
