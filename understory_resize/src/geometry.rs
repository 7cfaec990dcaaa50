// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Element geometry: width, height, and the aspect ratio that couples them.
//!
//! Two resize policies live here and stay separate:
//!
//! - [`Geometry::resize_edge`] changes one dimension and then derives the
//!   aspect ratio from the result. The ratio is an output.
//! - [`Geometry::resize_corner`] changes the height and derives the width from
//!   the stored aspect ratio. The ratio is an input.
//!
//! ```
//! use understory_resize::geometry::Geometry;
//! use understory_resize::handle::Axis;
//!
//! let mut geometry = Geometry::new(2.0, 200.0, 100.0).unwrap();
//!
//! // Corner: ratio held at 2.0.
//! let size = geometry.resize_corner(50.0, None).unwrap();
//! assert_eq!((size.width, size.height), (300.0, 150.0));
//!
//! // Edge: ratio follows the new size.
//! geometry.resize_edge(Axis::Horizontal, 30.0, None).unwrap();
//! assert_eq!(geometry.aspect_ratio(), 330.0 / 150.0);
//! ```

use kurbo::Size;

use crate::error::DegenerateGeometryError;
use crate::handle::Axis;

/// Width, height, and aspect ratio of a resizable element.
///
/// Width and height are always finite and positive, and so is the ratio.
/// After a corner resize `aspect_ratio == width / height` holds; after an edge
/// resize the ratio is recomputed from the new size.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Geometry {
    width: f64,
    height: f64,
    aspect_ratio: f64,
}

impl Geometry {
    /// Create geometry from an explicit aspect ratio and size.
    ///
    /// The ratio is taken as given; it does not have to equal
    /// `width / height`. The first corner resize will enforce it.
    pub fn new(
        aspect_ratio: f64,
        width: f64,
        height: f64,
    ) -> Result<Self, DegenerateGeometryError> {
        if !is_positive(width) || !is_positive(height) || !is_positive(aspect_ratio) {
            return Err(DegenerateGeometryError {
                width,
                height,
                aspect_ratio,
            });
        }
        Ok(Self {
            width,
            height,
            aspect_ratio,
        })
    }

    /// Create geometry whose aspect ratio is derived from `size`.
    pub fn from_size(size: Size) -> Result<Self, DegenerateGeometryError> {
        Self::new(size.width / size.height, size.width, size.height)
    }

    /// Current width in pixels.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Current height in pixels.
    #[must_use]
    pub fn height(&self) -> f64 {
        self.height
    }

    /// Current aspect ratio (`width / height` as of the last edge resize).
    #[must_use]
    pub fn aspect_ratio(&self) -> f64 {
        self.aspect_ratio
    }

    /// Current size.
    #[must_use]
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Grow the dimension driven by `axis` by `delta` pixels and recompute the
    /// aspect ratio from the result.
    ///
    /// With `min_size` set, the dimension is clamped to at least that many
    /// pixels. A non-finite `delta` is always an error. On error nothing
    /// changes.
    pub fn resize_edge(
        &mut self,
        axis: Axis,
        delta: f64,
        min_size: Option<f64>,
    ) -> Result<Size, DegenerateGeometryError> {
        let (width, height) = match axis {
            Axis::Horizontal => (clamp_min(self.width + delta, min_size), self.height),
            Axis::Vertical => (self.width, clamp_min(self.height + delta, min_size)),
        };
        let aspect_ratio = width / height;
        if !is_positive(width) || !is_positive(height) || !is_positive(aspect_ratio) {
            return Err(DegenerateGeometryError {
                width,
                height,
                aspect_ratio,
            });
        }
        self.width = width;
        self.height = height;
        self.aspect_ratio = aspect_ratio;
        Ok(self.size())
    }

    /// Grow the height by `delta` pixels and set `width = height * aspect_ratio`.
    ///
    /// The aspect ratio is left untouched. With `min_size` set, the height is
    /// clamped so that neither dimension drops below it. A non-finite `delta`
    /// is always an error. On error nothing changes.
    pub fn resize_corner(
        &mut self,
        delta: f64,
        min_size: Option<f64>,
    ) -> Result<Size, DegenerateGeometryError> {
        let floor = min_size.map(|min| min.max(min / self.aspect_ratio));
        let height = clamp_min(self.height + delta, floor);
        let width = height * self.aspect_ratio;
        if !is_positive(width) || !is_positive(height) {
            return Err(DegenerateGeometryError {
                width,
                height,
                aspect_ratio: self.aspect_ratio,
            });
        }
        self.width = width;
        self.height = height;
        Ok(self.size())
    }
}

fn is_positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

/// Non-finite values pass through unclamped so they are rejected, not
/// replaced by `min`.
fn clamp_min(value: f64, min: Option<f64>) -> f64 {
    match min {
        Some(min) if value.is_finite() => value.max(min),
        _ => value,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        a - b < 1e-9 && b - a < 1e-9
    }

    #[test]
    fn new_rejects_non_positive_or_non_finite() {
        assert!(Geometry::new(2.0, 0.0, 100.0).is_err());
        assert!(Geometry::new(2.0, 200.0, -1.0).is_err());
        assert!(Geometry::new(f64::NAN, 200.0, 100.0).is_err());
        assert!(Geometry::new(2.0, f64::INFINITY, 100.0).is_err());
        assert!(Geometry::new(2.0, 200.0, 100.0).is_ok());
    }

    #[test]
    fn from_size_derives_ratio() {
        let g = Geometry::from_size(Size::new(300.0, 150.0)).unwrap();
        assert_eq!(g.aspect_ratio(), 2.0);
    }

    #[test]
    fn edge_resize_updates_one_dimension_and_ratio() {
        let mut g = Geometry::new(2.0, 200.0, 100.0).unwrap();
        let size = g.resize_edge(Axis::Horizontal, 20.0, None).unwrap();
        assert_eq!(size, Size::new(220.0, 100.0));
        assert!(approx(g.aspect_ratio(), 2.2));

        let size = g.resize_edge(Axis::Vertical, -10.0, None).unwrap();
        assert_eq!(size, Size::new(220.0, 90.0));
        assert!(approx(g.aspect_ratio(), 220.0 / 90.0));
    }

    #[test]
    fn corner_resize_keeps_given_ratio() {
        // Ratio deliberately not equal to width / height.
        let mut g = Geometry::new(1.5, 200.0, 100.0).unwrap();
        let size = g.resize_corner(20.0, None).unwrap();
        assert_eq!(size.height, 120.0);
        assert!(approx(size.width, 180.0));
        assert_eq!(g.aspect_ratio(), 1.5);
    }

    #[test]
    fn collapsing_to_zero_is_rejected_without_change() {
        let mut g = Geometry::new(2.0, 200.0, 100.0).unwrap();
        let before = g;

        let err = g.resize_edge(Axis::Vertical, -100.0, None).unwrap_err();
        assert_eq!(err.height, 0.0);
        assert_eq!(g, before);

        assert!(g.resize_corner(-150.0, None).is_err());
        assert_eq!(g, before);
    }

    #[test]
    fn min_size_clamps_instead_of_failing() {
        let mut g = Geometry::new(2.0, 200.0, 100.0).unwrap();
        let size = g.resize_edge(Axis::Horizontal, -500.0, Some(10.0)).unwrap();
        assert_eq!(size.width, 10.0);
        assert!(approx(g.aspect_ratio(), 0.1));
    }

    #[test]
    fn corner_min_size_holds_for_both_dimensions() {
        // Ratio below one: width is the smaller side.
        let mut g = Geometry::new(0.5, 50.0, 100.0).unwrap();
        let size = g.resize_corner(-1000.0, Some(10.0)).unwrap();
        assert!(approx(size.width, 10.0), "width {}", size.width);
        assert!(approx(size.height, 20.0), "height {}", size.height);
        assert_eq!(g.aspect_ratio(), 0.5);
    }

    #[test]
    fn non_finite_delta_is_rejected_even_with_min_size() {
        let mut g = Geometry::new(2.0, 200.0, 100.0).unwrap();
        let before = g;

        for delta in [f64::NAN, f64::NEG_INFINITY, f64::INFINITY] {
            let err = g
                .resize_edge(Axis::Vertical, delta, Some(10.0))
                .unwrap_err();
            assert!(!err.height.is_finite(), "height {}", err.height);
            assert_eq!(g, before);

            assert!(g.resize_corner(delta, Some(10.0)).is_err());
            assert_eq!(g, before);
        }
    }

    #[test]
    fn invalid_ratio_is_reported() {
        let err = Geometry::new(0.0, 200.0, 100.0).unwrap_err();
        assert_eq!(err.aspect_ratio, 0.0);
        assert_eq!((err.width, err.height), (200.0, 100.0));
    }
}
