// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Style targets receive the element's new pixel size.

use alloc::format;
use alloc::string::String;

/// A mutable style with pixel-valued width and height.
pub trait StyleTarget {
    /// Set the element's width in pixels.
    fn set_width(&mut self, px: f64);

    /// Set the element's height in pixels.
    fn set_height(&mut self, px: f64);
}

impl<T: StyleTarget + ?Sized> StyleTarget for &mut T {
    fn set_width(&mut self, px: f64) {
        (**self).set_width(px);
    }

    fn set_height(&mut self, px: f64) {
        (**self).set_height(px);
    }
}

/// In-memory inline style.
///
/// Records the last width and height written and how many writes happened.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct InlineStyle {
    width: Option<f64>,
    height: Option<f64>,
    writes: usize,
}

impl InlineStyle {
    /// Create a style with no size set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Last width written, if any.
    #[must_use]
    pub fn width(&self) -> Option<f64> {
        self.width
    }

    /// Last height written, if any.
    #[must_use]
    pub fn height(&self) -> Option<f64> {
        self.height
    }

    /// Width as a CSS length such as `"220px"`.
    #[must_use]
    pub fn css_width(&self) -> Option<String> {
        self.width.map(px)
    }

    /// Height as a CSS length such as `"100px"`.
    #[must_use]
    pub fn css_height(&self) -> Option<String> {
        self.height.map(px)
    }

    /// Number of individual width/height writes.
    #[must_use]
    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl StyleTarget for InlineStyle {
    fn set_width(&mut self, px: f64) {
        self.width = Some(px);
        self.writes += 1;
    }

    fn set_height(&mut self, px: f64) {
        self.height = Some(px);
        self.writes += 1;
    }
}

fn px(value: f64) -> String {
    format!("{value}px")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn css_lengths() {
        let mut style = InlineStyle::new();
        assert_eq!(style.css_width(), None);

        style.set_width(220.0);
        style.set_height(12.5);
        assert_eq!(style.css_width().as_deref(), Some("220px"));
        assert_eq!(style.css_height().as_deref(), Some("12.5px"));
        assert_eq!(style.writes(), 2);
    }
}
