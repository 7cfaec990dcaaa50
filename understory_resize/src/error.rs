// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors surfaced by the resize controller.

use core::fmt;

/// Error returned when a pointer event carries no usable contact point.
///
/// Touch events whose `touches` and `changed_touches` lists are both empty
/// produce this error.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub struct InvalidEventError;

impl fmt::Display for InvalidEventError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("pointer event has no contact point")
    }
}

impl core::error::Error for InvalidEventError {}

/// Error returned when a resize would leave the element with a
/// non-positive or non-finite size or aspect ratio.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct DegenerateGeometryError {
    /// The width the resize would have produced.
    pub width: f64,
    /// The height the resize would have produced.
    pub height: f64,
    /// The aspect ratio the resize would have produced.
    pub aspect_ratio: f64,
}

impl fmt::Display for DegenerateGeometryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "geometry {}x{} with aspect ratio {} is degenerate",
            self.width, self.height, self.aspect_ratio
        )
    }
}

impl core::error::Error for DegenerateGeometryError {}

/// Any error produced while driving a resize gesture.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum ResizeError {
    /// The event had no contact point.
    InvalidEvent(InvalidEventError),
    /// The resize was rejected to keep the geometry well formed.
    DegenerateGeometry(DegenerateGeometryError),
}

impl fmt::Display for ResizeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidEvent(err) => fmt::Display::fmt(err, f),
            Self::DegenerateGeometry(err) => fmt::Display::fmt(err, f),
        }
    }
}

impl core::error::Error for ResizeError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            Self::InvalidEvent(err) => Some(err),
            Self::DegenerateGeometry(err) => Some(err),
        }
    }
}

impl From<InvalidEventError> for ResizeError {
    fn from(err: InvalidEventError) -> Self {
        Self::InvalidEvent(err)
    }
}

impl From<DegenerateGeometryError> for ResizeError {
    fn from(err: DegenerateGeometryError) -> Self {
        Self::DegenerateGeometry(err)
    }
}
