//! Numeric primitives shared by the geometry code.
//!
//! Coordinates are plain `glam::DVec2` values in the shape's local box
//! (origin top-left, x right, y down). Units that appear in the source
//! format (hundred-thousandths, sixty-thousandths of a degree, EMU) get
//! small helpers here so conversions happen in one place.

use std::fmt;

use glam::DVec2;

use crate::render::defaults::ANGLE_UNIT;

/// A point in the shape's local box.
pub type Point = DVec2;

/// Construct a point.
#[inline]
pub fn pt(x: f64, y: f64) -> Point {
    DVec2::new(x, y)
}

/// Error type for invalid numeric values
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NumericError {
    /// Value is NaN
    NaN,
    /// Value is infinite
    Infinite,
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericError::NaN => write!(f, "value is NaN"),
            NumericError::Infinite => write!(f, "value is infinite"),
        }
    }
}

impl std::error::Error for NumericError {}

/// Reject NaN and infinities.
#[inline]
pub fn finite(val: f64) -> Result<f64, NumericError> {
    if val.is_nan() {
        Err(NumericError::NaN)
    } else if val.is_infinite() {
        Err(NumericError::Infinite)
    } else {
        Ok(val)
    }
}

/// Angle in degrees, clockwise from the positive x axis (y points down).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Default)]
#[repr(transparent)]
pub struct Angle(pub f64);

impl Angle {
    /// From the source format's 60000ths of a degree.
    #[inline]
    pub fn from_sixty_thousandths(v: f64) -> Angle {
        Angle(v / ANGLE_UNIT)
    }

    #[inline]
    pub fn to_degrees(self) -> f64 {
        self.0
    }

    #[inline]
    pub fn to_radians(self) -> f64 {
        self.0.to_radians()
    }
}

/// Axis-aligned bounding box.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub min: Point,
    pub max: Point,
}

impl Default for Bounds {
    fn default() -> Self {
        Self::new()
    }
}

impl Bounds {
    /// An empty box that any `include` call will replace.
    pub fn new() -> Self {
        Self {
            min: DVec2::splat(f64::INFINITY),
            max: DVec2::splat(f64::NEG_INFINITY),
        }
    }

    pub fn from_rect(x: f64, y: f64, w: f64, h: f64) -> Self {
        let mut b = Self::new();
        b.include(pt(x, y));
        b.include(pt(x + w, y + h));
        b
    }

    pub fn is_empty(&self) -> bool {
        self.min.x > self.max.x || self.min.y > self.max.y
    }

    pub fn include(&mut self, p: Point) {
        if !p.is_finite() {
            return;
        }
        self.min = self.min.min(p);
        self.max = self.max.max(p);
    }

    pub fn union(&mut self, other: &Bounds) {
        if other.is_empty() {
            return;
        }
        self.include(other.min);
        self.include(other.max);
    }

    pub fn width(&self) -> f64 {
        if self.is_empty() { 0.0 } else { self.max.x - self.min.x }
    }

    pub fn height(&self) -> f64 {
        if self.is_empty() { 0.0 } else { self.max.y - self.min.y }
    }
}

/// `a / b`, or `0.0` when the quotient would not be finite.
///
/// Shape formulas divide by box dimensions and guide values that are zero
/// for degenerate boxes.
#[inline]
pub fn ratio(a: f64, b: f64) -> f64 {
    let q = a / b;
    if q.is_finite() { q } else { 0.0 }
}
