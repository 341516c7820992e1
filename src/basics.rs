//! Foundation types and numeric utilities.
//!
//! Axis-aligned rectangles, angle conversions, and the approximate
//! floating-point comparison used by the rest of the crate.

pub const PI: f64 = std::f64::consts::PI;

/// Coinciding points maximal distance (epsilon).
pub const VERTEX_DIST_EPSILON: f64 = 1e-14;

/// Signed areas with absolute value at or below this are treated as zero
/// when classifying segment orientation.
pub const AREA_EPSILON: f64 = 1e-12;

/// Convert degrees to radians.
#[inline]
pub fn deg2rad(deg: f64) -> f64 {
    deg * PI / 180.0
}

/// Convert radians to degrees.
#[inline]
pub fn rad2deg(rad: f64) -> f64 {
    rad * 180.0 / PI
}

/// Compare two floating-point values for approximate equality.
#[inline]
pub fn is_equal_eps(v1: f64, v2: f64, epsilon: f64) -> bool {
    (v1 - v2).abs() <= epsilon
}

// ============================================================================
// Rect
// ============================================================================

/// An axis-aligned rectangle defined by two corner points.
///
/// `(x1, y1)` is the minimum corner and `(x2, y2)` the maximum corner once
/// normalized; constructors do not normalize automatically.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

impl Rect {
    pub fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// Construct from an origin corner and a size.
    pub fn from_origin_size(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self::new(x, y, x + width, y + height)
    }

    pub fn width(&self) -> f64 {
        self.x2 - self.x1
    }

    pub fn height(&self) -> f64 {
        self.y2 - self.y1
    }

    /// Swap corners as needed so that `x1 <= x2` and `y1 <= y2`.
    pub fn normalized(mut self) -> Self {
        if self.x1 > self.x2 {
            std::mem::swap(&mut self.x1, &mut self.x2);
        }
        if self.y1 > self.y2 {
            std::mem::swap(&mut self.y1, &mut self.y2);
        }
        self
    }

    /// Returns `true` if the rectangle is non-empty (`x1 <= x2`, `y1 <= y2`).
    pub fn is_valid(&self) -> bool {
        self.x1 <= self.x2 && self.y1 <= self.y2
    }

    /// Returns `true` if the point is inside the rectangle (borders included).
    pub fn hit_test(&self, x: f64, y: f64) -> bool {
        x >= self.x1 && x <= self.x2 && y >= self.y1 && y <= self.y2
    }

    /// Returns `true` if this rectangle overlaps `r`.
    pub fn overlaps(&self, r: &Rect) -> bool {
        !(r.x1 > self.x2 || r.x2 < self.x1 || r.y1 > self.y2 || r.y2 < self.y1)
    }

    /// The smallest rectangle containing both `self` and `r`.
    pub fn union(&self, r: &Rect) -> Rect {
        Rect::new(
            self.x1.min(r.x1),
            self.y1.min(r.y1),
            self.x2.max(r.x2),
            self.y2.max(r.y2),
        )
    }

    /// The overlap of `self` and `r`. The result may be invalid when the
    /// rectangles are disjoint; check with [`Rect::is_valid`].
    pub fn intersect(&self, r: &Rect) -> Rect {
        Rect::new(
            self.x1.max(r.x1),
            self.y1.max(r.y1),
            self.x2.min(r.x2),
            self.y2.min(r.y2),
        )
    }
}

// ============================================================================
// Tests
// ============================================================================
