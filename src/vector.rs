//! 2D coordinate value type.
//!
//! `Vector` doubles as a point and a displacement. Coordinates follow the
//! screen convention used throughout this crate: +x points right, +y points
//! *down*, and positive angles therefore rotate clockwise on screen. This is
//! easy to invert accidentally when porting formulas from math-convention
//! sources; every angle-taking API in the crate sticks to this rule.

use std::ops::{Add, AddAssign, Div, Mul, MulAssign, Neg, Sub, SubAssign};

/// A 2D vector (or point) with `f64` components.
///
/// Immutable value type: all operations return new vectors. NaN and
/// infinity propagate per IEEE semantics and are not treated specially.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vector {
    pub x: f64,
    pub y: f64,
}

impl Vector {
    pub const ZERO: Vector = Vector { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Construct from polar coordinates.
    ///
    /// `angle` is in radians with 0 along +x; because +y points down,
    /// `from_polar(1.0, PI / 2.0)` is `(0, 1)` — straight down on screen.
    pub fn from_polar(distance: f64, angle: f64) -> Self {
        Self::new(distance * angle.cos(), distance * angle.sin())
    }

    /// Euclidean length.
    pub fn magnitude(&self) -> f64 {
        self.x.hypot(self.y)
    }

    /// Squared length; avoids the square root when only comparing.
    pub fn magnitude_squared(&self) -> f64 {
        self.x * self.x + self.y * self.y
    }

    /// The angle of this vector in radians (atan2 convention, screen
    /// coordinates: positive is clockwise from +x).
    pub fn angle(&self) -> f64 {
        self.y.atan2(self.x)
    }

    /// Scale by a scalar. Equivalent to `self * s`.
    pub fn scale(&self, s: f64) -> Vector {
        Vector::new(self.x * s, self.y * s)
    }

    /// Component-wise product.
    pub fn componentwise_mul(&self, other: Vector) -> Vector {
        Vector::new(self.x * other.x, self.y * other.y)
    }

    /// Dot product.
    pub fn dot(&self, other: Vector) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// 2D cross product (z component of the 3D cross product). The sign
    /// tells which side of `self` the other vector lies on.
    pub fn cross(&self, other: Vector) -> f64 {
        self.x * other.y - self.y * other.x
    }

    /// Distance to another point.
    pub fn distance(&self, other: Vector) -> f64 {
        (other - *self).magnitude()
    }

    /// Linear interpolation: `t = 0` gives `self`, `t = 1` gives `other`.
    pub fn lerp(&self, other: Vector, t: f64) -> Vector {
        Vector::new(
            self.x + (other.x - self.x) * t,
            self.y + (other.y - self.y) * t,
        )
    }
}

impl Add for Vector {
    type Output = Vector;
    fn add(self, rhs: Vector) -> Vector {
        Vector::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Vector {
    fn add_assign(&mut self, rhs: Vector) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub for Vector {
    type Output = Vector;
    fn sub(self, rhs: Vector) -> Vector {
        Vector::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl SubAssign for Vector {
    fn sub_assign(&mut self, rhs: Vector) {
        self.x -= rhs.x;
        self.y -= rhs.y;
    }
}

impl Neg for Vector {
    type Output = Vector;
    fn neg(self) -> Vector {
        Vector::new(-self.x, -self.y)
    }
}

impl Mul<f64> for Vector {
    type Output = Vector;
    fn mul(self, rhs: f64) -> Vector {
        self.scale(rhs)
    }
}

impl Mul<Vector> for f64 {
    type Output = Vector;
    fn mul(self, rhs: Vector) -> Vector {
        rhs.scale(self)
    }
}

impl MulAssign<f64> for Vector {
    fn mul_assign(&mut self, rhs: f64) {
        self.x *= rhs;
        self.y *= rhs;
    }
}

impl Div<f64> for Vector {
    type Output = Vector;
    fn div(self, rhs: f64) -> Vector {
        Vector::new(self.x / rhs, self.y / rhs)
    }
}

impl From<(f64, f64)> for Vector {
    fn from((x, y): (f64, f64)) -> Self {
        Vector::new(x, y)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::basics::PI;

    const EPS: f64 = 1e-12;

    #[test]
    fn test_add_sub() {
        let a = Vector::new(1.0, 2.0);
        let b = Vector::new(3.0, 5.0);
        assert_eq!(a + b, Vector::new(4.0, 7.0));
        assert_eq!(b - a, Vector::new(2.0, 3.0));
        assert_eq!(-a, Vector::new(-1.0, -2.0));
    }

    #[test]
    fn test_scalar_mul() {
        let v = Vector::new(2.0, -3.0);
        assert_eq!(v * 2.0, Vector::new(4.0, -6.0));
        assert_eq!(2.0 * v, Vector::new(4.0, -6.0));
        assert_eq!(v / 2.0, Vector::new(1.0, -1.5));
        assert_eq!(v.scale(0.5), Vector::new(1.0, -1.5));
    }

    #[test]
    fn test_componentwise_mul() {
        let a = Vector::new(2.0, 3.0);
        let b = Vector::new(4.0, -1.0);
        assert_eq!(a.componentwise_mul(b), Vector::new(8.0, -3.0));
    }

    #[test]
    fn test_magnitude() {
        let v = Vector::new(3.0, 4.0);
        assert!((v.magnitude() - 5.0).abs() < EPS);
        assert!((v.magnitude_squared() - 25.0).abs() < EPS);
    }

    #[test]
    fn test_from_polar_screen_convention() {
        // Positive angles rotate clockwise on screen (+y is down),
        // so a quarter turn from +x lands on +y.
        let v = Vector::from_polar(1.0, PI / 2.0);
        assert!(v.x.abs() < EPS);
        assert!((v.y - 1.0).abs() < EPS);

        let w = Vector::from_polar(2.0, 0.0);
        assert!((w.x - 2.0).abs() < EPS);
        assert!(w.y.abs() < EPS);
    }

    #[test]
    fn test_angle_roundtrip() {
        let a = PI / 3.0;
        let v = Vector::from_polar(5.0, a);
        assert!((v.angle() - a).abs() < EPS);
        assert!((v.magnitude() - 5.0).abs() < EPS);
    }

    #[test]
    fn test_dot_cross() {
        let a = Vector::new(1.0, 0.0);
        let b = Vector::new(0.0, 1.0);
        assert!(a.dot(b).abs() < EPS);
        assert!((a.cross(b) - 1.0).abs() < EPS);
        assert!((b.cross(a) + 1.0).abs() < EPS);
    }

    #[test]
    fn test_lerp_and_distance() {
        let a = Vector::new(0.0, 0.0);
        let b = Vector::new(10.0, 20.0);
        assert_eq!(a.lerp(b, 0.0), a);
        assert_eq!(a.lerp(b, 1.0), b);
        assert_eq!(a.lerp(b, 0.5), Vector::new(5.0, 10.0));
        assert!((Vector::new(3.0, 0.0).distance(Vector::new(0.0, 4.0)) - 5.0).abs() < EPS);
    }

    #[test]
    fn test_nan_propagates() {
        let v = Vector::new(f64::NAN, 1.0) + Vector::new(1.0, 1.0);
        assert!(v.x.is_nan());
        assert_eq!(v.y, 2.0);
    }
}
