//! Affine transformation matrix.
//!
//! 2D affine transformations: rotation, scaling, translation, and skewing,
//! composable and invertible. Unlike the geometry containers, matrices are
//! plain `Copy` values; transforming a path never mutates the path, it maps
//! a matrix over a copy of its points.

use crate::basics::is_equal_eps;
use crate::error::{Error, Result};
use crate::vector::Vector;

/// Determinants with absolute value at or below this are treated as zero;
/// inverting such a matrix fails with [`Error::SingularMatrix`].
pub const MATRIX_EPSILON: f64 = 1e-12;

/// Epsilon for matrix equality comparisons.
pub const AFFINE_EPSILON: f64 = 1e-14;

/// 2D affine transformation matrix.
///
/// Stores six components `[sx, shy, shx, sy, tx, ty]` representing:
///
/// ```text
///   | sx  shx tx |
///   | shy  sy ty |
///   |  0    0  1 |
/// ```
///
/// Application: `x' = x*sx + y*shx + tx`, `y' = x*shy + y*sy + ty`.
///
/// Composition order is a contract: `a.then(&b)` applies `a` first and `b`
/// second. Composition is associative but not commutative.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Matrix {
    pub sx: f64,
    pub shy: f64,
    pub shx: f64,
    pub sy: f64,
    pub tx: f64,
    pub ty: f64,
}

impl Matrix {
    // ====================================================================
    // Construction
    // ====================================================================

    /// Identity matrix — the identity element of [`Matrix::then`].
    pub fn identity() -> Self {
        Self {
            sx: 1.0,
            shy: 0.0,
            shx: 0.0,
            sy: 1.0,
            tx: 0.0,
            ty: 0.0,
        }
    }

    /// Custom matrix from six components.
    pub fn from_components(sx: f64, shy: f64, shx: f64, sy: f64, tx: f64, ty: f64) -> Self {
        Self {
            sx,
            shy,
            shx,
            sy,
            tx,
            ty,
        }
    }

    /// Translation matrix.
    pub fn translation(delta: Vector) -> Self {
        Self::from_components(1.0, 0.0, 0.0, 1.0, delta.x, delta.y)
    }

    /// Non-uniform scaling matrix.
    pub fn scaling(scale: Vector) -> Self {
        Self::from_components(scale.x, 0.0, 0.0, scale.y, 0.0, 0.0)
    }

    /// Uniform scaling matrix.
    pub fn scaling_uniform(s: f64) -> Self {
        Self::from_components(s, 0.0, 0.0, s, 0.0, 0.0)
    }

    /// Rotation matrix around the origin.
    ///
    /// `angle` is in radians; positive rotates clockwise on screen
    /// (+y down), matching [`Vector::from_polar`].
    pub fn rotation(angle: f64) -> Self {
        let (sa, ca) = angle.sin_cos();
        Self::from_components(ca, sa, -sa, ca, 0.0, 0.0)
    }

    /// Rotation around an arbitrary centre.
    ///
    /// Defined as `translation(-centre)` then `rotation(angle)` then
    /// `translation(centre)`; that order is part of the contract, since
    /// reversing it silently rotates around the wrong point.
    pub fn rotation_about(angle: f64, centre: Vector) -> Self {
        Self::translation(-centre)
            .then(&Self::rotation(angle))
            .then(&Self::translation(centre))
    }

    /// Skewing (shear) matrix; `x` and `y` are shear angles in radians.
    pub fn skewing(x: f64, y: f64) -> Self {
        Self::from_components(1.0, y.tan(), x.tan(), 1.0, 0.0, 0.0)
    }

    // ====================================================================
    // Composition and application
    // ====================================================================

    /// Composition: the returned matrix applies `self` first, `other`
    /// second.
    pub fn then(&self, other: &Matrix) -> Matrix {
        Matrix::from_components(
            self.sx * other.sx + self.shy * other.shx,
            self.sx * other.shy + self.shy * other.sy,
            self.shx * other.sx + self.sy * other.shx,
            self.shx * other.shy + self.sy * other.sy,
            self.tx * other.sx + self.ty * other.shx + other.tx,
            self.tx * other.shy + self.ty * other.sy + other.ty,
        )
    }

    /// Apply the transform to a point.
    #[inline]
    pub fn apply(&self, v: Vector) -> Vector {
        Vector::new(
            v.x * self.sx + v.y * self.shx + self.tx,
            v.x * self.shy + v.y * self.sy + self.ty,
        )
    }

    /// Apply only the linear (2x2) part, ignoring translation. Suitable for
    /// transforming displacement vectors rather than points.
    #[inline]
    pub fn apply_2x2(&self, v: Vector) -> Vector {
        Vector::new(v.x * self.sx + v.y * self.shx, v.x * self.shy + v.y * self.sy)
    }

    /// Inverse matrix.
    ///
    /// Fails with [`Error::SingularMatrix`] when `|determinant|` is at or
    /// below [`MATRIX_EPSILON`].
    pub fn invert(&self) -> Result<Matrix> {
        let det = self.determinant();
        if det.abs() <= MATRIX_EPSILON {
            return Err(Error::SingularMatrix);
        }
        let d = 1.0 / det;
        let sx = self.sy * d;
        let sy = self.sx * d;
        let shy = -self.shy * d;
        let shx = -self.shx * d;
        Ok(Matrix::from_components(
            sx,
            shy,
            shx,
            sy,
            -self.tx * sx - self.ty * shx,
            -self.tx * shy - self.ty * sy,
        ))
    }

    // ====================================================================
    // Auxiliary
    // ====================================================================

    /// Determinant of the 2x2 portion.
    #[inline]
    pub fn determinant(&self) -> f64 {
        self.sx * self.sy - self.shy * self.shx
    }

    /// Check if this is an identity matrix within `epsilon`.
    pub fn is_identity(&self, epsilon: f64) -> bool {
        self.is_equal(&Matrix::identity(), epsilon)
    }

    /// Check componentwise equality within `epsilon`.
    pub fn is_equal(&self, m: &Matrix, epsilon: f64) -> bool {
        is_equal_eps(self.sx, m.sx, epsilon)
            && is_equal_eps(self.shy, m.shy, epsilon)
            && is_equal_eps(self.shx, m.shx, epsilon)
            && is_equal_eps(self.sy, m.sy, epsilon)
            && is_equal_eps(self.tx, m.tx, epsilon)
            && is_equal_eps(self.ty, m.ty, epsilon)
    }

    /// Average scale factor of the linear part.
    pub fn scale_factor(&self) -> f64 {
        let s = std::f64::consts::FRAC_1_SQRT_2;
        let x = s * self.sx + s * self.shx;
        let y = s * self.shy + s * self.sy;
        x.hypot(y)
    }

    /// The translation components.
    pub fn translation_part(&self) -> Vector {
        Vector::new(self.tx, self.ty)
    }
}

impl Default for Matrix {
    fn default() -> Self {
        Self::identity()
    }
}

impl PartialEq for Matrix {
    fn eq(&self, other: &Self) -> bool {
        self.is_equal(other, AFFINE_EPSILON)
    }
}

impl std::ops::Mul for Matrix {
    type Output = Matrix;

    /// `a * b` is `a.then(&b)`: apply `a` first, `b` second.
    fn mul(self, rhs: Matrix) -> Matrix {
        self.then(&rhs)
    }
}

// ============================================================================
// Tests
// ============================================================================
