//! Draw commands — the construction-time path vocabulary.
//!
//! Commands exist only at the boundaries: segments are built *from* a
//! command stream and decompose back *to* one. Inside a [`crate::Segment`]
//! the geometry is stored as on-curve/off-curve points instead.

use crate::vector::Vector;

/// A single path construction command.
///
/// `MoveTo` starts a new segment, `LineTo` appends one on-curve point,
/// `CurveTo` appends two off-curve control points followed by one on-curve
/// point, and `Close` marks the segment closed and terminates it.
///
/// With the `serde` feature enabled, command streams round-trip losslessly;
/// in particular a straight `LineTo` and a zero-curvature `CurveTo` remain
/// distinct variants.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DrawCommand {
    MoveTo(Vector),
    LineTo(Vector),
    CurveTo(Vector, Vector, Vector),
    Close,
}

impl DrawCommand {
    /// Returns `true` for commands that extend the current segment
    /// (`LineTo` and `CurveTo`).
    pub fn is_drawing(&self) -> bool {
        matches!(self, DrawCommand::LineTo(_) | DrawCommand::CurveTo(..))
    }

    /// The on-curve endpoint this command moves the pen to, if any.
    pub fn endpoint(&self) -> Option<Vector> {
        match *self {
            DrawCommand::MoveTo(p) | DrawCommand::LineTo(p) => Some(p),
            DrawCommand::CurveTo(_, _, p) => Some(p),
            DrawCommand::Close => None,
        }
    }
}
