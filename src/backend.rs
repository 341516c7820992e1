//! Rendering backend boundary.
//!
//! This crate produces geometry; turning it into pixels — rasterization,
//! compositing, colour handling, pattern sampling — happens behind the
//! [`RenderBackend`] trait. The types here describe everything the path
//! model needs to say about *how* to fill or stroke; what a paint source
//! actually is stays an associated type of the backend.
//!
//! Two cross-cutting rules are part of this contract rather than the
//! segment model:
//!
//! - **Filling always closes.** `fill` treats every segment as closed,
//!   synthesizing the edge from [`Segment::last_on_curve`] back to
//!   [`Segment::first_on_curve`] for open segments.
//! - **Stroking respects `closed`.** `stroke` draws only the explicit path
//!   of an open segment and additionally strokes the implicit closing edge
//!   of a closed one.
//!
//! [`Segment::last_on_curve`]: crate::Segment::last_on_curve
//! [`Segment::first_on_curve`]: crate::Segment::first_on_curve

use crate::path::Path;

/// Filling rule for overlapping or self-intersecting geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FillRule {
    #[default]
    NonZero,
    EvenOdd,
}

/// Shape drawn at the ends of an open stroked segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineCap {
    #[default]
    Butt,
    Square,
    Round,
}

/// Shape drawn where two stroked runs meet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineJoin {
    #[default]
    Miter,
    Round,
    Bevel,
}

/// How a pattern source behaves outside its natural bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Extend {
    #[default]
    None,
    Repeat,
    Reflect,
    Pad,
}

/// A colour with straight (non-premultiplied) alpha, components in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

impl Rgba {
    pub const fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    pub const fn opaque(r: f64, g: f64, b: f64) -> Self {
        Self::new(r, g, b, 1.0)
    }
}

impl Default for Rgba {
    /// Opaque black.
    fn default() -> Self {
        Self::opaque(0.0, 0.0, 0.0)
    }
}

/// A ready-made paint vocabulary for backends without their own source
/// model: a solid colour, or a backend-assigned pattern handle (gradient,
/// image) with its out-of-bounds [`Extend`] behaviour.
///
/// Backends with richer needs substitute any type via
/// [`RenderBackend::Paint`]; nothing in the path model inspects paints.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Paint {
    Solid(Rgba),
    Pattern { handle: u32, extend: Extend },
}

impl Default for Paint {
    fn default() -> Self {
        Paint::Solid(Rgba::default())
    }
}

/// A dash pattern: alternating on/off run lengths plus a phase offset into
/// the pattern.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DashPattern {
    pub lengths: Vec<f64>,
    pub phase: f64,
}

impl DashPattern {
    pub fn new(lengths: Vec<f64>, phase: f64) -> Self {
        Self { lengths, phase }
    }
}

/// Everything a backend needs to stroke a path.
#[derive(Debug, Clone, PartialEq)]
pub struct StrokeStyle {
    pub width: f64,
    pub cap: LineCap,
    pub join: LineJoin,
    pub miter_limit: f64,
    /// `None` strokes a solid line.
    pub dash: Option<DashPattern>,
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self {
            width: 1.0,
            cap: LineCap::default(),
            join: LineJoin::default(),
            miter_limit: 10.0,
            dash: None,
        }
    }
}

impl StrokeStyle {
    pub fn with_width(width: f64) -> Self {
        Self {
            width,
            ..Self::default()
        }
    }
}

/// The capability this crate consumes from a rasterizer/compositor.
///
/// `Paint` is whatever the backend understands as a source; the provided
/// [`Paint`] enum covers the common solid/pattern cases. Colour spaces and
/// pattern sampling are entirely the backend's business.
///
/// Backends keep a save/restore stack of transform and paint state. The
/// stack is the only stateful, order-sensitive part of the drawing model;
/// [`saved`](RenderBackend::saved) scopes it so that state is restored on
/// every exit path of the closure, including an early `return` via `?`.
pub trait RenderBackend {
    type Paint;

    /// Fill `path` under `rule`. Every segment is treated as closed,
    /// regardless of its `closed` flag.
    fn fill(&mut self, path: &Path, rule: FillRule, paint: &Self::Paint);

    /// Stroke `path`. The implicit closing edge is stroked only for
    /// segments whose `closed` flag is set.
    fn stroke(&mut self, path: &Path, style: &StrokeStyle, paint: &Self::Paint);

    /// Push a snapshot of the transform and paint state.
    fn save(&mut self);

    /// Pop the most recent snapshot. Unbalanced restores are a backend
    /// contract violation.
    fn restore(&mut self);

    /// Run `f` between a `save`/`restore` pair, restoring state however
    /// the closure exits.
    fn saved<R>(&mut self, f: impl FnOnce(&mut Self) -> R) -> R
    where
        Self: Sized,
    {
        self.save();
        let result = f(self);
        self.restore();
        result
    }
}

// ============================================================================
// Tests
// ============================================================================
