//! Path segments — connected runs of on-curve and off-curve points.
//!
//! A segment stores its geometry as a point sequence rather than a command
//! list: each point is either *on-curve* (the path passes through it) or
//! *off-curve* (a Bezier control point). Runs of off-curve points between two
//! on-curve points determine the curve degree:
//!
//! - 0 off-curve points — straight line
//! - 1 off-curve point — quadratic Bezier
//! - 2 off-curve points — cubic Bezier
//!
//! Longer runs are invalid and rejected at construction. Segments also obey
//! two structural rules that keep the implicit closing edge well-defined:
//! the first and last points are always on-curve.

use crate::basics::{Rect, AREA_EPSILON, VERTEX_DIST_EPSILON};
use crate::command::DrawCommand;
use crate::error::{Error, Result};
use crate::matrix::Matrix;
use crate::vector::Vector;

// ============================================================================
// SegmentPoint
// ============================================================================

/// A point in a segment: a position plus the off-curve flag.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SegmentPoint {
    pub pos: Vector,
    pub off_curve: bool,
}

impl SegmentPoint {
    /// An on-curve point — the path passes through it.
    pub fn on(pos: Vector) -> Self {
        Self {
            pos,
            off_curve: false,
        }
    }

    /// An off-curve (control) point — shapes a curve without lying on it.
    pub fn ctrl(pos: Vector) -> Self {
        Self {
            pos,
            off_curve: true,
        }
    }
}

// ============================================================================
// Orientation
// ============================================================================

/// Rotational sense of a closed segment boundary, in screen coordinates
/// (+y down).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Clockwise,
    Counterclockwise,
    /// Zero signed area: fewer than three on-curve points, collinear
    /// points, or exactly cancelling loops. A valid, just unoriented,
    /// geometric state — not an error.
    Degenerate,
}

// ============================================================================
// CurveRun
// ============================================================================

/// One interpreted run between consecutive on-curve points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CurveRun {
    Line {
        from: Vector,
        to: Vector,
    },
    Quadratic {
        from: Vector,
        ctrl: Vector,
        to: Vector,
    },
    Cubic {
        from: Vector,
        ctrl1: Vector,
        ctrl2: Vector,
        to: Vector,
    },
}

impl CurveRun {
    /// Starting on-curve point of the run.
    pub fn start(&self) -> Vector {
        match *self {
            CurveRun::Line { from, .. }
            | CurveRun::Quadratic { from, .. }
            | CurveRun::Cubic { from, .. } => from,
        }
    }

    /// Ending on-curve point of the run.
    pub fn end(&self) -> Vector {
        match *self {
            CurveRun::Line { to, .. }
            | CurveRun::Quadratic { to, .. }
            | CurveRun::Cubic { to, .. } => to,
        }
    }
}

// ============================================================================
// Segment
// ============================================================================

/// One connected, possibly closed sub-path.
///
/// Built once from a command stream or a point list, then immutable; the
/// derived operations ([`reverse`](Segment::reverse),
/// [`transform`](Segment::transform)) produce new segments.
///
/// A closed segment implicitly joins its last on-curve point back to its
/// first with a straight edge. Stroking draws that edge only when the
/// segment is closed; filling treats *every* segment as closed — that rule
/// is enforced at the rendering backend boundary, which uses
/// [`first_on_curve`](Segment::first_on_curve) and
/// [`last_on_curve`](Segment::last_on_curve) to synthesize the edge.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "SegmentData"))]
pub struct Segment {
    points: Vec<SegmentPoint>,
    closed: bool,
}

/// Mirror of [`Segment`]'s serialized form; deserialization funnels
/// through [`Segment::from_points`] so the construction invariants hold
/// for loaded data too.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct SegmentData {
    points: Vec<SegmentPoint>,
    closed: bool,
}

#[cfg(feature = "serde")]
impl TryFrom<SegmentData> for Segment {
    type Error = Error;

    fn try_from(data: SegmentData) -> Result<Segment> {
        Segment::from_points(data.points, data.closed)
    }
}

impl Segment {
    // ---------------------------------------------------------------
    // Construction
    // ---------------------------------------------------------------

    /// Build a segment directly from points.
    ///
    /// Fails with [`Error::InvalidCommandSequence`] when the list is empty,
    /// does not start and end on-curve, or contains a run of more than two
    /// consecutive off-curve points.
    pub fn from_points(points: Vec<SegmentPoint>, closed: bool) -> Result<Self> {
        validate_points(&points)?;
        Ok(Self { points, closed })
    }

    /// Build a segment from a draw-command stream.
    ///
    /// The stream must start with `MoveTo`; `LineTo` appends one on-curve
    /// point, `CurveTo` appends two off-curve points and one on-curve
    /// point, and `Close` marks the segment closed and must be the last
    /// command. Fails with [`Error::InvalidCommandSequence`] otherwise.
    pub fn from_commands(commands: &[DrawCommand]) -> Result<Self> {
        let mut iter = commands.iter();
        let mut points = match iter.next() {
            Some(&DrawCommand::MoveTo(p)) => vec![SegmentPoint::on(p)],
            Some(cmd) => {
                return Err(Error::invalid_commands(format!(
                    "segment must start with MoveTo, got {cmd:?}"
                )))
            }
            None => return Err(Error::invalid_commands("empty command sequence")),
        };

        let mut closed = false;
        for cmd in iter {
            if closed {
                return Err(Error::invalid_commands(format!(
                    "command {cmd:?} after Close; Close terminates the segment"
                )));
            }
            match *cmd {
                DrawCommand::MoveTo(_) => {
                    return Err(Error::invalid_commands(
                        "MoveTo may only start a segment",
                    ))
                }
                DrawCommand::LineTo(p) => points.push(SegmentPoint::on(p)),
                DrawCommand::CurveTo(c1, c2, p) => {
                    points.push(SegmentPoint::ctrl(c1));
                    points.push(SegmentPoint::ctrl(c2));
                    points.push(SegmentPoint::on(p));
                }
                DrawCommand::Close => closed = true,
            }
        }

        // The command grammar cannot produce an invalid point list, but the
        // invariant is cheap to recheck and guards future edits.
        Self::from_points(points, closed)
    }

    // ---------------------------------------------------------------
    // Accessors
    // ---------------------------------------------------------------

    pub fn points(&self) -> &[SegmentPoint] {
        &self.points
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Number of points (on- and off-curve). Always at least one.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Segments are never empty; provided for clippy symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// The first on-curve point. Start of the implicit closing edge's
    /// destination when filling or closing.
    pub fn first_on_curve(&self) -> Vector {
        self.points[0].pos
    }

    /// The last on-curve point — where the implicit closing edge starts.
    pub fn last_on_curve(&self) -> Vector {
        self.points[self.points.len() - 1].pos
    }

    // ---------------------------------------------------------------
    // Decomposition
    // ---------------------------------------------------------------

    /// Decompose into draw commands; the inverse of
    /// [`from_commands`](Segment::from_commands).
    ///
    /// Straight lines always come back as `LineTo`. Quadratic runs (only
    /// constructible via [`from_points`](Segment::from_points), since the
    /// command vocabulary has no quadratic variant) are degree-elevated to
    /// the equivalent cubic `CurveTo`.
    pub fn to_commands(&self) -> Vec<DrawCommand> {
        let mut cmds = Vec::with_capacity(self.points.len() + 1);
        cmds.push(DrawCommand::MoveTo(self.first_on_curve()));
        for run in self.runs_open() {
            match run {
                CurveRun::Line { to, .. } => cmds.push(DrawCommand::LineTo(to)),
                CurveRun::Quadratic { from, ctrl, to } => {
                    // Exact degree elevation: the cubic traces the same curve.
                    let c1 = from.lerp(ctrl, 2.0 / 3.0);
                    let c2 = to.lerp(ctrl, 2.0 / 3.0);
                    cmds.push(DrawCommand::CurveTo(c1, c2, to));
                }
                CurveRun::Cubic {
                    ctrl1, ctrl2, to, ..
                } => cmds.push(DrawCommand::CurveTo(ctrl1, ctrl2, to)),
            }
        }
        if self.closed {
            cmds.push(DrawCommand::Close);
        }
        cmds
    }

    /// Iterate the interpreted curve runs of the explicit path, excluding
    /// the implicit closing edge.
    pub fn runs_open(&self) -> CurveRuns<'_> {
        CurveRuns {
            segment: self,
            index: 0,
            closing_emitted: true,
        }
    }

    /// Iterate all curve runs. For a closed segment this includes the
    /// implicit closing line when the endpoints do not already coincide
    /// (within [`VERTEX_DIST_EPSILON`]).
    pub fn runs(&self) -> CurveRuns<'_> {
        let endpoints_coincide =
            self.first_on_curve().distance(self.last_on_curve()) <= VERTEX_DIST_EPSILON;
        CurveRuns {
            segment: self,
            index: 0,
            closing_emitted: !self.closed || endpoints_coincide,
        }
    }

    // ---------------------------------------------------------------
    // Geometry
    // ---------------------------------------------------------------

    /// A new segment with the point order reversed.
    ///
    /// Off-curve flags stay attached to their points, so a cubic run
    /// `(p0, c1, c2, p3)` becomes `(p3, c2, c1, p0)` — the same curve
    /// traced the other way. The `closed` flag is preserved.
    pub fn reverse(&self) -> Segment {
        let mut points = self.points.clone();
        points.reverse();
        Segment {
            points,
            closed: self.closed,
        }
    }

    /// Rotational sense of the boundary, from the shoelace signed area over
    /// the **on-curve points only** (control points are excluded, so the
    /// result is exact for polygons and an approximation for segments whose
    /// control points dominate the area).
    ///
    /// In screen coordinates (+y down) a positive signed area is clockwise.
    /// Returns [`Orientation::Degenerate`] when the area magnitude is at or
    /// below [`AREA_EPSILON`], including any segment with fewer than three
    /// on-curve points.
    pub fn orientation(&self) -> Orientation {
        let on: Vec<Vector> = self
            .points
            .iter()
            .filter(|p| !p.off_curve)
            .map(|p| p.pos)
            .collect();
        if on.len() < 3 {
            return Orientation::Degenerate;
        }
        let mut area = 0.0;
        for i in 0..on.len() {
            let a = on[i];
            let b = on[(i + 1) % on.len()];
            area += a.x * b.y - b.x * a.y;
        }
        area *= 0.5;
        if area > AREA_EPSILON {
            Orientation::Clockwise
        } else if area < -AREA_EPSILON {
            Orientation::Counterclockwise
        } else {
            Orientation::Degenerate
        }
    }

    /// Apply a matrix to every point, preserving flags and `closed`.
    pub fn transform(&self, m: &Matrix) -> Segment {
        Segment {
            points: self
                .points
                .iter()
                .map(|p| SegmentPoint {
                    pos: m.apply(p.pos),
                    off_curve: p.off_curve,
                })
                .collect(),
            closed: self.closed,
        }
    }

    /// Axis-aligned bounding box over all points, control points included.
    ///
    /// For curved segments this is the control-polygon box — a safe
    /// overestimate of the curve's true extent, not the tight Bezier bound.
    pub fn bounding_box(&self) -> Rect {
        let first = self.points[0].pos;
        let mut r = Rect::new(first.x, first.y, first.x, first.y);
        for p in &self.points[1..] {
            r.x1 = r.x1.min(p.pos.x);
            r.y1 = r.y1.min(p.pos.y);
            r.x2 = r.x2.max(p.pos.x);
            r.y2 = r.y2.max(p.pos.y);
        }
        r
    }
}

fn validate_points(points: &[SegmentPoint]) -> Result<()> {
    let first = points
        .first()
        .ok_or_else(|| Error::invalid_commands("segment must have at least one point"))?;
    if first.off_curve {
        return Err(Error::invalid_commands(
            "segment must start with an on-curve point",
        ));
    }
    if points[points.len() - 1].off_curve {
        return Err(Error::invalid_commands(
            "segment must end with an on-curve point",
        ));
    }
    let mut run = 0usize;
    for p in points {
        if p.off_curve {
            run += 1;
            if run > 2 {
                return Err(Error::invalid_commands(
                    "more than two consecutive off-curve points",
                ));
            }
        } else {
            run = 0;
        }
    }
    Ok(())
}

// ============================================================================
// CurveRuns iterator
// ============================================================================

/// Iterator over a segment's interpreted curve runs.
pub struct CurveRuns<'a> {
    segment: &'a Segment,
    index: usize,
    closing_emitted: bool,
}

impl Iterator for CurveRuns<'_> {
    type Item = CurveRun;

    fn next(&mut self) -> Option<CurveRun> {
        let pts = &self.segment.points;
        if self.index + 1 >= pts.len() {
            if !self.closing_emitted {
                self.closing_emitted = true;
                return Some(CurveRun::Line {
                    from: self.segment.last_on_curve(),
                    to: self.segment.first_on_curve(),
                });
            }
            return None;
        }

        let from = pts[self.index].pos;
        // Count the off-curve run after the current on-curve point; the
        // construction invariant caps it at two.
        if !pts[self.index + 1].off_curve {
            self.index += 1;
            return Some(CurveRun::Line {
                from,
                to: pts[self.index].pos,
            });
        }
        if !pts[self.index + 2].off_curve {
            let run = CurveRun::Quadratic {
                from,
                ctrl: pts[self.index + 1].pos,
                to: pts[self.index + 2].pos,
            };
            self.index += 2;
            return Some(run);
        }
        let run = CurveRun::Cubic {
            from,
            ctrl1: pts[self.index + 1].pos,
            ctrl2: pts[self.index + 2].pos,
            to: pts[self.index + 3].pos,
        };
        self.index += 3;
        Some(run)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn v(x: f64, y: f64) -> Vector {
        Vector::new(x, y)
    }

    fn unit_square_commands() -> Vec<DrawCommand> {
        vec![
            DrawCommand::MoveTo(v(0.0, 0.0)),
            DrawCommand::LineTo(v(1.0, 0.0)),
            DrawCommand::LineTo(v(1.0, 1.0)),
            DrawCommand::LineTo(v(0.0, 1.0)),
            DrawCommand::Close,
        ]
    }

    #[test]
    fn test_from_commands_square() {
        let s = Segment::from_commands(&unit_square_commands()).unwrap();
        assert!(s.is_closed());
        assert_eq!(s.len(), 4);
        assert!(s.points().iter().all(|p| !p.off_curve));
        assert_eq!(s.first_on_curve(), v(0.0, 0.0));
        assert_eq!(s.last_on_curve(), v(0.0, 1.0));
    }

    #[test]
    fn test_from_commands_requires_move_to() {
        let err = Segment::from_commands(&[DrawCommand::LineTo(v(1.0, 1.0))]).unwrap_err();
        assert!(matches!(err, Error::InvalidCommandSequence { .. }));

        let err = Segment::from_commands(&[]).unwrap_err();
        assert!(matches!(err, Error::InvalidCommandSequence { .. }));
    }

    #[test]
    fn test_from_commands_rejects_drawing_after_close() {
        let err = Segment::from_commands(&[
            DrawCommand::MoveTo(v(0.0, 0.0)),
            DrawCommand::LineTo(v(1.0, 0.0)),
            DrawCommand::Close,
            DrawCommand::LineTo(v(2.0, 0.0)),
        ])
        .unwrap_err();
        assert!(matches!(err, Error::InvalidCommandSequence { .. }));
    }

    #[test]
    fn test_from_commands_rejects_second_move_to() {
        let err = Segment::from_commands(&[
            DrawCommand::MoveTo(v(0.0, 0.0)),
            DrawCommand::MoveTo(v(1.0, 0.0)),
        ])
        .unwrap_err();
        assert!(matches!(err, Error::InvalidCommandSequence { .. }));
    }

    #[test]
    fn test_from_points_rejects_long_off_curve_run() {
        let err = Segment::from_points(
            vec![
                SegmentPoint::on(v(0.0, 0.0)),
                SegmentPoint::ctrl(v(1.0, 0.0)),
                SegmentPoint::ctrl(v(2.0, 0.0)),
                SegmentPoint::ctrl(v(3.0, 0.0)),
                SegmentPoint::on(v(4.0, 0.0)),
            ],
            false,
        )
        .unwrap_err();
        assert!(matches!(err, Error::InvalidCommandSequence { .. }));
    }

    #[test]
    fn test_from_points_rejects_off_curve_endpoints() {
        assert!(Segment::from_points(
            vec![SegmentPoint::ctrl(v(0.0, 0.0)), SegmentPoint::on(v(1.0, 0.0))],
            false
        )
        .is_err());
        assert!(Segment::from_points(
            vec![SegmentPoint::on(v(0.0, 0.0)), SegmentPoint::ctrl(v(1.0, 0.0))],
            false
        )
        .is_err());
        assert!(Segment::from_points(vec![], false).is_err());
    }

    #[test]
    fn test_single_point_segment() {
        let s = Segment::from_commands(&[DrawCommand::MoveTo(v(5.0, 5.0))]).unwrap();
        assert_eq!(s.len(), 1);
        assert_eq!(s.runs().count(), 0);
        assert_eq!(s.orientation(), Orientation::Degenerate);
        assert_eq!(s.bounding_box(), Rect::new(5.0, 5.0, 5.0, 5.0));
    }

    #[test]
    fn test_command_roundtrip() {
        let cmds = vec![
            DrawCommand::MoveTo(v(0.0, 0.0)),
            DrawCommand::LineTo(v(10.0, 0.0)),
            DrawCommand::CurveTo(v(12.0, 3.0), v(12.0, 7.0), v(10.0, 10.0)),
            DrawCommand::LineTo(v(0.0, 10.0)),
            DrawCommand::Close,
        ];
        let s = Segment::from_commands(&cmds).unwrap();
        assert_eq!(s.to_commands(), cmds);
    }

    #[test]
    fn test_command_roundtrip_open() {
        let cmds = vec![
            DrawCommand::MoveTo(v(1.0, 2.0)),
            DrawCommand::CurveTo(v(2.0, 2.0), v(3.0, 2.0), v(4.0, 2.0)),
        ];
        let s = Segment::from_commands(&cmds).unwrap();
        assert!(!s.is_closed());
        assert_eq!(s.to_commands(), cmds);
    }

    #[test]
    fn test_quadratic_run_elevates_to_cubic() {
        let s = Segment::from_points(
            vec![
                SegmentPoint::on(v(0.0, 0.0)),
                SegmentPoint::ctrl(v(3.0, 6.0)),
                SegmentPoint::on(v(6.0, 0.0)),
            ],
            false,
        )
        .unwrap();
        let cmds = s.to_commands();
        assert_eq!(cmds.len(), 2);
        match cmds[1] {
            DrawCommand::CurveTo(c1, c2, to) => {
                // Elevated control points sit 2/3 of the way to the
                // quadratic control point.
                assert!((c1.x - 2.0).abs() < 1e-12 && (c1.y - 4.0).abs() < 1e-12);
                assert!((c2.x - 4.0).abs() < 1e-12 && (c2.y - 4.0).abs() < 1e-12);
                assert_eq!(to, v(6.0, 0.0));
            }
            ref other => panic!("expected CurveTo, got {other:?}"),
        }
    }

    #[test]
    fn test_runs_interpretation() {
        let s = Segment::from_points(
            vec![
                SegmentPoint::on(v(0.0, 0.0)),
                SegmentPoint::on(v(1.0, 0.0)),
                SegmentPoint::ctrl(v(2.0, 0.0)),
                SegmentPoint::on(v(3.0, 0.0)),
                SegmentPoint::ctrl(v(4.0, 0.0)),
                SegmentPoint::ctrl(v(5.0, 0.0)),
                SegmentPoint::on(v(6.0, 0.0)),
            ],
            false,
        )
        .unwrap();
        let runs: Vec<CurveRun> = s.runs().collect();
        assert_eq!(runs.len(), 3);
        assert!(matches!(runs[0], CurveRun::Line { .. }));
        assert!(matches!(runs[1], CurveRun::Quadratic { .. }));
        assert!(matches!(runs[2], CurveRun::Cubic { .. }));
        // Runs chain: each starts where the previous ended.
        assert_eq!(runs[0].end(), runs[1].start());
        assert_eq!(runs[1].end(), runs[2].start());
    }

    #[test]
    fn test_runs_include_closing_edge() {
        let s = Segment::from_commands(&unit_square_commands()).unwrap();
        let open: Vec<CurveRun> = s.runs_open().collect();
        let all: Vec<CurveRun> = s.runs().collect();
        assert_eq!(open.len(), 3);
        assert_eq!(all.len(), 4);
        assert_eq!(
            all[3],
            CurveRun::Line {
                from: v(0.0, 1.0),
                to: v(0.0, 0.0)
            }
        );
    }

    #[test]
    fn test_runs_skip_degenerate_closing_edge() {
        // Last on-curve point already coincides with the first.
        let s = Segment::from_commands(&[
            DrawCommand::MoveTo(v(0.0, 0.0)),
            DrawCommand::LineTo(v(1.0, 0.0)),
            DrawCommand::LineTo(v(0.0, 0.0)),
            DrawCommand::Close,
        ])
        .unwrap();
        assert_eq!(s.runs().count(), 2);
    }

    #[test]
    fn test_reverse_involution() {
        let s = Segment::from_commands(&[
            DrawCommand::MoveTo(v(0.0, 0.0)),
            DrawCommand::CurveTo(v(1.0, 1.0), v(2.0, -1.0), v(3.0, 0.0)),
            DrawCommand::LineTo(v(4.0, 4.0)),
            DrawCommand::Close,
        ])
        .unwrap();
        assert_eq!(s.reverse().reverse(), s);
    }

    #[test]
    fn test_reverse_flips_cubic_run_order() {
        let s = Segment::from_commands(&[
            DrawCommand::MoveTo(v(0.0, 0.0)),
            DrawCommand::CurveTo(v(1.0, 1.0), v(2.0, -1.0), v(3.0, 0.0)),
        ])
        .unwrap();
        let r = s.reverse();
        // (p0, c1, c2, p3) reversed is (p3, c2, c1, p0); flags travel with
        // their points.
        assert_eq!(r.points()[0], SegmentPoint::on(v(3.0, 0.0)));
        assert_eq!(r.points()[1], SegmentPoint::ctrl(v(2.0, -1.0)));
        assert_eq!(r.points()[2], SegmentPoint::ctrl(v(1.0, 1.0)));
        assert_eq!(r.points()[3], SegmentPoint::on(v(0.0, 0.0)));
        assert_eq!(r.is_closed(), s.is_closed());
    }

    #[test]
    fn test_orientation_screen_coordinates() {
        // (0,0) -> (1,0) -> (1,1) -> (0,1) is clockwise when +y points down.
        let s = Segment::from_commands(&unit_square_commands()).unwrap();
        assert_eq!(s.orientation(), Orientation::Clockwise);
        assert_eq!(s.reverse().orientation(), Orientation::Counterclockwise);
    }

    #[test]
    fn test_orientation_degenerate_collinear() {
        let s = Segment::from_commands(&[
            DrawCommand::MoveTo(v(0.0, 0.0)),
            DrawCommand::LineTo(v(1.0, 1.0)),
            DrawCommand::LineTo(v(2.0, 2.0)),
            DrawCommand::Close,
        ])
        .unwrap();
        assert_eq!(s.orientation(), Orientation::Degenerate);
    }

    #[test]
    fn test_orientation_ignores_control_points() {
        // Control points far outside the on-curve triangle must not affect
        // the computed winding.
        let s = Segment::from_points(
            vec![
                SegmentPoint::on(v(0.0, 0.0)),
                SegmentPoint::on(v(10.0, 0.0)),
                SegmentPoint::ctrl(v(1000.0, -1000.0)),
                SegmentPoint::ctrl(v(-1000.0, -1000.0)),
                SegmentPoint::on(v(5.0, 10.0)),
            ],
            true,
        )
        .unwrap();
        assert_eq!(s.orientation(), Orientation::Clockwise);
    }

    #[test]
    fn test_transform_preserves_flags_and_closed() {
        let s = Segment::from_commands(&[
            DrawCommand::MoveTo(v(0.0, 0.0)),
            DrawCommand::CurveTo(v(1.0, 1.0), v(2.0, 1.0), v(3.0, 0.0)),
            DrawCommand::Close,
        ])
        .unwrap();
        let t = s.transform(&Matrix::translation(v(10.0, 20.0)));
        assert!(t.is_closed());
        assert_eq!(t.points()[1], SegmentPoint::ctrl(v(11.0, 21.0)));
        assert_eq!(t.first_on_curve(), v(10.0, 20.0));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_deserialize_enforces_invariants() {
        // An empty point list must not deserialize.
        assert!(serde_json::from_str::<Segment>(r#"{"points":[],"closed":false}"#).is_err());

        // Neither must a run of three consecutive off-curve points, which
        // from_points rejects on the same data.
        let long_run = r#"{
            "points": [
                {"pos": {"x": 0.0, "y": 0.0}, "off_curve": false},
                {"pos": {"x": 1.0, "y": 0.0}, "off_curve": true},
                {"pos": {"x": 2.0, "y": 0.0}, "off_curve": true},
                {"pos": {"x": 3.0, "y": 0.0}, "off_curve": true},
                {"pos": {"x": 4.0, "y": 0.0}, "off_curve": false}
            ],
            "closed": false
        }"#;
        assert!(serde_json::from_str::<Segment>(long_run).is_err());

        // Valid segments still round-trip.
        let s = Segment::from_commands(&[
            DrawCommand::MoveTo(v(0.0, 0.0)),
            DrawCommand::CurveTo(v(1.0, 1.0), v(2.0, 1.0), v(3.0, 0.0)),
            DrawCommand::Close,
        ])
        .unwrap();
        let json = serde_json::to_string(&s).unwrap();
        assert_eq!(serde_json::from_str::<Segment>(&json).unwrap(), s);
    }

    #[test]
    fn test_bounding_box_includes_control_points() {
        let s = Segment::from_commands(&[
            DrawCommand::MoveTo(v(0.0, 0.0)),
            DrawCommand::CurveTo(v(5.0, -10.0), v(10.0, -10.0), v(15.0, 0.0)),
        ])
        .unwrap();
        // Control-polygon box, not the tight curve bound.
        assert_eq!(s.bounding_box(), Rect::new(0.0, -10.0, 15.0, 0.0));
    }
}
