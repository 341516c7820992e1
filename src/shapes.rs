//! Derived-shape constructors.
//!
//! Rectangles, circles, ellipses, rounded rectangles, and arc command
//! generators, all expressed in terms of the segment primitives. Curved
//! shapes approximate circular arcs with cubic Bezier curves; sweeps larger
//! than 90 degrees are split into quarter-circle (or smaller) sub-arcs.

use log::debug;

use crate::basics::{Rect, PI};
use crate::command::DrawCommand;
use crate::error::{Error, Result};
use crate::matrix::Matrix;
use crate::path::Path;
use crate::segment::{Segment, SegmentPoint};
use crate::vector::Vector;

/// Control-point offset factor for a 90-degree cubic Bezier circular arc:
/// `4/3 * (sqrt(2) - 1)`.
pub const KAPPA: f64 = 0.552_284_749_830_793_4;

/// Maximum radial deviation of the cubic approximation, as a fraction of
/// the radius. The analytic worst case for a 90-degree arc is about
/// 2.7e-4; this constant sits just above it. An accepted approximation,
/// not a bug — callers doing exact boolean geometry should account for it.
pub const CIRCLE_ERROR_BOUND: f64 = 2.8e-4;

/// Residual sweep below this is folded into the final sub-arc instead of
/// emitting a sliver curve.
const ARC_ANGLE_EPSILON: f64 = 0.01;

const TWO_PI: f64 = 2.0 * PI;

// ============================================================================
// Builders
// ============================================================================

/// A rectangle as a single closed 4-point segment.
///
/// Corners are emitted clockwise in screen coordinates (+y down), starting
/// at `(x1, y1)`; that winding is part of the contract, since compound
/// shapes with holes rely on it.
pub fn rectangle(rect: Rect) -> Path {
    let r = rect.normalized();
    let segment = Segment::from_points(
        vec![
            SegmentPoint::on(Vector::new(r.x1, r.y1)),
            SegmentPoint::on(Vector::new(r.x2, r.y1)),
            SegmentPoint::on(Vector::new(r.x2, r.y2)),
            SegmentPoint::on(Vector::new(r.x1, r.y2)),
        ],
        true,
    )
    .expect("rectangle points satisfy the segment invariants");
    Path::from(segment)
}

/// A full circle as one closed segment of four cubic quarter arcs.
///
/// Uses the [`KAPPA`] control offset; the radial error stays within
/// [`CIRCLE_ERROR_BOUND`] of the radius. The boundary winds clockwise in
/// screen coordinates, matching [`rectangle`]. Fails with
/// [`Error::DegenerateGeometry`] when `radius` is zero or negative.
pub fn circle(centre: Vector, radius: f64) -> Result<Path> {
    if radius <= 0.0 {
        return Err(Error::degenerate(format!(
            "circle radius must be positive, got {radius}"
        )));
    }
    let (cx, cy) = (centre.x, centre.y);
    let r = radius;
    let k = KAPPA * radius;
    let start = Vector::new(cx + r, cy);
    let segment = Segment::from_points(
        vec![
            SegmentPoint::on(start),
            SegmentPoint::ctrl(Vector::new(cx + r, cy + k)),
            SegmentPoint::ctrl(Vector::new(cx + k, cy + r)),
            SegmentPoint::on(Vector::new(cx, cy + r)),
            SegmentPoint::ctrl(Vector::new(cx - k, cy + r)),
            SegmentPoint::ctrl(Vector::new(cx - r, cy + k)),
            SegmentPoint::on(Vector::new(cx - r, cy)),
            SegmentPoint::ctrl(Vector::new(cx - r, cy - k)),
            SegmentPoint::ctrl(Vector::new(cx - k, cy - r)),
            SegmentPoint::on(Vector::new(cx, cy - r)),
            SegmentPoint::ctrl(Vector::new(cx + k, cy - r)),
            SegmentPoint::ctrl(Vector::new(cx + r, cy - k)),
            // Exact closure back onto the starting point.
            SegmentPoint::on(start),
        ],
        true,
    )
    .expect("circle points satisfy the segment invariants");
    Ok(Path::from(segment))
}

/// An axis-aligned ellipse: a unit circle scaled and translated.
///
/// The cubic approximation scales with the affine map, so the relative
/// error bound of [`circle`] carries over per axis.
pub fn ellipse(centre: Vector, rx: f64, ry: f64) -> Result<Path> {
    if rx <= 0.0 || ry <= 0.0 {
        return Err(Error::degenerate(format!(
            "ellipse radii must be positive, got ({rx}, {ry})"
        )));
    }
    let unit = circle(Vector::ZERO, 1.0)?;
    Ok(unit.transform(
        &Matrix::scaling(Vector::new(rx, ry)).then(&Matrix::translation(centre)),
    ))
}

/// A rectangle with quarter-circle corners, as one closed segment.
///
/// `radius` is clamped to half the shorter side when too large. Winds
/// clockwise in screen coordinates starting on the top edge.
pub fn rounded_rectangle(rect: Rect, radius: f64) -> Result<Path> {
    if radius <= 0.0 {
        return Err(Error::degenerate(format!(
            "corner radius must be positive, got {radius}"
        )));
    }
    let rc = rect.normalized();
    let max_radius = 0.5 * rc.width().min(rc.height());
    let r = if radius > max_radius {
        debug!("corner radius {radius} clamped to {max_radius}");
        max_radius
    } else {
        radius
    };
    let k = KAPPA * r;
    let (x1, y1, x2, y2) = (rc.x1, rc.y1, rc.x2, rc.y2);

    let segment = Segment::from_points(
        vec![
            // Top edge, then clockwise around the corners.
            SegmentPoint::on(Vector::new(x1 + r, y1)),
            SegmentPoint::on(Vector::new(x2 - r, y1)),
            SegmentPoint::ctrl(Vector::new(x2 - r + k, y1)),
            SegmentPoint::ctrl(Vector::new(x2, y1 + r - k)),
            SegmentPoint::on(Vector::new(x2, y1 + r)),
            SegmentPoint::on(Vector::new(x2, y2 - r)),
            SegmentPoint::ctrl(Vector::new(x2, y2 - r + k)),
            SegmentPoint::ctrl(Vector::new(x2 - r + k, y2)),
            SegmentPoint::on(Vector::new(x2 - r, y2)),
            SegmentPoint::on(Vector::new(x1 + r, y2)),
            SegmentPoint::ctrl(Vector::new(x1 + r - k, y2)),
            SegmentPoint::ctrl(Vector::new(x1, y2 - r + k)),
            SegmentPoint::on(Vector::new(x1, y2 - r)),
            SegmentPoint::on(Vector::new(x1, y1 + r)),
            SegmentPoint::ctrl(Vector::new(x1, y1 + r - k)),
            SegmentPoint::ctrl(Vector::new(x1 + r - k, y1)),
            SegmentPoint::on(Vector::new(x1 + r, y1)),
        ],
        true,
    )
    .expect("rounded rectangle points satisfy the segment invariants");
    Ok(Path::from(segment))
}

/// Draw commands for a circular arc from `angle1` to `angle2`.
///
/// With `negative == false` the sweep runs in the direction of increasing
/// angles — clockwise on screen (+y down); with `negative == true` it runs
/// the other way. When the angles coincide only the starting `MoveTo` is
/// emitted. A sweep spanning more than one revolution is clamped to a full
/// circle.
///
/// The first command is a `MoveTo` to the arc's start point, so the result
/// builds a fresh segment as-is; callers continuing an existing segment
/// replace that `MoveTo` with a `LineTo` (or drop it when the pen is
/// already there). Each emitted `CurveTo` covers at most slightly more
/// than 90 degrees.
pub fn arc(
    centre: Vector,
    radius: f64,
    angle1: f64,
    angle2: f64,
    negative: bool,
) -> Result<Vec<DrawCommand>> {
    if radius <= 0.0 {
        return Err(Error::degenerate(format!(
            "arc radius must be positive, got {radius}"
        )));
    }

    let sweep = normalize_sweep(angle1, angle2, negative);
    let start = centre + Vector::from_polar(radius, angle1);
    let mut cmds = vec![DrawCommand::MoveTo(start)];
    if sweep == 0.0 {
        return Ok(cmds);
    }

    let mut start_angle = angle1;
    let mut total = 0.0;
    let mut done = false;
    while !done {
        let prev = total;
        let mut local;
        if sweep < 0.0 {
            local = -PI * 0.5;
            total -= PI * 0.5;
            if total <= sweep + ARC_ANGLE_EPSILON {
                local = sweep - prev;
                done = true;
            }
        } else {
            local = PI * 0.5;
            total += PI * 0.5;
            if total >= sweep - ARC_ANGLE_EPSILON {
                local = sweep - prev;
                done = true;
            }
        }
        let [_, c1, c2, end] = arc_to_cubic(centre, radius, start_angle, local);
        cmds.push(DrawCommand::CurveTo(c1, c2, end));
        start_angle += local;
    }
    Ok(cmds)
}

/// Signed sweep for the (angle1, angle2, negative) parametrization, folded
/// into `[-2 PI, 2 PI]`.
fn normalize_sweep(angle1: f64, angle2: f64, negative: bool) -> f64 {
    let diff = angle2 - angle1;
    if diff == 0.0 {
        return 0.0;
    }
    if diff.abs() > TWO_PI {
        debug!("arc sweep {diff} spans more than one revolution; clamping");
    }
    if negative {
        let m = (-diff).rem_euclid(TWO_PI);
        if m == 0.0 {
            -TWO_PI
        } else {
            -m
        }
    } else {
        let m = diff.rem_euclid(TWO_PI);
        if m == 0.0 {
            TWO_PI
        } else {
            m
        }
    }
}

/// Cubic control points `[p0, c1, c2, p3]` for a circular sub-arc starting
/// at `start_angle` and sweeping `sweep` radians (|sweep| at most slightly
/// more than PI/2).
///
/// Construction: fit the curve to the unit arc centred on the sweep's
/// bisector, then rotate into place. At exactly 90 degrees the control
/// offset equals [`KAPPA`].
fn arc_to_cubic(centre: Vector, radius: f64, start_angle: f64, sweep: f64) -> [Vector; 4] {
    let x0 = (sweep / 2.0).cos();
    let y0 = (sweep / 2.0).sin();
    let tx = (1.0 - x0) * 4.0 / 3.0;
    let ty = y0 - tx * x0 / y0;

    let px = [x0, x0 + tx, x0 + tx, x0];
    let py = [-y0, -ty, ty, y0];

    let (sn, cs) = (start_angle + sweep / 2.0).sin_cos();

    let mut out = [Vector::ZERO; 4];
    for i in 0..4 {
        out[i] = Vector::new(
            centre.x + radius * (px[i] * cs - py[i] * sn),
            centre.y + radius * (px[i] * sn + py[i] * cs),
        );
    }
    out
}

// ============================================================================
// Tests
// ============================================================================
