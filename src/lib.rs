//! # pathgeom
//!
//! A path geometry core for 2D vector graphics: vector and affine-matrix
//! primitives, paths made of on-curve/off-curve point segments, and the
//! geometric operations a renderer needs before rasterization.
//!
//! Runs of off-curve points between on-curve points determine curve degree
//! (0 — line, 1 — quadratic Bezier, 2 — cubic Bezier). Segments are built
//! from draw-command streams (`MoveTo` / `LineTo` / `CurveTo` / `Close`)
//! and decompose back into them losslessly.
//!
//! ## Coordinate convention
//!
//! Screen coordinates throughout: +x right, +y **down**, positive angles
//! clockwise. A segment traversed left-right-down-left is `Clockwise`.
//!
//! ## Architecture
//!
//! ```text
//! shapes / user code  ──►  Path / Segment  ──►  RenderBackend
//!   (builders)             (compose, transform)   (fill / stroke)
//! ```
//!
//! Everything up to the backend boundary is immutable value types — safe
//! to share across threads, no locks, no hidden state. Rasterization,
//! colour, fonts, and codecs live on the far side of
//! [`backend::RenderBackend`].
//!
//! ## Example
//!
//! ```
//! use pathgeom::{circle, DrawCommand, Matrix, Path, Rect, Vector};
//!
//! let dot = circle(Vector::new(0.0, 0.0), 10.0)?;
//! let moved = dot.transform(&Matrix::translation(Vector::new(50.0, 50.0)));
//! let bb = moved.bounding_box().unwrap();
//! assert!((bb.x1 - 40.0).abs() < 1e-9);
//!
//! // Round-trip through the interchange commands.
//! let cmds: Vec<DrawCommand> = moved.to_commands();
//! assert_eq!(Path::from_commands(&cmds)?, moved);
//! # Ok::<(), pathgeom::Error>(())
//! ```

pub mod backend;
pub mod basics;
pub mod command;
pub mod error;
pub mod matrix;
pub mod path;
pub mod segment;
pub mod shapes;
pub mod vector;

pub use backend::{
    DashPattern, Extend, FillRule, LineCap, LineJoin, Paint, RenderBackend, Rgba, StrokeStyle,
};
pub use basics::Rect;
pub use command::DrawCommand;
pub use error::{Error, Result};
pub use matrix::Matrix;
pub use path::Path;
pub use segment::{CurveRun, Orientation, Segment, SegmentPoint};
pub use shapes::{arc, circle, ellipse, rectangle, rounded_rectangle};
pub use vector::Vector;
