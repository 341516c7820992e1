//! Path — an ordered collection of segments.
//!
//! Segments are independent sub-figures drawn in insertion order; a figure
//! with a hole is a path of two segments. Segments may overlap or
//! self-intersect freely — interior/exterior semantics under overlap are the
//! rendering backend's fill-rule concern, not the path model's.

use crate::basics::Rect;
use crate::command::DrawCommand;
use crate::error::Result;
use crate::matrix::Matrix;
use crate::segment::Segment;

/// An ordered sequence of [`Segment`]s.
///
/// Immutable value semantics apart from [`append`](Path::append):
/// transformation and reversal produce new paths.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Path {
    segments: Vec<Segment>,
}

impl Path {
    /// An empty path.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_segments(segments: Vec<Segment>) -> Self {
        Self { segments }
    }

    /// Build a path from a draw-command stream.
    ///
    /// Each `MoveTo` starts a new segment; `Close` terminates the current
    /// segment, and only a `MoveTo` may follow it. Fails with
    /// [`Error::InvalidCommandSequence`](crate::Error::InvalidCommandSequence)
    /// on any stream a sequence of
    /// [`Segment::from_commands`] calls would reject.
    pub fn from_commands(commands: &[DrawCommand]) -> Result<Self> {
        let mut segments = Vec::new();
        let mut start = 0usize;
        for (i, cmd) in commands.iter().enumerate() {
            if matches!(cmd, DrawCommand::MoveTo(_)) && i > start {
                segments.push(Segment::from_commands(&commands[start..i])?);
                start = i;
            }
        }
        if start < commands.len() {
            segments.push(Segment::from_commands(&commands[start..])?);
        }
        Ok(Self { segments })
    }

    // ---------------------------------------------------------------
    // Accessors
    // ---------------------------------------------------------------

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Segment> {
        self.segments.iter()
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Append a segment at the end of the drawing order.
    pub fn append(&mut self, segment: Segment) {
        self.segments.push(segment);
    }

    // ---------------------------------------------------------------
    // Operations
    // ---------------------------------------------------------------

    /// Decompose every segment into draw commands, in drawing order.
    pub fn to_commands(&self) -> Vec<DrawCommand> {
        self.segments
            .iter()
            .flat_map(|s| s.to_commands())
            .collect()
    }

    /// Apply a matrix to every segment.
    pub fn transform(&self, m: &Matrix) -> Path {
        Path {
            segments: self.segments.iter().map(|s| s.transform(m)).collect(),
        }
    }

    /// Union of the segment bounding boxes, or `None` for an empty path.
    pub fn bounding_box(&self) -> Option<Rect> {
        let mut iter = self.segments.iter();
        let mut r = iter.next()?.bounding_box();
        for s in iter {
            r = r.union(&s.bounding_box());
        }
        Some(r)
    }

    /// Reverse every segment's point order; segment order is preserved.
    ///
    /// Distinct from [`reverse_order`](Path::reverse_order): winding-based
    /// fill rules react to per-segment reversal, while drawing order only
    /// changes when the segment sequence itself flips.
    pub fn reverse_all(&self) -> Path {
        Path {
            segments: self.segments.iter().map(|s| s.reverse()).collect(),
        }
    }

    /// Reverse the segment sequence; each segment's own point order is
    /// preserved.
    pub fn reverse_order(&self) -> Path {
        let mut segments = self.segments.clone();
        segments.reverse();
        Path { segments }
    }
}

impl From<Segment> for Path {
    fn from(segment: Segment) -> Self {
        Path {
            segments: vec![segment],
        }
    }
}

impl FromIterator<Segment> for Path {
    fn from_iter<I: IntoIterator<Item = Segment>>(iter: I) -> Self {
        Path {
            segments: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a Segment;
    type IntoIter = std::slice::Iter<'a, Segment>;

    fn into_iter(self) -> Self::IntoIter {
        self.segments.iter()
    }
}

// ============================================================================
// Tests
// ============================================================================
