//! Per-finger stroke state: an append-only curve path plus the last
//! recorded position of that finger.

use crate::types::Point;
use tiny_skia::{Path, PathBuilder};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Segment {
    /// Start a new contour; draws nothing by itself.
    MoveTo { x: f32, y: f32 },
    /// Quadratic curve through control point (cx, cy) ending at (x, y).
    QuadTo { cx: f32, cy: f32, x: f32, y: f32 },
}

/// Axis-aligned box in surface coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl Bounds {
    /// Grow the box by `by` on every side.
    pub fn outset(self, by: f32) -> Self {
        Self {
            left: self.left - by,
            top: self.top - by,
            right: self.right + by,
            bottom: self.bottom + by,
        }
    }

    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.left && x <= self.right && y >= self.top && y <= self.bottom
    }
}

/// Ordered list of segments for one in-progress stroke.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StrokePath {
    segments: Vec<Segment>,
}

impl StrokePath {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn move_to(&mut self, x: f32, y: f32) {
        self.segments.push(Segment::MoveTo { x, y });
    }

    pub fn quad_to(&mut self, cx: f32, cy: f32, x: f32, y: f32) {
        self.segments.push(Segment::QuadTo { cx, cy, x, y });
    }

    /// Drop every segment, including the starting move-to.
    pub fn reset(&mut self) {
        self.segments.clear();
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Number of curve segments (move-tos are not counted).
    pub fn curve_count(&self) -> usize {
        self.segments.iter().filter(|s| matches!(s, Segment::QuadTo { .. })).count()
    }

    /// A path is empty while it has no curves, even if it holds a move-to.
    pub fn is_empty(&self) -> bool {
        self.curve_count() == 0
    }

    /// Bounding box over every point, control points included.
    /// A quadratic lies inside the hull of its control points, so this
    /// always encloses the drawn geometry (before stroke width).
    pub fn bounds(&self) -> Option<Bounds> {
        let mut pts = self.segments.iter().flat_map(|s| match *s {
            Segment::MoveTo { x, y } => [(x, y), (x, y)],
            Segment::QuadTo { cx, cy, x, y } => [(cx, cy), (x, y)],
        });
        let (x0, y0) = pts.next()?;
        let (mut l, mut t, mut r, mut b) = (x0, y0, x0, y0);
        for (x, y) in pts {
            l = l.min(x);
            t = t.min(y);
            r = r.max(x);
            b = b.max(y);
        }
        Some(Bounds { left: l, top: t, right: r, bottom: b })
    }

    /// Build a rasterizable path. `None` when there is nothing to draw.
    pub fn to_skia(&self) -> Option<Path> {
        if self.is_empty() {
            return None;
        }
        let mut pb = PathBuilder::with_capacity(self.segments.len(), self.segments.len() * 2);
        for seg in &self.segments {
            match *seg {
                Segment::MoveTo { x, y } => pb.move_to(x, y),
                Segment::QuadTo { cx, cy, x, y } => pb.quad_to(cx, cy, x, y),
            }
        }
        pb.finish()
    }
}

/// Tracking state for one pointer id.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FingerSession {
    pub path: StrokePath,
    pub last: Point,
}

impl FingerSession {
    /// Fresh session whose path begins at the touch point.
    pub fn start(x: f32, y: f32) -> Self {
        let mut session = Self::default();
        session.restart(x, y);
        session
    }

    /// Reuse this session for a new touch: clear the path and record the
    /// touch point as the new baseline.
    pub fn restart(&mut self, x: f32, y: f32) {
        self.path.reset();
        self.path.move_to(x, y);
        self.last = Point::from_touch(x, y);
    }

    /// Apply one movement sample. Returns `true` when a segment was added.
    ///
    /// Moves smaller than `tolerance` on both axes are dropped and leave the
    /// last position untouched. Otherwise a quadratic is appended from the
    /// last position toward the midpoint, controlled by the last position.
    pub fn advance(&mut self, x: f32, y: f32, tolerance: f32) -> bool {
        let (lx, ly) = (self.last.x as f32, self.last.y as f32);
        let dx = (x - lx).abs();
        let dy = (y - ly).abs();
        if dx < tolerance && dy < tolerance {
            return false;
        }
        self.path.quad_to(lx, ly, (x + lx) / 2.0, (y + ly) / 2.0);
        self.last = Point::from_touch(x, y);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn move_only_path_is_empty_and_not_drawable() {
        let mut path = StrokePath::new();
        path.move_to(3.0, 4.0);
        assert!(path.is_empty());
        assert!(path.to_skia().is_none());
        assert_eq!(path.segments().len(), 1);
    }

    #[test]
    fn advance_appends_midpoint_quad_controlled_by_last_point() {
        let mut session = FingerSession::start(10.0, 10.0);
        assert!(session.advance(50.0, 20.0, 5.0));
        assert_eq!(
            session.path.segments()[1],
            Segment::QuadTo { cx: 10.0, cy: 10.0, x: 30.0, y: 15.0 }
        );
        assert_eq!(session.last, Point { x: 50, y: 20 });
    }

    #[test]
    fn advance_rejects_jitter_below_tolerance() {
        let mut session = FingerSession::start(10.0, 10.0);
        assert!(!session.advance(14.9, 6.0, 5.0));
        assert!(session.path.is_empty());
        assert_eq!(session.last, Point { x: 10, y: 10 });
        // One axis reaching the tolerance is enough.
        assert!(session.advance(10.0, 15.0, 5.0));
        assert_eq!(session.path.curve_count(), 1);
    }

    #[test]
    fn restart_resets_path_and_baseline() {
        let mut session = FingerSession::start(10.0, 10.0);
        session.advance(40.0, 40.0, 5.0);
        session.restart(50.5, 60.7);
        assert_eq!(session.path.segments(), &[Segment::MoveTo { x: 50.5, y: 60.7 }]);
        assert_eq!(session.last, Point { x: 50, y: 60 });
    }

    #[test]
    fn bounds_cover_control_points() {
        let mut path = StrokePath::new();
        path.move_to(10.0, 10.0);
        path.quad_to(10.0, 10.0, 30.0, 40.0);
        path.quad_to(60.0, 5.0, 45.0, 22.0);
        let b = path.bounds().unwrap();
        assert_eq!((b.left, b.top, b.right, b.bottom), (10.0, 5.0, 60.0, 40.0));
        assert!(b.outset(2.0).contains(8.0, 42.0));
    }
}
