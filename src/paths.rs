//! Path storage
//!
//! A path is a verb sequence over a shared point array: move (1 point),
//! line (1), quad (2), cubic (3), close (0). Every non-move verb must be
//! preceded by a move; the builder methods keep that invariant when used
//! as intended and it is not re-validated at draw time.

use crate::geom::{Point, Rect};
use crate::transform::Transform;

/// Path verb
#[derive(Debug,Copy,Clone,PartialEq,Eq)]
pub enum Verb {
    MoveTo,
    LineTo,
    QuadTo,
    CubicTo,
    Close,
}

/// Winding direction for the convenience contour constructors
#[derive(Debug,Copy,Clone,PartialEq,Eq)]
pub enum Direction {
    Clockwise,
    CounterClockwise,
}

/// One resolved path segment, in device or user space
#[derive(Debug,Copy,Clone,PartialEq)]
pub enum Segment {
    Line(Point, Point),
    Quad(Point, Point, Point),
    Cubic(Point, Point, Point, Point),
}

/// Verb + point path storage
#[derive(Debug,Default,Clone)]
pub struct Path {
    verbs: Vec<Verb>,
    points: Vec<Point>,
}

impl Path {
    pub fn new() -> Self {
        Self { verbs: vec![], points: vec![] }
    }
    pub fn is_empty(&self) -> bool {
        self.verbs.is_empty()
    }
    /// Start a new contour at (x,y)
    pub fn move_to(&mut self, x: f64, y: f64) -> &mut Self {
        self.verbs.push(Verb::MoveTo);
        self.points.push(Point::new(x, y));
        self
    }
    /// Line from the current point to (x,y)
    pub fn line_to(&mut self, x: f64, y: f64) -> &mut Self {
        self.verbs.push(Verb::LineTo);
        self.points.push(Point::new(x, y));
        self
    }
    /// Quadratic curve through control point `c` to `p`
    pub fn quad_to(&mut self, c: Point, p: Point) -> &mut Self {
        self.verbs.push(Verb::QuadTo);
        self.points.push(c);
        self.points.push(p);
        self
    }
    /// Cubic curve through control points `c1`,`c2` to `p`
    pub fn cubic_to(&mut self, c1: Point, c2: Point, p: Point) -> &mut Self {
        self.verbs.push(Verb::CubicTo);
        self.points.push(c1);
        self.points.push(c2);
        self.points.push(p);
        self
    }
    /// Close the current contour back to its starting point
    pub fn close(&mut self) -> &mut Self {
        self.verbs.push(Verb::Close);
        self
    }
    /// Add a rectangle contour in the given direction
    pub fn add_rect(&mut self, rect: &Rect, dir: Direction) -> &mut Self {
        let [a, b, c, d] = rect.corners();
        match dir {
            Direction::Clockwise => {
                self.move_to(a.x, a.y)
                    .line_to(b.x, b.y)
                    .line_to(c.x, c.y)
                    .line_to(d.x, d.y)
            }
            Direction::CounterClockwise => {
                self.move_to(a.x, a.y)
                    .line_to(d.x, d.y)
                    .line_to(c.x, c.y)
                    .line_to(b.x, b.y)
            }
        }
    }
    /// Add a polygon contour from a point list
    pub fn add_polygon(&mut self, pts: &[Point]) -> &mut Self {
        if let Some(first) = pts.first() {
            self.move_to(first.x, first.y);
            for p in &pts[1..] {
                self.line_to(p.x, p.y);
            }
        }
        self
    }
    /// Add a circle contour approximated by 8 quadratic curves
    pub fn add_circle(&mut self, center: Point, radius: f64, dir: Direction) -> &mut Self {
        let m = Transform::concat(&Transform::translate(center.x, center.y),
                                  &Transform::scale(radius, radius));
        let t = (std::f64::consts::PI / 8.0).tan();
        let h = std::f64::consts::FRAC_1_SQRT_2;
        // 16 points around the unit circle, every other one a quad on-curve point
        let ring = [
            ( 1.0,  0.0), ( 1.0,  t ), (  h,   h ), (  t,  1.0),
            ( 0.0,  1.0), ( -t,  1.0), ( -h,   h ), (-1.0,  t ),
            (-1.0,  0.0), (-1.0, -t ), ( -h,  -h ), ( -t, -1.0),
            ( 0.0, -1.0), (  t, -1.0), (  h,  -h ), ( 1.0, -t ),
        ];
        let mut pts = [Point::default(); 16];
        for (dst, &(x, y)) in pts.iter_mut().zip(ring.iter()) {
            *dst = m.map_point(Point::new(x, y));
        }
        self.move_to(pts[0].x, pts[0].y);
        match dir {
            Direction::CounterClockwise => {
                for i in 0..8 {
                    let c = pts[2 * i + 1];
                    let p = pts[(2 * i + 2) % 16];
                    self.quad_to(c, p);
                }
            }
            Direction::Clockwise => {
                for i in 0..8 {
                    let c = pts[(16 - 2 * i - 1) % 16];
                    let p = pts[(16 - 2 * i - 2) % 16];
                    self.quad_to(c, p);
                }
            }
        }
        self
    }
    /// Map every point through `m` in place
    pub fn transform(&mut self, m: &Transform) {
        m.map_points(&mut self.points);
    }
    /// Bounding rectangle of the point array, `None` for an empty path
    pub fn bounds(&self) -> Option<Rect> {
        let first = self.points.first()?;
        let mut r = Rect::ltrb(first.x, first.y, first.x, first.y);
        for p in &self.points[1..] {
            r.expand(p.x, p.y);
        }
        Some(r)
    }
    /// Resolve verbs into segments, closing every contour
    ///
    /// Both an explicit `close` and the end of a contour (next move or end
    /// of path) emit the chord back to the contour's starting point, so the
    /// result always describes closed outlines ready for edge building.
    pub fn segments(&self) -> Vec<Segment> {
        let mut out = vec![];
        let mut i = 0;
        let mut start = Point::default();
        let mut cur = Point::default();
        let mut open = false;
        for verb in &self.verbs {
            match verb {
                Verb::MoveTo => {
                    if open {
                        out.push(Segment::Line(cur, start));
                    }
                    start = self.points[i];
                    cur = start;
                    open = false;
                    i += 1;
                }
                Verb::LineTo => {
                    let p = self.points[i];
                    out.push(Segment::Line(cur, p));
                    cur = p;
                    open = true;
                    i += 1;
                }
                Verb::QuadTo => {
                    let c = self.points[i];
                    let p = self.points[i + 1];
                    out.push(Segment::Quad(cur, c, p));
                    cur = p;
                    open = true;
                    i += 2;
                }
                Verb::CubicTo => {
                    let c1 = self.points[i];
                    let c2 = self.points[i + 1];
                    let p = self.points[i + 2];
                    out.push(Segment::Cubic(cur, c1, c2, p));
                    cur = p;
                    open = true;
                    i += 3;
                }
                Verb::Close => {
                    if open {
                        out.push(Segment::Line(cur, start));
                    }
                    cur = start;
                    open = false;
                }
            }
        }
        if open {
            out.push(Segment::Line(cur, start));
        }
        out
    }
}
