//! Geometry value types

/// 2D point
#[derive(Debug,Default,Copy,Clone,PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// Create a new point
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
    /// Euclidean length of the vector from the origin
    pub fn length(&self) -> f64 {
        (self.x * self.x + self.y * self.y).sqrt()
    }
}

/// Axis-aligned rectangle
///
/// Stored as left/top/right/bottom; no ordering is enforced, callers
/// construct rectangles with left <= right and top <= bottom.
#[derive(Debug,Default,Copy,Clone,PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl Rect {
    /// Create a rectangle from left, top, right, bottom
    pub fn ltrb(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self { left, top, right, bottom }
    }
    /// Create a rectangle from origin and size
    pub fn xywh(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self { left: x, top: y, right: x + w, bottom: y + h }
    }
    pub fn width(&self) -> f64 {
        self.right - self.left
    }
    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }
    /// Grow to include the point (x,y)
    pub fn expand(&mut self, x: f64, y: f64) {
        if x < self.left   { self.left = x; }
        if x > self.right  { self.right = x; }
        if y < self.top    { self.top = y; }
        if y > self.bottom { self.bottom = y; }
    }
    /// The four corners in top-left, top-right, bottom-right, bottom-left order
    pub fn corners(&self) -> [Point; 4] {
        [Point::new(self.left,  self.top),
         Point::new(self.right, self.top),
         Point::new(self.right, self.bottom),
         Point::new(self.left,  self.bottom)]
    }
}
