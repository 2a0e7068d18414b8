//! Affine transformations
//!
//! A transform is the six coefficients of the map
//!
//! ```text
//! x' = sx  * x + shx * y + tx
//! y' = shy * x + sy  * y + ty
//! ```
//!
//! equivalent to a 3x3 homogeneous matrix whose bottom row is [0,0,1].

use crate::geom::Point;

/// 2D affine transform
#[derive(Debug,Copy,Clone,PartialEq)]
pub struct Transform {
    pub sx: f64,
    pub shx: f64,
    pub tx: f64,
    pub shy: f64,
    pub sy: f64,
    pub ty: f64,
}

impl Default for Transform {
    fn default() -> Self {
        Self::identity()
    }
}

impl Transform {
    /// Create a transform from the six coefficients, row-major
    pub fn new(sx: f64, shx: f64, tx: f64, shy: f64, sy: f64, ty: f64) -> Self {
        Self { sx, shx, tx, shy, sy, ty }
    }
    /// Identity transform
    pub fn identity() -> Self {
        Self::new(1.0, 0.0, 0.0,
                  0.0, 1.0, 0.0)
    }
    /// Translation by (tx, ty)
    pub fn translate(tx: f64, ty: f64) -> Self {
        Self::new(1.0, 0.0, tx,
                  0.0, 1.0, ty)
    }
    /// Scaling by (sx, sy) about the origin
    pub fn scale(sx: f64, sy: f64) -> Self {
        Self::new(sx, 0.0, 0.0,
                  0.0, sy, 0.0)
    }
    /// Rotation about the origin, angle in radians
    pub fn rotate(radians: f64) -> Self {
        let (sin, cos) = radians.sin_cos();
        Self::new(cos, -sin, 0.0,
                  sin,  cos, 0.0)
    }
    /// Matrix product `outer * inner`: inner is applied first
    pub fn concat(outer: &Transform, inner: &Transform) -> Self {
        Self::new(
            outer.sx  * inner.sx  + outer.shx * inner.shy,
            outer.sx  * inner.shx + outer.shx * inner.sy,
            outer.sx  * inner.tx  + outer.shx * inner.ty + outer.tx,
            outer.shy * inner.sx  + outer.sy  * inner.shy,
            outer.shy * inner.shx + outer.sy  * inner.sy,
            outer.shy * inner.tx  + outer.sy  * inner.ty + outer.ty,
        )
    }
    /// Inverse transform, or `None` when the determinant is zero
    pub fn invert(&self) -> Option<Transform> {
        let det = self.sx * self.sy - self.shx * self.shy;
        if det == 0.0 {
            return None;
        }
        Some(Self::new(
            self.sy / det,
            -self.shx / det,
            (self.shx * self.ty - self.sy * self.tx) / det,
            -self.shy / det,
            self.sx / det,
            (self.shy * self.tx - self.sx * self.ty) / det,
        ))
    }
    /// Map a single (x,y) pair
    pub fn map(&self, x: f64, y: f64) -> (f64, f64) {
        (self.sx  * x + self.shx * y + self.tx,
         self.shy * x + self.sy  * y + self.ty)
    }
    /// Map a single point
    pub fn map_point(&self, p: Point) -> Point {
        let (x, y) = self.map(p.x, p.y);
        Point::new(x, y)
    }
    /// Map a slice of points in place
    pub fn map_points(&self, pts: &mut [Point]) {
        for p in pts.iter_mut() {
            *p = self.map_point(*p);
        }
    }
}
