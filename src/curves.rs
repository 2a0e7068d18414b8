//! Curve flattening
//!
//! Quadratic and cubic segments are approximated by uniform-parameter
//! chords. The chord count comes from a bound on the curve's deviation from
//! straight: the curve is split until each chord stays within a quarter
//! pixel of it. Evaluation uses the expanded polynomial coefficients, one
//! multiply-add chain per coordinate per sample.

use crate::geom::Point;
use crate::math::ceil_to_int;

/// Maximum deviation of a chord from the true curve, in pixels
const FLATTEN_TOLERANCE: f64 = 0.25;

fn segment_count(deviation: f64) -> i64 {
    ceil_to_int((deviation / FLATTEN_TOLERANCE).sqrt()).max(1)
}

/// Flatten a quadratic into chords, emitting each one
pub fn flatten_quad(p0: Point, p1: Point, p2: Point,
                    emit: &mut dyn FnMut(Point, Point)) {
    let ax = p0.x - 2.0 * p1.x + p2.x;
    let bx = 2.0 * (p1.x - p0.x);
    let cx = p0.x;
    let ay = p0.y - 2.0 * p1.y + p2.y;
    let by = 2.0 * (p1.y - p0.y);
    let cy = p0.y;

    // second derivative is constant; quarter of its magnitude bounds deviation
    let deviation = Point::new(ax / 4.0, ay / 4.0).length();
    let count = segment_count(deviation);
    let dt = 1.0 / count as f64;

    let eval = |t: f64| Point::new((ax * t + bx) * t + cx,
                                   (ay * t + by) * t + cy);
    let mut prev = eval(0.0);
    for i in 1..=count {
        let next = eval(dt * i as f64);
        emit(prev, next);
        prev = next;
    }
}

/// Flatten a cubic into chords, emitting each one
pub fn flatten_cubic(p0: Point, p1: Point, p2: Point, p3: Point,
                     emit: &mut dyn FnMut(Point, Point)) {
    let ax = 3.0 * p1.x + p3.x - p0.x - 3.0 * p2.x;
    let bx = 3.0 * (p0.x - 2.0 * p1.x + p2.x);
    let cx = 3.0 * (p1.x - p0.x);
    let dx = p0.x;
    let ay = 3.0 * p1.y + p3.y - p0.y - 3.0 * p2.y;
    let by = 3.0 * (p0.y - 2.0 * p1.y + p2.y);
    let cy = 3.0 * (p1.y - p0.y);
    let dy = p0.y;

    // max control-point deviation from the chord, scaled by 3/4
    let left = Point::new(p0.x - 2.0 * p1.x + p2.x, p0.y - 2.0 * p1.y + p2.y);
    let right = Point::new(p1.x - 2.0 * p2.x + p3.x, p1.y - 2.0 * p2.y + p3.y);
    let deviation = 0.75 * left.length().max(right.length());
    let count = segment_count(deviation);
    let dt = 1.0 / count as f64;

    let eval = |t: f64| Point::new(((ax * t + bx) * t + cx) * t + dx,
                                   ((ay * t + by) * t + cy) * t + dy);
    let mut prev = eval(0.0);
    for i in 1..=count {
        let next = eval(dt * i as f64);
        emit(prev, next);
        prev = next;
    }
}

fn lerp(a: Point, b: Point, t: f64) -> Point {
    Point::new(a.x * (1.0 - t) + b.x * t,
               a.y * (1.0 - t) + b.y * t)
}

/// Subdivide a quadratic at `t` into two quadratics sharing dst[2]
pub fn chop_quad_at(src: &[Point; 3], t: f64) -> [Point; 5] {
    let ab = lerp(src[0], src[1], t);
    let bc = lerp(src[1], src[2], t);
    let abc = lerp(ab, bc, t);
    [src[0], ab, abc, bc, src[2]]
}

/// Subdivide a cubic at `t` into two cubics sharing dst[3]
pub fn chop_cubic_at(src: &[Point; 4], t: f64) -> [Point; 7] {
    let ab = lerp(src[0], src[1], t);
    let bc = lerp(src[1], src[2], t);
    let cd = lerp(src[2], src[3], t);
    let abc = lerp(ab, bc, t);
    let bcd = lerp(bc, cd, t);
    let abcd = lerp(abc, bcd, t);
    [src[0], ab, abc, abcd, bcd, cd, src[3]]
}
