//! Edge building
//!
//! Device-space segments become [`Edge`] records for the scanline fill.
//! Segments are clipped to the device rectangle here, once, so the fill
//! loops never bounds-check. Vertical clipping chops the segment; horizontal
//! clipping replaces the out-of-bounds portion with a fence: a vertical edge
//! pinned to x=0 or x=width that spans the same scanlines with the same
//! winding, so winding counts outside the device still cancel correctly.

use crate::geom::Point;
use crate::math::round_to_int;
use std::cmp::Ordering;

/// One monotonic-in-y fill edge
///
/// `current_x` is sampled at the center of the edge's top scanline and is
/// advanced by `slope` as the fill walks down one scanline at a time.
#[derive(Debug,Default,Copy,Clone)]
pub struct Edge {
    /// First scanline covered, inclusive
    pub top_y: i64,
    /// Last scanline covered, exclusive
    pub bottom_y: i64,
    /// X at the center of the current scanline
    pub current_x: f64,
    /// dx per unit dy
    pub slope: f64,
    /// +1 for a downward segment, -1 for upward
    pub winding: i32,
}

impl Edge {
    /// Ordering for the initial edge sort: top scanline, then x, then slope
    pub fn order(&self, other: &Edge) -> Ordering {
        self.top_y.cmp(&other.top_y)
            .then(self.current_x.partial_cmp(&other.current_x)
                                .unwrap_or(Ordering::Equal))
            .then(self.slope.partial_cmp(&other.slope)
                            .unwrap_or(Ordering::Equal))
    }
}

fn push_edge(top: Point, bot: Point, slope: f64, winding: i32,
             out: &mut Vec<Edge>) {
    let top_y = round_to_int(top.y);
    let bottom_y = round_to_int(bot.y);
    if top_y == bottom_y {
        return;
    }
    out.push(Edge {
        top_y,
        bottom_y,
        current_x: top.x + slope * (top_y as f64 - top.y + 0.5),
        slope,
        winding,
    });
}

fn push_fence(x: i64, y0: f64, y1: f64, winding: i32, out: &mut Vec<Edge>) {
    let (top, bot) = if y0 < y1 { (y0, y1) } else { (y1, y0) };
    push_edge(Point::new(x as f64, top), Point::new(x as f64, bot),
              0.0, winding, out);
}

/// Clip one segment to a width x height device and append its edges
///
/// Horizontal segments produce nothing. A segment entirely above or below
/// the device produces nothing; one entirely left or right of it produces
/// only a fence.
pub fn clip_segment(p0: Point, p1: Point, width: i64, height: i64,
                    out: &mut Vec<Edge>) {
    if p0.y == p1.y {
        return;
    }
    let winding = if p0.y < p1.y { 1 } else { -1 };
    let (mut top, mut bot) = if p0.y < p1.y { (p0, p1) } else { (p1, p0) };

    let h = height as f64;
    if bot.y <= 0.0 || top.y >= h {
        return;
    }
    let slope = (bot.x - top.x) / (bot.y - top.y);
    if top.y < 0.0 {
        top = Point::new(top.x + slope * (0.0 - top.y), 0.0);
    }
    if bot.y > h {
        bot = Point::new(bot.x + slope * (h - bot.y), h);
    }

    let w = width as f64;
    let (mut left, mut right) = if top.x < bot.x { (top, bot) } else { (bot, top) };
    if left.x >= w {
        push_fence(width, top.y, bot.y, winding, out);
        return;
    }
    if right.x <= 0.0 {
        push_fence(0, top.y, bot.y, winding, out);
        return;
    }
    if left.x < 0.0 {
        // project the part left of the device onto the x=0 fence
        let y_cross = left.y + (0.0 - left.x) / slope;
        push_fence(0, left.y, y_cross, winding, out);
        left = Point::new(0.0, y_cross);
    }
    if right.x > w {
        let y_cross = left.y + (w - left.x) / slope;
        push_fence(width, y_cross, right.y, winding, out);
        right = Point::new(w, y_cross);
    }

    let (top, bot) = if left.y < right.y { (left, right) } else { (right, left) };
    push_edge(top, bot, slope, winding, out);
}
