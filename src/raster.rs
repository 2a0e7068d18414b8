//! Scanline fill
//!
//! Walks a sorted edge list one scanline at a time and hands maximal
//! nonzero-winding spans to a blit callback. The callback returns `false`
//! to abort the fill, which the canvas uses when a shader cannot be set up
//! for the current transform.
//!
//! [`fill_path`] is the general nonzero-winding fill; [`fill_convex`]
//! is a two-edge fast path for shapes known to be convex, where every
//! scanline is a single span between one left and one right edge.

use crate::edges::Edge;
use crate::math::round_to_int;

/// Blit callback: fill row `y` from column `l` (inclusive) to `r`
/// (exclusive); return `false` to abort the fill
pub type Blitter<'a> = &'a mut dyn FnMut(i64, i64, i64) -> bool;

fn span_bounds(left_x: f64, right_x: f64, width: i64) -> (i64, i64) {
    let l = round_to_int(left_x).max(0).min(width);
    let r = round_to_int(right_x).max(0).min(width);
    (l, r)
}

// Keep the active prefix ordered by current_x between scanlines. The list
// is nearly sorted already, so insertion sort is the right tool.
fn resort_active(edges: &mut [Edge]) {
    for i in 1..edges.len() {
        let mut j = i;
        while j > 0 && edges[j].current_x < edges[j - 1].current_x {
            edges.swap(j, j - 1);
            j -= 1;
        }
    }
}

/// Fill an arbitrary edge list with the nonzero winding rule
pub fn fill_path(edges: &mut Vec<Edge>, width: i64, blit: Blitter) {
    if edges.is_empty() {
        return;
    }
    edges.sort_by(|a, b| a.order(b));
    let mut y = edges[0].top_y;
    let max_y = edges.iter().map(|e| e.bottom_y).max().unwrap();
    let mut active = 0;

    while y < max_y {
        while active < edges.len() && edges[active].top_y <= y {
            active += 1;
        }

        let mut winding = 0;
        let mut left_x = 0.0;
        for i in 0..active {
            let e = &edges[i];
            if winding == 0 {
                left_x = e.current_x;
            }
            let was = winding;
            winding += e.winding;
            if was != 0 && winding == 0 {
                let (l, r) = span_bounds(left_x, e.current_x, width);
                if l < r && !blit(l, y, r) {
                    return;
                }
            }
        }

        let mut i = 0;
        while i < active {
            if edges[i].bottom_y == y + 1 {
                edges.remove(i);
                active -= 1;
            } else {
                edges[i].current_x += edges[i].slope;
                i += 1;
            }
        }
        y += 1;
        while active < edges.len() && edges[active].top_y <= y {
            active += 1;
        }
        resort_active(&mut edges[..active]);
    }
}

/// Fill a convex edge list: exactly one left and one right edge per row
///
/// Assumes the edges describe a single convex contour, so at most two are
/// active on any scanline and spans never split.
pub fn fill_convex(edges: &mut Vec<Edge>, width: i64, blit: Blitter) {
    if edges.len() < 2 {
        return;
    }
    edges.sort_by(|a, b| a.order(b));
    let mut y = edges[0].top_y;
    let max_y = edges.iter().map(|e| e.bottom_y).max().unwrap();
    let mut left = edges[0];
    let mut right = edges[1];
    let mut next = 2;

    while y < max_y {
        let (l, r) = span_bounds(left.current_x, right.current_x, width);
        if l < r && !blit(l, y, r) {
            return;
        }
        left.current_x += left.slope;
        right.current_x += right.slope;
        y += 1;
        if left.bottom_y <= y {
            if next >= edges.len() {
                return;
            }
            left = edges[next];
            next += 1;
        }
        if right.bottom_y <= y {
            if next >= edges.len() {
                return;
            }
            right = edges[next];
            next += 1;
        }
    }
}
