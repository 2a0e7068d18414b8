//! Canvas
//!
//! The drawing facade. A canvas borrows a device bitmap, keeps the current
//! transform with a save/restore stack, and turns every draw call into
//! device-clipped edges handed to the scanline fill. Geometry is mapped
//! through the current transform up front; shaders receive the same
//! transform through their context so color and geometry stay in step.

use crate::bitmap::Bitmap;
use crate::blend::BlendMode;
use crate::color::Color;
use crate::curves::{flatten_cubic, flatten_quad};
use crate::edges::{clip_segment, Edge};
use crate::geom::{Point, Rect};
use crate::paint::Paint;
use crate::paths::{Path, Segment};
use crate::pixel::Pixel;
use crate::raster::{fill_convex, fill_path};
use crate::shader::{ComposeShader, ProxyShader, Shader, TriColorShader};
use crate::transform::Transform;

/// Drawing context over a borrowed device bitmap
pub struct Canvas<'a> {
    device: &'a mut Bitmap,
    ctm: Transform,
    stack: Vec<Transform>,
}

// unit triangle onto pts: columns are the edge vectors out of pts[0]
fn triangle_basis(pts: [Point; 3]) -> Transform {
    Transform::new(pts[1].x - pts[0].x, pts[2].x - pts[0].x, pts[0].x,
                   pts[1].y - pts[0].y, pts[2].y - pts[0].y, pts[0].y)
}

// maps device triangle space onto texture space for the proxy shader
fn texture_transform(pts: [Point; 3], texs: [Point; 3]) -> Option<Transform> {
    let inv = triangle_basis(texs).invert()?;
    Some(Transform::concat(&triangle_basis(pts), &inv))
}

fn bilerp_point(q: &[Point; 4], u: f64, v: f64) -> Point {
    let w0 = (1.0 - u) * (1.0 - v);
    let w1 = u * (1.0 - v);
    let w2 = u * v;
    let w3 = (1.0 - u) * v;
    Point::new(w0 * q[0].x + w1 * q[1].x + w2 * q[2].x + w3 * q[3].x,
               w0 * q[0].y + w1 * q[1].y + w2 * q[2].y + w3 * q[3].y)
}

fn bilerp_color(q: &[Color; 4], u: f64, v: f64) -> Color {
    let w0 = (1.0 - u) * (1.0 - v);
    let w1 = u * (1.0 - v);
    let w2 = u * v;
    let w3 = (1.0 - u) * v;
    Color::argb(w0 * q[0].a + w1 * q[1].a + w2 * q[2].a + w3 * q[3].a,
                w0 * q[0].r + w1 * q[1].r + w2 * q[2].r + w3 * q[3].r,
                w0 * q[0].g + w1 * q[1].g + w2 * q[2].g + w3 * q[3].g,
                w0 * q[0].b + w1 * q[1].b + w2 * q[2].b + w3 * q[3].b)
}

impl<'a> Canvas<'a> {
    pub fn new(device: &'a mut Bitmap) -> Self {
        Self { device, ctm: Transform::identity(), stack: vec![] }
    }

    /// Push a copy of the current transform
    pub fn save(&mut self) {
        self.stack.push(self.ctm);
    }

    /// Pop back to the most recently saved transform; no-op on an empty
    /// stack
    pub fn restore(&mut self) {
        if let Some(m) = self.stack.pop() {
            self.ctm = m;
        }
    }

    /// Append `m` to the current transform; it applies before everything
    /// already concatenated
    pub fn concat(&mut self, m: &Transform) {
        self.ctm = Transform::concat(&self.ctm, m);
    }

    pub fn translate(&mut self, tx: f64, ty: f64) {
        self.concat(&Transform::translate(tx, ty));
    }

    pub fn scale(&mut self, sx: f64, sy: f64) {
        self.concat(&Transform::scale(sx, sy));
    }

    pub fn rotate(&mut self, radians: f64) {
        self.concat(&Transform::rotate(radians));
    }

    /// Replace every device pixel with `color`, ignoring transform and
    /// blending
    pub fn clear(&mut self, color: Color) {
        self.device.fill(color.premul());
    }

    /// Blend the paint over the whole device
    pub fn draw_paint(&mut self, paint: &mut Paint) {
        let width = self.device.width;
        let blend = paint.blend_mode.proc();
        match &mut paint.shader {
            None => {
                let src = paint.color.premul();
                for y in 0..self.device.height {
                    for p in self.device.row_mut(y) {
                        *p = blend(src, *p);
                    }
                }
            }
            Some(shader) => {
                if !shader.set_context(&self.ctm) {
                    return;
                }
                let mut buf = vec![Pixel::zero(); width];
                for y in 0..self.device.height {
                    shader.shade_row(0, y as i64, &mut buf);
                    let row = self.device.row_mut(y);
                    for (p, s) in row.iter_mut().zip(&buf) {
                        *p = blend(*s, *p);
                    }
                }
            }
        }
    }

    /// Fill a rectangle under the current transform
    pub fn draw_rect(&mut self, rect: &Rect, paint: &mut Paint) {
        self.draw_convex_polygon(&rect.corners(), paint);
    }

    /// Fill a rectangle with a solid color, source-over
    pub fn fill_rect(&mut self, rect: &Rect, color: Color) {
        self.draw_rect(rect, &mut Paint::new(color));
    }

    /// Fill a convex polygon under the current transform
    pub fn draw_convex_polygon(&mut self, pts: &[Point], paint: &mut Paint) {
        if pts.len() < 3 {
            return;
        }
        let mut mapped = pts.to_vec();
        self.ctm.map_points(&mut mapped);
        let w = self.device.width as i64;
        let h = self.device.height as i64;
        let mut edges = vec![];
        for i in 0..mapped.len() {
            clip_segment(mapped[i], mapped[(i + 1) % mapped.len()], w, h,
                         &mut edges);
        }
        self.fill_edges(edges, paint, true);
    }

    /// Fill a path with the nonzero winding rule under the current
    /// transform
    pub fn draw_path(&mut self, path: &Path, paint: &mut Paint) {
        let mut dev = path.clone();
        dev.transform(&self.ctm);
        let w = self.device.width as i64;
        let h = self.device.height as i64;
        let mut edges = vec![];
        for seg in dev.segments() {
            match seg {
                Segment::Line(a, b) => clip_segment(a, b, w, h, &mut edges),
                Segment::Quad(a, b, c) => {
                    flatten_quad(a, b, c,
                                 &mut |p, q| clip_segment(p, q, w, h, &mut edges));
                }
                Segment::Cubic(a, b, c, d) => {
                    flatten_cubic(a, b, c, d,
                                  &mut |p, q| clip_segment(p, q, w, h, &mut edges));
                }
            }
        }
        self.fill_edges(edges, paint, false);
    }

    /// Draw a triangle mesh
    ///
    /// `indices` holds `count` index triples into `verts`. Per-vertex
    /// colors interpolate across each triangle; per-vertex texture
    /// coordinates sample the paint's shader; when both are given the two
    /// are multiplied. With neither there is nothing to draw.
    pub fn draw_mesh(&mut self, verts: &[Point], colors: Option<&[Color]>,
                     texs: Option<&[Point]>, count: usize, indices: &[usize],
                     paint: &mut Paint) {
        let blend = paint.blend_mode;
        for t in 0..count {
            let i0 = indices[3 * t];
            let i1 = indices[3 * t + 1];
            let i2 = indices[3 * t + 2];
            let pts = [verts[i0], verts[i1], verts[i2]];
            match (colors, texs) {
                (None, None) => return,
                (Some(cols), None) => {
                    let mut sh = TriColorShader::new(
                        pts, [cols[i0], cols[i1], cols[i2]]);
                    self.fill_triangle(pts, &mut sh, blend);
                }
                (None, Some(tex)) => {
                    let real = match paint.shader.as_deref_mut() {
                        Some(s) => s,
                        None => return,
                    };
                    let extra = match texture_transform(
                        pts, [tex[i0], tex[i1], tex[i2]]) {
                        Some(m) => m,
                        None => continue,
                    };
                    let mut sh = ProxyShader::new(real, extra);
                    self.fill_triangle(pts, &mut sh, blend);
                }
                (Some(cols), Some(tex)) => {
                    let real = match paint.shader.as_deref_mut() {
                        Some(s) => s,
                        None => return,
                    };
                    let extra = match texture_transform(
                        pts, [tex[i0], tex[i1], tex[i2]]) {
                        Some(m) => m,
                        None => continue,
                    };
                    let mut tri = TriColorShader::new(
                        pts, [cols[i0], cols[i1], cols[i2]]);
                    let mut proxy = ProxyShader::new(real, extra);
                    let mut sh = ComposeShader::new(&mut tri, &mut proxy);
                    self.fill_triangle(pts, &mut sh, blend);
                }
            }
        }
    }

    /// Draw a quad as a tessellated mesh
    ///
    /// `level` is the number of interior subdivisions per axis; level 0
    /// draws the quad as two triangles. Corners are ordered around the
    /// quad, verts[0] adjacent to verts[1] and verts[3].
    pub fn draw_quad(&mut self, verts: &[Point; 4], colors: Option<&[Color; 4]>,
                     texs: Option<&[Point; 4]>, level: usize,
                     paint: &mut Paint) {
        let n = level + 1;
        let step = 1.0 / n as f64;
        let indices = [0, 1, 3, 3, 2, 1];
        for j in 0..n {
            let v0 = j as f64 * step;
            let v1 = v0 + step;
            for i in 0..n {
                let u0 = i as f64 * step;
                let u1 = u0 + step;
                let cell = [bilerp_point(verts, u0, v0),
                            bilerp_point(verts, u1, v0),
                            bilerp_point(verts, u1, v1),
                            bilerp_point(verts, u0, v1)];
                let cell_colors = colors.map(|c| {
                    [bilerp_color(c, u0, v0), bilerp_color(c, u1, v0),
                     bilerp_color(c, u1, v1), bilerp_color(c, u0, v1)]
                });
                let cell_texs = texs.map(|t| {
                    [bilerp_point(t, u0, v0), bilerp_point(t, u1, v0),
                     bilerp_point(t, u1, v1), bilerp_point(t, u0, v1)]
                });
                self.draw_mesh(&cell,
                               cell_colors.as_ref().map(|c| &c[..]),
                               cell_texs.as_ref().map(|t| &t[..]),
                               2, &indices, paint);
            }
        }
    }

    fn fill_triangle(&mut self, pts: [Point; 3], shader: &mut dyn Shader,
                     blend: BlendMode) {
        let mut paint = Paint::with_shader(shader).blend_mode(blend);
        self.draw_convex_polygon(&pts, &mut paint);
    }

    fn fill_edges(&mut self, mut edges: Vec<Edge>, paint: &mut Paint,
                  convex: bool) {
        let width = self.device.width as i64;
        let blend = paint.blend_mode.proc();
        match &mut paint.shader {
            None => {
                let src = paint.color.premul();
                let device = &mut *self.device;
                let mut blit = |l: i64, y: i64, r: i64| {
                    let row = device.row_mut(y as usize);
                    for p in &mut row[l as usize..r as usize] {
                        *p = blend(src, *p);
                    }
                    true
                };
                if convex {
                    fill_convex(&mut edges, width, &mut blit);
                } else {
                    fill_path(&mut edges, width, &mut blit);
                }
            }
            Some(shader) => {
                if !shader.set_context(&self.ctm) {
                    return;
                }
                let device = &mut *self.device;
                let mut buf = vec![Pixel::zero(); width as usize];
                let mut blit = |l: i64, y: i64, r: i64| {
                    let n = (r - l) as usize;
                    shader.shade_row(l, y, &mut buf[..n]);
                    let row = device.row_mut(y as usize);
                    for (p, s) in row[l as usize..r as usize].iter_mut()
                                                            .zip(&buf[..n]) {
                        *p = blend(*s, *p);
                    }
                    true
                };
                if convex {
                    fill_convex(&mut edges, width, &mut blit);
                } else {
                    fill_path(&mut edges, width, &mut blit);
                }
            }
        }
    }
}
