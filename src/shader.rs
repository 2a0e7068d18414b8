//! Shaders
//!
//! A shader answers "what color is this device pixel" for a fill. Before a
//! draw the canvas calls [`Shader::set_context`] with the current transform
//! so the shader can build the inverse map from device space back into its
//! own source space; `false` means the transform is degenerate and the draw
//! is skipped. Rows are then shaded incrementally: map the first pixel
//! center through the inverse and step by the inverse's first column for
//! each pixel after it.

use crate::bitmap::Bitmap;
use crate::blend::div255;
use crate::color::Color;
use crate::geom::Point;
use crate::math::floor_to_int;
use crate::pixel::Pixel;
use crate::transform::Transform;

/// Per-pixel color source for fills
pub trait Shader {
    /// True when every pixel this shader produces has full alpha
    fn is_opaque(&self) -> bool;
    /// Prepare to shade under `ctm`; `false` when the combined transform
    /// cannot be inverted
    fn set_context(&mut self, ctm: &Transform) -> bool;
    /// Fill `row` with the colors of the device pixels starting at (x, y)
    fn shade_row(&self, x: i64, y: i64, row: &mut [Pixel]);
}

/// How source coordinates outside [0,1) wrap
#[derive(Debug,Copy,Clone,PartialEq,Eq)]
pub enum TileMode {
    Repeat,
    Clamp,
    Mirror,
}

impl TileMode {
    // map any coordinate onto [0,1)
    fn tile(self, t: f64) -> f64 {
        match self {
            TileMode::Repeat => t - t.floor(),
            TileMode::Clamp => t.max(0.0).min(0.99999),
            TileMode::Mirror => {
                let mut v = t * 0.5;
                v -= v.floor();
                if v > 0.5 {
                    v = 1.0 - v;
                }
                v * 2.0
            }
        }
    }
}

/// Samples a bitmap, nearest texel, under a local transform
pub struct BitmapShader<'a> {
    bitmap: &'a Bitmap,
    local: Transform,
    tile: TileMode,
    inverse: Transform,
}

impl<'a> BitmapShader<'a> {
    /// `local` maps bitmap space into user space
    pub fn new(bitmap: &'a Bitmap, local: Transform, tile: TileMode) -> Self {
        Self { bitmap, local, tile, inverse: Transform::identity() }
    }
}

impl Shader for BitmapShader<'_> {
    fn is_opaque(&self) -> bool {
        self.bitmap.is_opaque()
    }
    fn set_context(&mut self, ctm: &Transform) -> bool {
        match Transform::concat(ctm, &self.local).invert() {
            Some(inv) => {
                // fold the to-unit-square scale into the inverse
                let unit = Transform::scale(1.0 / self.bitmap.width as f64,
                                            1.0 / self.bitmap.height as f64);
                self.inverse = Transform::concat(&unit, &inv);
                true
            }
            None => false,
        }
    }
    fn shade_row(&self, x: i64, y: i64, row: &mut [Pixel]) {
        let (mut px, mut py) = self.inverse.map(x as f64 + 0.5, y as f64 + 0.5);
        let w = self.bitmap.width;
        let h = self.bitmap.height;
        for out in row.iter_mut() {
            let u = self.tile.tile(px);
            let v = self.tile.tile(py);
            let ix = (floor_to_int(u * w as f64) as usize).min(w - 1);
            let iy = (floor_to_int(v * h as f64) as usize).min(h - 1);
            *out = self.bitmap[(ix, iy)];
            px += self.inverse.sx;
            py += self.inverse.shy;
        }
    }
}

/// Evenly spaced color stops along the segment p0..p1
pub struct LinearGradientShader {
    colors: Vec<Color>,
    tile: TileMode,
    local: Transform,
    inverse: Transform,
}

impl LinearGradientShader {
    /// `None` when no stops are given; a single stop shades flat
    pub fn new(p0: Point, p1: Point, colors: &[Color], tile: TileMode)
               -> Option<Self> {
        if colors.is_empty() {
            return None;
        }
        let dx = p1.x - p0.x;
        let dy = p1.y - p0.y;
        // unit x axis onto p0..p1
        let local = Transform::new(dx, -dy, p0.x,
                                   dy,  dx, p0.y);
        Some(Self {
            colors: colors.to_vec(),
            tile,
            local,
            inverse: Transform::identity(),
        })
    }
}

impl Shader for LinearGradientShader {
    fn is_opaque(&self) -> bool {
        self.colors.iter().all(|c| c.a >= 1.0)
    }
    fn set_context(&mut self, ctm: &Transform) -> bool {
        match Transform::concat(ctm, &self.local).invert() {
            Some(inv) => {
                self.inverse = inv;
                true
            }
            None => false,
        }
    }
    fn shade_row(&self, x: i64, y: i64, row: &mut [Pixel]) {
        if self.colors.len() == 1 {
            let p = self.colors[0].premul();
            for out in row.iter_mut() {
                *out = p;
            }
            return;
        }
        let spans = (self.colors.len() - 1) as f64;
        let (mut t, _) = self.inverse.map(x as f64 + 0.5, y as f64 + 0.5);
        for out in row.iter_mut() {
            let scaled = self.tile.tile(t) * spans;
            let i = (floor_to_int(scaled) as usize).min(self.colors.len() - 2);
            let frac = scaled - i as f64;
            let c0 = self.colors[i];
            let c1 = self.colors[i + 1];
            *out = Color::argb(c0.a + frac * (c1.a - c0.a),
                               c0.r + frac * (c1.r - c0.r),
                               c0.g + frac * (c1.g - c0.g),
                               c0.b + frac * (c1.b - c0.b))
                .premul();
            t += self.inverse.sx;
        }
    }
}

/// Barycentric interpolation of three colors over a triangle
pub struct TriColorShader {
    colors: [Color; 3],
    local: Transform,
    inverse: Transform,
}

impl TriColorShader {
    pub fn new(pts: [Point; 3], colors: [Color; 3]) -> Self {
        // columns are the triangle's edge vectors out of pts[0]
        let local = Transform::new(pts[1].x - pts[0].x, pts[2].x - pts[0].x, pts[0].x,
                                   pts[1].y - pts[0].y, pts[2].y - pts[0].y, pts[0].y);
        Self { colors, local, inverse: Transform::identity() }
    }
}

impl Shader for TriColorShader {
    fn is_opaque(&self) -> bool {
        self.colors.iter().all(|c| c.a >= 1.0)
    }
    fn set_context(&mut self, ctm: &Transform) -> bool {
        match Transform::concat(ctm, &self.local).invert() {
            Some(inv) => {
                self.inverse = inv;
                true
            }
            None => false,
        }
    }
    fn shade_row(&self, x: i64, y: i64, row: &mut [Pixel]) {
        let (mut u, mut v) = self.inverse.map(x as f64 + 0.5, y as f64 + 0.5);
        let [c0, c1, c2] = self.colors;
        for out in row.iter_mut() {
            let w0 = 1.0 - u - v;
            *out = Color::argb(w0 * c0.a + u * c1.a + v * c2.a,
                               w0 * c0.r + u * c1.r + v * c2.r,
                               w0 * c0.g + u * c1.g + v * c2.g,
                               w0 * c0.b + u * c1.b + v * c2.b)
                .premul();
            u += self.inverse.sx;
            v += self.inverse.shy;
        }
    }
}

// channelwise product of two premultiplied pixels
fn modulate(a: Pixel, b: Pixel) -> Pixel {
    Pixel::pack_argb(
        div255(u32::from(a.alpha()) * u32::from(b.alpha())) as u8,
        div255(u32::from(a.red()) * u32::from(b.red())) as u8,
        div255(u32::from(a.green()) * u32::from(b.green())) as u8,
        div255(u32::from(a.blue()) * u32::from(b.blue())) as u8,
    )
}

/// Multiplies the outputs of two shaders channel by channel
pub struct ComposeShader<'a> {
    first: &'a mut dyn Shader,
    second: &'a mut dyn Shader,
}

impl<'a> ComposeShader<'a> {
    pub fn new(first: &'a mut dyn Shader, second: &'a mut dyn Shader) -> Self {
        Self { first, second }
    }
}

impl Shader for ComposeShader<'_> {
    fn is_opaque(&self) -> bool {
        self.first.is_opaque() && self.second.is_opaque()
    }
    fn set_context(&mut self, ctm: &Transform) -> bool {
        self.first.set_context(ctm) && self.second.set_context(ctm)
    }
    fn shade_row(&self, x: i64, y: i64, row: &mut [Pixel]) {
        let mut a = vec![Pixel::zero(); row.len()];
        let mut b = vec![Pixel::zero(); row.len()];
        self.first.shade_row(x, y, &mut a);
        self.second.shade_row(x, y, &mut b);
        for ((out, pa), pb) in row.iter_mut().zip(&a).zip(&b) {
            *out = modulate(*pa, *pb);
        }
    }
}

/// Wraps another shader with an extra transform applied before its own
pub struct ProxyShader<'a> {
    real: &'a mut dyn Shader,
    extra: Transform,
}

impl<'a> ProxyShader<'a> {
    pub fn new(real: &'a mut dyn Shader, extra: Transform) -> Self {
        Self { real, extra }
    }
}

impl Shader for ProxyShader<'_> {
    fn is_opaque(&self) -> bool {
        self.real.is_opaque()
    }
    fn set_context(&mut self, ctm: &Transform) -> bool {
        self.real.set_context(&Transform::concat(ctm, &self.extra))
    }
    fn shade_row(&self, x: i64, y: i64, row: &mut [Pixel]) {
        self.real.shade_row(x, y, row);
    }
}
