//! Pixel buffer
//!
//! The device the canvas draws into, and the source the bitmap shader
//! samples from. Pixels are stored row-major as packed premultiplied ARGB.

use crate::pixel::Pixel;

/// Owned width x height pixel buffer
#[derive(Debug,Default,Clone)]
pub struct Bitmap {
    /// Image width in pixels
    pub width: usize,
    /// Image height in pixels
    pub height: usize,
    /// Row-major pixel data, `width * height` entries
    pub pixels: Vec<Pixel>,
}

impl Bitmap {
    /// Create a transparent bitmap of the given size
    ///
    /// Panics when either dimension is zero.
    pub fn new(width: usize, height: usize) -> Self {
        if width == 0 || height == 0 {
            panic!("cannot create a bitmap with 0 width or height");
        }
        Self { width, height, pixels: vec![Pixel::zero(); width * height] }
    }
    /// Wrap existing pixel data
    ///
    /// Panics when `pixels.len() != width * height`.
    pub fn from_pixels(width: usize, height: usize, pixels: Vec<Pixel>) -> Self {
        assert_eq!(pixels.len(), width * height);
        Self { width, height, pixels }
    }
    /// True when every pixel has full alpha
    pub fn is_opaque(&self) -> bool {
        self.pixels.iter().all(|p| p.alpha() == 255)
    }
    /// Set every pixel to `p`
    pub fn fill(&mut self, p: Pixel) {
        self.pixels.iter_mut().for_each(|v| *v = p);
    }
    /// Row `y` as a mutable slice
    pub fn row_mut(&mut self, y: usize) -> &mut [Pixel] {
        debug_assert!(y < self.height);
        let start = y * self.width;
        &mut self.pixels[start..start + self.width]
    }
}

use std::ops::{Index, IndexMut};

impl Index<(usize, usize)> for Bitmap {
    type Output = Pixel;
    fn index(&self, (x, y): (usize, usize)) -> &Pixel {
        assert!(x < self.width, "x {} >= width {}", x, self.width);
        assert!(y < self.height, "y {} >= height {}", y, self.height);
        &self.pixels[y * self.width + x]
    }
}
impl IndexMut<(usize, usize)> for Bitmap {
    fn index_mut(&mut self, (x, y): (usize, usize)) -> &mut Pixel {
        assert!(x < self.width, "x {} >= width {}", x, self.width);
        assert!(y < self.height, "y {} >= height {}", y, self.height);
        &mut self.pixels[y * self.width + x]
    }
}
