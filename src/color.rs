//! Colors
//!
//! A [`Color`] is four unit-range floats in A,R,G,B order. Values are not
//! required to be pre-clamped; every conversion to a packed pixel pins each
//! component to [0,1] first and premultiplies the color channels by alpha.

use crate::math::{pin_unit, round_to_int};
use crate::pixel::Pixel;

/// Unit-float ARGB color
#[derive(Debug,Default,Copy,Clone,PartialEq)]
pub struct Color {
    /// Alpha
    pub a: f64,
    /// Red
    pub r: f64,
    /// Green
    pub g: f64,
    /// Blue
    pub b: f64,
}

impl Color {
    /// Create a new color, components in [0,1]
    pub fn argb(a: f64, r: f64, g: f64, b: f64) -> Self {
        Self { a, r, g, b }
    }
    /// Opaque color from r,g,b
    pub fn rgb(r: f64, g: f64, b: f64) -> Self {
        Self::argb(1.0, r, g, b)
    }
    /// Opaque white (1,1,1,1)
    pub fn white() -> Self {
        Self::rgb(1.0, 1.0, 1.0)
    }
    /// Opaque black (1,0,0,0)
    pub fn black() -> Self {
        Self::rgb(0.0, 0.0, 0.0)
    }
    /// Pin components and convert to a packed premultiplied pixel
    pub fn premul(&self) -> Pixel {
        let a = pin_unit(self.a);
        let r = pin_unit(self.r);
        let g = pin_unit(self.g);
        let b = pin_unit(self.b);
        Pixel::pack_argb(round_to_int(a * 255.0) as u8,
                         round_to_int(a * r * 255.0) as u8,
                         round_to_int(a * g * 255.0) as u8,
                         round_to_int(a * b * 255.0) as u8)
    }
}
