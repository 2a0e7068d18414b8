//! Packed pixel format
//!
//! A pixel is 32 bits, alpha-first ARGB with 8 bits per channel. Color
//! channels are stored premultiplied by alpha, which is what the blend
//! functions in [`blend`](crate::blend) rely on.

/// Packed premultiplied ARGB pixel
#[derive(Debug,Default,Copy,Clone,PartialEq,Eq)]
pub struct Pixel(pub u32);

impl Pixel {
    /// Pack four 8-bit channels, alpha first
    pub fn pack_argb(a: u8, r: u8, g: u8, b: u8) -> Self {
        Pixel((u32::from(a) << 24) | (u32::from(r) << 16)
              | (u32::from(g) << 8) | u32::from(b))
    }
    /// Fully transparent pixel
    pub fn zero() -> Self {
        Pixel(0)
    }
    pub fn alpha(self) -> u8 {
        (self.0 >> 24) as u8
    }
    pub fn red(self) -> u8 {
        (self.0 >> 16) as u8
    }
    pub fn green(self) -> u8 {
        (self.0 >> 8) as u8
    }
    pub fn blue(self) -> u8 {
        self.0 as u8
    }
}
