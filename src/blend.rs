//! Porter-Duff compositing
//!
//! Twelve blend operators over packed premultiplied ARGB pixels, selected
//! through a constant function table indexed by [`BlendMode`]. All of them
//! share one fixed-point primitive, [`quad_mul_div255`], which scales the
//! four 8-bit channels of a pixel at once by splitting them into two
//! interleaved 16-bit lanes of a u64.

use crate::pixel::Pixel;

/// Porter-Duff blend operator
///
/// The discriminants are stable; the order matches the blend function table.
#[derive(Debug,Copy,Clone,PartialEq,Eq)]
pub enum BlendMode {
    Clear,
    Source,
    Destination,
    SourceOver,
    DestinationOver,
    SourceIn,
    DestinationIn,
    SourceOut,
    DestinationOut,
    SourceAtop,
    DestinationAtop,
    Xor,
}

impl Default for BlendMode {
    fn default() -> BlendMode {
        BlendMode::SourceOver
    }
}

/// A blend function combines a source and a destination pixel
pub type BlendFn = fn(Pixel, Pixel) -> Pixel;

const BLEND_TABLE: [BlendFn; 12] = [
    clear, source, destination,
    source_over, destination_over,
    source_in, destination_in,
    source_out, destination_out,
    source_atop, destination_atop,
    xor,
];

impl BlendMode {
    /// The blend function implementing this operator
    pub fn proc(self) -> BlendFn {
        BLEND_TABLE[self as usize]
    }
}

// turn 0xAABBCCDD into 0x00AA00CC00BB00DD
fn expand(x: u32) -> u64 {
    let hi = u64::from(x & 0xFF00_FF00); // A and G
    let lo = u64::from(x & 0x00FF_00FF); // R and B
    (hi << 24) | lo
}

// turn 0xXX into 0x00XX00XX00XX00XX
fn replicate(x: u64) -> u64 {
    (x << 48) | (x << 32) | (x << 16) | x
}

// turn 0x..AA..CC..BB..DD back into 0xAABBCCDD
fn compact(x: u64) -> u32 {
    (((x >> 24) & 0xFF00_FF00) | (x & 0x00FF_00FF)) as u32
}

/// Scale all four channels of a packed pixel by `s`, dividing by 255 with
/// rounding
///
/// Equals `round(channel * s / 255.0)` per channel for every input pair;
/// the +128 bias plus carry fold performs the rounding division.
pub fn quad_mul_div255(x: Pixel, s: u8) -> Pixel {
    let mut prod = expand(x.0) * u64::from(s);
    prod += replicate(128);
    prod += (prod >> 8) & replicate(0xFF);
    prod >>= 8;
    Pixel(compact(prod))
}

/// `round(x / 255)` for x in [0, 255*255]
pub fn div255(x: u32) -> u32 {
    let x = x + 128;
    (x + (x >> 8)) >> 8
}

fn clear(_src: Pixel, _dst: Pixel) -> Pixel {
    Pixel::zero()
}

fn source(src: Pixel, _dst: Pixel) -> Pixel {
    src
}

fn destination(_src: Pixel, dst: Pixel) -> Pixel {
    dst
}

fn source_over(src: Pixel, dst: Pixel) -> Pixel {
    let sa = src.alpha();
    Pixel(src.0.wrapping_add(quad_mul_div255(dst, 255 - sa).0))
}

fn destination_over(src: Pixel, dst: Pixel) -> Pixel {
    let da = dst.alpha();
    Pixel(dst.0.wrapping_add(quad_mul_div255(src, 255 - da).0))
}

fn source_in(src: Pixel, dst: Pixel) -> Pixel {
    quad_mul_div255(src, dst.alpha())
}

fn destination_in(src: Pixel, dst: Pixel) -> Pixel {
    quad_mul_div255(dst, src.alpha())
}

fn source_out(src: Pixel, dst: Pixel) -> Pixel {
    quad_mul_div255(src, 255 - dst.alpha())
}

fn destination_out(src: Pixel, dst: Pixel) -> Pixel {
    quad_mul_div255(dst, 255 - src.alpha())
}

fn source_atop(src: Pixel, dst: Pixel) -> Pixel {
    let sa = src.alpha();
    let da = dst.alpha();
    Pixel(quad_mul_div255(src, da).0
          .wrapping_add(quad_mul_div255(dst, 255 - sa).0))
}

fn destination_atop(src: Pixel, dst: Pixel) -> Pixel {
    let sa = src.alpha();
    let da = dst.alpha();
    Pixel(quad_mul_div255(src, 255 - da).0
          .wrapping_add(quad_mul_div255(dst, sa).0))
}

fn xor(src: Pixel, dst: Pixel) -> Pixel {
    let sa = src.alpha();
    let da = dst.alpha();
    Pixel(quad_mul_div255(src, 255 - da).0
          .wrapping_add(quad_mul_div255(dst, 255 - sa).0))
}
