//! Reading and writing of image files
//!
//! Formats are whatever the `image` crate decodes; PNG and PPM are the ones
//! used by the tests. On read the straight-alpha file data is premultiplied
//! into the packed pixel format, on write it is unpremultiplied back.

use crate::bitmap::Bitmap;
use crate::blend::div255;
use crate::pixel::Pixel;
use std::path::Path;

/// Read an image file into a premultiplied bitmap
pub fn read_file<P: AsRef<Path>>(filename: P) -> Result<Bitmap, image::ImageError> {
    let img = image::open(filename)?.to_rgba8();
    let (w, h) = img.dimensions();
    let pixels = img
        .pixels()
        .map(|p| {
            let [r, g, b, a] = p.0;
            let a = u32::from(a);
            Pixel::pack_argb(a as u8,
                             div255(u32::from(r) * a) as u8,
                             div255(u32::from(g) * a) as u8,
                             div255(u32::from(b) * a) as u8)
        })
        .collect();
    Ok(Bitmap::from_pixels(w as usize, h as usize, pixels))
}

// premultiplied channel back to straight alpha
fn unpremul(c: u8, a: u8) -> u8 {
    if a == 0 {
        0
    } else {
        ((u32::from(c) * 255 + u32::from(a) / 2) / u32::from(a)) as u8
    }
}

/// Write a bitmap as straight-alpha RGBA
pub fn write_file<P: AsRef<Path>>(bitmap: &Bitmap, filename: P)
                                  -> Result<(), image::ImageError> {
    let mut buf = Vec::with_capacity(bitmap.pixels.len() * 4);
    for p in &bitmap.pixels {
        let a = p.alpha();
        buf.push(unpremul(p.red(), a));
        buf.push(unpremul(p.green(), a));
        buf.push(unpremul(p.blue(), a));
        buf.push(a);
    }
    image::save_buffer(filename, &buf,
                       bitmap.width as u32, bitmap.height as u32,
                       image::ColorType::Rgba8)
}

/// Compare two image files pixel for pixel
pub fn img_diff<P: AsRef<Path>>(f1: P, f2: P) -> Result<bool, image::ImageError> {
    let b1 = read_file(f1)?;
    let b2 = read_file(f2)?;
    if b1.width != b2.width || b1.height != b2.height {
        return Ok(false);
    }
    let mut flag = true;
    for (i, (p1, p2)) in b1.pixels.iter().zip(b2.pixels.iter()).enumerate() {
        if p1 != p2 {
            println!("{} [{},{}]: {:08x} {:08x}",
                     i, i % b1.width, i / b1.width, p1.0, p2.0);
            flag = false;
        }
    }
    Ok(flag)
}
