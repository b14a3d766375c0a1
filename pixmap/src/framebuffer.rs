//! Row-major framebuffer of packed colors and the reference gradient.

use std::path::Path;

use crate::color::pack_rgb;
use crate::error::{Error, Result};

/// Owned `width * height` buffer of packed `0xRRGGBBAA` words.
///
/// Pixel `(x, y)` lives at index `x + y * width`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Framebuffer {
    width: u32,
    height: u32,
    pixels: Vec<u32>,
}

impl Framebuffer {
    /// Create a framebuffer with every word zero (transparent black).
    ///
    /// # Panics
    /// If `width * height` does not fit in `usize`.
    pub fn new(width: u32, height: u32) -> Self {
        let len = pixel_count(width, height).unwrap_or_else(|| {
            panic!("framebuffer dimensions {width}x{height} overflow usize")
        });
        Self {
            width,
            height,
            pixels: vec![0u32; len],
        }
    }

    /// Wrap existing pixels, rejecting a length that is not `width * height`.
    pub fn from_pixels(width: u32, height: u32, pixels: Vec<u32>) -> Result<Self> {
        check_len(width, height, pixels.len())?;
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Width in pixels
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<u32> {
        self.index(x, y).and_then(|idx| self.pixels.get(idx).copied())
    }

    /// Returns `false` when `(x, y)` is out of bounds.
    #[inline]
    pub fn set_pixel(&mut self, x: u32, y: u32, color: u32) -> bool {
        match self.index(x, y).and_then(|idx| self.pixels.get_mut(idx)) {
            Some(pixel) => {
                *pixel = color;
                true
            }
            None => false,
        }
    }

    pub fn pixels(&self) -> &[u32] {
        &self.pixels
    }

    pub fn into_pixels(self) -> Vec<u32> {
        self.pixels
    }

    pub fn len(&self) -> usize {
        self.pixels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// Write this framebuffer as a binary PPM, see [`crate::write_ppm`].
    pub fn write_ppm(&self, path: impl AsRef<Path>) -> Result<()> {
        crate::ppm::write_ppm(path, &self.pixels, self.width, self.height)
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(x as usize + y as usize * self.width as usize)
    }
}

/// Fill a `width x height` framebuffer with the reference gradient.
///
/// For column `i` and row `j`:
/// - red   = `255 * j / height`, truncated to 8 bits
/// - green = `255 * i / height`, truncated to 8 bits
/// - blue  = 0, alpha = 255
///
/// Green is scaled by the height, not the width, so non-square images get a
/// skewed gradient and green wraps past 255 once `i > height`. Existing output
/// depends on this, keep it.
///
/// A zero dimension yields an empty buffer without evaluating the formula.
pub fn generate(width: u32, height: u32) -> Framebuffer {
    tracing::debug!(width, height, "generating gradient");

    if width == 0 || height == 0 {
        return Framebuffer {
            width,
            height,
            pixels: Vec::new(),
        };
    }

    let mut fb = Framebuffer::new(width, height);
    let h = u64::from(height);
    for (j, row) in fb.pixels.chunks_exact_mut(width as usize).enumerate() {
        let red = (255 * j as u64 / h) as u8;
        for (i, pixel) in row.iter_mut().enumerate() {
            let green = (255 * i as u64 / h) as u8;
            *pixel = pack_rgb(red, green, 0);
        }
    }
    fb
}

/// `width * height` as a buffer length, `None` on overflow.
pub(crate) fn pixel_count(width: u32, height: u32) -> Option<usize> {
    (width as usize).checked_mul(height as usize)
}

pub(crate) fn check_len(width: u32, height: u32, actual: usize) -> Result<()> {
    let expected =
        pixel_count(width, height).ok_or(Error::DimensionsOverflow { width, height })?;
    if actual != expected {
        return Err(Error::SizeMismatch {
            width,
            height,
            expected: expected as u64,
            actual,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::{Rgba, unpack_color};

    #[test]
    fn test_framebuffer_new() {
        let fb = Framebuffer::new(8, 4);
        assert_eq!(fb.len(), 32);
        assert!(fb.pixels().iter().all(|&p| p == 0));
    }

    #[test]
    fn test_set_get_pixel() {
        let mut fb = Framebuffer::new(4, 3);
        assert!(fb.set_pixel(2, 1, 0xAABBCCDD));
        assert_eq!(fb.get_pixel(2, 1), Some(0xAABBCCDD));
        assert_eq!(fb.pixels()[2 + 4], 0xAABBCCDD);
        assert_eq!(fb.get_pixel(0, 0), Some(0));
    }

    #[test]
    fn test_out_of_bounds() {
        let mut fb = Framebuffer::new(4, 3);
        assert_eq!(fb.get_pixel(4, 0), None);
        assert_eq!(fb.get_pixel(0, 3), None);
        assert!(!fb.set_pixel(4, 0, 1));
        assert!(fb.pixels().iter().all(|&p| p == 0));
    }

    #[test]
    fn test_dimensions_match_buffer() {
        let fb = Framebuffer::from_pixels(2, 2, vec![7; 4]).unwrap();
        assert_eq!((fb.width(), fb.height()), (2, 2));
        assert_eq!(fb.len(), (fb.width() * fb.height()) as usize);

        // last in-bounds pixel and the first index past the end
        assert_eq!(fb.get_pixel(1, 1), Some(7));
        assert_eq!(fb.get_pixel(3, 1), None);
        assert_eq!(fb.get_pixel(u32::MAX, u32::MAX), None);

        let mut fb = fb;
        assert!(!fb.set_pixel(3, 1, 0));
        assert!(!fb.set_pixel(0, u32::MAX, 0));
        assert_eq!(fb.pixels(), [7, 7, 7, 7]);
    }

    #[test]
    fn test_from_pixels_rejects_bad_length() {
        let err = Framebuffer::from_pixels(3, 2, vec![0; 5]).unwrap_err();
        assert!(matches!(
            err,
            Error::SizeMismatch {
                expected: 6,
                actual: 5,
                ..
            }
        ));
        assert!(Framebuffer::from_pixels(3, 2, vec![0; 6]).is_ok());
    }

    #[test]
    fn test_gradient_corners_512() {
        let fb = generate(512, 512);
        assert_eq!(fb.len(), 512 * 512);
        assert_eq!(unpack_color(fb.pixels()[0]), Rgba::new(0, 0, 0, 255));
        assert_eq!(
            unpack_color(fb.pixels()[511 + 511 * 512]),
            Rgba::new(254, 254, 0, 255)
        );
    }

    #[test]
    fn test_gradient_row_major() {
        let fb = generate(4, 2);
        // row 1: red = 255 * 1 / 2 = 127
        let px = unpack_color(fb.get_pixel(3, 1).unwrap());
        assert_eq!(px.r, 127);
        // green = 255 * 3 / 2 = 382, truncated to 8 bits
        assert_eq!(px.g, (382u32 & 0xFF) as u8);
        assert_eq!(fb.pixels()[3 + 4], fb.get_pixel(3, 1).unwrap());
    }

    #[test]
    fn test_gradient_green_scales_by_height() {
        let fb = generate(8, 255);
        for i in 0..8 {
            assert_eq!(unpack_color(fb.get_pixel(i, 0).unwrap()).g, i as u8);
        }
    }

    #[test]
    fn test_gradient_is_deterministic() {
        assert_eq!(generate(33, 17), generate(33, 17));
    }

    #[test]
    fn test_gradient_zero_dimensions() {
        assert!(generate(0, 0).is_empty());
        assert!(generate(0, 10).is_empty());
        let fb = generate(10, 0);
        assert!(fb.is_empty());
        assert_eq!((fb.width(), fb.height()), (10, 0));
    }
}
