//! Binary portable pixmap (P6) export
//!
//! # Layout
//! ```text
//! "P6\n"
//! "<width> <height>\n"     decimal ASCII
//! "255\n"
//! width * height pixels, 3 bytes each (R G B), row-major
//! ```
//!
//! No comment lines, no padding, nothing after the last pixel. Alpha is
//! dropped.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::color::unpack_color;
use crate::error::{Error, Result};
use crate::framebuffer::check_len;

/// Maximum channel value written in the header.
pub const MAX_VALUE: u8 = 255;

/// Bytes per pixel in the payload.
pub const BYTES_PER_PIXEL: usize = 3;

/// Header text for a `width x height` image.
pub fn ppm_header(width: u32, height: u32) -> String {
    format!("P6\n{width} {height}\n{MAX_VALUE}\n")
}

/// Total file size in bytes, or `None` if it does not fit in a `u64`.
pub fn encoded_len(width: u32, height: u32) -> Option<u64> {
    let payload = u64::from(width)
        .checked_mul(u64::from(height))?
        .checked_mul(BYTES_PER_PIXEL as u64)?;
    payload.checked_add(ppm_header(width, height).len() as u64)
}

/// Encode packed pixels as P6 into any writer.
///
/// `pixels.len()` must equal `width * height`; otherwise nothing is written
/// and [`Error::SizeMismatch`] is returned.
pub fn encode_ppm<W: Write>(mut writer: W, pixels: &[u32], width: u32, height: u32) -> Result<()> {
    check_len(width, height, pixels.len())?;

    writer.write_all(ppm_header(width, height).as_bytes())?;
    for &pixel in pixels {
        writer.write_all(&unpack_color(pixel).to_rgb_bytes())?;
    }
    Ok(())
}

/// Write packed pixels to `path` as a binary PPM, truncating any existing file.
///
/// The buffer is validated before the file is opened, so a length mismatch
/// leaves the destination untouched. The file handle is released on every
/// return path.
pub fn write_ppm(path: impl AsRef<Path>, pixels: &[u32], width: u32, height: u32) -> Result<()> {
    let path = path.as_ref();
    check_len(width, height, pixels.len())?;

    tracing::debug!(
        path = %path.display(),
        width,
        height,
        bytes = encoded_len(width, height),
        "writing ppm"
    );

    let io_err = |source| Error::Io {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(io_err)?;
    let mut w = BufWriter::new(file);

    match encode_ppm(&mut w, pixels, width, height) {
        Ok(()) => {}
        Err(Error::Write(source)) => return Err(io_err(source)),
        Err(e) => return Err(e),
    }

    // Surface buffered write failures instead of losing them on drop.
    w.flush().map_err(io_err)?;
    Ok(())
}
