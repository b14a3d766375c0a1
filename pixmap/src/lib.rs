//! Packed RGBA colors, gradient framebuffers and binary PPM export
//!
//! Three small pieces that compose into a render-to-disk pipeline:
//!
//! - [`color`] packs four 8-bit channels into one `u32` word (`0xRRGGBBAA`)
//!   and unpacks them again.
//! - [`framebuffer`] owns a row-major buffer of packed words and fills it with
//!   the reference gradient.
//! - [`ppm`] serializes a packed buffer to the binary portable pixmap (P6)
//!   format, dropping alpha.
//!
//! # Example
//! ```no_run
//! use pixmap::{generate, pack_color};
//!
//! assert_eq!(pack_color(50, 100, 200, 255), 0x3264C8FF);
//!
//! let fb = generate(512, 512);
//! fb.write_ppm("out.ppm")?;
//! # Ok::<(), pixmap::Error>(())
//! ```

pub mod color;
pub mod error;
pub mod framebuffer;
pub mod ppm;

pub use color::{OPAQUE, Rgba, bits_string, hex_string, pack_color, pack_rgb, unpack_color};
pub use error::{Error, Result};
pub use framebuffer::{Framebuffer, generate};
pub use ppm::{encode_ppm, encoded_len, ppm_header, write_ppm};
