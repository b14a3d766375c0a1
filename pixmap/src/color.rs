//! Packed color codec
//!
//! A packed color is a `u32` laid out as `0xRRGGBBAA`:
//!
//! ```text
//! bits 31..24  red
//! bits 23..16  green
//! bits 15..8   blue
//! bits  7..0   alpha
//! ```
//!
//! Channels are `u8`, so packing never needs range checks, and unpacking is
//! the exact inverse of packing for every input.

use std::fmt;

/// Alpha value used when a color is packed without an explicit alpha.
pub const OPAQUE: u8 = 255;

/// Four 8-bit channels, the decoded form of a packed color.
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq, Hash)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque color (alpha = 255).
    #[inline]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, OPAQUE)
    }

    #[inline]
    pub const fn pack(self) -> u32 {
        pack_color(self.r, self.g, self.b, self.a)
    }

    #[inline]
    pub const fn from_packed(color: u32) -> Self {
        unpack_color(color)
    }

    /// Red, green and blue bytes in file order.
    #[inline]
    pub const fn to_rgb_bytes(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

impl From<Rgba> for u32 {
    #[inline]
    fn from(color: Rgba) -> Self {
        color.pack()
    }
}

impl From<u32> for Rgba {
    #[inline]
    fn from(color: u32) -> Self {
        unpack_color(color)
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

/// Pack four channels into a `0xRRGGBBAA` word.
///
/// ```
/// assert_eq!(pixmap::pack_color(50, 100, 200, 255), 0x3264C8FF);
/// ```
#[inline]
pub const fn pack_color(r: u8, g: u8, b: u8, a: u8) -> u32 {
    ((r as u32) << 24) | ((g as u32) << 16) | ((b as u32) << 8) | a as u32
}

/// Pack an opaque color (alpha = [`OPAQUE`]).
#[inline]
pub const fn pack_rgb(r: u8, g: u8, b: u8) -> u32 {
    pack_color(r, g, b, OPAQUE)
}

/// Split a `0xRRGGBBAA` word into its channels.
#[inline]
pub const fn unpack_color(color: u32) -> Rgba {
    Rgba {
        r: (color >> 24) as u8,
        g: (color >> 16) as u8,
        b: (color >> 8) as u8,
        a: color as u8,
    }
}

/// Binary dump of a packed word, nibbles separated by `_`.
///
/// `0x32000000` renders as `0011_0010_0000_0000_0000_0000_0000_0000`.
pub fn bits_string(color: u32) -> String {
    let bits = format!("{color:032b}");
    let mut out = String::with_capacity(39);
    for (i, nibble) in bits.as_bytes().chunks(4).enumerate() {
        if i > 0 {
            out.push('_');
        }
        // format! only produces ASCII digits
        out.extend(nibble.iter().map(|&b| b as char));
    }
    out
}

/// Hex dump of a packed word, e.g. `0x3264C8FF`.
pub fn hex_string(color: u32) -> String {
    format!("{color:#010X}")
}
