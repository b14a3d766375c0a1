//! Error type for framebuffer construction and PPM export.

use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Pixel buffer length does not match `width * height`.
    ///
    /// This is a caller bug, not a runtime condition: nothing is written.
    #[error("pixel buffer holds {actual} pixels but {width}x{height} needs {expected}")]
    SizeMismatch {
        width: u32,
        height: u32,
        expected: u64,
        actual: usize,
    },

    #[error("image dimensions {width}x{height} are too large")]
    DimensionsOverflow { width: u32, height: u32 },

    #[error("failed to write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write image data: {0}")]
    Write(#[from] std::io::Error),
}

impl Error {
    /// True for errors caused by a caller passing inconsistent arguments.
    pub fn is_contract_violation(&self) -> bool {
        matches!(self, Self::SizeMismatch { .. } | Self::DimensionsOverflow { .. })
    }
}
