//! Image codec trait and shared types.
//!
//! The [`ImageCodec`] trait defines the six operations every codec must
//! support: open, dimensions, resize, blank_canvas, paste, and save.
//!
//! The production implementation is
//! [`RustCodec`](super::rust_codec::RustCodec) — pure Rust via the `image`
//! crate, statically linked into the binary.

use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CodecError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to decode {path}: {message}")]
    Decode { path: PathBuf, message: String },
    #[error("Failed to encode {path}: {message}")]
    Encode { path: PathBuf, message: String },
    #[error("Paste of {width}x{height} image exceeds {canvas_width}x{canvas_height} canvas")]
    PasteOutOfBounds {
        width: u32,
        height: u32,
        canvas_width: u32,
        canvas_height: u32,
    },
}

/// Pixel dimensions of a decoded raster.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

impl Dimensions {
    pub fn is_square(self) -> bool {
        self.width == self.height
    }
}

/// Solid fill for letterbox margins.
///
/// The arity the codec applies depends on the raster's color mode: `rgb` for
/// three-or-more channels, `gray` for single-channel and grayscale-with-alpha
/// images.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PadColor {
    pub rgb: [u8; 3],
    pub gray: u8,
}

/// The conventional letterbox gray, (114, 114, 114).
impl Default for PadColor {
    fn default() -> Self {
        Self {
            rgb: [114, 114, 114],
            gray: 114,
        }
    }
}

/// Trait for image codecs.
///
/// The raster type is opaque to callers, so the processor logic is
/// codec-agnostic and unit-testable with a recording mock.
pub trait ImageCodec {
    /// Decoded raster handle.
    type Image;

    /// Open and decode the image at `path`. Fails on non-image files.
    fn open(&self, path: &Path) -> Result<Self::Image, CodecError>;

    /// Pixel dimensions of a decoded raster.
    fn dimensions(&self, image: &Self::Image) -> Dimensions;

    /// Resample to exactly `width` x `height`. Returns a new raster; the
    /// input is left untouched.
    fn resize(&self, image: &Self::Image, width: u32, height: u32) -> Self::Image;

    /// Allocate a canvas in the same mode class as `like`, filled with `fill`.
    fn blank_canvas(
        &self,
        like: &Self::Image,
        width: u32,
        height: u32,
        fill: PadColor,
    ) -> Self::Image;

    /// Copy `image` onto `canvas` with its top-left corner at `(x, y)`.
    /// Fails if the image does not fit within the canvas.
    fn paste(
        &self,
        canvas: &mut Self::Image,
        image: &Self::Image,
        x: u32,
        y: u32,
    ) -> Result<(), CodecError>;

    /// Save by path; the output format is inferred from the extension.
    fn save(&self, image: &Self::Image, path: &Path) -> Result<(), CodecError>;
}
