//! Pure Rust image codec — zero external dependencies.
//!
//! Everything is statically linked into the binary.
//!
//! ## Crate mapping
//!
//! | Operation | Crate / function |
//! |---|---|
//! | Decode (JPEG, PNG, TIFF, WebP) | `image` crate (pure Rust decoders) |
//! | Resize | `DynamicImage::resize_exact` with `Lanczos3` filter |
//! | Pad canvas | `RgbImage` / `GrayImage` `from_pixel` |
//! | Paste | `GenericImage::copy_from` |
//! | Encode | `DynamicImage::save` (format inferred from extension) |

use super::codec::{CodecError, Dimensions, ImageCodec, PadColor};
use image::imageops::FilterType;
use image::{
    DynamicImage, GenericImage, GenericImageView, GrayImage, ImageReader, Luma, Rgb, RgbImage,
};
use std::path::Path;

/// Production codec built on the `image` crate ecosystem.
///
/// See the [module docs](self) for the crate-to-operation mapping.
pub struct RustCodec;

impl RustCodec {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RustCodec {
    fn default() -> Self {
        Self::new()
    }
}

impl ImageCodec for RustCodec {
    type Image = DynamicImage;

    fn open(&self, path: &Path) -> Result<DynamicImage, CodecError> {
        ImageReader::open(path)
            .map_err(CodecError::Io)?
            .decode()
            .map_err(|e| CodecError::Decode {
                path: path.to_path_buf(),
                message: e.to_string(),
            })
    }

    fn dimensions(&self, image: &DynamicImage) -> Dimensions {
        let (width, height) = image.dimensions();
        Dimensions { width, height }
    }

    fn resize(&self, image: &DynamicImage, width: u32, height: u32) -> DynamicImage {
        image.resize_exact(width, height, FilterType::Lanczos3)
    }

    /// Canvas mode follows the input's channel count: three-or-more channels
    /// get an RGB canvas with the `rgb` fill, one or two channels get a
    /// grayscale canvas with the `gray` fill. Alpha does not survive padding.
    fn blank_canvas(
        &self,
        like: &DynamicImage,
        width: u32,
        height: u32,
        fill: PadColor,
    ) -> DynamicImage {
        if like.color().channel_count() >= 3 {
            DynamicImage::ImageRgb8(RgbImage::from_pixel(width, height, Rgb(fill.rgb)))
        } else {
            DynamicImage::ImageLuma8(GrayImage::from_pixel(width, height, Luma([fill.gray])))
        }
    }

    fn paste(
        &self,
        canvas: &mut DynamicImage,
        image: &DynamicImage,
        x: u32,
        y: u32,
    ) -> Result<(), CodecError> {
        canvas.copy_from(image, x, y).map_err(|_| {
            let (width, height) = image.dimensions();
            CodecError::PasteOutOfBounds {
                width,
                height,
                canvas_width: canvas.width(),
                canvas_height: canvas.height(),
            }
        })
    }

    fn save(&self, image: &DynamicImage, path: &Path) -> Result<(), CodecError> {
        image.save(path).map_err(|e| CodecError::Encode {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }
}
