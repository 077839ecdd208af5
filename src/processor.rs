//! The batch processor: discover, transform, persist.
//!
//! [`ImageProcessor`] walks a source folder, resizes every image to fit the
//! configured square, letterboxes the shorter side, and writes each result
//! under a fresh timestamped run directory. One bad file aborts the whole
//! run — there is no skip-and-continue, and outputs written before the
//! failure stay on disk.

use crate::config::{ProcessorConfig, RUN_TIMESTAMP_FORMAT};
use crate::imaging::{CodecError, ImageCodec, PadColor, fit_to_square};
use chrono::Local;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

#[derive(Error, Debug)]
pub enum ProcessError {
    #[error("Invalid source folder {0:?}: not an existing directory. Point at one with set_source_folder().")]
    InvalidSourceFolder(PathBuf),
    #[error("Target size must be positive")]
    ZeroTargetSize,
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Codec(#[from] CodecError),
}

/// Resizes and letterboxes every image in a source folder.
///
/// Stateless across images: the only state is the configuration and the
/// source folder path. Generic over the codec so orchestration is testable
/// with a recording mock.
pub struct ImageProcessor<C: ImageCodec> {
    codec: C,
    config: ProcessorConfig,
    source_folder: PathBuf,
}

impl<C: ImageCodec> ImageProcessor<C> {
    pub fn new(codec: C, source_folder: impl Into<PathBuf>, config: ProcessorConfig) -> Self {
        Self {
            codec,
            config,
            source_folder: source_folder.into(),
        }
    }

    /// Change the source folder for subsequent runs.
    ///
    /// No validation happens here; a bad path surfaces as
    /// [`ProcessError::InvalidSourceFolder`] from the next
    /// [`process_images_in_folder`](Self::process_images_in_folder) call.
    pub fn set_source_folder(&mut self, path: impl Into<PathBuf>) {
        self.source_folder = path.into();
    }

    /// Run the full batch: create the run directory, then process every
    /// entry of the source folder in directory-listing order.
    ///
    /// Non-recursive. Every entry — subdirectories and stray non-image files
    /// included — is handed to the codec's open operation; whatever fails to
    /// decode aborts the run. Returns the created run directory.
    pub fn process_images_in_folder(&self) -> Result<PathBuf, ProcessError> {
        if self.config.target_size == 0 {
            return Err(ProcessError::ZeroTargetSize);
        }
        if !self.source_folder.is_dir() {
            return Err(ProcessError::InvalidSourceFolder(self.source_folder.clone()));
        }

        let output_dir = self.create_output_folder();
        fs::create_dir_all(&output_dir)?;
        info!("Writing processed images to {}", output_dir.display());

        for entry in fs::read_dir(&self.source_folder)? {
            let entry = entry?;
            self.process_single_image(&entry.path(), &output_dir)?;
        }

        Ok(output_dir)
    }

    /// Open, resize, pad, and store a single image.
    pub fn process_single_image(
        &self,
        image_path: &Path,
        output_dir: &Path,
    ) -> Result<(), ProcessError> {
        let img = self.codec.open(image_path)?;
        let resized = self.resize_to_square(&img);
        let padded = self.apply_padding(resized, PadColor::default())?;
        self.store_image(&padded, image_path, output_dir)?;
        info!("Processed {}", image_path.display());
        Ok(())
    }

    /// Resize so the longer side equals the configured target size.
    pub fn resize_to_square(&self, image: &C::Image) -> C::Image {
        self.resize_to_dimension(image, self.config.target_size)
    }

    /// Resize so the longer side equals `dimension`, the shorter side scaled
    /// proportionally and rounded. Returns a new raster.
    pub fn resize_to_dimension(&self, image: &C::Image, dimension: u32) -> C::Image {
        let dims = self.codec.dimensions(image);
        let (new_width, new_height) = fit_to_square((dims.width, dims.height), dimension);
        debug!(
            "Resizing {}x{} -> {}x{}",
            dims.width, dims.height, new_width, new_height
        );
        self.codec.resize(image, new_width, new_height)
    }

    /// Letterbox a non-square image onto a square canvas, anchored top-left.
    ///
    /// A square input is returned unchanged, without allocating a canvas.
    /// The canvas always uses the configured target size, even when the
    /// input was resized via [`resize_to_dimension`](Self::resize_to_dimension)
    /// to something else; an input larger than the canvas makes the paste
    /// fail with [`CodecError::PasteOutOfBounds`].
    pub fn apply_padding(&self, image: C::Image, fill: PadColor) -> Result<C::Image, ProcessError> {
        if self.codec.dimensions(&image).is_square() {
            return Ok(image);
        }

        let size = self.config.target_size;
        let mut canvas = self.codec.blank_canvas(&image, size, size, fill);
        self.codec.paste(&mut canvas, &image, 0, 0)?;
        Ok(canvas)
    }

    /// Save under the original file's base name inside `output_dir`.
    ///
    /// The extension travels with the name, so the codec re-encodes in the
    /// source format.
    pub fn store_image(
        &self,
        image: &C::Image,
        original_path: &Path,
        output_dir: &Path,
    ) -> Result<(), ProcessError> {
        let name = original_path
            .file_name()
            .unwrap_or(original_path.as_os_str());
        let save_path = output_dir.join(name);
        self.codec.save(image, &save_path)?;
        Ok(())
    }

    /// Path of the run directory for a batch starting now:
    /// `<output_root>/<local time formatted per RUN_TIMESTAMP_FORMAT>`.
    /// The directory is not created here.
    pub fn create_output_folder(&self) -> PathBuf {
        let stamp = Local::now().format(RUN_TIMESTAMP_FORMAT).to_string();
        self.config.output_root.join(stamp)
    }
}
