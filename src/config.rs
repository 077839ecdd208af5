//! Processor configuration.
//!
//! A single struct with documented defaults, passed into
//! [`ImageProcessor`](crate::processor::ImageProcessor) at construction.
//! There is no config file and no environment lookup — two fields cover
//! everything the tool is configurable about.

use std::path::PathBuf;

/// Square dimension every output image is scaled and padded to.
///
/// 640 matches the default input resolution of the YOLO family of detectors,
/// which is what the produced dataset folders are typically fed to.
pub const DEFAULT_TARGET_SIZE: u32 = 640;

/// Base directory all timestamped run directories are created under.
pub const DEFAULT_OUTPUT_ROOT: &str = "dataset";

/// strftime pattern naming each run's output subdirectory (14 digits,
/// second resolution). Two runs starting within the same second land in the
/// same directory and silently overwrite each other — accepted granularity.
pub const RUN_TIMESTAMP_FORMAT: &str = "%Y%m%d%H%M%S";

/// Settings for a batch run. Immutable once handed to the processor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessorConfig {
    /// Output square dimension. Must be positive; the processor rejects a
    /// zero size before touching the filesystem.
    pub target_size: u32,
    /// Directory the per-run timestamped directories are created under.
    pub output_root: PathBuf,
}

impl Default for ProcessorConfig {
    fn default() -> Self {
        Self {
            target_size: DEFAULT_TARGET_SIZE,
            output_root: PathBuf::from(DEFAULT_OUTPUT_ROOT),
        }
    }
}

impl ProcessorConfig {
    /// Default config with a different square dimension.
    pub fn with_target_size(target_size: u32) -> Self {
        Self {
            target_size,
            ..Self::default()
        }
    }
}
