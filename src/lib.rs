//! # squareset
//!
//! Batch image resizer that letterboxes photos into fixed-size squares for
//! dataset preparation. Point it at a folder of images and every one is
//! scaled so its longer side matches the target dimension (640 by default),
//! padded with the conventional (114, 114, 114) gray to an exact square,
//! and written under a fresh timestamped `dataset/` run directory keeping
//! its original filename and format.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`processor`] | The batch loop — discovery, resize, pad, store |
//! | [`imaging`] | Codec trait, dimension math, and the `image`-crate codec |
//! | [`config`] | The two-field run configuration and its defaults |
//!
//! # Design Decisions
//!
//! ## Top-Left Letterboxing
//!
//! Padding anchors the resized image at the canvas's top-left corner rather
//! than centering it. Downstream annotation coordinates scale with a single
//! factor and no offset, so the anchor is part of the output contract —
//! centered letterboxing would silently shift every label.
//!
//! ## Fail-Fast Batches
//!
//! A file that fails to decode aborts the entire run. The tool prepares
//! training datasets, where a silently skipped image is worse than a halted
//! run: the operator should fix or remove the bad file and rerun. Outputs
//! written before the failure stay on disk.
//!
//! ## Codec Behind a Trait
//!
//! All pixel work sits behind [`imaging::ImageCodec`]. The production
//! implementation uses the `image` crate (pure Rust decoders, Lanczos3
//! resampling); tests drive the processor with a recording mock, so the
//! orchestration logic is verified without encoding a single image.

pub mod config;
pub mod imaging;
pub mod processor;
