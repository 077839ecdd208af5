//! Image handling — pure Rust, zero external dependencies.
//!
//! The module is split into:
//! - **Calculations**: Pure functions for dimension math (unit testable)
//! - **Codec**: [`ImageCodec`] trait + shared types
//! - **Rust codec**: [`RustCodec`], the production implementation on the
//!   `image` crate
//!
//! The processor only ever talks to the [`ImageCodec`] trait, so its
//! orchestration logic is tested against a recording mock without decoding
//! a single pixel.

mod calculations;
pub mod codec;
pub mod rust_codec;

pub use calculations::fit_to_square;
pub use codec::{CodecError, Dimensions, ImageCodec, PadColor};
pub use rust_codec::RustCodec;
