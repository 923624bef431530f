//! Frame stylizer - the "evidence photo" look
//!
//! Takes one raw RGBA frame and produces a stylized copy: sepia tone,
//! contrast stretch, per-pixel noise, then a timestamp-style overlay in the
//! bottom-left corner. Deterministic for a seeded noise source; pixels are
//! independent, so the work can be row-sharded freely.

mod filter;
mod font;
mod frame;
mod noise;
mod overlay;

pub use filter::{stylize, stylize_parallel};
pub use frame::Frame;
pub use noise::{NoiseSource, SeededNoise};

use thiserror::Error;

/// Errors from the frame stylizer
#[derive(Debug, Error)]
pub enum StylizeError {
    /// Zero dimension or a buffer that does not match width x height x 4
    #[error("invalid frame: {width}x{height} with {actual} bytes (expected {expected})")]
    InvalidFrame {
        width: u32,
        height: u32,
        expected: usize,
        actual: usize,
    },
}
