//! Convert camera preview frames between pixel formats.
//!
//! Camera pipelines hand out preview frames as 4:2:0 sub sampled YUV
//! ([`PixelFormat::NV21`], [`PixelFormat::YV12`] or [`PixelFormat::I420`]).
//! This crate converts such frames to greyscale or RGBA, and packs RGBA
//! frames into RGB565 or RGB for byte oriented storage.
//!
//! All per-pixel math lives in [`kernel`] as pure functions over scalar
//! samples. The `convert_*` functions map one kernel over every output
//! coordinate; with the `multi-thread` feature (enabled by default) the
//! `_multi_thread` variants distribute the output rows over all available
//! CPUs using rayon.
//!
//! ```
//! use frame_convert::{PixelFormat, YuvFrame, convert_to_rgba};
//!
//! let (width, height) = (4, 2);
//! let nv21 = vec![0x80; PixelFormat::NV21.buffer_size(width, height)];
//!
//! let src = YuvFrame::new(PixelFormat::NV21, &nv21, width, height).unwrap();
//! let mut rgba = vec![0; PixelFormat::RGBA.buffer_size(width, height)];
//!
//! convert_to_rgba(&src, &mut rgba).unwrap();
//! ```

pub use convert::{convert_rgba_to_rgb, convert_rgba_to_rgb565, convert_to_grey, convert_to_rgba};
pub use frame::YuvFrame;
#[cfg(feature = "multi-thread")]
pub use multi_thread::{
    convert_rgba_to_rgb565_multi_thread, convert_rgba_to_rgb_multi_thread,
    convert_to_grey_multi_thread, convert_to_rgba_multi_thread,
};
pub use pixel_format::PixelFormat;

pub mod kernel;

mod convert;
mod frame;
#[cfg(feature = "multi-thread")]
mod multi_thread;
mod pixel_format;

/// Everything that can go wrong when wrapping or converting a frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ConvertError {
    #[error("width and height must be non-zero and even")]
    InvalidDimensions,

    #[error("buffer too small for the given dimensions, expected {expected} primitives but got {got}")]
    BufferTooSmall { expected: usize, got: usize },
}
