//! # zentga
//!
//! TGA (Truevision Targa) image decoder.
//!
//! Decodes an in-memory TGA file into an owned, canonical pixel buffer:
//! 4 bytes per pixel in B, G, R, A order, row 0 at the top, rows running
//! left to right. The descriptor's origin bits are applied so callers never
//! see bottom-up or right-to-left storage.
//!
//! ## Supported Formats
//!
//! - Type 2, uncompressed true color, 24-bit (alpha filled with 255) and 32-bit
//! - Type 3, uncompressed greyscale, 8-bit (grey replicated into B, G, R)
//!
//! ## Non-Goals
//!
//! - Color-mapped images and RLE compression are rejected with
//!   [`TgaError::UnsupportedFeature`]
//! - TGA 2.0 extension area and footer
//! - Encoding
//!
//! ## Usage
//!
//! ```no_run
//! use zentga::{ImageInfo, Unstoppable};
//!
//! let data: &[u8] = &[]; // your TGA bytes
//!
//! // Inspect the header without decoding
//! let info = ImageInfo::from_bytes(data)?;
//! println!("{}x{} {:?}", info.width, info.height, info.image_type);
//!
//! let image = zentga::decode(data, Unstoppable)?;
//! assert_eq!(image.pixels().len(), image.width as usize * image.height as usize * 4);
//! # Ok::<(), zentga::TgaError>(())
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

mod cursor;
mod decode;
mod error;
mod info;
mod limits;
mod pixel;
mod tga;

// Re-exports
pub use decode::{DecodeOutput, DecodeRequest};
pub use enough::{Stop, StopReason, Unstoppable};
pub use error::TgaError;
pub use info::ImageInfo;
pub use limits::Limits;
#[cfg(feature = "rgb")]
pub use pixel::DecodePixel;
pub use pixel::PixelLayout;
pub use tga::header::{
    ColorMapSpec, HEADER_SIZE, ImageSpec, ImageType, Orientation, TgaHeader,
};
pub use tga::orient::{flip_horizontal, flip_vertical};

/// Decode a TGA image to canonical BGRA with no resource limits.
pub fn decode(data: &[u8], stop: impl Stop) -> Result<DecodeOutput, TgaError> {
    DecodeRequest::new(data).decode(stop)
}

/// Decode a TGA image, rejecting it up front if it exceeds `limits`.
pub fn decode_with_limits(
    data: &[u8],
    limits: &Limits,
    stop: impl Stop,
) -> Result<DecodeOutput, TgaError> {
    DecodeRequest::new(data).with_limits(limits).decode(stop)
}
