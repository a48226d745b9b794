//! Route selection between color-mapped and direct-color payloads.

use alloc::vec::Vec;

use super::header::TgaHeader;
use crate::cursor::Cursor;
use crate::error::TgaError;

/// Which reader handles the pixel payload.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum PayloadRoute {
    /// Pixels are explicit channel values.
    Direct,
}

impl PayloadRoute {
    /// Pick the payload reader from header fields alone.
    pub(crate) fn select(header: &TgaHeader) -> Result<Self, TgaError> {
        if header.has_color_map() {
            log::debug!(
                "tga: color map type {} ({} entries of {} bits) not supported",
                header.color_map_type,
                header.color_map.length,
                header.color_map.entry_bits
            );
            return Err(TgaError::UnsupportedFeature("color-mapped"));
        }
        Ok(Self::Direct)
    }
}

/// Copy the image ID block that follows the header.
///
/// Leaves the cursor at the first byte after the block, which for the
/// direct route is the start of the pixel payload.
pub(crate) fn read_image_id(c: &mut Cursor<'_>, id_length: u8) -> Result<Vec<u8>, TgaError> {
    let id = c.take(usize::from(id_length))?.to_vec();
    log::trace!("tga: image id {} bytes", id.len());
    Ok(id)
}
