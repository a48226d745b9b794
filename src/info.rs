use crate::error::TgaError;
use crate::pixel::PixelLayout;
use crate::tga::header::{ImageType, Orientation, TgaHeader};

/// Header-level summary of a TGA image, read without decoding pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub struct ImageInfo {
    pub width: u32,
    pub height: u32,
    pub image_type: ImageType,
    /// Layout of the stored pixels, `None` for depths other than 8, 24 and 32.
    pub native_layout: Option<PixelLayout>,
    pub orientation: Orientation,
    pub has_color_map: bool,
}

impl ImageInfo {
    /// Read the header only. Does not validate that the payload is decodable.
    pub fn from_bytes(data: &[u8]) -> Result<Self, TgaError> {
        let (header, _) = TgaHeader::parse(data)?;
        Ok(Self::from_header(&header))
    }

    pub fn from_header(header: &TgaHeader) -> Self {
        Self {
            width: header.width(),
            height: header.height(),
            image_type: header.kind(),
            native_layout: header.stored_layout(),
            orientation: header.orientation(),
            has_color_map: header.has_color_map(),
        }
    }

    /// Whether [`crate::decode`] supports this image type and depth.
    pub fn is_decodable(&self) -> bool {
        !self.has_color_map
            && self.width > 0
            && self.height > 0
            && matches!(
                (self.image_type, self.native_layout),
                (ImageType::TrueColor, Some(PixelLayout::Bgr8 | PixelLayout::Bgra8))
                    | (ImageType::Greyscale, Some(PixelLayout::Gray8))
            )
    }
}
