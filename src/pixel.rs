/// Pixel memory layout.
///
/// Decoded output is always [`PixelLayout::Bgra8`]. The other variants
/// describe how pixels are stored in the file, as reported by
/// [`crate::ImageInfo::native_layout`].
#[non_exhaustive]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PixelLayout {
    /// Single channel, 8-bit greyscale.
    Gray8,
    /// 3 channels, 8-bit BGR.
    Bgr8,
    /// 4 channels, 8-bit BGRA.
    Bgra8,
}

impl PixelLayout {
    /// Bytes per pixel for this layout.
    pub fn bytes_per_pixel(&self) -> usize {
        match self {
            Self::Gray8 => 1,
            Self::Bgr8 => 3,
            Self::Bgra8 => 4,
        }
    }

    /// Layout of a stored TGA pixel with `depth` bits, if it is one we read.
    pub(crate) fn from_depth(depth: u8) -> Option<Self> {
        match depth {
            8 => Some(Self::Gray8),
            24 => Some(Self::Bgr8),
            32 => Some(Self::Bgra8),
            _ => None,
        }
    }
}

/// Typed pixels that decoded output can be reinterpreted as.
#[cfg(feature = "rgb")]
pub trait DecodePixel: Copy {
    /// Layout whose memory representation matches `Self`.
    fn layout() -> PixelLayout;
}

#[cfg(feature = "rgb")]
impl DecodePixel for rgb::alt::BGRA8 {
    fn layout() -> PixelLayout {
        PixelLayout::Bgra8
    }
}
