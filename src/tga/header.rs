//! Fixed 18-byte TGA header.

use crate::cursor::Cursor;
use crate::error::TgaError;
use crate::pixel::PixelLayout;

/// Size of the fixed header in bytes.
pub const HEADER_SIZE: usize = 18;

const DESC_ORIGIN_TOP: u8 = 0x10;
const DESC_ORIGIN_RIGHT: u8 = 0x20;

/// Color map specification (header bytes 3..8).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ColorMapSpec {
    /// First color table index.
    pub origin: u16,
    /// Number of color table entries.
    pub length: u16,
    /// Bits per color table entry.
    pub entry_bits: u8,
}

/// Image specification (header bytes 8..18).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ImageSpec {
    pub x_origin: u16,
    pub y_origin: u16,
    pub width: u16,
    pub height: u16,
    /// Bits per stored pixel.
    pub depth: u8,
    /// Descriptor flags (origin corner, attribute bits).
    pub descriptor: u8,
}

/// Parsed TGA header.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TgaHeader {
    /// Length of the image ID block following the header.
    pub id_length: u8,
    /// Nonzero when a color map is present.
    pub color_map_type: u8,
    /// Raw image type code.
    pub image_type: u8,
    pub color_map: ColorMapSpec,
    pub image: ImageSpec,
}

/// Image type code from header byte 2.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ImageType {
    /// 2: uncompressed true color.
    TrueColor,
    /// 3: uncompressed greyscale.
    Greyscale,
    /// 10: run-length encoded true color.
    RleTrueColor,
    Other(u8),
}

impl ImageType {
    fn from_u8(code: u8) -> Self {
        match code {
            2 => Self::TrueColor,
            3 => Self::Greyscale,
            10 => Self::RleTrueColor,
            other => Self::Other(other),
        }
    }
}

/// Storage orientation decoded from the descriptor byte.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Orientation {
    /// First stored row is the top row.
    pub top_origin: bool,
    /// First stored pixel of each row is the rightmost one.
    pub right_origin: bool,
}

impl Orientation {
    pub fn from_descriptor(descriptor: u8) -> Self {
        Self {
            top_origin: descriptor & DESC_ORIGIN_TOP != 0,
            right_origin: descriptor & DESC_ORIGIN_RIGHT != 0,
        }
    }

    /// Rows are stored bottom-up.
    pub fn needs_vertical_flip(&self) -> bool {
        !self.top_origin
    }

    /// Pixels are stored right-to-left.
    pub fn needs_horizontal_flip(&self) -> bool {
        self.right_origin
    }
}

impl TgaHeader {
    /// Parse the header from the start of `data`.
    ///
    /// Returns the header and the offset of the first byte after it (the
    /// start of the image ID block). Input must be strictly longer than
    /// [`HEADER_SIZE`]. Field values are not validated here; see
    /// [`TgaHeader::check_dimensions`].
    pub fn parse(data: &[u8]) -> Result<(Self, usize), TgaError> {
        if data.len() <= HEADER_SIZE {
            return Err(TgaError::MalformedHeader(alloc::format!(
                "input is {} bytes, need more than {HEADER_SIZE}",
                data.len()
            )));
        }

        let mut c = Cursor::new(data);
        let header = Self::read(&mut c)?;
        debug_assert_eq!(c.position(), HEADER_SIZE);

        log::trace!(
            "tga header: type={} cmap={} {}x{} depth={} desc={:#04x} id_len={}",
            header.image_type,
            header.color_map_type,
            header.image.width,
            header.image.height,
            header.image.depth,
            header.image.descriptor,
            header.id_length
        );

        Ok((header, c.position()))
    }

    /// Reject a zero width or height.
    pub fn check_dimensions(&self) -> Result<(), TgaError> {
        if self.image.width == 0 {
            return Err(TgaError::MalformedHeader("width is zero".into()));
        }
        if self.image.height == 0 {
            return Err(TgaError::MalformedHeader("height is zero".into()));
        }
        Ok(())
    }

    fn read(c: &mut Cursor<'_>) -> Result<Self, TgaError> {
        let id_length = c.read_u8()?;
        let color_map_type = c.read_u8()?;
        let image_type = c.read_u8()?;
        let color_map = ColorMapSpec {
            origin: c.read_u16_le()?,
            length: c.read_u16_le()?,
            entry_bits: c.read_u8()?,
        };
        let image = ImageSpec {
            x_origin: c.read_u16_le()?,
            y_origin: c.read_u16_le()?,
            width: c.read_u16_le()?,
            height: c.read_u16_le()?,
            depth: c.read_u8()?,
            descriptor: c.read_u8()?,
        };
        Ok(Self {
            id_length,
            color_map_type,
            image_type,
            color_map,
            image,
        })
    }

    pub fn kind(&self) -> ImageType {
        ImageType::from_u8(self.image_type)
    }

    pub fn orientation(&self) -> Orientation {
        Orientation::from_descriptor(self.image.descriptor)
    }

    pub fn has_color_map(&self) -> bool {
        self.color_map_type != 0
    }

    /// Layout of the stored pixels, when the depth is one of 8, 24 or 32.
    pub fn stored_layout(&self) -> Option<PixelLayout> {
        PixelLayout::from_depth(self.image.depth)
    }

    pub fn width(&self) -> u32 {
        u32::from(self.image.width)
    }

    pub fn height(&self) -> u32 {
        u32::from(self.image.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> [u8; HEADER_SIZE + 1] {
        let mut h = [0u8; HEADER_SIZE + 1];
        h[0] = 3; // id length
        h[2] = 2;
        h[3..5].copy_from_slice(&0x0102u16.to_le_bytes());
        h[5..7].copy_from_slice(&0x0304u16.to_le_bytes());
        h[7] = 24;
        h[8..10].copy_from_slice(&7u16.to_le_bytes());
        h[10..12].copy_from_slice(&9u16.to_le_bytes());
        h[12..14].copy_from_slice(&640u16.to_le_bytes());
        h[14..16].copy_from_slice(&480u16.to_le_bytes());
        h[16] = 32;
        h[17] = 0x30;
        h
    }

    #[test]
    fn parses_every_field() {
        let (header, offset) = TgaHeader::parse(&sample()).unwrap();
        assert_eq!(offset, HEADER_SIZE);
        assert_eq!(header.id_length, 3);
        assert_eq!(header.kind(), ImageType::TrueColor);
        assert_eq!(header.color_map.origin, 0x0102);
        assert_eq!(header.color_map.length, 0x0304);
        assert_eq!(header.color_map.entry_bits, 24);
        assert_eq!(header.image.x_origin, 7);
        assert_eq!(header.image.y_origin, 9);
        assert_eq!((header.width(), header.height()), (640, 480));
        assert_eq!(header.stored_layout(), Some(PixelLayout::Bgra8));
        let o = header.orientation();
        assert!(o.top_origin && o.right_origin);
    }

    #[test]
    fn exactly_header_sized_input_is_malformed() {
        let data = [0u8; HEADER_SIZE];
        assert!(matches!(
            TgaHeader::parse(&data),
            Err(TgaError::MalformedHeader(_))
        ));
    }

    #[test]
    fn zero_dimensions_parse_but_fail_the_dimension_check() {
        let mut data = sample();
        data[12] = 0;
        data[13] = 0;
        let (header, _) = TgaHeader::parse(&data).unwrap();
        assert_eq!(header.width(), 0);
        assert!(matches!(
            header.check_dimensions(),
            Err(TgaError::MalformedHeader(_))
        ));

        let (header, _) = TgaHeader::parse(&sample()).unwrap();
        assert!(header.check_dimensions().is_ok());
    }

    #[test]
    fn descriptor_bits() {
        let bottom_left = Orientation::from_descriptor(0x00);
        assert!(bottom_left.needs_vertical_flip());
        assert!(!bottom_left.needs_horizontal_flip());

        let top_right = Orientation::from_descriptor(0x30);
        assert!(!top_right.needs_vertical_flip());
        assert!(top_right.needs_horizontal_flip());

        // Attribute bits don't affect orientation.
        assert_eq!(Orientation::from_descriptor(0x18), Orientation::from_descriptor(0x10));
    }
}
