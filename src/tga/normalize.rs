//! Stored pixel encodings to canonical 4-byte BGRA.

use alloc::vec;
use alloc::vec::Vec;

use enough::Stop;

use super::header::{ImageType, TgaHeader};
use crate::cursor::Cursor;
use crate::error::TgaError;
use crate::pixel::PixelLayout;

/// Supported (image type, depth) combinations for the direct-color route.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum PixelEncoding {
    /// Type 2, 32 bits: already canonical.
    Bgra32,
    /// Type 2, 24 bits: alpha is filled with 255.
    Bgr24,
    /// Type 3, 8 bits: grey replicated into B, G and R, alpha 255.
    Gray8,
}

impl PixelEncoding {
    /// Validate image type and depth without touching the payload.
    pub(crate) fn from_header(header: &TgaHeader) -> Result<Self, TgaError> {
        let depth = header.image.depth;
        let unsupported_depth = TgaError::UnsupportedPixelDepth {
            image_type: header.image_type,
            depth,
        };
        match header.kind() {
            ImageType::TrueColor => match depth {
                32 => Ok(Self::Bgra32),
                24 => Ok(Self::Bgr24),
                _ => Err(unsupported_depth),
            },
            ImageType::Greyscale => match depth {
                8 => Ok(Self::Gray8),
                _ => Err(unsupported_depth),
            },
            ImageType::RleTrueColor => Err(TgaError::UnsupportedFeature("RLE compression")),
            ImageType::Other(code) => Err(TgaError::UnsupportedImageType(code)),
        }
    }

    /// Layout of one stored pixel.
    pub(crate) fn stored_layout(self) -> PixelLayout {
        match self {
            Self::Bgra32 => PixelLayout::Bgra8,
            Self::Bgr24 => PixelLayout::Bgr8,
            Self::Gray8 => PixelLayout::Gray8,
        }
    }
}

/// Bytes needed for `width * height` pixels of `layout`.
pub(crate) fn buffer_size(width: u32, height: u32, layout: PixelLayout) -> Result<usize, TgaError> {
    (width as usize)
        .checked_mul(height as usize)
        .and_then(|wh| wh.checked_mul(layout.bytes_per_pixel()))
        .ok_or(TgaError::DimensionsTooLarge { width, height })
}

/// Read the pixel payload at the cursor and expand it to BGRA.
///
/// Rows stay in stored order. The full payload length is checked before
/// the output buffer is allocated.
pub(crate) fn normalize(
    c: &mut Cursor<'_>,
    encoding: PixelEncoding,
    width: u32,
    height: u32,
    stop: &dyn Stop,
) -> Result<Vec<u8>, TgaError> {
    let in_layout = encoding.stored_layout();
    let src = c.take(buffer_size(width, height, in_layout)?)?;

    match encoding {
        PixelEncoding::Bgra32 => {
            stop.check()?;
            Ok(src.to_vec())
        }
        PixelEncoding::Bgr24 => expand_rows(src, width, height, in_layout, stop, |px, out| {
            out[..3].copy_from_slice(px);
            out[3] = 255;
        }),
        PixelEncoding::Gray8 => expand_rows(src, width, height, in_layout, stop, |px, out| {
            out.copy_from_slice(&[px[0], px[0], px[0], 255]);
        }),
    }
}

fn expand_rows(
    src: &[u8],
    width: u32,
    height: u32,
    in_layout: PixelLayout,
    stop: &dyn Stop,
    expand: impl Fn(&[u8], &mut [u8]),
) -> Result<Vec<u8>, TgaError> {
    let in_bpp = in_layout.bytes_per_pixel();
    let out_bpp = PixelLayout::Bgra8.bytes_per_pixel();
    let mut out = vec![0u8; buffer_size(width, height, PixelLayout::Bgra8)?];

    let in_stride = width as usize * in_bpp;
    let out_stride = width as usize * out_bpp;
    for (row_idx, (src_row, dst_row)) in src
        .chunks_exact(in_stride)
        .zip(out.chunks_exact_mut(out_stride))
        .enumerate()
    {
        if row_idx % 16 == 0 {
            stop.check()?;
        }
        for (px, dst_px) in src_row
            .chunks_exact(in_bpp)
            .zip(dst_row.chunks_exact_mut(out_bpp))
        {
            expand(px, dst_px);
        }
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use enough::Unstoppable;

    fn header(image_type: u8, depth: u8) -> TgaHeader {
        let mut h = TgaHeader {
            image_type,
            ..Default::default()
        };
        h.image.depth = depth;
        h
    }

    #[test]
    fn decision_table() {
        assert_eq!(PixelEncoding::from_header(&header(2, 32)).unwrap(), PixelEncoding::Bgra32);
        assert_eq!(PixelEncoding::from_header(&header(2, 24)).unwrap(), PixelEncoding::Bgr24);
        assert_eq!(PixelEncoding::from_header(&header(3, 8)).unwrap(), PixelEncoding::Gray8);
        assert!(matches!(
            PixelEncoding::from_header(&header(2, 16)),
            Err(TgaError::UnsupportedPixelDepth { image_type: 2, depth: 16 })
        ));
        assert!(matches!(
            PixelEncoding::from_header(&header(3, 16)),
            Err(TgaError::UnsupportedPixelDepth { image_type: 3, depth: 16 })
        ));
        assert!(matches!(
            PixelEncoding::from_header(&header(10, 32)),
            Err(TgaError::UnsupportedFeature("RLE compression"))
        ));
        assert!(matches!(
            PixelEncoding::from_header(&header(1, 8)),
            Err(TgaError::UnsupportedImageType(1))
        ));
    }

    #[test]
    fn bgr24_gets_opaque_alpha() {
        let src = [1u8, 2, 3, 4, 5, 6];
        let mut c = Cursor::new(&src);
        let out = normalize(&mut c, PixelEncoding::Bgr24, 2, 1, &Unstoppable).unwrap();
        assert_eq!(out, [1, 2, 3, 255, 4, 5, 6, 255]);
    }

    #[test]
    fn gray8_is_replicated() {
        let src = [10u8, 200];
        let mut c = Cursor::new(&src);
        let out = normalize(&mut c, PixelEncoding::Gray8, 1, 2, &Unstoppable).unwrap();
        assert_eq!(out, [10, 10, 10, 255, 200, 200, 200, 255]);
    }

    #[test]
    fn short_payload_is_truncated() {
        let src = [0u8; 7];
        let mut c = Cursor::new(&src);
        assert!(matches!(
            normalize(&mut c, PixelEncoding::Bgra32, 2, 1, &Unstoppable),
            Err(TgaError::TruncatedPayload { needed: 8, actual: 7 })
        ));
    }
}
