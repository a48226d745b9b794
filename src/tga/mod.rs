//! TGA decoding pipeline (internal).
//!
//! Header → payload route → pixel normalization → orientation.
//! Use top-level [`crate::decode`] or [`crate::DecodeRequest`].

pub(crate) mod header;
mod normalize;
pub(crate) mod orient;
mod payload;

use enough::Stop;

use crate::cursor::Cursor;
use crate::decode::DecodeOutput;
use crate::error::TgaError;
use crate::limits::Limits;
use crate::pixel::PixelLayout;
use header::TgaHeader;
use normalize::PixelEncoding;
use payload::PayloadRoute;

/// Decode TGA data into canonical BGRA, top-left origin.
pub(crate) fn decode(
    data: &[u8],
    limits: Option<&Limits>,
    stop: &dyn Stop,
) -> Result<DecodeOutput, TgaError> {
    let (header, offset) = TgaHeader::parse(data)?;

    // Every header-only rejection happens before any payload byte is read.
    let route = PayloadRoute::select(&header)?;
    let encoding = PixelEncoding::from_header(&header)?;
    header.check_dimensions()?;
    let (width, height) = (header.width(), header.height());
    if let Some(limits) = limits {
        limits.check_header(&header)?;
    }
    log::debug!("tga: {route:?} route, {encoding:?} {width}x{height}");

    stop.check()?;
    let mut c = Cursor::new(data);
    c.take(offset)?;
    let _image_id = payload::read_image_id(&mut c, header.id_length)?;

    let layout = PixelLayout::Bgra8;
    let mut pixels = match route {
        PayloadRoute::Direct => normalize::normalize(&mut c, encoding, width, height, stop)?,
    };

    stop.check()?;
    header.orientation().apply(&mut pixels, width, height, layout);

    Ok(DecodeOutput::new(pixels, width, height, layout))
}
