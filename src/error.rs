use alloc::string::String;
use enough::StopReason;

/// Errors from TGA decoding.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum TgaError {
    #[error("malformed header: {0}")]
    MalformedHeader(String),

    #[error("truncated payload: need {needed} bytes, got {actual}")]
    TruncatedPayload { needed: usize, actual: usize },

    #[error("unsupported image type: {0}")]
    UnsupportedImageType(u8),

    #[error("unsupported pixel depth {depth} for image type {image_type}")]
    UnsupportedPixelDepth { image_type: u8, depth: u8 },

    #[error("unsupported feature: {0}")]
    UnsupportedFeature(&'static str),

    #[error("dimensions too large: {width}x{height}")]
    DimensionsTooLarge { width: u32, height: u32 },

    #[error("limit exceeded: {0}")]
    LimitExceeded(String),

    #[error("pixel layout mismatch: expected {expected:?}, got {actual:?}")]
    LayoutMismatch {
        expected: crate::PixelLayout,
        actual: crate::PixelLayout,
    },

    #[error("operation cancelled")]
    Cancelled(StopReason),
}

impl From<StopReason> for TgaError {
    fn from(r: StopReason) -> Self {
        TgaError::Cancelled(r)
    }
}
