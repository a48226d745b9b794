use crate::error::TgaError;
use crate::pixel::PixelLayout;
use crate::tga::header::TgaHeader;

/// Resource caps checked against the header before any pixel memory is
/// allocated.
///
/// All fields default to `None` (no limit).
#[derive(Clone, Debug, Default)]
pub struct Limits {
    pub max_width: Option<u64>,
    pub max_height: Option<u64>,
    /// Maximum pixel count (width * height).
    pub max_pixels: Option<u64>,
    /// Maximum size of the decoded BGRA buffer, in bytes.
    pub max_memory_bytes: Option<u64>,
}

impl Limits {
    /// Bytes of canonical output the header asks for.
    ///
    /// TGA dimensions are 16-bit, so this never overflows `u64`.
    pub fn output_bytes(header: &TgaHeader) -> u64 {
        u64::from(header.width())
            * u64::from(header.height())
            * PixelLayout::Bgra8.bytes_per_pixel() as u64
    }

    /// Fail with [`TgaError::LimitExceeded`] on the first cap `header` breaks.
    pub(crate) fn check_header(&self, header: &TgaHeader) -> Result<(), TgaError> {
        let (width, height) = (u64::from(header.width()), u64::from(header.height()));
        let checks = [
            ("width", width, self.max_width),
            ("height", height, self.max_height),
            ("pixel count", width * height, self.max_pixels),
            ("output bytes", Self::output_bytes(header), self.max_memory_bytes),
        ];
        for (what, value, cap) in checks {
            if let Some(cap) = cap.filter(|&cap| value > cap) {
                return Err(TgaError::LimitExceeded(alloc::format!(
                    "{what} {value} exceeds limit {cap}"
                )));
            }
        }
        Ok(())
    }
}
