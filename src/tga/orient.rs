//! In-place row and column reversal.

use alloc::vec;

use super::header::Orientation;
use crate::pixel::PixelLayout;

impl Orientation {
    /// Rearrange `pixels` so row 0 is the top row and each row runs left to right.
    ///
    /// `pixels` holds `width * height` pixels of `layout`.
    pub fn apply(&self, pixels: &mut [u8], width: u32, height: u32, layout: PixelLayout) {
        let bpp = layout.bytes_per_pixel();
        if self.needs_vertical_flip() {
            flip_vertical(pixels, width as usize, height as usize, bpp);
        }
        if self.needs_horizontal_flip() {
            flip_horizontal(pixels, width as usize, height as usize, bpp);
        }
    }
}

/// Swap row `y` with row `height - 1 - y` for the top half of the image.
///
/// Only the first `height` full rows of `width * bpp` bytes take part;
/// trailing bytes are left alone. The middle row of an odd-height image
/// stays put.
pub fn flip_vertical(pixels: &mut [u8], width: usize, height: usize, bpp: usize) {
    let row_bytes = width * bpp;
    if row_bytes == 0 {
        return;
    }
    let rows = height.min(pixels.len() / row_bytes);
    let image = &mut pixels[..rows * row_bytes];
    let (top, bottom) = image.split_at_mut((rows / 2) * row_bytes);

    let mut scanline = vec![0u8; row_bytes];
    for (top_row, bottom_row) in top
        .chunks_exact_mut(row_bytes)
        .zip(bottom.rchunks_exact_mut(row_bytes))
    {
        scanline.copy_from_slice(top_row);
        top_row.copy_from_slice(bottom_row);
        bottom_row.copy_from_slice(&scanline);
    }
}

/// Swap pixel `x` with pixel `width - 1 - x` within every row.
///
/// The middle pixel of an odd-width row stays put.
pub fn flip_horizontal(pixels: &mut [u8], width: usize, height: usize, bpp: usize) {
    let row_bytes = width * bpp;
    if row_bytes == 0 {
        return;
    }
    let half = (width / 2) * bpp;
    for row in pixels.chunks_exact_mut(row_bytes).take(height) {
        let (left, right) = row.split_at_mut(half);
        for (l, r) in left
            .chunks_exact_mut(bpp)
            .zip(right.rchunks_exact_mut(bpp))
        {
            l.swap_with_slice(r);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    fn numbered(len: usize) -> Vec<u8> {
        (0..len).map(|i| i as u8).collect()
    }

    #[test]
    fn vertical_odd_height_keeps_middle_row() {
        // 1 pixel wide, 3 rows, 2 bytes per pixel
        let mut px = numbered(6);
        flip_vertical(&mut px, 1, 3, 2);
        assert_eq!(px, [4, 5, 2, 3, 0, 1]);
    }

    #[test]
    fn vertical_ignores_bytes_past_the_last_row() {
        // 2 rows of 2 bytes, then a ragged tail that isn't a full row
        let mut px = numbered(5);
        flip_vertical(&mut px, 2, 2, 1);
        assert_eq!(px, [2, 3, 0, 1, 4]);

        // Declared height larger than the buffer holds
        let mut px = numbered(7);
        flip_vertical(&mut px, 1, 10, 2);
        assert_eq!(px, [4, 5, 2, 3, 0, 1, 6]);
    }

    #[test]
    fn horizontal_odd_width_keeps_middle_pixel() {
        // 3 pixels, 1 row, 1 byte per pixel, then 2 byte per pixel
        let mut px = numbered(3);
        flip_horizontal(&mut px, 3, 1, 1);
        assert_eq!(px, [2, 1, 0]);

        let mut px = numbered(6);
        flip_horizontal(&mut px, 3, 1, 2);
        assert_eq!(px, [4, 5, 2, 3, 0, 1]);
    }

    #[test]
    fn flips_are_involutions() {
        let (w, h, bpp) = (5, 4, 4);
        let original = numbered(w * h * bpp);

        let mut px = original.clone();
        flip_vertical(&mut px, w, h, bpp);
        assert_ne!(px, original);
        flip_vertical(&mut px, w, h, bpp);
        assert_eq!(px, original);

        flip_horizontal(&mut px, w, h, bpp);
        assert_ne!(px, original);
        flip_horizontal(&mut px, w, h, bpp);
        assert_eq!(px, original);
    }

    #[test]
    fn apply_composes_both_flips() {
        // 2x2 grey stride, stored bottom-up and right-to-left
        let mut px = vec![0u8, 1, 2, 3];
        let o = Orientation {
            top_origin: false,
            right_origin: true,
        };
        o.apply(&mut px, 2, 2, PixelLayout::Gray8);
        assert_eq!(px, [3, 2, 1, 0]);
    }

    #[test]
    fn top_left_is_untouched() {
        let mut px = numbered(16);
        let o = Orientation {
            top_origin: true,
            right_origin: false,
        };
        o.apply(&mut px, 2, 2, PixelLayout::Bgra8);
        assert_eq!(px, numbered(16));
    }
}
