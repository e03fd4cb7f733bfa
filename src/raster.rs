//! Fast horizontal and vertical runs over the packed framebuffer

use crate::color::PixelColor;
use crate::framebuffer::FrameBuffer;
use crate::rotation::DisplayRotation;

/// Top `n` bits of a byte set, indexed by `n`
const PRE_MASK: [u8; 8] = [0x00, 0x80, 0xC0, 0xE0, 0xF0, 0xF8, 0xFC, 0xFE];
/// Bottom `n` bits of a byte set, indexed by `n`
const POST_MASK: [u8; 8] = [0x00, 0x01, 0x03, 0x07, 0x0F, 0x1F, 0x3F, 0x7F];

// `extent - pos - len`: start of a run of `len` pixels once its axis is mirrored
fn mirror(extent: i32, pos: i32, len: i32) -> i32 {
    let start = extent as i64 - pos as i64 - len as i64;
    // runs starting beyond i32 stay beyond the panel
    start.clamp(i32::MIN as i64, i32::MAX as i64) as i32
}

impl<B> FrameBuffer<B>
where
    B: AsRef<[u8]> + AsMut<[u8]>,
{
    /// Horizontal run of `len` pixels in physical coordinates, starting at
    /// `(x, y)` and going right. Clipped to the panel.
    pub fn fast_hline(&mut self, x: i32, y: i32, len: i32, color: PixelColor) {
        let (width, height) = (self.physical_width() as i32, self.physical_height() as i32);
        if y < 0 || y >= height {
            return;
        }
        let (mut x, mut len) = (x, len);
        if x < 0 {
            len = len.saturating_add(x);
            x = 0;
        }
        if x.saturating_add(len) > width {
            len = width - x;
        }
        if len <= 0 {
            return;
        }

        let start = x as usize + (y as usize / 8) * width as usize;
        // every pixel of the run shares the same row, hence the same bit
        let mask = 1 << (y & 7);
        for byte in &mut self.buffer_mut()[start..start + len as usize] {
            color.apply(byte, mask);
        }
    }

    /// Vertical run of `len` pixels in physical coordinates, starting at
    /// `(x, y)` and going down. Clipped to the panel.
    ///
    /// Whole pages are written a byte at a time; only the first and last
    /// byte of the run need masking.
    pub fn fast_vline(&mut self, x: i32, y: i32, len: i32, color: PixelColor) {
        let (width, height) = (self.physical_width() as i32, self.physical_height() as i32);
        if x < 0 || x >= width {
            return;
        }
        let (mut y, mut len) = (y, len);
        if y < 0 {
            len = len.saturating_add(y);
            y = 0;
        }
        if y.saturating_add(len) > height {
            len = height - y;
        }
        if len <= 0 {
            return;
        }

        let stride = width as usize;
        let buffer = self.buffer_mut();
        let mut index = x as usize + (y as usize / 8) * stride;
        let mut remaining = len as usize;

        let offset = (y & 7) as usize;
        if offset != 0 {
            // rows offset..8 of the first byte
            let shift = 8 - offset;
            let mut mask = PRE_MASK[shift];
            if remaining < shift {
                // run ends inside this byte
                mask &= 0xFF >> (shift - remaining);
            }
            color.apply(&mut buffer[index], mask);
            if remaining <= shift {
                return;
            }
            index += stride;
            remaining -= shift;
        }

        while remaining >= 8 {
            // whole byte: 0xFF for on, 0x00 for off, all bits flipped for invert
            color.apply(&mut buffer[index], 0xFF);
            index += stride;
            remaining -= 8;
        }

        if remaining > 0 {
            color.apply(&mut buffer[index], POST_MASK[remaining]);
        }
    }

    /// Horizontal line of `w` pixels at logical coordinates.
    ///
    /// Under a 90° or 270° rotation this becomes a vertical run in the
    /// buffer.
    pub fn draw_fast_hline(&mut self, x: i32, y: i32, w: i32, color: PixelColor) {
        let (pw, ph) = (self.physical_width() as i32, self.physical_height() as i32);
        match self.rotation() {
            DisplayRotation::Rotate0 => self.fast_hline(x, y, w, color),
            DisplayRotation::Rotate90 => {
                let (x, y) = (y, x);
                self.fast_vline(mirror(pw, x, 1), y, w, color)
            }
            DisplayRotation::Rotate180 => {
                self.fast_hline(mirror(pw, x, w), mirror(ph, y, 1), w, color)
            }
            DisplayRotation::Rotate270 => {
                let (x, y) = (y, x);
                self.fast_vline(x, mirror(ph, y, w), w, color)
            }
        }
    }

    /// Vertical line of `h` pixels at logical coordinates.
    ///
    /// Under a 90° or 270° rotation this becomes a horizontal run in the
    /// buffer.
    pub fn draw_fast_vline(&mut self, x: i32, y: i32, h: i32, color: PixelColor) {
        let (pw, ph) = (self.physical_width() as i32, self.physical_height() as i32);
        match self.rotation() {
            DisplayRotation::Rotate0 => self.fast_vline(x, y, h, color),
            DisplayRotation::Rotate90 => {
                let (x, y) = (y, x);
                self.fast_hline(mirror(pw, x, h), y, h, color)
            }
            DisplayRotation::Rotate180 => {
                self.fast_vline(mirror(pw, x, 1), mirror(ph, y, h), h, color)
            }
            DisplayRotation::Rotate270 => {
                let (x, y) = (y, x);
                self.fast_hline(x, mirror(ph, y, 1), h, color)
            }
        }
    }

    /// Solid rectangle at logical coordinates, drawn column by column
    pub fn fill_rect(&mut self, x: i32, y: i32, w: i32, h: i32, color: PixelColor) {
        for i in 0..w.max(0) {
            self.draw_fast_vline(x.saturating_add(i), y, h, color);
        }
    }
}
