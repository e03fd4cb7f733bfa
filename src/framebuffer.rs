//! Packed one bit per pixel framebuffer
//!
//! The buffer mirrors the controller's GDDRAM layout: the panel is split into
//! pages of 8 rows, each page is `width` bytes long and every byte holds one
//! column of 8 vertically stacked pixels, least significant bit on top.

use crate::color::PixelColor;
use crate::rotation::DisplayRotation;

/// Number of bytes a `width` x `height` panel needs
pub const fn buffer_len(width: u32, height: u32) -> usize {
    // round to upper page count
    width as usize * ((height as usize + 7) / 8)
}

/// Error found while setting up a `FrameBuffer` or a `Bitmap`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BufferError {
    /// The provided buffer was too small
    BufferTooSmall,
    /// Width or height is zero
    EmptySize,
}

/// Framebuffer holding the image that `display()` pushes to the panel.
///
/// The storage is anything that derefs to a byte slice, so both an owned
/// array (`[u8; 512]`) and a borrowed slice (`&mut [u8]`) work. Dimensions
/// are fixed at construction.
pub struct FrameBuffer<B> {
    width: u32,
    height: u32,
    buffer: B,
    rotation: DisplayRotation,
}

impl<B> FrameBuffer<B>
where
    B: AsRef<[u8]> + AsMut<[u8]>,
{
    /// You must allocate the buffer by yourself, it must be large enough to
    /// contain all pixels (see [`buffer_len`]). Extra trailing bytes are
    /// never touched.
    pub fn new(width: u32, height: u32, buffer: B) -> Result<Self, BufferError> {
        if width == 0 || height == 0 {
            return Err(BufferError::EmptySize);
        }
        if buffer.as_ref().len() < buffer_len(width, height) {
            return Err(BufferError::BufferTooSmall);
        }
        Ok(Self {
            width,
            height,
            buffer,
            rotation: DisplayRotation::default(),
        })
    }

    /// Physical panel width in pixels, independent of rotation
    pub fn physical_width(&self) -> u32 {
        self.width
    }

    /// Physical panel height in pixels, independent of rotation
    pub fn physical_height(&self) -> u32 {
        self.height
    }

    /// Logical width under the current rotation
    pub fn width(&self) -> u32 {
        self.rotation.logical_size(self.width, self.height).0
    }

    /// Logical height under the current rotation
    pub fn height(&self) -> u32 {
        self.rotation.logical_size(self.width, self.height).1
    }

    /// Number of 8-row pages
    pub fn pages(&self) -> u32 {
        (self.height + 7) / 8
    }

    /// get internal buffer to use it (to draw on the panel)
    pub fn buffer(&self) -> &[u8] {
        &self.buffer.as_ref()[..buffer_len(self.width, self.height)]
    }

    /// Raw mutable access to the packed bits
    pub fn buffer_mut(&mut self) -> &mut [u8] {
        let len = buffer_len(self.width, self.height);
        &mut self.buffer.as_mut()[..len]
    }

    /// Give the storage back
    pub fn into_inner(self) -> B {
        self.buffer
    }

    /// Set the display rotation.
    ///
    /// This only concerns future drawing made to it. Anything aready drawn
    /// stays as it is in the buffer.
    pub fn set_rotation(&mut self, rotation: DisplayRotation) {
        self.rotation = rotation;
    }

    /// Get current rotation
    pub fn rotation(&self) -> DisplayRotation {
        self.rotation
    }

    // Logical point to (byte index, bit mask), None when out of the logical area
    fn locate(&self, x: i32, y: i32) -> Option<(usize, u8)> {
        if x < 0 || y < 0 || x as u32 >= self.width() || y as u32 >= self.height() {
            return None;
        }
        let (x, y) = self.rotation.transform(x, y, self.width, self.height);
        let index = x as usize + (y as usize / 8) * self.width as usize;
        Some((index, 1 << (y & 7)))
    }

    /// Set, clear or toggle one pixel at logical coordinates.
    ///
    /// Points outside the logical area are ignored.
    pub fn set_pixel(&mut self, x: i32, y: i32, color: PixelColor) {
        if let Some((index, mask)) = self.locate(x, y) {
            color.apply(&mut self.buffer.as_mut()[index], mask);
        }
    }

    /// State of one pixel at logical coordinates, `false` when out of range
    pub fn get_pixel(&self, x: i32, y: i32) -> bool {
        self.locate(x, y)
            .map_or(false, |(index, mask)| self.buffer.as_ref()[index] & mask != 0)
    }

    /// Fill every byte: `On` sets all bits, `Off` clears them, `Invert`
    /// toggles them.
    pub fn fill(&mut self, color: PixelColor) {
        let buffer = self.buffer_mut();
        match color {
            PixelColor::On => buffer.fill(0xFF),
            PixelColor::Off => buffer.fill(0x00),
            PixelColor::Invert => buffer.iter_mut().for_each(|b| *b ^= 0xFF),
        }
    }

    /// Set all pixels off
    pub fn clear(&mut self) {
        self.fill(PixelColor::Off);
    }

    /// Draw the set bits of `bitmap` with its top left corner at logical
    /// `(x, y)`. Unset bits leave the buffer untouched.
    pub fn draw_bitmap(&mut self, x: i32, y: i32, bitmap: &Bitmap<'_>, color: PixelColor) {
        for j in 0..bitmap.height() {
            for i in 0..bitmap.width() {
                if !bitmap.is_set(i, j) {
                    continue;
                }
                // a point past i32 is off the panel anyway
                let px = x.checked_add(i as i32);
                let py = y.checked_add(j as i32);
                if let (Some(px), Some(py)) = (px, py) {
                    self.set_pixel(px, py, color);
                }
            }
        }
    }
}

/// A 1-bit image, rows stored top to bottom, each row padded to whole bytes
/// and the leftmost pixel in the most significant bit.
#[derive(Clone, Copy, Debug)]
pub struct Bitmap<'a> {
    width: u32,
    height: u32,
    data: &'a [u8],
}

impl<'a> Bitmap<'a> {
    /// Wrap `data` as a `width` x `height` image
    pub fn new(width: u32, height: u32, data: &'a [u8]) -> Result<Self, BufferError> {
        if width == 0 || height == 0 {
            return Err(BufferError::EmptySize);
        }
        if data.len() < Self::row_bytes(width) * height as usize {
            return Err(BufferError::BufferTooSmall);
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    fn row_bytes(width: u32) -> usize {
        (width as usize + 7) / 8
    }

    /// Width in pixels
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Whether the pixel at `(x, y)` is set
    pub fn is_set(&self, x: u32, y: u32) -> bool {
        let index = y as usize * Self::row_bytes(self.width) + x as usize / 8;
        self.data
            .get(index)
            .map_or(false, |byte| byte & (0x80 >> (x & 7)) != 0)
    }
}
