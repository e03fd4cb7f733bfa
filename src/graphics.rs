//! [`embedded-graphics`](https://docs.rs/embedded-graphics) support
//!
//! Both the bare [`FrameBuffer`] and the [`Ssd1306`] driver are draw targets
//! with [`BinaryColor`]: `On` lights a pixel, `Off` darkens it.
use core::convert::Infallible;
use embedded_graphics_core::{pixelcolor::BinaryColor, prelude::*, primitives::Rectangle};

use crate::color::PixelColor;
use crate::framebuffer::FrameBuffer;
use crate::ssd1306::Ssd1306;
use crate::traits::DisplayInterface;

/// For use with embedded_graphics
impl<B> DrawTarget for FrameBuffer<B>
where
    B: AsRef<[u8]> + AsMut<[u8]>,
{
    type Color = BinaryColor;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            self.set_pixel(point.x, point.y, PixelColor::from(color));
        }
        Ok(())
    }

    fn fill_solid(&mut self, area: &Rectangle, color: Self::Color) -> Result<(), Self::Error> {
        // fill_rect clips, the area may hang over any edge
        self.fill_rect(
            area.top_left.x,
            area.top_left.y,
            area.size.width.min(i32::MAX as u32) as i32,
            area.size.height.min(i32::MAX as u32) as i32,
            PixelColor::from(color),
        );
        Ok(())
    }

    fn clear(&mut self, color: Self::Color) -> Result<(), Self::Error> {
        self.fill(PixelColor::from(color));
        Ok(())
    }
}

/// For use with embedded_graphics
impl<B> OriginDimensions for FrameBuffer<B>
where
    B: AsRef<[u8]> + AsMut<[u8]>,
{
    fn size(&self) -> Size {
        Size::new(self.width(), self.height())
    }
}

/// For use with embedded_graphics, draws into the framebuffer only
impl<DI, B> DrawTarget for Ssd1306<'_, DI, B>
where
    DI: DisplayInterface,
    B: AsRef<[u8]> + AsMut<[u8]>,
{
    type Color = BinaryColor;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        self.framebuffer_mut().draw_iter(pixels)
    }

    fn fill_solid(&mut self, area: &Rectangle, color: Self::Color) -> Result<(), Self::Error> {
        self.framebuffer_mut().fill_solid(area, color)
    }

    fn clear(&mut self, color: Self::Color) -> Result<(), Self::Error> {
        DrawTarget::clear(self.framebuffer_mut(), color)
    }
}

impl<DI, B> OriginDimensions for Ssd1306<'_, DI, B>
where
    DI: DisplayInterface,
    B: AsRef<[u8]> + AsMut<[u8]>,
{
    fn size(&self) -> Size {
        self.framebuffer().size()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::rotation::DisplayRotation;
    use crate::test_support::Spy;
    use embedded_graphics::{
        prelude::*,
        primitives::{Line, PrimitiveStyle, Rectangle},
    };

    #[test]
    fn size_follows_rotation() {
        let mut display = FrameBuffer::new(128, 32, [0u8; 512]).unwrap();
        assert_eq!(display.size(), Size::new(128, 32));
        display.set_rotation(DisplayRotation::Rotate270);
        assert_eq!(display.size(), Size::new(32, 128));
    }

    #[test]
    fn line_rotation_0() {
        let mut display = FrameBuffer::new(128, 32, [0u8; 512]).unwrap();
        let _ = Line::new(Point::new(0, 0), Point::new(7, 0))
            .into_styled(PrimitiveStyle::with_stroke(BinaryColor::On, 1))
            .draw(&mut display);

        let buffer = display.buffer();
        for &byte in &buffer[..8] {
            assert_eq!(byte, 0x01);
        }
        for &byte in &buffer[8..] {
            assert_eq!(byte, 0);
        }
    }

    #[test]
    fn line_rotation_90() {
        let mut display = FrameBuffer::new(128, 32, [0u8; 512]).unwrap();
        display.set_rotation(DisplayRotation::Rotate90);
        let _ = Line::new(Point::new(0, 0), Point::new(0, 7))
            .into_styled(PrimitiveStyle::with_stroke(BinaryColor::On, 1))
            .draw(&mut display);

        // logical column 0 is physical row 0 counted from the right edge
        let buffer = display.buffer();
        for x in 0..8 {
            assert_eq!(buffer[127 - x], 0x01);
        }
        assert_eq!(buffer.iter().filter(|&&b| b != 0).count(), 8);
    }

    #[test]
    fn filled_rectangle_uses_whole_bytes() {
        let mut display = FrameBuffer::new(16, 24, [0u8; 48]).unwrap();
        let _ = Rectangle::new(Point::new(2, 4), Size::new(3, 12))
            .into_styled(PrimitiveStyle::with_fill(BinaryColor::On))
            .draw(&mut display);

        let buffer = display.buffer();
        for x in 2..5 {
            assert_eq!(buffer[x], 0xF0);
            assert_eq!(buffer[16 + x], 0xFF);
            assert_eq!(buffer[32 + x], 0x00);
        }
        assert_eq!(buffer[5], 0x00);
    }

    #[test]
    fn rectangle_over_the_edge_is_clipped() {
        let mut display = FrameBuffer::new(16, 8, [0u8; 16]).unwrap();
        display
            .fill_solid(
                &Rectangle::new(Point::new(-4, -4), Size::new(8, 8)),
                BinaryColor::On,
            )
            .unwrap();
        let buffer = display.buffer();
        assert_eq!(&buffer[..4], &[0x0F; 4]);
        assert!(buffer[4..].iter().all(|&b| b == 0));
    }

    #[test]
    fn driver_is_a_draw_target() {
        let buffer = FrameBuffer::new(128, 64, [0u8; 1024]).unwrap();
        let mut oled = Ssd1306::new(Spy::new(), buffer, Config::default());
        oled.clear(BinaryColor::On).unwrap();
        assert!(oled.buffer().iter().all(|&b| b == 0xFF));

        let _ = Pixel(Point::new(0, 0), BinaryColor::Off).draw(&mut oled);
        assert_eq!(oled.buffer()[0], 0xFE);
        assert_eq!(oled.size(), Size::new(128, 64));
    }
}
