use embedded_hal::delay::DelayNs;

use crate::color::PixelColor;
use crate::rotation::DisplayRotation;

/// All commands need to have this trait which gives the address of the command
/// which needs to be send with the bus in command mode
pub(crate) trait Command: Copy {
    fn address(self) -> u8;
}

/// The physical connection between display and the controlling device.
///
/// Every `send_*` call is one complete bus transaction: chip select (or the
/// I2C start/stop pair) brackets the opcode together with its parameters, so
/// no other traffic can interleave. Implementations exist for SPI and I2C in
/// [`crate::interface`].
pub trait DisplayInterface {
    /// Error raised by the bus or the control pins
    type Error;

    /// Prepare the bus before the first transfer
    fn startup(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Pulse the reset line, if the panel has one
    fn reset<D: DelayNs>(&mut self, _delay: &mut D) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Release the bus after the last transfer
    fn shutdown(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Send `opcode` followed by its parameter bytes (which may be empty)
    fn send_command(&mut self, opcode: u8, data: &[u8]) -> Result<(), Self::Error>;

    /// Send a block of display RAM data
    fn send_data(&mut self, data: &[u8]) -> Result<(), Self::Error>;
}

/// All the functions to interact with a monochrome OLED panel
///
/// Drawing functions only touch the framebuffer and never fail; nothing is
/// visible until [`display`](OledDisplay::display) pushes the buffer.
///
/// # Example
///
///```rust, no_run
///# use embedded_hal_mock::eh1::*;
///use oled_ssd1306::{interface::{NoResetPin, SpiInterface}, prelude::*, Ssd1306};
///#
///# let expectations = [];
///# let spi = spi::Mock::new(&expectations);
///# let expectations = [];
///# let dc = digital::Mock::new(&expectations);
///# let mut delay = delay::NoopDelay::new();
///
///let interface = SpiInterface::new(spi, dc, NoResetPin);
///let buffer = FrameBuffer::new(128, 64, [0u8; 1024]).unwrap();
///let mut oled = Ssd1306::new(interface, buffer, Config::default());
///
///oled.begin(&mut delay).ok();
///oled.draw_fast_hline(0, 10, 128, PixelColor::On);
///oled.display().ok();
///```
pub trait OledDisplay {
    /// Error raised by hardware facing operations
    type Error;

    /// Power up and configure the panel
    fn begin<D: DelayNs>(&mut self, delay: &mut D) -> Result<(), Self::Error>;

    /// Push the whole framebuffer to display RAM
    fn display(&mut self) -> Result<(), Self::Error>;

    /// Logical width under the current rotation
    fn width(&self) -> u32;

    /// Logical height under the current rotation
    fn height(&self) -> u32;

    /// Change how future logical coordinates map onto the panel
    fn set_rotation(&mut self, rotation: DisplayRotation);

    /// Current rotation
    fn rotation(&self) -> DisplayRotation;

    /// Set, clear or toggle a single pixel
    fn draw_pixel(&mut self, x: i32, y: i32, color: PixelColor);

    /// Read back a single pixel from the framebuffer
    fn get_pixel(&self, x: i32, y: i32) -> bool;

    /// Horizontal line of `w` pixels starting at `(x, y)`
    fn draw_fast_hline(&mut self, x: i32, y: i32, w: i32, color: PixelColor);

    /// Vertical line of `h` pixels starting at `(x, y)`
    fn draw_fast_vline(&mut self, x: i32, y: i32, h: i32, color: PixelColor);

    /// Fill the whole framebuffer
    fn fill_screen(&mut self, color: PixelColor);

    /// Set every pixel off
    fn clear_display(&mut self) {
        self.fill_screen(PixelColor::Off);
    }

    /// Swap lit and dark pixels in hardware, the buffer is not touched
    fn invert_display(&mut self, invert: bool) -> Result<(), Self::Error>;

    /// Drop the contrast to zero, or restore it
    fn dim(&mut self, dim: bool) -> Result<(), Self::Error>;
}
