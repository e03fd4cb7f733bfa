//! Driver for SSD1306 based monochrome OLED panels
//!
//! Works with the common 128x64, 128x32 and 96x16 modules over SPI or I2C.
//! All drawing goes into a [`FrameBuffer`] owned by the driver; nothing is
//! visible before [`display`](OledDisplay::display).

use embedded_hal::delay::DelayNs;
use log::{debug, trace};

use crate::color::PixelColor;
use crate::command::Command;
use crate::config::{Config, PanelProfile, VccSource};
use crate::error::Error;
use crate::framebuffer::{Bitmap, FrameBuffer};
use crate::rotation::DisplayRotation;
use crate::scroll::{ScrollDirection, ScrollEngine, ScrollState};
use crate::sequence::{CommandTable, INIT_SEQ_1, INIT_SEQ_2, INIT_SEQ_3, INIT_SEQ_4};
use crate::traits::{Command as _, DisplayInterface, OledDisplay};

/// Ssd1306 driver
pub struct Ssd1306<'a, DI, B> {
    /// Bus connection
    interface: DI,
    /// Pixel data and rotation
    buffer: FrameBuffer<B>,
    /// Contrast restored by `dim(false)`
    contrast: u8,
    vcc: VccSource,
    suppress_splash: bool,
    splash: Option<Bitmap<'a>>,
    scroll: ScrollEngine,
    /// Whether the panel was switched on
    powered: bool,
}

impl<'a, DI, B> Ssd1306<'a, DI, B>
where
    DI: DisplayInterface,
    B: AsRef<[u8]> + AsMut<[u8]>,
{
    /// Creates the driver. Nothing is sent before [`begin`](OledDisplay::begin).
    pub fn new(interface: DI, mut buffer: FrameBuffer<B>, config: Config<'a>) -> Self {
        buffer.set_rotation(config.rotation);
        let splash = config.splash_for(buffer.physical_height());
        Ssd1306 {
            interface,
            buffer,
            contrast: config.contrast,
            vcc: config.vcc,
            suppress_splash: config.suppress_splash,
            splash,
            scroll: ScrollEngine::new(),
            powered: false,
        }
    }

    fn command(&mut self, command: Command, data: &[u8]) -> Result<(), Error<DI::Error>> {
        trace!("command {:?} {:02x?}", command, data);
        self.interface
            .send_command(command.address(), data)
            .map_err(Error::Interface)
    }

    fn run_table<D: DelayNs>(&mut self, table: &[u8], delay: &mut D) -> Result<(), Error<DI::Error>> {
        CommandTable::new(table)?
            .run(&mut self.interface, delay)
            .map_err(Error::Interface)
    }

    /// Send a command table (see [`crate::sequence`]). The whole table is
    /// checked first, a malformed one sends nothing.
    pub fn run_command_table<D: DelayNs>(
        &mut self,
        table: &[u8],
        delay: &mut D,
    ) -> Result<(), Error<DI::Error>> {
        self.run_table(table, delay)
    }

    /// Send any opcode with its parameters, bypassing the driver state
    pub fn send_raw_command(&mut self, opcode: u8, data: &[u8]) -> Result<(), Error<DI::Error>> {
        trace!("raw command {:#04x} {:02x?}", opcode, data);
        self.interface
            .send_command(opcode, data)
            .map_err(Error::Interface)
    }

    /// Switch the panel on (output follows RAM) or off. RAM is kept.
    pub fn set_display_on(&mut self, on: bool) -> Result<(), Error<DI::Error>> {
        if on {
            self.command(Command::DisplayAllOnResume, &[])?;
            self.command(Command::DisplayOn, &[])?;
        } else {
            self.command(Command::DisplayOff, &[])?;
        }
        debug!("display {}", if on { "on" } else { "off" });
        self.powered = on;
        Ok(())
    }

    /// Whether the panel is switched on
    pub fn is_powered(&self) -> bool {
        self.powered
    }

    /// Contrast set during `begin()`, or the configured one before
    pub fn contrast(&self) -> u8 {
        self.contrast
    }

    /// Set rotation from its index `0..=3`
    pub fn set_rotation_index(&mut self, index: u8) -> Result<(), Error<DI::Error>> {
        let rotation = DisplayRotation::try_from(index).map_err(Error::InvalidRotation)?;
        self.buffer.set_rotation(rotation);
        Ok(())
    }

    /// Scroll pages `start..=stop` to the right
    pub fn start_scroll_right(&mut self, start: u8, stop: u8) -> Result<(), Error<DI::Error>> {
        self.start_scroll(ScrollDirection::Right, start, stop)
    }

    /// Scroll pages `start..=stop` to the left
    pub fn start_scroll_left(&mut self, start: u8, stop: u8) -> Result<(), Error<DI::Error>> {
        self.start_scroll(ScrollDirection::Left, start, stop)
    }

    /// Scroll pages `start..=stop` diagonally to the right
    pub fn start_scroll_diag_right(&mut self, start: u8, stop: u8) -> Result<(), Error<DI::Error>> {
        self.start_scroll(ScrollDirection::RightDiagonal, start, stop)
    }

    /// Scroll pages `start..=stop` diagonally to the left
    pub fn start_scroll_diag_left(&mut self, start: u8, stop: u8) -> Result<(), Error<DI::Error>> {
        self.start_scroll(ScrollDirection::LeftDiagonal, start, stop)
    }

    fn start_scroll(
        &mut self,
        direction: ScrollDirection,
        start: u8,
        stop: u8,
    ) -> Result<(), Error<DI::Error>> {
        let height = self.buffer.physical_height();
        self.scroll
            .start(&mut self.interface, direction, start, stop, height)
            .map_err(Error::Interface)
    }

    /// Stop scrolling
    pub fn stop_scroll(&mut self) -> Result<(), Error<DI::Error>> {
        self.scroll
            .stop(&mut self.interface)
            .map_err(Error::Interface)
    }

    /// Current scroll state
    pub fn scroll_state(&self) -> ScrollState {
        self.scroll.state()
    }

    /// Raw page packed pixel data, as it is sent by `display()`
    pub fn buffer(&self) -> &[u8] {
        self.buffer.buffer()
    }

    /// Raw pixel data for direct manipulation
    pub fn buffer_mut(&mut self) -> &mut [u8] {
        self.buffer.buffer_mut()
    }

    /// The framebuffer, e.g. for [`fill_rect`](FrameBuffer::fill_rect)
    pub fn framebuffer(&self) -> &FrameBuffer<B> {
        &self.buffer
    }

    /// Mutable access to the framebuffer
    pub fn framebuffer_mut(&mut self) -> &mut FrameBuffer<B> {
        &mut self.buffer
    }

    /// Draw the set bits of `bitmap` at logical `(x, y)`
    pub fn draw_bitmap(&mut self, x: i32, y: i32, bitmap: &Bitmap<'_>, color: PixelColor) {
        self.buffer.draw_bitmap(x, y, bitmap, color);
    }

    /// Stop scrolling, switch the panel off and let go of the bus
    pub fn shutdown(&mut self) -> Result<(), Error<DI::Error>> {
        debug!("shutdown");
        self.stop_scroll()?;
        self.command(Command::DisplayOff, &[])?;
        self.powered = false;
        self.interface.shutdown().map_err(Error::Interface)
    }

    /// Give back the interface and the buffer storage
    pub fn release(self) -> (DI, B) {
        (self.interface, self.buffer.into_inner())
    }

    fn show_splash(&mut self) {
        self.buffer.clear();
        if self.suppress_splash {
            return;
        }
        if let Some(splash) = self.splash {
            let x = (self.buffer.width() as i32 - splash.width() as i32) / 2;
            let y = (self.buffer.height() as i32 - splash.height() as i32) / 2;
            self.buffer.draw_bitmap(x, y, &splash, PixelColor::On);
        }
    }
}

impl<DI, B> OledDisplay for Ssd1306<'_, DI, B>
where
    DI: DisplayInterface,
    B: AsRef<[u8]> + AsMut<[u8]>,
{
    type Error = Error<DI::Error>;

    fn begin<D: DelayNs>(&mut self, delay: &mut D) -> Result<(), Self::Error> {
        let (width, height) = (self.buffer.physical_width(), self.buffer.physical_height());
        debug!("begin {}x{} panel, {:?} vcc", width, height, self.vcc);

        self.interface.startup().map_err(Error::Interface)?;
        self.interface.reset(delay).map_err(Error::Interface)?;

        self.run_table(INIT_SEQ_1, delay)?;
        self.command(Command::SetMultiplex, &[height.saturating_sub(1) as u8])?;
        self.run_table(INIT_SEQ_2, delay)?;
        self.command(Command::ChargePump, &[self.vcc.charge_pump()])?;
        self.run_table(INIT_SEQ_3, delay)?;

        let profile = PanelProfile::for_size(width, height, self.vcc);
        self.command(Command::SetComPins, &[profile.com_pins])?;
        self.contrast = profile.contrast;
        self.command(Command::SetContrast, &[profile.contrast])?;
        self.command(Command::SetPrecharge, &[profile.precharge])?;

        self.run_table(INIT_SEQ_4, delay)?;
        // the last table deactivated scrolling
        self.scroll.mark_inactive();

        self.show_splash();
        self.display()?;

        self.command(Command::DisplayOn, &[])?;
        self.powered = true;
        debug!("begin done");
        Ok(())
    }

    fn display(&mut self) -> Result<(), Self::Error> {
        let last_column = self.buffer.physical_width().saturating_sub(1) as u8;
        let last_page = self.buffer.pages().saturating_sub(1) as u8;
        self.command(Command::ColumnAddress, &[0, last_column])?;
        self.command(Command::PageAddress, &[0, last_page])?;

        trace!("sending {} bytes of display data", self.buffer.buffer().len());
        self.interface
            .send_data(self.buffer.buffer())
            .map_err(Error::Interface)
    }

    fn width(&self) -> u32 {
        self.buffer.width()
    }

    fn height(&self) -> u32 {
        self.buffer.height()
    }

    fn set_rotation(&mut self, rotation: DisplayRotation) {
        self.buffer.set_rotation(rotation);
    }

    fn rotation(&self) -> DisplayRotation {
        self.buffer.rotation()
    }

    fn draw_pixel(&mut self, x: i32, y: i32, color: PixelColor) {
        self.buffer.set_pixel(x, y, color);
    }

    fn get_pixel(&self, x: i32, y: i32) -> bool {
        self.buffer.get_pixel(x, y)
    }

    fn draw_fast_hline(&mut self, x: i32, y: i32, w: i32, color: PixelColor) {
        self.buffer.draw_fast_hline(x, y, w, color);
    }

    fn draw_fast_vline(&mut self, x: i32, y: i32, h: i32, color: PixelColor) {
        self.buffer.draw_fast_vline(x, y, h, color);
    }

    fn fill_screen(&mut self, color: PixelColor) {
        self.buffer.fill(color);
    }

    fn invert_display(&mut self, invert: bool) -> Result<(), Self::Error> {
        if invert {
            self.command(Command::InvertDisplay, &[])
        } else {
            self.command(Command::NormalDisplay, &[])
        }
    }

    fn dim(&mut self, dim: bool) -> Result<(), Self::Error> {
        let contrast = if dim { 0x00 } else { self.contrast };
        self.command(Command::SetContrast, &[contrast])
    }
}
