//! A simple Driver for SSD1306 monochrome OLED displays via SPI or I2C
//!
//! This driver was built using [`embedded-hal`] traits.
//!
//! [`embedded-hal`]: https://docs.rs/embedded-hal/1.0
//!
//! # Requirements
//!
//! ### SPI
//!
//! - MISO is not connected/available
//! - SPI_MODE_0 is used (CPHL = 0, CPOL = 0)
//! - 8 bits per word, MSB first
//! - D/C pin: low for commands and their parameters, high for display RAM
//!
//! ### I2C
//!
//! - 7-bit address `0x3C`, or `0x3D` when SA0 is tied high
//!
//! ### Other....
//!
//! - Buffersize: the framebuffer always needs `width * ceil(height / 8)`
//!   bytes, see [`framebuffer::buffer_len`]
//!
//! # Examples
//!
//! ```rust, no_run
//! # use embedded_hal_mock::eh1::*;
//! use oled_ssd1306::{interface::{I2cInterface, NoResetPin, DEFAULT_ADDRESS}, prelude::*, Ssd1306};
//! #
//! # let i2c = i2c::Mock::new(&[]);
//! # let mut delay = delay::NoopDelay::new();
//!
//! let interface = I2cInterface::new(i2c, DEFAULT_ADDRESS, NoResetPin);
//! let buffer = FrameBuffer::new(128, 32, [0u8; 512]).unwrap();
//! let mut oled = Ssd1306::new(interface, buffer, Config::default().suppress_splash(true));
//! oled.begin(&mut delay).unwrap();
//!
//! // draw something into the buffer
//! oled.draw_fast_vline(10, 0, 32, PixelColor::On);
//! oled.draw_pixel(20, 20, PixelColor::Invert);
//!
//! // and show it
//! oled.display().unwrap();
//!
//! oled.start_scroll_right(0, 3).unwrap();
//! ```
//!
#![no_std]

#[cfg(feature = "graphics")]
pub mod graphics;

mod traits;

pub mod color;
mod command;
pub mod config;
pub mod error;
pub mod framebuffer;
/// Interface for the physical connection between display and the controlling device
pub mod interface;
mod raster;
pub mod rotation;
pub mod scroll;
pub mod sequence;
mod ssd1306;

#[cfg(test)]
mod test_support;

pub use crate::error::{Error, ErrorKind};
pub use crate::ssd1306::Ssd1306;
pub use crate::traits::{DisplayInterface, OledDisplay};

/// Includes everything important besides the chosen transport
pub mod prelude {
    pub use crate::color::PixelColor;
    pub use crate::config::{Config, PanelProfile, VccSource};
    pub use crate::error::{Error, ErrorKind};
    pub use crate::framebuffer::{Bitmap, FrameBuffer};
    pub use crate::rotation::DisplayRotation;
    pub use crate::scroll::{ScrollDirection, ScrollState};
    pub use crate::traits::{DisplayInterface, OledDisplay};
    pub use crate::SPI_MODE;
}

use embedded_hal::spi::{Mode, Phase, Polarity};

/// SPI mode -
/// For more infos see [Requirements: SPI](index.html#spi)
pub const SPI_MODE: Mode = Mode {
    phase: Phase::CaptureOnFirstTransition,
    polarity: Polarity::IdleLow,
};
