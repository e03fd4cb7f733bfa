use crate::{error::ErrorKind, traits::DisplayInterface};
use core::convert::Infallible;
use embedded_hal::{
    delay::DelayNs,
    digital::{ErrorType, OutputPin},
    i2c::{I2c, Operation as I2cOperation},
    spi::{Operation, SpiDevice},
};
use log::debug;

/// Address of most modules, D/C (SA0) tied low
pub const DEFAULT_ADDRESS: u8 = 0x3C;
/// Address with D/C (SA0) tied high
pub const ALTERNATE_ADDRESS: u8 = 0x3D;

/// I2C control byte announcing a stream of commands
const CONTROL_COMMAND: u8 = 0x00;
/// I2C control byte announcing a stream of display RAM data
const CONTROL_DATA: u8 = 0x40;
/// Payload bytes per I2C data write
const I2C_CHUNK: usize = 32;
/// Longest command the controller knows: opcode and 6 parameters
const MAX_COMMAND_LEN: usize = 7;

/// Stand-in for panels without a reset line
#[derive(Debug, Clone, Copy, Default)]
pub struct NoResetPin;

impl ErrorType for NoResetPin {
    type Error = Infallible;
}

impl OutputPin for NoResetPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}

// high, 1 ms, low, 10 ms, high
fn pulse_reset<RST: OutputPin, D: DelayNs>(
    rst: &mut RST,
    delay: &mut D,
) -> Result<(), RST::Error> {
    debug!("pulsing reset line");
    rst.set_high()?;
    delay.delay_ms(1);
    rst.set_low()?;
    delay.delay_ms(10);
    rst.set_high()
}

/// 4-wire SPI connection
///
/// The `SpiDevice` owns chip select, so every command (opcode together with
/// its parameters) and every data block is one transaction.
pub struct SpiInterface<SPI, DC, RST> {
    /// SPI device
    spi: SPI,
    /// Data/Command Control Pin (High for data, Low for command)
    dc: DC,
    /// Pin for Resetting
    rst: RST,
}

impl<SPI, DC, RST> SpiInterface<SPI, DC, RST>
where
    SPI: SpiDevice,
    DC: OutputPin,
    RST: OutputPin,
{
    /// Creates a new `SpiInterface`
    pub fn new(spi: SPI, dc: DC, rst: RST) -> Self {
        SpiInterface { spi, dc, rst }
    }

    /// Give the bus and the pins back
    pub fn release(self) -> (SPI, DC, RST) {
        (self.spi, self.dc, self.rst)
    }
}

impl<SPI, DC, RST> DisplayInterface for SpiInterface<SPI, DC, RST>
where
    SPI: SpiDevice,
    DC: OutputPin,
    RST: OutputPin,
{
    type Error = ErrorKind<SPI::Error, DC::Error, RST::Error>;

    fn startup(&mut self) -> Result<(), Self::Error> {
        debug!("spi startup");
        Ok(())
    }

    fn reset<D: DelayNs>(&mut self, delay: &mut D) -> Result<(), Self::Error> {
        pulse_reset(&mut self.rst, delay).map_err(ErrorKind::RstError)
    }

    fn send_command(&mut self, opcode: u8, data: &[u8]) -> Result<(), Self::Error> {
        // low for commands, parameters included
        self.dc.set_low().map_err(ErrorKind::DcError)?;

        if data.is_empty() {
            self.spi.write(&[opcode]).map_err(ErrorKind::BusError)
        } else {
            self.spi
                .transaction(&mut [Operation::Write(&[opcode]), Operation::Write(data)])
                .map_err(ErrorKind::BusError)
        }
    }

    fn send_data(&mut self, data: &[u8]) -> Result<(), Self::Error> {
        // high for data
        self.dc.set_high().map_err(ErrorKind::DcError)?;

        // Be careful!! Linux has a default limit of 4096 bytes per spi transfer
        if cfg!(target_os = "linux") {
            for chunk in data.chunks(4096) {
                self.spi.write(chunk).map_err(ErrorKind::BusError)?;
            }
            Ok(())
        } else {
            self.spi.write(data).map_err(ErrorKind::BusError)
        }
    }
}

/// I2C connection
///
/// Every write starts with a control byte telling the controller whether
/// commands or display RAM data follow.
pub struct I2cInterface<I2C, RST> {
    i2c: I2C,
    address: u8,
    rst: RST,
}

impl<I2C, RST> I2cInterface<I2C, RST>
where
    I2C: I2c,
    RST: OutputPin,
{
    /// Creates a new `I2cInterface` talking to the 7-bit `address`,
    /// usually [`DEFAULT_ADDRESS`] or [`ALTERNATE_ADDRESS`]
    pub fn new(i2c: I2C, address: u8, rst: RST) -> Self {
        I2cInterface { i2c, address, rst }
    }

    /// Address the interface talks to
    pub fn address(&self) -> u8 {
        self.address
    }

    /// Give the bus and the reset pin back
    pub fn release(self) -> (I2C, RST) {
        (self.i2c, self.rst)
    }
}

impl<I2C, RST> DisplayInterface for I2cInterface<I2C, RST>
where
    I2C: I2c,
    RST: OutputPin,
{
    type Error = ErrorKind<I2C::Error, Infallible, RST::Error>;

    fn startup(&mut self) -> Result<(), Self::Error> {
        debug!("i2c startup at {:#04x}", self.address);
        Ok(())
    }

    fn reset<D: DelayNs>(&mut self, delay: &mut D) -> Result<(), Self::Error> {
        pulse_reset(&mut self.rst, delay).map_err(ErrorKind::RstError)
    }

    fn send_command(&mut self, opcode: u8, data: &[u8]) -> Result<(), Self::Error> {
        let mut buf = [0u8; MAX_COMMAND_LEN + 1];
        buf[0] = CONTROL_COMMAND;
        buf[1] = opcode;

        if data.len() < MAX_COMMAND_LEN {
            buf[2..2 + data.len()].copy_from_slice(data);
            self.i2c
                .write(self.address, &buf[..2 + data.len()])
                .map_err(ErrorKind::BusError)
        } else {
            // longer than any real command, keep it in one transaction anyway
            self.i2c
                .transaction(
                    self.address,
                    &mut [
                        I2cOperation::Write(&buf[..2]),
                        I2cOperation::Write(data),
                    ],
                )
                .map_err(ErrorKind::BusError)
        }
    }

    fn send_data(&mut self, data: &[u8]) -> Result<(), Self::Error> {
        let mut buf = [0u8; I2C_CHUNK + 1];
        buf[0] = CONTROL_DATA;

        for chunk in data.chunks(I2C_CHUNK) {
            buf[1..1 + chunk.len()].copy_from_slice(chunk);
            self.i2c
                .write(self.address, &buf[..1 + chunk.len()])
                .map_err(ErrorKind::BusError)?;
        }
        Ok(())
    }
}
