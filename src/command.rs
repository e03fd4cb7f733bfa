//! Command set of the SSD1306 controller
//!
//! Only the opcodes this driver issues are listed. Anything else can be sent
//! with [`Ssd1306::send_raw_command`](crate::Ssd1306::send_raw_command).

use crate::traits;

/// SSD1306 commands
///
/// Should rarely be needed directly.
///
/// For more infos about the addresses and what they are doing look into the
/// SSD1306 datasheet.
#[allow(dead_code)]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum Command {
    /// Display RAM row mapped to COM0, ORed with the line in the low 6 bits
    SetStartLine = 0x40,
    /// 1 Databyte: 0x00 horizontal, 0x01 vertical, 0x02 page addressing
    MemoryMode = 0x20,
    /// 2 Databytes: start and end column of the write window
    ColumnAddress = 0x21,
    /// 2 Databytes: start and end page of the write window
    PageAddress = 0x22,

    RightHorizontalScroll = 0x26,
    LeftHorizontalScroll = 0x27,
    /// 5 Databytes: dummy, start page, frame interval, end page, vertical offset
    VerticalAndRightHorizontalScroll = 0x29,
    /// 5 Databytes: dummy, start page, frame interval, end page, vertical offset
    VerticalAndLeftHorizontalScroll = 0x2A,
    DeactivateScroll = 0x2E,
    ActivateScroll = 0x2F,

    /// 1 Databyte, 0x7F after reset
    SetContrast = 0x81,
    /// 1 Databyte: 0x10 off, 0x14 on
    ChargePump = 0x8D,

    /// 2 Databytes: rows in the fixed top area, rows in the scroll area
    SetVerticalScrollArea = 0xA3,
    /// Output follows RAM content
    DisplayAllOnResume = 0xA4,
    /// Output ignores RAM content
    DisplayAllOnIgnore = 0xA5,

    NormalDisplay = 0xA6,
    InvertDisplay = 0xA7,

    /// 1 Databyte: multiplex ratio minus one
    SetMultiplex = 0xA8,

    DisplayOff = 0xAE,
    DisplayOn = 0xAF,

    /// Column 0 mapped to SEG0
    SegRemapNormal = 0xA0,
    /// Column 127 mapped to SEG0
    SegRemapFlip = 0xA1,
    /// Scan from COM0
    ComScanInc = 0xC0,
    /// Scan towards COM0
    ComScanDec = 0xC8,

    /// 1 Databyte: vertical shift by COM
    SetDisplayOffset = 0xD3,
    /// 1 Databyte: divide ratio in the low nibble, oscillator in the high one
    SetDisplayClockDiv = 0xD5,
    /// 1 Databyte: phase 1 in the low nibble, phase 2 in the high one
    SetPrecharge = 0xD9,
    /// 1 Databyte: COM pins hardware configuration
    SetComPins = 0xDA,
    /// 1 Databyte: VCOMH deselect level
    SetVcomDetect = 0xDB,
}

impl traits::Command for Command {
    /// Returns the address of the command
    fn address(self) -> u8 {
        self as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::Command as CommandTrait;

    #[test]
    fn command_addr() {
        assert_eq!(Command::SetStartLine.address(), 0x40);
        assert_eq!(Command::ColumnAddress.address(), 0x21);
        assert_eq!(Command::VerticalAndLeftHorizontalScroll.address(), 0x2A);
        assert_eq!(Command::SetContrast.address(), 0x81);
        assert_eq!(Command::DisplayOn.address(), 0xAF);
        assert_eq!(Command::SetVcomDetect.address(), 0xDB);
    }
}
