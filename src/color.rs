//! Pixel colors of the monochrome panel

use core::fmt;

/// The three ways a drawing call can touch a bit of the framebuffer.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum PixelColor {
    /// Clear the bit (pixel dark)
    #[default]
    Off,
    /// Set the bit (pixel lit)
    On,
    /// Toggle the bit
    Invert,
}

/// Raised when a legacy color value outside `0..=2` is converted
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct InvalidColor(pub u8);

impl fmt::Display for InvalidColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "pixel color only accepts 0, 1 and 2, not `{}`", self.0)
    }
}

impl PixelColor {
    /// Apply this color to `byte` for every bit set in `mask`
    #[inline]
    pub(crate) fn apply(self, byte: &mut u8, mask: u8) {
        match self {
            PixelColor::On => *byte |= mask,
            PixelColor::Off => *byte &= !mask,
            PixelColor::Invert => *byte ^= mask,
        }
    }

    /// Gets the legacy numeric encoding (0 = off, 1 = on, 2 = invert)
    pub fn get_value(self) -> u8 {
        match self {
            PixelColor::Off => 0,
            PixelColor::On => 1,
            PixelColor::Invert => 2,
        }
    }
}

impl TryFrom<u8> for PixelColor {
    type Error = InvalidColor;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(PixelColor::Off),
            1 => Ok(PixelColor::On),
            2 => Ok(PixelColor::Invert),
            e => Err(InvalidColor(e)),
        }
    }
}

impl From<bool> for PixelColor {
    fn from(on: bool) -> Self {
        if on {
            PixelColor::On
        } else {
            PixelColor::Off
        }
    }
}

#[cfg(feature = "graphics")]
impl From<embedded_graphics_core::pixelcolor::BinaryColor> for PixelColor {
    fn from(color: embedded_graphics_core::pixelcolor::BinaryColor) -> Self {
        use embedded_graphics_core::pixelcolor::BinaryColor;
        match color {
            BinaryColor::On => PixelColor::On,
            BinaryColor::Off => PixelColor::Off,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_u8() {
        assert_eq!(PixelColor::try_from(0u8), Ok(PixelColor::Off));
        assert_eq!(PixelColor::try_from(1u8), Ok(PixelColor::On));
        assert_eq!(PixelColor::try_from(2u8), Ok(PixelColor::Invert));
    }

    // every value above 2 is rejected rather than coerced
    #[test]
    fn from_u8_rejects_rest() {
        for val in 3..=u8::MAX {
            assert_eq!(PixelColor::try_from(val), Err(InvalidColor(val)));
        }
    }

    #[test]
    fn legacy_value_round_trip() {
        for color in [PixelColor::Off, PixelColor::On, PixelColor::Invert] {
            assert_eq!(PixelColor::try_from(color.get_value()), Ok(color));
        }
    }

    #[test]
    fn apply_mask() {
        let mut byte = 0b1010_0000;
        PixelColor::On.apply(&mut byte, 0b0000_0011);
        assert_eq!(byte, 0b1010_0011);
        PixelColor::Off.apply(&mut byte, 0b1000_0001);
        assert_eq!(byte, 0b0010_0010);
        PixelColor::Invert.apply(&mut byte, 0b1111_0000);
        assert_eq!(byte, 0b1101_0010);
    }
}
