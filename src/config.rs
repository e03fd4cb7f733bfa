//! Panel configuration applied by `begin()`
use bit_field::BitField;
use log::debug;

use crate::framebuffer::Bitmap;
use crate::rotation::DisplayRotation;

/// Contrast used before `begin()` picks one for the panel size
pub const DEFAULT_CONTRAST: u8 = 0x8F;

/// Where the panel gets its high driving voltage from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VccSource {
    /// On-chip charge pump, the usual case for breakout modules
    #[default]
    Internal,
    /// External supply on the VCC pin
    External,
}

impl VccSource {
    /// Parameter of the charge pump command: `0x14` enables the pump, `0x10`
    /// leaves it off
    pub fn charge_pump(self) -> u8 {
        let mut value = 0x10u8;
        value.set_bit(2, self == VccSource::Internal);
        value
    }

    /// Pre-charge period: phase 1 in the low nibble, phase 2 in the high one
    pub fn precharge(self) -> u8 {
        match self {
            VccSource::External => 0x22,
            VccSource::Internal => 0xF1,
        }
    }
}

/// Settings that depend on the panel geometry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanelProfile {
    /// COM pins hardware configuration
    pub com_pins: u8,
    /// Contrast written during `begin()`
    pub contrast: u8,
    /// Pre-charge period
    pub precharge: u8,
}

impl PanelProfile {
    /// Look up the settings for a `width` x `height` panel
    pub fn for_size(width: u32, height: u32, vcc: VccSource) -> Self {
        let external = vcc == VccSource::External;
        let (com_pins, contrast) = match (width, height) {
            (128, 32) => (0x02, 0x8F),
            (128, 64) => (0x12, if external { 0x9F } else { 0xCF }),
            (96, 16) => (0x02, if external { 0x10 } else { 0xAF }),
            _ => (0x02, 0x8F),
        };
        debug!(
            "panel {}x{}: com pins {:#04x}, contrast {:#04x}",
            width, height, com_pins, contrast
        );
        PanelProfile {
            com_pins,
            contrast,
            precharge: vcc.precharge(),
        }
    }
}

/// Builder for the controller settings
///
/// ```
/// use oled_ssd1306::prelude::*;
///
/// let config = Config::default()
///     .vcc(VccSource::External)
///     .rotation(DisplayRotation::Rotate180)
///     .suppress_splash(true);
/// assert_eq!(config.vcc, VccSource::External);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Config<'a> {
    /// Voltage source of the panel
    pub vcc: VccSource,
    /// Skip the splash and start with an empty screen
    pub suppress_splash: bool,
    /// Bitmap drawn centered on the panel during `begin()`
    pub splash: Option<Bitmap<'a>>,
    /// Splash for panels at most 32 rows high, `splash` is used if unset
    pub splash_small: Option<Bitmap<'a>>,
    /// Initial rotation
    pub rotation: DisplayRotation,
    /// Contrast until `begin()` replaces it
    pub contrast: u8,
}

impl Default for Config<'_> {
    fn default() -> Self {
        Config {
            vcc: VccSource::default(),
            suppress_splash: false,
            splash: None,
            splash_small: None,
            rotation: DisplayRotation::default(),
            contrast: DEFAULT_CONTRAST,
        }
    }
}

impl<'a> Config<'a> {
    /// Set the voltage source
    pub fn vcc(mut self, vcc: VccSource) -> Self {
        self.vcc = vcc;
        self
    }

    /// Don't draw the splash during `begin()`
    pub fn suppress_splash(mut self, suppress: bool) -> Self {
        self.suppress_splash = suppress;
        self
    }

    /// Bitmap to show after power up
    pub fn splash(mut self, splash: Bitmap<'a>) -> Self {
        self.splash = Some(splash);
        self
    }

    /// Bitmap to show after power up on panels at most 32 rows high
    pub fn splash_small(mut self, splash: Bitmap<'a>) -> Self {
        self.splash_small = Some(splash);
        self
    }

    /// The splash fitting a panel with `height` physical rows
    pub fn splash_for(&self, height: u32) -> Option<Bitmap<'a>> {
        if height > 32 {
            self.splash.or(self.splash_small)
        } else {
            self.splash_small.or(self.splash)
        }
    }

    /// Start in another orientation
    pub fn rotation(mut self, rotation: DisplayRotation) -> Self {
        self.rotation = rotation;
        self
    }

    /// Initial contrast
    pub fn contrast(mut self, contrast: u8) -> Self {
        self.contrast = contrast;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn charge_pump_values() {
        assert_eq!(VccSource::Internal.charge_pump(), 0x14);
        assert_eq!(VccSource::External.charge_pump(), 0x10);
    }

    #[test]
    fn profile_table() {
        let p = PanelProfile::for_size(128, 64, VccSource::Internal);
        assert_eq!(p, PanelProfile { com_pins: 0x12, contrast: 0xCF, precharge: 0xF1 });
        let p = PanelProfile::for_size(128, 64, VccSource::External);
        assert_eq!(p, PanelProfile { com_pins: 0x12, contrast: 0x9F, precharge: 0x22 });

        assert_eq!(PanelProfile::for_size(128, 32, VccSource::Internal).contrast, 0x8F);
        assert_eq!(PanelProfile::for_size(128, 32, VccSource::External).com_pins, 0x02);

        assert_eq!(PanelProfile::for_size(96, 16, VccSource::External).contrast, 0x10);
        assert_eq!(PanelProfile::for_size(96, 16, VccSource::Internal).contrast, 0xAF);

        // anything else gets the default row
        let p = PanelProfile::for_size(64, 48, VccSource::Internal);
        assert_eq!((p.com_pins, p.contrast), (0x02, 0x8F));
    }

    #[test]
    fn builder() {
        let data = [0xFFu8; 2];
        let bitmap = Bitmap::new(8, 2, &data).unwrap();
        let config = Config::default()
            .contrast(0x20)
            .splash(bitmap)
            .rotation(DisplayRotation::Rotate90);
        assert_eq!(config.contrast, 0x20);
        assert_eq!(config.rotation, DisplayRotation::Rotate90);
        assert!(config.splash.is_some());
        assert!(!config.suppress_splash);
        assert_eq!(config.vcc, VccSource::Internal);
    }

    #[test]
    fn splash_by_panel_height() {
        let large_data = [0xFFu8; 4];
        let small_data = [0xFFu8; 2];
        let large = Bitmap::new(16, 2, &large_data).unwrap();
        let small = Bitmap::new(8, 2, &small_data).unwrap();

        let both = Config::default().splash(large).splash_small(small);
        assert_eq!(both.splash_for(64).map(|b| b.width()), Some(16));
        assert_eq!(both.splash_for(33).map(|b| b.width()), Some(16));
        assert_eq!(both.splash_for(32).map(|b| b.width()), Some(8));
        assert_eq!(both.splash_for(16).map(|b| b.width()), Some(8));

        // a single splash serves every height
        let only_large = Config::default().splash(large);
        assert_eq!(only_large.splash_for(16).map(|b| b.width()), Some(16));
        let only_small = Config::default().splash_small(small);
        assert_eq!(only_small.splash_for(64).map(|b| b.width()), Some(8));
        assert!(Config::default().splash_for(64).is_none());
    }
}
