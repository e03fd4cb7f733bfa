//! Logical to physical coordinate mapping

/// Display rotation, only 90° increments supported
#[derive(Default, Clone, Copy, PartialEq, Eq, Debug)]
pub enum DisplayRotation {
    /// No rotation
    #[default]
    Rotate0,
    /// Rotate by 90 degrees clockwise
    Rotate90,
    /// Rotate by 180 degrees clockwise
    Rotate180,
    /// Rotate 270 degrees clockwise
    Rotate270,
}

impl DisplayRotation {
    /// Whether logical width and height are swapped relative to the panel
    pub fn is_transposed(self) -> bool {
        matches!(self, DisplayRotation::Rotate90 | DisplayRotation::Rotate270)
    }

    /// Logical `(width, height)` of a `width` x `height` panel under this rotation
    pub fn logical_size(self, width: u32, height: u32) -> (u32, u32) {
        if self.is_transposed() {
            (height, width)
        } else {
            (width, height)
        }
    }

    /// Map a logical point to physical buffer coordinates.
    ///
    /// `width` and `height` are the physical panel dimensions. No bounds
    /// checking is done here.
    pub fn transform(self, x: i32, y: i32, width: u32, height: u32) -> (i32, i32) {
        let (w, h) = (width as i32, height as i32);
        match self {
            DisplayRotation::Rotate0 => (x, y),
            DisplayRotation::Rotate90 => {
                let (x, y) = (y, x);
                (w - x - 1, y)
            }
            DisplayRotation::Rotate180 => (w - x - 1, h - y - 1),
            DisplayRotation::Rotate270 => {
                let (x, y) = (y, x);
                (x, h - y - 1)
            }
        }
    }

    /// Numeric form, 0 to 3 quarter turns
    pub fn quarter_turns(self) -> u8 {
        match self {
            DisplayRotation::Rotate0 => 0,
            DisplayRotation::Rotate90 => 1,
            DisplayRotation::Rotate180 => 2,
            DisplayRotation::Rotate270 => 3,
        }
    }
}

impl TryFrom<u8> for DisplayRotation {
    type Error = u8;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(DisplayRotation::Rotate0),
            1 => Ok(DisplayRotation::Rotate90),
            2 => Ok(DisplayRotation::Rotate180),
            3 => Ok(DisplayRotation::Rotate270),
            e => Err(e),
        }
    }
}
