//! Hardware scrolling
//!
//! The controller scrolls display RAM on its own once activated. Every start
//! first deactivates a running scroll, since the controller ignores new
//! scroll parameters while one is active.
use bit_field::BitField;
use log::debug;

use crate::command::Command;
use crate::traits::{Command as _, DisplayInterface};

/// Frame interval code of the scroll step, `0x07` is 2 frames
const FRAME_INTERVAL: u8 = 0x07;

/// Direction of a hardware scroll
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollDirection {
    /// Content moves to the left
    Left,
    /// Content moves to the right
    Right,
    /// Moves left and up
    LeftDiagonal,
    /// Moves right and up
    RightDiagonal,
}

impl ScrollDirection {
    fn is_diagonal(self) -> bool {
        matches!(self, Self::LeftDiagonal | Self::RightDiagonal)
    }

    fn opcode(self) -> Command {
        match self {
            Self::Left | Self::LeftDiagonal => Command::VerticalAndLeftHorizontalScroll,
            Self::Right | Self::RightDiagonal => Command::VerticalAndRightHorizontalScroll,
        }
    }
}

/// What the controller is currently doing with display RAM
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScrollState {
    /// Static picture
    #[default]
    Inactive,
    /// Scrolling pages `start_page..=stop_page`
    Active {
        /// Direction of the movement
        direction: ScrollDirection,
        /// First page of the scrolled area
        start_page: u8,
        /// Last page of the scrolled area
        stop_page: u8,
    },
}

/// Keeps track of the hardware scroll state
#[derive(Debug, Clone, Copy, Default)]
pub struct ScrollEngine {
    state: ScrollState,
}

impl ScrollEngine {
    /// Engine in the [`ScrollState::Inactive`] state
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state
    pub fn state(&self) -> ScrollState {
        self.state
    }

    /// Start scrolling pages `start_page..=stop_page` of a panel `height` rows
    /// high. Restarts cleanly if a scroll is already running.
    pub fn start<DI: DisplayInterface>(
        &mut self,
        iface: &mut DI,
        direction: ScrollDirection,
        start_page: u8,
        stop_page: u8,
        height: u32,
    ) -> Result<(), DI::Error> {
        let rows = height.min(u8::MAX as u32) as u8;
        iface.send_command(Command::DeactivateScroll.address(), &[])?;
        // no scroll running from here on
        self.state = ScrollState::Inactive;
        iface.send_command(Command::SetVerticalScrollArea.address(), &[0x00, rows])?;

        let vertical_offset = if direction.is_diagonal() {
            1u8.min(rows)
        } else {
            0
        };
        iface.send_command(
            direction.opcode().address(),
            &[
                0x00,
                start_page.get_bits(0..3),
                FRAME_INTERVAL,
                stop_page.get_bits(0..3),
                vertical_offset.get_bits(0..7),
            ],
        )?;
        iface.send_command(Command::ActivateScroll.address(), &[])?;

        debug!(
            "scroll {:?} on pages {}..={}",
            direction, start_page, stop_page
        );
        self.state = ScrollState::Active {
            direction,
            start_page,
            stop_page,
        };
        Ok(())
    }

    /// Stop any scroll, safe to call when none is running
    pub fn stop<DI: DisplayInterface>(&mut self, iface: &mut DI) -> Result<(), DI::Error> {
        iface.send_command(Command::DeactivateScroll.address(), &[])?;
        if self.state != ScrollState::Inactive {
            debug!("scroll stopped");
        }
        self.state = ScrollState::Inactive;
        Ok(())
    }

    /// Forget the state without telling the controller, after a reset
    /// already stopped it
    pub(crate) fn mark_inactive(&mut self) {
        self.state = ScrollState::Inactive;
    }
}
