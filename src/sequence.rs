//! Table driven command sequences
//!
//! A table is a flat byte list: the number of commands, then for every
//! command its opcode, an argument count byte, the arguments and, if the top
//! bit of the count byte is set, one delay byte in milliseconds (`0xFF`
//! stands for 500 ms).
//!
//! ```text
//! [2,                 // 2 commands
//!  0xAE, 0x80, 0xFF,  // display off, no args, then wait 500 ms
//!  0xD5, 0x01, 0x80]  // clock divider, 1 arg
//! ```

use core::fmt::{self, Display, Formatter};

use embedded_hal::delay::DelayNs;
use log::trace;

use crate::traits::DisplayInterface;

/// Set in the argument count byte when a delay byte follows the arguments
pub const DELAY_FLAG: u8 = 0x80;
/// Delay byte standing for a long pause
pub const LONG_DELAY: u8 = 0xFF;
/// Length of the long pause in milliseconds
pub const LONG_DELAY_MS: u32 = 500;

/// First part of the power-up sequence: display off, then the clock divider
#[rustfmt::skip]
pub const INIT_SEQ_1: &[u8] = &[
    2,
    0xAE, DELAY_FLAG, LONG_DELAY, // display off, wait 500 ms
    0xD5, 0x01, 0x80, // clock divide ratio, suggested value
];

/// Second part: display offset 0 and start line 0
#[rustfmt::skip]
pub const INIT_SEQ_2: &[u8] = &[
    2,
    0xD3, 0x01, 0x00, // display offset
    0x40, 0x00, // start line 0
];

/// Third part: horizontal addressing, flipped segments and COM scan
#[rustfmt::skip]
pub const INIT_SEQ_3: &[u8] = &[
    3,
    0x20, 0x01, 0x00, // horizontal addressing mode
    0xA1, 0x00, // column 127 mapped to SEG0
    0xC8, 0x00, // scan COM[N-1] to COM0
];

/// Fourth part: VCOMH level, output follows RAM, normal polarity, no scroll
#[rustfmt::skip]
pub const INIT_SEQ_4: &[u8] = &[
    4,
    0xDB, 0x01, 0x40, // VCOMH deselect level
    0xA4, 0x00, // resume to RAM content
    0xA6, 0x00, // normal display
    0x2E, 0x00, // deactivate scroll
];

/// Ways a command table can be inconsistent
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableError {
    /// The table has no command count byte
    Empty,
    /// The table ended in the middle of command `command` at byte `offset`
    Truncated {
        /// Zero based command number
        command: usize,
        /// Offset of the first missing byte, i.e. the table length
        offset: usize,
    },
    /// Bytes remain after the last declared command
    TrailingBytes {
        /// Offset of the first unused byte
        offset: usize,
    },
}

impl Display for TableError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "command table is empty"),
            Self::Truncated { command, offset } => write!(
                f,
                "command table ends inside command {} at byte {}",
                command, offset
            ),
            Self::TrailingBytes { offset } => {
                write!(f, "command table has unused bytes from byte {}", offset)
            }
        }
    }
}

/// One decoded command of a table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableEntry<'a> {
    /// Opcode byte
    pub opcode: u8,
    /// Parameter bytes, possibly empty
    pub args: &'a [u8],
    /// Pause after the command, in milliseconds
    pub delay_ms: Option<u32>,
}

/// A validated command table.
///
/// Validation walks the whole table up front, so a broken table is rejected
/// before its first command reaches the panel.
#[derive(Debug, Clone, Copy)]
pub struct CommandTable<'a> {
    count: usize,
    body: &'a [u8],
}

impl<'a> CommandTable<'a> {
    /// Check `bytes` and wrap them. Bytes after the last declared command
    /// are an error, not padding.
    pub fn new(bytes: &'a [u8]) -> Result<Self, TableError> {
        let (&count, body) = bytes.split_first().ok_or(TableError::Empty)?;
        let table = Self {
            count: count as usize,
            body,
        };

        let mut offset = 0;
        for command in 0..table.count {
            match decode(body, offset) {
                Some((_, next)) => offset = next,
                None => {
                    return Err(TableError::Truncated {
                        command,
                        offset: bytes.len(),
                    })
                }
            }
        }
        if offset != body.len() {
            return Err(TableError::TrailingBytes { offset: offset + 1 });
        }
        Ok(table)
    }

    /// Number of commands in the table
    pub fn len(&self) -> usize {
        self.count
    }

    /// Whether the table holds no command
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Decoded commands in table order
    pub fn iter(&self) -> Entries<'a> {
        Entries {
            body: self.body,
            offset: 0,
            left: self.count,
        }
    }

    /// Send every command through `iface`, pausing where the table asks to.
    ///
    /// Commands run strictly one after the other; a transport error stops the
    /// sequence right away.
    pub fn run<DI, D>(&self, iface: &mut DI, delay: &mut D) -> Result<(), DI::Error>
    where
        DI: DisplayInterface,
        D: DelayNs,
    {
        for entry in self.iter() {
            trace!("table command {:#04x} {:02x?}", entry.opcode, entry.args);
            iface.send_command(entry.opcode, entry.args)?;
            if let Some(ms) = entry.delay_ms {
                trace!("table delay {} ms", ms);
                delay.delay_ms(ms);
            }
        }
        Ok(())
    }
}

/// Iterator over the commands of a [`CommandTable`]
#[derive(Debug, Clone)]
pub struct Entries<'a> {
    body: &'a [u8],
    offset: usize,
    left: usize,
}

impl<'a> Iterator for Entries<'a> {
    type Item = TableEntry<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.left == 0 {
            return None;
        }
        // the table was validated on construction
        let (entry, next) = decode(self.body, self.offset)?;
        self.offset = next;
        self.left -= 1;
        Some(entry)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.left, Some(self.left))
    }
}

// Decode the command starting at `offset`, returning it and the offset of the
// next one. None when the bytes run out.
fn decode(body: &[u8], offset: usize) -> Option<(TableEntry<'_>, usize)> {
    let opcode = *body.get(offset)?;
    let count = *body.get(offset + 1)?;
    let has_delay = count & DELAY_FLAG != 0;
    let num_args = (count & !DELAY_FLAG) as usize;

    let args_start = offset + 2;
    let args = body.get(args_start..args_start + num_args)?;
    let mut next = args_start + num_args;

    let delay_ms = if has_delay {
        let ms = match *body.get(next)? {
            LONG_DELAY => LONG_DELAY_MS,
            ms => ms as u32,
        };
        next += 1;
        Some(ms)
    } else {
        None
    };

    Some((
        TableEntry {
            opcode,
            args,
            delay_ms,
        },
        next,
    ))
}
