//! Interfaces for use in unit tests to spy on whatever was sent to them.

extern crate std;
use std::vec::Vec;

use embedded_hal::delay::DelayNs;

use crate::traits::DisplayInterface;

/// Anything a `Spy` has seen, in order
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Sent {
    Startup,
    Reset,
    Shutdown,
    Cmd(u8, Vec<u8>),
    Data(Vec<u8>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct SpyError;

pub(crate) struct Spy {
    sent: Vec<Sent>,
    fail_after: Option<usize>,
}

impl Spy {
    pub fn new() -> Self {
        Spy {
            sent: Vec::new(),
            fail_after: None,
        }
    }

    /// Let the next `transfers` command or data transfers succeed, fail the rest
    pub fn fail_after(&mut self, transfers: usize) {
        self.fail_after = Some(self.transfers() + transfers);
    }

    /// Let every transfer succeed again
    pub fn heal(&mut self) {
        self.fail_after = None;
    }

    pub fn sent(&self) -> &[Sent] {
        &self.sent
    }

    pub fn clear(&mut self) {
        self.sent.clear()
    }

    /// Opcodes of all commands, parameters dropped
    pub fn opcodes(&self) -> Vec<u8> {
        self.sent
            .iter()
            .filter_map(|s| match s {
                Sent::Cmd(op, _) => Some(*op),
                _ => None,
            })
            .collect()
    }

    fn transfers(&self) -> usize {
        self.sent
            .iter()
            .filter(|s| matches!(s, Sent::Cmd(..) | Sent::Data(..)))
            .count()
    }

    fn check(&self) -> Result<(), SpyError> {
        match self.fail_after {
            Some(limit) if self.transfers() >= limit => Err(SpyError),
            _ => Ok(()),
        }
    }
}

impl DisplayInterface for Spy {
    type Error = SpyError;

    fn startup(&mut self) -> Result<(), Self::Error> {
        self.sent.push(Sent::Startup);
        Ok(())
    }

    fn reset<D: DelayNs>(&mut self, _delay: &mut D) -> Result<(), Self::Error> {
        self.sent.push(Sent::Reset);
        Ok(())
    }

    fn shutdown(&mut self) -> Result<(), Self::Error> {
        self.sent.push(Sent::Shutdown);
        Ok(())
    }

    fn send_command(&mut self, opcode: u8, data: &[u8]) -> Result<(), Self::Error> {
        self.check()?;
        self.sent.push(Sent::Cmd(opcode, data.to_vec()));
        Ok(())
    }

    fn send_data(&mut self, data: &[u8]) -> Result<(), Self::Error> {
        self.check()?;
        self.sent.push(Sent::Data(data.to_vec()));
        Ok(())
    }
}

/// Delay that only writes down what it was asked for
pub(crate) struct RecordingDelay {
    delays_ms: Vec<u32>,
    total_ns: u64,
}

impl RecordingDelay {
    pub fn new() -> Self {
        RecordingDelay {
            delays_ms: Vec::new(),
            total_ns: 0,
        }
    }

    /// Every `delay_ms` call, in order
    pub fn delays_ms(&self) -> &[u32] {
        &self.delays_ms
    }

    /// Sum of all delays of any unit
    pub fn total_ns(&self) -> u64 {
        self.total_ns
    }
}

impl DelayNs for RecordingDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.total_ns += ns as u64;
    }

    fn delay_ms(&mut self, ms: u32) {
        self.delays_ms.push(ms);
        self.total_ns += ms as u64 * 1_000_000;
    }
}
