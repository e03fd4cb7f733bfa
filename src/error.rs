use core::fmt::{Debug, Display, Formatter};

use crate::sequence::TableError;

/// Transport error type
///
/// Generic over the error types of the bus, the D/C pin and the reset pin.
/// Interfaces without one of the pins use [`core::convert::Infallible`].
#[derive(Eq, PartialEq, Ord, PartialOrd, Hash, Clone, Copy)]
pub enum ErrorKind<BUS, DC, RST> {
    /// Encountered an error on the SPI or I2C bus
    BusError(BUS),

    /// Encountered an error on DC GPIO
    DcError(DC),

    /// Encountered an error on RST GPIO
    RstError(RST),
}

impl<BUS, DC, RST> Display for ErrorKind<BUS, DC, RST>
where
    BUS: Display,
    DC: Display,
    RST: Display,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::BusError(err) => Display::fmt(&err, f),
            Self::DcError(err) => Display::fmt(&err, f),
            Self::RstError(err) => Display::fmt(&err, f),
        }
    }
}

impl<BUS, DC, RST> Debug for ErrorKind<BUS, DC, RST>
where
    BUS: Debug,
    DC: Debug,
    RST: Debug,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::BusError(err) => Debug::fmt(&err, f),
            Self::DcError(err) => Debug::fmt(&err, f),
            Self::RstError(err) => Debug::fmt(&err, f),
        }
    }
}

/// Driver error type
///
/// `E` is the error of the [`DisplayInterface`](crate::traits::DisplayInterface)
/// in use. Transport failures leave the framebuffer untouched, so a failed
/// `display()` can simply be retried.
#[derive(Eq, PartialEq, Clone, Copy)]
pub enum Error<E> {
    /// The transport failed
    Interface(E),

    /// A command table is inconsistent, nothing of it was sent
    MalformedTable(TableError),

    /// A rotation index outside `0..=3`
    InvalidRotation(u8),
}

impl<E> From<TableError> for Error<E> {
    fn from(err: TableError) -> Self {
        Error::MalformedTable(err)
    }
}

impl<E: Display> Display for Error<E> {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Interface(err) => Display::fmt(&err, f),
            Self::MalformedTable(err) => Display::fmt(&err, f),
            Self::InvalidRotation(r) => write!(f, "invalid rotation {}", r),
        }
    }
}

impl<E: Debug> Debug for Error<E> {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Interface(err) => f.debug_tuple("Interface").field(err).finish(),
            Self::MalformedTable(err) => f.debug_tuple("MalformedTable").field(err).finish(),
            Self::InvalidRotation(r) => f.debug_tuple("InvalidRotation").field(r).finish(),
        }
    }
}
