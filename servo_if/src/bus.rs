//! # Servo Bus
//!
//! Trait used by the walking software to talk to a servo bus controller, so that the real serial
//! connection can be swapped for a recording bus in tests.

// ------------------------------------------------------------------------------------------------
// IMPORTS
// ------------------------------------------------------------------------------------------------

use crate::rcb4::Command;

// ------------------------------------------------------------------------------------------------
// TRAITS
// ------------------------------------------------------------------------------------------------

/// A connection to a multi-servo bus controller.
pub trait ServoBus {
    /// Transmit a command and wait for the controller to acknowledge it.
    ///
    /// Transmission is all-or-nothing, an `Err` means the controller did not accept the command.
    fn transmit(&mut self, cmd: &Command) -> Result<(), BusError>;

    /// Release the underlying channel.
    ///
    /// Any later call to `transmit` shall return [`BusError::Disconnected`].
    fn disconnect(&mut self);
}

// ------------------------------------------------------------------------------------------------
// ENUMS
// ------------------------------------------------------------------------------------------------

#[derive(thiserror::Error, Debug)]
pub enum BusError {
    #[error("Could not open the serial port: {0}")]
    OpenError(serialport::Error),

    #[error("Serial I/O error: {0}")]
    IoError(std::io::Error),

    #[error("The bus connection has been released")]
    Disconnected,

    #[error("A {0:?} command must carry at least one servo target")]
    EmptyCommand(crate::rcb4::CommandKind),

    #[error("Encoded frame would be {0} bytes long, the maximum is 255")]
    FrameTooLong(usize),

    #[error("The controller rejected command 0x{0:02X}")]
    Nack(u8),

    #[error("Unexpected reply from the controller: {0:02X?}")]
    BadReply(Vec<u8>),
}
