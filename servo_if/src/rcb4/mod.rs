//! # RCB-4 Bus Controller
//!
//! Command buffers and frame encoding for the RCB-4 style multi-servo controller.
//!
//! A `Const` frame sets the target pulse of several servos with a single shared speed:
//!
//! ```text
//! [size][0x10][speed lo][speed hi][count]{[id][mode][pulse lo][pulse hi]}*[sum]
//! ```
//!
//! `size` is the length of the whole frame and `sum` is the wrapping byte sum of everything before
//! it. The controller answers every frame with `[0x04][cmd][ACK|NACK][sum]`.

// ------------------------------------------------------------------------------------------------
// MODULES
// ------------------------------------------------------------------------------------------------

/// Serial connection to the controller.
mod conn;

// ------------------------------------------------------------------------------------------------
// IMPORTS
// ------------------------------------------------------------------------------------------------

use std::collections::BTreeMap;

use crate::bus::BusError;

pub use conn::*;

// ------------------------------------------------------------------------------------------------
// CONSTANTS
// ------------------------------------------------------------------------------------------------

/// Positive acknowledgement byte.
pub const ACK: u8 = 0x06;

/// Negative acknowledgement byte.
pub const NACK: u8 = 0x15;

/// Length of every reply frame sent by the controller.
pub const REPLY_LEN: usize = 4;

/// Maximum length of a frame, limited by the one byte size field.
pub const MAX_FRAME_LEN: usize = u8::MAX as usize;

/// Bytes in a `Const` frame that aren't servo targets (size, cmd, speed, count, sum).
const CONST_OVERHEAD: usize = 6;

/// Bytes per servo target in a `Const` frame.
const TARGET_LEN: usize = 4;

// ------------------------------------------------------------------------------------------------
// STRUCTS
// ------------------------------------------------------------------------------------------------

/// A command buffer waiting to be transmitted.
///
/// Targets are kept ordered by servo id, setting the same id twice keeps the last value.
#[derive(Debug, Clone, PartialEq)]
pub struct Command {
    kind: CommandKind,

    speed: u16,

    targets: BTreeMap<u8, ServoTarget>,
}

/// The demand for a single servo inside a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServoTarget {
    pub mode: ServoMode,

    pub pulse: u16,
}

// ------------------------------------------------------------------------------------------------
// ENUMS
// ------------------------------------------------------------------------------------------------

/// Kinds of command understood by the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandKind {
    /// Move several servos to constant targets at a shared speed.
    Const,

    /// Ask the controller to acknowledge, used to check the link is alive.
    Ack,
}

/// How a servo should treat its target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServoMode {
    /// Drive to the target pulse and hold it.
    Position,
}

// ------------------------------------------------------------------------------------------------
// IMPLS
// ------------------------------------------------------------------------------------------------

impl CommandKind {
    /// The command byte sent on the wire.
    pub fn code(self) -> u8 {
        match self {
            CommandKind::Const => 0x10,
            CommandKind::Ack => 0xFE,
        }
    }
}

impl ServoMode {
    fn code(self) -> u8 {
        match self {
            ServoMode::Position => 0x00,
        }
    }
}

impl Command {
    /// Create an empty command buffer of the given kind.
    pub fn new(kind: CommandKind) -> Self {
        Self {
            kind,
            speed: 0,
            targets: BTreeMap::new(),
        }
    }

    pub fn kind(&self) -> CommandKind {
        self.kind
    }

    pub fn speed(&self) -> u16 {
        self.speed
    }

    /// Set the speed shared by every servo in the command.
    pub fn set_speed(&mut self, speed: u16) {
        self.speed = speed;
    }

    /// Set the target of a servo.
    pub fn set_servo(&mut self, id: u8, mode: ServoMode, pulse: u16) {
        self.targets.insert(id, ServoTarget { mode, pulse });
    }

    /// Get the target for a servo, if one is set.
    pub fn target(&self, id: u8) -> Option<ServoTarget> {
        self.targets.get(&id).copied()
    }

    /// Iterate over the servo ids in this command, in ascending order.
    pub fn servo_ids(&self) -> impl Iterator<Item = u8> + '_ {
        self.targets.keys().copied()
    }

    /// Encode the command into a frame ready to be written to the controller.
    ///
    /// Speed and targets are not part of an `Ack` frame and are ignored for that kind.
    pub fn encode(&self) -> Result<Vec<u8>, BusError> {
        match self.kind {
            CommandKind::Ack => Ok(finish_frame(vec![REPLY_LEN as u8, self.kind.code(), ACK])),
            CommandKind::Const => {
                if self.targets.is_empty() {
                    return Err(BusError::EmptyCommand(self.kind));
                }

                let len = CONST_OVERHEAD + TARGET_LEN * self.targets.len();
                if len > MAX_FRAME_LEN {
                    return Err(BusError::FrameTooLong(len));
                }

                let mut frame = Vec::with_capacity(len);
                frame.push(len as u8);
                frame.push(self.kind.code());
                frame.extend_from_slice(&self.speed.to_le_bytes());
                frame.push(self.targets.len() as u8);

                for (id, target) in &self.targets {
                    frame.push(*id);
                    frame.push(target.mode.code());
                    frame.extend_from_slice(&target.pulse.to_le_bytes());
                }

                Ok(finish_frame(frame))
            }
        }
    }
}

// ------------------------------------------------------------------------------------------------
// FUNCTIONS
// ------------------------------------------------------------------------------------------------

/// Wrapping byte sum used as the frame checksum.
pub fn checksum(bytes: &[u8]) -> u8 {
    bytes.iter().fold(0u8, |sum, b| sum.wrapping_add(*b))
}

/// Check a reply frame from the controller against the command code that was sent.
pub fn parse_reply(cmd_code: u8, reply: &[u8]) -> Result<(), BusError> {
    if reply.len() != REPLY_LEN
        || reply[0] as usize != REPLY_LEN
        || reply[1] != cmd_code
        || checksum(&reply[..REPLY_LEN - 1]) != reply[REPLY_LEN - 1]
    {
        return Err(BusError::BadReply(reply.to_vec()));
    }

    match reply[2] {
        ACK => Ok(()),
        NACK => Err(BusError::Nack(cmd_code)),
        _ => Err(BusError::BadReply(reply.to_vec())),
    }
}

/// Append the checksum to a frame.
fn finish_frame(mut frame: Vec<u8>) -> Vec<u8> {
    let sum = checksum(&frame);
    frame.push(sum);
    frame
}
