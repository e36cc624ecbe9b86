//! # Posture dispatch
//!
//! Converts a posture into a bus command, transmits it and holds for the posture's hold time.

// ------------------------------------------------------------------------------------------------
// IMPORTS
// ------------------------------------------------------------------------------------------------

use std::convert::TryFrom;
use std::time::Duration;

use log::trace;
use servo_if::{deg_to_pulse, BusError, Command, CommandKind, ServoBus, ServoMode};

use crate::joints::{JointId, ALWAYS_SENT};
use crate::posture::Posture;

// ------------------------------------------------------------------------------------------------
// TRAITS
// ------------------------------------------------------------------------------------------------

/// Paces the dispatch of postures.
pub trait Pacer {
    /// Block for the given time.
    fn hold(&mut self, duration: Duration);
}

// ------------------------------------------------------------------------------------------------
// STRUCTS
// ------------------------------------------------------------------------------------------------

/// Pacer which sleeps the calling thread.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadPacer;

// ------------------------------------------------------------------------------------------------
// ENUMS
// ------------------------------------------------------------------------------------------------

#[derive(thiserror::Error, Debug)]
pub enum DispatchError {
    #[error("Angle {angle_deg} deg of joint {joint:?} is outside the servo's pulse range")]
    PulseOutOfRange {
        joint: JointId,
        angle_deg: i32,
    },

    #[error("Could not transmit the posture: {0}")]
    BusError(#[from] BusError),
}

// ------------------------------------------------------------------------------------------------
// IMPLS
// ------------------------------------------------------------------------------------------------

impl Pacer for ThreadPacer {
    fn hold(&mut self, duration: Duration) {
        std::thread::sleep(duration);
    }
}

// ------------------------------------------------------------------------------------------------
// FUNCTIONS
// ------------------------------------------------------------------------------------------------

/// Build the bus command for a posture.
///
/// Joints at zero degrees are assumed to already be at rest and are left out of the command,
/// except for [`ALWAYS_SENT`] which is included whatever its angle.
pub fn build_command(posture: &Posture) -> Result<Command, DispatchError> {
    let mut cmd = Command::new(CommandKind::Const);
    cmd.set_speed(posture.speed);

    for (joint, angle_deg) in posture.iter() {
        if angle_deg == 0 && joint != ALWAYS_SENT {
            continue;
        }

        let pulse = u16::try_from(deg_to_pulse(angle_deg as f64))
            .map_err(|_| DispatchError::PulseOutOfRange { joint, angle_deg })?;

        cmd.set_servo(joint.0, ServoMode::Position, pulse);
    }

    Ok(cmd)
}

/// Send a posture to the bus, then hold for its hold time.
///
/// Nothing is held if the posture couldn't be sent.
pub fn dispatch<B, P>(bus: &mut B, posture: &Posture, pacer: &mut P) -> Result<(), DispatchError>
where
    B: ServoBus + ?Sized,
    P: Pacer + ?Sized,
{
    let cmd = build_command(posture)?;
    trace!("Dispatching servos {:?}", cmd.servo_ids().collect::<Vec<_>>());

    bus.transmit(&cmd)?;

    pacer.hold(Duration::from_millis(posture.hold_ms));

    Ok(())
}
