//! # Servo bus interface crate.
//!
//! Provides the boundary between the walking software and the multi-servo bus controller: the
//! [`ServoBus`] trait, the RCB-4 command buffer and framing, the serial connection and the
//! degree to pulse conversion.

// ------------------------------------------------------------------------------------------------
// MODULES
// ------------------------------------------------------------------------------------------------

/// The bus trait and its error type
pub mod bus;

/// Angle to servo pulse conversion
pub mod pulse;

/// RCB-4 command framing and serial connection
pub mod rcb4;

// ------------------------------------------------------------------------------------------------
// EXPORTS
// ------------------------------------------------------------------------------------------------

pub use bus::{BusError, ServoBus};
pub use pulse::deg_to_pulse;
pub use rcb4::{BusParams, BusPort, Command, CommandKind, Rcb4Bus, ServoMode};
