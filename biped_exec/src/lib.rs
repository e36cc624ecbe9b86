//! # Biped walking library.
//!
//! This library holds everything the walking executable needs: the joint table, postures, gait
//! authoring, walk control and posture dispatch.

// ------------------------------------------------------------------------------------------------
// MODULES
// ------------------------------------------------------------------------------------------------

/// Posture dispatch - converts postures into bus commands and sends them
pub mod dispatch;

/// Gait authoring - builds the walking cycle from its tuning parameters
pub mod gait;

/// Joint table - servo ids and mirror pairs
pub mod joints;

/// Executable parameters
pub mod params;

/// Posture data model and mirror transform
pub mod posture;

/// Walk loop - stance, walking and bus release
pub mod walk;

/// Walk control module - selects the posture to send on each cycle
pub mod walk_ctrl;

#[cfg(test)]
pub(crate) mod test_util;
