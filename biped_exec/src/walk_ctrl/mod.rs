//! Walk control module
//!
//! Owns the authored gait and the triangle wave sequencer, and picks the posture to send on each
//! cycle of the walk loop.

// ---------------------------------------------------------------------------
// MODULES
// ---------------------------------------------------------------------------

mod params;
mod sequencer;
mod state;

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

// Internal
pub use params::*;
pub use sequencer::*;
pub use state::*;

// ---------------------------------------------------------------------------
// ENUMERATIONS
// ---------------------------------------------------------------------------

/// Possible errors that can occur during WalkCtrl operation.
#[derive(Debug, thiserror::Error)]
pub enum WalkCtrlError {
    #[error("Invalid sequencer configuration: {0}")]
    SequencerError(#[from] SequencerError),

    #[error("WalkCtrl was used before being initialised")]
    NotInitialised,
}
