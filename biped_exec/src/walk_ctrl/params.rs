//! Parameters structure for WalkCtrl

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

use serde::Deserialize;

use crate::gait::GaitParams;

// ---------------------------------------------------------------------------
// DATA STRUCTURES
// ---------------------------------------------------------------------------

/// Parameters for walk control.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Params {

    /// Value the sequencer's progress counter ramps up to before ramping back down.
    ///
    /// Units: ticks
    pub cycles_to_goal: i64,

    /// Time to wait once the stance has been reached before walking starts.
    ///
    /// Units: seconds
    pub settle_time_s: f64,

    /// Tuning of the gait.
    pub gait: GaitParams,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            cycles_to_goal: 70,
            settle_time_s: 1.0,
            gait: GaitParams::default(),
        }
    }
}
