//! Parameters structure for gait authoring
//!
//! Angles are given in degrees in each servo's own frame. Left and right servos are mounted
//! facing each other, so the same physical motion has opposite signs on each side.

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

use serde::Deserialize;

// ---------------------------------------------------------------------------
// DATA STRUCTURES
// ---------------------------------------------------------------------------

/// Tuning of the walking gait.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct GaitParams {

    /// Speed forwarded to the bus controller with every posture.
    pub speed: u16,

    /// Time each posture is held before the next one is sent.
    ///
    /// Units: milliseconds
    pub hold_ms: u64,

    /// Lateral tilt of the hip and ankle roll joints used to shift weight.
    ///
    /// Units: degrees
    pub tilt: i32,

    /// Standing stance, also the base of every gait phase.
    pub stance: StanceParams,

    /// Left leg swing (phase 0), applied on top of the stance.
    pub swing: SwingParams,

    /// Weight shift (phase 1), applied on top of the swing.
    pub shift: ShiftParams,
}

/// Joint offsets of the standing stance.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct StanceParams {
    pub l_shldr_p: i32,
    pub l_thigh_p: i32,
    pub l_knee: i32,
    pub l_foot_p: i32,
    pub r_thigh_p: i32,
    pub r_knee: i32,
    pub r_foot_p: i32,
}

/// Joint overrides of the left leg swing phase.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SwingParams {
    pub l_thigh_p: i32,
    pub l_knee: i32,
    pub l_foot_p: i32,
    pub l_foot_r: i32,
    pub r_knee: i32,
    pub r_foot_p: i32,
}

/// Joint overrides of the weight shift phase.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ShiftParams {
    /// Shoulder pitch counter-swing, positive on the left and negated on the right.
    pub shldr_swing: i32,

    pub l_thigh_p: i32,
}

// ---------------------------------------------------------------------------
// IMPLEMENTATIONS
// ---------------------------------------------------------------------------

impl Default for GaitParams {
    fn default() -> Self {
        Self {
            speed: 350,
            hold_ms: 1000,
            tilt: 9,
            stance: StanceParams::default(),
            swing: SwingParams::default(),
            shift: ShiftParams::default(),
        }
    }
}

impl Default for StanceParams {
    fn default() -> Self {
        Self {
            l_shldr_p: 30,
            l_thigh_p: 85,
            l_knee: 60,
            l_foot_p: 10,
            r_thigh_p: -90,
            r_knee: -60,
            r_foot_p: 5,
        }
    }
}

impl Default for SwingParams {
    fn default() -> Self {
        Self {
            l_thigh_p: 90,
            l_knee: 10,
            l_foot_p: 55,
            l_foot_r: 8,
            r_knee: -120,
            r_foot_p: 55,
        }
    }
}

impl Default for ShiftParams {
    fn default() -> Self {
        Self {
            shldr_swing: 100,
            l_thigh_p: 75,
        }
    }
}
