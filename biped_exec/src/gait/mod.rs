//! # Gait authoring
//!
//! Builds the walking cycle. Only the left-leading half of the cycle is authored by hand, the
//! right-leading half is derived from it with the mirror transform.

// ---------------------------------------------------------------------------
// MODULES
// ---------------------------------------------------------------------------

mod params;

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

// External
use log::debug;
use serde::Serialize;

// Internal
pub use params::*;
use crate::joints::*;
use crate::posture::{mirror_into, Posture};

// ---------------------------------------------------------------------------
// CONSTANTS
// ---------------------------------------------------------------------------

/// Number of phases in one walking cycle.
pub const CYCLE_LEN: usize = 4;

/// Number of hand authored phases, the rest are their mirrors.
pub const HALF_CYCLE_LEN: usize = CYCLE_LEN / 2;

const _: () = assert!(CYCLE_LEN > 0 && CYCLE_LEN % 2 == 0, "CYCLE_LEN must be even");

// ---------------------------------------------------------------------------
// DATA STRUCTURES
// ---------------------------------------------------------------------------

/// One full stride, in temporal order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GaitCycle {
    phases: [Posture; CYCLE_LEN],
}

/// The authored gait: the standing stance and the walking cycle.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Gait {
    /// Stance the robot moves to before walking starts.
    pub home: Posture,

    pub cycle: GaitCycle,
}

// ---------------------------------------------------------------------------
// IMPLEMENTATIONS
// ---------------------------------------------------------------------------

impl GaitCycle {
    /// Get a phase of the cycle.
    ///
    /// # Panics
    /// - If `phase >= CYCLE_LEN`.
    pub fn phase(&self, phase: usize) -> &Posture {
        &self.phases[phase]
    }

    pub fn len(&self) -> usize {
        self.phases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.phases.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Posture> {
        self.phases.iter()
    }
}

// ---------------------------------------------------------------------------
// PUBLIC FUNCTIONS
// ---------------------------------------------------------------------------

/// Author the gait from its tuning parameters.
///
/// Every cycle slot is first seeded with the stance, the left-leading phases are then authored
/// over the seeds and finally mirrored into the right-leading slots. Each phase builds on the one
/// before it, so torso angles set in earlier phases carry through to later ones.
pub fn author_gait(params: &GaitParams) -> Gait {
    let home = author_stance(params);

    let mut phases = [home; CYCLE_LEN];

    // Left leg swing
    let mut swing = home;
    swing.set(L_THIGH_R, -params.tilt);
    swing.set(L_THIGH_P, params.swing.l_thigh_p);
    swing.set(L_KNEE, params.swing.l_knee);
    swing.set(L_FOOT_P, params.swing.l_foot_p);
    swing.set(L_FOOT_R, params.swing.l_foot_r);
    swing.set(R_KNEE, params.swing.r_knee);
    swing.set(R_FOOT_P, params.swing.r_foot_p);
    swing.set(R_FOOT_R, params.tilt);
    phases[0] = swing;

    // Weight shift, keeping the stride of the swing but reversing the tilt
    let mut shift = swing;
    shift.set(L_SHLDR_P, params.shift.shldr_swing);
    shift.set(R_SHLDR_P, -params.shift.shldr_swing);
    shift.set(L_THIGH_P, params.shift.l_thigh_p);
    shift.set(L_THIGH_R, params.tilt);
    shift.set(R_THIGH_R, params.tilt);
    shift.set(L_FOOT_R, -params.tilt);
    shift.set(R_FOOT_R, -params.tilt);
    phases[1] = shift;

    // Right-leading half, always read from the authored half
    let (left_leading, right_leading) = phases.split_at_mut(HALF_CYCLE_LEN);
    for (src, dst) in left_leading.iter().zip(right_leading.iter_mut()) {
        mirror_into(src, dst);
    }

    for (i, p) in phases.iter().enumerate() {
        debug!("Gait phase {}: {:?}", i, p.iter().filter(|(_, a)| *a != 0).collect::<Vec<_>>());
    }

    Gait {
        home,
        cycle: GaitCycle { phases },
    }
}

// ---------------------------------------------------------------------------
// PRIVATE FUNCTIONS
// ---------------------------------------------------------------------------

/// The standing stance: neutral timing plus the stance offsets and the lateral tilt.
fn author_stance(params: &GaitParams) -> Posture {
    let mut home = Posture::neutral(params.speed, params.hold_ms);

    home.set(L_SHLDR_P, params.stance.l_shldr_p);
    home.set(L_THIGH_P, params.stance.l_thigh_p);
    home.set(L_KNEE, params.stance.l_knee);
    home.set(L_FOOT_P, params.stance.l_foot_p);
    home.set(L_THIGH_R, -params.tilt);
    home.set(R_THIGH_R, -params.tilt);
    home.set(R_THIGH_P, params.stance.r_thigh_p);
    home.set(R_KNEE, params.stance.r_knee);
    home.set(R_FOOT_P, params.stance.r_foot_p);

    home
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_cycle_shape() {
        let gait = author_gait(&GaitParams::default());

        assert_eq!(gait.cycle.len(), CYCLE_LEN);
        assert_eq!(gait.cycle.len() % 2, 0);
        assert!(gait.cycle.iter().all(|p| p.speed == 350 && p.hold_ms == 1000));
    }

    #[test]
    fn test_stance() {
        let home = author_gait(&GaitParams::default()).home;

        assert_eq!(home.get(L_SHLDR_P), 30);
        assert_eq!(home.get(L_THIGH_P), 85);
        assert_eq!(home.get(L_KNEE), 60);
        assert_eq!(home.get(L_FOOT_P), 10);
        assert_eq!(home.get(L_THIGH_R), -9);
        assert_eq!(home.get(R_THIGH_R), -9);
        assert_eq!(home.get(R_THIGH_P), -90);
        assert_eq!(home.get(R_KNEE), -60);
        assert_eq!(home.get(R_FOOT_P), 5);
        assert_eq!(home.get(HEAD), 0);
        assert_eq!(home.get(WAIST), 0);
    }

    #[test]
    fn test_authored_phases() {
        let gait = author_gait(&GaitParams::default());
        let swing = gait.cycle.phase(0);
        let shift = gait.cycle.phase(1);

        assert_eq!(swing.get(L_THIGH_P), 90);
        assert_eq!(swing.get(L_KNEE), 10);
        assert_eq!(swing.get(R_KNEE), -120);
        assert_eq!(swing.get(R_FOOT_R), 9);
        // Inherited from the stance
        assert_eq!(swing.get(L_SHLDR_P), 30);
        assert_eq!(swing.get(R_THIGH_P), -90);

        assert_eq!(shift.get(L_SHLDR_P), 100);
        assert_eq!(shift.get(R_SHLDR_P), -100);
        assert_eq!(shift.get(L_THIGH_P), 75);
        assert_eq!(shift.get(L_THIGH_R), 9);
        assert_eq!(shift.get(R_THIGH_R), 9);
        assert_eq!(shift.get(L_FOOT_R), -9);
        assert_eq!(shift.get(R_FOOT_R), -9);
        // Inherited from the swing
        assert_eq!(shift.get(L_KNEE), 10);
        assert_eq!(shift.get(R_FOOT_P), 55);
    }

    #[test]
    fn test_right_leading_half_mirrors_left() {
        let params = GaitParams::default();
        let gait = author_gait(&params);

        // Compare against freshly mirrored sources rather than the cycle's own slots
        let fresh = author_gait(&params);
        assert_eq!(*gait.cycle.phase(2), fresh.cycle.phase(0).mirrored());
        assert_eq!(*gait.cycle.phase(3), fresh.cycle.phase(1).mirrored());

        for (left, right) in MIRROR_PAIRS.iter() {
            assert_eq!(gait.cycle.phase(2).get(*left), -gait.cycle.phase(0).get(*right));
            assert_eq!(gait.cycle.phase(3).get(*right), -gait.cycle.phase(1).get(*left));
        }
    }

    #[test]
    fn test_custom_tuning() {
        let params = GaitParams {
            tilt: 4,
            speed: 200,
            ..GaitParams::default()
        };
        let gait = author_gait(&params);

        assert_eq!(gait.home.get(L_THIGH_R), -4);
        assert_eq!(gait.cycle.phase(1).get(R_FOOT_R), -4);
        assert_eq!(gait.cycle.phase(3).get(L_FOOT_R), 4);
        assert!(gait.cycle.iter().all(|p| p.speed == 200));
    }

    #[test]
    fn test_params_from_partial_toml() {
        let params: GaitParams = toml::from_str(
            "tilt = 6\n[swing]\nl_knee = 20\n"
        ).unwrap();

        assert_eq!(params.tilt, 6);
        assert_eq!(params.swing.l_knee, 20);
        assert_eq!(params.swing.r_knee, -120);
        assert_eq!(params.stance, StanceParams::default());
        assert_eq!(params.speed, 350);
    }
}
