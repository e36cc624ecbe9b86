//! # Posture
//!
//! A snapshot of every joint's target angle together with the timing used to reach it, and the
//! left/right mirror transform used to derive one side of the gait from the other.

// ------------------------------------------------------------------------------------------------
// IMPORTS
// ------------------------------------------------------------------------------------------------

use serde::Serialize;

use crate::joints::{JointId, MIRROR_PAIRS, NUM_JOINT_SLOTS};

// ------------------------------------------------------------------------------------------------
// STRUCTS
// ------------------------------------------------------------------------------------------------

/// Target angles for all joints plus motion timing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Posture {
    /// Target angle of each joint, indexed by joint id. Slot 0 is unused.
    ///
    /// Units: degrees
    positions: [i32; NUM_JOINT_SLOTS],

    /// Speed forwarded to the bus controller with the posture.
    pub speed: u16,

    /// Time to wait after the posture has been sent before sending the next one.
    ///
    /// Units: milliseconds
    pub hold_ms: u64,
}

// ------------------------------------------------------------------------------------------------
// IMPLS
// ------------------------------------------------------------------------------------------------

impl Posture {
    /// A posture with every joint at its centre (zero) angle.
    pub fn neutral(speed: u16, hold_ms: u64) -> Self {
        Self {
            positions: [0; NUM_JOINT_SLOTS],
            speed,
            hold_ms,
        }
    }

    /// Target angle of a joint in degrees.
    pub fn get(&self, joint: JointId) -> i32 {
        self.positions[joint.index()]
    }

    /// Set the target angle of a joint in degrees.
    pub fn set(&mut self, joint: JointId, angle_deg: i32) {
        self.positions[joint.index()] = angle_deg;
    }

    /// Iterate over `(joint, angle)` for every joint, in ascending id order.
    pub fn iter(&self) -> impl Iterator<Item = (JointId, i32)> + '_ {
        JointId::all().map(move |j| (j, self.get(j)))
    }

    /// The left/right mirror of this posture.
    ///
    /// Joints without a mirror partner keep this posture's angle.
    pub fn mirrored(&self) -> Self {
        let mut mirror = *self;
        mirror_into(self, &mut mirror);
        mirror
    }
}

// ------------------------------------------------------------------------------------------------
// FUNCTIONS
// ------------------------------------------------------------------------------------------------

/// Write the left/right mirror of `src` into `dst`.
///
/// For every mirrored pair the left joint of `dst` takes the negated angle of the right joint of
/// `src` and vice versa. Speed and hold time are copied. Joints without a mirror partner are left
/// as they were in `dst`.
pub fn mirror_into(src: &Posture, dst: &mut Posture) {
    dst.speed = src.speed;
    dst.hold_ms = src.hold_ms;

    for (left, right) in MIRROR_PAIRS.iter() {
        dst.set(*left, -src.get(*right));
        dst.set(*right, -src.get(*left));
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::joints::*;

    /// A posture with a different angle on every joint.
    fn asymmetric() -> Posture {
        let mut p = Posture::neutral(120, 250);
        for j in JointId::all() {
            p.set(j, j.0 as i32 * 3 - 20);
        }
        p
    }

    #[test]
    fn test_neutral() {
        let p = Posture::neutral(350, 1000);
        assert!(p.iter().all(|(_, angle)| angle == 0));
        assert_eq!(p.iter().count(), MAX_JOINT_ID as usize);
        assert_eq!(p.speed, 350);
        assert_eq!(p.hold_ms, 1000);
    }

    #[test]
    fn test_mirror_swaps_and_negates_pairs() {
        let a = asymmetric();
        let b = a.mirrored();

        for (left, right) in MIRROR_PAIRS.iter() {
            assert_eq!(b.get(*left), -a.get(*right));
            assert_eq!(b.get(*right), -a.get(*left));
        }

        assert_eq!(b.speed, a.speed);
        assert_eq!(b.hold_ms, a.hold_ms);
    }

    #[test]
    fn test_mirror_into_keeps_unpaired_joints() {
        let a = asymmetric();
        let mut dst = Posture::neutral(0, 0);
        dst.set(HEAD, 15);
        dst.set(WAIST, -5);

        mirror_into(&a, &mut dst);

        assert_eq!(dst.get(HEAD), 15);
        assert_eq!(dst.get(WAIST), -5);
        assert_eq!(dst.get(L_KNEE), -a.get(R_KNEE));
        assert_eq!(dst.speed, 120);
        assert_eq!(dst.hold_ms, 250);

        // Unpaired joints of `mirrored` come from the source
        assert_eq!(a.mirrored().get(HEAD), a.get(HEAD));
    }

    #[test]
    fn test_mirror_is_involution() {
        let a = asymmetric();
        assert_eq!(a.mirrored().mirrored(), a);
    }
}
