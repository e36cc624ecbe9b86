//! # Joint table
//!
//! Servo ids of every joint of the robot. Left side joints have odd ids and their right side
//! counterpart is always the next even id.

// ------------------------------------------------------------------------------------------------
// STRUCTS
// ------------------------------------------------------------------------------------------------

/// The bus id of a joint servo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct JointId(pub u8);

// ------------------------------------------------------------------------------------------------
// CONSTANTS
// ------------------------------------------------------------------------------------------------

/// Highest joint id in use. Id 0 is reserved.
pub const MAX_JOINT_ID: u8 = 22;

/// Number of slots in a per-joint array, including the reserved slot 0.
pub const NUM_JOINT_SLOTS: usize = MAX_JOINT_ID as usize + 1;

pub const HEAD: JointId = JointId(1);
pub const WAIST: JointId = JointId(2);

pub const L_SHLDR_P: JointId = JointId(3);
pub const R_SHLDR_P: JointId = JointId(4);
pub const L_SHLDR_R: JointId = JointId(5);
pub const R_SHLDR_R: JointId = JointId(6);
pub const L_ELBW_Y: JointId = JointId(7);
pub const R_ELBW_Y: JointId = JointId(8);
pub const L_ELBW_P: JointId = JointId(9);
pub const R_ELBW_P: JointId = JointId(10);

pub const L_THIGH_Y: JointId = JointId(11);
pub const R_THIGH_Y: JointId = JointId(12);
pub const L_THIGH_R: JointId = JointId(13);
pub const R_THIGH_R: JointId = JointId(14);
pub const L_THIGH_P: JointId = JointId(15);
pub const R_THIGH_P: JointId = JointId(16);
pub const L_KNEE: JointId = JointId(17);
pub const R_KNEE: JointId = JointId(18);
pub const L_FOOT_P: JointId = JointId(19);
pub const R_FOOT_P: JointId = JointId(20);
pub const L_FOOT_R: JointId = JointId(21);
pub const R_FOOT_R: JointId = JointId(22);

/// Joint sent in every dispatched command, whatever its angle.
pub const ALWAYS_SENT: JointId = HEAD;

/// Left/right joint pairs swapped by the mirror transform, as `(left, right)`.
///
/// Head and waist sit on the centre line and aren't mirrored.
pub const MIRROR_PAIRS: [(JointId, JointId); 10] = [
    (L_SHLDR_P, R_SHLDR_P),
    (L_SHLDR_R, R_SHLDR_R),
    (L_ELBW_Y, R_ELBW_Y),
    (L_ELBW_P, R_ELBW_P),
    (L_THIGH_Y, R_THIGH_Y),
    (L_THIGH_R, R_THIGH_R),
    (L_THIGH_P, R_THIGH_P),
    (L_KNEE, R_KNEE),
    (L_FOOT_P, R_FOOT_P),
    (L_FOOT_R, R_FOOT_R),
];

// ------------------------------------------------------------------------------------------------
// IMPLS
// ------------------------------------------------------------------------------------------------

impl JointId {
    /// Iterate over every valid joint id in ascending order.
    pub fn all() -> impl Iterator<Item = JointId> {
        (1..=MAX_JOINT_ID).map(JointId)
    }

    /// Slot of this joint in a per-joint array.
    pub fn index(self) -> usize {
        self.0 as usize
    }
}
