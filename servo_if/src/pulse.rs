//! Angle to pulse conversion for the bus servos

/// Pulse value of a servo at its centre (zero degree) position.
pub const CENTER_PULSE: i32 = 7500;

/// Number of pulse steps per degree of servo travel.
pub const STEPS_PER_DEG: f64 = 29.63;

/// Convert a joint angle into the pulse value demanded from the servo.
///
/// The fractional part of the result is truncated toward zero.
pub fn deg_to_pulse(deg: f64) -> i32 {
    (CENTER_PULSE as f64 + deg * STEPS_PER_DEG) as i32
}
