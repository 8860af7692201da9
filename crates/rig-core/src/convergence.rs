//! Convergence distance helpers: truncation and the preset cycle.

use crate::constants::{CONVERGENCE_PRESETS, LADDER_COMPARE_DIGITS};

/// Truncate `value` toward zero at `digits` decimal digits.
///
/// `truncate(1.239, 2) == 1.23`, `truncate(-1.239, 2) == -1.23`; the
/// result never moves away from zero.
#[inline]
pub fn truncate(value: f64, digits: i32) -> f64 {
    let stepper = 10f64.powi(digits);
    (value * stepper).trunc() / stepper
}

/// Next rung of the preset ladder for a camera currently at `current`.
///
/// The truncated value is checked against the rungs in ascending order;
/// the first rung it does not exceed selects the rung after it, wrapping
/// past the top back to the bottom. Values at or below the bottom rung
/// land on the second rung, so the reset always moves the camera. Values
/// beyond the top rung park on the top rung.
///
/// Total over all inputs, including non-positive ones.
pub fn next_preset(current: f64) -> f64 {
    let compare = truncate(current, LADDER_COMPARE_DIGITS);
    for (i, &rung) in CONVERGENCE_PRESETS.iter().enumerate() {
        if compare <= rung {
            let next = CONVERGENCE_PRESETS[(i + 1) % CONVERGENCE_PRESETS.len()];
            log::debug!("convergence preset {compare} -> {next}");
            return next;
        }
    }
    CONVERGENCE_PRESETS[CONVERGENCE_PRESETS.len() - 1]
}
