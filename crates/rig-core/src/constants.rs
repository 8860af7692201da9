// Tuning constants shared by the command layer and front-ends.

// Distance steps
/// Per-press change to the interocular distance, in meters.
pub const INTEROCULAR_STEP: f64 = 0.003125;
/// Per-press change to the convergence distance, in meters.
pub const CONVERGENCE_STEP: f64 = 0.007_656_25;

/// Interocular distance restored by the reset command, in meters.
pub const INTEROCULAR_RESET: f64 = 0.065;

/// Ascending ladder of convergence presets the reset command cycles
/// through, in meters. Close-up rungs are packed tighter than far ones.
pub const CONVERGENCE_PRESETS: [f64; 12] = [
    0.10, 0.125, 0.15, 0.175, 0.20, 0.25, 0.30, 0.35, 0.40, 0.80, 1.60, 1.95,
];

/// Decimal digits kept when comparing a convergence value against the ladder.
pub const LADDER_COMPARE_DIGITS: i32 = 2;

// Background image alpha levels toggled by the alpha shortcut
pub const ALPHA_OPAQUE: f64 = 1.0;
pub const ALPHA_DIMMED: f64 = 0.6;
