// Ladder and truncation behavior of the convergence preset cycle.

use rand::prelude::*;
use rig_core::{next_preset, truncate, CONVERGENCE_PRESETS};

#[test]
fn truncate_keeps_digits_toward_zero() {
    assert_eq!(truncate(1.239, 2), 1.23);
    assert_eq!(truncate(-1.239, 2), -1.23);
    assert_eq!(truncate(0.065, 2), 0.06);
    assert_eq!(truncate(1.0, 2), 1.0);
    assert_eq!(truncate(1.999, 0), 1.0);
    assert_eq!(truncate(-0.009, 2), 0.0);
}

#[test]
fn truncate_never_rounds_away_from_zero() {
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..10_000 {
        let value: f64 = rng.gen_range(-100.0..100.0);
        for digits in 0..=4 {
            let truncated = truncate(value, digits);
            assert!(
                truncated.abs() <= value.abs(),
                "truncate({value}, {digits}) moved away from zero: {truncated}"
            );
            assert!(
                (value - truncated).abs() < 10f64.powi(-digits),
                "truncate({value}, {digits}) dropped more than one unit: {truncated}"
            );
        }
    }
}

#[test]
fn ladder_is_ascending() {
    for pair in CONVERGENCE_PRESETS.windows(2) {
        assert!(pair[0] < pair[1], "ladder out of order at {pair:?}");
    }
}

#[test]
fn every_rung_advances_to_its_successor() {
    for (i, &rung) in CONVERGENCE_PRESETS.iter().enumerate() {
        let expected = CONVERGENCE_PRESETS[(i + 1) % CONVERGENCE_PRESETS.len()];
        assert_eq!(next_preset(rung), expected, "rung {rung} did not advance");
    }
}

#[test]
fn full_cycle_returns_to_the_bottom() {
    let mut value = 0.10;
    for _ in 0..CONVERGENCE_PRESETS.len() {
        value = next_preset(value);
    }
    assert_eq!(value, 0.10);
}

#[test]
fn reset_always_moves_at_least_one_step() {
    // Values at or below the bottom rung land on the second rung, never
    // the bottom itself.
    assert_eq!(next_preset(0.10), 0.125);
    assert_eq!(next_preset(0.065), 0.125);
    assert_eq!(next_preset(0.0), 0.125);
    assert_eq!(next_preset(-3.0), 0.125);
}

#[test]
fn off_ladder_values_follow_the_threshold_walk() {
    // Between rungs: the first rung not exceeded selects its successor.
    assert_eq!(next_preset(0.13), 0.175);
    assert_eq!(next_preset(0.5), 1.60);
    assert_eq!(next_preset(1.7), 0.10);
    // Beyond the top rung: park on the top rung.
    assert_eq!(next_preset(2.5), 1.95);
    assert_eq!(next_preset(1000.0), 1.95);
}
