// The 3D display toggle cycle and its derivation from host state.

use rig_core::{DisplayAction, DisplayConfig, DisplayMode, DisplayState};

fn config(enabled: bool, mode: DisplayMode, swap: bool) -> DisplayConfig {
    DisplayConfig {
        stereoscopy_enabled: enabled,
        mode,
        interlace_swap: swap,
    }
}

#[test]
fn cycle_is_closed_with_length_four() {
    let mut state = DisplayState::Flat;
    let mut seen = vec![state];
    for _ in 0..4 {
        state = state.advance().next;
        seen.push(state);
    }
    assert_eq!(
        seen,
        vec![
            DisplayState::Flat,
            DisplayState::Anaglyph,
            DisplayState::Interlaced,
            DisplayState::InterlacedSwapped,
            DisplayState::Flat,
        ]
    );
}

#[test]
fn state_is_derived_from_host_config() {
    // Disabled wins regardless of the mode left behind.
    assert_eq!(
        DisplayState::from_config(&config(false, DisplayMode::Interlace, true)),
        DisplayState::Flat
    );
    assert_eq!(
        DisplayState::from_config(&config(true, DisplayMode::Anaglyph, false)),
        DisplayState::Anaglyph
    );
    assert_eq!(
        DisplayState::from_config(&config(true, DisplayMode::Interlace, false)),
        DisplayState::Interlaced
    );
    assert_eq!(
        DisplayState::from_config(&config(true, DisplayMode::Interlace, true)),
        DisplayState::InterlacedSwapped
    );
    assert_eq!(
        DisplayState::from_config(&config(true, DisplayMode::SideBySide, false)),
        DisplayState::Unmanaged
    );
}

#[test]
fn turning_on_enables_before_setting_the_mode() {
    let transition = DisplayState::Flat.advance();
    assert_eq!(transition.next, DisplayState::Anaglyph);
    assert_eq!(transition.actions[0], DisplayAction::EnableStereoscopy);
    assert!(matches!(
        transition.actions[1],
        DisplayAction::SetMode {
            mode: DisplayMode::Anaglyph,
            ..
        }
    ));
}

#[test]
fn unmanaged_modes_fall_back_to_flat() {
    for mode in [
        DisplayMode::TimeSequential,
        DisplayMode::SideBySide,
        DisplayMode::TopBottom,
    ] {
        for swap in [false, true] {
            let state = DisplayState::from_config(&config(true, mode, swap));
            let transition = state.advance();
            assert_eq!(transition.next, DisplayState::Flat, "{mode:?} kept stereo on");
            assert_eq!(
                transition.actions.as_slice(),
                &[DisplayAction::DisableStereoscopy]
            );
        }
    }
}

#[test]
fn labels_match_the_reported_modes() {
    assert_eq!(DisplayState::Flat.label(), "2D Mode");
    assert_eq!(DisplayState::Anaglyph.label(), "3D Mode: Anaglyph");
    assert_eq!(DisplayState::Interlaced.label(), "3D Mode: Interlaced");
    assert_eq!(
        DisplayState::InterlacedSwapped.label(),
        "3D Mode: Interlaced (Swapped L-R)"
    );
}
