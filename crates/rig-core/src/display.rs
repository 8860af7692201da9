//! The 3D display toggle, a four-step cycle over the host's window
//! configuration.
//!
//! The cycle owns no state. Each invocation re-derives its position from
//! the configuration the host reports, so changes made behind its back
//! (or modes it does not manage) cannot leave it out of sync.

use smallvec::{smallvec, SmallVec};

use crate::stereo::{DisplayConfig, DisplayMode};

/// Position in the display toggle cycle, derived from host state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DisplayState {
    /// Stereoscopy disabled; ordinary 2D viewport.
    Flat,
    Anaglyph,
    Interlaced,
    InterlacedSwapped,
    /// Stereoscopy enabled but showing a mode the cycle does not manage.
    Unmanaged,
}

/// Write-back actions a transition asks the host to apply, in order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DisplayAction {
    EnableStereoscopy,
    DisableStereoscopy,
    SetMode {
        mode: DisplayMode,
        interlace_swap: bool,
    },
}

/// One step of the cycle: where it lands and how the host gets there.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DisplayTransition {
    pub next: DisplayState,
    pub actions: SmallVec<[DisplayAction; 2]>,
}

impl DisplayState {
    /// Derive the cycle position from the host's current configuration.
    pub fn from_config(config: &DisplayConfig) -> Self {
        if !config.stereoscopy_enabled {
            return Self::Flat;
        }
        match config.mode {
            DisplayMode::Anaglyph => Self::Anaglyph,
            DisplayMode::Interlace if config.interlace_swap => Self::InterlacedSwapped,
            DisplayMode::Interlace => Self::Interlaced,
            _ => Self::Unmanaged,
        }
    }

    /// Advance one step: every state, including [`Unmanaged`], has exactly
    /// one outgoing transition, and the managed states form a closed cycle
    /// of length four.
    ///
    /// [`Unmanaged`]: DisplayState::Unmanaged
    pub fn advance(self) -> DisplayTransition {
        let transition = match self {
            Self::Flat => DisplayTransition {
                next: Self::Anaglyph,
                actions: smallvec![
                    DisplayAction::EnableStereoscopy,
                    DisplayAction::SetMode {
                        mode: DisplayMode::Anaglyph,
                        interlace_swap: false,
                    },
                ],
            },
            Self::Anaglyph => DisplayTransition {
                next: Self::Interlaced,
                actions: smallvec![DisplayAction::SetMode {
                    mode: DisplayMode::Interlace,
                    interlace_swap: false,
                }],
            },
            Self::Interlaced => DisplayTransition {
                next: Self::InterlacedSwapped,
                actions: smallvec![DisplayAction::SetMode {
                    mode: DisplayMode::Interlace,
                    interlace_swap: true,
                }],
            },
            Self::InterlacedSwapped | Self::Unmanaged => DisplayTransition {
                next: Self::Flat,
                actions: smallvec![DisplayAction::DisableStereoscopy],
            },
        };
        log::debug!("display cycle {:?} -> {:?}", self, transition.next);
        transition
    }

    /// Label reported to the user after landing on this state.
    pub fn label(self) -> &'static str {
        match self {
            Self::Flat => "2D Mode",
            Self::Anaglyph => "3D Mode: Anaglyph",
            Self::Interlaced => "3D Mode: Interlaced",
            Self::InterlacedSwapped => "3D Mode: Interlaced (Swapped L-R)",
            Self::Unmanaged => "3D Mode: Unmanaged",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn managed_states_form_a_cycle() {
        let mut state = DisplayState::Flat;
        for _ in 0..4 {
            state = state.advance().next;
        }
        assert_eq!(state, DisplayState::Flat);
    }

    #[test]
    fn unmanaged_state_disables_stereoscopy() {
        let transition = DisplayState::Unmanaged.advance();
        assert_eq!(transition.next, DisplayState::Flat);
        assert_eq!(
            transition.actions.as_slice(),
            &[DisplayAction::DisableStereoscopy]
        );
    }
}
