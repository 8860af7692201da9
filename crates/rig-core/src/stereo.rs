//! Host-owned camera and window state, mirrored as plain snapshot types.
//!
//! Nothing here touches a host API. Commands read these snapshots through
//! the adapter, compute replacements, and hand them back for write-through.

use crate::constants::{ALPHA_DIMMED, ALPHA_OPAQUE, INTEROCULAR_RESET};

/// Stereo parameters of a camera, in meters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StereoParams {
    /// Separation between the left and right views.
    pub interocular_distance: f64,
    /// Distance of the zero-parallax plane.
    pub convergence_distance: f64,
}

impl Default for StereoParams {
    fn default() -> Self {
        Self {
            interocular_distance: INTEROCULAR_RESET,
            convergence_distance: 1.95,
        }
    }
}

/// Stereo display modes a host window can report.
///
/// The toggle cycle only ever writes `Anaglyph` and `Interlace`; the
/// remaining modes can still be observed when something else configured
/// the window.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DisplayMode {
    Anaglyph,
    Interlace,
    TimeSequential,
    SideBySide,
    TopBottom,
}

/// Stereo display configuration of the host window.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DisplayConfig {
    /// Whether stereo (multi-view) rendering is enabled at all.
    pub stereoscopy_enabled: bool,
    /// Mode shown while stereoscopy is enabled; meaningless otherwise.
    pub mode: DisplayMode,
    /// Left/right swap; only meaningful in `Interlace` mode.
    pub interlace_swap: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            stereoscopy_enabled: false,
            mode: DisplayMode::Anaglyph,
            interlace_swap: false,
        }
    }
}

/// One background image slot of a camera.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BackgroundImage {
    pub visible: bool,
    pub alpha: f64,
}

/// Flip a background alpha between the opaque and dimmed levels.
///
/// Anything that is not exactly opaque counts as dimmed and snaps back to
/// opaque, so repeated toggling always lands on one of the two levels.
#[inline]
pub fn toggled_alpha(alpha: f64) -> f64 {
    if alpha == ALPHA_OPAQUE {
        ALPHA_DIMMED
    } else {
        ALPHA_OPAQUE
    }
}

/// Point-in-time copy of everything the shortcuts read from the active
/// camera. The host keeps ownership of the real object; a snapshot is
/// read, edited, and written back within a single command.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CameraSnapshot {
    pub stereo: StereoParams,
    /// The camera's show-background-images flag.
    pub background_visible: bool,
    pub background_images: Vec<BackgroundImage>,
}
