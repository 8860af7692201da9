//! The nine shortcut commands and their execution against a host.
//!
//! Every command is a leaf: it runs to completion inside one invocation,
//! reports through the host, and never propagates an error to a caller.

use thiserror::Error;

use rig_core::{
    next_preset, toggled_alpha, truncate, CameraSnapshot, DisplayState, CONVERGENCE_STEP,
    INTEROCULAR_RESET, INTEROCULAR_STEP, LADDER_COMPARE_DIGITS,
};

use crate::host::{ReportLevel, SceneHost};

/// Named, parameterless commands a host binds to input gestures.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Command {
    InterocularAdd,
    InterocularSubtract,
    InterocularReset,
    ConvergenceAdd,
    ConvergenceSubtract,
    ConvergenceReset,
    ToggleBackgroundImages,
    ToggleAlpha,
    Toggle3dMode,
}

impl Command {
    /// Every command, in registration order.
    pub const ALL: [Command; 9] = [
        Command::InterocularAdd,
        Command::InterocularSubtract,
        Command::InterocularReset,
        Command::ConvergenceAdd,
        Command::ConvergenceSubtract,
        Command::ConvergenceReset,
        Command::ToggleBackgroundImages,
        Command::ToggleAlpha,
        Command::Toggle3dMode,
    ];

    /// Stable identifier used when registering input bindings.
    pub fn name(self) -> &'static str {
        match self {
            Self::InterocularAdd => "interocular_distance_add",
            Self::InterocularSubtract => "interocular_distance_subtract",
            Self::InterocularReset => "interocular_distance_reset",
            Self::ConvergenceAdd => "convergence_distance_add",
            Self::ConvergenceSubtract => "convergence_distance_subtract",
            Self::ConvergenceReset => "convergence_distance_reset",
            Self::ToggleBackgroundImages => "toggle_background_images",
            Self::ToggleAlpha => "toggle_alpha",
            Self::Toggle3dMode => "toggle_3d_mode",
        }
    }
}

/// Result of one command invocation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Ran to completion; host state was updated.
    Finished,
    /// A precondition failed; host state was left untouched.
    Cancelled,
}

/// Why a command refused to run. Reported to the host, never propagated.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("Stereoscopy not enabled")]
    StereoscopyDisabled,
    #[error("No active camera")]
    NoActiveCamera,
}

/// Execute `command` against `host`.
///
/// Success messages and failure explanations both go through the host
/// notification channel; the return value only tells the input-binding
/// layer whether anything happened.
pub fn execute(command: Command, host: &mut dyn SceneHost) -> Outcome {
    log::debug!("command {}", command.name());
    match run(command, host) {
        Ok(Some(message)) => {
            host.report(ReportLevel::Info, &message);
            Outcome::Finished
        }
        Ok(None) => Outcome::Finished,
        Err(err) => {
            host.report(ReportLevel::Error, &err.to_string());
            Outcome::Cancelled
        }
    }
}

fn run(command: Command, host: &mut dyn SceneHost) -> Result<Option<String>, CommandError> {
    match command {
        Command::InterocularAdd => step_interocular(host, INTEROCULAR_STEP),
        Command::InterocularSubtract => step_interocular(host, -INTEROCULAR_STEP),
        Command::InterocularReset => reset_interocular(host),
        Command::ConvergenceAdd => step_convergence(host, CONVERGENCE_STEP),
        Command::ConvergenceSubtract => step_convergence(host, -CONVERGENCE_STEP),
        Command::ConvergenceReset => reset_convergence(host),
        Command::ToggleBackgroundImages => toggle_background_images(host),
        Command::ToggleAlpha => toggle_alpha(host),
        Command::Toggle3dMode => toggle_3d_mode(host),
    }
}

/// The stereo-parameter commands refuse to run in a 2D viewport; the
/// stereoscopy check comes before the camera lookup.
fn stereo_camera(host: &dyn SceneHost) -> Result<CameraSnapshot, CommandError> {
    if !host.display().stereoscopy_enabled {
        return Err(CommandError::StereoscopyDisabled);
    }
    host.camera().ok_or(CommandError::NoActiveCamera)
}

fn step_interocular(host: &mut dyn SceneHost, delta: f64) -> Result<Option<String>, CommandError> {
    let mut camera = stereo_camera(host)?;
    camera.stereo.interocular_distance += delta;
    host.set_camera(&camera);
    Ok(None)
}

fn reset_interocular(host: &mut dyn SceneHost) -> Result<Option<String>, CommandError> {
    let mut camera = stereo_camera(host)?;
    camera.stereo.interocular_distance = INTEROCULAR_RESET;
    host.set_camera(&camera);
    Ok(None)
}

fn step_convergence(host: &mut dyn SceneHost, delta: f64) -> Result<Option<String>, CommandError> {
    let mut camera = stereo_camera(host)?;
    camera.stereo.convergence_distance += delta;
    host.set_camera(&camera);
    Ok(Some(convergence_message(
        camera.stereo.convergence_distance,
    )))
}

fn reset_convergence(host: &mut dyn SceneHost) -> Result<Option<String>, CommandError> {
    let mut camera = stereo_camera(host)?;
    camera.stereo.convergence_distance = next_preset(camera.stereo.convergence_distance);
    host.set_camera(&camera);
    Ok(Some(convergence_message(
        camera.stereo.convergence_distance,
    )))
}

fn convergence_message(distance: f64) -> String {
    format!(
        "Convergence distance: {}",
        truncate(distance, LADDER_COMPARE_DIGITS)
    )
}

fn toggle_background_images(host: &mut dyn SceneHost) -> Result<Option<String>, CommandError> {
    let mut camera = host.camera().ok_or(CommandError::NoActiveCamera)?;
    camera.background_visible = !camera.background_visible;
    host.set_camera(&camera);
    Ok(Some(
        if camera.background_visible {
            "Background images on"
        } else {
            "Background images off"
        }
        .to_string(),
    ))
}

fn toggle_alpha(host: &mut dyn SceneHost) -> Result<Option<String>, CommandError> {
    let mut camera = host.camera().ok_or(CommandError::NoActiveCamera)?;
    for image in camera.background_images.iter_mut().filter(|i| i.visible) {
        image.alpha = toggled_alpha(image.alpha);
    }
    host.set_camera(&camera);
    Ok(None)
}

fn toggle_3d_mode(host: &mut dyn SceneHost) -> Result<Option<String>, CommandError> {
    let transition = DisplayState::from_config(&host.display()).advance();
    host.apply_display(&transition.actions);
    Ok(Some(transition.next.label().to_string()))
}
