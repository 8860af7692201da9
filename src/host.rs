//! The seam between the shortcut layer and the owning host application.

use rig_core::{CameraSnapshot, DisplayAction, DisplayConfig};

/// Severity of a message surfaced through the host notification channel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReportLevel {
    Info,
    Error,
}

/// Read/write access to the host-owned scene and window state.
///
/// The host owns every object behind this trait. Commands perform
/// point-in-time reads and writes and keep nothing between invocations,
/// so implementations are free to re-resolve the active camera on every
/// call. Dispatch is serialized by the host; no locking is expected.
pub trait SceneHost {
    /// Current stereo display configuration of the window.
    fn display(&self) -> DisplayConfig;

    /// Apply display write-backs in order.
    fn apply_display(&mut self, actions: &[DisplayAction]);

    /// Snapshot of the active camera, or `None` when the scene has no
    /// active camera.
    fn camera(&self) -> Option<CameraSnapshot>;

    /// Write a (possibly edited) snapshot back to the active camera.
    fn set_camera(&mut self, camera: &CameraSnapshot);

    /// Surface a message through the host's notification mechanism.
    fn report(&mut self, level: ReportLevel, message: &str);
}
