//! Host-facing shortcut layer for stereoscopic camera control.
//!
//! The pure cycling logic (convergence presets, display toggle) lives in
//! `rig-core`. This crate binds it to a host application through the
//! [`SceneHost`] trait, packages it as named commands, and surfaces
//! outcomes through the host's notification channel.

pub mod commands;
pub mod host;
pub mod registry;

pub use commands::{execute, Command, CommandError, Outcome};
pub use host::{ReportLevel, SceneHost};
pub use registry::CommandRegistry;
