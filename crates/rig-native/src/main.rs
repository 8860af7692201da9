//! Terminal front-end: drives the shortcut commands against an in-memory
//! scene. One command name per line; `help` lists the names.

use std::io::{self, BufRead, Write};

use rig_core::{BackgroundImage, CameraSnapshot, DisplayAction, DisplayConfig, DisplayState};
use stereo_rig::{execute, CommandRegistry, ReportLevel, SceneHost};

/// Scene standing in for a real host: one camera, one window.
struct DemoScene {
    display: DisplayConfig,
    camera: CameraSnapshot,
}

impl DemoScene {
    fn new() -> Self {
        Self {
            display: DisplayConfig::default(),
            camera: CameraSnapshot {
                background_visible: true,
                background_images: vec![
                    BackgroundImage {
                        visible: true,
                        alpha: 1.0,
                    },
                    BackgroundImage {
                        visible: false,
                        alpha: 1.0,
                    },
                ],
                ..CameraSnapshot::default()
            },
        }
    }

    fn print_state(&self) {
        println!(
            "  interocular {:.6} m  convergence {:.6} m  display {:?}  backgrounds {}",
            self.camera.stereo.interocular_distance,
            self.camera.stereo.convergence_distance,
            DisplayState::from_config(&self.display),
            if self.camera.background_visible {
                "on"
            } else {
                "off"
            },
        );
    }
}

impl SceneHost for DemoScene {
    fn display(&self) -> DisplayConfig {
        self.display
    }

    fn apply_display(&mut self, actions: &[DisplayAction]) {
        for action in actions {
            match *action {
                DisplayAction::EnableStereoscopy => self.display.stereoscopy_enabled = true,
                DisplayAction::DisableStereoscopy => self.display.stereoscopy_enabled = false,
                DisplayAction::SetMode {
                    mode,
                    interlace_swap,
                } => {
                    self.display.mode = mode;
                    self.display.interlace_swap = interlace_swap;
                }
            }
        }
    }

    fn camera(&self) -> Option<CameraSnapshot> {
        Some(self.camera.clone())
    }

    fn set_camera(&mut self, camera: &CameraSnapshot) {
        self.camera = camera.clone();
    }

    fn report(&mut self, level: ReportLevel, message: &str) {
        match level {
            ReportLevel::Info => println!("  {message}"),
            ReportLevel::Error => eprintln!("  error: {message}"),
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let registry = CommandRegistry::new();
    let mut scene = DemoScene::new();

    println!("stereo-rig demo - enter a command name, `help`, `state`, or `quit`");
    scene.print_state();

    let stdin = io::stdin();
    loop {
        print!("> ");
        io::stdout().flush()?;
        let Some(line) = stdin.lock().lines().next() else {
            break;
        };
        let line = line?;
        let name = line.trim();
        match name {
            "" => continue,
            "quit" | "exit" => break,
            "state" => scene.print_state(),
            "help" => {
                let mut names: Vec<_> = registry.iter().map(|(name, _)| name).collect();
                names.sort_unstable();
                for name in names {
                    println!("  {name}");
                }
            }
            _ => match registry.get(name) {
                Some(command) => {
                    execute(command, &mut scene);
                    scene.print_state();
                }
                None => println!("  unknown command `{name}` (try `help`)"),
            },
        }
    }
    Ok(())
}
