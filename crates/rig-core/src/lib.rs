pub mod constants;
pub mod convergence;
pub mod display;
pub mod stereo;

pub use constants::*;
pub use convergence::*;
pub use display::*;
pub use stereo::*;
