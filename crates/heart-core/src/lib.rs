pub mod constants;
pub mod curve;
pub mod driver;
pub mod field;
pub mod mounted;
pub mod params;
pub mod resources;
pub mod schedule;
pub mod signal;
pub mod sprite;
pub mod state;
pub mod viewport;

pub use constants::*;
pub use curve::*;
pub use driver::*;
pub use field::*;
pub use mounted::*;
pub use params::*;
pub use resources::*;
pub use schedule::*;
pub use signal::*;
pub use sprite::*;
pub use state::*;
pub use viewport::*;

pub static PARTICLES_WGSL: &str = include_str!("../shaders/particles.wgsl");
