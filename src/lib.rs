//! Tumbling dice: rigid cubes under exaggerated gravity, thrown with the
//! pointer and read off by whichever face ends up on top.

pub mod canvas;
pub mod config;
pub mod die;
pub mod error;
pub mod input;
pub mod math;
pub mod projection;
pub mod render;
pub mod simulation;
pub mod window;

pub use config::SceneConfig;
pub use die::{Bounds, Die};
pub use error::Error;
pub use simulation::{EventSource, FrameClock, Simulation, Surface};
