pub mod components;
pub mod config;
pub mod engine;
pub mod input;
pub mod map;
pub mod params;
pub mod render;
pub mod resources;
pub mod systems;

pub use components::*;
pub use config::*;
pub use engine::*;
pub use input::*;
pub use map::*;
pub use params::*;
pub use render::*;
pub use resources::*;
