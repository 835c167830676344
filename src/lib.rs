// Library exports for testing
pub use config::{Config, Params};
pub use entities::{Hero, HeroId, HeroParameter, PALETTE, Projectile, Rgb, palette_slot};
pub use simulation::Simulation;
pub use surface::{DrawCommand, DrawList, DrawSurface};

pub mod app;
pub mod config;
pub mod entities;
pub mod input;
pub mod renderer;
pub mod simulation;
pub mod surface;
