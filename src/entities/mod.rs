mod color;
mod hero;
mod projectile;

// Re-export all public types
pub use color::{PALETTE, Rgb, palette_slot};
pub use hero::{Hero, HeroId, HeroParameter};
pub use projectile::Projectile;
