use super::color::Rgb;

#[derive(Debug, Clone, PartialEq)]
pub struct Projectile {
    pub x: f32,
    pub y: f32,
    pub velocity_x: f32,
    pub velocity_y: f32,
    pub color: Rgb,
}

impl Projectile {
    pub fn new(x: f32, y: f32, velocity_x: f32, velocity_y: f32, color: Rgb) -> Self {
        Self {
            x,
            y,
            velocity_x,
            velocity_y,
            color,
        }
    }

    pub fn update(&mut self) {
        self.x += self.velocity_x;
        self.y += self.velocity_y;
    }

    /// Bounds are inclusive, a projectile sitting on the edge is still in play
    pub fn is_out_of_bounds(&self, max_x: f32, max_y: f32) -> bool {
        self.x < 0.0 || self.x > max_x || self.y < 0.0 || self.y > max_y
    }

    pub fn distance_to(&self, x: f32, y: f32) -> f32 {
        (self.x - x).hypot(self.y - y)
    }
}
