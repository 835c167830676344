use super::color::Rgb;
use super::projectile::Projectile;

/// Which side of the field a hero is pinned to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HeroId {
    Left,
    Right,
}

impl HeroId {
    pub const ALL: [HeroId; 2] = [HeroId::Left, HeroId::Right];

    pub fn index(self) -> usize {
        match self {
            HeroId::Left => 0,
            HeroId::Right => 1,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(HeroId::Left),
            1 => Some(HeroId::Right),
            _ => None,
        }
    }

    pub fn opponent(self) -> Self {
        match self {
            HeroId::Left => HeroId::Right,
            HeroId::Right => HeroId::Left,
        }
    }

    /// Horizontal direction this hero shoots in
    pub fn facing(self) -> f32 {
        match self {
            HeroId::Left => 1.0,
            HeroId::Right => -1.0,
        }
    }

    pub fn get_name(self) -> &'static str {
        match self {
            HeroId::Left => "Red",
            HeroId::Right => "Blue",
        }
    }
}

/// Slider-controlled hero settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeroParameter {
    Speed,
    FireInterval,
}

#[derive(Debug, Clone)]
pub struct Hero {
    pub x: f32,
    pub y: f32,
    pub velocity_y: f32,
    pub fire_interval_ms: u64,
    pub color: Rgb,
    pub projectile_color: Rgb,
    pub projectiles: Vec<Projectile>,
    pub score: u32,
    /// Milliseconds since start of the last shot, `None` until the first one
    pub last_shot_ms: Option<u64>,
}

impl Hero {
    pub fn new(x: f32, y: f32, velocity_y: f32, fire_interval_ms: u64, color: Rgb) -> Self {
        Self {
            x,
            y,
            velocity_y,
            fire_interval_ms,
            color,
            projectile_color: Rgb::BLACK,
            projectiles: Vec::new(),
            score: 0,
            last_shot_ms: None,
        }
    }

    /// Moves one frame and reflects off the top and bottom walls.
    ///
    /// On contact the hero is put back on the wall line and sent back into the
    /// field, so `radius <= y <= max_y - radius` holds after every bounce.
    /// Returns whether a bounce happened.
    pub fn update(&mut self, radius: f32, max_y: f32) -> bool {
        self.y += self.velocity_y;

        if self.y <= radius {
            self.y = radius;
            self.velocity_y = self.velocity_y.abs();
            true
        } else if self.y >= max_y - radius {
            self.y = max_y - radius;
            self.velocity_y = -self.velocity_y.abs();
            true
        } else {
            false
        }
    }

    pub fn flip_direction(&mut self) {
        self.velocity_y = -self.velocity_y;
    }

    pub fn speed(&self) -> f32 {
        self.velocity_y.abs()
    }

    /// Sets the speed magnitude, keeping the direction. A resting hero resumes upward.
    pub fn set_speed(&mut self, speed: f32) {
        let direction = if self.velocity_y > 0.0 { 1.0 } else { -1.0 };
        self.velocity_y = speed * direction;
    }

    pub fn contains_point(&self, x: f32, y: f32, radius: f32) -> bool {
        self.distance_to(x, y) <= radius
    }

    pub fn distance_to(&self, x: f32, y: f32) -> f32 {
        (self.x - x).hypot(self.y - y)
    }

    pub fn can_fire(&self, now_ms: u64) -> bool {
        self.last_shot_ms
            .is_none_or(|last| now_ms.saturating_sub(last) > self.fire_interval_ms)
    }

    /// Launches a projectile from the hero's edge toward `facing` and restarts
    /// the fire interval.
    pub fn fire(&mut self, now_ms: u64, facing: f32, radius: f32, speed: f32) -> &Projectile {
        self.last_shot_ms = Some(now_ms);
        self.projectiles.push(Projectile::new(
            self.x + radius * facing,
            self.y,
            speed * facing,
            0.0,
            self.projectile_color,
        ));
        &self.projectiles[self.projectiles.len() - 1]
    }

    /// Advances every projectile and drops the ones that left the field
    pub fn update_projectiles(&mut self, max_x: f32, max_y: f32) {
        for projectile in &mut self.projectiles {
            projectile.update();
        }
        self.projectiles
            .retain(|p| !p.is_out_of_bounds(max_x, max_y));
    }
}
