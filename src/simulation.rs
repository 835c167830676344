use tracing::{debug, info};

use crate::config::Config;
use crate::entities::{Hero, HeroId, HeroParameter, Rgb};
use crate::surface::DrawSurface;

const SCORE_FONT_SIZE: f32 = 24.0;
const SCORE_LEFT_X: f32 = 10.0;
const SCORE_RIGHT_INSET: f32 = 120.0;
const SCORE_Y: f32 = 30.0;

/// The whole duel: both heroes, their projectiles and the color picker selection.
///
/// Every callback (frame update, fire poll, input, render) takes this by
/// exclusive reference in turn, so there is no shared state to lock.
#[derive(Debug, Clone)]
pub struct Simulation {
    config: Config,
    heroes: [Hero; 2],
    /// Hero the color picker is bound to, the picker is open while this is set
    selection: Option<HeroId>,
    frame_count: u64,
}

impl Simulation {
    /// Construct the duel in its starting layout.
    pub fn new(config: Config) -> Self {
        let left = Hero::new(
            config.hero_x(HeroId::Left),
            config.hero_start_y,
            config.hero_start_speed,
            config.fire_interval_start_ms,
            Rgb::RED,
        );
        let right = Hero::new(
            config.hero_x(HeroId::Right),
            config.hero_start_y,
            -config.hero_start_speed,
            config.fire_interval_start_ms,
            Rgb::BLUE,
        );

        Self::with_heroes(config, [left, right])
    }

    pub fn with_heroes(config: Config, heroes: [Hero; 2]) -> Self {
        Self {
            config,
            heroes,
            selection: None,
            frame_count: 0,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn hero(&self, id: HeroId) -> &Hero {
        &self.heroes[id.index()]
    }

    pub fn hero_mut(&mut self, id: HeroId) -> &mut Hero {
        &mut self.heroes[id.index()]
    }

    pub fn heroes(&self) -> &[Hero; 2] {
        &self.heroes
    }

    pub fn selection(&self) -> Option<HeroId> {
        self.selection
    }

    pub fn is_picker_open(&self) -> bool {
        self.selection.is_some()
    }

    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Advance one display frame: move heroes, move projectiles, resolve hits.
    pub fn update(&mut self) {
        self.frame_count += 1;

        let Config {
            field_width,
            field_height,
            hero_radius,
            ..
        } = self.config;

        for hero in &mut self.heroes {
            hero.update(hero_radius, field_height);
            hero.update_projectiles(field_width, field_height);
        }

        self.check_collisions();
    }

    /// Removes every projectile touching the opposing hero and scores it.
    ///
    /// Hits are decided against the full list before anything is removed, so
    /// several projectiles landing in one frame each count once.
    fn check_collisions(&mut self) {
        let hit_distance = self.config.hit_distance();
        let [left, right] = &mut self.heroes;

        resolve_hits(left, right, HeroId::Right, hit_distance);
        resolve_hits(right, left, HeroId::Left, hit_distance);
    }

    /// Fire poll: every hero whose interval has elapsed launches one projectile.
    pub fn fire(&mut self, now_ms: u64) {
        let radius = self.config.hero_radius;
        let speed = self.config.projectile_speed;

        for id in HeroId::ALL {
            let hero = &mut self.heroes[id.index()];
            if hero.can_fire(now_ms) {
                let projectile = hero.fire(now_ms, id.facing(), radius, speed);
                debug!(
                    hero = id.get_name(),
                    x = projectile.x,
                    y = projectile.y,
                    now_ms,
                    "fired projectile"
                );
            }
        }
    }

    /// Heroes within the interaction radius of the pointer reverse direction.
    pub fn pointer_move(&mut self, x: f32, y: f32) {
        let interact_radius = self.config.interact_radius;

        for id in HeroId::ALL {
            let hero = &mut self.heroes[id.index()];
            if hero.distance_to(x, y) < interact_radius {
                hero.flip_direction();
                debug!(hero = id.get_name(), velocity_y = hero.velocity_y, "pointer flip");
            }
        }
    }

    /// Opens the color picker for the first hero under the pointer.
    pub fn click(&mut self, x: f32, y: f32) -> Option<HeroId> {
        let radius = self.config.hero_radius;
        let hit = HeroId::ALL
            .into_iter()
            .find(|id| self.heroes[id.index()].contains_point(x, y, radius));

        if let Some(id) = hit {
            self.selection = Some(id);
            info!(hero = id.get_name(), "color picker opened");
        }
        hit
    }

    /// Slider input: sets a hero's speed or fire interval, clamped to the slider range.
    pub fn set_hero_parameter(&mut self, id: HeroId, parameter: HeroParameter, value: f32) {
        match parameter {
            HeroParameter::Speed => {
                let speed = self.config.clamp_speed(value);
                self.heroes[id.index()].set_speed(speed);
                info!(hero = id.get_name(), speed, "speed changed");
            }
            HeroParameter::FireInterval => {
                let interval_ms = self.config.clamp_fire_interval(value.max(0.0).round() as u64);
                self.heroes[id.index()].fire_interval_ms = interval_ms;
                info!(hero = id.get_name(), interval_ms, "fire interval changed");
            }
        }
    }

    /// Current slider value of a hero parameter
    pub fn hero_parameter(&self, id: HeroId, parameter: HeroParameter) -> f32 {
        let hero = &self.heroes[id.index()];
        match parameter {
            HeroParameter::Speed => hero.speed(),
            HeroParameter::FireInterval => hero.fire_interval_ms as f32,
        }
    }

    /// Nudges a slider by `steps` of its step size.
    pub fn adjust_hero_parameter(&mut self, id: HeroId, parameter: HeroParameter, steps: i32) {
        let step = match parameter {
            HeroParameter::Speed => self.config.speed_step,
            HeroParameter::FireInterval => self.config.fire_interval_step_ms as f32,
        };
        let value = self.hero_parameter(id, parameter) + step * steps as f32;
        self.set_hero_parameter(id, parameter, value);
    }

    /// Color picker commit: recolors the selected hero's future projectiles and
    /// closes the picker.
    pub fn set_projectile_color(&mut self, color: Rgb) {
        if let Some(id) = self.selection.take() {
            self.heroes[id.index()].projectile_color = color;
            info!(hero = id.get_name(), color = %color.to_hex(), "projectile color changed");
        }
    }

    pub fn close_picker(&mut self) {
        self.selection = None;
    }

    /// Draws the field: heroes, their projectiles, then both score labels.
    pub fn render<S: DrawSurface>(&self, surface: &mut S) {
        let Config {
            field_width,
            field_height,
            hero_radius,
            projectile_radius,
            ..
        } = self.config;

        surface.clear(field_width, field_height);

        for hero in &self.heroes {
            surface.fill_circle(hero.x, hero.y, hero_radius, hero.color);
            for projectile in &hero.projectiles {
                surface.fill_circle(projectile.x, projectile.y, projectile_radius, projectile.color);
            }
        }

        let [left, right] = &self.heroes;
        surface.fill_text(
            &format!("Score 1: {}", left.score),
            SCORE_LEFT_X,
            SCORE_Y,
            SCORE_FONT_SIZE,
            Rgb::BLACK,
        );
        surface.fill_text(
            &format!("Score 2: {}", right.score),
            field_width - SCORE_RIGHT_INSET,
            SCORE_Y,
            SCORE_FONT_SIZE,
            Rgb::BLACK,
        );
    }
}

fn resolve_hits(shooter: &mut Hero, target: &mut Hero, target_id: HeroId, hit_distance: f32) {
    let before = shooter.projectiles.len();
    shooter
        .projectiles
        .retain(|p| p.distance_to(target.x, target.y) >= hit_distance);
    let hits = (before - shooter.projectiles.len()) as u32;

    if hits > 0 {
        target.score += hits;
        info!(
            target = target_id.get_name(),
            hits,
            score = target.score,
            "projectile hit"
        );
    }
}

impl Default for Simulation {
    fn default() -> Self {
        Self::new(Config::default())
    }
}
