use color_eyre::Result;
use ratatui::{Terminal, backend::Backend, layout::Rect};
use std::time::Instant;
use tracing::info;

use crate::config::Config;
use crate::input::{InputAction, InputManager};
use crate::renderer::{GameRenderer, RenderView, ScreenLayout};
use crate::simulation::Simulation;
use crate::surface::DrawList;

/// The main application which owns the duel and drives its three callbacks:
/// the frame update, the fire poll and rendering.
pub struct App {
    running: bool,
    simulation: Simulation,
    draw_list: DrawList,
    /// Timers
    start_time: Instant,
    last_fire_poll: Option<Instant>,
    /// internal components
    input_manager: InputManager,
    renderer: GameRenderer,
}

impl App {
    /// Construct a new instance of [`App`].
    pub fn new(config: Config) -> Self {
        let input_manager = InputManager::new(config.field_width, config.field_height);

        Self {
            running: true,
            simulation: Simulation::new(config),
            draw_list: DrawList::new(),
            start_time: Instant::now(),
            last_fire_poll: None,
            input_manager,
            renderer: GameRenderer::new(),
        }
    }

    pub fn simulation(&self) -> &Simulation {
        &self.simulation
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Run the application's main loop.
    pub fn run<B: Backend>(mut self, terminal: &mut Terminal<B>) -> Result<()> {
        info!("duel started");

        while self.running {
            let size = terminal.size()?;
            let config = self.simulation.config();
            let layout = ScreenLayout::new(
                Rect::new(0, 0, size.width, size.height),
                config.field_width,
                config.field_height,
            );
            self.input_manager.set_field_area(layout.field);

            // Render the frame
            self.simulation.render(&mut self.draw_list);
            terminal.draw(|frame| {
                let view = RenderView {
                    simulation: &self.simulation,
                    draw_list: &self.draw_list,
                    layout,
                };
                self.renderer.render(frame, &view);
            })?;

            // Poll input events and apply them
            self.input_manager
                .poll_events(self.simulation.is_picker_open())?;
            let actions = self.input_manager.get_actions().to_vec();
            self.process_actions(&actions);

            self.simulation.update();
            self.poll_fire(Instant::now());

            std::thread::sleep(self.simulation.config().frame_interval);
        }

        let [left, right] = self.simulation.heroes();
        info!(score_1 = left.score, score_2 = right.score, "duel finished");
        Ok(())
    }

    /// Fire timer: runs the fire poll once per `fire_poll_interval`
    pub fn poll_fire(&mut self, now: Instant) {
        let interval = self.simulation.config().fire_poll_interval;
        let due = self
            .last_fire_poll
            .is_none_or(|last| now.duration_since(last) >= interval);

        if due {
            self.last_fire_poll = Some(now);
            let now_ms = now.duration_since(self.start_time).as_millis() as u64;
            self.simulation.fire(now_ms);
        }
    }

    /// Process input actions and update the duel accordingly
    pub fn process_actions(&mut self, actions: &[InputAction]) {
        for action in actions {
            match *action {
                InputAction::Quit => {
                    self.running = false;
                }
                InputAction::PointerMove { x, y } => {
                    self.simulation.pointer_move(x, y);
                }
                InputAction::Click { x, y } => {
                    self.simulation.click(x, y);
                }
                InputAction::AdjustHero {
                    hero,
                    parameter,
                    steps,
                } => {
                    self.simulation.adjust_hero_parameter(hero, parameter, steps);
                }
                InputAction::PickColor(color) => {
                    self.simulation.set_projectile_color(color);
                }
                InputAction::ClosePicker => {
                    self.simulation.close_picker();
                }
            }
        }
    }
}
