use crate::entities::{HeroId, HeroParameter, PALETTE, Rgb};
use crate::simulation::Simulation;
use crate::surface::{DrawCommand, DrawList};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Margin, Rect},
    style::{Color, Modifier, Style, Stylize},
    symbols::Marker,
    text::{Line, Span},
    widgets::{
        Block, Borders, Clear, LineGauge, Paragraph,
        canvas::{Canvas, Painter, Shape},
    },
};

/// Terminal cells are roughly twice as tall as they are wide
const CELL_ASPECT: f32 = 2.0;
const CONTROLS_HEIGHT: u16 = 4;
const PICKER_WIDTH: u16 = 32;
const PICKER_HEIGHT: u16 = 14;

impl From<Rgb> for Color {
    fn from(rgb: Rgb) -> Self {
        Color::Rgb(rgb.r, rgb.g, rgb.b)
    }
}

/// Where each part of the screen goes for a given terminal size
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLayout {
    /// Field including its border
    pub field_block: Rect,
    /// Cells the field is drawn into, pointer input maps through this
    pub field: Rect,
    pub controls: Rect,
    pub hints: Rect,
}

impl ScreenLayout {
    pub fn new(area: Rect, field_width: f32, field_height: f32) -> Self {
        let [top, controls, hints] = Layout::vertical([
            Constraint::Min(0),
            Constraint::Length(CONTROLS_HEIGHT),
            Constraint::Length(1),
        ])
        .areas(area);

        let field_block = fit_aspect(top, field_width, field_height);
        Self {
            field_block,
            field: field_block.inner(Margin::new(1, 1)),
            controls,
            hints,
        }
    }
}

/// Largest centered rect inside `area` that shows the field undistorted
pub fn fit_aspect(area: Rect, field_width: f32, field_height: f32) -> Rect {
    let full_height_width =
        (f32::from(area.height) * CELL_ASPECT * field_width / field_height) as u16;

    let (width, height) = if full_height_width <= area.width {
        (full_height_width, area.height)
    } else {
        let height = (f32::from(area.width) * field_height / (field_width * CELL_ASPECT)) as u16;
        (area.width, height)
    };

    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// A solid disc, sampled every `step` field units
struct FilledCircle {
    x: f64,
    y: f64,
    radius: f64,
    step: f64,
    color: Color,
}

impl Shape for FilledCircle {
    fn draw(&self, painter: &mut Painter) {
        let mut dy = -self.radius;
        while dy <= self.radius {
            let half_width = (self.radius * self.radius - dy * dy).max(0.0).sqrt();
            let mut dx = -half_width;
            while dx <= half_width {
                if let Some((px, py)) = painter.get_point(self.x + dx, self.y + dy) {
                    painter.paint(px, py, self.color);
                }
                dx += self.step;
            }
            dy += self.step;
        }
    }
}

/// View struct that holds everything needed for one frame
pub struct RenderView<'a> {
    pub simulation: &'a Simulation,
    pub draw_list: &'a DrawList,
    pub layout: ScreenLayout,
}

/// Handles all terminal rendering for the duel
pub struct GameRenderer {
    sample_step: f64,
}

impl Default for GameRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl GameRenderer {
    pub fn new() -> Self {
        Self { sample_step: 1.0 }
    }

    pub fn render(&self, frame: &mut Frame, view: &RenderView) {
        self.render_field(frame, view);
        self.render_controls(frame, view);
        self.render_hints(frame, view.layout.hints);

        if let Some(hero) = view.simulation.selection() {
            self.render_picker(frame, view, hero);
        }
    }

    /// Replays the draw list onto a canvas. Field y grows down, canvas y grows up.
    fn render_field(&self, frame: &mut Frame, view: &RenderView) {
        let config = view.simulation.config();
        let width = f64::from(config.field_width);
        let height = f64::from(config.field_height);

        let canvas = Canvas::default()
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::DarkGray)),
            )
            .background_color(Color::White)
            .marker(Marker::Braille)
            .x_bounds([0.0, width])
            .y_bounds([0.0, height])
            .paint(|ctx| {
                for command in view.draw_list.commands() {
                    match command {
                        // The canvas starts blank every frame
                        DrawCommand::Clear { .. } => {}
                        DrawCommand::FillCircle {
                            x,
                            y,
                            radius,
                            color,
                        } => ctx.draw(&FilledCircle {
                            x: f64::from(*x),
                            y: height - f64::from(*y),
                            radius: f64::from(*radius),
                            step: self.sample_step,
                            color: (*color).into(),
                        }),
                        DrawCommand::FillText {
                            text, x, y, color, ..
                        } => ctx.print(
                            f64::from(*x),
                            height - f64::from(*y),
                            Line::styled(
                                text.clone(),
                                Style::default()
                                    .fg((*color).into())
                                    .add_modifier(Modifier::BOLD),
                            ),
                        ),
                    }
                }
            });

        frame.render_widget(canvas, view.layout.field_block);
    }

    /// One panel per hero with speed and fire interval gauges
    fn render_controls(&self, frame: &mut Frame, view: &RenderView) {
        let columns: [Rect; 2] =
            Layout::horizontal([Constraint::Percentage(50); 2]).areas(view.layout.controls);
        let config = view.simulation.config();

        for (id, area) in HeroId::ALL.into_iter().zip(columns) {
            let hero = view.simulation.hero(id);
            let color: Color = hero.color.into();

            let block = Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray))
                .title(Line::from(id.get_name()).fg(color).bold());
            let inner = block.inner(area);
            frame.render_widget(block, area);

            let [speed_area, interval_area] =
                Layout::vertical([Constraint::Length(1); 2]).areas(inner);

            let speed = view.simulation.hero_parameter(id, HeroParameter::Speed);
            let (speed_min, speed_max) = config.speed_range;
            frame.render_widget(
                LineGauge::default()
                    .filled_style(Style::default().fg(color))
                    .ratio(gauge_ratio(speed, speed_min, speed_max))
                    .label(format!("Speed {:>2}", speed)),
                speed_area,
            );

            let interval = view.simulation.hero_parameter(id, HeroParameter::FireInterval);
            let (interval_min, interval_max) = config.fire_interval_range_ms;
            frame.render_widget(
                LineGauge::default()
                    .filled_style(Style::default().fg(color))
                    .ratio(gauge_ratio(
                        interval,
                        interval_min as f32,
                        interval_max as f32,
                    ))
                    .label(format!("Fire {:>4}ms", interval)),
                interval_area,
            );
        }
    }

    fn render_hints(&self, frame: &mut Frame, area: Rect) {
        let controls = Line::from(vec![Span::styled(
            "[Mouse: near hero flips, click recolors] [W/S E/D: Red] [I/K O/L: Blue] [Q: Quit]",
            Style::default().fg(Color::DarkGray),
        )]);

        frame.render_widget(Paragraph::new(controls).centered(), area);
    }

    /// Palette popup for the selected hero's projectiles
    fn render_picker(&self, frame: &mut Frame, view: &RenderView, hero: HeroId) {
        let current = view.simulation.hero(hero).projectile_color;

        let mut lines = vec![
            Line::from(format!("{} projectiles", hero.get_name()))
                .centered()
                .bold(),
            Line::from(""),
        ];
        for (slot, (name, color)) in PALETTE.iter().enumerate() {
            let marker = if *color == current { " <" } else { "" };
            lines.push(Line::from(vec![
                Span::styled("██", Style::default().fg((*color).into())),
                Span::raw(format!(" {} {}{}", slot + 1, name, marker)),
            ]));
        }
        lines.push(Line::from(""));
        lines.push(Line::from("1-8: pick  Esc/C: close").centered().white());

        let area = centered_rect(frame.area(), PICKER_WIDTH, PICKER_HEIGHT);
        frame.render_widget(Clear, area);
        frame.render_widget(
            Paragraph::new(lines)
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .title(" Projectile color ")
                        .border_style(Style::default().fg(Color::Yellow)),
                )
                .alignment(Alignment::Left),
            area,
        );
    }
}

fn gauge_ratio(value: f32, min: f32, max: f32) -> f64 {
    if max <= min {
        return 0.0;
    }
    f64::from(((value - min) / (max - min)).clamp(0.0, 1.0))
}

fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{Terminal, backend::TestBackend, buffer::Buffer};

    fn screen_text(buffer: &Buffer) -> String {
        buffer.content().iter().map(|cell| cell.symbol()).collect()
    }

    fn draw(simulation: &Simulation, width: u16, height: u16) -> Buffer {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        let mut draw_list = DrawList::new();
        simulation.render(&mut draw_list);

        let config = simulation.config();
        let layout = ScreenLayout::new(
            Rect::new(0, 0, width, height),
            config.field_width,
            config.field_height,
        );
        let renderer = GameRenderer::new();
        terminal
            .draw(|frame| {
                let view = RenderView {
                    simulation,
                    draw_list: &draw_list,
                    layout,
                };
                renderer.render(frame, &view);
            })
            .unwrap();

        terminal.backend().buffer().clone()
    }

    #[test]
    fn test_fit_aspect_limited_by_width() {
        let rect = fit_aspect(Rect::new(0, 0, 100, 40), 800.0, 600.0);
        assert_eq!(rect, Rect::new(0, 1, 100, 37));
    }

    #[test]
    fn test_fit_aspect_limited_by_height() {
        let rect = fit_aspect(Rect::new(0, 0, 200, 40), 800.0, 600.0);
        assert_eq!(rect, Rect::new(47, 0, 106, 40));
    }

    #[test]
    fn test_layout_field_is_inside_border() {
        let layout = ScreenLayout::new(Rect::new(0, 0, 120, 50), 800.0, 600.0);
        assert_eq!(layout.field.x, layout.field_block.x + 1);
        assert_eq!(layout.field.width, layout.field_block.width - 2);
        assert_eq!(layout.controls.height, CONTROLS_HEIGHT);
        assert_eq!(layout.hints.y, 49);
    }

    #[test]
    fn test_gauge_ratio_clamps() {
        assert_eq!(gauge_ratio(5.0, 0.0, 10.0), 0.5);
        assert_eq!(gauge_ratio(-1.0, 0.0, 10.0), 0.0);
        assert_eq!(gauge_ratio(20.0, 0.0, 10.0), 1.0);
        assert_eq!(gauge_ratio(1.0, 3.0, 3.0), 0.0);
    }

    #[test]
    fn test_render_shows_scores_and_controls() {
        let buffer = draw(&Simulation::default(), 120, 50);
        let text = screen_text(&buffer);

        assert!(text.contains("Score 1: 0"));
        assert!(text.contains("Red"));
        assert!(text.contains("Blue"));
        assert!(text.contains("Speed"));
        assert!(!text.contains("Projectile color"));
    }

    #[test]
    fn test_render_paints_heroes_in_their_colors() {
        let buffer = draw(&Simulation::default(), 120, 50);
        let is_braille = |cell: &ratatui::buffer::Cell| {
            cell.symbol()
                .chars()
                .next()
                .is_some_and(|c| ('\u{2801}'..='\u{28FF}').contains(&c))
        };

        assert!(buffer
            .content()
            .iter()
            .any(|cell| is_braille(cell) && cell.fg == Color::Rgb(255, 0, 0)));
        assert!(buffer
            .content()
            .iter()
            .any(|cell| is_braille(cell) && cell.fg == Color::Rgb(0, 0, 255)));
    }

    #[test]
    fn test_render_picker_when_selected() {
        let mut simulation = Simulation::default();
        simulation.click(750.0, 100.0);

        let text = screen_text(&draw(&simulation, 120, 50));
        assert!(text.contains("Projectile color"));
        assert!(text.contains("Blue projectiles"));
        assert!(text.contains("1 Black <"));
    }
}
