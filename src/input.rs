use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use ratatui::layout::Rect;
use std::time::Duration;

use crate::entities::{HeroId, HeroParameter, Rgb, palette_slot};

/// Represents semantic actions that can be triggered by input
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputAction {
    /// Pointer moved to a field position
    PointerMove { x: f32, y: f32 },
    /// Left click at a field position
    Click { x: f32, y: f32 },
    /// Slider nudge, `steps` is signed
    AdjustHero {
        hero: HeroId,
        parameter: HeroParameter,
        steps: i32,
    },
    PickColor(Rgb),
    ClosePicker,
    Quit,
}

/// Maps a terminal cell to field coordinates, sampling the cell center.
///
/// Returns `None` for cells outside `area`.
pub fn cell_to_field(
    column: u16,
    row: u16,
    area: Rect,
    field_width: f32,
    field_height: f32,
) -> Option<(f32, f32)> {
    if area.width == 0
        || area.height == 0
        || column < area.x
        || row < area.y
        || column >= area.x + area.width
        || row >= area.y + area.height
    {
        return None;
    }

    let x = (f32::from(column - area.x) + 0.5) * field_width / f32::from(area.width);
    let y = (f32::from(row - area.y) + 0.5) * field_height / f32::from(area.height);
    Some((x, y))
}

/// Polls terminal events and translates them into duel actions
pub struct InputManager {
    field_area: Rect,
    field_width: f32,
    field_height: f32,
    actions: Vec<InputAction>,
}

impl InputManager {
    pub fn new(field_width: f32, field_height: f32) -> Self {
        Self {
            field_area: Rect::default(),
            field_width,
            field_height,
            actions: Vec::new(),
        }
    }

    /// Terminal cells currently showing the field, pointer events are mapped through it
    pub fn set_field_area(&mut self, area: Rect) {
        self.field_area = area;
    }

    /// Drains all pending events without blocking.
    /// Should be called once per frame before getting actions
    pub fn poll_events(&mut self, picker_open: bool) -> color_eyre::Result<()> {
        self.actions.clear();

        while event::poll(Duration::from_millis(0))? {
            let event = event::read()?;
            self.handle_event(event, picker_open);
        }

        Ok(())
    }

    /// Translates one terminal event and queues the resulting action, if any
    pub fn handle_event(&mut self, event: Event, picker_open: bool) {
        let action = match event {
            Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                self.handle_key_press(key_event, picker_open)
            }
            Event::Mouse(mouse_event) => self.handle_mouse(mouse_event),
            _ => None,
        };

        if let Some(action) = action {
            self.actions.push(action);
        }
    }

    fn handle_mouse(&self, mouse_event: MouseEvent) -> Option<InputAction> {
        let (x, y) = cell_to_field(
            mouse_event.column,
            mouse_event.row,
            self.field_area,
            self.field_width,
            self.field_height,
        )?;

        match mouse_event.kind {
            MouseEventKind::Moved | MouseEventKind::Drag(_) => {
                Some(InputAction::PointerMove { x, y })
            }
            MouseEventKind::Down(MouseButton::Left) => Some(InputAction::Click { x, y }),
            _ => None,
        }
    }

    fn handle_key_press(&self, key_event: KeyEvent, picker_open: bool) -> Option<InputAction> {
        // Quit works in any state
        if matches!(key_event.code, KeyCode::Char('q') | KeyCode::Char('Q'))
            || (key_event.code == KeyCode::Char('c')
                && key_event.modifiers.contains(KeyModifiers::CONTROL))
        {
            return Some(InputAction::Quit);
        }

        if picker_open {
            match key_event.code {
                KeyCode::Esc | KeyCode::Char('c') | KeyCode::Char('C') => {
                    return Some(InputAction::ClosePicker);
                }
                KeyCode::Char(digit @ '1'..='8') => {
                    let slot = digit.to_digit(10)? as usize;
                    return palette_slot(slot).map(InputAction::PickColor);
                }
                _ => {}
            }
        } else if key_event.code == KeyCode::Esc {
            return Some(InputAction::Quit);
        }

        let (hero, parameter, steps) = match key_event.code {
            // Red hero - W/S speed, E/D fire interval
            KeyCode::Char('w') | KeyCode::Char('W') => (HeroId::Left, HeroParameter::Speed, 1),
            KeyCode::Char('s') | KeyCode::Char('S') => (HeroId::Left, HeroParameter::Speed, -1),
            KeyCode::Char('e') | KeyCode::Char('E') => {
                (HeroId::Left, HeroParameter::FireInterval, 1)
            }
            KeyCode::Char('d') | KeyCode::Char('D') => {
                (HeroId::Left, HeroParameter::FireInterval, -1)
            }
            // Blue hero - I/K speed, O/L fire interval
            KeyCode::Char('i') | KeyCode::Char('I') => (HeroId::Right, HeroParameter::Speed, 1),
            KeyCode::Char('k') | KeyCode::Char('K') => (HeroId::Right, HeroParameter::Speed, -1),
            KeyCode::Char('o') | KeyCode::Char('O') => {
                (HeroId::Right, HeroParameter::FireInterval, 1)
            }
            KeyCode::Char('l') | KeyCode::Char('L') => {
                (HeroId::Right, HeroParameter::FireInterval, -1)
            }
            _ => return None,
        };

        Some(InputAction::AdjustHero {
            hero,
            parameter,
            steps,
        })
    }

    /// Returns this frame's actions in arrival order.
    /// Must be called after poll_events()
    pub fn get_actions(&self) -> &[InputAction] {
        &self.actions
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn manager() -> InputManager {
        let mut manager = InputManager::new(800.0, 600.0);
        manager.set_field_area(Rect::new(10, 5, 80, 30));
        manager
    }

    fn press(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> Event {
        Event::Mouse(MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        })
    }

    #[test]
    fn test_cell_to_field_uses_cell_centers() {
        let area = Rect::new(10, 5, 80, 30);
        assert_eq!(cell_to_field(10, 5, area, 800.0, 600.0), Some((5.0, 10.0)));
        assert_eq!(
            cell_to_field(89, 34, area, 800.0, 600.0),
            Some((795.0, 590.0))
        );
    }

    #[test]
    fn test_cell_to_field_outside_area() {
        let area = Rect::new(10, 5, 80, 30);
        assert_eq!(cell_to_field(9, 5, area, 800.0, 600.0), None);
        assert_eq!(cell_to_field(90, 5, area, 800.0, 600.0), None);
        assert_eq!(cell_to_field(20, 35, area, 800.0, 600.0), None);
        assert_eq!(cell_to_field(0, 0, Rect::default(), 800.0, 600.0), None);
    }

    #[test]
    fn test_mouse_move_and_click() {
        let mut manager = manager();
        manager.handle_event(mouse(MouseEventKind::Moved, 14, 7), false);
        manager.handle_event(
            mouse(MouseEventKind::Down(MouseButton::Left), 14, 7),
            false,
        );
        manager.handle_event(
            mouse(MouseEventKind::Down(MouseButton::Right), 14, 7),
            false,
        );
        manager.handle_event(mouse(MouseEventKind::Moved, 0, 0), false);

        assert_eq!(
            manager.get_actions(),
            &[
                InputAction::PointerMove { x: 45.0, y: 50.0 },
                InputAction::Click { x: 45.0, y: 50.0 },
            ]
        );
    }

    #[test]
    fn test_slider_keys() {
        let mut manager = manager();
        manager.handle_event(press(KeyCode::Char('w')), false);
        manager.handle_event(press(KeyCode::Char('l')), false);

        assert_eq!(
            manager.get_actions(),
            &[
                InputAction::AdjustHero {
                    hero: HeroId::Left,
                    parameter: HeroParameter::Speed,
                    steps: 1
                },
                InputAction::AdjustHero {
                    hero: HeroId::Right,
                    parameter: HeroParameter::FireInterval,
                    steps: -1
                },
            ]
        );
    }

    #[test]
    fn test_picker_keys() {
        let mut manager = manager();
        manager.handle_event(press(KeyCode::Char('3')), true);
        manager.handle_event(press(KeyCode::Char('9')), true);
        manager.handle_event(press(KeyCode::Esc), true);

        assert_eq!(
            manager.get_actions(),
            &[InputAction::PickColor(Rgb::ORANGE), InputAction::ClosePicker]
        );
    }

    #[test]
    fn test_digits_ignored_when_picker_closed() {
        let mut manager = manager();
        manager.handle_event(press(KeyCode::Char('3')), false);
        assert!(manager.get_actions().is_empty());
    }

    #[test]
    fn test_quit_keys() {
        let mut manager = manager();
        manager.handle_event(press(KeyCode::Esc), false);
        manager.handle_event(press(KeyCode::Char('q')), true);
        manager.handle_event(
            Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            true,
        );

        assert_eq!(
            manager.get_actions(),
            &[InputAction::Quit, InputAction::Quit, InputAction::Quit]
        );
    }

    #[test]
    fn test_key_release_ignored() {
        let mut manager = manager();
        let mut release = KeyEvent::new(KeyCode::Char('w'), KeyModifiers::NONE);
        release.kind = KeyEventKind::Release;
        manager.handle_event(Event::Key(release), false);
        assert!(manager.get_actions().is_empty());
    }
}
