use crate::core::viewport::{Direction, Zoom};

const FINE_SHIFT_CELLS: u16 = 1;
const COARSE_SHIFT_CELLS: u16 = 5;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Command {
    Quit,
    Shift { direction: Direction, cells: u16 },
    Zoom { zoom: Zoom, steps: u8 },
}

/// vi-style bindings; the shifted variants are the coarse versions. Keys
/// outside the table decode to `None` and leave the view untouched.
#[must_use]
pub fn command_for_key(key: char) -> Option<Command> {
    match key {
        'q' => Some(Command::Quit),
        'h' => Some(Command::Shift {
            direction: Direction::Left,
            cells: FINE_SHIFT_CELLS,
        }),
        'j' => Some(Command::Shift {
            direction: Direction::Down,
            cells: FINE_SHIFT_CELLS,
        }),
        'k' => Some(Command::Shift {
            direction: Direction::Up,
            cells: FINE_SHIFT_CELLS,
        }),
        'l' => Some(Command::Shift {
            direction: Direction::Right,
            cells: FINE_SHIFT_CELLS,
        }),
        'H' => Some(Command::Shift {
            direction: Direction::Left,
            cells: COARSE_SHIFT_CELLS,
        }),
        'J' => Some(Command::Shift {
            direction: Direction::Down,
            cells: COARSE_SHIFT_CELLS,
        }),
        'K' => Some(Command::Shift {
            direction: Direction::Up,
            cells: COARSE_SHIFT_CELLS,
        }),
        'L' => Some(Command::Shift {
            direction: Direction::Right,
            cells: COARSE_SHIFT_CELLS,
        }),
        'i' => Some(Command::Zoom {
            zoom: Zoom::In,
            steps: 1,
        }),
        'I' => Some(Command::Zoom {
            zoom: Zoom::In,
            steps: 2,
        }),
        'o' => Some(Command::Zoom {
            zoom: Zoom::Out,
            steps: 1,
        }),
        'O' => Some(Command::Zoom {
            zoom: Zoom::Out,
            steps: 2,
        }),
        _ => None,
    }
}
