use serde::{Deserialize, Serialize};

use crate::consts::DEFAULT_SWIPE_THRESHOLD;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

/// Discrete input delivered by the host, one at a time.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InputEvent {
    Key(Direction),
    PreviousButton,
    NextButton,
    /// Side "up" control; behaves like the previous button.
    NavUp,
    /// Side "down" control; behaves like the next button.
    NavDown,
    /// Horizontal gesture, in screen coordinates.
    Swipe { start_x: f32, end_x: f32 },
    IndicatorClicked(usize),
}

/// Controller operation an input event maps to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Previous,
    Next,
    GoTo(usize),
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SwipeConfig {
    /// Gestures must travel strictly more than this many pixels.
    pub threshold: f32,
}

impl Default for SwipeConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_SWIPE_THRESHOLD,
        }
    }
}

impl SwipeConfig {
    /// Interpret a horizontal gesture. Dragging right (positive delta) goes
    /// back, dragging left goes forward; short gestures are ignored.
    pub fn interpret(&self, start_x: f32, end_x: f32) -> Option<Command> {
        let delta = end_x - start_x;
        if delta.is_nan() || delta.abs() <= self.threshold {
            return None;
        }
        if delta > 0.0 {
            Some(Command::Previous)
        } else {
            Some(Command::Next)
        }
    }
}

/// Map an input event to the controller command it triggers, if any.
pub fn command_for(event: InputEvent, swipe: &SwipeConfig) -> Option<Command> {
    match event {
        InputEvent::Key(Direction::Left | Direction::Up)
        | InputEvent::PreviousButton
        | InputEvent::NavUp => Some(Command::Previous),
        InputEvent::Key(Direction::Right | Direction::Down)
        | InputEvent::NextButton
        | InputEvent::NavDown => Some(Command::Next),
        InputEvent::Swipe { start_x, end_x } => swipe.interpret(start_x, end_x),
        InputEvent::IndicatorClicked(index) => Some(Command::GoTo(index)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn threshold_is_exclusive() {
        let swipe = SwipeConfig::default();
        assert_eq!(swipe.interpret(100.0, 150.0), None);
        assert_eq!(swipe.interpret(100.0, 150.5), Some(Command::Previous));
        assert_eq!(swipe.interpret(150.0, 100.0), None);
        assert_eq!(swipe.interpret(150.5, 100.0), Some(Command::Next));
        assert_eq!(swipe.interpret(f32::NAN, 100.0), None);
        assert_eq!(swipe.interpret(100.0, f32::NAN), None);
    }
}
