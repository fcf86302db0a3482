use crate::consts::{DISABLED_CONTROL_OPACITY, ENABLED_CONTROL_OPACITY, PROGRESS_CAPTION};

use super::CarouselState;

/// Render-agnostic description of what the slideshow should show.
#[derive(Clone, Debug, PartialEq)]
pub struct ViewModel {
    pub current_index: usize,
    pub total: usize,
    pub is_at_start: bool,
    pub is_at_end: bool,
    pub progress_text: String,
}

/// Enabled flag and visual affordance of one navigation control.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ControlState {
    pub enabled: bool,
    pub opacity: f32,
}

impl ControlState {
    fn from_enabled(enabled: bool) -> Self {
        Self {
            enabled,
            opacity: if enabled {
                ENABLED_CONTROL_OPACITY
            } else {
                DISABLED_CONTROL_OPACITY
            },
        }
    }
}

/// Pure projection of navigation state into a view model.
///
/// `Empty` reports `0/0` with both ends reached, so every control renders
/// disabled.
pub fn derive_view_model(state: &CarouselState) -> ViewModel {
    match *state {
        CarouselState::Empty => ViewModel {
            current_index: 0,
            total: 0,
            is_at_start: true,
            is_at_end: true,
            progress_text: progress_text(0, 0),
        },
        CarouselState::Active {
            current_index,
            total,
        } => ViewModel {
            current_index,
            total,
            is_at_start: current_index == 0,
            is_at_end: current_index == total - 1,
            progress_text: progress_text(current_index.saturating_add(1), total),
        },
    }
}

fn progress_text(position: usize, total: usize) -> String {
    format!("{PROGRESS_CAPTION} ({position}/{total})")
}

impl ViewModel {
    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Fraction of the track width to shift left so the current slide is
    /// in view.
    pub fn track_offset(&self) -> f32 {
        if self.total == 0 {
            0.0
        } else {
            self.current_index as f32 / self.total as f32
        }
    }

    pub fn is_indicator_active(&self, index: usize) -> bool {
        !self.is_empty() && index == self.current_index
    }

    pub fn previous_control(&self) -> ControlState {
        ControlState::from_enabled(!self.is_at_start)
    }

    pub fn next_control(&self) -> ControlState {
        ControlState::from_enabled(!self.is_at_end)
    }
}
