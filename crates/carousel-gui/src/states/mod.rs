mod track;
mod ui;

pub use track::{Slide, TrackState};
pub use ui::UIState;
