use crate::input::{command_for, Command, InputEvent, SwipeConfig};
use crate::source::{ImageList, ImageUrl};

use super::{CarouselState, ViewModel};

/// Owned slideshow controller: the loaded images plus the navigation state.
///
/// All mutation goes through the transition methods, each of which reports
/// whether the state actually changed.
#[derive(Clone, Debug)]
pub struct Carousel {
    images: ImageList,
    state: CarouselState,
    swipe: SwipeConfig,
}

impl Carousel {
    pub fn new(images: ImageList) -> Self {
        Self::with_swipe(images, SwipeConfig::default())
    }

    pub fn with_swipe(images: ImageList, swipe: SwipeConfig) -> Self {
        let state = CarouselState::initialize(&images);
        tracing::debug!(total = images.len(), "Carousel initialized");
        Self {
            images,
            state,
            swipe,
        }
    }

    pub fn images(&self) -> &ImageList {
        &self.images
    }

    pub fn state(&self) -> CarouselState {
        self.state
    }

    pub fn current_image(&self) -> Option<&ImageUrl> {
        self.state
            .current_index()
            .and_then(|index| self.images.get(index))
    }

    pub fn view_model(&self) -> ViewModel {
        self.state.view_model()
    }

    pub fn next(&mut self) -> bool {
        self.transition(CarouselState::next)
    }

    pub fn previous(&mut self) -> bool {
        self.transition(CarouselState::previous)
    }

    /// Jump to `index` without bounds checking; see [`CarouselState::go_to`].
    pub fn go_to(&mut self, index: usize) -> bool {
        self.transition(|state| state.go_to(index))
    }

    pub fn apply(&mut self, command: Command) -> bool {
        match command {
            Command::Previous => self.previous(),
            Command::Next => self.next(),
            Command::GoTo(index) => self.go_to(index),
        }
    }

    /// Handle one input event. Returns the new view model when the event
    /// changed the state.
    ///
    /// Indicator clicks are bounds-checked here: an index outside the image
    /// list is dropped instead of reaching [`go_to`](Self::go_to).
    pub fn dispatch(&mut self, event: InputEvent) -> Option<ViewModel> {
        let command = command_for(event, &self.swipe)?;

        if let Command::GoTo(index) = command {
            if !self.state.contains(index) {
                tracing::warn!(index, total = self.state.total(), "Ignoring out-of-range indicator");
                return None;
            }
        }

        self.apply(command).then(|| self.view_model())
    }

    fn transition(&mut self, step: impl FnOnce(CarouselState) -> CarouselState) -> bool {
        let next = step(self.state);
        if next == self.state {
            return false;
        }
        tracing::trace!(from = ?self.state, to = ?next, "Carousel transition");
        self.state = next;
        true
    }
}
