//! Contract between the controller and whatever draws the slideshow.
//!
//! The core never touches a UI toolkit. A front-end implements
//! [`RenderSurface`] and lets [`mount`] and [`present`] drive it from a
//! [`Carousel`] and its [`ViewModel`].

use crate::carousel::{Carousel, ControlState, ViewModel};
use crate::consts::LOAD_FAILURE_MESSAGE;
use crate::source::ImageUrl;

/// Everything a surface needs to build one slide.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SlideSpec {
    pub index: usize,
    pub url: ImageUrl,
}

impl SlideSpec {
    /// Placeholder shown until the image arrives.
    pub fn loading_text(&self) -> String {
        format!("Loading image {}...", self.index + 1)
    }

    /// Placeholder shown when the image cannot be fetched or decoded.
    pub fn failed_text(&self) -> String {
        format!("Failed to load image {}", self.index + 1)
    }

    pub fn alt_text(&self) -> String {
        format!("Image {}", self.index + 1)
    }
}

/// Load progress of a single slide's image, reported back by the surface
/// owner once the image fetch settles.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SlideStatus {
    #[default]
    Loading,
    Loaded,
    Failed,
}

impl SlideStatus {
    /// Text to draw in place of the image, or `None` once it is shown.
    pub fn placeholder(&self, slide: &SlideSpec) -> Option<String> {
        match self {
            Self::Loading => Some(slide.loading_text()),
            Self::Loaded => None,
            Self::Failed => Some(slide.failed_text()),
        }
    }
}

/// Drawing primitives the controller needs from a front-end.
pub trait RenderSurface {
    /// Remove every slide and indicator.
    fn clear_track(&mut self);

    fn add_slide(&mut self, slide: SlideSpec);

    /// Add a clickable indicator that should produce
    /// [`InputEvent::IndicatorClicked(index)`](crate::input::InputEvent::IndicatorClicked).
    fn add_indicator(&mut self, index: usize);

    /// Shift the track left by `fraction` of its full width.
    fn set_track_offset(&mut self, fraction: f32);

    fn set_active_indicator(&mut self, index: Option<usize>);

    fn set_progress_text(&mut self, text: &str);

    fn set_controls(&mut self, previous: ControlState, next: ControlState);

    /// Replace the track with a single error slide.
    fn show_error(&mut self, message: &str, hint: &str);
}

/// Build the slide track for `carousel` and show its current position.
pub fn mount<S: RenderSurface + ?Sized>(carousel: &Carousel, surface: &mut S) {
    surface.clear_track();
    for (index, url) in carousel.images().iter().enumerate() {
        surface.add_slide(SlideSpec {
            index,
            url: url.clone(),
        });
        surface.add_indicator(index);
    }
    present(&carousel.view_model(), surface);
}

/// Push a view model to the surface.
pub fn present<S: RenderSurface + ?Sized>(view: &ViewModel, surface: &mut S) {
    surface.set_track_offset(view.track_offset());
    surface.set_active_indicator((!view.is_empty()).then_some(view.current_index));
    surface.set_progress_text(&view.progress_text);
    surface.set_controls(view.previous_control(), view.next_control());
}

/// Show the error slide for a source that could not be loaded.
pub fn show_load_failure<S: RenderSurface + ?Sized>(source_name: &str, surface: &mut S) {
    surface.show_error(LOAD_FAILURE_MESSAGE, &load_failure_hint(source_name));
}

pub fn load_failure_hint(source_name: &str) -> String {
    format!("Please check the '{source_name}' file and try again.")
}
