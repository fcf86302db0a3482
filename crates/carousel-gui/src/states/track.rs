use carousel_core::carousel::{CarouselState, ControlState};
use carousel_core::render::{RenderSurface, SlideSpec, SlideStatus};

pub struct Slide {
    pub spec: SlideSpec,
    pub status: SlideStatus,
    pub texture: Option<egui::TextureHandle>,
}

/// Everything the slide track panels draw, kept up to date through
/// [`RenderSurface`].
pub struct TrackState {
    pub slides: Vec<Slide>,
    pub indicators: Vec<usize>,
    /// Fraction of the full track width shifted left.
    pub offset: f32,
    pub active_indicator: Option<usize>,
    pub progress_text: String,
    pub previous: ControlState,
    pub next: ControlState,
    /// Error slide message and hint; replaces the track when set.
    pub error: Option<(String, String)>,
}

impl Default for TrackState {
    fn default() -> Self {
        let view = CarouselState::Empty.view_model();
        Self {
            slides: Vec::new(),
            indicators: Vec::new(),
            offset: 0.0,
            active_indicator: None,
            progress_text: String::new(),
            previous: view.previous_control(),
            next: view.next_control(),
            error: None,
        }
    }
}

impl TrackState {
    pub fn set_loaded(&mut self, index: usize, texture: egui::TextureHandle) {
        if let Some(slide) = self.slides.get_mut(index) {
            slide.status = SlideStatus::Loaded;
            slide.texture = Some(texture);
        }
    }

    pub fn set_failed(&mut self, index: usize) {
        if let Some(slide) = self.slides.get_mut(index) {
            slide.status = SlideStatus::Failed;
        }
    }
}

impl RenderSurface for TrackState {
    fn clear_track(&mut self) {
        self.slides.clear();
        self.indicators.clear();
        self.error = None;
    }

    fn add_slide(&mut self, slide: SlideSpec) {
        self.slides.push(Slide {
            spec: slide,
            status: SlideStatus::default(),
            texture: None,
        });
    }

    fn add_indicator(&mut self, index: usize) {
        self.indicators.push(index);
    }

    fn set_track_offset(&mut self, fraction: f32) {
        self.offset = fraction;
    }

    fn set_active_indicator(&mut self, index: Option<usize>) {
        self.active_indicator = index;
    }

    fn set_progress_text(&mut self, text: &str) {
        self.progress_text = text.to_string();
    }

    fn set_controls(&mut self, previous: ControlState, next: ControlState) {
        self.previous = previous;
        self.next = next;
    }

    fn show_error(&mut self, message: &str, hint: &str) {
        self.slides.clear();
        self.indicators.clear();
        self.error = Some((message.to_string(), hint.to_string()));
    }
}
