#![allow(dead_code)]

use carousel_core::carousel::ControlState;
use carousel_core::render::{RenderSurface, SlideSpec};
use carousel_core::source::{parse, AllowList, ImageList};

/// Build an image list of `n` distinct Drive URLs.
pub fn drive_images(n: usize) -> ImageList {
    let raw: Vec<String> = (0..n)
        .map(|i| format!("https://drive.google.com/uc?id={i}"))
        .collect();
    parse(&raw.join("\n"), &AllowList::default())
}

/// Surface that records every call it receives.
#[derive(Default)]
pub struct RecordingSurface {
    pub clears: usize,
    pub slides: Vec<SlideSpec>,
    pub indicators: Vec<usize>,
    pub offset: Option<f32>,
    pub active_indicator: Option<usize>,
    pub progress_text: Option<String>,
    pub controls: Option<(ControlState, ControlState)>,
    pub error: Option<(String, String)>,
}

impl RenderSurface for RecordingSurface {
    fn clear_track(&mut self) {
        self.clears += 1;
        self.slides.clear();
        self.indicators.clear();
        self.error = None;
    }

    fn add_slide(&mut self, slide: SlideSpec) {
        self.slides.push(slide);
    }

    fn add_indicator(&mut self, index: usize) {
        self.indicators.push(index);
    }

    fn set_track_offset(&mut self, fraction: f32) {
        self.offset = Some(fraction);
    }

    fn set_active_indicator(&mut self, index: Option<usize>) {
        self.active_indicator = index;
    }

    fn set_progress_text(&mut self, text: &str) {
        self.progress_text = Some(text.to_string());
    }

    fn set_controls(&mut self, previous: ControlState, next: ControlState) {
        self.controls = Some((previous, next));
    }

    fn show_error(&mut self, message: &str, hint: &str) {
        self.slides.clear();
        self.indicators.clear();
        self.error = Some((message.to_string(), hint.to_string()));
    }
}
