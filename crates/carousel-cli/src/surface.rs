use carousel_core::carousel::ControlState;
use carousel_core::render::{RenderSurface, SlideSpec};
use console::Style;

struct Styles {
    header: Style,
    label: Style,
    active: Style,
    enabled: Style,
    disabled: Style,
    error: Style,
}

impl Styles {
    fn new() -> Self {
        Self {
            header: Style::new().cyan().bold(),
            label: Style::new().dim(),
            active: Style::new().bold().white(),
            enabled: Style::new().green(),
            disabled: Style::new().dim(),
            error: Style::new().red().bold(),
        }
    }
}

/// Text-mode render surface: keeps the last presented state and prints it
/// as one frame per step.
pub struct TerminalSurface {
    styles: Styles,
    slides: Vec<SlideSpec>,
    indicators: usize,
    offset: f32,
    active: Option<usize>,
    progress: String,
    controls: Option<(ControlState, ControlState)>,
    error: Option<(String, String)>,
}

impl TerminalSurface {
    pub fn new() -> Self {
        Self {
            styles: Styles::new(),
            slides: Vec::new(),
            indicators: 0,
            offset: 0.0,
            active: None,
            progress: String::new(),
            controls: None,
            error: None,
        }
    }

    pub fn draw(&self, step: &str) {
        let s = &self.styles;
        println!("  {}", s.header.apply_to(step));

        if let Some((ref message, ref hint)) = self.error {
            println!("    {}", s.error.apply_to(message));
            println!("    {}", s.label.apply_to(hint));
            return;
        }

        let dots: String = (0..self.indicators)
            .map(|i| if Some(i) == self.active { '\u{25cf}' } else { '\u{25cb}' })
            .collect();
        println!("    {}  {}", s.active.apply_to(dots), self.progress);

        if let Some(slide) = self.active.and_then(|i| self.slides.get(i)) {
            println!(
                "    {:<10}{}",
                s.label.apply_to(slide.alt_text()),
                slide.url
            );
        }

        if let Some((prev, next)) = self.controls {
            println!(
                "    {:<10}{}  {}  {}",
                s.label.apply_to("Controls"),
                self.control("prev", prev),
                self.control("next", next),
                s.label.apply_to(format!("offset {:.0}%", self.offset * 100.0)),
            );
        }
    }

    pub fn draw_unchanged(&self, step: &str) {
        println!(
            "  {} {}",
            self.styles.header.apply_to(step),
            self.styles.label.apply_to("(no change)")
        );
    }

    fn control(&self, name: &str, state: ControlState) -> String {
        let style = if state.enabled {
            &self.styles.enabled
        } else {
            &self.styles.disabled
        };
        style.apply_to(name).to_string()
    }
}

impl RenderSurface for TerminalSurface {
    fn clear_track(&mut self) {
        self.slides.clear();
        self.indicators = 0;
        self.error = None;
    }

    fn add_slide(&mut self, slide: SlideSpec) {
        self.slides.push(slide);
    }

    fn add_indicator(&mut self, _index: usize) {
        self.indicators += 1;
    }

    fn set_track_offset(&mut self, fraction: f32) {
        self.offset = fraction;
    }

    fn set_active_indicator(&mut self, index: Option<usize>) {
        self.active = index;
    }

    fn set_progress_text(&mut self, text: &str) {
        self.progress = text.to_string();
    }

    fn set_controls(&mut self, previous: ControlState, next: ControlState) {
        self.controls = Some((previous, next));
    }

    fn show_error(&mut self, message: &str, hint: &str) {
        self.slides.clear();
        self.indicators = 0;
        self.error = Some((message.to_string(), hint.to_string()));
    }
}
