use crate::carousel::{Carousel, ViewModel};
use crate::config::CarouselConfig;
use crate::error::{CarouselError, Result};
use crate::input::{InputEvent, SwipeConfig};
use crate::render::{mount, show_load_failure, RenderSurface};
use crate::source::{load_images, ImageList, TextSource};

/// Where a session is in its one-shot load.
#[derive(Debug)]
pub enum SessionPhase {
    Loading,
    Ready(Carousel),
    /// Terminal for the session: there is no retry.
    Failed(CarouselError),
}

/// One load-then-browse lifetime of the slideshow.
///
/// Navigation is only reachable once the load has completed successfully.
#[derive(Debug)]
pub struct Session {
    source_name: String,
    swipe: SwipeConfig,
    phase: SessionPhase,
}

impl Session {
    /// Start a session whose listing is still being fetched.
    pub fn begin(source_name: impl Into<String>, swipe: SwipeConfig) -> Self {
        Self {
            source_name: source_name.into(),
            swipe,
            phase: SessionPhase::Loading,
        }
    }

    /// Fetch and parse synchronously, returning a completed session.
    pub fn load(source: &dyn TextSource, config: &CarouselConfig) -> Self {
        let mut session = Self::begin(source.name(), config.swipe.clone());
        session.complete(load_images(source, &config.allowed_hosts));
        session
    }

    /// Settle the load. Only the first call has an effect.
    pub fn complete(&mut self, result: Result<ImageList>) -> bool {
        if !matches!(self.phase, SessionPhase::Loading) {
            tracing::warn!(source = %self.source_name, "Session already settled, ignoring load result");
            return false;
        }

        self.phase = match result {
            Ok(images) => SessionPhase::Ready(Carousel::with_swipe(images, self.swipe.clone())),
            Err(e) => {
                tracing::error!(source = %self.source_name, "Error loading images: {e}");
                SessionPhase::Failed(e)
            }
        };
        true
    }

    /// Forward an input event to the carousel. Ignored unless ready.
    pub fn dispatch(&mut self, event: InputEvent) -> Option<ViewModel> {
        match &mut self.phase {
            SessionPhase::Ready(carousel) => carousel.dispatch(event),
            _ => None,
        }
    }

    /// Draw the session's current phase: the slide track once ready, the
    /// error slide after a failure, nothing while loading.
    pub fn render<S: RenderSurface + ?Sized>(&self, surface: &mut S) {
        match &self.phase {
            SessionPhase::Loading => {}
            SessionPhase::Ready(carousel) => mount(carousel, surface),
            SessionPhase::Failed(_) => show_load_failure(&self.source_name, surface),
        }
    }

    pub fn source_name(&self) -> &str {
        &self.source_name
    }

    pub fn phase(&self) -> &SessionPhase {
        &self.phase
    }

    pub fn carousel(&self) -> Option<&Carousel> {
        match &self.phase {
            SessionPhase::Ready(carousel) => Some(carousel),
            _ => None,
        }
    }

    pub fn carousel_mut(&mut self) -> Option<&mut Carousel> {
        match &mut self.phase {
            SessionPhase::Ready(carousel) => Some(carousel),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&CarouselError> {
        match &self.phase {
            SessionPhase::Failed(e) => Some(e),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.phase, SessionPhase::Loading)
    }

    pub fn is_ready(&self) -> bool {
        matches!(self.phase, SessionPhase::Ready(_))
    }

    pub fn is_failed(&self) -> bool {
        matches!(self.phase, SessionPhase::Failed(_))
    }
}
