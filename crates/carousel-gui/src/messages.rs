use carousel_core::config::CarouselConfig;
use carousel_core::error::Result;
use carousel_core::source::{AllowList, ImageList, ImageUrl};

/// Commands sent from UI thread to worker thread.
pub enum WorkerCommand {
    /// Fetch and parse a listing as load `generation`.
    LoadSource {
        generation: u64,
        location: String,
        allowed_hosts: AllowList,
    },

    /// Download and decode one slide image of the given generation.
    FetchSlide {
        generation: u64,
        index: usize,
        url: ImageUrl,
    },
}

impl WorkerCommand {
    /// Load generation the command belongs to.
    pub fn generation(&self) -> u64 {
        match self {
            Self::LoadSource { generation, .. } | Self::FetchSlide { generation, .. } => *generation,
        }
    }
}

/// Results sent from worker thread back to UI thread.
pub enum WorkerResult {
    LoadStarted {
        generation: u64,
        source_name: String,
    },
    LoadComplete {
        generation: u64,
        result: Result<ImageList>,
    },
    SlideLoaded {
        generation: u64,
        index: usize,
        image: egui::ColorImage,
    },
    SlideFailed {
        generation: u64,
        index: usize,
        reason: String,
    },
    ConfigImported {
        config: CarouselConfig,
    },
    Error {
        message: String,
    },
    Log {
        message: String,
    },
}
