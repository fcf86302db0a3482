use std::path::PathBuf;

use crate::error::{CarouselError, Result};

/// Fetch capability for the raw image listing.
///
/// Implementations return the whole resource as UTF-8 text. Any failure,
/// whatever its cause, must surface as [`CarouselError::LoadFailure`].
pub trait TextSource: Send + Sync {
    /// Human-readable name used in logs and the error slide.
    fn name(&self) -> &str;

    fn fetch(&self) -> Result<String>;
}

/// Reads the listing from a local file.
#[derive(Clone, Debug)]
pub struct FileSource {
    path: PathBuf,
    name: String,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let name = path.display().to_string();
        Self { path, name }
    }
}

impl TextSource for FileSource {
    fn name(&self) -> &str {
        &self.name
    }

    fn fetch(&self) -> Result<String> {
        std::fs::read_to_string(&self.path).map_err(|e| CarouselError::load_failure(&self.name, e))
    }
}

/// In-memory listing, handy for embedding a fixed set of slides.
#[derive(Clone, Debug)]
pub struct StaticSource {
    name: String,
    text: String,
}

impl StaticSource {
    pub fn new(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: text.into(),
        }
    }
}

impl TextSource for StaticSource {
    fn name(&self) -> &str {
        &self.name
    }

    fn fetch(&self) -> Result<String> {
        Ok(self.text.clone())
    }
}

/// Pick a source implementation for `location`.
///
/// `http://` and `https://` locations are fetched over the network (requires
/// the `http` feature); anything else is treated as a file path.
pub fn open_source(location: &str) -> Result<Box<dyn TextSource>> {
    if is_remote(location) {
        return open_remote(location);
    }
    Ok(Box::new(FileSource::new(location)))
}

fn is_remote(location: &str) -> bool {
    location.starts_with("http://") || location.starts_with("https://")
}

#[cfg(feature = "http")]
fn open_remote(location: &str) -> Result<Box<dyn TextSource>> {
    Ok(Box::new(super::http::HttpSource::new(location)?))
}

#[cfg(not(feature = "http"))]
fn open_remote(location: &str) -> Result<Box<dyn TextSource>> {
    Err(CarouselError::load_failure(
        location,
        "remote sources require the `http` feature",
    ))
}
