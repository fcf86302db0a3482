use reqwest::blocking::Client;

use super::TextSource;
use crate::error::{CarouselError, Result};

/// Fetches the listing with a blocking HTTP GET. Non-2xx responses fail.
#[derive(Clone, Debug)]
pub struct HttpSource {
    url: String,
    client: Client,
}

impl HttpSource {
    pub fn new(url: impl Into<String>) -> Result<Self> {
        let url = url.into();
        let client = Client::builder()
            .build()
            .map_err(|e| CarouselError::load_failure(&url, e))?;
        Ok(Self { url, client })
    }
}

impl TextSource for HttpSource {
    fn name(&self) -> &str {
        &self.url
    }

    fn fetch(&self) -> Result<String> {
        tracing::debug!(url = %self.url, "Fetching image list");
        self.client
            .get(&self.url)
            .send()
            .and_then(|resp| resp.error_for_status())
            .and_then(|resp| resp.text())
            .map_err(|e| CarouselError::load_failure(&self.url, e))
    }
}
