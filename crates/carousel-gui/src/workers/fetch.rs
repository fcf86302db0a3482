use anyhow::Result;

/// Downloads slide image bytes.
pub(crate) struct SlideFetcher {
    #[cfg(feature = "http")]
    client: reqwest::blocking::Client,
}

#[cfg(feature = "http")]
impl SlideFetcher {
    pub fn new() -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(concat!("carousel-gui/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { client })
    }

    pub fn bytes(&self, url: &str) -> Result<Vec<u8>> {
        let response = self.client.get(url).send()?.error_for_status()?;
        Ok(response.bytes()?.to_vec())
    }
}

#[cfg(not(feature = "http"))]
impl SlideFetcher {
    pub fn new() -> Result<Self> {
        anyhow::bail!("built without the `http` feature")
    }

    pub fn bytes(&self, url: &str) -> Result<Vec<u8>> {
        anyhow::bail!("cannot download {url}: built without the `http` feature")
    }
}
