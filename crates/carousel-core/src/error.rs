use thiserror::Error;

#[derive(Error, Debug)]
pub enum CarouselError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to load image list from '{source_name}': {reason}")]
    LoadFailure { source_name: String, reason: String },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("Config serialization error: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),
}

impl CarouselError {
    pub fn load_failure(source_name: impl Into<String>, reason: impl ToString) -> Self {
        Self::LoadFailure {
            source_name: source_name.into(),
            reason: reason.to_string(),
        }
    }

    /// True for errors that came from fetching the text source.
    pub fn is_load_failure(&self) -> bool {
        matches!(self, Self::LoadFailure { .. })
    }
}

pub type Result<T> = std::result::Result<T, CarouselError>;
