use super::AllowList;
use crate::consts::{DEFAULT_SCHEME, SCHEME_MARKER};

/// A validated image URL that always carries a scheme.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ImageUrl(String);

impl ImageUrl {
    /// Validate a candidate string against the allow-list.
    ///
    /// Returns `None` for empty candidates and for candidates that contain no
    /// allow-listed host fragment.
    pub fn new(candidate: &str, allowed_hosts: &AllowList) -> Option<Self> {
        if candidate.is_empty() || !allowed_hosts.permits(candidate) {
            return None;
        }
        Some(Self::with_scheme(candidate))
    }

    /// Wrap an already-filtered candidate, prepending `https://` unless it
    /// starts with the literal `http`.
    ///
    /// The check is intentionally loose: `"httpfoo.amazonaws.com"` is kept
    /// verbatim.
    fn with_scheme(candidate: &str) -> Self {
        if candidate.starts_with(SCHEME_MARKER) {
            Self(candidate.to_string())
        } else {
            Self(format!("{DEFAULT_SCHEME}{candidate}"))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl AsRef<str> for ImageUrl {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ImageUrl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Ordered, immutable list of image URLs in source order. Duplicates are kept.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ImageList {
    urls: Vec<ImageUrl>,
}

impl ImageList {
    pub fn len(&self) -> usize {
        self.urls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.urls.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&ImageUrl> {
        self.urls.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ImageUrl> {
        self.urls.iter()
    }

    pub fn as_slice(&self) -> &[ImageUrl] {
        &self.urls
    }
}

impl FromIterator<ImageUrl> for ImageList {
    fn from_iter<T: IntoIterator<Item = ImageUrl>>(iter: T) -> Self {
        Self {
            urls: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a ImageList {
    type Item = &'a ImageUrl;
    type IntoIter = std::slice::Iter<'a, ImageUrl>;

    fn into_iter(self) -> Self::IntoIter {
        self.urls.iter()
    }
}

impl IntoIterator for ImageList {
    type Item = ImageUrl;
    type IntoIter = std::vec::IntoIter<ImageUrl>;

    fn into_iter(self) -> Self::IntoIter {
        self.urls.into_iter()
    }
}
