use serde::{Deserialize, Serialize};

use crate::consts::DEFAULT_ALLOWED_HOSTS;

/// Host fragments an image URL must contain to be accepted.
///
/// Matching is a plain substring test against the whole candidate string,
/// not a parse of the URL's host component. `"drive.google.com"` therefore
/// also accepts `"evil.example/?drive.google.com"`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AllowList {
    hosts: Vec<String>,
}

impl AllowList {
    pub fn new<I, S>(hosts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut list = Self { hosts: Vec::new() };
        for host in hosts {
            list.insert(host);
        }
        list
    }

    /// Add a host fragment. Blank and repeated fragments are ignored.
    pub fn insert(&mut self, host: impl Into<String>) {
        let host = host.into();
        let host = host.trim();
        if host.is_empty() || self.hosts.iter().any(|h| h == host) {
            return;
        }
        self.hosts.push(host.to_string());
    }

    pub fn permits(&self, candidate: &str) -> bool {
        self.hosts.iter().any(|host| candidate.contains(host.as_str()))
    }

    pub fn hosts(&self) -> &[String] {
        &self.hosts
    }

    pub fn is_empty(&self) -> bool {
        self.hosts.is_empty()
    }
}

impl Default for AllowList {
    fn default() -> Self {
        Self::new(DEFAULT_ALLOWED_HOSTS)
    }
}

impl std::fmt::Display for AllowList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.hosts.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_skips_blank_and_duplicate_hosts() {
        let mut list = AllowList::new(["a.com"]);
        list.insert("  ");
        list.insert("a.com");
        list.insert(" b.com ");
        assert_eq!(list.hosts(), &["a.com".to_string(), "b.com".to_string()]);
    }

    #[test]
    fn empty_list_permits_nothing() {
        let list = AllowList::new(Vec::<String>::new());
        assert!(!list.permits("https://drive.google.com/x"));
    }
}
