use std::collections::HashSet;

/// Ordered set of URLs: first-seen order, exact string equality, append only.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LinkCollection {
    urls: Vec<String>,
    seen: HashSet<String>,
}

impl LinkCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `url` unless it is already present. Returns whether it was added.
    pub fn insert(&mut self, url: &str) -> bool {
        if self.seen.contains(url) {
            return false;
        }
        self.seen.insert(url.to_owned());
        self.urls.push(url.to_owned());
        true
    }

    pub fn len(&self) -> usize {
        self.urls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.urls.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.urls.iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.urls
    }

    /// Newline-joined list, no trailing newline. Empty collection gives `""`.
    pub fn joined(&self) -> String {
        self.urls.join("\n")
    }
}
