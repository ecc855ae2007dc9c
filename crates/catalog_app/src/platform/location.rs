/// Path shown when the initial location names none.
pub const DEFAULT_PATH: &str = "/dash";

/// The terminal's stand-in for the browser address bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddressBar {
    path: String,
    query: String,
}

impl Default for AddressBar {
    fn default() -> Self {
        Self {
            path: DEFAULT_PATH.to_string(),
            query: String::new(),
        }
    }
}

impl AddressBar {
    /// Accepts a full URL, `path?query`, `?query` or a bare `key=value` query.
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        let without_fragment = raw.split('#').next().unwrap_or_default();
        let (before, query) = match without_fragment.split_once('?') {
            Some((before, query)) => (before, query),
            None if without_fragment.contains('=') => ("", without_fragment),
            None => (without_fragment, ""),
        };

        let path = match before.split_once("://") {
            Some((_, rest)) => rest.find('/').map(|idx| &rest[idx..]).unwrap_or_default(),
            None => before,
        };
        let path = if path.is_empty() || path == "/" {
            DEFAULT_PATH.to_string()
        } else {
            path.to_string()
        };

        Self {
            path,
            query: query.to_string(),
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn replace_query(&mut self, query: &str) {
        self.query = query.trim_start_matches('?').to_string();
    }

    pub fn href(&self) -> String {
        if self.query.is_empty() {
            self.path.clone()
        } else {
            format!("{}?{}", self.path, self.query)
        }
    }
}
