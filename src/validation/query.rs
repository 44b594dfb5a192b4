//! Raw query and form parameter access
//!
//! Handlers extract the decoded key/value pairs as a plain `Vec` and wrap
//! them here, so parameters can be read under their external names
//! (including aliased ones like `user-name`). Scalar reads collapse
//! repeated names to the last occurrence, the way a dict built from the
//! decoded pairs would; `all` preserves every occurrence in order.

/// Decoded key/value pairs from a query string or urlencoded form body.
#[derive(Debug, Clone, Default)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    pub fn new(pairs: Vec<(String, String)>) -> Self {
        Self { pairs }
    }

    /// Scalar read for `name`: the last occurrence wins.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.pairs
            .iter()
            .rev()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Every value sent under `name`, in submission order.
    pub fn all(&self, name: &str) -> Vec<&str> {
        self.pairs
            .iter()
            .filter(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
            .collect()
    }

    /// Whether `name` was sent at all (even with an empty value).
    pub fn has(&self, name: &str) -> bool {
        self.pairs.iter().any(|(key, _)| key == name)
    }
}

impl From<Vec<(String, String)>> for QueryParams {
    fn from(pairs: Vec<(String, String)>) -> Self {
        Self::new(pairs)
    }
}
