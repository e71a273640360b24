//! Request model read by generated extractors

use std::collections::HashMap;

/// Read access to the three value channels of an incoming request.
///
/// Implement this for the request type of your web framework. Each method
/// returns the first value for `key`, or `None` when the request carries no
/// such value.
pub trait RequestSource {
    /// Look up a URL query parameter
    fn query(&self, key: &str) -> Option<&str>;

    /// Look up a header; implementations should match names case-insensitively
    fn header(&self, key: &str) -> Option<&str>;

    /// Look up a form field, falling back to the query string where the
    /// framework merges the two
    fn form_value(&self, key: &str) -> Option<&str>;
}

impl<T: RequestSource + ?Sized> RequestSource for &T {
    fn query(&self, key: &str) -> Option<&str> {
        (**self).query(key)
    }

    fn header(&self, key: &str) -> Option<&str> {
        (**self).header(key)
    }

    fn form_value(&self, key: &str) -> Option<&str> {
        (**self).form_value(key)
    }
}

/// In-memory request values, already decoded.
///
/// Useful for adapting frameworks that expose their own parsed maps, and for
/// tests. When a key is inserted twice the first value wins, matching how
/// query strings with repeated keys are usually read.
#[derive(Debug, Clone, Default)]
pub struct RequestValues {
    query: HashMap<String, String>,
    headers: HashMap<String, String>,
    form: HashMap<String, String>,
}

impl RequestValues {
    /// Create an empty set of request values
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a query parameter
    pub fn with_query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.entry(key.into()).or_insert_with(|| value.into());
        self
    }

    /// Add a header; the name is stored lower-cased
    pub fn with_header(mut self, name: impl AsRef<str>, value: impl Into<String>) -> Self {
        self.headers
            .entry(name.as_ref().to_ascii_lowercase())
            .or_insert_with(|| value.into());
        self
    }

    /// Add a form field
    pub fn with_form(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.form.entry(key.into()).or_insert_with(|| value.into());
        self
    }
}

impl RequestSource for RequestValues {
    fn query(&self, key: &str) -> Option<&str> {
        self.query.get(key).map(String::as_str)
    }

    fn header(&self, key: &str) -> Option<&str> {
        self.headers
            .get(&key.to_ascii_lowercase())
            .map(String::as_str)
    }

    fn form_value(&self, key: &str) -> Option<&str> {
        self.form
            .get(key)
            .or_else(|| self.query.get(key))
            .map(String::as_str)
    }
}
