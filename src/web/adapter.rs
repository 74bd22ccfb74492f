//! Owned header collection for callers without an `http::HeaderMap`.

use std::borrow::Cow;

use super::HeaderSource;

/// A case-insensitive, insertion-ordered header multimap.
///
/// `RequestHeaders` is the framework-agnostic way to hand headers to a
/// [`PolicyEvaluator`](crate::PolicyEvaluator): build it from whatever the
/// host pipeline exposes, then evaluate it.
///
/// # Examples
///
/// ```
/// use header_policy::web::{HeaderSource, RequestHeaders};
///
/// let mut headers = RequestHeaders::new();
/// headers.add_header("Content-Language", "de-DE");
/// headers.add_header("content-language", "de-AT");
///
/// assert_eq!(headers.header_value("CONTENT-LANGUAGE").as_deref(), Some("de-DE"));
/// assert_eq!(headers.len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestHeaders {
    entries: Vec<(String, String)>,
}

impl RequestHeaders {
    /// Creates an empty header collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a header. Earlier values for the same name take precedence.
    pub fn add_header(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.entries.push((name.into(), value.into()));
    }

    /// Builder-style [`add_header`](Self::add_header).
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.add_header(name, value);
        self
    }

    /// Returns every value recorded for `name`, in insertion order.
    pub fn values<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.entries
            .iter()
            .filter(move |(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// Returns the number of header entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no headers were recorded.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl HeaderSource for RequestHeaders {
    fn header_value(&self, name: &str) -> Option<Cow<'_, str>> {
        self.entries
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| Cow::Borrowed(v.as_str()))
    }
}

impl<K, V> FromIterator<(K, V)> for RequestHeaders
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
