//! Read-only header access for policy evaluation.

use std::borrow::Cow;

use http::{HeaderMap, Request};

/// A read-only view of a request's header multimap.
///
/// Implement this for framework-specific request types to evaluate them
/// directly. Lookups are case-insensitive and return the first value when a
/// header repeats.
///
/// # Examples
///
/// ```
/// use std::borrow::Cow;
/// use header_policy::web::HeaderSource;
///
/// struct SingleHeader(&'static str, &'static str);
///
/// impl HeaderSource for SingleHeader {
///     fn header_value(&self, name: &str) -> Option<Cow<'_, str>> {
///         self.0.eq_ignore_ascii_case(name).then(|| Cow::Borrowed(self.1))
///     }
/// }
///
/// let h = SingleHeader("Content-Type", "application/json");
/// assert_eq!(h.header_value("content-type").as_deref(), Some("application/json"));
/// ```
pub trait HeaderSource {
    /// Returns the first value of `name`, or `None` if the header is absent.
    fn header_value(&self, name: &str) -> Option<Cow<'_, str>>;
}

impl HeaderSource for HeaderMap {
    fn header_value(&self, name: &str) -> Option<Cow<'_, str>> {
        // Opaque bytes are compared as lossy UTF-8 rather than dropped.
        self.get(name)
            .map(|value| String::from_utf8_lossy(value.as_bytes()))
    }
}

impl<B> HeaderSource for Request<B> {
    fn header_value(&self, name: &str) -> Option<Cow<'_, str>> {
        self.headers().header_value(name)
    }
}

impl<T: HeaderSource + ?Sized> HeaderSource for &T {
    fn header_value(&self, name: &str) -> Option<Cow<'_, str>> {
        (**self).header_value(name)
    }
}
