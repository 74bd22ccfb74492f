use std::fmt;

/// Per-rule diagnostic side channel.
///
/// `RuleTrace` is obtained from a [`HeaderRule`](crate::HeaderRule) while it
/// evaluates. When the rule was configured with `debug: true`, each call emits
/// a `tracing` debug event tagged with the header name; otherwise every call is
/// a no-op. Nothing here can influence a verdict.
///
/// Output goes through whatever subscriber the host installed, so no lock is
/// taken on the evaluation path by this crate.
#[derive(Debug, Clone, Copy)]
pub struct RuleTrace<'a> {
    header: &'a str,
    enabled: bool,
}

impl<'a> RuleTrace<'a> {
    /// Creates a trace for the given header.
    pub(crate) fn new(header: &'a str, enabled: bool) -> Self {
        Self { header, enabled }
    }

    /// Returns the header name this trace is tagged with.
    pub fn header(&self) -> &str {
        self.header
    }

    /// Returns whether events are emitted.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Records the inputs of a predicate run.
    pub fn validating(&self, strategy: impl fmt::Display, observed: &str, values: &[String]) {
        if self.enabled {
            tracing::debug!(
                header = %self.header,
                %strategy,
                observed,
                ?values,
                "validating header"
            );
        }
    }

    /// Records that the header was absent or empty.
    pub fn absent(&self, required: bool) {
        if self.enabled {
            tracing::debug!(header = %self.header, required, "header absent or empty");
        }
    }

    /// Records a regular expression that could not be used.
    pub fn regex_error(&self, pattern: &str, error: impl fmt::Display) {
        if self.enabled {
            tracing::debug!(header = %self.header, pattern, %error, "regex unavailable, treating as no match");
        }
    }

    /// Records a percent-decoding failure.
    pub fn decode_error(&self, raw: &str, error: impl fmt::Display) {
        if self.enabled {
            tracing::debug!(header = %self.header, raw, %error, "url decode failed, using raw value");
        }
    }

    /// Records the header verdict.
    pub fn verdict(&self, matched: usize, total: usize, verdict: bool) {
        if self.enabled {
            tracing::debug!(header = %self.header, matched, total, verdict, "header verdict");
        }
    }
}
