use regex::Regex;

use crate::logging::RuleTrace;
use crate::match_type::Strategy;

impl Strategy {
    /// Compares one observed value against one configured value.
    ///
    /// This is the uncached form: a regex is compiled on every call. A pattern
    /// that fails to compile never matches.
    ///
    /// # Examples
    ///
    /// ```
    /// use header_policy::Strategy;
    ///
    /// assert!(Strategy::Equals.evaluate("de-DE", "de-DE"));
    /// assert!(Strategy::Contains.evaluate("de-DE", "DE"));
    /// assert!(Strategy::Regex.evaluate("de-DE", "^de"));
    /// assert!(!Strategy::Regex.evaluate("de-DE", "["));
    /// ```
    pub fn evaluate(self, observed: &str, configured: &str) -> bool {
        match self {
            Strategy::Equals => observed == configured,
            Strategy::Contains => observed.contains(configured),
            Strategy::Regex => Regex::new(configured)
                .map(|re| re.is_match(observed))
                .unwrap_or(false),
        }
    }
}

/// One configured value, prepared for a fixed strategy.
///
/// Built once when the owning rule is constructed. Regular expressions are
/// compiled at that point; a pattern that does not compile is kept as
/// permanently non-matching so the rule fails closed.
#[derive(Debug, Clone)]
pub struct ValuePredicate {
    configured: String,
    kind: PredicateKind,
}

#[derive(Debug, Clone)]
enum PredicateKind {
    Equals,
    Contains,
    Regex(Result<Regex, regex::Error>),
}

impl ValuePredicate {
    /// Prepares `configured` for comparison using `strategy`.
    pub fn new(strategy: Strategy, configured: impl Into<String>) -> Self {
        let configured = configured.into();
        let kind = match strategy {
            Strategy::Equals => PredicateKind::Equals,
            Strategy::Contains => PredicateKind::Contains,
            Strategy::Regex => {
                let compiled = Regex::new(&configured);
                if let Err(e) = &compiled {
                    tracing::warn!(
                        pattern = %configured,
                        error = %e,
                        "failed to compile header regex; treating as non-match"
                    );
                }
                PredicateKind::Regex(compiled)
            }
        };
        Self { configured, kind }
    }

    /// Returns the configured comparison string.
    pub fn configured(&self) -> &str {
        &self.configured
    }

    /// Returns the strategy this predicate was prepared for.
    pub fn strategy(&self) -> Strategy {
        match self.kind {
            PredicateKind::Equals => Strategy::Equals,
            PredicateKind::Contains => Strategy::Contains,
            PredicateKind::Regex(_) => Strategy::Regex,
        }
    }

    /// Returns `false` if this is a regex predicate whose pattern did not compile.
    pub fn is_usable(&self) -> bool {
        !matches!(self.kind, PredicateKind::Regex(Err(_)))
    }

    /// Tests the observed header value.
    pub fn evaluate(&self, observed: &str) -> bool {
        self.evaluate_traced(observed, RuleTrace::new("", false))
    }

    pub(crate) fn evaluate_traced(&self, observed: &str, trace: RuleTrace<'_>) -> bool {
        match &self.kind {
            PredicateKind::Equals => observed == self.configured,
            PredicateKind::Contains => observed.contains(self.configured.as_str()),
            PredicateKind::Regex(Ok(re)) => re.is_match(observed),
            PredicateKind::Regex(Err(e)) => {
                trace.regex_error(&self.configured, e);
                false
            }
        }
    }
}
