use std::borrow::Cow;

use crate::config::HeaderRuleConfig;
use crate::decode::query_unescape;
use crate::logging::RuleTrace;
use crate::match_type::{MatchType, Strategy};
use crate::predicate::ValuePredicate;
use crate::web::HeaderSource;

/// A compiled, immutable policy for one request header.
///
/// Built from a validated [`HeaderRuleConfig`] by
/// [`PolicyEvaluator`](crate::PolicyEvaluator). Safe to share across threads.
///
/// # Evaluation
///
/// A missing header and a header with an empty value are treated the same.
///
/// - Header present: each configured value is tested and the number of
///   matches is combined with the rule's [`MatchType`].
/// - Header absent: no predicates run. `All` and `One` rules are not
///   satisfied. A `None` rule is satisfied only when the header is optional.
#[derive(Debug, Clone)]
pub struct HeaderRule {
    name: String,
    predicates: Vec<ValuePredicate>,
    values: Vec<String>,
    match_type: MatchType,
    strategy: Strategy,
    required: bool,
    url_decode: bool,
    debug: bool,
}

impl HeaderRule {
    /// Compiles a rule that has already passed validation.
    pub(crate) fn compile(config: &HeaderRuleConfig) -> Self {
        let name = config.name.trim().to_string();
        let match_type = MatchType::parse(&config.matchtype).unwrap_or_else(|| {
            tracing::warn!(
                header = %name,
                matchtype = %config.matchtype,
                "unrecognized rule match type, treating as 'one'"
            );
            MatchType::One
        });
        let strategy = config.strategy();
        let predicates = config
            .values
            .iter()
            .map(|v| ValuePredicate::new(strategy, v.clone()))
            .collect();

        Self {
            name,
            predicates,
            values: config.values.clone(),
            match_type,
            strategy,
            required: config.required,
            url_decode: config.urldecode,
            debug: config.debug,
        }
    }

    /// Returns the inspected header name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the configured values in order.
    pub fn values(&self) -> &[String] {
        &self.values
    }

    /// Returns how per-value results combine.
    pub fn match_type(&self) -> MatchType {
        self.match_type
    }

    /// Returns the comparison strategy.
    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// Returns whether the header must be present.
    pub fn is_required(&self) -> bool {
        self.required
    }

    /// Returns whether observed values are percent-decoded first.
    pub fn url_decode(&self) -> bool {
        self.url_decode
    }

    /// Computes the header verdict for one request.
    pub fn evaluate(&self, headers: &impl HeaderSource) -> bool {
        let trace = RuleTrace::new(&self.name, self.debug);
        let raw = headers.header_value(&self.name).unwrap_or(Cow::Borrowed(""));
        let observed = if self.url_decode {
            match query_unescape(&raw) {
                Ok(decoded) => Cow::Owned(decoded),
                Err(e) => {
                    trace.decode_error(&raw, &e);
                    raw
                }
            }
        } else {
            raw
        };

        if observed.is_empty() {
            trace.absent(self.required);
            let verdict = match self.match_type {
                MatchType::None => !self.required,
                MatchType::All | MatchType::One => false,
            };
            trace.verdict(0, self.predicates.len(), verdict);
            return verdict;
        }

        trace.validating(self.strategy, &observed, &self.values);
        let matched = self
            .predicates
            .iter()
            .filter(|p| p.evaluate_traced(&observed, trace))
            .count();
        let verdict = self.match_type.tally(matched, self.predicates.len());
        trace.verdict(matched, self.predicates.len(), verdict);
        verdict
    }
}
