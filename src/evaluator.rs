use http::StatusCode;

use crate::config::PolicyConfig;
use crate::decision::Decision;
use crate::error::{ConfigError, Error};
use crate::match_type::MatchType;
use crate::rule::HeaderRule;
use crate::validate::validate;
use crate::web::HeaderSource;

/// The request-admission policy.
///
/// `PolicyEvaluator` is the only way to obtain [`HeaderRule`]s. It validates
/// the configuration once, compiles every rule, and is then immutable: share
/// it behind an `Arc` and call [`decide`](Self::decide) from any number of
/// threads.
///
/// # Examples
///
/// ```
/// use header_policy::{PolicyEvaluator, web::RequestHeaders};
///
/// let policy = PolicyEvaluator::from_yaml_str("lang-filter", r#"
/// headers:
///   - name: Content-Language
///     matchtype: none
///     values: ["de-DE", "de-AT"]
/// "#).expect("valid policy");
///
/// let ok = RequestHeaders::new().with_header("Content-Language", "nl-NL");
/// assert!(policy.decide(&ok).is_admitted());
///
/// let blocked = RequestHeaders::new().with_header("Content-Language", "de-DE");
/// let decision = policy.decide(&blocked);
/// assert!(decision.is_denied());
/// assert_eq!(decision.status().as_u16(), 403);
/// assert_eq!(decision.message(), "Not allowed");
/// ```
#[derive(Debug, Clone)]
pub struct PolicyEvaluator {
    name: String,
    rules: Vec<HeaderRule>,
    match_type: MatchType,
    status: StatusCode,
    message: String,
}

impl PolicyEvaluator {
    /// Validates `config` and builds the evaluator.
    ///
    /// `name` identifies this policy instance in logs.
    ///
    /// # Errors
    ///
    /// Returns the first [`ConfigError`] found by validation.
    pub fn new(name: impl Into<String>, mut config: PolicyConfig) -> Result<Self, ConfigError> {
        let name = name.into();
        let status = validate(&mut config)?;

        let match_type = MatchType::parse(&config.matchtype).unwrap_or_else(|| {
            tracing::warn!(
                policy = %name,
                matchtype = %config.matchtype,
                "unrecognized policy match type, treating as 'all'"
            );
            MatchType::All
        });

        let rules: Vec<HeaderRule> = config.headers.iter().map(HeaderRule::compile).collect();

        tracing::info!(
            policy = %name,
            rules = rules.len(),
            match_type = %match_type,
            status = status.as_u16(),
            "header policy ready"
        );

        Ok(Self {
            name,
            rules,
            match_type,
            status,
            message: config.error.message,
        })
    }

    /// Parses a YAML policy document and builds the evaluator.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Parse`] for a malformed document and
    /// [`Error::Config`] if validation fails.
    pub fn from_yaml_str(name: impl Into<String>, yaml: &str) -> Result<Self, Error> {
        let config = PolicyConfig::from_yaml_str(yaml)?;
        Ok(Self::new(name, config)?)
    }

    /// Returns the policy instance name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the compiled rules in evaluation order.
    pub fn rules(&self) -> &[HeaderRule] {
        &self.rules
    }

    /// Returns how rule verdicts combine.
    pub fn match_type(&self) -> MatchType {
        self.match_type
    }

    /// Evaluates a request's headers.
    ///
    /// - `All`: every rule must pass; stops at the first failure.
    /// - `One`: evaluates every rule; a single pass admits and a later
    ///   failure never revokes it.
    /// - `None`: no rule may pass; stops at the first pass.
    pub fn decide(&self, headers: &impl HeaderSource) -> Decision<'_> {
        let admit = match self.match_type {
            MatchType::All => self.rules.iter().all(|rule| rule.evaluate(headers)),
            MatchType::One => self
                .rules
                .iter()
                .fold(false, |admitted, rule| rule.evaluate(headers) || admitted),
            MatchType::None => !self.rules.iter().any(|rule| rule.evaluate(headers)),
        };

        if !admit {
            tracing::debug!(
                policy = %self.name,
                status = self.status.as_u16(),
                "request denied by header policy"
            );
        }

        Decision::new(admit, self.status, &self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::HeaderRuleConfig;
    use crate::error::ConfigErrorKind;
    use crate::web::RequestHeaders;

    fn rule(name: &str, matchtype: &str, values: &[&str]) -> HeaderRuleConfig {
        HeaderRuleConfig {
            name: name.to_string(),
            matchtype: matchtype.to_string(),
            values: values.iter().map(|v| v.to_string()).collect(),
            ..HeaderRuleConfig::default()
        }
    }

    fn two_rule_policy(matchtype: &str) -> PolicyEvaluator {
        let config = PolicyConfig {
            matchtype: matchtype.to_string(),
            headers: vec![
                rule("Content-Language", "one", &["de-DE", "de-AT"]),
                rule("Content-Type", "one", &["application/json"]),
            ],
            ..PolicyConfig::default()
        };
        PolicyEvaluator::new("test", config).expect("valid policy")
    }

    fn headers(pairs: &[(&str, &str)]) -> RequestHeaders {
        pairs.iter().copied().collect()
    }

    #[test]
    fn top_level_all_requires_every_rule() {
        let p = two_rule_policy("all");
        assert!(p
            .decide(&headers(&[("Content-Language", "de-DE"), ("Content-Type", "application/json")]))
            .is_admitted());
        assert!(p
            .decide(&headers(&[("Content-Language", "de-DE"), ("Content-Type", "application/xml")]))
            .is_denied());
        assert!(p.decide(&headers(&[("Content-Language", "de-DE")])).is_denied());
    }

    #[test]
    fn top_level_one_needs_a_single_rule() {
        let p = two_rule_policy("one");
        assert!(p
            .decide(&headers(&[("Content-Language", "de-DE"), ("Content-Type", "application/xml")]))
            .is_admitted());
        assert!(p.decide(&headers(&[("Content-Type", "application/json")])).is_admitted());
        assert!(p.decide(&headers(&[("InvalidHeader", "invalidValue")])).is_denied());
    }

    #[test]
    fn top_level_one_is_not_revoked_by_later_failure() {
        // Second rule is required and absent; the first rule already passed.
        let p = two_rule_policy("one");
        assert!(p.decide(&headers(&[("Content-Language", "de-DE")])).is_admitted());
    }

    #[test]
    fn top_level_none_admits_when_no_rule_passes() {
        let p = two_rule_policy("none");
        assert!(p.decide(&headers(&[("Content-Language", "nl-NL")])).is_admitted());
        assert!(p.decide(&headers(&[("Content-Language", "de-DE")])).is_denied());
    }

    #[test]
    fn unknown_top_level_match_type_falls_back_to_all() {
        let p = two_rule_policy("most");
        assert_eq!(p.match_type(), MatchType::All);
        assert!(p.decide(&headers(&[("Content-Language", "de-DE")])).is_denied());
    }

    #[test]
    fn denial_carries_configured_error() {
        let mut config = PolicyConfig {
            headers: vec![rule("Content-Language", "one", &["de-DE"])],
            ..PolicyConfig::default()
        };
        config.error.statuscode = 404;
        config.error.message = "Not Found".to_string();

        let p = PolicyEvaluator::new("custom-error", config).unwrap();
        let d = p.decide(&headers(&[("Content-Language", "fr-FR")]));
        assert_eq!(d.denial(), Some((StatusCode::NOT_FOUND, "Not Found")));
    }

    #[test]
    fn construction_fails_without_rules() {
        let err = PolicyEvaluator::new("empty", PolicyConfig::default()).unwrap_err();
        assert_eq!(err.kind(), ConfigErrorKind::MissingRules);
    }

    #[test]
    fn from_yaml_reports_config_errors() {
        let err = PolicyEvaluator::from_yaml_str(
            "bad",
            "headers:\n  - name: Content-Language\n    matchtype: all\n    values: [d, e]\n",
        )
        .unwrap_err();
        assert!(matches!(
            err,
            Error::Config(ref e) if e.kind() == ConfigErrorKind::InvalidAllWithoutStrategy
        ));
    }

    #[test]
    fn evaluator_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PolicyEvaluator>();
    }
}
