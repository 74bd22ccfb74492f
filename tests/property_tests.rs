//! Property tests for header-policy.
//!
//! These tests check the combination laws of rules and policies against a
//! direct restatement of the matching semantics.

use header_policy::web::RequestHeaders;
use header_policy::{
    validate, ConfigErrorKind, HeaderRuleConfig, PolicyConfig, PolicyEvaluator,
};
use proptest::prelude::*;

const HEADER: &str = "X-Probe";

fn rule_config(matchtype: &str, values: Vec<String>) -> HeaderRuleConfig {
    HeaderRuleConfig {
        name: HEADER.to_string(),
        matchtype: matchtype.to_string(),
        values,
        ..HeaderRuleConfig::default()
    }
}

fn single_rule_verdict(rule: HeaderRuleConfig, observed: Option<&str>) -> bool {
    let policy = PolicyEvaluator::new(
        "proptest",
        PolicyConfig {
            headers: vec![rule],
            ..PolicyConfig::default()
        },
    )
    .expect("valid policy");

    let mut headers = RequestHeaders::new();
    if let Some(value) = observed {
        headers.add_header(HEADER, value);
    }
    policy.rules()[0].evaluate(&headers)
}

// Strategy: short lowercase values so matches are common
fn arb_values() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(prop::string::string_regex("[a-e]{1,2}").unwrap(), 1..4)
}

fn arb_observed() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-e]{1,6}").unwrap()
}

proptest! {
    /// Property: `all` with contains/regex passes iff every value matches
    #[test]
    fn proptest_all_requires_every_value(
        values in arb_values(),
        observed in arb_observed(),
        use_regex in any::<bool>()
    ) {
        let mut rule = rule_config("all", values.clone());
        rule.contains = !use_regex;
        rule.regex = use_regex;

        let expected = values.iter().all(|v| observed.contains(v.as_str()));
        prop_assert_eq!(single_rule_verdict(rule, Some(&observed)), expected);
    }

    /// Property: `one` with equality passes iff some value equals the header
    #[test]
    fn proptest_one_needs_a_single_value(
        values in arb_values(),
        observed in prop::string::string_regex("[a-e]{1,2}").unwrap(),
        required in any::<bool>()
    ) {
        let mut rule = rule_config("one", values.clone());
        rule.required = required;

        let expected = values.iter().any(|v| *v == observed);
        prop_assert_eq!(single_rule_verdict(rule, Some(&observed)), expected);
    }

    /// Property: `none` passes iff nothing matches and absence is allowed
    #[test]
    fn proptest_none_rejects_matches_and_required_absence(
        values in arb_values(),
        observed in prop::option::of(arb_observed()),
        required in any::<bool>(),
        contains in any::<bool>()
    ) {
        let mut rule = rule_config("none", values.clone());
        rule.required = required;
        rule.contains = contains;

        let expected = match &observed {
            Some(o) => !values.iter().any(|v| {
                if contains { o.contains(v.as_str()) } else { o == v }
            }),
            None => !required,
        };
        prop_assert_eq!(single_rule_verdict(rule, observed.as_deref()), expected);
    }

    /// Property: an optional, absent header admits under `none` and denies under `all`/`one`
    #[test]
    fn proptest_optional_absent_header(values in arb_values()) {
        let mut none = rule_config("none", values.clone());
        none.required = false;
        let mut one = rule_config("one", values.clone());
        one.required = false;
        let mut all = rule_config("all", values);
        all.required = false;
        all.contains = true;

        prop_assert!(single_rule_verdict(none, None));
        prop_assert!(!single_rule_verdict(one, None));
        prop_assert!(!single_rule_verdict(all, None));
    }

    /// Property: top-level `one` admits iff any rule passes, regardless of order
    #[test]
    fn proptest_top_level_one_is_order_independent(
        rule_values in prop::collection::vec(("[A-D]", arb_values()), 1..5),
        present in prop::collection::vec(("[A-D]", arb_observed()), 0..5)
    ) {
        let rules: Vec<HeaderRuleConfig> = rule_values
            .into_iter()
            .map(|(suffix, values)| HeaderRuleConfig {
                name: format!("X-{}", suffix),
                ..rule_config("one", values)
            })
            .collect();
        let headers: RequestHeaders = present
            .into_iter()
            .map(|(suffix, value)| (format!("X-{}", suffix), value))
            .collect();

        let build = |rules: Vec<HeaderRuleConfig>| {
            PolicyEvaluator::new(
                "proptest",
                PolicyConfig {
                    matchtype: "one".to_string(),
                    headers: rules,
                    ..PolicyConfig::default()
                },
            )
            .expect("valid policy")
        };

        let forward = build(rules.clone());
        let mut reversed_rules = rules;
        reversed_rules.reverse();
        let reversed = build(reversed_rules);

        let any_rule = forward.rules().iter().any(|r| r.evaluate(&headers));
        prop_assert_eq!(forward.decide(&headers).is_admitted(), any_rule);
        prop_assert_eq!(reversed.decide(&headers).is_admitted(), any_rule);
    }

    /// Property: validation reports the first defect in the documented order
    #[test]
    fn proptest_validation_order(
        blank_name in any::<bool>(),
        matchtype in prop_oneof![Just(""), Just("all"), Just("one"), Just("none")],
        strategy in any::<bool>(),
        no_values in any::<bool>(),
        blank_value in any::<bool>()
    ) {
        let values = if no_values {
            Vec::new()
        } else if blank_value {
            vec!["ok".to_string(), "  ".to_string()]
        } else {
            vec!["ok".to_string()]
        };
        let rule = HeaderRuleConfig {
            name: if blank_name { " ".to_string() } else { HEADER.to_string() },
            contains: strategy,
            ..rule_config(matchtype, values)
        };

        let expected = if blank_name {
            Some(ConfigErrorKind::MissingHeaderName)
        } else if matchtype == "all" && !strategy {
            Some(ConfigErrorKind::InvalidAllWithoutStrategy)
        } else if matchtype.is_empty() {
            Some(ConfigErrorKind::MissingMatchType)
        } else if no_values {
            Some(ConfigErrorKind::MissingValues)
        } else if blank_value {
            Some(ConfigErrorKind::EmptyValue)
        } else {
            None
        };

        let config = PolicyConfig {
            headers: vec![rule],
            ..PolicyConfig::default()
        };
        prop_assert_eq!(validate::first_failure(&config), expected);
    }

    /// Property: the debug flag never changes a verdict
    #[test]
    fn proptest_debug_is_side_channel_only(
        values in arb_values(),
        observed in prop::option::of(arb_observed()),
        matchtype in prop_oneof![Just("one"), Just("none"), Just("all")],
        regex in any::<bool>()
    ) {
        let mut quiet = rule_config(matchtype, values);
        quiet.regex = regex;
        quiet.contains = !regex;
        let mut traced = quiet.clone();
        traced.debug = true;

        prop_assert_eq!(
            single_rule_verdict(quiet, observed.as_deref()),
            single_rule_verdict(traced, observed.as_deref())
        );
    }
}

#[test]
fn empty_policy_is_first_failure() {
    assert_eq!(
        validate::first_failure(&PolicyConfig::default()),
        Some(ConfigErrorKind::MissingRules)
    );
}
