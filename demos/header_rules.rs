//! Header rule matching demonstration.
//!
//! This example shows how a single rule combines per-value results:
//! 1. `none` rejects listed values and requires the header by default
//! 2. `all` with `contains` needs every value present
//! 3. `one` with `regex` needs a single pattern to match
//!
//! Run with: `cargo run --example header_rules`

use header_policy::web::RequestHeaders;
use header_policy::{HeaderRuleConfig, PolicyConfig, PolicyEvaluator};

fn rule(matchtype: &str, values: &[&str]) -> HeaderRuleConfig {
    HeaderRuleConfig {
        name: "Content-Language".to_string(),
        matchtype: matchtype.to_string(),
        values: values.iter().map(|v| v.to_string()).collect(),
        ..HeaderRuleConfig::default()
    }
}

fn show(title: &str, rule: HeaderRuleConfig, observed: &[Option<&str>]) {
    println!("--- {} ---", title);
    let config = PolicyConfig {
        headers: vec![rule],
        ..PolicyConfig::default()
    };
    let policy = match PolicyEvaluator::new("demo", config) {
        Ok(policy) => policy,
        Err(e) => {
            println!("Rejected at construction: {}\n", e);
            return;
        }
    };

    for value in observed {
        let mut headers = RequestHeaders::new();
        if let Some(v) = value {
            headers.add_header("Content-Language", *v);
        }
        let verdict = if policy.decide(&headers).is_admitted() {
            "admit"
        } else {
            "deny"
        };
        println!("Content-Language: {:<8} -> {}", value.unwrap_or("<absent>"), verdict);
    }
    println!();
}

fn main() {
    println!("=== Header Rules Example ===\n");

    show(
        "none, required",
        rule("none", &["de-DE", "de-AT"]),
        &[Some("nl-NL"), Some("de-DE"), None],
    );

    let mut optional = rule("none", &["de-DE", "de-AT"]);
    optional.required = false;
    show("none, optional", optional, &[Some("nl-NL"), Some("de-DE"), None]);

    let mut all = rule("all", &["d", "e"]);
    all.contains = true;
    show("all, contains", all, &[Some("de-DE"), Some("nl-NL")]);

    let mut one = rule("one", &["^de-AT$", "^de-DE$"]);
    one.regex = true;
    show("one, regex", one, &[Some("de-DE"), Some("fr-FR")]);

    show("all, equality", rule("all", &["d", "e"]), &[Some("de-DE")]);
}
