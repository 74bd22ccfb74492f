//! Loading a policy from YAML.
//!
//! This example shows:
//! 1. Top-level match types combining several rules
//! 2. Custom denial status and message
//! 3. Configuration errors reported before any request is served
//!
//! Run with: `cargo run --example policy_from_yaml`

use header_policy::web::RequestHeaders;
use header_policy::PolicyEvaluator;

const POLICY: &str = r#"
matchtype: one
error:
  statuscode: 404
  message: Not Found
headers:
  - name: Content-Language
    matchtype: one
    values: [de-DE, de-AT]
  - name: Content-Type
    matchtype: one
    values: [application/json]
"#;

const BROKEN: &str = r#"
headers:
  - name: Content-Language
    matchtype: one
    values: ["de-DE", "  "]
"#;

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    println!("=== Policy From YAML Example ===\n");

    let policy = match PolicyEvaluator::from_yaml_str("yaml-demo", POLICY) {
        Ok(policy) => policy,
        Err(e) => {
            eprintln!("Policy rejected: {}", e);
            return;
        }
    };

    let requests = [
        vec![("Content-Language", "de-DE"), ("Content-Type", "application/xml")],
        vec![("Content-Type", "application/json")],
        vec![("Accept", "*/*")],
    ];

    for pairs in requests {
        let headers: RequestHeaders = pairs.iter().copied().collect();
        let decision = policy.decide(&headers);
        match decision.denial() {
            None => println!("{:?} -> admitted", pairs),
            Some((status, message)) => println!("{:?} -> {} {}", pairs, status, message),
        }
    }

    println!("\n--- Broken policy ---");
    match PolicyEvaluator::from_yaml_str("broken", BROKEN) {
        Ok(_) => println!("Unexpected success"),
        Err(e) => println!("Configuration error (expected): {}", e),
    }
}
