//! Guarding `http` requests with a shared policy.
//!
//! This example shows the middleware flow:
//! 1. Build the policy once at startup and share it
//! 2. Run `guard` for every request
//! 3. Forward admitted requests, write the denial for the rest
//!
//! Run with: `cargo run --example request_guard`

use std::sync::Arc;
use std::thread;

use header_policy::web::guard;
use header_policy::PolicyEvaluator;
use http::Request;

const POLICY: &str = r#"
headers:
  - name: X-Forwarded-Tls-Client-Cert-Info
    matchtype: all
    contains: true
    urldecode: true
    values:
      - CN=common-name
      - SAN="somkindofdomain.domain.thing.test"
"#;

fn main() {
    println!("=== Request Guard Example ===\n");

    let policy = match PolicyEvaluator::from_yaml_str("cert-guard", POLICY) {
        Ok(policy) => Arc::new(policy),
        Err(e) => {
            eprintln!("Policy rejected: {}", e);
            return;
        }
    };

    let cert_infos = [
        "CN=common-name&SAN=%22somkindofdomain.domain.thing.test%22",
        "CN=common-name",
        "CN=common-name&SAN=%22somkindofdomain.domain.thing.test%22&UNKNOWN=unknown",
    ];

    let handles: Vec<_> = cert_infos
        .into_iter()
        .map(|info| {
            let policy = Arc::clone(&policy);
            thread::spawn(move || {
                let request = Request::builder()
                    .uri("/")
                    .header("X-Forwarded-Tls-Client-Cert-Info", info)
                    .body(());
                let outcome = match request {
                    Ok(request) => match guard(&policy, &request) {
                        Ok(()) => "forwarded to next handler".to_string(),
                        Err(denial) => format!("{} {:?}", denial.status(), denial.body()),
                    },
                    Err(e) => format!("invalid request: {}", e),
                };
                (info, outcome)
            })
        })
        .collect();

    for handle in handles {
        if let Ok((info, outcome)) = handle.join() {
            println!("{}\n  -> {}", info, outcome);
        }
    }
}
