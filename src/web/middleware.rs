//! Request guard for `http`-based pipelines.
//!
//! The evaluator never touches a response. These helpers turn a denied
//! [`Decision`] into the plain-text response the pipeline should write, so
//! a middleware layer reduces to:
//!
//! ```text
//! HTTP Request
//!   ↓
//! guard(&policy, &request)
//!   ├─ Ok(())        → call the next handler
//!   └─ Err(response) → write the denial and stop
//! ```

use http::header::{HeaderValue, CONTENT_TYPE, X_CONTENT_TYPE_OPTIONS};
use http::{Request, Response};

use crate::decision::Decision;
use crate::evaluator::PolicyEvaluator;

const TEXT_PLAIN: &str = "text/plain; charset=utf-8";

/// Builds the denial response for `decision`, or `None` when it admits.
///
/// The body is the configured message followed by a newline.
///
/// # Examples
///
/// ```
/// use header_policy::{PolicyEvaluator, web::{deny_response, RequestHeaders}};
///
/// let policy = PolicyEvaluator::from_yaml_str("docs", r#"
/// error: { statuscode: 404, message: Not Found }
/// headers:
///   - { name: X-Tenant, matchtype: one, values: [acme] }
/// "#).unwrap();
///
/// let decision = policy.decide(&RequestHeaders::new());
/// let response = deny_response(&decision).expect("denied");
/// assert_eq!(response.status().as_u16(), 404);
/// assert_eq!(response.body(), "Not Found\n");
/// ```
pub fn deny_response(decision: &Decision<'_>) -> Option<Response<String>> {
    let (status, message) = decision.denial()?;

    let mut response = Response::new(format!("{}\n", message));
    *response.status_mut() = status;
    let headers = response.headers_mut();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static(TEXT_PLAIN));
    headers.insert(X_CONTENT_TYPE_OPTIONS, HeaderValue::from_static("nosniff"));
    Some(response)
}

/// Evaluates `request` and returns the denial response if it is rejected.
///
/// # Errors
///
/// Returns `Err(response)` carrying the configured status and message when
/// the policy denies the request.
///
/// # Examples
///
/// ```
/// use header_policy::{PolicyEvaluator, web::guard};
/// use http::Request;
///
/// let policy = PolicyEvaluator::from_yaml_str("docs", r#"
/// headers:
///   - { name: Content-Type, matchtype: one, values: [application/json] }
/// "#).unwrap();
///
/// let ok = Request::builder().header("content-type", "application/json").body(()).unwrap();
/// assert!(guard(&policy, &ok).is_ok());
///
/// let denied = Request::builder().body(()).unwrap();
/// assert_eq!(guard(&policy, &denied).unwrap_err().status().as_u16(), 403);
/// ```
pub fn guard<B>(policy: &PolicyEvaluator, request: &Request<B>) -> Result<(), Response<String>> {
    match deny_response(&policy.decide(request)) {
        Some(response) => Err(response),
        None => Ok(()),
    }
}
