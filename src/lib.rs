//! Declarative request-header admission policies.
//!
//! This crate decides whether an inbound HTTP request's headers satisfy a
//! configured policy, and if not, what denial the pipeline should send:
//! - **Rules**: one per header, comparing the observed value against
//!   configured values by equality, substring or regular expression
//! - **Match types**: `all`, `one` or `none`, applied across a rule's values
//!   and again across the policy's rules
//! - **Fail closed**: broken patterns never match and bad configuration is
//!   rejected before the first request
//!
//! # Core Types
//!
//! - [`PolicyConfig`]: Deserializable policy document
//! - [`PolicyEvaluator`]: Validated, immutable policy shared across requests
//! - [`HeaderRule`]: Compiled policy for a single header
//! - [`Decision`]: Per-request admit/deny outcome with denial attributes
//! - [`web::HeaderSource`]: Read-only header view the evaluator consumes
//!
//! # Examples
//!
//! ```
//! use header_policy::{PolicyEvaluator, web::RequestHeaders};
//!
//! let policy = PolicyEvaluator::from_yaml_str("example", r#"
//! matchtype: one
//! headers:
//!   - name: Content-Language
//!     matchtype: one
//!     values: ["de-DE", "de-AT"]
//!   - name: Content-Type
//!     matchtype: one
//!     contains: true
//!     values: ["json"]
//! "#).expect("valid policy");
//!
//! let request = RequestHeaders::new().with_header("Content-Type", "application/json");
//! assert!(policy.decide(&request).is_admitted());
//!
//! let request = RequestHeaders::new().with_header("Content-Language", "fr-FR");
//! assert!(policy.decide(&request).is_denied());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::print_stdout, clippy::print_stderr, clippy::dbg_macro)]

pub mod config;
mod decision;
mod decode;
mod error;
mod evaluator;
mod logging;
mod match_type;
mod predicate;
mod rule;
pub mod validate;
pub mod web;

pub use config::{ErrorConfig, HeaderRuleConfig, PolicyConfig};
pub use decision::Decision;
pub use decode::{query_unescape, DecodeError};
pub use error::{ConfigError, ConfigErrorKind, Error};
pub use evaluator::PolicyEvaluator;
pub use logging::RuleTrace;
pub use match_type::{MatchType, Strategy};
pub use predicate::ValuePredicate;
pub use rule::HeaderRule;
