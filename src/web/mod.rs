//! Web framework integration surface.
//!
//! This module is the boundary between HTTP pipelines and the policy engine:
//! - [`HeaderSource`]: read-only header access, implemented for
//!   `http::HeaderMap`, `http::Request<B>` and [`RequestHeaders`]
//! - [`RequestHeaders`]: an owned header multimap for pipelines that do not
//!   use the `http` crate
//! - [`guard`] / [`deny_response`]: turning a decision into the response the
//!   pipeline writes
//!
//! The policy itself never writes responses; continuing the request or
//! short-circuiting it stays with the caller.
//!
//! # Example Flow
//!
//! ```ignore
//! // At startup
//! let policy = Arc::new(PolicyEvaluator::new("validate-headers", config)?);
//!
//! // Per request, in the framework's middleware
//! if let Err(denial) = guard(&policy, &request) {
//!     return denial;
//! }
//! next.call(request).await
//! ```

mod adapter;
mod extract;
mod middleware;

pub use adapter::RequestHeaders;
pub use extract::HeaderSource;
pub use middleware::{deny_response, guard};
