use http::StatusCode;

/// The admit/deny outcome for one request.
///
/// Created fresh by [`PolicyEvaluator::decide`](crate::PolicyEvaluator::decide)
/// and borrowed from the evaluator, so it is cheap to produce per request.
/// The denial attributes are always populated; the pipeline only uses them
/// when the request is denied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decision<'a> {
    admit: bool,
    status: StatusCode,
    message: &'a str,
}

impl<'a> Decision<'a> {
    pub(crate) fn new(admit: bool, status: StatusCode, message: &'a str) -> Self {
        Self {
            admit,
            status,
            message,
        }
    }

    /// Returns `true` if the request may continue.
    pub fn is_admitted(&self) -> bool {
        self.admit
    }

    /// Returns `true` if the request must be short-circuited.
    pub fn is_denied(&self) -> bool {
        !self.admit
    }

    /// Returns the configured denial status code.
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// Returns the configured denial message.
    pub fn message(&self) -> &'a str {
        self.message
    }

    /// Returns the denial status and message, or `None` when admitted.
    pub fn denial(&self) -> Option<(StatusCode, &'a str)> {
        (!self.admit).then_some((self.status, self.message))
    }
}
