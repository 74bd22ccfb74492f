use std::fmt;

const PREFIX: &str = "header-policy: configuration incorrect";

/// Errors that can occur while building a header policy.
#[derive(Debug)]
pub enum Error {
    /// The policy configuration was rejected by validation
    Config(ConfigError),
    /// The policy file could not be read
    Io(std::io::Error),
    /// The policy document could not be deserialized
    Parse(serde_yml::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Config(e) => write!(f, "{}", e),
            Error::Io(e) => write!(f, "failed to read policy file: {}", e),
            Error::Parse(e) => write!(f, "failed to parse policy document: {}", e),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Config(e) => Some(e),
            Error::Io(e) => Some(e),
            Error::Parse(e) => Some(e),
        }
    }
}

impl From<ConfigError> for Error {
    fn from(e: ConfigError) -> Self {
        Error::Config(e)
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error::Io(e)
    }
}

impl From<serde_yml::Error> for Error {
    fn from(e: serde_yml::Error) -> Self {
        Error::Parse(e)
    }
}

/// A construction-time configuration error.
///
/// Raised once, before any request is evaluated. A policy that fails
/// validation never comes into existence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError {
    kind: ConfigErrorKind,
    message: String,
}

impl ConfigError {
    /// Creates a new configuration error.
    pub fn new(kind: ConfigErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub(crate) fn missing_rules() -> Self {
        Self::new(ConfigErrorKind::MissingRules, format!("{}, missing headers", PREFIX))
    }

    pub(crate) fn missing_header_name() -> Self {
        Self::new(
            ConfigErrorKind::MissingHeaderName,
            format!("{}, missing header name", PREFIX),
        )
    }

    pub(crate) fn invalid_all_without_strategy(header: &str) -> Self {
        Self::new(
            ConfigErrorKind::InvalidAllWithoutStrategy,
            format!(
                "{} for header {}, match-all can only be used in combination with 'contains' or 'regex'",
                PREFIX, header
            ),
        )
    }

    pub(crate) fn missing_match_type(header: &str) -> Self {
        Self::new(
            ConfigErrorKind::MissingMatchType,
            format!("{}, missing match type configuration for header {}", PREFIX, header),
        )
    }

    pub(crate) fn missing_values() -> Self {
        Self::new(
            ConfigErrorKind::MissingValues,
            format!("{}, missing header values", PREFIX),
        )
    }

    pub(crate) fn empty_value() -> Self {
        Self::new(ConfigErrorKind::EmptyValue, format!("{}, empty value found", PREFIX))
    }

    pub(crate) fn invalid_status_code(code: u16) -> Self {
        Self::new(
            ConfigErrorKind::InvalidStatusCode,
            format!("{}, invalid error status code {}", PREFIX, code),
        )
    }

    /// Returns the error kind.
    pub fn kind(&self) -> ConfigErrorKind {
        self.kind
    }

    /// Returns the operator-facing message.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ConfigError {}

/// The kind of configuration error, in validation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigErrorKind {
    /// No header rules were configured
    MissingRules,
    /// A rule has an empty or whitespace-only header name
    MissingHeaderName,
    /// A rule uses match type `all` with plain equality
    InvalidAllWithoutStrategy,
    /// A rule has no match type
    MissingMatchType,
    /// A rule has no values
    MissingValues,
    /// A rule has an empty or whitespace-only value
    EmptyValue,
    /// The denial status code is not a valid HTTP status
    InvalidStatusCode,
}

impl fmt::Display for ConfigErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigErrorKind::MissingRules => write!(f, "missing rules"),
            ConfigErrorKind::MissingHeaderName => write!(f, "missing header name"),
            ConfigErrorKind::InvalidAllWithoutStrategy => {
                write!(f, "match-all without contains or regex")
            }
            ConfigErrorKind::MissingMatchType => write!(f, "missing match type"),
            ConfigErrorKind::MissingValues => write!(f, "missing values"),
            ConfigErrorKind::EmptyValue => write!(f, "empty value"),
            ConfigErrorKind::InvalidStatusCode => write!(f, "invalid status code"),
        }
    }
}
