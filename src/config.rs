//! Declarative policy schema.
//!
//! The schema mirrors the YAML an operator writes:
//!
//! ```yaml
//! matchtype: one
//! error:
//!   statuscode: 404
//!   message: Not Found
//! headers:
//!   - name: Content-Language
//!     matchtype: one
//!     values: ["de-DE", "de-AT"]
//!     required: true
//! ```
//!
//! Optional flags get their defaults during deserialization, so every
//! consumer sees plain booleans.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::match_type::Strategy;

/// Status code used for denials when none is configured.
pub const DEFAULT_STATUS_CODE: u16 = 403;

/// Message used for denials when none is configured.
pub const DEFAULT_MESSAGE: &str = "Not allowed";

/// Top-level policy configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicyConfig {
    /// How rule verdicts combine: `all`, `one` or `none`. Unrecognized values
    /// fall back to `all`.
    #[serde(default = "default_match_type", alias = "matchType")]
    pub matchtype: String,
    /// Denial response attributes.
    #[serde(default)]
    pub error: ErrorConfig,
    /// Header rules, evaluated in order.
    #[serde(default, alias = "Headers")]
    pub headers: Vec<HeaderRuleConfig>,
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self {
            matchtype: default_match_type(),
            error: ErrorConfig::default(),
            headers: Vec::new(),
        }
    }
}

impl PolicyConfig {
    /// Parses a policy from YAML.
    ///
    /// Only the document shape is checked here; rule validation happens when
    /// the evaluator is built.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Parse`] if the document does not match the schema.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, Error> {
        Ok(serde_yml::from_str(yaml)?)
    }

    /// Reads and parses a YAML policy file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the file cannot be read and [`Error::Parse`]
    /// if its contents do not match the schema.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, Error> {
        let contents = std::fs::read_to_string(path.as_ref())?;
        Self::from_yaml_str(&contents)
    }
}

/// Denial response attributes.
///
/// A status code of `0` and an empty message mean "unset" and are replaced
/// by the defaults when the evaluator is built.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorConfig {
    /// HTTP status code of the denial.
    #[serde(default, alias = "statusCode")]
    pub statuscode: u16,
    /// Plain-text body of the denial.
    #[serde(default)]
    pub message: String,
}

impl ErrorConfig {
    /// Replaces unset attributes with [`DEFAULT_STATUS_CODE`] and [`DEFAULT_MESSAGE`].
    pub fn fill_defaults(&mut self) {
        if self.statuscode == 0 {
            self.statuscode = DEFAULT_STATUS_CODE;
        }
        if self.message.is_empty() {
            self.message = DEFAULT_MESSAGE.to_string();
        }
    }
}

/// Configuration of a single header rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeaderRuleConfig {
    /// Header to inspect (case-insensitive).
    #[serde(default)]
    pub name: String,
    /// How per-value results combine: `all`, `one` or `none`.
    #[serde(default, alias = "matchType")]
    pub matchtype: String,
    /// Values to compare against.
    #[serde(default)]
    pub values: Vec<String>,
    /// Whether the header must be present.
    #[serde(default = "default_true")]
    pub required: bool,
    /// Compare by substring.
    #[serde(default)]
    pub contains: bool,
    /// Compare by regular expression.
    #[serde(default)]
    pub regex: bool,
    /// Percent-decode the observed value first.
    #[serde(default, alias = "urlDecode")]
    pub urldecode: bool,
    /// Emit per-evaluation debug events.
    #[serde(default)]
    pub debug: bool,
}

impl Default for HeaderRuleConfig {
    fn default() -> Self {
        Self {
            name: String::new(),
            matchtype: String::new(),
            values: Vec::new(),
            required: true,
            contains: false,
            regex: false,
            urldecode: false,
            debug: false,
        }
    }
}

impl HeaderRuleConfig {
    /// Returns the comparison strategy selected by the `contains`/`regex` flags.
    pub fn strategy(&self) -> Strategy {
        Strategy::from_flags(self.contains, self.regex)
    }
}

fn default_match_type() -> String {
    "all".to_string()
}

fn default_true() -> bool {
    true
}
