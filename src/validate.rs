//! Construction-time policy validation.
//!
//! Checks run in a fixed order and stop at the first failure:
//!
//! 1. at least one rule ([`MissingRules`](ConfigErrorKind::MissingRules))
//! 2. denial defaults are filled in
//! 3. per rule, in order: header name, `all` without `contains`/`regex`,
//!    match type, values present, no blank value
//! 4. the denial status code is a valid HTTP status

use http::StatusCode;

use crate::config::{HeaderRuleConfig, PolicyConfig};
use crate::error::{ConfigError, ConfigErrorKind};
use crate::match_type::MatchType;

/// Validates `config` in place, filling denial defaults.
///
/// # Errors
///
/// Returns the first [`ConfigError`] encountered.
pub fn validate(config: &mut PolicyConfig) -> Result<StatusCode, ConfigError> {
    if config.headers.is_empty() {
        return Err(ConfigError::missing_rules());
    }

    config.error.fill_defaults();

    for rule in &config.headers {
        validate_rule(rule)?;
    }

    StatusCode::from_u16(config.error.statuscode)
        .map_err(|_| ConfigError::invalid_status_code(config.error.statuscode))
}

/// Validates a single header rule.
///
/// # Errors
///
/// Returns the first failing check, see the module docs for the order.
pub fn validate_rule(rule: &HeaderRuleConfig) -> Result<(), ConfigError> {
    if rule.name.trim().is_empty() {
        return Err(ConfigError::missing_header_name());
    }

    if MatchType::parse(&rule.matchtype) == Some(MatchType::All) && !(rule.contains || rule.regex)
    {
        return Err(ConfigError::invalid_all_without_strategy(&rule.name));
    }

    if rule.matchtype.trim().is_empty() {
        return Err(ConfigError::missing_match_type(&rule.name));
    }

    if rule.values.is_empty() {
        return Err(ConfigError::missing_values());
    }

    if rule.values.iter().any(|v| v.trim().is_empty()) {
        return Err(ConfigError::empty_value());
    }

    Ok(())
}

/// Returns the kind of the first validation failure, if any.
pub fn first_failure(config: &PolicyConfig) -> Option<ConfigErrorKind> {
    validate(&mut config.clone()).err().map(|e| e.kind())
}
